use std::path::Path;
use vergen::{vergen, Config};

fn main() {
    let mut cfg = Config::default();
    let in_git_repo = Path::new(".git").exists();
    *cfg.git_mut().enabled_mut() = in_git_repo;
    if let Err(err) = vergen(cfg) {
        panic!("Unable to generate build information: {}", err);
    }

    // `version` prints the commit; outside a checkout there is none.
    if !in_git_repo {
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    }
}
