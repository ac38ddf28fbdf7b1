use edgectl::cli::opts::MainOpts;
use log::LevelFilter;

fn main() {
    let opts = edgectl::read_args();
    init_logging(&opts);
    log::debug!("Parsed options: {:?}", opts);

    if let Err(err) = edgectl::execute(opts) {
        log::debug!("Command failed: {:?} ({:?})", err.kind(), err);
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins. Otherwise the level follows the number of `-v`
/// flags; a single one only affects the output.
fn init_logging(opts: &MainOpts) {
    let level = match opts.common_opts.verbose {
        0 | 1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_env("RUST_LOG");
    builder.init();
}
