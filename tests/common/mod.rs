//! Runs the binary against a mock api.
//!
//! Each test starts its own [`MockServer`] and writes a config file
//! pointing to it. The binary is blocking, so it is run on a blocking
//! thread while the server keeps answering on the runtime.

#![allow(dead_code)]

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

pub struct Env {
    pub server: MockServer,
    dir: TempDir,
    config: PathBuf,
}

impl Env {
    pub async fn start() -> Env {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = dir.path().join("config.toml");
        let content = format!("api_url = \"{}\"\ntoken = \"{}\"\n", server.uri(), TOKEN);
        std::fs::write(&config, content).expect("write config");
        Env {
            server,
            dir,
            config,
        }
    }

    /// The binary, configured to talk to the mock server.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("edgectl").expect("binary exists");
        cmd.env_remove("EDGECTL_API_URL")
            .env_remove("EDGECTL_TOKEN")
            .env_remove("EDGECTL_CONFIG")
            .env_remove("RUST_LOG")
            .arg("-c")
            .arg(&self.config);
        cmd
    }

    /// Writes a file into the test's temp directory.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("write file");
        path
    }

    pub fn config_file(&self) -> &PathBuf {
        &self.config
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }
}

pub async fn run(mut cmd: Command) -> Assert {
    tokio::task::spawn_blocking(move || cmd.assert())
        .await
        .expect("command thread")
}
