//! Shared fixture for CLI integration tests

use assert_cmd::Command;
use reuni_client::mock_server::MockServer;
use reuni_client::{ConfigurationMap, Scope};
use tempfile::TempDir;
use tokio::runtime::Runtime;

pub const TOKEN: &str = "integration-token";

/// A mock configuration service plus an isolated HOME for the binary.
///
/// Field order matters: the server is dropped before the runtime that
/// drives it.
pub struct CliTestFixture {
    pub server: MockServer,
    home: TempDir,
    _runtime: Runtime,
}

impl CliTestFixture {
    pub fn new() -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let server = runtime.block_on(MockServer::start(TOKEN))?;

        Ok(Self {
            server,
            home: TempDir::new()?,
            _runtime: runtime,
        })
    }

    /// Fixture with acme/api/prod at version 3 holding `{"TIMEOUT": "30"}`.
    pub fn seeded() -> anyhow::Result<Self> {
        let fixture = Self::new()?;
        let scope = scope();
        fixture.server.seed(&scope, mapping(&[("TIMEOUT", "10")]));
        fixture.server.seed(&scope, mapping(&[("TIMEOUT", "20")]));
        fixture.server.seed(&scope, mapping(&[("TIMEOUT", "30")]));
        Ok(fixture)
    }

    /// `reuni configuration <args>` pointed at the mock service.
    pub fn configuration(&self, args: &[&str]) -> Command {
        let mut cmd = self.bare_command();
        cmd.arg("configuration")
            .args(args)
            .env("REUNI_SERVER_URL", self.server.url())
            .env("REUNI_TOKEN", TOKEN);
        cmd
    }

    /// The binary with a clean environment and no credentials.
    pub fn bare_command(&self) -> Command {
        let mut cmd = Command::cargo_bin("reuni").expect("reuni binary should be built");
        cmd.env_remove("REUNI_SERVER_URL")
            .env_remove("REUNI_TOKEN")
            .env_remove("RUST_LOG")
            .env("HOME", self.home.path())
            .env("REUNI_TEST_MODE", "1");
        cmd
    }
}

/// Base URL of a loopback port with nothing listening on it.
pub fn unreachable_url() -> anyhow::Result<String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(format!("http://127.0.0.1:{port}"))
}

pub fn scope() -> Scope {
    Scope::new("acme", "api", "prod")
}

pub fn scope_flags() -> Vec<&'static str> {
    vec!["-o", "acme", "-s", "api", "-n", "prod"]
}

pub fn mapping(pairs: &[(&str, &str)]) -> ConfigurationMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
