use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub base_url: String,
    #[allow(dead_code)]
    child: Child,
}

/// The full HTTP suite needs a reachable PostgreSQL instance; callers skip
/// (with a note) when DATABASE_URL is absent so the suite runs anywhere.
#[allow(dead_code)]
pub fn database_available() -> bool {
    std::env::var("DATABASE_URL").is_ok()
}

#[allow(dead_code)]
pub fn unique_email() -> String {
    format!("user-{}@example.com", uuid::Uuid::new_v4())
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Cargo points this at the freshly built binary
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ideaboard-api"));
        cmd.env("IDEA_API_PORT", port.to_string())
            .env("JWT_SECRET", "integration-test-secret")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Inherit environment so the server sees DATABASE_URL from .env or CI
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                // Consider server ready on any non-404 response
                if resp.status() == StatusCode::OK
                    || resp.status() == StatusCode::SERVICE_UNAVAILABLE
                {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}
