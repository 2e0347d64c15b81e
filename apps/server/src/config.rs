use std::{net::SocketAddr, time::Duration};

use anyhow::{anyhow, Context};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub backend_url: String,
    pub backend_key: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup (the process env in production).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("PR_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid PR_LISTEN_ADDR")?;
        let backend_url = required(&lookup, "PR_BACKEND_URL")?;
        let backend_key = required(&lookup, "PR_BACKEND_KEY")?;
        let cors_allow = lookup("PR_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = match lookup("PR_REQUEST_TIMEOUT_MS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid PR_REQUEST_TIMEOUT_MS '{}'", raw))?,
            None => 30000,
        };
        let static_dir = lookup("PR_STATIC_DIR").filter(|s| !s.trim().is_empty());
        Ok(Self {
            listen_addr,
            backend_url,
            backend_key,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
        })
    }
}

fn required<F>(lookup: &F, key: &str) -> anyhow::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| anyhow!("Missing required environment variable {}", key))
}
