use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// File name looked up in the working directory when no video path is configured
pub const DEFAULT_VIDEO_FILENAME: &str = "synced_video.mp4";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Process configuration, read from `WATCHSYNC_*` environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind the HTTP server to
    pub host: String,
    /// Port to bind the HTTP server to
    pub port: u16,
    /// Video file served at `/video/stream`
    pub video_path: PathBuf,
    /// Optional HTML template replacing the built-in player page
    pub template_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn new(video_path: impl Into<PathBuf>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            video_path: video_path.into(),
            template_path: None,
        }
    }

    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        let current_dir = env::current_dir().context("Failed to get current directory")?;
        Self::from_lookup(current_dir, |key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    /// Relative default paths resolve against `base_dir`.
    pub fn from_lookup<F>(base_dir: PathBuf, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("WATCHSYNC_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("WATCHSYNC_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("WATCHSYNC_PORT must be a port number, got {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        let video_path = lookup("WATCHSYNC_VIDEO_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| base_dir.join(DEFAULT_VIDEO_FILENAME));

        let template_path = lookup("WATCHSYNC_TEMPLATE_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            video_path,
            template_path,
        })
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_video_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.video_path = path.into();
        self
    }

    pub fn with_template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = Some(path.into());
        self
    }

    /// Address string suitable for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
