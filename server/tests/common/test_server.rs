use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use server::api::{AppState, PlayerPage};
use server::http_server::run_http_server_with_listener;
use server::PlaybackStore;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A watchsync server bound to an ephemeral local port
pub struct TestServer {
    pub addr: SocketAddr,
    pub store: PlaybackStore,
    pub video_path: PathBuf,
    cancellation_token: CancellationToken,
    handle: Option<JoinHandle<Result<()>>>,
}

impl TestServer {
    /// Starts a server streaming `video_path` with the built-in player page
    pub async fn start(video_path: impl Into<PathBuf>) -> Result<Self> {
        Self::start_with_page(video_path, PlayerPage::builtin()).await
    }

    pub async fn start_with_page(video_path: impl Into<PathBuf>, page: PlayerPage) -> Result<Self> {
        let video_path = video_path.into();
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let store = PlaybackStore::new();
        let state = AppState::new(store.clone(), page, video_path.clone());
        let cancellation_token = CancellationToken::new();

        let handle = tokio::spawn(run_http_server_with_listener(
            listener,
            state,
            cancellation_token.clone(),
        ));

        Ok(Self {
            addr,
            store,
            video_path,
            cancellation_token,
            handle: Some(handle),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Cancels the server and waits for it to finish serving
    pub async fn shutdown(mut self) -> Result<()> {
        self.cancellation_token.cancel();
        if let Some(handle) = self.handle.take() {
            handle.await??;
        }
        Ok(())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.cancellation_token.cancel();
    }
}
