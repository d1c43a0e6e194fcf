//! HTTPサーバー

mod error;
mod handler;
mod upload;

pub use error::ApiError;
pub use handler::IMAGE_FIELD;
pub use upload::{ImageMime, Upload};

use crate::config::Config;
use crate::identify::Identifier;
use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// マルチパートの境界やヘッダー分の余裕
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// ハンドラー間で共有する状態
#[derive(Clone)]
pub struct AppState {
    pub identifier: Identifier,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(identifier: Identifier, max_upload_bytes: usize) -> Self {
        Self {
            identifier,
            max_upload_bytes,
        }
    }
}

/// ルーターを作成
pub fn router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        .route("/api/identify", post(handler::identify))
        .route("/api/health", get(handler::health))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// サーバーを起動し、終了シグナルまで待ち受ける
pub async fn serve(config: &Config, identifier: Identifier) -> Result<()> {
    let addr = config.socket_addr();
    let app = router(AppState::new(identifier, config.max_upload_bytes));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("アドレスのバインドに失敗: {}", addr))?;

    tracing::info!(%addr, model = %config.gemini.model, "HTTPサーバー起動");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTPサーバーの実行に失敗")?;

    tracing::info!("HTTPサーバー停止");
    Ok(())
}

/// Ctrl-C または SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Ctrl-C ハンドラーの登録に失敗");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "SIGTERM ハンドラーの登録に失敗");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("終了シグナルを受信");
}
