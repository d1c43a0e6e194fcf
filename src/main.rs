//! 植物判定サーバー - メインエントリポイント

use anyhow::Result;
use clap::Parser;
use plant_identifier::config::Config;
use plant_identifier::vision::GeminiClient;
use plant_identifier::{server, Identifier};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 環境変数の読み込み
    dotenvy::dotenv().ok();

    // ロギング初期化
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    tracing::debug!(?config, "設定読み込み完了");

    let client = GeminiClient::new(config.gemini.clone());
    let identifier = Identifier::new(Arc::new(client));

    server::serve(&config, identifier).await
}
