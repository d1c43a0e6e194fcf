//! 設定 - コマンドライン引数と環境変数 (.env も可)

use clap::{Args, Parser};
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// アップロード画像の上限 (5MB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5_000_000;

/// サーバー全体の設定
#[derive(Debug, Clone, Parser)]
#[command(name = "plant_identifier", version, about = "画像から植物を判定するHTTPサーバー")]
pub struct Config {
    /// バインドするホスト
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// 待ち受けポート
    #[arg(short = 'p', long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// アップロード画像の最大バイト数
    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    #[command(flatten)]
    pub gemini: GeminiConfig,
}

impl Config {
    /// 待ち受けアドレス
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Gemini API の接続設定
#[derive(Clone, Args)]
pub struct GeminiConfig {
    /// Google AI Studio の APIキー
    #[arg(long = "api-key", env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// 使用するモデル
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub model: String,

    /// APIのベースURL
    #[arg(
        long,
        env = "GEMINI_API_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub api_base_url: String,
}

// APIキーはログに出さない
impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let config =
            Config::try_parse_from(["plant_identifier", "--api-key", "secret"]).unwrap();
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
    }

    #[test]
    fn socket_addr_from_args() {
        let config = Config::try_parse_from([
            "plant_identifier",
            "--api-key",
            "secret",
            "--host",
            "0.0.0.0",
            "-p",
            "8080",
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn debug_hides_api_key() {
        let config =
            Config::try_parse_from(["plant_identifier", "--api-key", "secret"]).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
