//! 植物判定サーバー - Gemini API を使用した画像からの植物判定
//!
//! # 機能
//! - 画像と固定プロンプトを Gemini API に送信
//! - 回答テキストを7項目（一般名、学名、科、説明、原産地、用途、豆知識）に分解
//! - マルチパートで画像を受け取るHTTP API

pub mod config;
pub mod identify;
pub mod parser;
pub mod server;
pub mod vision;

pub use identify::{Identifier, IdentifyError};
pub use parser::PlantInfo;
