//! # ヘルスチェックハンドラ
//!
//! Order Service の稼働状態を確認するためのエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0"
//! }
//! ```

use axum::Json;
use serde::Serialize;

/// ヘルスチェックレスポンス
#[derive(Debug, Serialize)]
pub struct HealthResponse {
   /// 稼働状態（`"healthy"` または `"unhealthy"`）
   pub status:  String,
   /// アプリケーションバージョン（Cargo.toml から取得）
   pub version: String,
}

/// ヘルスチェックエンドポイント
///
/// サーバーが正常に稼働していることを確認するためのエンドポイント。
/// メール送信バックエンドへの疎通は確認しない（送信時に初めて判明する）。
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse {
      status:  "healthy".to_string(),
      version: env!("CARGO_PKG_VERSION").to_string(),
   })
}
