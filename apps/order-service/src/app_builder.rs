//! # アプリケーション構築
//!
//! DI（送信バックエンド・State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。
//!
//! テストはこのモジュールの `build_app` にモック送信を注入し、
//! `tower::ServiceExt::oneshot` でルーター全体を駆動する。

use std::sync::Arc;

use axum::{
   Router,
   http::{HeaderValue, Method, header},
   routing::{get, post},
};
use plantamelem_infra::notification::NotificationSender;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
   config::OrderConfig,
   handler::{ContactState, OrderState, health_check, submit_contact, submit_order},
   usecase::{ContactUseCase, OrderMailRenderer, OrderUseCase},
};

/// DI コンテナの構築とルーター定義を行う
///
/// 送信バックエンドを外部から受け取り、レンダラー → ユースケース → State →
/// Router の順に組み立てる。
pub fn build_app(config: &OrderConfig, sender: Arc<dyn NotificationSender>) -> Router {
   let merchant_address = config.notification.merchant_address.clone();

   let order_state = Arc::new(OrderState {
      usecase: OrderUseCase::new(
         sender.clone(),
         OrderMailRenderer::new(merchant_address.clone()),
      ),
   });

   let contact_state = Arc::new(ContactState {
      usecase: ContactUseCase::new(sender, OrderMailRenderer::new(merchant_address)),
   });

   Router::new()
      .route("/health", get(health_check))
      .route("/api/order", post(submit_order))
      .with_state(order_state)
      .route("/api/contact", post(submit_contact))
      .with_state(contact_state)
      .layer(cors_layer(&config.allowed_origins))
      .layer(TraceLayer::new_for_http())
}

/// 許可オリジンのリストから CORS レイヤーを構築する
///
/// オリジンは設定データであり、コードには固定しない。
/// パースできないオリジンは警告を出して読み飛ばす。
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
   let origins: Vec<HeaderValue> = allowed_origins
      .iter()
      .filter_map(|origin| match origin.parse() {
         Ok(value) => Some(value),
         Err(_) => {
            tracing::warn!(origin = %origin, "不正なオリジンを読み飛ばします");
            None
         }
      })
      .collect();

   CorsLayer::new()
      .allow_origin(origins)
      .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
      .allow_headers([header::CONTENT_TYPE])
      .allow_credentials(true)
}
