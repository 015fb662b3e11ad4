//! 統合テスト用のヘルパー
//!
//! モック送信を注入したルーターを組み立て、`oneshot` でリクエストを流す。

use std::sync::Arc;

use axum::{
   Router,
   body::Body,
   http::{Request, StatusCode, header},
};
use plantamelem_infra::mock::MockNotificationSender;
use plantamelem_order_service::{
   app_builder::build_app,
   config::{NotificationConfig, OrderConfig},
};
use tower::ServiceExt;

pub const MERCHANT_EMAIL: &str = "prodavac@plantamelem.com";

pub fn make_config() -> OrderConfig {
   OrderConfig {
      host:            "127.0.0.1".to_string(),
      port:            0,
      allowed_origins: vec!["http://localhost:8080".to_string()],
      notification:    NotificationConfig {
         backend:          "noop".to_string(),
         smtp_host:        "localhost".to_string(),
         smtp_port:        1025,
         resend_api_key:   String::new(),
         from_address:     "narudzbe@plantamelem.com".to_string(),
         merchant_address: MERCHANT_EMAIL.to_string(),
      },
   }
}

pub fn make_app(sender: &MockNotificationSender) -> Router {
   build_app(&make_config(), Arc::new(sender.clone()))
}

/// JSON ボディを POST し、ステータスとレスポンスボディを返す
pub async fn post_json(
   app: Router,
   uri: &str,
   body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
   let request = Request::builder()
      .method("POST")
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap();

   let response = app.oneshot(request).await.unwrap();
   let status = response.status();
   let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
   let json = serde_json::from_slice(&bytes).unwrap();

   (status, json)
}
