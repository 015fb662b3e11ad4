//! `POST /api/contact` の統合テスト

mod common;

use axum::http::StatusCode;
use common::{MERCHANT_EMAIL, make_app, post_json};
use plantamelem_infra::mock::MockNotificationSender;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_message欠落のお問い合わせは400になり送信は行われない() {
   let sender = MockNotificationSender::new();
   let app = make_app(&sender);

   let body = json!({ "name": "Ana", "email": "ana@example.com" });
   let (status, response) = post_json(app, "/api/contact", body).await;

   assert_eq!(status, StatusCode::BAD_REQUEST);
   assert_eq!(response["message"], "Ime, email i poruka su obavezni.");
   assert_eq!(sender.sent_count(), 0);
}

#[tokio::test]
async fn test_正常なお問い合わせは200になり販売者宛に1通送信される() {
   let sender = MockNotificationSender::new();
   let app = make_app(&sender);

   let body = json!({
      "name": "Ana",
      "email": "ana@example.com",
      "phone": "+387 61 111 111",
      "message": "Imam pitanje o proizvodu."
   });
   let (status, response) = post_json(app, "/api/contact", body).await;

   assert_eq!(status, StatusCode::OK);
   assert_eq!(response["message"], "Poruka uspešno poslata!");

   let sent = sender.sent();
   assert_eq!(sent.len(), 1);
   assert_eq!(sent[0].to, MERCHANT_EMAIL);
   assert_eq!(sent[0].subject, "Nova poruka sa sajta");
   assert!(sent[0].text_body.contains("Imam pitanje o proizvodu."));
}

#[tokio::test]
async fn test_送信が失敗すると500になる() {
   let sender = MockNotificationSender::failing_for(MERCHANT_EMAIL);
   let app = make_app(&sender);

   let body = json!({ "name": "Ana", "email": "ana@example.com", "message": "poruka" });
   let (status, response) = post_json(app, "/api/contact", body).await;

   assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
   assert_eq!(response["message"], "Greška prilikom slanja poruke.");
   assert_eq!(sender.sent_count(), 0);
}
