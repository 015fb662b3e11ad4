//! # お問い合わせユースケース
//!
//! 検証済みのお問い合わせから販売者宛の通知メール 1 通を送信する。

use std::sync::Arc;

use plantamelem_domain::{contact::ContactMessage, notification::NotificationError};
use plantamelem_infra::notification::NotificationSender;

use super::OrderMailRenderer;

/// お問い合わせユースケース
pub struct ContactUseCase {
   sender:   Arc<dyn NotificationSender>,
   renderer: OrderMailRenderer,
}

impl ContactUseCase {
   pub fn new(sender: Arc<dyn NotificationSender>, renderer: OrderMailRenderer) -> Self {
      Self { sender, renderer }
   }

   /// お問い合わせ通知メールを送信する
   pub async fn submit_contact(&self, contact: &ContactMessage) -> Result<(), NotificationError> {
      let mail = self.renderer.render_contact(contact);

      self.sender.send_email(&mail).await?;

      tracing::info!(from = %contact.email(), "お問い合わせ通知メールを送信しました");

      Ok(())
   }
}

#[cfg(test)]
mod tests {
   use plantamelem_infra::mock::MockNotificationSender;
   use pretty_assertions::assert_eq;

   use super::*;

   fn make_contact() -> ContactMessage {
      ContactMessage::new("Ana", "ana@example.com", None, "Imam pitanje.").unwrap()
   }

   fn make_usecase(sender: MockNotificationSender) -> ContactUseCase {
      ContactUseCase::new(
         Arc::new(sender),
         OrderMailRenderer::new("prodavac@plantamelem.com".to_string()),
      )
   }

   #[tokio::test]
   async fn test_お問い合わせは販売者宛に1通だけ送信される() {
      let sender = MockNotificationSender::new();
      let usecase = make_usecase(sender.clone());

      usecase.submit_contact(&make_contact()).await.unwrap();

      let sent = sender.sent();
      assert_eq!(sent.len(), 1);
      assert_eq!(sent[0].to, "prodavac@plantamelem.com");
   }

   #[tokio::test]
   async fn test_送信が失敗するとエラーになる() {
      let sender = MockNotificationSender::failing_for("prodavac@plantamelem.com");
      let usecase = make_usecase(sender.clone());

      assert!(usecase.submit_contact(&make_contact()).await.is_err());
      assert_eq!(sender.sent_count(), 0);
   }
}
