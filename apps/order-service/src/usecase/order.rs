//! # 注文ユースケース
//!
//! 検証済みの注文から通知メール 2 通を生成し、直列に送信する。

use std::sync::Arc;

use plantamelem_domain::{notification::NotificationError, order::Order};
use plantamelem_infra::notification::NotificationSender;

use super::OrderMailRenderer;

/// 注文ユースケース
///
/// レンダリング → 販売者宛送信 → 顧客宛送信の順に実行する。
/// 送信は厳密に直列で、先行する送信が失敗した場合は後続を試みない。
pub struct OrderUseCase {
   sender:   Arc<dyn NotificationSender>,
   renderer: OrderMailRenderer,
}

impl OrderUseCase {
   pub fn new(sender: Arc<dyn NotificationSender>, renderer: OrderMailRenderer) -> Self {
      Self { sender, renderer }
   }

   /// 注文の通知メールを送信する
   ///
   /// # エラー
   ///
   /// どちらかの送信が失敗した場合は `NotificationError` を返す。
   /// 販売者宛が既に送信済みでも顧客宛が失敗すればエラーになる
   /// （補償処理は行わない。再送時の重複は許容される仕様）。
   pub async fn submit_order(&self, order: &Order) -> Result<(), NotificationError> {
      let (merchant_mail, customer_mail) = self.renderer.render_order(order);

      self.sender.send_email(&merchant_mail).await?;
      self.sender.send_email(&customer_mail).await?;

      tracing::info!(
         customer = %customer_mail.to,
         lines = order.lines().len(),
         "注文通知メールを送信しました"
      );

      Ok(())
   }
}

#[cfg(test)]
mod tests {
   use plantamelem_domain::{
      locale::Language,
      order::{Customer, OrderLine},
   };
   use plantamelem_infra::mock::MockNotificationSender;
   use pretty_assertions::assert_eq;

   use super::*;

   fn make_order() -> Order {
      let customer = Customer {
         first_name: "Marko".to_string(),
         last_name: "Marković".to_string(),
         email: "marko@example.com".to_string(),
         ..Customer::default()
      };
      Order::new(
         customer,
         vec![OrderLine::new("Melem", Some(1), Some(10.0))],
         Language::Sr,
         None,
      )
      .unwrap()
   }

   fn make_usecase(sender: MockNotificationSender) -> OrderUseCase {
      OrderUseCase::new(
         Arc::new(sender),
         OrderMailRenderer::new("prodavac@plantamelem.com".to_string()),
      )
   }

   #[tokio::test]
   async fn test_正常な注文は販売者宛と顧客宛の順に2通送信される() {
      let sender = MockNotificationSender::new();
      let usecase = make_usecase(sender.clone());

      usecase.submit_order(&make_order()).await.unwrap();

      let sent = sender.sent();
      assert_eq!(sent.len(), 2);
      assert_eq!(sent[0].to, "prodavac@plantamelem.com");
      assert_eq!(sent[1].to, "marko@example.com");
   }

   #[tokio::test]
   async fn test_販売者宛の送信が失敗すると顧客宛は試行されない() {
      let sender = MockNotificationSender::failing_for("prodavac@plantamelem.com");
      let usecase = make_usecase(sender.clone());

      let result = usecase.submit_order(&make_order()).await;

      assert!(result.is_err());
      assert_eq!(sender.sent_count(), 0);
   }

   #[tokio::test]
   async fn test_顧客宛の送信が失敗すると販売者宛が送信済みでもエラーになる() {
      let sender = MockNotificationSender::failing_for("marko@example.com");
      let usecase = make_usecase(sender.clone());

      let result = usecase.submit_order(&make_order()).await;

      // 販売者宛は送信済みだが、リクエスト全体としては失敗として報告する
      assert!(result.is_err());
      assert_eq!(sender.sent_count(), 1);
      assert_eq!(sender.sent()[0].to, "prodavac@plantamelem.com");
   }
}
