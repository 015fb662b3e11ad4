//! # テスト用モック送信実装
//!
//! ユースケース・ハンドラテストで使用するインメモリのメール送信モック。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! plantamelem-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use plantamelem_domain::notification::{EmailMessage, NotificationError};

use crate::notification::NotificationSender;

/// 記録型のモック送信実装
///
/// 送信されたメールをすべて記録する。`failing_for` で指定した宛先への
/// 送信は失敗させられるため、部分失敗のシナリオを再現できる。
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    sent:    Arc<Mutex<Vec<EmailMessage>>>,
    fail_to: Arc<Mutex<Option<String>>>,
}

impl MockNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定した宛先への送信を失敗させるモックを作成する
    pub fn failing_for(recipient: impl Into<String>) -> Self {
        Self {
            sent:    Arc::new(Mutex::new(Vec::new())),
            fail_to: Arc::new(Mutex::new(Some(recipient.into()))),
        }
    }

    /// これまでに送信されたメールを返す（送信順）
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// 送信されたメールの数を返す
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        if self.fail_to.lock().unwrap().as_deref() == Some(email.to.as_str()) {
            return Err(NotificationError::SendFailed(format!(
                "モック: {} への送信を失敗させました",
                email.to
            )));
        }

        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_email(to: &str) -> EmailMessage {
        EmailMessage {
            to:         to.to_string(),
            subject:    "件名".to_string(),
            html_body:  "<p>本文</p>".to_string(),
            text_body:  "本文".to_string(),
            attachment: None,
        }
    }

    #[tokio::test]
    async fn test_送信されたメールが順番に記録される() {
        let sender = MockNotificationSender::new();

        sender.send_email(&make_email("a@example.com")).await.unwrap();
        sender.send_email(&make_email("b@example.com")).await.unwrap();

        let sent = sender.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "a@example.com");
        assert_eq!(sent[1].to, "b@example.com");
    }

    #[tokio::test]
    async fn test_指定した宛先への送信だけが失敗する() {
        let sender = MockNotificationSender::failing_for("b@example.com");

        assert!(sender.send_email(&make_email("a@example.com")).await.is_ok());
        assert!(sender.send_email(&make_email("b@example.com")).await.is_err());

        // 失敗した送信は記録されない
        assert_eq!(sender.sent_count(), 1);
    }
}
