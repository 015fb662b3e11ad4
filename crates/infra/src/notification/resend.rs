//! Resend 通知送信実装
//!
//! Resend の HTTP API (`POST /emails`) を使用してメールを送信する。
//! 本番環境で使用する。

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use plantamelem_domain::notification::{EmailMessage, NotificationError};
use serde_json::json;

use super::NotificationSender;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// Resend 通知送信
///
/// `reqwest::Client` をラップし、Resend API に JSON を POST する。
pub struct ResendNotificationSender {
    client:       reqwest::Client,
    api_key:      String,
    from_address: String,
}

impl ResendNotificationSender {
    /// 新しい Resend 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `api_key`: Resend の API キー
    /// - `from_address`: 送信元メールアドレス（Resend でドメイン検証済みであること）
    pub fn new(api_key: String, from_address: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            from_address,
        }
    }
}

#[async_trait]
impl NotificationSender for ResendNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let mut payload = json!({
            "from": self.from_address,
            "to": [email.to],
            "subject": email.subject,
            "html": email.html_body,
            "text": email.text_body,
        });

        // Resend は添付内容を base64 で受け取る
        if let Some(att) = &email.attachment {
            payload["attachments"] = json!([{
                "filename": att.file_name,
                "content": STANDARD.encode(&att.content),
                "content_type": att.content_type,
            }]);
        }

        let response = self
            .client
            .post(RESEND_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotificationError::SendFailed(format!("Resend リクエスト失敗: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NotificationError::SendFailed(format!(
                "Resend 送信失敗: {status}: {body}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResendNotificationSender>();
    }
}
