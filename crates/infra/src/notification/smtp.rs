//! SMTP 通知送信実装
//!
//! lettre の `AsyncSmtpTransport` を使用してメールを送信する。
//! 開発環境では Mailpit（ローカル SMTP サーバー）に接続する。

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Attachment, Message, MultiPart, SinglePart, header::ContentType},
};
use plantamelem_domain::notification::{EmailMessage, NotificationError};

use super::NotificationSender;

/// SMTP 通知送信
///
/// `lettre::AsyncSmtpTransport<Tokio1Executor>` をラップする。
/// Mailpit（開発）や SMTP リレー（テスト環境）で使用する。
pub struct SmtpNotificationSender {
    transport:    AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpNotificationSender {
    /// 新しい SMTP 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `host`: SMTP サーバーのホスト名（例: "localhost"）
    /// - `port`: SMTP サーバーのポート番号（例: 1025 for Mailpit）
    /// - `from_address`: 送信元メールアドレス
    pub fn new(host: &str, port: u16, from_address: String) -> Self {
        // builder_dangerous: TLS なしで接続（Mailpit 等のローカル SMTP 向け）
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self {
            transport,
            from_address,
        }
    }
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let builder = Message::builder()
            .from(self.from_address.parse().map_err(|e| {
                NotificationError::SendFailed(format!("送信元アドレス不正: {e}"))
            })?)
            .to(email
                .to
                .parse()
                .map_err(|e| NotificationError::SendFailed(format!("宛先アドレス不正: {e}")))?)
            .subject(&email.subject);

        let alternative = MultiPart::alternative()
            .singlepart(
                SinglePart::builder()
                    .header(ContentType::TEXT_PLAIN)
                    .body(email.text_body.clone()),
            )
            .singlepart(
                SinglePart::builder()
                    .header(ContentType::TEXT_HTML)
                    .body(email.html_body.clone()),
            );

        // 添付がある場合は multipart/mixed で包む
        let message = match &email.attachment {
            Some(att) => {
                let content_type = ContentType::parse(&att.content_type).map_err(|e| {
                    NotificationError::SendFailed(format!("添付の MIME タイプ不正: {e}"))
                })?;
                let part =
                    Attachment::new(att.file_name.clone()).body(att.content.clone(), content_type);
                builder.multipart(MultiPart::mixed().multipart(alternative).singlepart(part))
            }
            None => builder.multipart(alternative),
        }
        .map_err(|e| NotificationError::SendFailed(format!("メッセージ構築失敗: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SMTP 送信失敗: {e}")))?;

        Ok(())
    }
}
