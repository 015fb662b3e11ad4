//! # 通知
//!
//! メール通知に関するドメインモデルを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 要件 |
//! |---|------------|------|
//! | [`EmailMessage`] | 通知ペイロード | レンダラーが生成し、送信後は破棄される |
//! | [`EmailAttachment`] | インライン添付 | 任意。送信インターフェースの一部 |
//!
//! ## 設計方針
//!
//! - **送信方式からの独立**: SMTP / Resend / Noop のどのバックエンドでも
//!   同じ `EmailMessage` を受け取る
//! - **不変条件**: 1 注文 = 必ず 2 通（販売者宛・顧客宛）、
//!   1 お問い合わせ = 必ず 1 通（販売者宛）

use thiserror::Error;

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    ///
    /// プロバイダ固有のエラー内容を保持する。この内容はサーバーログにのみ
    /// 出力し、利用者へのレスポンスには含めない。
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),
}

/// メールメッセージ
///
/// レンダラーの出力。`NotificationSender` に渡される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// 送信先メールアドレス
    pub to:         String,
    /// 件名
    pub subject:    String,
    /// HTML 本文
    pub html_body:  String,
    /// プレーンテキスト本文
    pub text_body:  String,
    /// インライン添付（任意）
    pub attachment: Option<EmailAttachment>,
}

/// メール添付ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAttachment {
    /// 表示用ファイル名
    pub file_name:    String,
    /// MIME タイプ（例: "image/png"）
    pub content_type: String,
    /// ファイル内容
    pub content:      Vec<u8>,
}
