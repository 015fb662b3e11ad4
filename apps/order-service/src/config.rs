//! # Order Service 設定
//!
//! 環境変数から Order Service サーバーの設定を読み込む。
//! すべての設定はプロセス起動時に一度だけ読み込まれ、以後不変。

use std::env;

/// ストアフロントの既定オリジン（`ALLOWED_ORIGINS` 未設定時に使用）
const DEFAULT_ORIGINS: &str =
   "http://localhost:8080,https://planta-melem.vercel.app,https://www.plantamelem.com";

/// Order Service サーバーの設定
#[derive(Debug, Clone)]
pub struct OrderConfig {
   /// バインドアドレス
   pub host:            String,
   /// ポート番号
   pub port:            u16,
   /// CORS で許可するオリジン
   pub allowed_origins: Vec<String>,
   /// 通知設定
   pub notification:    NotificationConfig,
}

/// 通知機能の設定
///
/// `NOTIFICATION_BACKEND` 環境変数で送信バックエンドを切り替える:
/// - `smtp`: Mailpit（開発）/ SMTP リレー経由で送信
/// - `resend`: Resend API 経由で送信（本番）
/// - `noop`: 送信しない（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NotificationConfig {
   /// 送信バックエンド（"smtp" | "resend" | "noop"）
   pub backend:          String,
   /// SMTP ホスト（backend=smtp の場合に使用）
   pub smtp_host:        String,
   /// SMTP ポート（backend=smtp の場合に使用）
   pub smtp_port:        u16,
   /// Resend API キー（backend=resend の場合に使用）
   pub resend_api_key:   String,
   /// 送信元メールアドレス
   pub from_address:     String,
   /// 販売者の通知受信アドレス（未設定時は送信元と同じ）
   pub merchant_address: String,
}

impl OrderConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, env::VarError> {
      Ok(Self {
         host: env::var("ORDER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
         port: env::var("ORDER_PORT")
            .expect("ORDER_PORT が設定されていません")
            .parse()
            .expect("ORDER_PORT は有効なポート番号である必要があります"),
         allowed_origins: env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_ORIGINS.to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect(),
         notification: NotificationConfig::from_env(),
      })
   }
}

impl NotificationConfig {
   /// 環境変数から通知設定を読み込む
   fn from_env() -> Self {
      let from_address = env::var("EMAIL_FROM")
         .unwrap_or_else(|_| "narudzbe@plantamelem.com".to_string());

      Self {
         backend:          env::var("NOTIFICATION_BACKEND").unwrap_or_else(|_| "noop".to_string()),
         smtp_host:        env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
         smtp_port:        env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("SMTP_PORT は有効なポート番号である必要があります"),
         resend_api_key:   env::var("RESEND_API_KEY").unwrap_or_default(),
         merchant_address: env::var("MERCHANT_EMAIL").unwrap_or_else(|_| from_address.clone()),
         from_address,
      }
   }
}
