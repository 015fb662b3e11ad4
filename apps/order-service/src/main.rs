//! # Order Service サーバー
//!
//! Planta Melem ストアフロントの注文・お問い合わせを受け付け、
//! 通知メールを送信するサービス。
//!
//! ## 役割
//!
//! - **注文受付**: `POST /api/order` で注文を受け取り、販売者宛と顧客宛の
//!   確認メールを 2 通送信する
//! - **お問い合わせ受付**: `POST /api/contact` で販売者宛に 1 通送信する
//!
//! 永続化・キュー・リトライは行わない。リクエストスコープで完結する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `ORDER_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `ORDER_PORT` | **Yes** | ポート番号 |
//! | `ALLOWED_ORIGINS` | No | CORS 許可オリジン（カンマ区切り） |
//! | `NOTIFICATION_BACKEND` | No | `smtp` / `resend` / `noop`（デフォルト: `noop`） |
//! | `SMTP_HOST` / `SMTP_PORT` | No | backend=smtp の場合の接続先 |
//! | `RESEND_API_KEY` | No | backend=resend の場合の API キー |
//! | `EMAIL_FROM` | No | 送信元メールアドレス |
//! | `MERCHANT_EMAIL` | No | 販売者の通知受信アドレス（デフォルト: 送信元と同じ） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用、メールは Mailpit へ）
//! NOTIFICATION_BACKEND=smtp cargo run -p plantamelem-order-service
//!
//! # 本番環境
//! ORDER_PORT=3000 NOTIFICATION_BACKEND=resend RESEND_API_KEY=... \
//!    cargo run -p plantamelem-order-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use plantamelem_infra::notification::{
   NoopNotificationSender,
   NotificationSender,
   ResendNotificationSender,
   SmtpNotificationSender,
};
use plantamelem_order_service::{
   app_builder::build_app,
   config::{NotificationConfig, OrderConfig},
};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Order Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   tracing_subscriber::registry()
      .with(
         tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,plantamelem=debug".into()),
      )
      .with(tracing_subscriber::fmt::layer())
      .init();

   // 設定読み込み
   let config = OrderConfig::from_env().expect("設定の読み込みに失敗しました");

   tracing::info!(
      "Order Service サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // 送信バックエンドを初期化
   let sender = build_sender(&config.notification);

   // ルーター構築
   let app = build_app(&config, sender);

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Order Service サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}

/// `NOTIFICATION_BACKEND` の値に応じて送信バックエンドを選択する
///
/// 未知の値は `noop` として扱う（警告を出す）。
fn build_sender(config: &NotificationConfig) -> Arc<dyn NotificationSender> {
   match config.backend.as_str() {
      "smtp" => {
         tracing::info!(
            host = %config.smtp_host,
            port = config.smtp_port,
            "SMTP バックエンドを使用します"
         );
         Arc::new(SmtpNotificationSender::new(
            &config.smtp_host,
            config.smtp_port,
            config.from_address.clone(),
         ))
      }
      "resend" => {
         tracing::info!("Resend バックエンドを使用します");
         Arc::new(ResendNotificationSender::new(
            config.resend_api_key.clone(),
            config.from_address.clone(),
         ))
      }
      "noop" => Arc::new(NoopNotificationSender),
      other => {
         tracing::warn!(backend = %other, "未知のバックエンド指定。noop を使用します");
         Arc::new(NoopNotificationSender)
      }
   }
}
