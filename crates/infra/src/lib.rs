//! # Planta Melem インフラ層
//!
//! 外部システムとの通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **メール送信**: SMTP / Resend API / Noop の 3 バックエンド
//!
//! ## 依存関係
//!
//! ```text
//! order-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層に依存しない（依存性逆転の原則）。
//!
//! ## モジュール構成
//!
//! - [`notification`] - `NotificationSender` トレイトと各バックエンド実装
//! - [`mock`] - テスト用モック送信実装（`test-utils` feature）

pub mod notification;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
