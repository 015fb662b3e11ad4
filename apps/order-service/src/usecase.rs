//! # ユースケース層
//!
//! Order Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: メール送信は `Arc<dyn NotificationSender>` で外部から注入し、
//!   テストではモックに差し替える
//! - **薄いハンドラ**: ハンドラはパースとレスポンス変換だけを行い、
//!   送信フローはユースケースに集約する
//!
//! ## モジュール構成
//!
//! - `notification`: メールレンダラー（純粋関数）
//! - `order`: 注文の送信オーケストレーション
//! - `contact`: お問い合わせの送信オーケストレーション

pub mod contact;
pub mod notification;
pub mod order;

pub use contact::ContactUseCase;
pub use notification::OrderMailRenderer;
pub use order::OrderUseCase;
