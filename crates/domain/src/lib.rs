//! # Planta Melem ドメイン層
//!
//! 注文・お問い合わせ通知サービスのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **値オブジェクト**: 生成時に不変条件を検証し、不正な値の存在を許さない
//! - **純粋性**: インフラ層（SMTP、外部 API）には一切依存しない
//! - **リクエストスコープ**: すべてのエンティティは 1 リクエストの間だけ存在し、
//!   永続化されない
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`order`] - 注文エンティティ（Customer / OrderLine / Order）
//! - [`contact`] - お問い合わせメッセージ
//! - [`locale`] - 言語とロケールバンドル（sr / en）
//! - [`notification`] - メールメッセージと通知エラー

pub mod contact;
pub mod error;
pub mod locale;
pub mod notification;
pub mod order;

pub use error::DomainError;
