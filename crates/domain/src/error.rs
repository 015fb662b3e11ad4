//! # ドメイン層エラー定義
//!
//! ビジネスルール違反を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **型による分類**: エラーの種類を列挙型で明示し、パターンマッチで処理可能に
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//! - **利用者向けメッセージ**: `Validation` が保持する文字列はそのまま
//!   ストアフロント利用者に返されるため、セルビア語で記述する

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
/// このサービスで検証されるのは必須フィールドの有無のみであるため、
/// バリアントは `Validation` の 1 種類だけで足りる。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー（必須フィールドの欠落）
    ///
    /// 保持するメッセージは利用者にそのまま返される（400 Bad Request）。
    #[error("{0}")]
    Validation(String),
}
