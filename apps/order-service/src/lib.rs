//! # Order Service ライブラリ
//!
//! 注文・お問い合わせ通知サービスのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: DI とルーター構築（テストからも利用する）
//! - `config`: 環境変数からの設定読み込み
//! - `error`: API エラーと HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `usecase`: メールレンダリングと送信オーケストレーション

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
