//! # お問い合わせハンドラ
//!
//! `POST /api/contact` に対応するハンドラとリクエスト DTO を定義する。

use std::sync::Arc;

use axum::{
   Json,
   extract::State,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use plantamelem_domain::contact::ContactMessage;
use serde::Deserialize;

use crate::{
   error::{ApiError, MessageResponse},
   usecase::ContactUseCase,
};

/// お問い合わせ送信成功時のメッセージ
const CONTACT_SENT: &str = "Poruka uspešno poslata!";

/// お問い合わせハンドラの状態
pub struct ContactState {
   pub usecase: ContactUseCase,
}

/// お問い合わせリクエスト
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
   #[serde(default)]
   name:    String,
   #[serde(default)]
   email:   String,
   #[serde(default)]
   phone:   Option<String>,
   #[serde(default)]
   message: String,
}

/// お問い合わせを受け付けて通知メールを送信する
///
/// ## エンドポイント
/// POST /api/contact
///
/// ## 処理フロー
/// 1. リクエストを検証済みの `ContactMessage` にパース
///    （name / email / message のいずれか欠落 → 400）
/// 2. ユースケースを呼び出し（販売者宛の 1 通のみ）
/// 3. `{message}` 形式のレスポンスを返す
pub async fn submit_contact(
   State(state): State<Arc<ContactState>>,
   Json(req): Json<ContactRequest>,
) -> Result<Response, ApiError> {
   let contact = ContactMessage::new(req.name, req.email, req.phone, req.message)?;

   state
      .usecase
      .submit_contact(&contact)
      .await
      .map_err(ApiError::contact_delivery)?;

   Ok((StatusCode::OK, Json(MessageResponse::new(CONTACT_SENT))).into_response())
}
