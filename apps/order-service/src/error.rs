//! # Order Service エラー定義
//!
//! API で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | クライアントに返す内容 |
//! |-----------|----------------|----------------------|
//! | `Validation` | 400 Bad Request | 検証メッセージ（セルビア語）をそのまま返す |
//! | `Delivery` | 500 Internal Server Error | 汎用メッセージのみ。プロバイダのエラーはログにだけ出す |

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use plantamelem_domain::{DomainError, notification::NotificationError};
use serde::Serialize;
use thiserror::Error;

/// 注文送信失敗時の汎用メッセージ
const ORDER_SEND_FAILED: &str = "Greška prilikom slanja narudžbine.";

/// お問い合わせ送信失敗時の汎用メッセージ
const CONTACT_SEND_FAILED: &str = "Greška prilikom slanja poruke.";

/// API レスポンスボディ（成功・失敗とも同じ形）
#[derive(Debug, Serialize)]
pub struct MessageResponse {
   pub message: String,
}

impl MessageResponse {
   pub fn new(message: impl Into<String>) -> Self {
      Self {
         message: message.into(),
      }
   }
}

/// Order Service で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// 必須フィールドの欠落
   #[error("{0}")]
   Validation(String),

   /// メール送信失敗
   ///
   /// プロバイダ固有のエラーは `source` に保持し、サーバーログにのみ出力する。
   #[error("{client_message}")]
   Delivery {
      client_message: &'static str,
      source:         NotificationError,
   },
}

impl ApiError {
   /// 注文通知の送信失敗
   pub fn order_delivery(source: NotificationError) -> Self {
      Self::Delivery {
         client_message: ORDER_SEND_FAILED,
         source,
      }
   }

   /// お問い合わせ通知の送信失敗
   pub fn contact_delivery(source: NotificationError) -> Self {
      Self::Delivery {
         client_message: CONTACT_SEND_FAILED,
         source,
      }
   }
}

impl From<DomainError> for ApiError {
   fn from(e: DomainError) -> Self {
      match e {
         DomainError::Validation(msg) => Self::Validation(msg),
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let (status, message) = match self {
         ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
         ApiError::Delivery {
            client_message,
            source,
         } => {
            tracing::error!(error = %source, "メール送信に失敗");
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               client_message.to_string(),
            )
         }
      };

      (status, Json(MessageResponse::new(message))).into_response()
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_バリデーションエラーは400になる() {
      let response =
         ApiError::Validation("Email je obavezan za potvrdu narudžbine.".to_string())
            .into_response();
      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   }

   #[test]
   fn test_送信エラーは500になる() {
      let response =
         ApiError::order_delivery(NotificationError::SendFailed("timeout".to_string()))
            .into_response();
      assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
   }
}
