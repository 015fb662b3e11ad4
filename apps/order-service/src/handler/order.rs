//! # 注文ハンドラ
//!
//! `POST /api/order` に対応するハンドラとリクエスト DTO を定義する。
//!
//! ## 受け付けるリクエスト形式
//!
//! ストアフロントの世代によって 2 種類のボディが送られてくるため、
//! 両方を受け付ける:
//!
//! - **ネスト形式**（正規形）: `{customer, items, total, lang, currencyCode}`
//! - **フラット形式**（旧世代）: トップレベルに注文者フィールドと
//!   単一商品（`product` / `quantity` / `price`）を持つ
//!
//! どちらの形式も、明示的なパースステップで検証済みの `Order` に変換してから
//! ユースケースに渡す。部分的に欠けた曖昧な構造をそのまま流さない。

use std::sync::Arc;

use axum::{
   Json,
   extract::State,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use plantamelem_domain::{
   DomainError,
   locale::Language,
   order::{Customer, Order, OrderLine},
};
use serde::Deserialize;

use crate::{
   error::{ApiError, MessageResponse},
   usecase::OrderUseCase,
};

/// 注文送信成功時のメッセージ
const ORDER_SENT: &str = "Narudžbina uspešno poslata!";

/// 注文ハンドラの状態
pub struct OrderState {
   pub usecase: OrderUseCase,
}

/// 注文者情報の DTO
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
   #[serde(default)]
   first_name:  String,
   #[serde(default)]
   last_name:   String,
   #[serde(default)]
   email:       String,
   #[serde(default)]
   phone:       String,
   #[serde(default)]
   address:     String,
   #[serde(default)]
   city:        String,
   #[serde(default)]
   postal_code: String,
   #[serde(default)]
   country:     String,
}

impl From<CustomerDto> for Customer {
   fn from(dto: CustomerDto) -> Self {
      Self {
         first_name:  dto.first_name,
         last_name:   dto.last_name,
         email:       dto.email,
         phone:       dto.phone,
         address:     dto.address,
         city:        dto.city,
         postal_code: dto.postal_code,
         country:     dto.country,
      }
   }
}

/// 明細行の DTO
///
/// 単価フィールドは世代によって `basePrice` と `unitPrice` の両方が存在する。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
   #[serde(default)]
   title:      String,
   #[serde(default)]
   quantity:   Option<u32>,
   #[serde(default, alias = "unitPrice")]
   base_price: Option<f64>,
}

/// ネスト形式の注文リクエスト（正規形）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedOrderRequest {
   customer:      CustomerDto,
   #[serde(default)]
   items:         Vec<OrderItemDto>,
   #[serde(default)]
   total:         Option<f64>,
   #[serde(default)]
   lang:          Option<String>,
   #[serde(default)]
   currency_code: Option<String>,
}

/// フラット形式の注文リクエスト（旧世代のストアフロント）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatOrderRequest {
   #[serde(default)]
   first_name:    String,
   #[serde(default)]
   last_name:     String,
   #[serde(default)]
   email:         String,
   #[serde(default)]
   phone:         String,
   #[serde(default)]
   address:       String,
   #[serde(default)]
   city:          String,
   #[serde(default)]
   postal_code:   String,
   #[serde(default)]
   country:       String,
   #[serde(default)]
   product:       String,
   #[serde(default)]
   quantity:      Option<u32>,
   #[serde(default)]
   price:         Option<f64>,
   #[serde(default)]
   total:         Option<f64>,
   #[serde(default)]
   lang:          Option<String>,
   #[serde(default)]
   currency_code: Option<String>,
}

/// 注文リクエスト（両形式の受け口）
///
/// untagged なので `customer` キーを持つボディはネスト形式として、
/// それ以外はフラット形式としてパースされる。
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OrderRequest {
   Nested(NestedOrderRequest),
   Flat(FlatOrderRequest),
}

impl OrderRequest {
   /// クライアントが送信した合計金額（ログ比較用）
   ///
   /// この値はレンダリングには使用しない。合計は常に明細行から再計算する。
   fn client_total(&self) -> Option<f64> {
      match self {
         Self::Nested(req) => req.total,
         Self::Flat(req) => req.total,
      }
   }

   /// 検証済みの注文に変換する
   fn into_order(self) -> Result<Order, DomainError> {
      match self {
         Self::Nested(req) => {
            let lines = req
               .items
               .into_iter()
               .map(|item| OrderLine::new(item.title, item.quantity, item.base_price))
               .collect();
            let language = Language::from_tag(req.lang.as_deref().unwrap_or(""));

            Order::new(req.customer.into(), lines, language, req.currency_code)
         }
         Self::Flat(req) => {
            let customer = Customer {
               first_name:  req.first_name,
               last_name:   req.last_name,
               email:       req.email,
               phone:       req.phone,
               address:     req.address,
               city:        req.city,
               postal_code: req.postal_code,
               country:     req.country,
            };

            // 商品情報が何も無ければ明細行は作らない
            let lines = if req.product.is_empty() && req.quantity.is_none() && req.price.is_none()
            {
               vec![]
            } else {
               vec![OrderLine::new(req.product, req.quantity, req.price)]
            };
            let language = Language::from_tag(req.lang.as_deref().unwrap_or(""));

            Order::new(customer, lines, language, req.currency_code)
         }
      }
   }
}

/// 注文を受け付けて通知メールを送信する
///
/// ## エンドポイント
/// POST /api/order
///
/// ## 処理フロー
/// 1. リクエストを検証済みの `Order` にパース（email 欠落 → 400）
/// 2. ユースケースを呼び出し（販売者宛 → 顧客宛の直列送信）
/// 3. `{message}` 形式のレスポンスを返す（送信失敗 → 500）
pub async fn submit_order(
   State(state): State<Arc<OrderState>>,
   Json(req): Json<OrderRequest>,
) -> Result<Response, ApiError> {
   let client_total = req.client_total();
   let order = req.into_order()?;

   // クライアント送信の合計は信用せず再計算する。差異はログにだけ残す
   if let Some(total) = client_total {
      if (total - order.total()).abs() > 0.005 {
         tracing::debug!(
            client_total = total,
            computed_total = order.total(),
            "クライアント送信の合計と再計算結果が一致しない（再計算値を使用）"
         );
      }
   }

   state
      .usecase
      .submit_order(&order)
      .await
      .map_err(ApiError::order_delivery)?;

   Ok((StatusCode::OK, Json(MessageResponse::new(ORDER_SENT))).into_response())
}
