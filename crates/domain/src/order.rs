//! # 注文
//!
//! ストアフロントから送信される注文エンティティを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 要件 |
//! |---|------------|------|
//! | [`Customer`] | 注文者情報 | 必須は `email` のみ、他は空文字列デフォルト |
//! | [`OrderLine`] | 注文明細行 | 数量欠落 → 1、単価欠落 → 0 |
//! | [`Order`] | 注文 | 受信後は不変、1 リクエストの間だけ存在 |
//!
//! ## 設計方針
//!
//! - **生成時の正規化**: 欠落フィールドのデフォルト値はコンストラクタで確定させ、
//!   以降のレンダリング処理に Option を持ち込まない
//! - **合計金額の再計算**: クライアントが送信した合計は信用せず、常に明細行から
//!   再計算する（改ざん対策としての意図的な仕様変更）

use serde::{Deserialize, Serialize};

use crate::{DomainError, locale::Language};

/// 注文確認メールを送るために必須のフィールドが欠けている場合のメッセージ
const EMAIL_REQUIRED: &str = "Email je obavezan za potvrdu narudžbine.";

/// デフォルト通貨コード
const DEFAULT_CURRENCY: &str = "BAM";

/// 注文者情報
///
/// `email` 以外のフィールドは任意で、欠落時は空文字列となる。
/// `email` の検証は [`Order::new`] で行う（注文としての不変条件のため）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub first_name:  String,
    pub last_name:   String,
    pub email:       String,
    pub phone:       String,
    pub address:     String,
    pub city:        String,
    pub postal_code: String,
    pub country:     String,
}

impl Customer {
    /// 姓名を表示用に連結する
    ///
    /// 元のストアフロントと同じく、欠落フィールドは空のまま
    /// `"{名} {姓}"` の形で連結する。
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// 注文明細行
///
/// 生成時に正規化する: 数量の欠落・0 は 1 に、単価の欠落・負値は 0 にする。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    title:      String,
    quantity:   u32,
    unit_price: f64,
}

impl OrderLine {
    /// 新しい明細行を作成する
    ///
    /// # 正規化
    ///
    /// - `quantity`: `None` または 0 → 1
    /// - `unit_price`: `None` または負値 → 0.0
    /// - `title`: 欠落時は呼び出し側で空文字列を渡す
    pub fn new(title: impl Into<String>, quantity: Option<u32>, unit_price: Option<f64>) -> Self {
        let quantity = match quantity {
            Some(0) | None => 1,
            Some(q) => q,
        };
        let unit_price = unit_price.filter(|p| *p >= 0.0).unwrap_or(0.0);

        Self {
            title: title.into(),
            quantity,
            unit_price,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// 行合計（単価 × 数量）
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// 注文
///
/// ストアフロントから受信した検証済みの注文。受信後は不変。
/// 通知メール 2 通（販売者宛・顧客宛）の入力となる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    customer:      Customer,
    lines:         Vec<OrderLine>,
    language:      Language,
    currency_code: String,
}

impl Order {
    /// 新しい注文を作成する
    ///
    /// # バリデーション
    ///
    /// 検証するのは `customer.email` の有無だけ。他のフィールドは検証しない。
    ///
    /// # エラー
    ///
    /// `email` が空の場合は `DomainError::Validation` を返す
    /// （メッセージはそのまま利用者に返される）。
    pub fn new(
        customer: Customer,
        lines: Vec<OrderLine>,
        language: Language,
        currency_code: Option<String>,
    ) -> Result<Self, DomainError> {
        if customer.email.trim().is_empty() {
            return Err(DomainError::Validation(EMAIL_REQUIRED.to_string()));
        }

        let currency_code = currency_code
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        Ok(Self {
            customer,
            lines,
            language,
            currency_code,
        })
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    /// 合計金額
    ///
    /// クライアントが送信した合計は使用せず、常に明細行から再計算する。
    /// 明細行が空なら 0。
    pub fn total(&self) -> f64 {
        // 空イテレータの sum は -0.0 を返し、表示が "-0.00" になるため
        // 明示的に 0.0 から畳み込む
        self.lines.iter().fold(0.0, |acc, line| acc + line.line_total())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_customer() -> Customer {
        Customer {
            first_name: "Marko".to_string(),
            last_name: "Marković".to_string(),
            email: "marko@example.com".to_string(),
            ..Customer::default()
        }
    }

    #[test]
    fn test_数量の欠落と0は1に正規化される() {
        assert_eq!(OrderLine::new("Melem", None, Some(5.0)).quantity(), 1);
        assert_eq!(OrderLine::new("Melem", Some(0), Some(5.0)).quantity(), 1);
        assert_eq!(OrderLine::new("Melem", Some(3), Some(5.0)).quantity(), 3);
    }

    #[test]
    fn test_単価の欠落と負値は0に正規化される() {
        assert_eq!(OrderLine::new("Melem", Some(1), None).unit_price(), 0.0);
        assert_eq!(OrderLine::new("Melem", Some(1), Some(-1.0)).unit_price(), 0.0);
    }

    #[test]
    fn test_行合計は単価と数量の積() {
        let line = OrderLine::new("Melem", Some(2), Some(10.0));
        assert_eq!(line.line_total(), 20.0);
    }

    #[test]
    fn test_emailが空の注文は作成できない() {
        let customer = Customer::default();
        let result = Order::new(customer, vec![], Language::Sr, None);

        let Err(DomainError::Validation(msg)) = result else {
            panic!("バリデーションエラーになるはず");
        };
        assert_eq!(msg, "Email je obavezan za potvrdu narudžbine.");
    }

    #[test]
    fn test_空白だけのemailも欠落として扱う() {
        let customer = Customer {
            email: "   ".to_string(),
            ..Customer::default()
        };
        assert!(Order::new(customer, vec![], Language::Sr, None).is_err());
    }

    #[test]
    fn test_通貨コードの欠落はbamになる() {
        let order = Order::new(make_customer(), vec![], Language::Sr, None).unwrap();
        assert_eq!(order.currency_code(), "BAM");

        let order = Order::new(
            make_customer(),
            vec![],
            Language::Sr,
            Some("EUR".to_string()),
        )
        .unwrap();
        assert_eq!(order.currency_code(), "EUR");
    }

    #[test]
    fn test_合計は明細行から再計算される() {
        let lines = vec![
            OrderLine::new("Melem", Some(2), Some(10.0)),
            OrderLine::new("Čaj", Some(1), Some(4.5)),
        ];
        let order = Order::new(make_customer(), lines, Language::Sr, None).unwrap();
        assert_eq!(order.total(), 24.5);
    }

    #[test]
    fn test_明細行が空なら合計は0() {
        let order = Order::new(make_customer(), vec![], Language::Sr, None).unwrap();
        assert_eq!(order.total(), 0.0);
        // -0.0 は 0.0 と等しいので、符号と表示も確認する
        assert!(order.total().is_sign_positive());
        assert_eq!(format!("{:.2}", order.total()), "0.00");
    }
}
