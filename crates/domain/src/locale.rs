//! # 言語とロケールバンドル
//!
//! 注文確認メールの言語選択を定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 要件 |
//! |---|------------|------|
//! | [`Language`] | メール言語（sr / en） | 未知のタグは常に sr にフォールバック |
//! | [`LocaleBundle`] | 1 言語分の定型文セット | 件名・見出し・ラベルを保持 |
//!
//! ## 設計方針
//!
//! - **enum による言語表現**: 文字列キーの辞書ではなく列挙型とし、
//!   バンドル解決を網羅的 match でコンパイラに検査させる
//! - **失敗しないフォールバック**: `from_tag` はどんな入力文字列に対しても
//!   必ず値を返す（未知のタグ → `Sr`）

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// メール言語
///
/// ストアフロントは `lang` フィールドで言語タグを送信する。
/// 対応していないタグはセルビア語（`Sr`）として扱う。
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// セルビア語（デフォルト）
    #[default]
    Sr,
    /// 英語
    En,
}

impl Language {
    /// 言語タグから言語を解決する
    ///
    /// 未知のタグ（"de"、空文字列など）はすべて `Sr` にフォールバックする。
    /// この変換はどんな入力に対しても失敗しない。
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or(Self::Sr)
    }

    /// この言語のロケールバンドルを返す
    pub fn bundle(self) -> &'static LocaleBundle {
        match self {
            Self::Sr => &SR_BUNDLE,
            Self::En => &EN_BUNDLE,
        }
    }
}

/// 1 言語分の定型文セット
///
/// 注文確認メール（顧客宛）で使用される件名・見出し・ラベルを保持する。
/// 販売者宛メールの件名はロケールに依存しない固定文字列のため、ここには含めない。
#[derive(Debug)]
pub struct LocaleBundle {
    /// 顧客宛メールの件名
    pub subject:        &'static str,
    /// 見出しの導入句（後ろに ", {名} {姓}!" が続く）
    pub thanks:         &'static str,
    /// 受付完了の案内文
    pub received:       &'static str,
    /// 明細行の数量ラベル
    pub quantity_label: &'static str,
    /// 合計金額ラベル
    pub total_label:    &'static str,
    /// 配送先住所ラベル
    pub shipping_label: &'static str,
}

static SR_BUNDLE: LocaleBundle = LocaleBundle {
    subject:        "Potvrda narudžbe melema",
    thanks:         "Hvala na narudžbi",
    received:       "Primili smo Vašu narudžbu i uskoro ćemo je obraditi.",
    quantity_label: "Količina",
    total_label:    "Ukupno",
    shipping_label: "Adresa za dostavu",
};

static EN_BUNDLE: LocaleBundle = LocaleBundle {
    subject:        "Order Confirmation - Planta Melem",
    thanks:         "Thank you for your order",
    received:       "We have received your order and will process it shortly.",
    quantity_label: "Quantity",
    total_label:    "Total",
    shipping_label: "Shipping address",
};
