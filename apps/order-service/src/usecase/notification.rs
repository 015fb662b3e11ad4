//! # メールレンダラー
//!
//! 注文・お問い合わせから通知メールを HTML / plaintext 両形式で生成する。
//!
//! ## 設計方針
//!
//! - **純粋関数**: 同じ入力からは常にバイト単位で同一の出力を生成する。
//!   I/O・乱数・時刻には依存しない
//! - **明細行の一度だけのレンダリング**: 各明細行の表示文字列は 1 回だけ組み立て、
//!   テキスト本文と HTML 本文の両方で再利用する（計算値のずれを構造的に防ぐ）
//! - **販売者宛の件名は固定**: 顧客の言語設定に関係なく常にセルビア語
//!
//! ## 金額表示
//!
//! すべての金額は小数点以下 2 桁固定。通貨コードは末尾のラベルに過ぎず、
//! 換算は行わない。

use itertools::Itertools;
use plantamelem_domain::{
   contact::ContactMessage,
   locale::Language,
   notification::EmailMessage,
   order::{Order, OrderLine},
};

/// 販売者宛メールの件名（ロケールに依存しない固定文字列）
const MERCHANT_ORDER_SUBJECT: &str = "Nova narudžbina melema";

/// 販売者宛お問い合わせメールの件名
const MERCHANT_CONTACT_SUBJECT: &str = "Nova poruka sa sajta";

/// メールレンダラー
///
/// 注文から販売者宛・顧客宛の 2 通、お問い合わせから販売者宛の 1 通を生成する。
pub struct OrderMailRenderer {
   merchant_address: String,
}

impl OrderMailRenderer {
   /// 新しいレンダラーインスタンスを作成
   ///
   /// # 引数
   ///
   /// - `merchant_address`: 販売者宛メールの送信先アドレス
   pub fn new(merchant_address: String) -> Self {
      Self { merchant_address }
   }

   /// 注文から通知メール 2 通を生成する
   ///
   /// 返り値は常に `(販売者宛, 顧客宛)` のタプル。
   /// 販売者宛は常にセルビア語、顧客宛は `order.language()` のバンドルを使う。
   pub fn render_order(&self, order: &Order) -> (EmailMessage, EmailMessage) {
      (self.render_merchant(order), Self::render_customer(order))
   }

   /// 販売者宛の注文通知を生成する
   fn render_merchant(&self, order: &Order) -> EmailMessage {
      let bundle = Language::Sr.bundle();
      let customer = order.customer();
      let lines = rendered_lines(order, bundle.quantity_label);
      let total = format_amount(order.total());
      let currency = order.currency_code();

      let contact_rows = [
         ("Email", customer.email.as_str()),
         ("Telefon", customer.phone.as_str()),
         ("Adresa", customer.address.as_str()),
         ("Grad", customer.city.as_str()),
         ("Poštanski broj", customer.postal_code.as_str()),
         ("Država", customer.country.as_str()),
      ];

      let text_body = format!(
         "Nova narudžbina od {}\n\n{}\n\nArtikli:\n{}\n\nUkupno: {} {}\n",
         customer.full_name(),
         contact_rows
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .join("\n"),
         lines.join("\n"),
         total,
         currency,
      );

      let html_body = format!(
         "<div style=\"font-family: Arial, sans-serif; color: #333;\">\
          <h2>Nova narudžbina od {}</h2>\
          <p>{}</p>\
          <ul>{}</ul>\
          <p>Ukupno: {} {}</p>\
          </div>",
         customer.full_name(),
         contact_rows
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .join("<br>"),
         lines.iter().map(|l| format!("<li>{l}</li>")).join(""),
         total,
         currency,
      );

      EmailMessage {
         to:         self.merchant_address.clone(),
         subject:    MERCHANT_ORDER_SUBJECT.to_string(),
         html_body,
         text_body,
         attachment: None,
      }
   }

   /// 顧客宛の注文確認を生成する
   fn render_customer(order: &Order) -> EmailMessage {
      let bundle = order.language().bundle();
      let customer = order.customer();
      let lines = rendered_lines(order, bundle.quantity_label);
      let total = format_amount(order.total());
      let currency = order.currency_code();

      let heading = format!("{}, {}!", bundle.thanks, customer.full_name());

      let text_body = format!(
         "{}\n\n{}\n\n{}\n\n{}: {} {}\n\n{}:\n{}\n{} {}\n{}\n",
         heading,
         bundle.received,
         lines.join("\n"),
         bundle.total_label,
         total,
         currency,
         bundle.shipping_label,
         customer.address,
         customer.city,
         customer.postal_code,
         customer.country,
      );

      let html_body = format!(
         "<div style=\"font-family: Arial, sans-serif; color: #333;\">\
          <h2>{}</h2>\
          <p>{}</p>\
          <ul>{}</ul>\
          <p>{}: {} {}</p>\
          <p>{}:<br>{}<br>{} {}<br>{}</p>\
          </div>",
         heading,
         bundle.received,
         lines.iter().map(|l| format!("<li>{l}</li>")).join(""),
         bundle.total_label,
         total,
         currency,
         bundle.shipping_label,
         customer.address,
         customer.city,
         customer.postal_code,
         customer.country,
      );

      EmailMessage {
         to:         customer.email.clone(),
         subject:    bundle.subject.to_string(),
         html_body,
         text_body,
         attachment: None,
      }
   }

   /// お問い合わせから販売者宛の通知メール 1 通を生成する
   pub fn render_contact(&self, contact: &ContactMessage) -> EmailMessage {
      let phone = contact.phone().unwrap_or("");

      let text_body = format!(
         "Nova poruka od {}\n\nEmail: {}\nTelefon: {}\n\nPoruka:\n{}\n",
         contact.name(),
         contact.email(),
         phone,
         contact.message(),
      );

      let html_body = format!(
         "<div style=\"font-family: Arial, sans-serif; color: #333;\">\
          <h2>Nova poruka od {}</h2>\
          <p>Email: {}<br>Telefon: {}</p>\
          <p>{}</p>\
          </div>",
         contact.name(),
         contact.email(),
         phone,
         contact.message(),
      );

      EmailMessage {
         to:         self.merchant_address.clone(),
         subject:    MERCHANT_CONTACT_SUBJECT.to_string(),
         html_body,
         text_body,
         attachment: None,
      }
   }
}

/// 全明細行の表示文字列を一度だけ組み立てる
///
/// この結果がテキスト本文と HTML 本文の両方で再利用される。
fn rendered_lines(order: &Order, quantity_label: &str) -> Vec<String> {
   order
      .lines()
      .iter()
      .map(|line| render_line(line, quantity_label, order.currency_code()))
      .collect()
}

/// 明細行 1 行の表示文字列
///
/// 形式: `"{商品名} - {数量ラベル}: {数量} × {単価} {通貨} = {行合計} {通貨}"`
fn render_line(line: &OrderLine, quantity_label: &str, currency: &str) -> String {
   format!(
      "{} - {}: {} × {} {} = {} {}",
      line.title(),
      quantity_label,
      line.quantity(),
      format_amount(line.unit_price()),
      currency,
      format_amount(line.line_total()),
      currency,
   )
}

/// 金額を小数点以下 2 桁固定で文字列化する
fn format_amount(value: f64) -> String {
   format!("{value:.2}")
}
