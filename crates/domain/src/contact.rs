//! # お問い合わせ
//!
//! お問い合わせフォームから送信されるメッセージを定義する。
//! 注文と異なり、生成される通知メールは販売者宛の 1 通だけ。

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// 必須フィールドが欠けている場合のメッセージ
const FIELDS_REQUIRED: &str = "Ime, email i poruka su obavezni.";

/// お問い合わせメッセージ
///
/// `name`・`email`・`message` が必須。`phone` のみ任意。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    name:    String,
    email:   String,
    phone:   Option<String>,
    message: String,
}

impl ContactMessage {
    /// 新しいお問い合わせメッセージを作成する
    ///
    /// # エラー
    ///
    /// `name`・`email`・`message` のいずれかが空の場合は
    /// `DomainError::Validation` を返す。
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<String>,
        message: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let email = email.into();
        let message = message.into();

        if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
            return Err(DomainError::Validation(FIELDS_REQUIRED.to_string()));
        }

        Ok(Self {
            name,
            email,
            phone,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_必須フィールドが揃っていれば作成できる() {
        let msg = ContactMessage::new(
            "Ana",
            "ana@example.com",
            Some("+387 61 000 000".to_string()),
            "Imam pitanje o proizvodu.",
        )
        .unwrap();

        assert_eq!(msg.name(), "Ana");
        assert_eq!(msg.phone(), Some("+387 61 000 000"));
    }

    #[rstest]
    #[case("", "ana@example.com", "poruka")]
    #[case("Ana", "", "poruka")]
    #[case("Ana", "ana@example.com", "")]
    #[case("Ana", "ana@example.com", "   ")]
    fn test_必須フィールドが欠けると作成できない(
        #[case] name: &str,
        #[case] email: &str,
        #[case] message: &str,
    ) {
        let result = ContactMessage::new(name, email, None, message);

        let Err(DomainError::Validation(msg)) = result else {
            panic!("バリデーションエラーになるはず");
        };
        assert_eq!(msg, "Ime, email i poruka su obavezni.");
    }

    #[test]
    fn test_phoneは任意() {
        let msg = ContactMessage::new("Ana", "ana@example.com", None, "poruka").unwrap();
        assert_eq!(msg.phone(), None);
    }
}
