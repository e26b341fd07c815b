//! Account field value types.
//!
//! Each type wraps the raw string the caller supplied. The default value is
//! the empty string, which doubles as the "never set" marker: the generic
//! validation pass only format-checks fields that are set, while presence
//! requirements are a separate, country-specific concern.

use lazy_static::lazy_static;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// The contract every account field type implements.
pub trait DomainField {
    /// Format-check the value as currently set.
    fn check(&self) -> Result<(), ValidationError>;

    /// True when the field was never set (the empty string).
    fn is_unset(&self) -> bool;
}

const BIC_PATTERN: &str = "^([A-Z]{6}[A-Z0-9]{2}|[A-Z]{6}[A-Z0-9]{5})$";
const IBAN_PATTERN: &str = "^[A-Z]{2}[0-9]{2}[A-Z0-9]{0,64}$";
const RECORD_ID_PATTERN: &str =
    "^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-4[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$";

lazy_static! {
    static ref BIC_RE: Regex = Regex::new(BIC_PATTERN).expect("hard-coded pattern");
    static ref IBAN_RE: Regex = Regex::new(IBAN_PATTERN).expect("hard-coded pattern");
    static ref RECORD_ID_RE: Regex = Regex::new(RECORD_ID_PATTERN).expect("hard-coded pattern");
}

macro_rules! string_field {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_field!(BankId, "A local clearing identifier for the account's bank.");
string_field!(SwiftCode, "A BIC in 8 or 11 character SWIFT format.");
string_field!(Iban, "An International Bank Account Number.");
string_field!(
    Identifier,
    "A free-text identification entry (names, secondary identification)."
);
string_field!(
    RecordId,
    "An account or organisation identifier in hyphenated version-4 UUID form."
);
string_field!(Classification, "The account holder classification.");
string_field!(Status, "The account lifecycle status.");

impl DomainField for BankId {
    // Generic fallback rule only; countries in the descriptor table get
    // their own length/pattern requirements instead.
    fn check(&self) -> Result<(), ValidationError> {
        if self.0.is_empty() || self.0.len() > 11 {
            return Err(ValidationError::InvalidBankId {
                value: self.0.clone(),
            });
        }
        Ok(())
    }

    fn is_unset(&self) -> bool {
        self.0.is_empty()
    }
}

impl DomainField for SwiftCode {
    fn check(&self) -> Result<(), ValidationError> {
        if !BIC_RE.is_match(&self.0) {
            return Err(ValidationError::InvalidBic {
                value: self.0.clone(),
            });
        }
        Ok(())
    }

    fn is_unset(&self) -> bool {
        self.0.is_empty()
    }
}

impl DomainField for Iban {
    fn check(&self) -> Result<(), ValidationError> {
        let len = self.0.len();
        if !(16..=34).contains(&len) || !IBAN_RE.is_match(&self.0) {
            return Err(ValidationError::InvalidIban {
                value: self.0.clone(),
            });
        }
        Ok(())
    }

    fn is_unset(&self) -> bool {
        self.0.is_empty()
    }
}

impl DomainField for Identifier {
    fn check(&self) -> Result<(), ValidationError> {
        if self.0.is_empty() || self.0.len() > 140 {
            return Err(ValidationError::InvalidIdentifier {
                value: self.0.clone(),
            });
        }
        Ok(())
    }

    fn is_unset(&self) -> bool {
        self.0.is_empty()
    }
}

impl DomainField for RecordId {
    fn check(&self) -> Result<(), ValidationError> {
        if !RECORD_ID_RE.is_match(&self.0) {
            return Err(ValidationError::InvalidRecordId {
                value: self.0.clone(),
            });
        }
        Ok(())
    }

    fn is_unset(&self) -> bool {
        self.0.is_empty()
    }
}

impl Classification {
    pub const PERSONAL: &'static str = "Personal";
    pub const BUSINESS: &'static str = "Business";

    pub fn personal() -> Self {
        Self(Self::PERSONAL.to_owned())
    }

    pub fn business() -> Self {
        Self(Self::BUSINESS.to_owned())
    }
}

impl DomainField for Classification {
    fn check(&self) -> Result<(), ValidationError> {
        match self.0.as_str() {
            Self::PERSONAL | Self::BUSINESS => Ok(()),
            _ => Err(ValidationError::InvalidClassification {
                value: self.0.clone(),
            }),
        }
    }

    fn is_unset(&self) -> bool {
        self.0.is_empty()
    }
}

impl Status {
    pub const PENDING: &'static str = "pending";
    pub const CONFIRMED: &'static str = "confirmed";
    pub const FAILED: &'static str = "failed";

    pub fn pending() -> Self {
        Self(Self::PENDING.to_owned())
    }

    pub fn confirmed() -> Self {
        Self(Self::CONFIRMED.to_owned())
    }

    pub fn failed() -> Self {
        Self(Self::FAILED.to_owned())
    }
}

impl DomainField for Status {
    fn check(&self) -> Result<(), ValidationError> {
        match self.0.as_str() {
            Self::PENDING | Self::CONFIRMED | Self::FAILED => Ok(()),
            _ => Err(ValidationError::InvalidStatus {
                value: self.0.clone(),
            }),
        }
    }

    fn is_unset(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_id_generic_rule() {
        assert!(BankId::from("000006").check().is_ok());
        assert!(BankId::from("").check().is_err());
        assert!(BankId::from("123456789012").check().is_err());
    }

    #[test]
    fn test_swift_code_lengths() {
        assert!(SwiftCode::from("NWBKGB22").check().is_ok());
        assert!(SwiftCode::from("NWBKGB22XXX").check().is_ok());
        // 9 and 10 character forms are not part of the SWIFT format
        assert!(SwiftCode::from("NWBKGB22X").check().is_err());
        assert!(SwiftCode::from("NWBKGB22XX").check().is_err());
        assert!(SwiftCode::from("nwbkgb22").check().is_err());
        assert!(SwiftCode::from("").check().is_err());
    }

    #[test]
    fn test_iban_bounds() {
        assert!(Iban::from("GB29NWBK60161331926819").check().is_ok());
        assert!(Iban::from("GB29NWBK6016133").check().is_err()); // 15 chars
        assert!(Iban::from("gb29nwbk60161331926819").check().is_err());
        let long = format!("GB29{}", "A".repeat(31)); // 35 chars
        assert!(Iban::from(long).check().is_err());
    }

    #[test]
    fn test_identifier_bounds() {
        assert!(Identifier::from("Samantha Holder").check().is_ok());
        assert!(Identifier::from("a".repeat(140)).check().is_ok());
        assert!(Identifier::from("a".repeat(141)).check().is_err());
        assert!(Identifier::from("").check().is_err());
    }

    #[test]
    fn test_record_id_accepts_only_hyphenated_v4() {
        assert!(RecordId::from("ad27e265-9605-4b4b-a0e5-3003ea9cc419")
            .check()
            .is_ok());
        assert!(RecordId::from("AD27E265-9605-4B4B-A0E5-3003EA9CC419")
            .check()
            .is_ok());
        // version nibble must be 4
        assert!(RecordId::from("ad27e265-9605-1b4b-a0e5-3003ea9cc419")
            .check()
            .is_err());
        // variant nibble must be 8, 9, a or b
        assert!(RecordId::from("ad27e265-9605-4b4b-70e5-3003ea9cc419")
            .check()
            .is_err());
        // non-hyphenated forms are rejected
        assert!(RecordId::from("ad27e26596054b4ba0e53003ea9cc419")
            .check()
            .is_err());
        assert!(RecordId::from("123456").check().is_err());
        assert!(RecordId::from("").check().is_err());
    }

    #[test]
    fn test_random_v4_ids_pass() {
        for _ in 0..32 {
            let id = uuid::Uuid::new_v4().to_string();
            assert!(RecordId::from(id.as_str()).check().is_ok(), "{id}");
        }
    }

    #[test]
    fn test_classification_values() {
        assert!(Classification::personal().check().is_ok());
        assert!(Classification::business().check().is_ok());
        assert!(Classification::from("personal").check().is_err());
        assert!(Classification::from("").check().is_err());
    }

    #[test]
    fn test_status_values() {
        for s in [Status::pending(), Status::confirmed(), Status::failed()] {
            assert!(s.check().is_ok());
        }
        assert!(Status::from("Pending").check().is_err());
    }

    #[test]
    fn test_serde_is_transparent() {
        let bic = SwiftCode::from("NWBKGB22");
        assert_eq!(serde_json::to_string(&bic).unwrap(), "\"NWBKGB22\"");
        let back: SwiftCode = serde_json::from_str("\"NWBKGB22\"").unwrap();
        assert_eq!(back, bic);
    }
}
