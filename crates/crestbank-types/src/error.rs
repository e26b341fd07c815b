//! Validation error taxonomy.
//!
//! Every check in the pipeline reports through [`ValidationError`]; callers
//! always receive the full batch for a request, never just the first failure.

use thiserror::Error;

/// A single violation raised by a country descriptor applied to one string
/// field. The four descriptor checks are independent, so one input can
/// collect several of these at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("field should be empty")]
    ShouldBeEmpty,

    #[error("string length requirements min: {min} max: {max}")]
    Length { min: usize, max: usize },

    #[error("field should not be empty")]
    Required,

    #[error("field did not match pattern {pattern:?}")]
    Pattern { pattern: &'static str },
}

/// Client-side validation errors, produced before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field:?} field is required on an account request")]
    MissingField { field: &'static str },

    #[error("name array is restricted to a maximum of 4 entries")]
    TooManyNames,

    #[error("alternative names array is restricted to a maximum of 3 entries")]
    TooManyAlternativeNames,

    #[error("invalid country code {code:?}. supported ISO 3166-1 formats e.g. 'GB', 'FR'")]
    InvalidCountry { code: String },

    #[error("invalid currency code {code:?}. supported ISO 4217 formats e.g. 'GBP', 'EUR'")]
    InvalidCurrency { code: String },

    #[error("invalid bank id {value:?}. must be non-empty and at most 11 characters")]
    InvalidBankId { value: String },

    #[error("invalid BIC {value:?}. expected 8 or 11 character SWIFT format")]
    InvalidBic { value: String },

    #[error("invalid IBAN {value:?}. expected 16 to 34 characters in IBAN format")]
    InvalidIban { value: String },

    #[error("invalid identifier {value:?}. must be between 1 and 140 characters")]
    InvalidIdentifier { value: String },

    #[error("invalid record id {value:?}. expected a hyphenated version-4 UUID")]
    InvalidRecordId { value: String },

    #[error("invalid classification {value:?}. only acceptable values are [\"Personal\", \"Business\"]")]
    InvalidClassification { value: String },

    #[error("invalid status {value:?}. only acceptable values are [\"pending\", \"confirmed\", \"failed\"]")]
    InvalidStatus { value: String },

    #[error("invalid bank id: {violation}")]
    BankId {
        #[source]
        violation: RuleViolation,
    },

    #[error("invalid account number: {violation}")]
    AccountNumber {
        #[source]
        violation: RuleViolation,
    },

    #[error("invalid bank id code {code:?} for country {country:?}, should be {expected:?}")]
    BankIdCodeMismatch {
        code: String,
        country: String,
        expected: &'static str,
    },

    #[error("invalid Italian bank id {bank_id:?}. with no account number the length should be 10 characters")]
    ItalianBankIdWithoutAccountNumber { bank_id: String },

    #[error("invalid Italian bank id {bank_id:?}. with an account number the length should be 11 characters")]
    ItalianBankIdWithAccountNumber { bank_id: String },

    #[error("iban should be empty")]
    IbanNotEmpty,

    #[error("page size cannot be smaller than 1")]
    PageSizeTooSmall,

    #[error("response is missing the {rel:?} link, which is required for traversal")]
    MissingPageLink { rel: &'static str },
}

impl ValidationError {
    /// Shorthand for the required-field error used by the presence checks.
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = ValidationError::missing("country");
        assert!(err.to_string().contains("\"country\""));
    }

    #[test]
    fn test_bank_id_code_mismatch_names_expected_literal() {
        let err = ValidationError::BankIdCodeMismatch {
            code: "GBDSX".into(),
            country: "GB".into(),
            expected: "GBDSC",
        };
        let msg = err.to_string();
        assert!(msg.contains("GBDSC"));
        assert!(msg.contains("GBDSX"));
    }

    #[test]
    fn test_rule_violation_display() {
        let v = RuleViolation::Length { min: 6, max: 10 };
        assert!(v.to_string().contains("min: 6"));
        assert!(v.to_string().contains("max: 10"));
    }
}
