//! Canonical domain types for the Crestbank accounts API.
//!
//! This crate holds everything the client needs before a byte goes on the
//! wire: the strongly-typed account field values, the country-specific
//! banking rule tables, and the composable validation pipeline that runs
//! over a draft account. It has no knowledge of HTTP; the surface crate
//! (`crestbank-client`) builds on top of it.

pub mod attributes;
pub mod country;
pub mod currency;
pub mod error;
pub mod field;
pub mod rules;
pub mod validate;

pub use attributes::{AccountAttributes, AccountDraft};
pub use country::Country;
pub use currency::Currency;
pub use error::{RuleViolation, ValidationError};
pub use field::{
    BankId, Classification, DomainField, Iban, Identifier, RecordId, Status, SwiftCode,
};
pub use rules::{CountryRules, FieldRule};
pub use validate::{validate, validators_for, RequestKind, Validator};
