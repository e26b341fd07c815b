//! The composable validator pipeline.
//!
//! A [`Validator`] maps a draft account to a list of errors. Validators are
//! composed per country into an ordered chain that never short-circuits:
//! every validator runs and all errors are concatenated, so callers always
//! see the full batch.
//!
//! Which validators compose is driven by [`crate::rules::CountryRules`]
//! rather than a per-country match, so adding a country is a data change.

use crate::attributes::{AccountAttributes, AccountDraft};
use crate::country::Country;
use crate::error::ValidationError;
use crate::field::DomainField;
use crate::rules::{account_number_rule, bank_id_code, bank_id_rule, country_rules};

/// A single validation step over a draft account.
pub type Validator = fn(&AccountDraft) -> Vec<ValidationError>;

/// The request flavour a chain is assembled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Account creation (POST).
    Create,
    /// Account update (PATCH).
    Update,
}

/// Chain validators into one, concatenating their errors in order.
pub fn compose(validators: &[Validator]) -> impl Fn(&AccountDraft) -> Vec<ValidationError> + '_ {
    move |draft| validators.iter().flat_map(|check| check(draft)).collect()
}

/// Assemble the validator chain for a request kind and country.
///
/// Create chains always start with the generic set-field and required-field
/// checks; countries with a rules entry add their country-specific
/// validators after those. A country outside the supported set gets the
/// generic checks only.
///
/// Update chains are deliberately narrow: only GB defines one, every other
/// country validates to an empty batch. Supporting updates for another
/// country means giving it a chain here, not assuming parity with create.
pub fn validators_for(kind: RequestKind, country: &Country) -> Vec<Validator> {
    match kind {
        RequestKind::Create => {
            let mut chain: Vec<Validator> = vec![check_set_fields, check_required_fields];

            if let Some(rules) = country_rules(country) {
                if rules.checks_bank_id {
                    chain.push(check_bank_id);
                }
                if rules.requires_bic {
                    chain.push(check_bic);
                }
                chain.push(check_bank_id_code);
                chain.push(check_account_number);
                if rules.dual_length_bank_id {
                    chain.push(check_italian_bank_id);
                }
                if rules.iban_must_be_empty {
                    chain.push(check_empty_iban);
                }
            }

            chain
        }
        RequestKind::Update => {
            if country.as_str() == "GB" {
                vec![
                    check_set_fields,
                    check_bank_id_code,
                    check_bank_id,
                    check_bic,
                    check_classification,
                    check_account_number,
                    check_country,
                ]
            } else {
                Vec::new()
            }
        }
    }
}

/// Run the full chain for a request kind against a draft.
pub fn validate(kind: RequestKind, draft: &AccountDraft<'_>) -> Vec<ValidationError> {
    let chain = validators_for(kind, &draft.attributes.country);
    let errors = compose(&chain)(draft);
    errors
}

/// Format-check every field that has been set. Unset fields are skipped;
/// presence is the concern of the required-field and country validators.
pub fn check_set_fields(draft: &AccountDraft) -> Vec<ValidationError> {
    let attrs = draft.attributes;
    let mut errors = Vec::new();

    let fields: [&dyn DomainField; 8] = [
        &attrs.country,
        &attrs.base_currency,
        &attrs.bank_id,
        &attrs.bic,
        &attrs.iban,
        &attrs.account_classification,
        &attrs.secondary_identification,
        &attrs.status,
    ];

    for field in fields {
        if !field.is_unset() {
            if let Err(err) = field.check() {
                errors.push(err);
            }
        }
    }

    if !attrs.name.is_empty() {
        errors.extend(check_names(attrs));
    }

    if !attrs.alternative_names.is_empty() {
        errors.extend(check_alternative_names(attrs));
    }

    errors
}

fn check_names(attrs: &AccountAttributes) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if attrs.name.len() > 4 {
        errors.push(ValidationError::TooManyNames);
    }

    for entry in &attrs.name {
        if let Err(err) = entry.check() {
            errors.push(err);
        }
    }

    errors
}

fn check_alternative_names(attrs: &AccountAttributes) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if attrs.alternative_names.len() > 3 {
        errors.push(ValidationError::TooManyAlternativeNames);
    }

    for entry in &attrs.alternative_names {
        if let Err(err) = entry.check() {
            errors.push(err);
        }
    }

    errors
}

/// Country must be present and recognized.
pub fn check_country(draft: &AccountDraft) -> Vec<ValidationError> {
    let country = &draft.attributes.country;

    if country.is_unset() {
        vec![ValidationError::missing("country")]
    } else if let Err(err) = country.check() {
        vec![err]
    } else {
        Vec::new()
    }
}

/// Classification must be present and one of the accepted values.
pub fn check_classification(draft: &AccountDraft) -> Vec<ValidationError> {
    let classification = &draft.attributes.account_classification;
    let mut errors = Vec::new();

    if classification.is_unset() {
        errors.push(ValidationError::missing("account_classification"));
    }

    if let Err(err) = classification.check() {
        errors.push(err);
    }

    errors
}

/// The always-on presence checks for create requests: country,
/// classification, and well-formed organisation and account identifiers.
pub fn check_required_fields(draft: &AccountDraft) -> Vec<ValidationError> {
    let mut errors = check_country(draft);
    errors.extend(check_classification(draft));

    if let Err(err) = draft.organisation_id.check() {
        errors.push(err);
    }

    if let Err(err) = draft.account_id.check() {
        errors.push(err);
    }

    errors
}

/// BIC must be present and well-formed.
pub fn check_bic(draft: &AccountDraft) -> Vec<ValidationError> {
    let bic = &draft.attributes.bic;
    let mut errors = Vec::new();

    if bic.is_unset() {
        errors.push(ValidationError::missing("bic"));
    }

    if let Err(err) = bic.check() {
        errors.push(err);
    }

    errors
}

/// Apply the country's bank-id descriptor, falling back to the generic
/// bank-id format check for countries without one.
pub fn check_bank_id(draft: &AccountDraft) -> Vec<ValidationError> {
    let attrs = draft.attributes;

    match bank_id_rule(&attrs.country) {
        Some(rule) => rule
            .apply(attrs.bank_id.as_str())
            .into_iter()
            .map(|violation| ValidationError::BankId { violation })
            .collect(),
        None => {
            if !attrs.bank_id.is_unset() {
                attrs.bank_id.check().err().into_iter().collect()
            } else {
                Vec::new()
            }
        }
    }
}

/// The bank-id-code field must match the country's exact literal.
pub fn check_bank_id_code(draft: &AccountDraft) -> Vec<ValidationError> {
    let attrs = draft.attributes;

    if let Some(expected) = bank_id_code(&attrs.country) {
        if attrs.bank_id_code != expected {
            return vec![ValidationError::BankIdCodeMismatch {
                code: attrs.bank_id_code.clone(),
                country: attrs.country.as_str().to_owned(),
                expected,
            }];
        }
    }

    Vec::new()
}

/// Apply the country's account-number descriptor.
pub fn check_account_number(draft: &AccountDraft) -> Vec<ValidationError> {
    let attrs = draft.attributes;

    match account_number_rule(&attrs.country) {
        Some(rule) => rule
            .apply(&attrs.account_number)
            .into_iter()
            .map(|violation| ValidationError::AccountNumber { violation })
            .collect(),
        None => Vec::new(),
    }
}

/// Italian bank ids have two valid lengths: 10 characters when no account
/// number is supplied, 11 when one is. Layered on top of the 10-11
/// descriptor range.
pub fn check_italian_bank_id(draft: &AccountDraft) -> Vec<ValidationError> {
    let attrs = draft.attributes;
    let bank_id_len = attrs.bank_id.as_str().len();
    let mut errors = Vec::new();

    if attrs.account_number.is_empty() && bank_id_len != 10 {
        errors.push(ValidationError::ItalianBankIdWithoutAccountNumber {
            bank_id: attrs.bank_id.as_str().to_owned(),
        });
    }

    if !attrs.account_number.is_empty() && bank_id_len != 11 {
        errors.push(ValidationError::ItalianBankIdWithAccountNumber {
            bank_id: attrs.bank_id.as_str().to_owned(),
        });
    }

    errors
}

/// Countries that do not use IBAN must leave the field empty.
pub fn check_empty_iban(draft: &AccountDraft) -> Vec<ValidationError> {
    if !draft.attributes.iban.is_unset() {
        vec![ValidationError::IbanNotEmpty]
    } else {
        Vec::new()
    }
}
