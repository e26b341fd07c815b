//! Country-specific banking rule tables.
//!
//! Two mappings keyed by country code drive the validator chains: the exact
//! bank-id-code literal each country expects, and the length/pattern
//! descriptors for the bank-id and account-number fields. A third table,
//! [`CountryRules`], records which optional validators a country's create
//! chain carries, turning the per-country dispatch into data.

use lazy_static::lazy_static;
use regex_lite::Regex;
use std::collections::HashMap;

use crate::country::Country;
use crate::error::RuleViolation;

const SIX_DIGITS: &str = "^[0-9]{6}$";
const CA_ROUTING: &str = "^0.{8}$";
// 6 to 10 characters, first one must not be '0'
const AU_ACCOUNT: &str = "^[^0].{5,9}$";

lazy_static! {
    static ref COMPILED: HashMap<&'static str, Regex> = [SIX_DIGITS, CA_ROUTING, AU_ACCOUNT]
        .into_iter()
        .filter_map(|p| Regex::new(p).ok().map(|re| (p, re)))
        .collect();
}

fn pattern_matches(pattern: &'static str, value: &str) -> bool {
    match COMPILED.get(pattern) {
        Some(re) => re.is_match(value),
        None => Regex::new(pattern)
            .map(|re| re.is_match(value))
            .unwrap_or(false),
    }
}

/// A validation descriptor for a single string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// The field must be empty for this country.
    Empty,
    /// Length bounds, an optional presence requirement and an optional
    /// pattern for the field.
    Length {
        required: bool,
        min: usize,
        max: usize,
        pattern: Option<&'static str>,
    },
}

impl FieldRule {
    pub const fn exact(required: bool, len: usize) -> Self {
        Self::Length {
            required,
            min: len,
            max: len,
            pattern: None,
        }
    }

    pub const fn ranged(required: bool, min: usize, max: usize) -> Self {
        Self::Length {
            required,
            min,
            max,
            pattern: None,
        }
    }

    pub const fn patterned(required: bool, len: usize, pattern: &'static str) -> Self {
        Self::Length {
            required,
            min: len,
            max: len,
            pattern: Some(pattern),
        }
    }

    /// Apply the descriptor to a field value, collecting every violation.
    ///
    /// The checks do not short-circuit: a single input can raise a length
    /// violation and a pattern violation at the same time. An empty value
    /// only violates the presence requirement.
    pub fn apply(&self, value: &str) -> Vec<RuleViolation> {
        let mut violations = Vec::new();

        match *self {
            Self::Empty => {
                if !value.is_empty() {
                    violations.push(RuleViolation::ShouldBeEmpty);
                }
            }
            Self::Length {
                required,
                min,
                max,
                pattern,
            } => {
                if !value.is_empty() && (value.len() < min || value.len() > max) {
                    violations.push(RuleViolation::Length { min, max });
                }

                if required && value.is_empty() {
                    violations.push(RuleViolation::Required);
                }

                if let Some(pattern) = pattern {
                    if !value.is_empty() && !pattern_matches(pattern, value) {
                        violations.push(RuleViolation::Pattern { pattern });
                    }
                }
            }
        }

        violations
    }
}

/// The exact bank-id-code literal each country expects. An empty literal
/// means the field must be left empty; countries absent from the table
/// impose no constraint on the field.
pub static BANK_ID_CODES: &[(&str, &str)] = &[
    ("AU", "AUBSB"),
    ("BE", "BE"),
    ("CA", "CACPA"),
    ("CH", "CHBCC"),
    ("DE", "DEBLZ"),
    ("ES", "ESNCC"),
    ("FR", "FR"),
    ("GB", "GBDSC"),
    ("GR", "GRBIC"),
    ("HK", "HKNCC"),
    ("IT", "ITNCC"),
    ("LU", "LULUX"),
    ("NL", ""),
    ("PL", "PLKNR"),
    ("PT", "PTNCC"),
    ("US", "USABA"),
];

/// Bank-id descriptors per country.
pub static BANK_ID_RULES: &[(&str, FieldRule)] = &[
    ("AU", FieldRule::patterned(false, 6, SIX_DIGITS)),
    ("BE", FieldRule::exact(true, 3)),
    ("CA", FieldRule::patterned(false, 9, CA_ROUTING)),
    ("CH", FieldRule::exact(true, 5)),
    ("DE", FieldRule::exact(true, 8)),
    ("ES", FieldRule::exact(true, 8)),
    ("FR", FieldRule::exact(true, 10)),
    ("GB", FieldRule::patterned(true, 6, SIX_DIGITS)),
    ("GR", FieldRule::exact(true, 7)),
    ("HK", FieldRule::exact(false, 3)),
    ("IT", FieldRule::ranged(true, 10, 11)),
    ("LU", FieldRule::exact(true, 3)),
    ("NL", FieldRule::Empty),
    ("PL", FieldRule::exact(true, 8)),
    ("PT", FieldRule::exact(true, 8)),
    ("US", FieldRule::exact(true, 9)),
];

/// Account-number descriptors per country. None of these require the field;
/// the account number is normally assigned by the service.
pub static ACCOUNT_NUMBER_RULES: &[(&str, FieldRule)] = &[
    ("AU", FieldRule::patterned(false, 6, AU_ACCOUNT)),
    ("BE", FieldRule::exact(false, 7)),
    ("CA", FieldRule::ranged(false, 7, 12)),
    ("CH", FieldRule::exact(false, 12)),
    ("DE", FieldRule::exact(false, 7)),
    ("ES", FieldRule::exact(false, 10)),
    ("FR", FieldRule::exact(false, 10)),
    ("GB", FieldRule::exact(false, 8)),
    ("GR", FieldRule::exact(false, 16)),
    ("HK", FieldRule::ranged(false, 9, 12)),
    ("IT", FieldRule::exact(false, 12)),
    ("LU", FieldRule::exact(false, 13)),
    ("NL", FieldRule::exact(false, 10)),
    ("PL", FieldRule::exact(false, 16)),
    ("PT", FieldRule::exact(false, 11)),
    ("US", FieldRule::ranged(false, 6, 17)),
];

/// Which optional validators a country's create chain carries.
///
/// The AU account-number rule in [`ACCOUNT_NUMBER_RULES`] carries the
/// leading-zero pattern; the 6-10 range there matches it. AU, CA and HK do
/// not run the bank-id descriptor even though a descriptor exists for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryRules {
    pub requires_bic: bool,
    pub checks_bank_id: bool,
    pub iban_must_be_empty: bool,
    pub dual_length_bank_id: bool,
}

impl CountryRules {
    const fn new(
        requires_bic: bool,
        checks_bank_id: bool,
        iban_must_be_empty: bool,
        dual_length_bank_id: bool,
    ) -> Self {
        Self {
            requires_bic,
            checks_bank_id,
            iban_must_be_empty,
            dual_length_bank_id,
        }
    }
}

static COUNTRY_RULES: &[(&str, CountryRules)] = &[
    ("AU", CountryRules::new(true, false, true, false)),
    ("BE", CountryRules::new(false, true, false, false)),
    ("CA", CountryRules::new(true, false, true, false)),
    ("CH", CountryRules::new(false, true, false, false)),
    ("DE", CountryRules::new(false, true, false, false)),
    ("ES", CountryRules::new(false, true, false, false)),
    ("FR", CountryRules::new(false, true, false, false)),
    ("GB", CountryRules::new(true, true, false, false)),
    ("GR", CountryRules::new(false, true, false, false)),
    ("HK", CountryRules::new(true, false, true, false)),
    ("IT", CountryRules::new(false, true, false, true)),
    ("LU", CountryRules::new(false, true, false, false)),
    ("NL", CountryRules::new(true, true, false, false)),
    ("PL", CountryRules::new(false, true, false, false)),
    ("PT", CountryRules::new(false, true, false, false)),
    ("US", CountryRules::new(true, true, true, false)),
];

fn lookup<T: Copy>(table: &'static [(&'static str, T)], country: &Country) -> Option<T> {
    table
        .binary_search_by(|probe| probe.0.cmp(&country.as_str()))
        .ok()
        .map(|idx| table[idx].1)
}

/// The bank-id-code literal expected for a country, if the country
/// constrains the field at all.
pub fn bank_id_code(country: &Country) -> Option<&'static str> {
    lookup(BANK_ID_CODES, country)
}

/// The bank-id descriptor for a country.
pub fn bank_id_rule(country: &Country) -> Option<FieldRule> {
    lookup(BANK_ID_RULES, country)
}

/// The account-number descriptor for a country.
pub fn account_number_rule(country: &Country) -> Option<FieldRule> {
    lookup(ACCOUNT_NUMBER_RULES, country)
}

/// The validator-chain flags for a country. `None` for countries outside
/// the supported set, whose create requests only get the generic checks.
pub fn country_rules(country: &Country) -> Option<CountryRules> {
    lookup(COUNTRY_RULES, country)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sorted_for_lookup() {
        fn is_sorted<T>(table: &[(&str, T)]) -> bool {
            table.windows(2).all(|w| w[0].0 < w[1].0)
        }
        assert!(is_sorted(BANK_ID_CODES));
        assert!(is_sorted(BANK_ID_RULES));
        assert!(is_sorted(ACCOUNT_NUMBER_RULES));
        assert!(is_sorted(COUNTRY_RULES));
    }

    #[test]
    fn test_every_supported_country_has_all_tables() {
        for (code, _) in COUNTRY_RULES {
            let country = Country::from(*code);
            assert!(bank_id_code(&country).is_some(), "{code} bank id code");
            assert!(bank_id_rule(&country).is_some(), "{code} bank id rule");
            assert!(
                account_number_rule(&country).is_some(),
                "{code} account number rule"
            );
        }
    }

    #[test]
    fn test_bank_id_code_literals() {
        assert_eq!(bank_id_code(&Country::from("GB")), Some("GBDSC"));
        assert_eq!(bank_id_code(&Country::from("NL")), Some(""));
        assert_eq!(bank_id_code(&Country::from("SE")), None);
    }

    #[test]
    fn test_exact_length_rule() {
        let rule = FieldRule::exact(true, 8);
        assert!(rule.apply("12345678").is_empty());
        assert_eq!(
            rule.apply("1234567"),
            vec![RuleViolation::Length { min: 8, max: 8 }]
        );
        assert_eq!(rule.apply(""), vec![RuleViolation::Required]);
    }

    #[test]
    fn test_optional_rule_accepts_empty() {
        let rule = FieldRule::exact(false, 8);
        assert!(rule.apply("").is_empty());
    }

    #[test]
    fn test_empty_rule() {
        assert!(FieldRule::Empty.apply("").is_empty());
        assert_eq!(
            FieldRule::Empty.apply("anything"),
            vec![RuleViolation::ShouldBeEmpty]
        );
    }

    #[test]
    fn test_pattern_rule_collects_multiple_violations() {
        let rule = FieldRule::patterned(true, 6, super::SIX_DIGITS);
        // wrong length and wrong shape at once
        let violations = rule.apply("ABC");
        assert_eq!(violations.len(), 2);
        assert!(violations.contains(&RuleViolation::Length { min: 6, max: 6 }));
        assert!(violations.contains(&RuleViolation::Pattern {
            pattern: super::SIX_DIGITS
        }));
    }

    #[test]
    fn test_gb_bank_id_pattern() {
        let rule = bank_id_rule(&Country::from("GB")).unwrap();
        assert!(rule.apply("000006").is_empty());
        assert!(!rule.apply("00000A").is_empty());
    }

    #[test]
    fn test_ca_routing_pattern() {
        let rule = bank_id_rule(&Country::from("CA")).unwrap();
        assert!(rule.apply("012345678").is_empty());
        assert!(!rule.apply("112345678").is_empty());
    }

    #[test]
    fn test_au_account_number_rejects_leading_zero() {
        let rule = account_number_rule(&Country::from("AU")).unwrap();
        assert!(rule.apply("123456").is_empty());
        assert!(rule.apply("1234567890").is_empty());
        assert_eq!(
            rule.apply("023456"),
            vec![RuleViolation::Pattern {
                pattern: super::AU_ACCOUNT
            }]
        );
        assert!(rule.apply("").is_empty());
    }

    #[test]
    fn test_italy_bank_id_descriptor_spans_both_lengths() {
        let rule = bank_id_rule(&Country::from("IT")).unwrap();
        assert!(rule.apply("1234567890").is_empty());
        assert!(rule.apply("12345678901").is_empty());
        assert!(!rule.apply("123456789").is_empty());
    }
}
