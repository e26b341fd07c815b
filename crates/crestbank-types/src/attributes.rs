//! The account resource payload and the borrowed view validators run over.

use serde::{Deserialize, Serialize};

use crate::country::Country;
use crate::currency::Currency;
use crate::field::{BankId, Classification, Iban, Identifier, RecordId, Status, SwiftCode};

/// The full set of fields describing a bank account record exchanged with
/// the accounts API.
///
/// Every field is optional at the type level; whether a field is mandatory
/// is decided by the country-specific validator chain, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountAttributes {
    #[serde(default)]
    pub country: Country,
    #[serde(default)]
    pub base_currency: Currency,
    #[serde(default)]
    pub bank_id: BankId,
    #[serde(default)]
    pub bank_id_code: String,
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub bic: SwiftCode,
    #[serde(default)]
    pub iban: Iban,
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub name: Vec<Identifier>,
    #[serde(default)]
    pub alternative_names: Vec<Identifier>,
    #[serde(default)]
    pub account_classification: Classification,
    #[serde(default)]
    pub joint_account: bool,
    #[serde(default)]
    pub account_matching_opt_out: bool,
    #[serde(default)]
    pub secondary_identification: Identifier,
    #[serde(default)]
    pub switched: bool,
    #[serde(default)]
    pub status: Status,
}

/// Borrowed view of everything the validator pipeline inspects: the
/// attributes under construction plus the identity fields that live next to
/// them on the create request.
#[derive(Debug, Clone, Copy)]
pub struct AccountDraft<'a> {
    pub attributes: &'a AccountAttributes,
    pub organisation_id: &'a RecordId,
    pub account_id: &'a RecordId,
}
