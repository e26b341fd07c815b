//! The account create builder.
//!
//! A fluent accumulator over [`AccountAttributes`] plus the identity fields
//! that sit next to them on the wire. Setters consume and return the
//! builder; the builder is `Clone`, so a partially-filled snapshot can be
//! branched into independent variants.

use crestbank_types::{
    validate, AccountAttributes, AccountDraft, BankId, Classification, Country, Currency, Iban,
    Identifier, RecordId, RequestKind, Status, SwiftCode, ValidationError,
};

use crate::client::Client;
use crate::dispatch::Dispatch;
use crate::error::validation_batch;
use crate::payload::{Data, Links, Payload, ACCOUNTS_TYPE};

/// Accumulates the fields of an account create request.
#[derive(Debug, Clone)]
pub struct CreateBuilder {
    client: Client,
    attributes: AccountAttributes,
    organisation_id: RecordId,
    account_id: RecordId,
}

impl CreateBuilder {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            attributes: AccountAttributes::default(),
            organisation_id: RecordId::default(),
            account_id: RecordId::default(),
        }
    }

    pub fn with_country(mut self, country: impl Into<Country>) -> Self {
        self.attributes.country = country.into();
        self
    }

    pub fn with_base_currency(mut self, currency: impl Into<Currency>) -> Self {
        self.attributes.base_currency = currency.into();
        self
    }

    pub fn with_bank_id(mut self, bank_id: impl Into<BankId>) -> Self {
        self.attributes.bank_id = bank_id.into();
        self
    }

    pub fn with_bank_id_code(mut self, bank_id_code: impl Into<String>) -> Self {
        self.attributes.bank_id_code = bank_id_code.into();
        self
    }

    pub fn with_account_number(mut self, account_number: impl Into<String>) -> Self {
        self.attributes.account_number = account_number.into();
        self
    }

    pub fn with_bic(mut self, bic: impl Into<SwiftCode>) -> Self {
        self.attributes.bic = bic.into();
        self
    }

    pub fn with_iban(mut self, iban: impl Into<Iban>) -> Self {
        self.attributes.iban = iban.into();
        self
    }

    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.attributes.customer_id = customer_id.into();
        self
    }

    /// Append one entry to the name list.
    pub fn with_name(mut self, name: impl Into<Identifier>) -> Self {
        self.attributes.name.push(name.into());
        self
    }

    /// Append one entry to the alternative names list.
    pub fn with_alternative_name(mut self, name: impl Into<Identifier>) -> Self {
        self.attributes.alternative_names.push(name.into());
        self
    }

    pub fn with_account_classification(
        mut self,
        classification: impl Into<Classification>,
    ) -> Self {
        self.attributes.account_classification = classification.into();
        self
    }

    pub fn with_joint_account(mut self, joint_account: bool) -> Self {
        self.attributes.joint_account = joint_account;
        self
    }

    pub fn with_account_matching_opt_out(mut self, opt_out: bool) -> Self {
        self.attributes.account_matching_opt_out = opt_out;
        self
    }

    pub fn with_secondary_identification(mut self, identifier: impl Into<Identifier>) -> Self {
        self.attributes.secondary_identification = identifier.into();
        self
    }

    pub fn with_switched(mut self, switched: bool) -> Self {
        self.attributes.switched = switched;
        self
    }

    pub fn with_status(mut self, status: impl Into<Status>) -> Self {
        self.attributes.status = status.into();
        self
    }

    pub fn with_organisation_id(mut self, organisation_id: impl Into<RecordId>) -> Self {
        self.organisation_id = organisation_id.into();
        self
    }

    pub fn with_account_id(mut self, account_id: impl Into<RecordId>) -> Self {
        self.account_id = account_id.into();
        self
    }

    /// Materialize the attributes exactly as set, with no validation.
    ///
    /// For trusted callers assembling pre-vetted fixtures, or for
    /// submitting via [`Self::unsafe_request`] and letting the service
    /// perform the authoritative validation.
    pub fn raw_build(&self) -> AccountAttributes {
        self.attributes.clone()
    }

    /// Validate for the given request kind and materialize the attributes,
    /// or report the full error batch.
    pub fn build(&self, kind: RequestKind) -> Result<AccountAttributes, Vec<ValidationError>> {
        let errors = validate(kind, &self.draft());
        if errors.is_empty() {
            Ok(self.attributes.clone())
        } else {
            Err(errors)
        }
    }

    /// Run the create validator chain without any network call.
    pub fn validate(&self) -> Vec<ValidationError> {
        validate(RequestKind::Create, &self.draft())
    }

    /// Validate, then dispatch the create request.
    ///
    /// On validation failure the error batch is delivered through the
    /// returned [`Dispatch`] and nothing goes on the wire.
    pub fn request(self) -> Dispatch<Payload> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Dispatch::failed(validation_batch(errors));
        }
        self.dispatch()
    }

    /// Dispatch without client-side validation, observing the service's
    /// own validation instead.
    pub fn unsafe_request(self) -> Dispatch<Payload> {
        self.dispatch()
    }

    fn draft(&self) -> AccountDraft<'_> {
        AccountDraft {
            attributes: &self.attributes,
            organisation_id: &self.organisation_id,
            account_id: &self.account_id,
        }
    }

    fn dispatch(self) -> Dispatch<Payload> {
        let Self {
            client,
            attributes,
            organisation_id,
            account_id,
        } = self;

        let payload = Payload {
            data: Data {
                id: account_id,
                organisation_id,
                record_type: ACCOUNTS_TYPE.to_owned(),
                version: 0,
                created_on: None,
                modified_on: None,
                attributes,
            },
            links: Links::default(),
        };

        Dispatch::spawn(async move {
            let url = client.accounts_url();
            tracing::debug!(%url, "dispatching account create");
            client.post_json(url, payload).await
        })
    }
}
