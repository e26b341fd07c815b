//! The account delete builder.

use crestbank_types::{DomainField, RecordId, ValidationError};

use crate::client::Client;
use crate::dispatch::Dispatch;
use crate::error::validation_batch;

/// Deletes an account record by id and version.
///
/// The version must match the record's current version; the service answers
/// a mismatch with a conflict.
#[derive(Debug, Clone)]
pub struct DeleteBuilder {
    client: Client,
    account_id: RecordId,
    version: u32,
}

impl DeleteBuilder {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            account_id: RecordId::default(),
            version: 0,
        }
    }

    pub fn with_account_id(mut self, account_id: impl Into<RecordId>) -> Self {
        self.account_id = account_id.into();
        self
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// The account id must be present and well-formed.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.account_id.is_unset() {
            errors.push(ValidationError::missing("id"));
        } else if let Err(err) = self.account_id.check() {
            errors.push(err);
        }

        errors
    }

    /// Validate, then dispatch the delete. Success carries no payload.
    pub fn request(self) -> Dispatch<()> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Dispatch::failed(validation_batch(errors));
        }
        self.dispatch()
    }

    /// Dispatch without client-side validation.
    pub fn unsafe_request(self) -> Dispatch<()> {
        self.dispatch()
    }

    fn dispatch(self) -> Dispatch<()> {
        let Self {
            client,
            account_id,
            version,
        } = self;

        Dispatch::spawn(async move {
            let mut url = client.account_url(&account_id);
            url.query_pairs_mut()
                .append_pair("version", &version.to_string());
            tracing::debug!(%url, "dispatching account delete");
            client.delete_empty(url).await
        })
    }
}
