//! The account fetch builder.

use crestbank_types::{DomainField, RecordId, ValidationError};

use crate::client::Client;
use crate::dispatch::Dispatch;
use crate::error::validation_batch;
use crate::payload::Payload;

/// Fetches a single account record by id.
#[derive(Debug, Clone)]
pub struct FetchBuilder {
    client: Client,
    account_id: RecordId,
}

impl FetchBuilder {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            account_id: RecordId::default(),
        }
    }

    pub fn with_account_id(mut self, account_id: impl Into<RecordId>) -> Self {
        self.account_id = account_id.into();
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

    /// Validate, then dispatch the fetch.
    pub fn request(self) -> Dispatch<Payload> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Dispatch::failed(validation_batch(errors));
        }
        self.dispatch()
    }

    /// Dispatch without client-side validation.
    pub fn unsafe_request(self) -> Dispatch<Payload> {
        self.dispatch()
    }

    fn dispatch(self) -> Dispatch<Payload> {
        let Self { client, account_id } = self;

        Dispatch::spawn(async move {
            let url = client.account_url(&account_id);
            tracing::debug!(%url, "dispatching account fetch");
            client.get_json(url).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn client() -> Client {
        Client::new(Config::new("http://localhost:8080").unwrap()).unwrap()
    }

    #[test]
    fn test_missing_account_id() {
        let errors = client().fetch_account().validate();
        assert_eq!(errors, vec![ValidationError::missing("id")]);
    }

    #[test]
    fn test_malformed_account_id() {
        let errors = client().fetch_account().with_account_id("123456").validate();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::InvalidRecordId { .. }]
        ));
    }

    #[test]
    fn test_well_formed_account_id_passes() {
        let errors = client()
            .fetch_account()
            .with_account_id("ad27e265-9605-4b4b-a0e5-3003ea9cc419")
            .validate();
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn test_request_with_bad_id_delivers_errors_without_io() {
        let outcome = client().fetch_account().request().outcome().await;
        assert!(outcome.is_err());
    }
}
