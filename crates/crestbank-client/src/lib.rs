//! Async client for the Crestbank accounts API.
//!
//! The client composes account resource requests field by field, enforces
//! country-specific banking-identifier rules before anything goes on the
//! wire, and maps the service's JSON error envelope into typed error
//! values.
//!
//! # Quick Start
//!
//! ```ignore
//! use crestbank_client::{Client, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(Config::new("http://localhost:8080")?)?;
//!
//!     let created = client
//!         .create_account()
//!         .with_organisation_id("eb0bd6f5-c3f5-44b2-b677-acd23cdde73c")
//!         .with_account_id("ad27e265-9605-4b4b-a0e5-3003ea9cc419")
//!         .with_country("GB")
//!         .with_bank_id("000006")
//!         .with_bank_id_code("GBDSC")
//!         .with_bic("NWBKGB22")
//!         .with_account_classification("Personal")
//!         .request()
//!         .outcome()
//!         .await;
//!
//!     match created {
//!         Ok(payload) => println!("created account {}", payload.data.id),
//!         Err(errors) => {
//!             for err in errors {
//!                 eprintln!("error: {err}");
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Delivery contract
//!
//! Request dispatch never blocks the caller: each terminal `request()`
//! spawns one unit of work for one HTTP round trip and hands back a
//! [`Dispatch`]. Awaiting [`Dispatch::outcome`] yields exactly one of a
//! payload or a non-empty error batch. Validation failures resolve the
//! dispatch immediately, before any network I/O.
//!
//! The client never retries. Errors that are safe to retry after backoff
//! say so via [`ApiError::is_retryable`]; the policy belongs to the caller.

pub mod client;
pub mod config;
pub mod create;
pub mod delete;
pub mod dispatch;
pub mod error;
pub mod fetch;
pub mod list;
pub mod payload;

pub use client::{Client, ACCOUNTS_PATH};
pub use config::{Config, ConfigError};
pub use create::CreateBuilder;
pub use delete::DeleteBuilder;
pub use dispatch::{Dispatch, Outcome};
pub use error::{ApiError, Error, ErrorBatch};
pub use fetch::FetchBuilder;
pub use list::{ListBuilder, Paginator, DEFAULT_PAGE_SIZE};
pub use payload::{AccountPage, BadRequestBody, Data, Links, PageLinks, Payload, ACCOUNTS_TYPE};

pub use crestbank_types as types;
