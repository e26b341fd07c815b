//! The account list builder and page traversal.

use crestbank_types::ValidationError;

use crate::client::Client;
use crate::dispatch::Dispatch;
use crate::error::{validation_batch, Error};
use crate::payload::{AccountPage, PageLinks};

/// Default page size when none is chosen.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Lists account records page by page.
#[derive(Debug, Clone)]
pub struct ListBuilder {
    client: Client,
    page: u32,
    page_size: u32,
}

impl ListBuilder {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn validate(&self) -> Vec<ValidationError> {
        if self.page_size < 1 {
            vec![ValidationError::PageSizeTooSmall]
        } else {
            Vec::new()
        }
    }

    /// Validate, then dispatch the list request.
    pub fn request(self) -> Dispatch<AccountPage> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Dispatch::failed(validation_batch(errors));
        }
        self.dispatch()
    }

    /// Dispatch without client-side validation.
    pub fn unsafe_request(self) -> Dispatch<AccountPage> {
        self.dispatch()
    }

    fn dispatch(self) -> Dispatch<AccountPage> {
        let Self {
            client,
            page,
            page_size,
        } = self;

        Dispatch::spawn(async move {
            let mut url = client.accounts_url();
            url.query_pairs_mut()
                .append_pair("page[number]", &page.to_string())
                .append_pair("page[size]", &page_size.to_string());
            tracing::debug!(%url, "dispatching account list");
            client.get_json(url).await
        })
    }
}

/// Traverses a fetched page through its `first`/`prev`/`next`/`last` links.
///
/// Obtained from [`Client::paginate`] with the links of the page in hand;
/// each traversal delivers a fresh page whose links seed the next paginator.
#[derive(Debug, Clone)]
pub struct Paginator {
    client: Client,
    links: PageLinks,
}

impl Paginator {
    pub(crate) fn new(client: Client, links: PageLinks) -> Self {
        Self { client, links }
    }

    pub fn next(&self) -> Dispatch<AccountPage> {
        self.follow(&self.links.next, "next")
    }

    pub fn prev(&self) -> Dispatch<AccountPage> {
        self.follow(&self.links.prev, "prev")
    }

    pub fn first(&self) -> Dispatch<AccountPage> {
        self.follow(&self.links.first, "first")
    }

    pub fn last(&self) -> Dispatch<AccountPage> {
        self.follow(&self.links.last, "last")
    }

    /// A missing or unresolvable link is delivered as an error through the
    /// normal outcome path, keeping the contract uniform.
    fn follow(&self, link: &str, rel: &'static str) -> Dispatch<AccountPage> {
        if link.is_empty() {
            return Dispatch::failed(vec![Error::Validation(
                ValidationError::MissingPageLink { rel },
            )]);
        }

        match self.client.join_link(link) {
            Ok(url) => {
                let client = self.client.clone();
                Dispatch::spawn(async move {
                    tracing::debug!(%url, "following page link");
                    client.get_json(url).await
                })
            }
            Err(err) => Dispatch::failed(vec![Error::Api(err)]),
        }
    }
}
