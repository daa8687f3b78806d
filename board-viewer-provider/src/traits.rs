use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ListingQuery, PageResult};

/// Remote listing service.
///
/// One network call per method invocation. Implementations do not cache and do not
/// deduplicate; the caller decides when to fetch. Failures are returned as
/// [`FetchError`](crate::FetchError) and it is up to the caller to degrade them to
/// an empty page or a non-privileged flag.
#[async_trait]
pub trait ListingService: Send + Sync {
    /// One page of posts for `query.board_type`.
    async fn fetch_page(&self, query: &ListingQuery) -> Result<PageResult>;

    /// Whether the current user holds the privileged role.
    async fn fetch_privilege(&self) -> Result<bool>;
}
