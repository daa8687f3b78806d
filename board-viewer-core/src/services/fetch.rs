//! Tagged listing + privilege fetch

use std::future::Future;
use std::time::Duration;

use board_viewer_provider::{
    BOARDS_ENDPOINT, FetchError, ListingQuery, ListingService, PageResult, ROLE_ENDPOINT,
};

use crate::catalog::BoardIdentifier;
use crate::error::{CoreError, CoreResult};

/// Upper bound for each of the two fetches unless configured otherwise.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Bounds applied by [`FetchTicket::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPolicy {
    timeout: Duration,
}

impl FetchPolicy {
    /// Policy with a per-fetch timeout. A zero timeout is rejected.
    pub fn new(timeout: Duration) -> CoreResult<Self> {
        if timeout.is_zero() {
            return Err(CoreError::ValidationError(
                "fetch timeout must be greater than zero".to_string(),
            ));
        }
        Ok(Self { timeout })
    }

    pub fn from_secs(secs: u64) -> CoreResult<Self> {
        Self::new(Duration::from_secs(secs))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

/// The (board, page) a fetch was issued for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchTag {
    pub board: BoardIdentifier,
    pub page: u32,
}

impl std::fmt::Display for FetchTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.board, self.page)
    }
}

/// A pending fetch handed out by the view-model.
///
/// Running it does not borrow the view-model, so the owner may keep handling events
/// while it is in flight and hand the [`FetchOutcome`] back later.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a ticket does nothing until it is run"]
pub struct FetchTicket {
    tag: FetchTag,
    query: ListingQuery,
}

impl FetchTicket {
    pub(crate) fn new(board: &BoardIdentifier, page: u32) -> Self {
        Self {
            tag: FetchTag {
                board: board.clone(),
                page,
            },
            query: ListingQuery::new(board.token(), page, board.page_size()),
        }
    }

    pub fn tag(&self) -> &FetchTag {
        &self.tag
    }

    /// Listing request this ticket issues.
    pub fn query(&self) -> &ListingQuery {
        &self.query
    }

    /// Fetch the listing and the privilege flag concurrently.
    ///
    /// Each fetch is bounded by `policy.timeout()`; an expired fetch resolves to
    /// [`FetchError::Timeout`]. Never fails as a whole.
    pub async fn run(self, service: &dyn ListingService, policy: &FetchPolicy) -> FetchOutcome {
        log::debug!("Fetching {} (size {})", self.tag, self.query.page_size);

        let limit = policy.timeout();
        let (listing, privilege) = futures::join!(
            bounded(limit, BOARDS_ENDPOINT, service.fetch_page(&self.query)),
            bounded(limit, ROLE_ENDPOINT, service.fetch_privilege()),
        );

        FetchOutcome {
            tag: self.tag,
            listing,
            privilege,
        }
    }
}

/// Raw results of a [`FetchTicket`], still carrying their errors.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub tag: FetchTag,
    pub listing: Result<PageResult, FetchError>,
    pub privilege: Result<bool, FetchError>,
}

async fn bounded<T>(
    limit: Duration,
    endpoint: &str,
    fut: impl Future<Output = Result<T, FetchError>>,
) -> Result<T, FetchError> {
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout {
            endpoint: endpoint.to_string(),
            detail: format!("no response within {}ms", limit.as_millis()),
        }),
    }
}
