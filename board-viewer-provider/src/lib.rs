//! # board-viewer-provider
//!
//! Client for the board listing service: page-scoped post listings and the
//! current user's role.
//!
//! ## Endpoints
//!
//! | Operation | Request | Response |
//! |-----------|---------|----------|
//! | [`ListingService::fetch_page`] | `GET /boards?type={token}&page={n}&size={n}` | `{ content: [Post], totalPages: int }` |
//! | [`ListingService::fetch_privilege`] | `GET /user/role` | `{ role: string }` |
//!
//! Both response fields of the listing are optional: a missing (or `null`) `content`
//! is an empty page and a missing (or zero) `totalPages` is one page.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use board_viewer_provider::{ClientOptions, HttpListingClient, ListingQuery, ListingService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpListingClient::new(ClientOptions::default());
//!
//!     let page = client.fetch_page(&ListingQuery::new("R", 1, 10)).await?;
//!     for post in &page.items {
//!         println!("{} {} ({})", post.id, post.title, post.author_id);
//!     }
//!     println!("page 1 of {}", page.total_pages);
//!
//!     let admin = client.fetch_privilege().await.unwrap_or(false);
//!     println!("admin: {admin}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, FetchError>`](FetchError). Every variant maps
//! onto one of two kinds via [`FetchError::kind`]:
//!
//! - [`FetchErrorKind::Transport`]: unreachable, timed out, or non-2xx
//! - [`FetchErrorKind::MalformedResponse`]: the body did not parse
//!
//! Retries are off by default; see [`ClientOptions::max_retries`].

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{BOARDS_ENDPOINT, ClientOptions, HttpListingClient, ROLE_ENDPOINT};
pub use error::{FetchError, FetchErrorKind, Result};
pub use traits::ListingService;
pub use types::{ListingQuery, PageResult, Post};
