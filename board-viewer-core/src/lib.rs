//! Board Viewer Core Library
//!
//! Front-end independent logic of the board page:
//! - Board catalog (titles, page sizes)
//! - Sliding pagination window
//! - Board view-model (event-driven fetch state machine and derived view)
//!
//! Remote access goes through [`ListingService`] and screen changes through
//! [`Navigator`], so any front-end (terminal, web, desktop) can drive the same
//! view-model.

pub mod catalog;
pub mod error;
pub mod pagination;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use catalog::{BoardCatalog, BoardIdentifier};
pub use error::{CoreError, CoreResult};
pub use services::{
    ApplyResult, BoardEvent, BoardViewModel, FetchOutcome, FetchPolicy, FetchTag, FetchTicket,
    Phase,
};
pub use traits::{ListingService, Navigator};
