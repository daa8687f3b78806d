//! 业务逻辑服务层

mod board_view_model;
mod fetch;

pub use board_view_model::{ApplyResult, BoardEvent, BoardViewModel, Phase};
pub use fetch::{DEFAULT_FETCH_TIMEOUT, FetchOutcome, FetchPolicy, FetchTag, FetchTicket};
