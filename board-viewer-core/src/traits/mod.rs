//! Collaborator trait definitions

mod navigator;

pub use board_viewer_provider::ListingService;
pub use navigator::Navigator;
