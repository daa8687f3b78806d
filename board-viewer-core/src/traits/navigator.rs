//! Navigation capability trait

use crate::types::Route;

/// Navigation capability injected into the view-model.
///
/// Front-ends implement this to move to another screen (post detail, write form).
/// Calls are fire-and-forget.
pub trait Navigator: Send + Sync {
    /// Navigate to a route
    ///
    /// # Arguments
    /// * `route` - Target location
    fn navigate(&self, route: &Route);
}
