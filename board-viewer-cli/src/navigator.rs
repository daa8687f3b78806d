//! Terminal navigation
//!
//! Post detail and the write form live outside this front-end, so navigating only
//! announces the target route.

use board_viewer_core::types::Route;
use board_viewer_core::Navigator;

pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: &Route) {
        tracing::info!("Navigating to {route}");
        println!("-> {route}");
    }
}
