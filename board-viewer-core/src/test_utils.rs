//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use board_viewer_provider::{FetchError, ListingQuery, ListingService, PageResult, Post};
use chrono::{TimeZone, Utc};

use crate::catalog::BoardIdentifier;
use crate::services::BoardViewModel;
use crate::traits::Navigator;
use crate::types::Route;

// ===== MockListingService =====

/// Scripted listing service.
///
/// Listings are looked up by (board token, page) and fall back to an empty page.
/// Every received query and every role lookup is recorded.
pub struct MockListingService {
    listings: Mutex<HashMap<(String, u32), Result<PageResult, FetchError>>>,
    privilege: Mutex<Result<bool, FetchError>>,
    /// Delay before answering; pairs with tokio's paused clock.
    delay: Mutex<Option<Duration>>,
    queries: Mutex<Vec<ListingQuery>>,
    privilege_calls: AtomicUsize,
}

impl MockListingService {
    pub fn new() -> Self {
        Self {
            listings: Mutex::new(HashMap::new()),
            privilege: Mutex::new(Ok(false)),
            delay: Mutex::new(None),
            queries: Mutex::new(Vec::new()),
            privilege_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_listing(&self, board: &str, page: u32, result: Result<PageResult, FetchError>) {
        self.listings
            .lock()
            .unwrap()
            .insert((board.to_string(), page), result);
    }

    pub fn set_privilege(&self, result: Result<bool, FetchError>) {
        *self.privilege.lock().unwrap() = result;
    }

    pub fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.lock().unwrap() = delay;
    }

    pub fn queries(&self) -> Vec<ListingQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn privilege_calls(&self) -> usize {
        self.privilege_calls.load(Ordering::SeqCst)
    }

    async fn wait(&self) {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl ListingService for MockListingService {
    async fn fetch_page(&self, query: &ListingQuery) -> board_viewer_provider::Result<PageResult> {
        self.queries.lock().unwrap().push(query.clone());
        self.wait().await;
        self.listings
            .lock()
            .unwrap()
            .get(&(query.board_type.clone(), query.page))
            .cloned()
            .unwrap_or_else(|| Ok(PageResult::empty()))
    }

    async fn fetch_privilege(&self) -> board_viewer_provider::Result<bool> {
        self.privilege_calls.fetch_add(1, Ordering::SeqCst);
        self.wait().await;
        self.privilege.lock().unwrap().clone()
    }
}

// ===== RecordingNavigator =====

#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.routes().iter().map(Route::path).collect()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &Route) {
        self.routes.lock().unwrap().push(route.clone());
    }
}

// ===== Factories =====

/// A post by `u1` created 2024-01-01T00:00:00Z.
pub fn post(id: i64, title: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        author_id: "u1".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        content_image_url: None,
        inquiry_status: None,
    }
}

pub fn view_model(board: BoardIdentifier) -> (BoardViewModel, Arc<RecordingNavigator>) {
    let navigator = Arc::new(RecordingNavigator::default());
    let vm = BoardViewModel::new(board, navigator.clone());
    (vm, navigator)
}
