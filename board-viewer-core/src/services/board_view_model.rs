//! Board page view-model
//!
//! Owns (board, page) and the last installed listing. Events go through
//! [`BoardViewModel::handle`], which returns a [`FetchTicket`] when a fetch is needed.
//! The owner runs the ticket and feeds the outcome back through
//! [`BoardViewModel::apply`]. Outcomes whose tag no longer matches the current
//! (board, page) are discarded.

use std::fmt::Write as _;
use std::sync::Arc;

use board_viewer_provider::{FetchError, ListingService, PageResult, Post};
use chrono::{DateTime, Utc};

use crate::catalog::BoardIdentifier;
use crate::pagination::PaginationState;
use crate::services::fetch::{FetchOutcome, FetchPolicy, FetchTag, FetchTicket};
use crate::traits::Navigator;
use crate::types::{
    BoardView, DEFAULT_DATE_FORMAT, GridCard, Layout, PageButton, PaginationView, Route,
    TableColumn, TableRow, ViewOptions,
};

/// User-driven transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// Route parameter changed; resets to page 1.
    BoardChanged(BoardIdentifier),
    /// Page button clicked; clamped into `[1, total_pages]`.
    PageSelected(u32),
    PreviousPage,
    NextPage,
    /// Re-fetch the current (board, page).
    Refresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

/// Result of [`BoardViewModel::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ApplyResult {
    Applied,
    /// The outcome was for a (board, page) that is no longer current.
    Discarded,
    /// The listing has fewer pages than the current page; the page was clamped and
    /// this ticket fetches it.
    Refetch(FetchTicket),
}

pub struct BoardViewModel {
    board: BoardIdentifier,
    pagination: PaginationState,
    phase: Phase,
    page: PageResult,
    privileged: bool,
    navigator: Arc<dyn Navigator>,
}

impl BoardViewModel {
    /// View-model for `board`, on page 1, not yet fetched.
    #[must_use]
    pub fn new(board: BoardIdentifier, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            board,
            pagination: PaginationState::default(),
            phase: Phase::Loading,
            page: PageResult::empty(),
            privileged: false,
            navigator,
        }
    }

    /// Start on `page` instead of page 1. Out-of-range pages are clamped once the
    /// first listing arrives.
    #[must_use]
    pub fn with_initial_page(mut self, page: u32) -> Self {
        self.pagination.current_page = page.max(1);
        self
    }

    // ===== Accessors =====

    pub fn board(&self) -> &BoardIdentifier {
        &self.board
    }

    pub fn current_page(&self) -> u32 {
        self.pagination.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.pagination.total_pages
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Last installed listing.
    pub fn page(&self) -> &PageResult {
        &self.page
    }

    pub fn is_privileged(&self) -> bool {
        self.privileged
    }

    /// Tag an outcome must carry to be applied.
    pub fn current_tag(&self) -> FetchTag {
        FetchTag {
            board: self.board.clone(),
            page: self.pagination.current_page,
        }
    }

    pub fn write_button_visible(&self) -> bool {
        self.board != BoardIdentifier::Announcement || self.privileged
    }

    // ===== Transitions =====

    /// Initial fetch for the board given at construction.
    pub fn start(&mut self) -> FetchTicket {
        log::debug!("Starting board view at {}", self.current_tag());
        self.enter_loading()
    }

    /// Apply an event. Returns the fetch to run, or `None` when nothing changed.
    pub fn handle(&mut self, event: BoardEvent) -> Option<FetchTicket> {
        let target = match event {
            BoardEvent::BoardChanged(board) => {
                if board == self.board {
                    log::debug!("Board {board} already shown");
                    return None;
                }
                log::debug!("Board changed: {} -> {board}", self.board);
                self.board = board;
                self.pagination = PaginationState::default();
                self.page = PageResult::empty();
                return Some(self.enter_loading());
            }
            BoardEvent::Refresh => {
                log::debug!("Refreshing {}", self.current_tag());
                return Some(self.enter_loading());
            }
            BoardEvent::PageSelected(page) => page.clamp(1, self.pagination.total_pages.max(1)),
            BoardEvent::PreviousPage => self.pagination.previous_page(),
            BoardEvent::NextPage => self.pagination.next_page(),
        };

        if target == self.pagination.current_page {
            log::debug!("Page {target} already shown");
            return None;
        }
        log::debug!(
            "Page changed on {}: {} -> {target}",
            self.board,
            self.pagination.current_page
        );
        self.pagination.current_page = target;
        Some(self.enter_loading())
    }

    /// Install a fetch outcome.
    ///
    /// Failed fetches resolve to their defaults: an empty listing of one page and a
    /// non-privileged flag.
    pub fn apply(&mut self, outcome: FetchOutcome) -> ApplyResult {
        let current = self.current_tag();
        if outcome.tag != current {
            log::debug!("Discarding stale outcome {} (current {current})", outcome.tag);
            return ApplyResult::Discarded;
        }

        self.privileged = outcome.privilege.unwrap_or_else(|e| {
            log_absorbed("privilege", &e);
            false
        });

        match outcome.listing {
            Ok(page) => {
                let total = page.total_pages.max(1);
                self.pagination.total_pages = total;
                self.page = page;
                if self.pagination.current_page > total {
                    log::debug!(
                        "Page {} beyond last page {total} of {}, clamping",
                        self.pagination.current_page,
                        self.board
                    );
                    self.pagination.current_page = total;
                    return ApplyResult::Refetch(FetchTicket::new(&self.board, total));
                }
            }
            Err(e) => {
                log_absorbed("listing", &e);
                self.page = PageResult::empty();
                self.pagination = PaginationState::default();
            }
        }

        self.phase = Phase::Ready;
        log::debug!(
            "Board {} ready: page {}/{}, {} posts, privileged={}",
            self.board,
            self.pagination.current_page,
            self.pagination.total_pages,
            self.page.items.len(),
            self.privileged
        );
        ApplyResult::Applied
    }

    /// Run `ticket` and apply it, following clamp refetches until the view settles.
    pub async fn drive(
        &mut self,
        ticket: FetchTicket,
        service: &dyn ListingService,
        policy: &FetchPolicy,
    ) {
        let mut ticket = ticket;
        loop {
            let outcome = ticket.run(service, policy).await;
            match self.apply(outcome) {
                ApplyResult::Refetch(next) => ticket = next,
                ApplyResult::Applied | ApplyResult::Discarded => return,
            }
        }
    }

    /// [`handle`](Self::handle) then [`drive`](Self::drive). Returns whether a fetch ran.
    pub async fn dispatch(
        &mut self,
        event: BoardEvent,
        service: &dyn ListingService,
        policy: &FetchPolicy,
    ) -> bool {
        let Some(ticket) = self.handle(event) else {
            return false;
        };
        self.drive(ticket, service, policy).await;
        true
    }

    fn enter_loading(&mut self) -> FetchTicket {
        self.phase = Phase::Loading;
        FetchTicket::new(&self.board, self.pagination.current_page)
    }

    // ===== Navigation =====

    /// Navigate to a post's detail page.
    pub fn open_post(&self, post_id: i64) {
        let route = Route::PostDetail {
            board: self.board.clone(),
            post_id,
        };
        log::debug!("Opening {route}");
        self.navigator.navigate(&route);
    }

    /// Navigate to the write form. Refused (returns `false`) when the write button is
    /// hidden.
    pub fn open_write_form(&self) -> bool {
        if !self.write_button_visible() {
            log::warn!("Write form refused on {}: not privileged", self.board);
            return false;
        }
        let route = Route::WriteForm {
            board: self.board.clone(),
        };
        log::debug!("Opening {route}");
        self.navigator.navigate(&route);
        true
    }

    // ===== View =====

    pub fn view(&self, options: &ViewOptions) -> BoardView {
        let layout = if self.board == BoardIdentifier::Boast {
            Layout::Grid {
                cards: self.page.items.iter().map(grid_card).collect(),
            }
        } else {
            let columns = self.table_columns();
            let rows = self
                .page
                .items
                .iter()
                .map(|post| table_row(post, &columns, &options.date_format))
                .collect();
            Layout::Table { columns, rows }
        };

        let current = self.pagination.current_page;
        BoardView {
            title: self.board.title().to_string(),
            board_token: self.board.token().to_string(),
            layout,
            pagination: PaginationView {
                pages: self
                    .pagination
                    .window()
                    .into_iter()
                    .map(|number| PageButton {
                        number,
                        active: number == current,
                    })
                    .collect(),
                previous_enabled: self.pagination.has_previous(),
                next_enabled: self.pagination.has_next(),
            },
            write_button_visible: self.write_button_visible(),
            loading: self.is_loading(),
        }
    }

    fn table_columns(&self) -> Vec<TableColumn> {
        let mut columns = vec![
            TableColumn::Number,
            TableColumn::Title,
            TableColumn::Author,
            TableColumn::CreatedAt,
        ];
        if self.board == BoardIdentifier::Inquiry {
            columns.push(TableColumn::Status);
        }
        columns
    }
}

fn log_absorbed(what: &str, error: &FetchError) {
    log::log!(
        absorbed_level(error),
        "Failed to fetch {what}, using default: {error}"
    );
}

/// Routine failures (e.g. 401 on the role lookup for anonymous visitors) at `info`.
fn absorbed_level(error: &FetchError) -> log::Level {
    if error.is_expected() {
        log::Level::Info
    } else {
        log::Level::Warn
    }
}

fn grid_card(post: &Post) -> GridCard {
    GridCard {
        post_id: post.id,
        image_url: post.content_image_url.clone(),
        author: post.author_id.clone(),
        title: post.title.clone(),
    }
}

fn table_row(post: &Post, columns: &[TableColumn], date_format: &str) -> TableRow {
    let cells = columns
        .iter()
        .map(|column| match column {
            TableColumn::Number => post.id.to_string(),
            TableColumn::Title => post.title.clone(),
            TableColumn::Author => post.author_id.clone(),
            TableColumn::CreatedAt => format_date(&post.created_at, date_format),
            TableColumn::Status => post.inquiry_status.clone().unwrap_or_default(),
        })
        .collect();
    TableRow {
        post_id: post.id,
        cells,
    }
}

/// Format in UTC; an unusable pattern falls back to the default one.
fn format_date(at: &DateTime<Utc>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", at.format(pattern)).is_err() {
        out.clear();
        let _ = write!(out, "{}", at.format(DEFAULT_DATE_FORMAT));
    }
    out
}
