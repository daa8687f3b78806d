//! Derived view of a board listing

use serde::{Deserialize, Serialize};

/// Label of the previous-page button.
pub const PREVIOUS_LABEL: &str = "이전";
/// Label of the next-page button.
pub const NEXT_LABEL: &str = "다음";
/// Label of the write button.
pub const WRITE_LABEL: &str = "글쓰기";

/// Default `strftime` pattern for the created-date column.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Rendering options for [`BoardView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewOptions {
    /// `chrono` format string; dates are rendered in UTC.
    pub date_format: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Everything a front-end needs to draw the board page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub title: String,
    /// Route token of the board, used by row / card links.
    pub board_token: String,
    pub layout: Layout,
    pub pagination: PaginationView,
    pub write_button_visible: bool,
    /// A fetch is in flight; the listing shown is the previous one (or empty).
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Layout {
    /// Image cards (boast board).
    Grid { cards: Vec<GridCard> },
    /// Text table (every other board).
    Table {
        columns: Vec<TableColumn>,
        rows: Vec<TableRow>,
    },
}

impl Layout {
    pub fn is_grid(&self) -> bool {
        matches!(self, Self::Grid { .. })
    }

    /// Number of posts shown.
    pub fn len(&self) -> usize {
        match self {
            Self::Grid { cards } => cards.len(),
            Self::Table { rows, .. } => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCard {
    pub post_id: i64,
    pub image_url: Option<String>,
    pub author: String,
    /// Image alt text.
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TableColumn {
    Number,
    Title,
    Author,
    CreatedAt,
    /// Inquiry board only.
    Status,
}

impl TableColumn {
    pub fn label(self) -> &'static str {
        match self {
            Self::Number => "번호",
            Self::Title => "제목",
            Self::Author => "작성자",
            Self::CreatedAt => "작성일",
            Self::Status => "상태",
        }
    }
}

/// One table row; `cells` lines up with the table's columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub post_id: i64,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationView {
    pub pages: Vec<PageButton>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationView {
    /// The highlighted page number.
    pub fn active_page(&self) -> Option<u32> {
        self.pages.iter().find(|p| p.active).map(|p| p.number)
    }

    pub fn numbers(&self) -> Vec<u32> {
        self.pages.iter().map(|p| p.number).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageButton {
    pub number: u32,
    pub active: bool,
}
