//! Board catalog
//!
//! Static mapping from a board identifier to its display parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Title shown for a board token the catalog does not know.
pub const DEFAULT_TITLE: &str = "게시판";
/// Posts per page on every board except [`BoardIdentifier::Boast`].
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Posts per page on the image grid.
pub const BOAST_PAGE_SIZE: u32 = 6;

/// A board category.
///
/// Surface tokens are `"R"`, `"B"`, `"A"`, `"I"`. Any other token is kept as
/// [`Other`](Self::Other): it is still requested from the listing service and still
/// used in routes, it only gets the default title and page size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BoardIdentifier {
    /// 매칭 후기
    Review,
    /// 자랑 (image grid)
    Boast,
    /// 공지사항 (write is privilege-gated)
    Announcement,
    /// 신고/문의 (has a status column)
    Inquiry,
    /// Unrecognized token, kept verbatim.
    Other(String),
}

impl BoardIdentifier {
    /// Map a route token to a board. Case-sensitive; never fails.
    pub fn parse(token: &str) -> Self {
        match token {
            "R" => Self::Review,
            "B" => Self::Boast,
            "A" => Self::Announcement,
            "I" => Self::Inquiry,
            other => Self::Other(other.to_string()),
        }
    }

    /// Surface token used in requests and routes.
    pub fn token(&self) -> &str {
        match self {
            Self::Review => "R",
            Self::Boast => "B",
            Self::Announcement => "A",
            Self::Inquiry => "I",
            Self::Other(token) => token,
        }
    }

    /// Display title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Review => "매칭 후기",
            Self::Boast => "자랑",
            Self::Announcement => "공지사항",
            Self::Inquiry => "신고/문의",
            Self::Other(_) => DEFAULT_TITLE,
        }
    }

    /// Posts requested per page.
    pub fn page_size(&self) -> u32 {
        match self {
            Self::Boast => BOAST_PAGE_SIZE,
            _ => DEFAULT_PAGE_SIZE,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for BoardIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl From<String> for BoardIdentifier {
    fn from(token: String) -> Self {
        Self::parse(&token)
    }
}

impl From<&str> for BoardIdentifier {
    fn from(token: &str) -> Self {
        Self::parse(token)
    }
}

impl From<BoardIdentifier> for String {
    fn from(board: BoardIdentifier) -> Self {
        board.token().to_string()
    }
}

/// Known boards in navigation-menu order.
static MENU: [BoardIdentifier; 4] = [
    BoardIdentifier::Review,
    BoardIdentifier::Boast,
    BoardIdentifier::Announcement,
    BoardIdentifier::Inquiry,
];

/// Catalog lookups by board, in function form.
pub struct BoardCatalog;

impl BoardCatalog {
    pub fn title_of(board: &BoardIdentifier) -> &'static str {
        board.title()
    }

    pub fn page_size_of(board: &BoardIdentifier) -> u32 {
        board.page_size()
    }

    /// Known boards in navigation-menu order.
    pub fn all() -> &'static [BoardIdentifier] {
        &MENU
    }
}
