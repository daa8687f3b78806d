use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Query ============

/// Parameters for one page-scoped listing request.
///
/// Pages are 1-indexed. `board_type` is the board's surface token (`"R"`, `"B"`,
/// `"A"`, `"I"`, or whatever token the route carried).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    /// Board token sent as the `type` query parameter.
    pub board_type: String,
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of posts per page.
    pub page_size: u32,
}

impl ListingQuery {
    pub fn new(board_type: impl Into<String>, page: u32, page_size: u32) -> Self {
        Self {
            board_type: board_type.into(),
            page,
            page_size,
        }
    }

    /// Clamp `page` and `page_size` to `>= 1`.
    #[must_use]
    pub fn validated(&self) -> Self {
        Self {
            board_type: self.board_type.clone(),
            page: self.page.max(1),
            page_size: self.page_size.max(1),
        }
    }
}

// ============ Post ============

/// A post as returned by the listing service.
///
/// Field names follow the wire format (`board_id`, `member_id`, `content_img`, ...)
/// on (de)serialization. `id` is unique per board only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "board_id")]
    pub id: i64,
    pub title: String,
    #[serde(rename = "member_id")]
    pub author_id: String,
    #[serde(with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
    /// Cover image, used by the grid layout.
    #[serde(
        rename = "content_img",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub content_image_url: Option<String>,
    /// Only present on the inquiry board.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inquiry_status: Option<String>,
}

// ============ Page ============

/// One page of posts.
///
/// Replaces the previous page wholesale; there is no incremental merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    /// Posts on this page, in service order.
    pub items: Vec<Post>,
    /// Total number of pages, always `>= 1`.
    pub total_pages: u32,
}

impl PageResult {
    /// Create a page, clamping `total_pages` to `>= 1`.
    pub fn new(items: Vec<Post>, total_pages: u32) -> Self {
        Self {
            items,
            total_pages: total_pages.max(1),
        }
    }

    /// The "zero results, one page" value used when a fetch fails.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 1)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for PageResult {
    fn default() -> Self {
        Self::empty()
    }
}

// ============ Wire responses ============

/// `GET /boards` response body. Both fields are optional on the wire.
#[derive(Debug, Deserialize)]
pub(crate) struct BoardListingResponse {
    #[serde(default)]
    pub content: Option<Vec<Post>>,
    #[serde(rename = "totalPages", default)]
    pub total_pages: Option<u32>,
}

impl BoardListingResponse {
    /// Missing or null `content` becomes an empty page; missing, null or zero
    /// `totalPages` becomes 1.
    pub fn into_page_result(self) -> PageResult {
        PageResult::new(
            self.content.unwrap_or_default(),
            self.total_pages.unwrap_or(1),
        )
    }
}

/// `GET /user/role` response body.
#[derive(Debug, Deserialize)]
pub(crate) struct RoleResponse {
    #[serde(default)]
    pub role: Option<String>,
}
