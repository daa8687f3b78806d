//! Front-end routes

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{BoardCatalog, BoardIdentifier};

/// Label of the login entry in the navigation bar.
pub const LOGIN_LABEL: &str = "로그인";

/// A front-end location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Route {
    Home,
    Board { board: BoardIdentifier },
    PostDetail { board: BoardIdentifier, post_id: i64 },
    WriteForm { board: BoardIdentifier },
    Login,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Board { board } => format!("/boards/{}", board.token()),
            Self::PostDetail { board, post_id } => format!("/boards/{}/{post_id}", board.token()),
            Self::WriteForm { board } => format!("/boards/{}/write", board.token()),
            Self::Login => "/login".to_string(),
        }
    }

    /// Navigation bar entries, left to right: the known boards then login.
    pub fn navigation_bar() -> Vec<(&'static str, Route)> {
        BoardCatalog::all()
            .iter()
            .map(|board| (board.title(), Route::Board { board: board.clone() }))
            .chain(std::iter::once((LOGIN_LABEL, Route::Login)))
            .collect()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
