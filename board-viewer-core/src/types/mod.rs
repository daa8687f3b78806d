//! Core type definitions

mod route;
mod view;

pub use route::{LOGIN_LABEL, Route};
pub use view::{
    BoardView, DEFAULT_DATE_FORMAT, GridCard, Layout, NEXT_LABEL, PREVIOUS_LABEL, PageButton,
    PaginationView, TableColumn, TableRow, ViewOptions, WRITE_LABEL,
};
