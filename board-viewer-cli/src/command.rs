//! Interactive line commands

use board_viewer_core::{BoardEvent, BoardIdentifier};

pub const HELP: &str = "\
commands:
  n            next page (다음)
  p            previous page (이전)
  <number>     go to page
  b <token>    switch board (R, B, A, I)
  o <id>       open a post
  w            open the write form (글쓰기)
  r            refresh
  h            this help
  q            quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(BoardEvent),
    OpenPost(i64),
    Write,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();
        if words.next().is_some() {
            return Err(format!("too many arguments: {line}"));
        }

        let command = match (head, arg) {
            ("n", None) => Self::Event(BoardEvent::NextPage),
            ("p", None) => Self::Event(BoardEvent::PreviousPage),
            ("r", None) => Self::Event(BoardEvent::Refresh),
            ("w", None) => Self::Write,
            ("h" | "?", None) => Self::Help,
            ("q", None) => Self::Quit,
            ("b", Some(token)) => Self::Event(BoardEvent::BoardChanged(BoardIdentifier::parse(token))),
            ("o", Some(id)) => Self::OpenPost(
                id.parse()
                    .map_err(|_| format!("not a post id: {id}"))?,
            ),
            ("b" | "o", None) => return Err(format!("'{head}' needs an argument")),
            (page, None) if page.chars().all(|c| c.is_ascii_digit()) => Self::Event(
                BoardEvent::PageSelected(page.parse().map_err(|_| format!("page out of range: {page}"))?),
            ),
            _ => return Err(format!("unknown command: {line} (h for help)")),
        };
        Ok(Some(command))
    }
}
