//! Plain-text rendering of a [`BoardView`]
//!
//! Column widths are measured in terminal cells so Hangul (double width) lines up.

use board_viewer_core::types::{
    BoardView, GridCard, Layout, NEXT_LABEL, PREVIOUS_LABEL, PaginationView, TableColumn,
    TableRow, WRITE_LABEL,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cards per grid row.
const GRID_COLUMNS: usize = 3;
/// Widest a single cell may get before it is cut.
const MAX_CELL_WIDTH: usize = 40;
const EMPTY_TEXT: &str = "게시글이 없습니다.";

pub fn render(view: &BoardView) -> String {
    let mut out = String::new();
    out.push_str(&format!("== {} ==", view.title));
    if view.loading {
        out.push_str(" (loading)");
    }
    out.push('\n');

    if view.layout.is_empty() {
        out.push_str(EMPTY_TEXT);
        out.push('\n');
    } else {
        match &view.layout {
            Layout::Table { columns, rows } => render_table(&mut out, columns, rows),
            Layout::Grid { cards } => render_grid(&mut out, cards),
        }
    }

    out.push('\n');
    out.push_str(&pagination_bar(&view.pagination));
    out.push('\n');
    if view.write_button_visible {
        out.push_str(&format!("[{WRITE_LABEL}]\n"));
    }
    out
}

fn render_table(out: &mut String, columns: &[TableColumn], rows: &[TableRow]) {
    let header: Vec<String> = columns.iter().map(|c| c.label().to_string()).collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.cells.iter().map(|cell| truncate(cell, MAX_CELL_WIDTH)).collect())
        .collect();

    let widths: Vec<usize> = (0..columns.len())
        .map(|i| {
            std::iter::once(&header)
                .chain(&body)
                .filter_map(|cells| cells.get(i))
                .map(|cell| cell.width())
                .max()
                .unwrap_or(0)
        })
        .collect();

    push_line(out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(out, &rule, &widths);
    for cells in &body {
        push_line(out, cells, &widths);
    }
}

fn render_grid(out: &mut String, cards: &[GridCard]) {
    let cells: Vec<[String; 3]> = cards
        .iter()
        .map(|card| {
            [
                truncate(&format!("#{} {}", card.post_id, card.title), MAX_CELL_WIDTH),
                truncate(&card.author, MAX_CELL_WIDTH),
                truncate(card.image_url.as_deref().unwrap_or("-"), MAX_CELL_WIDTH),
            ]
        })
        .collect();
    let width = cells
        .iter()
        .flat_map(|lines| lines.iter().map(|l| l.width()))
        .max()
        .unwrap_or(0);

    for row in cells.chunks(GRID_COLUMNS) {
        for line in 0..3 {
            let parts: Vec<String> = row.iter().map(|card| card[line].clone()).collect();
            push_line(out, &parts, &vec![width; parts.len()]);
        }
        out.push('\n');
    }
}

/// `(이전) [1] 2 3 다음`; disabled buttons are parenthesized, the active page bracketed.
pub fn pagination_bar(pagination: &PaginationView) -> String {
    let button = |label: &str, enabled: bool| {
        if enabled {
            label.to_string()
        } else {
            format!("({label})")
        }
    };

    let mut parts = vec![button(PREVIOUS_LABEL, pagination.previous_enabled)];
    parts.extend(pagination.pages.iter().map(|page| {
        if page.active {
            format!("[{}]", page.number)
        } else {
            page.number.to_string()
        }
    }));
    parts.push(button(NEXT_LABEL, pagination.next_enabled));
    parts.join(" ")
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

/// Right-pad to `width` terminal cells.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

/// Cut to at most `max` terminal cells, marking the cut with `…`.
fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
