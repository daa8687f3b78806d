//! Log sanitization utilities
//!
//! Response bodies can be large (a full page of posts) and multi-line (HTML error
//! pages from a proxy). Logged bodies are flattened to one line and truncated.

/// Maximum number of bytes of a body to include in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Largest char boundary `<= index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Prepare a response body for logging.
///
/// Line breaks are replaced by spaces. Bodies longer than `TRUNCATE_LIMIT` bytes
/// are cut at a char boundary and suffixed with the original length.
pub fn truncate_for_log(s: &str) -> String {
    let head = &s[..floor_char_boundary(s, TRUNCATE_LIMIT)];
    let flat: String = head
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if head.len() == s.len() {
        flat
    } else {
        format!("{flat}... [truncated, total {} bytes]", s.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        assert_eq!(truncate_for_log(r#"{"role":"USER"}"#), r#"{"role":"USER"}"#);
    }

    #[test]
    fn exactly_at_limit_not_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn long_body_truncated_with_length() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.ends_with(&format!("[truncated, total {} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn newlines_flattened() {
        assert_eq!(truncate_for_log("<html>\r\n<body>502</body>\n"), "<html>  <body>502</body> ");
    }

    #[test]
    fn multibyte_titles_safe() {
        // 한글 제목은 글자당 3바이트
        let s = "게시판".repeat(100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }
}
