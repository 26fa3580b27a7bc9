//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// `max_len` counts bytes and is never exceeded; the cut is moved back to
/// the nearest character boundary so multi-byte text never splits. Bounds
/// too small for the ellipsis get a plain cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    const ELLIPSIS: &str = "...";

    if s.len() <= max_len {
        return s.to_string();
    }
    if max_len < ELLIPSIS.len() {
        return s[..floor_char_boundary(s, max_len)].to_string();
    }
    let end = floor_char_boundary(s, max_len - ELLIPSIS.len());
    format!("{}{}", &s[..end], ELLIPSIS)
}

fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut end = index.min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// Collapse all runs of whitespace (including newlines) into single spaces.
///
/// Used to keep multi-line causes on one line in progress output and logs.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
