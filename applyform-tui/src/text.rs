use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let ellipsis = "…";
    let target_width = max_width.saturating_sub(1);

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str(ellipsis);
    result
}

/// Index of the first character to show so that the character at `cursor`
/// (or the end-of-text cursor cell) stays inside `max_width` columns.
pub fn scroll_offset(chars: &[char], cursor: usize, max_width: usize) -> usize {
    if max_width == 0 {
        return cursor;
    }

    // The cursor cell itself takes one column past the end of the text.
    let mut width = chars.get(cursor).map_or(1, |c| char_width(*c).max(1));
    let mut start = cursor.min(chars.len());

    while start > 0 {
        let w = char_width(chars[start - 1]);
        if width + w > max_width {
            break;
        }
        width += w;
        start -= 1;
    }

    start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 8), "hello w…");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_scroll_offset_fits() {
        let chars: Vec<char> = "short".chars().collect();
        assert_eq!(scroll_offset(&chars, 5, 10), 0);
        assert_eq!(scroll_offset(&chars, 2, 10), 0);
    }

    #[test]
    fn test_scroll_offset_follows_cursor() {
        let chars: Vec<char> = "abcdefghij".chars().collect();
        // Cursor at end needs one extra column: "fghij" + cursor = 6
        assert_eq!(scroll_offset(&chars, 10, 6), 5);
        assert_eq!(scroll_offset(&chars, 3, 4), 0);
        assert_eq!(scroll_offset(&chars, 6, 3), 4);
    }
}
