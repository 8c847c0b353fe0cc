#![forbid(unsafe_code)]

//! Display-width helpers: ASCII fast path, grapheme width, text width.
//!
//! These back the synthetic cell measurer in `labelfit-text`. Widths are in
//! character cells, not pixels; a measurement backend converts cells to
//! pixels by multiplying with its cell advance.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Returns `Some(width)` if `text` is printable ASCII only, `None` otherwise.
///
/// For printable ASCII (0x20-0x7E), display width equals byte length, so the
/// full Unicode width calculation can be skipped.
///
/// Returns `None` for non-ASCII characters and for ASCII control characters
/// (0x00-0x1F, 0x7F), which have display width 0.
///
/// # Example
/// ```
/// use labelfit_core::text_width::ascii_width;
///
/// assert_eq!(ascii_width("hello"), Some(5));
/// assert_eq!(ascii_width(""), Some(0));
/// assert_eq!(ascii_width("你好"), None);
/// assert_eq!(ascii_width("a\tb"), None);
/// ```
#[inline]
#[must_use]
pub fn ascii_width(text: &str) -> Option<usize> {
    if text.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
        Some(text.len())
    } else {
        None
    }
}

/// Display width of a single grapheme cluster, in cells.
///
/// ZWJ emoji sequences render as one double-width glyph, so they are counted
/// as 2 cells rather than the sum of their parts.
#[inline]
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.contains('\u{200D}') {
        return 2;
    }
    grapheme.width()
}

/// Display width of `text` in cells.
///
/// Uses the ASCII fast path when possible, falling back to per-grapheme
/// width summation.
#[must_use]
pub fn display_width(text: &str) -> usize {
    if let Some(width) = ascii_width(text) {
        return width;
    }
    text.graphemes(true).map(grapheme_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_fast_path_counts_bytes() {
        assert_eq!(display_width("hello world"), 11);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn cjk_is_double_width() {
        assert_eq!(display_width("你好"), 4);
        assert_eq!(display_width("a你b"), 4);
    }

    #[test]
    fn combining_marks_do_not_add_width() {
        // e + combining acute = one cell.
        assert_eq!(display_width("e\u{0301}"), 1);
    }

    #[test]
    fn zwj_sequence_is_one_double_width_glyph() {
        // Woman + ZWJ + laptop: family of codepoints, one glyph.
        assert_eq!(display_width("\u{1F469}\u{200D}\u{1F4BB}"), 2);
    }
}
