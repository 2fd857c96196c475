//! Display-width measurement and wrapping for table layout.
//!
//! Every column-sizing and wrapping decision goes through these helpers.
//! Width is terminal display width (East-Asian-wide characters such as emoji
//! count as two cells), never byte length.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal display width of a string.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Greedy word wrap of a single line to `width` display cells.
///
/// Breaks at single spaces; a word wider than `width` is hard-broken at
/// character boundaries, so a multi-byte character is never split. A width
/// of zero is treated as one — the floor below which wrapping never goes,
/// so rendering cannot fail or produce a zero-width column. Always returns
/// at least one line.
pub fn wrap(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    if display_width(line) <= width {
        return vec![line.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for word in line.split(' ') {
        for piece in break_word(word, width) {
            let piece_width = display_width(&piece);
            if current.is_empty() {
                current = piece;
                current_width = piece_width;
            } else if current_width + 1 + piece_width <= width {
                current.push(' ');
                current.push_str(&piece);
                current_width += 1 + piece_width;
            } else {
                lines.push(std::mem::take(&mut current));
                current = piece;
                current_width = piece_width;
            }
        }
    }
    lines.push(current);
    lines
}

/// Split a word wider than `width` into chunks of at most `width` cells.
/// A chunk always holds at least one character, even when that single
/// character is wider than `width`.
fn break_word(word: &str, width: usize) -> Vec<String> {
    if display_width(word) <= width {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;
    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if !piece.is_empty() && piece_width + ch_width > width {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(ch);
        piece_width += ch_width;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}
