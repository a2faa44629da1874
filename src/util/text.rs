//! Byte-level character classes shared by the tokenizer
//!
//! Word characters follow ASCII `\w`: letters, digits and underscore.
//! Non-ASCII bytes are never word characters, so scanning by byte never
//! splits a UTF-8 sequence at a token boundary.

/// `[A-Za-z0-9_]`
#[inline]
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// `[A-Za-z_]`
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// ASCII `\s`: space, tab, newline, carriage return, vertical tab, form feed
#[inline]
pub fn is_space_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Space or tab only
#[inline]
pub fn is_horizontal_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}

/// End of the run of word bytes starting at `start`
pub fn word_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && is_word_byte(bytes[end]) {
        end += 1;
    }
    end
}

/// End of the run of ASCII digits starting at `start`
pub fn digits_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    end
}
