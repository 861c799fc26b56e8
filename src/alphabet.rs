// Copyright (C) 2020-2026 Andy Kurnia.

use super::error::MatchError;

// Letters are stored as indices 0..26, a = 0.
pub const ALPHABET_LEN: usize = 26;

#[inline(always)]
pub fn to_index(c: char) -> Option<u8> {
    if c.is_ascii_lowercase() {
        Some(c as u8 - b'a')
    } else {
        None
    }
}

#[inline(always)]
pub fn from_index(idx: u8) -> Option<char> {
    if (idx as usize) < ALPHABET_LEN {
        Some((b'a' + idx) as char)
    } else {
        None
    }
}

// Converts a whole line, failing on the first char outside a-z.
pub fn encode(s: &str) -> Result<Box<[u8]>, MatchError> {
    let mut v = Vec::with_capacity(s.len());
    for (position, ch) in s.chars().enumerate() {
        match to_index(ch) {
            Some(idx) => v.push(idx),
            None => return Err(MatchError::AlphabetViolation { ch, position }),
        }
    }
    Ok(v.into_boxed_slice())
}

pub fn decode(letters: &[u8]) -> String {
    letters.iter().filter_map(|&idx| from_index(idx)).collect()
}
