// Copyright (C) 2020-2026 Andy Kurnia.

// Pseudo-random query strings from two seed letters:
//   x[i] = (a * x[i - 1] + b * x[i - 2] + c) mod d
//   s[i] = letter 97 + x[i] mod 26

use super::{alphabet, error::MatchError};

pub const PARAM_MAX: u64 = 1_000_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecurrenceParams {
    a: u64,
    b: u64,
    c: u64,
    d: u64, // >= 1
}

impl RecurrenceParams {
    pub fn new(a: u64, b: u64, c: u64, d: u64) -> Result<Self, MatchError> {
        for (name, value, lo) in [("A", a, 0), ("B", b, 0), ("C", c, 0), ("D", d, 1)] {
            if value < lo || value > PARAM_MAX {
                return Err(MatchError::InvalidParameter { name, value });
            }
        }
        Ok(Self { a, b, c, d })
    }

    // No overflow: each product is at most 10^18.
    #[inline(always)]
    pub fn next_ord(&self, prev1: u64, prev2: u64) -> u64 {
        (self.a * prev1 + self.b * prev2 + self.c) % self.d
    }
}

// Maps an ASCII ordinal in 97..=122 to its letter index.
pub fn letter_from_ord(ord: u64) -> Result<u8, MatchError> {
    if (97..=122).contains(&ord) {
        Ok((ord - 97) as u8)
    } else {
        Err(MatchError::InvalidParameter {
            name: "ord",
            value: ord,
        })
    }
}

pub fn generate(
    s1: char,
    s2: char,
    len: usize,
    params: &RecurrenceParams,
) -> Result<Box<[u8]>, MatchError> {
    if len < 2 {
        return Err(MatchError::InvalidParameter {
            name: "N",
            value: len as u64,
        });
    }
    let mut v = Vec::with_capacity(len);
    for (position, ch) in [s1, s2].into_iter().enumerate() {
        match alphabet::to_index(ch) {
            Some(idx) => v.push(idx),
            None => return Err(MatchError::AlphabetViolation { ch, position }),
        }
    }
    let mut prev2 = s1 as u64;
    let mut prev1 = s2 as u64;
    for _ in 2..len {
        let x = params.next_ord(prev1, prev2);
        v.push(letter_from_ord(97 + x % 26)?);
        prev2 = prev1;
        prev1 = x;
    }
    Ok(v.into_boxed_slice())
}
