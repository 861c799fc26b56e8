// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::ALPHABET_LEN;

// Letter counts of some multiset of letters, indexed by alphabet index.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FreqVec([u32; ALPHABET_LEN]);

impl Default for FreqVec {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FreqVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.0
                    .iter()
                    .enumerate()
                    .filter(|&(_, &n)| n != 0)
                    .map(|(idx, n)| ((b'a' + idx as u8) as char, n)),
            )
            .finish()
    }
}

impl FreqVec {
    #[inline(always)]
    pub fn new() -> Self {
        Self([0; ALPHABET_LEN])
    }

    // Caller guarantees every letter is < ALPHABET_LEN.
    #[inline(always)]
    pub fn build(letters: &[u8]) -> Self {
        let mut ret = Self::new();
        for &letter in letters {
            ret.0[letter as usize] += 1;
        }
        ret
    }

    #[inline(always)]
    pub fn count(&self, letter: u8) -> u32 {
        self.0[letter as usize]
    }

    #[inline(always)]
    pub fn add(&mut self, letter: u8) {
        self.0[letter as usize] += 1;
    }

    // Returns false (and leaves self unchanged) if the letter is absent.
    #[inline(always)]
    pub fn try_remove(&mut self, letter: u8) -> bool {
        let n = &mut self.0[letter as usize];
        if *n == 0 {
            false
        } else {
            *n -= 1;
            true
        }
    }

}

// Compares 26 slots regardless of how many letters were counted.
#[inline(always)]
pub fn equal(a: &FreqVec, b: &FreqVec) -> bool {
    a.0 == b.0
}

// Running difference between a sliding window and a fixed target.
// Tracks how many slots are nonzero so balance is known in O(1).
pub struct FreqDiff {
    diff: [i32; ALPHABET_LEN],
    num_unbalanced: u8,
}

impl FreqDiff {
    pub fn new(target: &FreqVec) -> Self {
        let mut diff = [0i32; ALPHABET_LEN];
        let mut num_unbalanced = 0;
        for (d, &n) in diff.iter_mut().zip(target.0.iter()) {
            *d = -(n as i32);
            num_unbalanced += (n != 0) as u8;
        }
        Self {
            diff,
            num_unbalanced,
        }
    }

    #[inline(always)]
    fn bump(&mut self, letter: u8, delta: i32) {
        let d = &mut self.diff[letter as usize];
        let was_balanced = *d == 0;
        *d += delta;
        let is_balanced = *d == 0;
        if was_balanced && !is_balanced {
            self.num_unbalanced += 1;
        } else if !was_balanced && is_balanced {
            self.num_unbalanced -= 1;
        }
    }

    #[inline(always)]
    pub fn add(&mut self, letter: u8) {
        self.bump(letter, 1);
    }

    #[inline(always)]
    pub fn remove(&mut self, letter: u8) {
        self.bump(letter, -1);
    }

    #[inline(always)]
    pub fn is_balanced(&self) -> bool {
        self.num_unbalanced == 0
    }
}
