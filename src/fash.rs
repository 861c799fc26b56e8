// Copyright (C) 2020-2026 Andy Kurnia.

// Fast insecure non-cryptographic hash for short letter slices.

pub struct LetterHasher(u64);

impl std::hash::Hasher for LetterHasher {
    fn finish(&self) -> u64 {
        self.0
    }
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            // letters are < 26, so 27 keeps every step distinct
            self.0 = self.0.wrapping_mul(27).wrapping_add(b as u64 + 1);
        }
    }
}

impl Default for LetterHasher {
    fn default() -> LetterHasher {
        LetterHasher(0)
    }
}

pub type LetterHasherDefault = std::hash::BuildHasherDefault<LetterHasher>;
pub type LetterHashSet<T> = std::collections::HashSet<T, LetterHasherDefault>;
