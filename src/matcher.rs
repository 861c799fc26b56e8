// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error::MatchError, freq};

// What counts as an occurrence of a word inside a window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchRule {
    // any permutation of the word's letters
    Anagram,
    // first and last letters stay put, the rest may be permuted
    FixedEnds,
}

// How windows are examined. Both give the same answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchStrategy {
    // cheap endpoint rejection, then an interior count per surviving window
    EndpointFilter,
    // counts maintained incrementally as the window slides
    Sliding,
}

// A validated dictionary word with its counts precomputed.
#[derive(Clone, Debug)]
pub struct Pattern {
    letters: Box<[u8]>,
    full: freq::FreqVec,
    interior: freq::FreqVec,
}

// Everything but the endpoints. Empty for length <= 2.
#[inline(always)]
fn interior(s: &[u8]) -> &[u8] {
    if s.len() <= 2 { &[] } else { &s[1..s.len() - 1] }
}

// Letters come from outside alphabet::encode, so recheck the range.
#[inline(always)]
fn check_letters(letters: &[u8]) -> Result<(), MatchError> {
    match letters
        .iter()
        .position(|&x| x as usize >= alphabet::ALPHABET_LEN)
    {
        Some(position) => Err(MatchError::AlphabetViolation {
            ch: char::REPLACEMENT_CHARACTER,
            position,
        }),
        None => Ok(()),
    }
}

impl Pattern {
    pub fn new(letters: &[u8]) -> Result<Self, MatchError> {
        if letters.is_empty() {
            return Err(MatchError::EmptyWord);
        }
        check_letters(letters)?;
        Ok(Self {
            letters: letters.into(),
            full: freq::FreqVec::build(letters),
            interior: freq::FreqVec::build(interior(letters)),
        })
    }

    pub fn from_word(word: &str) -> Result<Self, MatchError> {
        Self::new(&alphabet::encode(word)?)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline(always)]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", alphabet::decode(&self.letters))
    }
}

#[inline(always)]
fn check_query(query: &[u8], pattern: &Pattern) -> Result<(), MatchError> {
    check_letters(query)?;
    if pattern.len() > query.len() {
        Err(MatchError::OversizedWord {
            word_len: pattern.len(),
            query_len: query.len(),
        })
    } else {
        Ok(())
    }
}

// Is some window of query a permutation of the pattern?
// Window endpoints must be letters the word has to spare; the interior
// is then compared against the word minus those two letters.
pub fn matches(query: &[u8], pattern: &Pattern) -> Result<bool, MatchError> {
    check_query(query, pattern)?;
    let m = pattern.len();
    let full = &pattern.full;
    for window in query.windows(m) {
        let first = window[0];
        if full.count(first) == 0 {
            continue;
        }
        let last = window[m - 1];
        if full.count(last) == 0 {
            continue;
        }
        let mut reference = full.clone();
        // a one-letter window has only one endpoint
        if !reference.try_remove(first) || (m > 1 && !reference.try_remove(last)) {
            continue;
        }
        if freq::equal(&freq::FreqVec::build(interior(window)), &reference) {
            return Ok(true);
        }
    }
    Ok(false)
}

// Is some window equal to the pattern on both endpoints, with the interior
// a permutation of the pattern's interior?
pub fn matches_fixed_ends(query: &[u8], pattern: &Pattern) -> Result<bool, MatchError> {
    check_query(query, pattern)?;
    let m = pattern.len();
    let first = pattern.letters[0];
    let last = pattern.letters[m - 1];
    for window in query.windows(m) {
        if window[0] != first {
            continue;
        }
        if window[m - 1] != last {
            continue;
        }
        if freq::equal(&freq::FreqVec::build(interior(window)), &pattern.interior) {
            return Ok(true);
        }
    }
    Ok(false)
}

// Same as matches(), O(N) after O(26) setup.
pub fn matches_sliding(query: &[u8], pattern: &Pattern) -> Result<bool, MatchError> {
    check_query(query, pattern)?;
    let m = pattern.len();
    let mut diff = freq::FreqDiff::new(&pattern.full);
    for &letter in &query[..m] {
        diff.add(letter);
    }
    if diff.is_balanced() {
        return Ok(true);
    }
    for i in m..query.len() {
        diff.remove(query[i - m]);
        diff.add(query[i]);
        if diff.is_balanced() {
            return Ok(true);
        }
    }
    Ok(false)
}

// Same as matches_fixed_ends(), sliding only the interior counts.
pub fn matches_fixed_ends_sliding(query: &[u8], pattern: &Pattern) -> Result<bool, MatchError> {
    check_query(query, pattern)?;
    let m = pattern.len();
    let n = query.len();
    let first = pattern.letters[0];
    let last = pattern.letters[m - 1];
    // interior of the window at i is query[i + 1..i + 1 + w]
    let w = m.saturating_sub(2);
    let mut diff = freq::FreqDiff::new(&pattern.interior);
    if w > 0 {
        for &letter in &query[1..1 + w] {
            diff.add(letter);
        }
    }
    for i in 0..=n - m {
        if i > 0 && w > 0 {
            diff.remove(query[i]);
            diff.add(query[i + w]);
        }
        if query[i] == first && query[i + m - 1] == last && diff.is_balanced() {
            return Ok(true);
        }
    }
    Ok(false)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Matcher {
    rule: MatchRule,
    strategy: MatchStrategy,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(MatchRule::Anagram, MatchStrategy::EndpointFilter)
    }
}

impl Matcher {
    pub fn new(rule: MatchRule, strategy: MatchStrategy) -> Self {
        Self { rule, strategy }
    }

    #[inline(always)]
    pub fn rule(&self) -> MatchRule {
        self.rule
    }

    #[inline(always)]
    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    #[inline(always)]
    pub fn matches(&self, query: &[u8], pattern: &Pattern) -> Result<bool, MatchError> {
        match (self.rule, self.strategy) {
            (MatchRule::Anagram, MatchStrategy::EndpointFilter) => matches(query, pattern),
            (MatchRule::Anagram, MatchStrategy::Sliding) => matches_sliding(query, pattern),
            (MatchRule::FixedEnds, MatchStrategy::EndpointFilter) => {
                matches_fixed_ends(query, pattern)
            }
            (MatchRule::FixedEnds, MatchStrategy::Sliding) => {
                matches_fixed_ends_sliding(query, pattern)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    const ALL_MATCHERS: [Matcher; 4] = [
        Matcher {
            rule: MatchRule::Anagram,
            strategy: MatchStrategy::EndpointFilter,
        },
        Matcher {
            rule: MatchRule::Anagram,
            strategy: MatchStrategy::Sliding,
        },
        Matcher {
            rule: MatchRule::FixedEnds,
            strategy: MatchStrategy::EndpointFilter,
        },
        Matcher {
            rule: MatchRule::FixedEnds,
            strategy: MatchStrategy::Sliding,
        },
    ];

    fn sorted(s: &[u8]) -> Vec<u8> {
        let mut v = s.to_vec();
        v.sort_unstable();
        v
    }

    fn brute_force(rule: MatchRule, query: &[u8], word: &[u8]) -> bool {
        query.windows(word.len()).any(|window| match rule {
            MatchRule::Anagram => sorted(window) == sorted(word),
            MatchRule::FixedEnds => {
                window[0] == word[0]
                    && window[window.len() - 1] == word[word.len() - 1]
                    && sorted(interior(window)) == sorted(interior(word))
            }
        })
    }

    fn matches_str(query: &str, word: &str) -> Result<bool, MatchError> {
        matches(&alphabet::encode(query)?, &Pattern::from_word(word)?)
    }

    fn check(matcher: Matcher, query: &str, word: &str) -> bool {
        matcher
            .matches(
                &alphabet::encode(query).unwrap(),
                &Pattern::from_word(word).unwrap(),
            )
            .unwrap()
    }

    #[test]
    fn rotated_word_matches() {
        assert!(matches_str("bca", "abc").unwrap());
        assert!(matches_str("xxbcaxx", "abc").unwrap());
        assert!(!matches_str("xxbcxax", "abc").unwrap());
    }

    #[test]
    fn two_letter_words_match_both_orders() {
        assert!(matches_str("ba", "ab").unwrap());
        assert!(matches_str("ba", "ba").unwrap());
        assert!(!matches_str("aa", "ab").unwrap());
        assert!(!matches_str("bb", "ab").unwrap());
    }

    #[test]
    fn one_letter_word() {
        for matcher in ALL_MATCHERS {
            assert!(check(matcher, "xyz", "y"));
            assert!(check(matcher, "y", "y"));
            assert!(!check(matcher, "xyz", "a"));
        }
    }

    #[test]
    fn self_match() {
        for matcher in ALL_MATCHERS {
            for word in ["a", "ab", "abc", "zzz", "mississippi"] {
                assert!(check(matcher, word, word), "{:?} {}", matcher, word);
            }
        }
    }

    #[test]
    fn exact_substring_matches() {
        for matcher in ALL_MATCHERS {
            assert!(check(matcher, "thequickbrownfox", "quick"));
            assert!(check(matcher, "thequickbrownfox", "fox"));
            assert!(check(matcher, "thequickbrownfox", "the"));
        }
    }

    #[test]
    fn endpoints_alone_do_not_match() {
        for matcher in ALL_MATCHERS {
            assert!(!check(matcher, "abbd", "abcd"));
            assert!(!check(matcher, "xabbdx", "abcd"));
        }
        // a later window can still match
        for matcher in ALL_MATCHERS {
            assert!(check(matcher, "abbdacbd", "abcd"));
        }
    }

    #[test]
    fn fixed_ends_is_stricter() {
        assert!(check(Matcher::default(), "bca", "abc"));
        for strategy in [MatchStrategy::EndpointFilter, MatchStrategy::Sliding] {
            let matcher = Matcher::new(MatchRule::FixedEnds, strategy);
            assert!(!check(matcher, "bca", "abc"));
            assert!(check(matcher, "acbd", "abcd"));
            assert!(!check(matcher, "dbca", "abcd"));
            assert!(!check(matcher, "ba", "ab"));
        }
    }

    #[test]
    fn oversized_word_is_an_error() {
        let pattern = Pattern::from_word("aa").unwrap();
        for matcher in ALL_MATCHERS {
            assert_eq!(
                matcher.matches(&alphabet::encode("a").unwrap(), &pattern),
                Err(MatchError::OversizedWord {
                    word_len: 2,
                    query_len: 1
                })
            );
            assert!(matcher.matches(&[], &pattern).is_err());
        }
    }

    #[test]
    fn invalid_words_are_rejected() {
        assert_eq!(Pattern::new(&[]).unwrap_err(), MatchError::EmptyWord);
        assert_eq!(Pattern::from_word("").unwrap_err(), MatchError::EmptyWord);
        assert!(matches!(
            Pattern::new(&[0, 26]),
            Err(MatchError::AlphabetViolation { position: 1, .. })
        ));
        assert_eq!(
            matches_str("abc", "aBc"),
            Err(MatchError::AlphabetViolation {
                ch: 'B',
                position: 1
            })
        );
    }

    #[test]
    fn out_of_range_query_letters_are_rejected() {
        let pattern = Pattern::from_word("ab").unwrap();
        for matcher in ALL_MATCHERS {
            assert!(matches!(
                matcher.matches(&[0, 30], &pattern),
                Err(MatchError::AlphabetViolation { position: 1, .. })
            ));
            assert!(matches!(
                matcher.matches(&[26, 0, 1], &pattern),
                Err(MatchError::AlphabetViolation { position: 0, .. })
            ));
        }
        // checked before the length, so a short bad query still reports the letter
        assert!(matches!(
            matches(&[255], &pattern),
            Err(MatchError::AlphabetViolation { position: 0, .. })
        ));
    }

    #[test]
    fn repeated_calls_agree() {
        let query = alphabet::encode("qwertyuiopasdfghjkl").unwrap();
        let pattern = Pattern::from_word("tre").unwrap();
        let first = matches(&query, &pattern);
        for _ in 0..5 {
            assert_eq!(matches(&query, &pattern), first);
        }
        assert_eq!(first, Ok(true));
    }

    #[test]
    fn strategies_agree_with_brute_force() {
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(0xa9a);
        for _ in 0..3000 {
            let num_letters = rng.random_range(1..=4u8);
            let m = rng.random_range(1..=6usize);
            let n = rng.random_range(m..=m + 12);
            let word = (0..m)
                .map(|_| rng.random_range(0..num_letters))
                .collect::<Vec<_>>();
            let query = (0..n)
                .map(|_| rng.random_range(0..num_letters))
                .collect::<Vec<_>>();
            let pattern = Pattern::new(&word).unwrap();
            for matcher in ALL_MATCHERS {
                assert_eq!(
                    matcher.matches(&query, &pattern),
                    Ok(brute_force(matcher.rule(), &query, &word)),
                    "{:?} {} {}",
                    matcher,
                    alphabet::decode(&query),
                    pattern
                );
            }
        }
    }
}
