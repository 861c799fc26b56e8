// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, fash, matcher, run_config};

// A line that was left out under BadLinePolicy::Skip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedLine {
    pub index: usize, // 0-based
    pub text: String,
    pub error: error::MatchError,
}

impl std::fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} {:?}: {}", self.index + 1, self.text, self.error)
    }
}

pub struct Dictionary {
    patterns: Box<[matcher::Pattern]>,
    skipped: Box<[SkippedLine]>,
    num_duplicates: usize,
}

impl Dictionary {
    #[inline(always)]
    pub fn patterns(&self) -> &[matcher::Pattern] {
        &self.patterns
    }

    #[inline(always)]
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    #[inline(always)]
    pub fn num_duplicates(&self) -> usize {
        self.num_duplicates
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn longest(&self) -> usize {
        self.patterns.iter().map(|p| p.len()).max().unwrap_or(0)
    }
}

pub struct Queries {
    queries: Box<[Box<[u8]>]>,
    source_indices: Box<[usize]>,
    skipped: Box<[SkippedLine]>,
}

impl Queries {
    #[inline(always)]
    pub fn queries(&self) -> &[Box<[u8]>] {
        &self.queries
    }

    // 0-based position of each kept query in its input.
    #[inline(always)]
    pub fn source_indices(&self) -> &[usize] {
        &self.source_indices
    }

    #[inline(always)]
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn longest(&self) -> usize {
        self.queries.iter().map(|q| q.len()).max().unwrap_or(0)
    }
}

fn handle_bad_line(
    run_config: &run_config::RunConfig,
    index: usize,
    text: &str,
    err: error::MatchError,
    skipped: &mut Vec<SkippedLine>,
) -> Result<(), error::MatchError> {
    match run_config.bad_line_policy() {
        run_config::BadLinePolicy::Reject => Err(err),
        run_config::BadLinePolicy::Skip => {
            let skipped_line = SkippedLine {
                index,
                text: text.to_string(),
                error: err,
            };
            log::warn!("skipping {}", skipped_line);
            skipped.push(skipped_line);
            Ok(())
        }
    }
}

fn collect_words<'a, I: Iterator<Item = (usize, &'a str)>>(
    words: I,
    run_config: &run_config::RunConfig,
) -> Result<Dictionary, error::MatchError> {
    let mut patterns = Vec::new();
    let mut skipped = Vec::new();
    let mut seen = fash::LetterHashSet::<Box<[u8]>>::default();
    let mut num_duplicates = 0;
    for (index, s) in words {
        match alphabet::encode(s).and_then(|v| matcher::Pattern::new(&v)) {
            Ok(pattern) => {
                if run_config.dedup_words() && !seen.insert(pattern.letters().into()) {
                    num_duplicates += 1;
                    continue;
                }
                patterns.push(pattern);
            }
            Err(err) => handle_bad_line(run_config, index, s, err, &mut skipped)?,
        }
    }
    log::debug!(
        "read {} words ({} duplicates, {} skipped)",
        patterns.len(),
        num_duplicates,
        skipped.len()
    );
    Ok(Dictionary {
        patterns: patterns.into_boxed_slice(),
        skipped: skipped.into_boxed_slice(),
        num_duplicates,
    })
}

// One word per line. Blank lines are ignored.
pub fn read_dictionary(
    giant_string: &str,
    run_config: &run_config::RunConfig,
) -> Result<Dictionary, error::MatchError> {
    collect_words(
        giant_string.lines().enumerate().filter(|(_, s)| !s.is_empty()),
        run_config,
    )
}

// Every entry is a word, so an empty one is an EmptyWord.
pub fn read_dictionary_words<'a, I: IntoIterator<Item = &'a str>>(
    words: I,
    run_config: &run_config::RunConfig,
) -> Result<Dictionary, error::MatchError> {
    collect_words(words.into_iter().enumerate(), run_config)
}

// Every entry is a query, including empty ones.
pub fn read_query_lines<'a, I: IntoIterator<Item = &'a str>>(
    lines: I,
    run_config: &run_config::RunConfig,
) -> Result<Queries, error::MatchError> {
    let mut queries = Vec::new();
    let mut source_indices = Vec::new();
    let mut skipped = Vec::new();
    for (index, s) in lines.into_iter().enumerate() {
        match alphabet::encode(s) {
            Ok(v) => {
                queries.push(v);
                source_indices.push(index);
            }
            Err(err) => handle_bad_line(run_config, index, s, err, &mut skipped)?,
        }
    }
    log::debug!(
        "read {} queries ({} skipped)",
        queries.len(),
        skipped.len()
    );
    Ok(Queries {
        queries: queries.into_boxed_slice(),
        source_indices: source_indices.into_boxed_slice(),
        skipped: skipped.into_boxed_slice(),
    })
}

// One query per line.
pub fn read_queries(
    giant_string: &str,
    run_config: &run_config::RunConfig,
) -> Result<Queries, error::MatchError> {
    read_query_lines(giant_string.lines(), run_config)
}

pub fn load_dictionary<P: AsRef<std::path::Path>>(
    path: P,
    run_config: &run_config::RunConfig,
) -> error::Returns<Dictionary> {
    let path = path.as_ref();
    log::debug!("loading dictionary from {}", path.display());
    let giant_string = match std::fs::read_to_string(path) {
        Ok(x) => x,
        Err(err) => {
            crate::return_error!(format!("cannot read {}: {}", path.display(), err));
        }
    };
    Ok(read_dictionary(&giant_string, run_config)?)
}

pub fn load_queries<P: AsRef<std::path::Path>>(
    path: P,
    run_config: &run_config::RunConfig,
) -> error::Returns<Queries> {
    let path = path.as_ref();
    log::debug!("loading queries from {}", path.display());
    let giant_string = match std::fs::read_to_string(path) {
        Ok(x) => x,
        Err(err) => {
            crate::return_error!(format!("cannot read {}: {}", path.display(), err));
        }
    };
    Ok(read_queries(&giant_string, run_config)?)
}
