// Copyright (C) 2020-2026 Andy Kurnia.

use super::matcher;

// What to do with a dictionary or query line that cannot be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadLinePolicy {
    // log it, remember it, carry on
    Skip,
    // fail the whole load
    Reject,
}

#[derive(Clone, Debug)]
pub struct RunConfig {
    matcher: matcher::Matcher,
    num_threads: usize, // >= 1
    bad_line_policy: BadLinePolicy,
    dedup_words: bool,
}

impl RunConfig {
    #[inline(always)]
    pub fn matcher(&self) -> matcher::Matcher {
        self.matcher
    }

    #[inline(always)]
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    #[inline(always)]
    pub fn bad_line_policy(&self) -> BadLinePolicy {
        self.bad_line_policy
    }

    #[inline(always)]
    pub fn dedup_words(&self) -> bool {
        self.dedup_words
    }

    pub fn with_rule(mut self, rule: matcher::MatchRule) -> Self {
        self.matcher = matcher::Matcher::new(rule, self.matcher.strategy());
        self
    }

    pub fn with_strategy(mut self, strategy: matcher::MatchStrategy) -> Self {
        self.matcher = matcher::Matcher::new(self.matcher.rule(), strategy);
        self
    }

    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads.max(1);
        self
    }

    pub fn with_bad_line_policy(mut self, bad_line_policy: BadLinePolicy) -> Self {
        self.bad_line_policy = bad_line_policy;
        self
    }

    pub fn with_dedup_words(mut self, dedup_words: bool) -> Self {
        self.dedup_words = dedup_words;
        self
    }
}

pub fn make_default_run_config() -> RunConfig {
    RunConfig {
        matcher: matcher::Matcher::default(),
        num_threads: num_cpus::get().max(1),
        bad_line_policy: BadLinePolicy::Skip,
        dedup_words: true,
    }
}

pub fn make_serial_run_config() -> RunConfig {
    make_default_run_config().with_num_threads(1)
}
