// Copyright (C) 2020-2026 Andy Kurnia.

use super::{matcher, run_config};

// Number of distinct patterns occurring in the query.
// Patterns longer than the query cannot occur and count 0.
pub fn tally_query(query: &[u8], patterns: &[matcher::Pattern], m: &matcher::Matcher) -> usize {
    patterns
        .iter()
        .filter(|pattern| {
            pattern.len() <= query.len() && matches!(m.matches(query, pattern), Ok(true))
        })
        .count()
}

fn run_serial(
    queries: &[Box<[u8]>],
    patterns: &[matcher::Pattern],
    m: &matcher::Matcher,
) -> Box<[usize]> {
    queries
        .iter()
        .map(|query| tally_query(query, patterns, m))
        .collect()
}

// Each query is tallied entirely by whichever thread claims it.
fn run_parallel(
    queries: &[Box<[u8]>],
    patterns: &[matcher::Pattern],
    m: matcher::Matcher,
    num_threads: usize,
) -> Box<[usize]> {
    let next_query = std::sync::atomic::AtomicUsize::new(0);
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::scope(|s| {
        for _ in 0..num_threads {
            let tx = tx.clone();
            let next_query = &next_query;
            s.spawn(move || {
                loop {
                    let idx = next_query.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                    if idx >= queries.len() {
                        break;
                    }
                    if tx.send((idx, tally_query(&queries[idx], patterns, &m))).is_err() {
                        break;
                    }
                }
            });
        }
    });
    drop(tx);
    let mut tallies = vec![0; queries.len()].into_boxed_slice();
    for (idx, tally) in rx {
        tallies[idx] = tally;
    }
    tallies
}

// One tally per query, in query order.
pub fn run(
    queries: &[Box<[u8]>],
    patterns: &[matcher::Pattern],
    run_config: &run_config::RunConfig,
) -> Box<[usize]> {
    let m = run_config.matcher();
    let num_threads = run_config.num_threads().min(queries.len());
    log::debug!(
        "matching {} queries against {} words on {} threads ({:?})",
        queries.len(),
        patterns.len(),
        num_threads.max(1),
        m
    );
    if num_threads <= 1 {
        run_serial(queries, patterns, &m)
    } else {
        run_parallel(queries, patterns, m, num_threads)
    }
}
