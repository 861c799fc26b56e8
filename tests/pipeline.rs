// Copyright (C) 2020-2026 Andy Kurnia.

use scrambled::{batch, dict, matcher, recurrence, report, run_config};
use std::io::Write;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

fn run_files(dictionary: &str, queries: &str, run_config: &run_config::RunConfig) -> String {
    let dict_file = write_temp(dictionary);
    let query_file = write_temp(queries);
    let dictionary = dict::load_dictionary(dict_file.path(), run_config).unwrap();
    let queries = dict::load_queries(query_file.path(), run_config).unwrap();
    let tallies = batch::run(queries.queries(), dictionary.patterns(), run_config);
    let mut out = Vec::new();
    report::write_cases(&mut out, queries.source_indices(), &tallies).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn files_to_cases() {
    let out = run_files(
        "axpaj\napxaj\ndnrbt\npjxdn\nabd\n",
        "aapxjdnrbtvldptfzbbdbbzxtndrvjblnzjfpvhdhhpxjdnrbt\n",
        &run_config::make_serial_run_config(),
    );
    assert_eq!(out, "Case #1: 4\n");
}

#[test]
fn every_strategy_and_thread_count_agrees() {
    let words = "abc\nba\nzz\nqqqqqqqqqq\ncab\nxyzzy\n";
    let queries = "bca\n\nzzab\nyzzyxq\nqwerty\nabab\n";
    let expected = "Case #1: 2\nCase #2: 0\nCase #3: 2\nCase #4: 2\nCase #5: 0\nCase #6: 1\n";
    for strategy in [
        matcher::MatchStrategy::EndpointFilter,
        matcher::MatchStrategy::Sliding,
    ] {
        for num_threads in [1, 4] {
            let run_config = run_config::make_default_run_config()
                .with_strategy(strategy)
                .with_num_threads(num_threads);
            assert_eq!(run_files(words, queries, &run_config), expected);
        }
    }
}

#[test]
fn fixed_ends_counts_fewer() {
    let run_config =
        run_config::make_serial_run_config().with_rule(matcher::MatchRule::FixedEnds);
    assert_eq!(run_files("abc\nab\nba\n", "bca\nba\n", &run_config), "Case #1: 0\nCase #2: 1\n");
}

#[test]
fn bad_dictionary_line_is_left_out() {
    let out = run_files(
        "ab\nA-B\nba\n",
        "ab\n",
        &run_config::make_serial_run_config(),
    );
    assert_eq!(out, "Case #1: 2\n");
}

#[test]
fn skipped_query_keeps_later_case_numbers() {
    let out = run_files("ab\n", "xx\nBAD\nab\n", &run_config::make_serial_run_config());
    assert_eq!(out, "Case #1: 0\nCase #3: 1\n");
}

#[test]
fn strict_mode_fails_on_bad_query() {
    let run_config = run_config::make_serial_run_config()
        .with_bad_line_policy(run_config::BadLinePolicy::Reject);
    let query_file = write_temp("abc\nab c\n");
    let err = dict::load_queries(query_file.path(), &run_config).err().unwrap();
    assert_eq!(err.to_string(), "invalid letter ' ' at position 2");
}

#[test]
fn generated_query() {
    let params = recurrence::RecurrenceParams::new(1, 1, 1, 100).unwrap();
    let query = recurrence::generate('a', 'a', 11, &params).unwrap();
    let dictionary = dict::read_dictionary(
        "pral\nvff\nflv\naara\nzzz\n",
        &run_config::make_serial_run_config(),
    )
    .unwrap();
    let tallies = batch::run(
        &[query],
        dictionary.patterns(),
        &run_config::make_serial_run_config(),
    );
    assert_eq!(&tallies[..], &[3]);
}
