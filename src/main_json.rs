// Copyright (C) 2020-2026 Andy Kurnia.

use scrambled::{batch, dict, error, matcher, run_config};

// dictionary: words to look for, each must be non-empty a-z.
// queries: strings to look in, a-z, may be empty.
// unusable entries are reported in "skipped" and their tally is null.
#[derive(serde::Deserialize)]
struct Question {
    dictionary: Vec<String>,
    queries: Vec<String>,
    #[serde(default)]
    sliding: bool,
    #[serde(default)]
    fixed_ends: bool,
    #[serde(default)]
    threads: Option<usize>,
}

#[derive(serde::Serialize)]
struct Skipped<'a> {
    kind: &'static str,
    index: usize,
    text: &'a str,
    error: String,
}

#[derive(serde::Serialize)]
struct Answer<'a> {
    tallies: Vec<Option<usize>>,
    skipped: Vec<Skipped<'a>>,
}

fn make_run_config(question: &Question) -> run_config::RunConfig {
    let mut run_config = run_config::make_default_run_config();
    if let Some(threads) = question.threads {
        run_config = run_config.with_num_threads(threads);
    }
    if question.sliding {
        run_config = run_config.with_strategy(matcher::MatchStrategy::Sliding);
    }
    if question.fixed_ends {
        run_config = run_config.with_rule(matcher::MatchRule::FixedEnds);
    }
    run_config
}

pub fn main() -> error::Returns<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = std::env::args().collect::<Vec<_>>();
    let data = if args.len() > 1 {
        std::fs::read_to_string(&args[1])?
    } else {
        let mut s = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut s)?;
        s
    };
    let question = serde_json::from_str::<Question>(&data)?;
    let run_config = make_run_config(&question);

    let dictionary =
        dict::read_dictionary_words(question.dictionary.iter().map(|s| s.as_str()), &run_config)?;
    let queries =
        dict::read_query_lines(question.queries.iter().map(|s| s.as_str()), &run_config)?;
    let tallies = batch::run(queries.queries(), dictionary.patterns(), &run_config);

    let mut answer = Answer {
        tallies: vec![None; question.queries.len()],
        skipped: Vec::new(),
    };
    for (&source_index, &tally) in queries.source_indices().iter().zip(tallies.iter()) {
        answer.tallies[source_index] = Some(tally);
    }
    for (kind, skipped, texts) in [
        ("word", dictionary.skipped(), &question.dictionary),
        ("query", queries.skipped(), &question.queries),
    ] {
        for skipped_line in skipped {
            answer.skipped.push(Skipped {
                kind,
                index: skipped_line.index,
                text: &texts[skipped_line.index],
                error: skipped_line.error.to_string(),
            });
        }
    }
    println!("{}", serde_json::to_string(&answer)?);
    Ok(())
}
