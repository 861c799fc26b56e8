// Copyright (C) 2020-2026 Andy Kurnia.

use clap::Parser;
use scrambled::{batch, dict, error, matcher, report, run_config};

#[derive(Parser, Debug)]
#[command(name = "scrambled")]
#[command(about = "Count the dictionary words hidden, possibly scrambled, in each query")]
struct Args {
    /// Dictionary file, one word per line
    #[arg(long)]
    dictionary: std::path::PathBuf,

    /// Query file, one string per line
    #[arg(long)]
    input: std::path::PathBuf,

    /// Results file (default: stdout)
    #[arg(long)]
    output: Option<std::path::PathBuf>,

    /// Worker threads (default: number of CPUs)
    #[arg(long)]
    threads: Option<usize>,

    /// Slide letter counts incrementally instead of filtering on endpoints
    #[arg(long)]
    sliding: bool,

    /// Only permute the letters between the first and the last
    #[arg(long)]
    fixed_ends: bool,

    /// Fail on the first unusable line instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Write CSV instead of "Case #i: n" lines
    #[arg(long)]
    csv: bool,
}

fn make_run_config(args: &Args) -> run_config::RunConfig {
    let mut run_config = run_config::make_default_run_config();
    if let Some(threads) = args.threads {
        run_config = run_config.with_num_threads(threads);
    }
    if args.sliding {
        run_config = run_config.with_strategy(matcher::MatchStrategy::Sliding);
    }
    if args.fixed_ends {
        run_config = run_config.with_rule(matcher::MatchRule::FixedEnds);
    }
    if args.strict {
        run_config = run_config.with_bad_line_policy(run_config::BadLinePolicy::Reject);
    }
    run_config
}

fn write_report<W: std::io::Write>(
    mut w: W,
    source_indices: &[usize],
    tallies: &[usize],
    csv: bool,
) -> error::Returns<()> {
    if csv {
        report::write_csv(w, source_indices, tallies)?;
    } else {
        report::write_cases(&mut w, source_indices, tallies)?;
        w.flush()?;
    }
    Ok(())
}

pub fn main() -> error::Returns<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let run_config = make_run_config(&args);

    let t0 = std::time::Instant::now();
    let dictionary = dict::load_dictionary(&args.dictionary, &run_config)?;
    let queries = dict::load_queries(&args.input, &run_config)?;
    log::info!(
        "loaded {} words and {} queries in {:?}",
        dictionary.len(),
        queries.len(),
        t0.elapsed()
    );
    if !dictionary.skipped().is_empty() || !queries.skipped().is_empty() {
        log::warn!(
            "skipped {} dictionary lines and {} query lines",
            dictionary.skipped().len(),
            queries.skipped().len()
        );
    }
    let longest_query = queries.longest();
    let num_oversized = dictionary
        .patterns()
        .iter()
        .filter(|pattern| pattern.len() > longest_query)
        .count();
    if num_oversized > 0 {
        log::info!(
            "{} words are longer than every query and cannot match",
            num_oversized
        );
    }

    let t1 = std::time::Instant::now();
    let tallies = batch::run(queries.queries(), dictionary.patterns(), &run_config);
    log::info!(
        "matched on {} threads in {:?}",
        run_config.num_threads(),
        t1.elapsed()
    );

    match &args.output {
        Some(path) => {
            let f = match std::fs::File::create(path) {
                Ok(f) => f,
                Err(err) => {
                    scrambled::return_error!(format!("cannot create {}: {}", path.display(), err));
                }
            };
            write_report(
                std::io::BufWriter::new(f),
                queries.source_indices(),
                &tallies,
                args.csv,
            )?;
            log::info!("wrote {} results to {}", tallies.len(), path.display());
        }
        None => {
            write_report(
                std::io::stdout().lock(),
                queries.source_indices(),
                &tallies,
                args.csv,
            )?;
        }
    }
    Ok(())
}
