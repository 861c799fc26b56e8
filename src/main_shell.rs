// Copyright (C) 2020-2026 Andy Kurnia.

mod rlhelper;

use scrambled::{alphabet, batch, dict, error, fash, matcher, report, run_config};

static HELP: &str = "commands:
  load <file>...    add the words in each dictionary file
  word <w>...       add words
  words             show how many words are loaded
  clear             forget all words
  query <q>...      count the loaded words in each query
  sliding on|off    incremental letter counts
  fixed on|off      keep first and last letters in place
  source <file>     run commands from a file
  exit";

struct Shell {
    run_config: run_config::RunConfig,
    patterns: Vec<matcher::Pattern>,
    seen: fash::LetterHashSet<Box<[u8]>>,
}

impl Shell {
    fn new() -> Self {
        Self {
            run_config: run_config::make_serial_run_config(),
            patterns: Vec::new(),
            seen: fash::LetterHashSet::default(),
        }
    }

    fn add(&mut self, dictionary: dict::Dictionary) -> usize {
        let mut num_added = 0;
        for pattern in dictionary.patterns() {
            if self.seen.insert(pattern.letters().into()) {
                self.patterns.push(pattern.clone());
                num_added += 1;
            }
        }
        for skipped_line in dictionary.skipped() {
            println!("skipped {}", skipped_line);
        }
        num_added
    }

    fn query(&self, strings: &[String]) {
        let mut queries = Vec::with_capacity(strings.len());
        for s in strings {
            match alphabet::encode(s) {
                Ok(v) => queries.push(v),
                Err(err) => {
                    println!("{:?}: {}", s, err);
                    return;
                }
            }
        }
        let t0 = std::time::Instant::now();
        let tallies = batch::run(&queries, &self.patterns, &self.run_config);
        let elapsed = t0.elapsed();
        for (idx, &tally) in tallies.iter().enumerate() {
            println!("{}", report::case_line(idx, tally));
        }
        println!("({:?})", elapsed);
    }

    fn set_flag(&mut self, strings: &[String]) -> Result<(), String> {
        let on = match strings.get(1).map(|s| s.as_str()) {
            Some("on") => true,
            Some("off") => false,
            _ => return Err("need on or off".into()),
        };
        self.run_config = if strings[0] == "sliding" {
            self.run_config.clone().with_strategy(if on {
                matcher::MatchStrategy::Sliding
            } else {
                matcher::MatchStrategy::EndpointFilter
            })
        } else {
            self.run_config.clone().with_rule(if on {
                matcher::MatchRule::FixedEnds
            } else {
                matcher::MatchRule::Anagram
            })
        };
        Ok(())
    }
}

pub fn main() -> error::Returns<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let mut shell = Shell::new();
    let mut rl = rlhelper::new_rl_editor()?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            match shell_words::split(&line) {
                Ok(strings) => {
                    if !strings.is_empty() {
                        match strings[0].as_str() {
                            "help" => {
                                println!("{}", HELP);
                            }
                            "exit" => {
                                break;
                            }
                            "load" => {
                                for filename in &strings[1..] {
                                    match dict::load_dictionary(filename, &shell.run_config) {
                                        Ok(dictionary) => {
                                            let num_added = shell.add(dictionary);
                                            println!("{}: added {} words", filename, num_added);
                                        }
                                        Err(err) => {
                                            println!("{}", err);
                                        }
                                    }
                                }
                            }
                            "word" => {
                                match dict::read_dictionary_words(
                                    strings[1..].iter().map(|s| s.as_str()),
                                    &shell.run_config,
                                ) {
                                    Ok(dictionary) => {
                                        let num_added = shell.add(dictionary);
                                        println!("added {} words", num_added);
                                    }
                                    Err(err) => {
                                        println!("{}", err);
                                    }
                                }
                            }
                            "words" => {
                                println!("{} words", shell.patterns.len());
                            }
                            "clear" => {
                                shell.patterns.clear();
                                shell.seen.clear();
                            }
                            "query" => {
                                shell.query(&strings[1..]);
                            }
                            "sliding" | "fixed" => {
                                if let Err(err) = shell.set_flag(&strings) {
                                    println!("{}", err);
                                }
                            }
                            "source" => {
                                if strings.len() > 1 {
                                    match std::fs::read_to_string(&strings[1]) {
                                        Ok(whole_file) => {
                                            let v = cmd_stack.len();
                                            for (line_num, line) in whole_file.lines().enumerate() {
                                                cmd_stack.push((
                                                    line.to_string(),
                                                    Some((strings[1].clone(), line_num + 1)),
                                                ));
                                            }
                                            cmd_stack[v..].reverse();
                                        }
                                        Err(err) => {
                                            println!("cannot open file: {:?}", err);
                                        }
                                    }
                                } else {
                                    println!("need another arg");
                                }
                            }
                            _ => {
                                println!("invalid input, help for help");
                            }
                        }
                    }
                }
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    Ok(())
}
