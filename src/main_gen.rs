// Copyright (C) 2020-2026 Andy Kurnia.

use scrambled::{alphabet, error, recurrence};

fn parse_letter(s: &str) -> error::Returns<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => {
            scrambled::return_error!(format!("need a single letter, got {:?}", s));
        }
    }
}

pub fn main() -> error::Returns<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() != 8 {
        println!(
            "args:
  s1 s2 n a b c d
    prints n letters: s1, s2, then letter (97 + x[i] % 26) with
    x[i] = (a * x[i - 1] + b * x[i - 2] + c) % d, x[1] = ord(s1), x[2] = ord(s2)
    0 <= a, b, c <= 10^9, 1 <= d <= 10^9"
        );
        return Ok(());
    }
    let s1 = parse_letter(&args[1])?;
    let s2 = parse_letter(&args[2])?;
    let len = args[3].parse::<usize>()?;
    let params = recurrence::RecurrenceParams::new(
        args[4].parse()?,
        args[5].parse()?,
        args[6].parse()?,
        args[7].parse()?,
    )?;
    let t0 = std::time::Instant::now();
    let letters = recurrence::generate(s1, s2, len, &params)?;
    log::debug!("generated {} letters in {:?}", letters.len(), t0.elapsed());
    println!("{}", alphabet::decode(&letters));
    Ok(())
}
