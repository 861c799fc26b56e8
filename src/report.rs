// Copyright (C) 2020-2026 Andy Kurnia.

// Cases are numbered by each query's 0-based position in its input, so a
// skipped line leaves a gap rather than renumbering what follows.

#[inline(always)]
pub fn case_line(source_index: usize, tally: usize) -> String {
    format!("Case #{}: {}", source_index + 1, tally)
}

pub fn write_cases<W: std::io::Write>(
    w: &mut W,
    source_indices: &[usize],
    tallies: &[usize],
) -> std::io::Result<()> {
    for (&source_index, &tally) in source_indices.iter().zip(tallies.iter()) {
        writeln!(w, "{}", case_line(source_index, tally))?;
    }
    Ok(())
}

#[derive(serde::Serialize)]
struct CaseRow {
    case: usize,
    tally: usize,
}

pub fn write_csv<W: std::io::Write>(
    w: W,
    source_indices: &[usize],
    tallies: &[usize],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(w);
    for (&source_index, &tally) in source_indices.iter().zip(tallies.iter()) {
        csv_writer.serialize(CaseRow {
            case: source_index + 1,
            tally,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
