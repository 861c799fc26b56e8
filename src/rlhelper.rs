// Copyright (C) 2020-2026 Andy Kurnia.

use rustyline_derive::{Completer, Helper, Highlighter, Hinter, Validator};

#[derive(Completer, Helper, Highlighter, Hinter, Validator)]
pub struct ShellHelper {
    #[rustyline(Completer)]
    completer: rustyline::completion::FilenameCompleter,
    #[rustyline(Hinter)]
    hinter: rustyline::hint::HistoryHinter,
}

pub fn new_rl_editor()
-> rustyline::Result<rustyline::Editor<ShellHelper, rustyline::history::DefaultHistory>> {
    let mut rl = rustyline::Editor::new()?;
    rl.set_helper(Some(ShellHelper {
        completer: rustyline::completion::FilenameCompleter::new(),
        hinter: rustyline::hint::HistoryHinter::new(),
    }));
    Ok(rl)
}
