use std::process::ExitCode;

use rustyline::{DefaultEditor, error::ReadlineError};

const PROMPT: &str = "> ";

/// Runs the interactive prompt until input is closed or interrupted.
pub fn run() -> ExitCode {
    match Repl::new() {
        Ok(mut repl) => repl.run(),
        Err(err) => {
            eprintln!("Could not start the prompt: {err}");
            ExitCode::FAILURE
        },
    }
}

struct Repl {
    reader: DefaultEditor,
}

impl Repl {
    fn new() -> rustyline::Result<Self> {
        Ok(Self { reader: DefaultEditor::new()? })
    }

    fn run(&mut self) -> ExitCode {
        loop {
            match self.reader.readline(PROMPT) {
                Ok(input) => {
                    self.add_history_entry(&input);
                    println!("{}", respond(&input));
                },
                // Ctrl-C or Ctrl-D.
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("Could not read line: {err}");
                    break ExitCode::FAILURE;
                },
            }
        }
    }

    /// Blank lines are still evaluated but not kept in the history.
    fn add_history_entry(&mut self, input: &str) {
        if input.trim().is_empty() {
            return;
        }
        if let Err(err) = self.reader.add_history_entry(input) {
            log::warn!("Could not add history entry: {err}");
        }
    }
}

/// Returns the text printed for one line of input. Failures only affect the
/// current line.
fn respond(input: &str) -> String {
    match infixcalc::evaluate(input) {
        Ok(value) => value.to_string(),
        Err(e) => e.to_string(),
    }
}
