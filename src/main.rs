use std::{ffi::OsString, process::ExitCode};

use clap::Parser;
use infixcalc::evaluate;

mod repl;

/// infixcalc evaluates integer arithmetic with `+`, `-`, `*`, `/`, `^` and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate. Several words are joined with single
    /// spaces. Without an expression, an interactive prompt is started.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    expression: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let source = parse_source(std::env::args_os()).unwrap_or_else(|e| e.exit());

    let Some(source) = source else {
        return repl::run();
    };

    if print_evaluation(&source) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Parses the command line into the one-shot expression, or `None` if there
/// is none.
///
/// clap takes a `--` in front of the first word as an escape and drops it.
/// It is put back so that every word typed ends up in the expression.
fn parse_source<I, T>(argv: I) -> Result<Option<String>, clap::Error>
    where I: IntoIterator<Item = T>,
          T: Into<OsString>
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let mut words = Args::try_parse_from(&argv)?.expression;

    if argv.get(1).is_some_and(|first| first.as_os_str() == "--") {
        words.insert(0, "--".to_string());
    }

    Ok((!words.is_empty()).then(|| words.join(" ")))
}

/// Evaluates `source` and prints either the value or the error message to
/// standard output. Returns whether evaluation succeeded.
fn print_evaluation(source: &str) -> bool {
    match evaluate(source) {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) => {
            println!("{e}");
            false
        },
    }
}

#[cfg(test)]
mod tests {
    use super::parse_source;

    fn source(argv: &[&str]) -> Option<String> {
        parse_source(argv.iter().copied()).unwrap()
    }

    #[test]
    fn words_are_joined_with_spaces() {
        assert_eq!(source(&["infixcalc", "1", "+", "2*3"]), Some("1 + 2*3".to_string()));
        assert_eq!(source(&["infixcalc", "-3"]), Some("-3".to_string()));
    }

    #[test]
    fn no_words_starts_the_prompt() {
        assert_eq!(source(&["infixcalc"]), None);
    }

    #[test]
    fn double_dash_is_part_of_the_expression() {
        assert_eq!(source(&["infixcalc", "--", "1", "+", "1"]), Some("-- 1 + 1".to_string()));
        assert_eq!(source(&["infixcalc", "1", "--", "1"]), Some("1 -- 1".to_string()));
        assert_eq!(source(&["infixcalc", "--"]), Some("--".to_string()));
        assert!(infixcalc::evaluate("-- 1 + 1").is_err());
    }
}
