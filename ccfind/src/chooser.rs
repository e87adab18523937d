//! Interactive choice between several matches.

use crate::locator::FileMatch;
use std::io::{BufRead, Write};
use thiserror::Error;

/// Errors that end the interactive choice.
#[derive(Debug, Error)]
pub enum ChoiceError {
    /// Nothing to choose from.
    #[error("No matches to choose from")]
    Empty,

    /// Input closed before a number was entered.
    #[error("Invalid choice: no input")]
    NoInput,

    /// Input was not a whole number.
    #[error("Invalid choice '{input}'")]
    NotANumber { input: String },

    /// Number outside `1..=count`.
    #[error("Invalid choice {choice}: expected a number between 1 and {count}")]
    OutOfRange { choice: i64, count: usize },

    /// Reading input or writing the prompt failed.
    #[error("Failed to read choice: {0}")]
    Io(#[from] std::io::Error),
}

/// Lists `matches` on `output` and reads a 1-based choice from `input`.
///
/// Output looks like:
/// ```text
///
/// Multiple files found. Please choose one:
///
/// 1. cc.v3: src/services/UserService.ts
/// 2. curbcut-api: src/UserService.ts
///
/// Enter number (1-2):
/// ```
///
/// Exactly one line is read; there is no second attempt.
///
/// # Returns
///
/// The zero-based index of the chosen match.
///
/// # Errors
///
/// Returns [`ChoiceError`] for empty `matches`, missing, non-numeric or
/// out-of-range input.
pub fn choose<R: BufRead, W: Write>(
    matches: &[FileMatch],
    mut input: R,
    mut output: W,
) -> Result<usize, ChoiceError> {
    if matches.is_empty() {
        return Err(ChoiceError::Empty);
    }

    writeln!(output, "\nMultiple files found. Please choose one:\n")?;
    for (i, found) in matches.iter().enumerate() {
        writeln!(output, "{}. {}: {}", i + 1, found.repo_name, found.relative_path)?;
    }
    write!(output, "\nEnter number (1-{}): ", matches.len())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ChoiceError::NoInput);
    }

    parse_choice(line.trim(), matches.len())
}

/// Validates a raw answer against `count` options.
fn parse_choice(answer: &str, count: usize) -> Result<usize, ChoiceError> {
    if answer.is_empty() {
        return Err(ChoiceError::NoInput);
    }

    let choice: i64 = answer.parse().map_err(|_| ChoiceError::NotANumber {
        input: answer.to_string(),
    })?;

    match usize::try_from(choice) {
        Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
        _ => Err(ChoiceError::OutOfRange { choice, count }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn sample_matches() -> Vec<FileMatch> {
        vec![
            FileMatch {
                repo_name: "cc.v3".to_string(),
                relative_path: "src/services/UserService.ts".to_string(),
                full_path: PathBuf::from("/ws/cc.v3/src/services/UserService.ts"),
            },
            FileMatch {
                repo_name: "curbcut-api".to_string(),
                relative_path: "src/UserService.ts".to_string(),
                full_path: PathBuf::from("/ws/curbcut-api/src/UserService.ts"),
            },
        ]
    }

    fn run(answer: &str) -> (Result<usize, ChoiceError>, String) {
        let mut output = Vec::new();
        let result = choose(&sample_matches(), Cursor::new(answer), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn prints_numbered_list_and_prompt() {
        let (_, output) = run("1\n");
        assert_eq!(
            output,
            "\nMultiple files found. Please choose one:\n\n\
             1. cc.v3: src/services/UserService.ts\n\
             2. curbcut-api: src/UserService.ts\n\
             \nEnter number (1-2): "
        );
    }

    #[test]
    fn valid_choices_are_zero_based() {
        assert_eq!(run("1\n").0.unwrap(), 0);
        assert_eq!(run("2\n").0.unwrap(), 1);
        assert_eq!(run("  2  \n").0.unwrap(), 1);
        assert_eq!(run("2").0.unwrap(), 1);
    }

    #[test]
    fn out_of_range() {
        for answer in ["0\n", "5\n", "-1\n", "3\n"] {
            assert!(
                matches!(run(answer).0, Err(ChoiceError::OutOfRange { .. })),
                "answer {answer:?}"
            );
        }
    }

    #[test]
    fn not_a_number() {
        for answer in ["two\n", "1.5\n", "1 2\n", "99999999999999999999999\n"] {
            assert!(
                matches!(run(answer).0, Err(ChoiceError::NotANumber { .. })),
                "answer {answer:?}"
            );
        }
    }

    #[test]
    fn missing_input() {
        assert!(matches!(run("").0, Err(ChoiceError::NoInput)));
        assert!(matches!(run("\n").0, Err(ChoiceError::NoInput)));
    }

    #[test]
    fn empty_matches() {
        let result = choose(&[], Cursor::new("1\n"), Vec::new());
        assert!(matches!(result, Err(ChoiceError::Empty)));
    }

    #[test]
    fn reads_only_one_line() {
        let mut output = Vec::new();
        let result = choose(&sample_matches(), Cursor::new("9\n2\n"), &mut output);
        assert!(matches!(result, Err(ChoiceError::OutOfRange { choice: 9, count: 2 })));
    }
}
