//! Interactive prompts.
//!
//! On a terminal these go through `dialoguer`. When stdin is piped the answer
//! is read as one line, so scripts can feed `yes`/`n` or free text.

use crate::error::ApiError;
use crate::theme::{NamedColor, Styler};
use dialoguer::{Confirm, Input};
use std::io::{BufRead, IsTerminal, Write};

/// Any answer other than `n`/`N` counts as yes, including an empty one.
pub fn interpret_yes_no(answer: &str) -> bool {
    !answer.trim().eq_ignore_ascii_case("n")
}

fn prompt_label(question: &str, styler: &Styler) -> String {
    styler.paint(&format!("▶ {}", question), NamedColor::Green)
}

/// Ask a yes/no question, defaulting to yes.
pub fn confirm(question: &str, styler: &Styler) -> Result<bool, ApiError> {
    if std::io::stdin().is_terminal() {
        return Confirm::new()
            .with_prompt(prompt_label(question, styler))
            .default(true)
            .interact()
            .map_err(|e| ApiError::PromptError(format!("Failed to get user input: {}", e)));
    }
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    confirm_from(&mut stdin.lock(), &mut stdout, question, styler)
}

/// Ask a yes/no question over arbitrary streams.
pub fn confirm_from<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
    styler: &Styler,
) -> Result<bool, ApiError> {
    let answer = ask_line(reader, writer, &format!("{} [Y/n] ", prompt_label(question, styler)))?;
    Ok(interpret_yes_no(&answer))
}

/// Ask for free text.
pub fn input(question: &str, styler: &Styler) -> Result<String, ApiError> {
    if std::io::stdin().is_terminal() {
        return Input::<String>::new()
            .with_prompt(prompt_label(question, styler))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ApiError::PromptError(format!("Failed to get user input: {}", e)));
    }
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    input_from(&mut stdin.lock(), &mut stdout, question, styler)
}

/// Ask for free text over arbitrary streams.
pub fn input_from<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
    styler: &Styler,
) -> Result<String, ApiError> {
    ask_line(reader, writer, &format!("{} ", prompt_label(question, styler)))
}

fn ask_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> Result<String, ApiError> {
    write!(writer, "{}", label)?;
    writer.flush()?;
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
