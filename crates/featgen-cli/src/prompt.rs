//! Line prompts for `featgen new` when arguments are omitted.
//!
//! On a terminal (with the `interactive` feature) prompts go through
//! `dialoguer`. Otherwise one line is read from stdin per question, so
//! `printf 'lib/features\nwallet\n' | featgen new` works in scripts.

use std::io::{self, BufRead, Write};

use crate::error::{CliError, CliResult, IntoCli};

/// Ask one question. An empty answer falls back to `default`, else to "".
pub fn ask(label: &str, default: Option<&str>) -> CliResult<String> {
    if let Some(answer) = ask_terminal(label, default) {
        return answer;
    }

    ask_line(label, default, &mut io::stdin().lock(), &mut io::stderr())
}

#[cfg(feature = "interactive")]
fn ask_terminal(label: &str, default: Option<&str>) -> Option<CliResult<String>> {
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
        return None;
    }

    let theme = dialoguer::theme::ColorfulTheme::default();
    let mut input = dialoguer::Input::<String>::with_theme(&theme)
        .with_prompt(label)
        .allow_empty(true);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }

    Some(
        input
            .interact_text()
            .map(|answer| answer.trim().to_string())
            .map_err(|e| CliError::InvalidInput {
                message: format!("prompt failed: {e}"),
                source: Some(Box::new(e)),
            }),
    )
}

#[cfg(not(feature = "interactive"))]
fn ask_terminal(_label: &str, _default: Option<&str>) -> Option<CliResult<String>> {
    None
}

/// Plain-text prompt: write `label`, read one line, trim it.
///
/// End of input before any line is `Cancelled`.
fn ask_line<R: BufRead, W: Write>(
    label: &str,
    default: Option<&str>,
    input: &mut R,
    prompt: &mut W,
) -> CliResult<String> {
    match default {
        Some(default) => write!(prompt, "{label} [{default}]: "),
        None => write!(prompt, "{label}: "),
    }
    .and_then(|()| prompt.flush())
    .with_cli_context(|| "failed to write prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_cli_context(|| "failed to read answer")?;
    if read == 0 {
        return Err(CliError::Cancelled);
    }

    let answer = line.trim();
    if answer.is_empty() {
        Ok(default.unwrap_or_default().to_string())
    } else {
        Ok(answer.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(input: &str, default: Option<&str>) -> (CliResult<String>, String) {
        let mut prompt = Vec::new();
        let result = ask_line("Feature name", default, &mut Cursor::new(input), &mut prompt);
        (result, String::from_utf8(prompt).unwrap())
    }

    #[test]
    fn reads_and_trims_one_line() {
        let (result, prompt) = answer("  Wallet  \nignored\n", None);
        assert_eq!(result.unwrap(), "Wallet");
        assert_eq!(prompt, "Feature name: ");
    }

    #[test]
    fn empty_answer_uses_default() {
        let (result, prompt) = answer("\n", Some("lib/features"));
        assert_eq!(result.unwrap(), "lib/features");
        assert_eq!(prompt, "Feature name [lib/features]: ");
    }

    #[test]
    fn empty_answer_without_default_is_empty() {
        let (result, _) = answer("\n", None);
        assert_eq!(result.unwrap(), "");
    }

    #[test]
    fn end_of_input_cancels() {
        let (result, _) = answer("", None);
        assert!(matches!(result, Err(CliError::Cancelled)));
    }

    #[test]
    fn last_line_without_newline_is_accepted() {
        let (result, _) = answer("cart", None);
        assert_eq!(result.unwrap(), "cart");
    }
}
