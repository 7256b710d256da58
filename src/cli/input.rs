//! Input source resolution

use std::io::{BufRead, Read, Write};

use crate::Result;

const PROMPT: &str = "Enter text or URL to summarize: ";

/// Pick the input to summarize: the CLI argument, else piped stdin, else an
/// interactive prompt.
///
/// Stdin is only drained when it is not a terminal, so an interactive session
/// goes straight to the prompt.
pub fn resolve_input<R: BufRead, W: Write>(
    arg: Option<String>,
    mut stdin: R,
    stdin_is_terminal: bool,
    mut prompt_out: W,
) -> Result<String> {
    if let Some(arg) = arg {
        tracing::info!("Input provided as argument: {}...", preview(&arg));
        return Ok(arg);
    }

    if !stdin_is_terminal {
        tracing::info!("Reading from stdin...");
        let mut piped = String::new();
        stdin.read_to_string(&mut piped)?;
        let piped = piped.trim();
        if !piped.is_empty() {
            tracing::info!("Got input from stdin: {}...", preview(piped));
            return Ok(piped.to_string());
        }
    }

    tracing::info!("No input detected. Prompting user...");
    write!(prompt_out, "{}", PROMPT)?;
    prompt_out.flush()?;

    let mut line = String::new();
    stdin.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn preview(input: &str) -> String {
    input.chars().take(50).collect()
}
