use std::io::{self, BufRead, Write};

use watchr_common::error::SelectionError;

/// Reads one line from stdin and parses it as a menu index. There is no
/// re-prompt: invalid input is a hard, defined error.
pub fn read_selection(prompt_msg: &str) -> anyhow::Result<usize> {
    print!("{prompt_msg}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(parse_selection(&line)?)
}

fn parse_selection(line: &str) -> Result<usize, SelectionError> {
    let trimmed: &str = line.trim();
    trimmed.parse::<usize>().map_err(|_| SelectionError::NotANumber {
        input: trimmed.to_string(),
    })
}
