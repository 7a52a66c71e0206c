use std::io::{BufRead, Write};

use log::{error, warn};

use crate::report::{write_session, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Encode,
    Exit,
}

/// Accepts the integers 1 and 2. Leading whitespace, a sign and leading
/// zeros are allowed; anything after the number, whitespace included, is not.
pub fn parse_choice(input: &str) -> Option<Choice> {
    match input.trim_start().parse::<i64>() {
        Ok(1) => Some(Choice::Encode),
        Ok(2) => Some(Choice::Exit),
        _ => None,
    }
}

fn write_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\n\n--------------Welcome to Huffman Coding --------------\n")?;
    writeln!(out, "1. Enter String and Encode/Decode")?;
    writeln!(out, "2. Exit")?;
    write!(out, "\nEnter your choice: ")?;
    out.flush()
}

/// Reads one line without its line terminator. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Runs the interactive menu until the user picks exit or input runs out.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    bits_per_symbol: u32,
) -> anyhow::Result<()> {
    loop {
        write_menu(out)?;
        let Some(line) = read_line(input)? else {
            break;
        };

        match parse_choice(&line) {
            Some(Choice::Encode) => {
                write!(out, "\nEnter a String: ")?;
                out.flush()?;
                let text = read_line(input)?.unwrap_or_default();
                match Session::run(&text) {
                    Ok(session) => write_session(out, &session, bits_per_symbol)?,
                    Err(e) => {
                        error!("Could not encode input: {}", e);
                        writeln!(out, "\nError! {}", e)?;
                    }
                }
            }
            Some(Choice::Exit) => {
                writeln!(out, "\nExiting program. Goodbye!")?;
                return Ok(());
            }
            None => {
                warn!("Rejected menu input {:?}", line);
                writeln!(
                    out,
                    "\nInvalid input. Please enter a valid numeric choice (1 or 2)."
                )?;
            }
        }
    }
    Ok(())
}
