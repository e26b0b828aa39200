//! Masked single-line input for the API key

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io::{self, Write};

/// Read a line without echoing it, printing `*` per character.
///
/// Returns `None` when the user cancels with Esc or Ctrl-C. The line never
/// passes through the line editor, so it is never written to history.
pub fn read_secret(prompt: &str) -> io::Result<Option<String>> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", prompt)?;
    stdout.flush()?;

    terminal::enable_raw_mode()?;
    let result = read_masked(&mut stdout);
    terminal::disable_raw_mode()?;

    writeln!(stdout)?;
    result
}

fn read_masked(out: &mut impl Write) -> io::Result<Option<String>> {
    let mut secret = String::new();
    loop {
        match event::read()? {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Enter => return Ok(Some(secret)),
                KeyCode::Esc => return Ok(None),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(None);
                }
                KeyCode::Backspace => {
                    if secret.pop().is_some() {
                        write!(out, "\u{8} \u{8}")?;
                    }
                }
                KeyCode::Char(c) => {
                    secret.push(c);
                    write!(out, "*")?;
                }
                _ => {}
            },
            Event::Paste(text) => {
                let text = text.trim_end_matches(['\r', '\n']);
                secret.push_str(text);
                write!(out, "{}", "*".repeat(text.chars().count()))?;
            }
            _ => {}
        }
        out.flush()?;
    }
}
