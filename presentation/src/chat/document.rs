//! Multi-line document entry for the chat loop
//!
//! Blank lines belong to the document. Entry ends with a line holding only
//! [`END_OF_DOCUMENT`] or with Ctrl-D, so pasted paragraphs never leak into
//! the command prompt.

use analyzer_domain::normalize_newlines;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io;

/// Line that ends document entry
pub const END_OF_DOCUMENT: &str = ".";

/// Result of document entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentInput {
    Text(String),
    /// Nothing but blank lines: use the built-in sample
    Empty,
    /// Ctrl-C with nothing entered
    Aborted,
}

/// Lines collected so far
#[derive(Debug, Default)]
pub struct DocumentBuffer {
    lines: Vec<String>,
}

impl DocumentBuffer {
    /// Add one submitted entry. A bracketed paste arrives as a single entry
    /// holding several lines.
    pub fn push(&mut self, entry: &str) {
        self.lines
            .extend(normalize_newlines(entry).split('\n').map(str::to_string));
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }

    pub fn finish(self) -> DocumentInput {
        if self.is_blank() {
            DocumentInput::Empty
        } else {
            DocumentInput::Text(self.lines.join("\n"))
        }
    }
}

/// Collect a document from line-editor signals.
///
/// Stops consuming at the end-of-document line, Ctrl-D, or the end of the
/// signals. Ctrl-C clears what was entered, or aborts when nothing was.
pub fn collect_document<I>(signals: I) -> io::Result<DocumentInput>
where
    I: IntoIterator<Item = io::Result<Signal>>,
{
    let mut buffer = DocumentBuffer::default();
    for signal in signals {
        match signal? {
            Signal::Success(entry) if entry.trim() == END_OF_DOCUMENT => break,
            Signal::Success(entry) => buffer.push(&entry),
            Signal::CtrlC if buffer.is_blank() => return Ok(DocumentInput::Aborted),
            Signal::CtrlC => buffer.clear(),
            _ => break,
        }
    }
    Ok(buffer.finish())
}

/// Read the document from the terminal.
///
/// Uses its own editor without history so the document is not persisted.
pub fn read_document() -> io::Result<DocumentInput> {
    println!(
        "Paste the document, then finish with a line containing only `{}` (or Ctrl-D).",
        END_OF_DOCUMENT
    );
    println!(
        "Finishing straight away uses the built-in sample resume. Ctrl-C clears the input."
    );

    let mut editor = Reedline::create().use_bracketed_paste(true);
    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("document".to_string()),
        DefaultPromptSegment::Empty,
    );

    collect_document(std::iter::from_fn(|| Some(editor.read_line(&prompt))))
}
