//! Line Input
//!
//! Where the REPL gets its lines from: an interactive `rustyline` editor for
//! the terminal, or any buffered reader for scripted sessions.

use std::io::{self, BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

/// One read from a [`LineSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl+C at the prompt
    Interrupted,
    /// Ctrl+D or end of input
    Eof,
}

/// Supplies the REPL with one line per prompt.
pub trait LineSource {
    /// Shows `prompt` and reads the next line.
    ///
    /// Sources that draw their own prompt may ignore `out`.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Input>;
}

// == Interactive ==
/// Terminal line editor with in-memory history.
pub struct Readline {
    editor: Editor<(), DefaultHistory>,
}

impl Readline {
    pub fn new() -> rustyline::Result<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .auto_add_history(true)
            .build();

        Ok(Self {
            editor: Editor::with_config(config)?,
        })
    }
}

impl LineSource for Readline {
    /// Blocks the current worker while waiting for the user, so it needs the
    /// multi-threaded runtime.
    fn read_line(&mut self, prompt: &str, _out: &mut dyn Write) -> io::Result<Input> {
        let editor = &mut self.editor;
        match tokio::task::block_in_place(|| editor.readline(prompt)) {
            Ok(line) => Ok(Input::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
        }
    }
}

// == Scripted ==
/// Reads lines from any buffered reader, echoing the prompt to the output.
#[derive(Debug)]
pub struct Script<R> {
    reader: R,
}

impl<R: BufRead> Script<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for Script<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Input> {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(Input::Eof);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Input::Line(line))
    }
}
