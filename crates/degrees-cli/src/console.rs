//! Interactive console prompts.
//!
//! Reads names and disambiguation choices line by line. Prompts are written
//! to a separate writer so machine-readable output on stdout stays clean.

use std::io::{self, BufRead, Write};

use degrees_lib::{Candidate, Disambiguator};

/// Line-oriented prompt over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `label`, then read one line. Returns `None` at end of input.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// Write a full line, e.g. a status message.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }
}

impl<R: BufRead, W: Write> Disambiguator for Console<R, W> {
    fn choose(
        &mut self,
        name: &str,
        candidates: &[Candidate<'_>],
    ) -> degrees_lib::Result<Option<String>> {
        writeln!(self.output, "Which '{name}'?")?;
        for candidate in candidates {
            writeln!(
                self.output,
                "ID: {}, Name: {}, Birth: {}",
                candidate.id, candidate.name, candidate.birth_text
            )?;
        }
        Ok(self.prompt("Intended Person ID: ")?)
    }
}
