//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes each decorated line
//! as soon as the walker reaches it, for use with `TreeWalker`.

use std::io::{self, Stdout, Write};

use crate::tree::TreeOutput;

/// One output line: prefix, base name, newline. No escaping or alignment.
pub fn render_line(prefix: &str, name: &str) -> String {
    format!("{}{}\n", prefix, name)
}

/// Streaming output formatter - writes straight to its sink without buffering lines.
pub struct StreamingFormatter<W: Write = Stdout> {
    out: W,
}

impl StreamingFormatter<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> StreamingFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TreeOutput for StreamingFormatter<W> {
    fn output_node(&mut self, name: &str, prefix: &str) -> io::Result<()> {
        self.out.write_all(render_line(prefix, name).as_bytes())?;
        self.out.flush()
    }
}
