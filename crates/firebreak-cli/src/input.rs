//! Whitespace-separated token reader for the setup and round protocol

use std::collections::VecDeque;
use std::io::BufRead;

use anyhow::{bail, Context, Result};

/// Pulls whitespace-separated tokens off a buffered reader, one line at
/// a time. Both the setup block and the per-round positions arrive as
/// plain integer tokens, so token granularity is all the protocol needs.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading further lines as needed
    pub fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("failed to read input")?;
            if read == 0 {
                bail!("unexpected end of input");
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    pub fn next_i64(&mut self) -> Result<i64> {
        let token = self.next_token()?;
        token
            .parse()
            .with_context(|| format!("expected an integer, got {token:?}"))
    }

    pub fn next_usize(&mut self) -> Result<usize> {
        let token = self.next_token()?;
        token
            .parse()
            .with_context(|| format!("expected a non-negative integer, got {token:?}"))
    }
}
