use anyhow::Context;
use std::io::BufRead;

pub const PROMPT: &str = "Proceed? [y/N]: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

impl Confirmation {
    /// Only a lone `y` or `Y` accepts; everything else, including an empty
    /// line or bytes that are not UTF-8, declines.
    pub fn parse(answer: &[u8]) -> Self {
        let answer = answer.strip_suffix(b"\n").unwrap_or(answer);
        let answer = answer.strip_suffix(b"\r").unwrap_or(answer);

        if answer.eq_ignore_ascii_case(b"y") {
            Confirmation::Accepted
        } else {
            Confirmation::Declined
        }
    }

    /// Reads a single line. End of input counts as a decline.
    pub fn read_from(reader: &mut dyn BufRead) -> anyhow::Result<Self> {
        let mut answer = Vec::new();
        reader
            .read_until(b'\n', &mut answer)
            .context("Failed to read confirmation from stdin")?;

        Ok(Self::parse(&answer))
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Confirmation::Accepted)
    }
}
