use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Line-based question/answer over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` without a newline and read one trimmed answer.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("reading answer from stdin")?;
        if n == 0 {
            bail!("input ended before {:?} was answered", question.trim());
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_trimmed_answers_in_order() {
        let input = b"  Cafe \nHostel\n" as &[u8];
        let mut out = Vec::new();
        let mut p = Prompter::new(input, &mut out);
        assert_eq!(p.ask("Start: ").unwrap(), "Cafe");
        assert_eq!(p.ask("Goal: ").unwrap(), "Hostel");
        drop(p);
        assert_eq!(String::from_utf8(out).unwrap(), "Start: Goal: ");
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut p = Prompter::new(b"" as &[u8], Vec::new());
        let err = p.ask("Start: ").unwrap_err();
        assert!(err.to_string().contains("Start:"));
    }
}
