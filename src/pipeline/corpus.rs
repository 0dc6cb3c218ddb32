use std::io::{self, BufRead};

use serde::Serialize;

use crate::error::EvalError;

/// Lines present in only one of the two files, left unevaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DroppedLines {
    pub reference: u64,
    pub hypothesis: u64,
}

impl DroppedLines {
    pub fn total(&self) -> u64 {
        self.reference + self.hypothesis
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePair {
    /// 1-based position in both files.
    pub line_number: u64,
    pub reference: String,
    pub hypothesis: String,
}

/// Pairs lines of a reference and a hypothesis stream by position.
///
/// Pairing stops at the end of the shorter stream; the remaining lines of
/// the longer one are counted into [`LinePairs::dropped`] without being
/// decoded, so only paired lines have to be valid UTF-8.
pub struct LinePairs<R, H> {
    reference: R,
    hypothesis: H,
    line_number: u64,
    dropped: DroppedLines,
    exhausted: bool,
}

impl<R: BufRead, H: BufRead> LinePairs<R, H> {
    pub fn new(reference: R, hypothesis: H) -> Self {
        Self {
            reference,
            hypothesis,
            line_number: 0,
            dropped: DroppedLines::default(),
            exhausted: false,
        }
    }

    /// Unpaired tail lines. Only meaningful once iteration has finished.
    pub fn dropped(&self) -> DroppedLines {
        self.dropped
    }

    fn next_pair(&mut self) -> Result<Option<LinePair>, EvalError> {
        if self.exhausted {
            return Ok(None);
        }

        let Some(reference) = read_raw_line(&mut self.reference, "read reference line")? else {
            self.exhausted = true;
            self.dropped.hypothesis =
                count_remaining(&mut self.hypothesis, "read hypothesis line")?;
            return Ok(None);
        };
        let Some(hypothesis) = read_raw_line(&mut self.hypothesis, "read hypothesis line")? else {
            self.exhausted = true;
            self.dropped.reference =
                1 + count_remaining(&mut self.reference, "read reference line")?;
            return Ok(None);
        };

        self.line_number += 1;
        Ok(Some(LinePair {
            line_number: self.line_number,
            reference: decode_line(reference, "decode reference line")?,
            hypothesis: decode_line(hypothesis, "decode hypothesis line")?,
        }))
    }
}

impl<R: BufRead, H: BufRead> Iterator for LinePairs<R, H> {
    type Item = Result<LinePair, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_pair().transpose()
    }
}

/// One line including its terminator, or `None` at end of stream.
fn read_raw_line<B: BufRead>(
    reader: &mut B,
    context: &'static str,
) -> Result<Option<Vec<u8>>, EvalError> {
    let mut line = Vec::new();
    let read = reader
        .read_until(b'\n', &mut line)
        .map_err(|e| EvalError::io(context, e))?;
    Ok((read > 0).then_some(line))
}

/// Strip a trailing `\n` or `\r\n` and decode as UTF-8.
fn decode_line(mut line: Vec<u8>, context: &'static str) -> Result<String, EvalError> {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
    String::from_utf8(line)
        .map_err(|e| EvalError::io(context, io::Error::new(io::ErrorKind::InvalidData, e)))
}

fn count_remaining<B: BufRead>(reader: &mut B, context: &'static str) -> Result<u64, EvalError> {
    let mut count = 0u64;
    while read_raw_line(reader, context)?.is_some() {
        count += 1;
    }
    Ok(count)
}
