//! Lazy record source.
//!
//! `RecordReader` pulls one line at a time from a `BufRead` and yields
//! parsed [`ExpenseRecord`]s. The first line that is not a well-formed
//! record ends the stream without an error; the reader remembers where and
//! why in [`RecordReader::stop`]. Blank lines are skipped. Lines are
//! handled as raw bytes; no encoding is assumed.

use std::io::BufRead;

use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::record::{self, ExpenseRecord, StopReason};

/// Position and cause of the line that ended input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStop {
    /// 1-based line number.
    pub line: usize,
    pub reason: StopReason,
}

/// Iterator over the well-formed prefix of an expense file.
pub struct RecordReader<R> {
    source: R,
    buf: Vec<u8>,
    line: usize,
    records_read: usize,
    stop: Option<ParseStop>,
    done: bool,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            buf: Vec::new(),
            line: 0,
            records_read: 0,
            stop: None,
            done: false,
        }
    }

    /// The line that ended input, if it was not end-of-file.
    pub fn stop(&self) -> Option<&ParseStop> {
        self.stop.as_ref()
    }

    /// Number of records yielded so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    fn halt(&mut self, reason: StopReason) {
        debug!(line = self.line, %reason, "input ends at malformed line");
        self.stop = Some(ParseStop {
            line: self.line,
            reason,
        });
        self.done = true;
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<ExpenseRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.source.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => self.line += 1,
                Err(e) => {
                    self.done = true;
                    return Some(Err(PipelineError::Read(e)));
                }
            }

            if record::tokens(&self.buf).next().is_none() {
                continue;
            }

            match ExpenseRecord::parse_line(&self.buf) {
                Ok(record) => {
                    self.records_read += 1;
                    return Some(Ok(record));
                }
                Err(reason) => {
                    self.halt(reason);
                    return None;
                }
            }
        }
        None
    }
}

impl<R: BufRead> std::iter::FusedIterator for RecordReader<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    fn read_all(input: &[u8]) -> (Vec<ExpenseRecord>, Option<ParseStop>) {
        let mut reader = RecordReader::new(Cursor::new(input));
        let records = reader.by_ref().collect::<Result<Vec<_>>>().unwrap();
        (records, reader.stop().cloned())
    }

    #[test]
    fn test_reads_until_eof() {
        let (records, stop) = read_all("15.05 A x 1\n16.05 B y 2\n".as_bytes());
        assert_eq!(records.len(), 2);
        assert!(stop.is_none());
    }

    #[test]
    fn test_missing_final_newline() {
        let (records, stop) = read_all(b"15.05 A x 1\n16.05 B y 2");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].amount(), 2);
        assert!(stop.is_none());
    }

    #[test]
    fn test_stops_at_malformed_line() {
        let input = "15.05 A x 1\ngarbage\n16.05 B y 2\n";
        let (records, stop) = read_all(input.as_bytes());
        assert_eq!(records.len(), 1);
        assert_eq!(
            stop,
            Some(ParseStop {
                line: 2,
                reason: StopReason::WrongFieldCount { found: 1 },
            })
        );
    }

    #[test]
    fn test_stops_at_bad_amount() {
        let (records, stop) = read_all(b"15.05 A x 1\n16.05 B y two\n");
        assert_eq!(records.len(), 1);
        assert!(matches!(
            stop.unwrap().reason,
            StopReason::InvalidAmount { .. }
        ));
    }

    #[test]
    fn test_skips_blank_lines() {
        let (records, stop) = read_all(b"\n15.05 A x 1\n   \n\r\n16.05 B y 2\n\n");
        assert_eq!(records.len(), 2);
        assert!(stop.is_none());
    }

    #[test]
    fn test_crlf_input() {
        let (records, _) = read_all(b"15.05 A x 1\r\n16.05 B y 2\r\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].subcategory(), b"x");
    }

    #[test]
    fn test_non_utf8_line_is_a_record() {
        let (records, stop) = read_all(b"15.05 A x 1\n\xff\xfe B y 3\n16.05 B y 2\n");
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].date(), b"\xff\xfe");
        assert!(stop.is_none());
    }

    #[test]
    fn test_fused_after_stop() {
        let mut reader = RecordReader::new(Cursor::new(b"bad\n15.05 A x 1\n".as_slice()));
        assert!(reader.next().is_none());
        assert!(reader.next().is_none());
        assert_eq!(reader.records_read(), 0);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device gone"))
        }
    }

    #[test]
    fn test_read_error_is_surfaced() {
        let mut reader = RecordReader::new(io::BufReader::new(FailingReader));
        assert!(matches!(reader.next(), Some(Err(PipelineError::Read(_)))));
        assert!(reader.next().is_none());
    }
}
