//! Error type for pipeline runs.
//!
//! Only I/O failures are errors. A malformed input line is not: it ends the
//! record stream and is reported through [`crate::reader::ParseStop`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the expense pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot open input file '{}': {source}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading input: {0}")]
    Read(#[source] io::Error),

    #[error("cannot create output file '{}': {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Write(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_input_message_names_path() {
        let err = PipelineError::OpenInput {
            path: PathBuf::from("missing/in.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing/in.txt"), "Got: {msg}");
        assert!(msg.contains("no such file"), "Got: {msg}");
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;
        let err = PipelineError::Write(io::Error::other("disk full"));
        assert_eq!(err.source().unwrap().to_string(), "disk full");
    }
}
