//! Whole-run executor.
//!
//! Opens the input, runs load-and-filter, sorts, then opens the output and
//! writes. The output is only created once the input has been read, so a
//! missing input file never truncates an existing output.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};

use tracing::{debug, info, warn};

use crate::config::{OutputTarget, PipelineConfig};
use crate::error::{PipelineError, Result};
use crate::pipeline::{load_and_filter_from, sort_by_subcategory, write_records};
use crate::reader::{ParseStop, RecordReader};
use crate::record::ExpenseRecord;

/// Counts and stop position of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Well-formed records read before end of input or the parse stop.
    pub records_read: usize,
    pub records_written: usize,
    pub stop: Option<ParseStop>,
}

/// Read, filter and sort everything `reader` yields.
fn collect_sorted<R: io::BufRead>(
    reader: &mut RecordReader<R>,
    category: &[u8],
) -> Result<Vec<ExpenseRecord>> {
    let mut records = load_and_filter_from(reader, category)?;
    sort_by_subcategory(&mut records);
    Ok(records)
}

/// Run the pipeline described by `config`.
pub fn execute(config: &PipelineConfig) -> Result<RunSummary> {
    let input = File::open(&config.input).map_err(|source| PipelineError::OpenInput {
        path: config.input.clone(),
        source,
    })?;
    debug!(path = %config.input.display(), "opened input");

    let mut reader = RecordReader::new(BufReader::new(input));
    let records = collect_sorted(&mut reader, config.category.as_bytes())?;
    let stop = reader.stop().cloned();
    let records_read = reader.records_read();
    drop(reader);

    if let Some(stop) = &stop {
        warn!(line = stop.line, reason = %stop.reason, "input ended early");
    }

    match &config.output {
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent).map_err(|source| PipelineError::CreateOutput {
                    path: path.clone(),
                    source,
                })?;
            }
            let file = File::create(path).map_err(|source| PipelineError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            write_records(&records, BufWriter::new(file))?;
            debug!(path = %path.display(), "wrote output");
        }
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            write_records(&records, stdout.lock())?;
        }
    }

    let summary = RunSummary {
        records_read,
        records_written: records.len(),
        stop,
    };
    info!(
        read = summary.records_read,
        written = summary.records_written,
        category = %config.category,
        "run complete"
    );
    Ok(summary)
}

/// Run the pipeline over in-memory text.
///
/// Returns (output_text, input_count, output_count) on success.
pub fn execute_text(input_text: &str, category: &str) -> Result<(String, usize, usize)> {
    let mut reader = RecordReader::new(input_text.as_bytes());
    let records = collect_sorted(&mut reader, category.as_bytes())?;

    let mut output = Vec::new();
    write_records(&records, &mut output)?;
    let output = String::from_utf8(output)
        .map_err(|e| PipelineError::Write(io::Error::new(io::ErrorKind::InvalidData, e)))?;

    Ok((output, reader.records_read(), records.len()))
}
