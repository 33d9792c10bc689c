//! Record pipeline: filter by category, sort by sub-category, write.
//!
//! ```
//! use expense_pipe::{load_and_filter, sort_by_subcategory};
//!
//! let input = "\
//! 15.05 Продукты Черный_хлеб 25
//! 15.05 Транспорт Автобус 30
//! 16.05 Продукты Молоко 45
//! ";
//!
//! let mut records = load_and_filter(input.as_bytes(), "Продукты".as_bytes()).unwrap();
//! sort_by_subcategory(&mut records);
//!
//! assert_eq!(records[0].subcategory(), "Молоко".as_bytes());
//! assert_eq!(records[1].subcategory(), "Черный_хлеб".as_bytes());
//! ```

use std::io::{BufRead, Write};

use crate::error::{PipelineError, Result};
use crate::reader::RecordReader;
use crate::record::ExpenseRecord;

/// Read records from `source` up to the first malformed line, keeping those
/// in `category`. Matching records stay in file order.
pub fn load_and_filter<R: BufRead>(source: R, category: &[u8]) -> Result<Vec<ExpenseRecord>> {
    load_and_filter_from(&mut RecordReader::new(source), category)
}

/// Same as [`load_and_filter`] but over a caller-owned reader, so the
/// caller can inspect [`RecordReader::stop`] afterwards.
pub fn load_and_filter_from<R: BufRead>(
    reader: &mut RecordReader<R>,
    category: &[u8],
) -> Result<Vec<ExpenseRecord>> {
    let mut kept = Vec::new();
    for record in reader {
        let record = record?;
        if record.is_in_category(category) {
            kept.push(record);
        }
    }
    Ok(kept)
}

/// Sort in place by sub-category, byte-wise. Equal keys keep their order.
pub fn sort_by_subcategory(records: &mut [ExpenseRecord]) {
    records.sort_by(|a, b| a.subcategory().cmp(b.subcategory()));
}

/// Write one `date subcategory amount` line per record, then flush.
pub fn write_records<W: Write>(records: &[ExpenseRecord], mut sink: W) -> Result<()> {
    for record in records {
        record
            .write_output_line(&mut sink)
            .map_err(PipelineError::Write)?;
    }
    sink.flush().map_err(PipelineError::Write)
}
