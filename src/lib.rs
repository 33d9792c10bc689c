//! # expense-pipe
//!
//! Filter a flat file of dated expenses down to one category and list the
//! survivors ordered by sub-category.
//!
//! ## Overview
//!
//! Each input line is one record with four whitespace-separated fields:
//! - **Date**: a `dd.mm` token, not validated
//! - **Category**: top-level expense article, e.g. `Продукты`
//! - **Sub-category**: finer section, e.g. `Молоко`
//! - **Amount**: integer currency units
//!
//! Processing is a single forward pass: read until end of input or the first
//! malformed line, keep one category, stable-sort by sub-category, then write
//! `date subcategory amount` lines.
//!
//! ## Example
//!
//! ```
//! use expense_pipe::execute_text;
//!
//! let input = "\
//! 15.05 Продукты Черный_хлеб 25
//! 15.05 Транспорт Автобус 30
//! 16.05 Продукты Молоко 45
//! ";
//!
//! let (output, input_count, output_count) = execute_text(input, "Продукты").unwrap();
//!
//! assert_eq!(input_count, 3);
//! assert_eq!(output_count, 2);
//! assert_eq!(output, "16.05 Молоко 45\n15.05 Черный_хлеб 25\n");
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod pipeline;
pub mod reader;
pub mod record;

pub use config::{DEFAULT_CATEGORY, DEFAULT_INPUT, DEFAULT_OUTPUT, OutputTarget, PipelineConfig};
pub use error::{PipelineError, Result};
pub use executor::{RunSummary, execute, execute_text};
pub use logging::init_logging;
pub use pipeline::{load_and_filter, load_and_filter_from, sort_by_subcategory, write_records};
pub use reader::{ParseStop, RecordReader};
pub use record::{ExpenseRecord, FIELD_COUNT, StopReason};
