//! Expense record type.
//!
//! An input line carries four whitespace-separated fields:
//!
//! ```text
//! <date> <category> <subcategory> <amount>
//! 15.05  Продукты   Черный_хлеб   25
//! ```
//!
//! Output lines drop the category: `<date> <subcategory> <amount>`.
//!
//! Text fields are kept as raw bytes. Matching, ordering and output all work
//! on those bytes, so input in any single-byte or UTF-8 encoding passes
//! through unchanged.

use std::fmt;
use std::io::{self, Write};

/// Number of whitespace-separated fields in an input line.
pub const FIELD_COUNT: usize = 4;

/// Why a line could not be parsed into an [`ExpenseRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The line did not split into exactly four tokens.
    WrongFieldCount { found: usize },
    /// The fourth token is not an integer. Lossily decoded for display.
    InvalidAmount { token: String },
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::WrongFieldCount { found } => {
                write!(f, "expected {FIELD_COUNT} fields, found {found}")
            }
            StopReason::InvalidAmount { token } => write!(f, "invalid amount '{token}'"),
        }
    }
}

/// Field separators: space, `\t`, `\n`, `\v`, `\f`, `\r`.
fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Split a raw line into its non-empty whitespace-separated tokens.
pub fn tokens(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(|&b| is_separator(b)).filter(|t| !t.is_empty())
}

fn parse_amount(token: &[u8]) -> Option<i64> {
    std::str::from_utf8(token).ok()?.parse().ok()
}

/// One dated expense. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    date: Vec<u8>,
    category: Vec<u8>,
    subcategory: Vec<u8>,
    amount: i64,
}

impl ExpenseRecord {
    pub fn new(
        date: impl Into<Vec<u8>>,
        category: impl Into<Vec<u8>>,
        subcategory: impl Into<Vec<u8>>,
        amount: i64,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            subcategory: subcategory.into(),
            amount,
        }
    }

    /// Parse a single input line.
    ///
    /// Tabs, repeated spaces and a trailing `\r` are all accepted. The
    /// amount may carry a sign.
    pub fn parse_line(line: &[u8]) -> Result<Self, StopReason> {
        let fields: Vec<&[u8]> = tokens(line).collect();
        let [date, category, subcategory, amount] = fields[..] else {
            return Err(StopReason::WrongFieldCount {
                found: fields.len(),
            });
        };

        let amount = parse_amount(amount).ok_or_else(|| StopReason::InvalidAmount {
            token: String::from_utf8_lossy(amount).into_owned(),
        })?;

        Ok(Self::new(date, category, subcategory, amount))
    }

    pub fn date(&self) -> &[u8] {
        &self.date
    }

    pub fn category(&self) -> &[u8] {
        &self.category
    }

    pub fn subcategory(&self) -> &[u8] {
        &self.subcategory
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// True if the category is byte-for-byte equal to `target`.
    pub fn is_in_category(&self, target: &[u8]) -> bool {
        self.category == target
    }

    /// Write `date subcategory amount` and a newline. The category is
    /// omitted; text fields are written back byte for byte.
    pub fn write_output_line<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_all(&self.date)?;
        sink.write_all(b" ")?;
        sink.write_all(&self.subcategory)?;
        writeln!(sink, " {}", self.amount)
    }
}
