//! The `JournalWriter` trait implemented by journal backends.

use crate::{JournalRow, OutputResult};

/// A sink for journal rows.
pub trait JournalWriter {
    /// Append one row.
    fn write_row(&mut self, row: &JournalRow) -> OutputResult<()>;

    /// Flush and close the underlying handle.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Collects rows in memory.  Handy for tests and for panels that chart a
/// run after the fact.
#[derive(Debug, Default)]
pub struct MemoryJournal {
    pub rows: Vec<JournalRow>,
}

impl JournalWriter for MemoryJournal {
    fn write_row(&mut self, row: &JournalRow) -> OutputResult<()> {
        self.rows.push(*row);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}
