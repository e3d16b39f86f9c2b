//! CSV journal backend.
//!
//! Creates `journal.csv` in the configured output directory.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::debug;

use crate::writer::JournalWriter;
use crate::{JournalRow, OutputError, OutputResult};

/// File name of the journal inside the output directory.
pub const JOURNAL_FILE: &str = "journal.csv";

/// Writes one CSV line per tick.
pub struct CsvJournal {
    writer:   Writer<File>,
    path:     PathBuf,
    finished: bool,
}

impl CsvJournal {
    /// Create (or truncate) `journal.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let path = dir.join(JOURNAL_FILE);
        let mut writer = Writer::from_path(&path)?;
        writer.write_record(JournalRow::HEADER)?;
        debug!(path = %path.display(), "journal opened");
        Ok(Self { writer, path, finished: false })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl JournalWriter for CsvJournal {
    fn write_row(&mut self, row: &JournalRow) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        self.writer.write_record(row.fields())?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}
