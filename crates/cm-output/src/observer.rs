//! `JournalObserver<W>`: bridges `SimObserver` to a `JournalWriter`.

use cm_core::SimDate;
use cm_sim::{SimError, SimObserver, SimResult, World};

use crate::{JournalRow, JournalWriter};

/// A [`SimObserver`] that writes one [`JournalRow`] per tick to any
/// [`JournalWriter`].
///
/// Register it last so each row reflects the whole day's fan-out.  A write
/// failure aborts the fan-out like any other subscriber error.
pub struct JournalObserver<W: JournalWriter> {
    writer:  W,
    written: u64,
}

impl<W: JournalWriter> JournalObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Rows written so far, including the opening row.
    #[inline]
    pub fn rows_written(&self) -> u64 {
        self.written
    }

    /// Unwrap the inner writer (e.g. to inspect rows after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn record(&mut self, world: &World) -> SimResult<()> {
        let row = JournalRow::capture(world);
        self.writer
            .write_row(&row)
            .map_err(|e| SimError::observer("journal", e))?;
        self.written += 1;
        Ok(())
    }
}

impl<W: JournalWriter> SimObserver for JournalObserver<W> {
    fn name(&self) -> &str {
        "journal"
    }

    /// The opening position, at tick 0.
    fn on_sim_start(&mut self, world: &World) -> SimResult<()> {
        self.record(world)
    }

    fn on_tick(&mut self, _date: SimDate, world: &World) -> SimResult<()> {
        self.record(world)
    }

    fn on_sim_end(&mut self, _world: &World) -> SimResult<()> {
        self.writer
            .finish()
            .map_err(|e| SimError::observer("journal", e))
    }
}
