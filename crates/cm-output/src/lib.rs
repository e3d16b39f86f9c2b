//! `cm-output`: the tick journal.
//!
//! | Writer           | Destination                      |
//! |------------------|----------------------------------|
//! | [`CsvJournal`]   | `journal.csv` in a directory     |
//! | [`MemoryJournal`]| a `Vec<JournalRow>`              |
//!
//! Both implement [`JournalWriter`] and are driven by [`JournalObserver`],
//! which implements `cm_sim::SimObserver`.  The journal is a run log; the
//! simulation never reads it back.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cm_output::{CsvJournal, JournalObserver};
//!
//! let journal = JournalObserver::new(CsvJournal::new(Path::new("./out"))?);
//! let mut sim = SimBuilder::new(config).observer(journal).build()?;
//! sim.run()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::{CsvJournal, JOURNAL_FILE};
pub use error::{OutputError, OutputResult};
pub use observer::JournalObserver;
pub use row::JournalRow;
pub use writer::{JournalWriter, MemoryJournal};
