//! CSV output of an [OutputTable].
//!
//! The layout is the one of a dataframe dumped with its index:
//! ```text
//! ,comment,created_at
//! 0,Il était une fois un roi et une reine,2023-10-12 09:30:00.123456
//! ```
use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDateTime;
use log::info;
use serde::{Serialize, Serializer};

use crate::error::Error;
use crate::types::OutputTable;

const HEADER: [&str; 3] = ["", "comment", "created_at"];
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

#[derive(Debug, Serialize)]
struct Row<'a> {
    index: usize,
    comment: &'a str,
    #[serde(serialize_with = "serialize_time")]
    created_at: NaiveDateTime,
}

fn serialize_time<S: Serializer>(time: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&time.format(TIME_FORMAT))
}

pub struct CsvWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl CsvWriter<File> {
    /// Create (or truncate) the file at `dst`.
    pub fn from_path(dst: &Path) -> Result<Self, Error> {
        info!("writing to {:?}", dst);
        let inner = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(dst)?;
        Ok(Self { inner })
    }
}

impl<W: Write> CsvWriter<W> {
    pub fn from_writer(w: W) -> Self {
        let inner = csv::WriterBuilder::new().has_headers(false).from_writer(w);
        Self { inner }
    }

    /// Write the header then every row of `table`.
    /// An empty table gives a header-only file.
    pub fn write_table(&mut self, table: &OutputTable) -> Result<(), Error> {
        self.inner.write_record(HEADER)?;
        for (index, record) in table.rows() {
            self.inner.serialize(Row {
                index,
                comment: record.sentence(),
                created_at: record.created_at(),
            })?;
        }
        self.inner.flush()?;
        Ok(())
    }

    /// Get back the underlying writer.
    pub fn into_inner(self) -> Result<W, Error> {
        self.inner
            .into_inner()
            .map_err(|e| Error::Custom(format!("could not flush csv writer: {}", e.error())))
    }
}
