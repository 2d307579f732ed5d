use std::io::{Read, Write};

use phage_core::model::{BacteriumId, PhageId, ResultRecord};
use serde::{Deserialize, Serialize};

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Row shape of the prediction export. Unknown columns are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CsvRow {
    bacterium: String,
    phage: String,
    key_gene_output: f64,
    #[serde(default)]
    wgs_output: Option<f64>,
    #[serde(default, rename = "Bacterium name", alias = "bacterium_name")]
    bacterium_name: Option<String>,
    #[serde(default, rename = "Phage Name", alias = "phage_name")]
    phage_name: Option<String>,
}

impl CsvRow {
    pub(crate) fn from_record(record: &ResultRecord) -> Self {
        Self {
            bacterium: record.bacterium().as_str().to_owned(),
            phage: record.phage().as_str().to_owned(),
            key_gene_output: record.key_gene_output(),
            wgs_output: record.wgs_output(),
            bacterium_name: record.bacterium_name().map(str::to_owned),
            phage_name: Some(record.phage_display_name().to_owned()),
        }
    }

    fn into_record(self, line: u64) -> Result<ResultRecord, StorageError> {
        let invalid = |source| StorageError::InvalidRecord { line, source };
        Ok(ResultRecord::new(
            BacteriumId::new(self.bacterium),
            PhageId::new(self.phage),
            self.key_gene_output,
        )
        .map_err(invalid)?
        .with_wgs_output(self.wgs_output)
        .map_err(invalid)?
        .with_names(self.bacterium_name, self.phage_name))
    }
}

/// Parse a headered CSV stream into records, preserving row order.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed CSV and
/// `StorageError::InvalidRecord` for rows that fail validation.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<ResultRecord>, StorageError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row = row.map_err(ser)?;
        // Line 1 is the header.
        let line = u64::try_from(index).unwrap_or(u64::MAX).saturating_add(2);
        records.push(row.into_record(line)?);
    }
    Ok(records)
}

/// Write records as a headered CSV stream in the same shape `read_records` accepts.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if a row cannot be written.
pub fn write_records<W: Write>(writer: W, records: &[ResultRecord]) -> Result<(), StorageError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(CsvRow::from_record(record)).map_err(ser)?;
    }
    wtr.flush().map_err(ser)?;
    Ok(())
}
