//! Loading of captured UDP dumps from CSV files

pub mod filter;

pub use filter::{split_directions, Direction, DirectionalTrace};

use crate::error::{AppError, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// One row of a capture: the packet timestamp and its address pair.
///
/// Captures exported from Wireshark carry more columns (No., Protocol,
/// Length, Info); anything beyond these three is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TraceRecord {
    /// Packet timestamp relative to the start of the capture, in seconds
    #[serde(rename = "Time")]
    pub time: f64,

    /// Sender address of the packet
    #[serde(rename = "Source")]
    pub source: String,

    /// Receiver address of the packet
    #[serde(rename = "Destination")]
    pub destination: String,
}

/// One loaded input file: its full ordered row set, paired with a name
/// derived from the filename (stem up to the first dot).
#[derive(Debug, Clone)]
pub struct Trace {
    /// Name of the trace, used as figure title and output filename
    pub name: String,

    /// All records of the capture, in file order
    pub records: Vec<TraceRecord>,
}

impl Trace {
    /// Number of records in the trace
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the trace holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Derive a trace name from a filename: everything up to the first dot.
fn trace_name(file_name: &str) -> String {
    file_name
        .split('.')
        .next()
        .unwrap_or(file_name)
        .to_string()
}

/// Parse a single CSV dump into a `Trace`.
///
/// The file must have a header row naming at least Time, Source and
/// Destination. A malformed row is a parse error that aborts the run.
pub fn load_trace(path: &Path) -> Result<Trace> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AppError::io(format!("Unreadable file name: {}", path.display())))?;

    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();

    for record in reader.deserialize() {
        let record: TraceRecord = record.map_err(|e| {
            AppError::parse(format!("Malformed record in {}: {}", path.display(), e))
        })?;
        records.push(record);
    }

    log::debug!("loaded {} with {} records", file_name, records.len());

    Ok(Trace {
        name: trace_name(file_name),
        records,
    })
}

/// Load every CSV dump in a directory.
///
/// Matches entries whose name contains the `.csv` marker, in sorted order
/// for deterministic output. Zero matching files is a data error.
pub fn load_traces(data_dir: &Path) -> Result<Vec<Trace>> {
    let entries = std::fs::read_dir(data_dir)
        .map_err(|e| AppError::io(format!("Failed to read {}: {}", data_dir.display(), e)))?;

    let mut paths: Vec<_> = entries
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| AppError::io(format!("Failed to read {}: {}", data_dir.display(), e)))?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.contains(".csv"))
                .unwrap_or(false)
        })
        .collect();

    paths.sort();

    if paths.is_empty() {
        return Err(AppError::data(format!(
            "No .csv files were found in {}",
            data_dir.display()
        )));
    }

    paths.iter().map(|path| load_trace(path)).collect()
}
