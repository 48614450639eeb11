//! Directional splitting of a trace by its endpoint address pair

use crate::config::Endpoints;
use crate::trace::{Trace, TraceRecord};

/// Communication direction on the link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Device → controller: the status frame stream
    FromDevice,
    /// Controller → device: the command frame stream
    ToDevice,
}

impl Direction {
    /// Human-readable direction name
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::FromDevice => "status (device → controller)",
            Direction::ToDevice => "command (controller → device)",
        }
    }
}

/// A trace filtered down to one communication direction.
///
/// Derived and read-only; borrows nothing from the source trace so it can
/// outlive the filtering pass on its own.
#[derive(Debug, Clone)]
pub struct DirectionalTrace {
    /// Which direction this sub-trace holds
    pub direction: Direction,

    /// The matching records, in capture order
    pub records: Vec<TraceRecord>,
}

impl DirectionalTrace {
    /// Number of records in this direction
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records matched this direction
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The Time column of this direction, in capture order
    pub fn times(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.time).collect()
    }
}

/// Whether a record travels in the given direction.
///
/// Both Source and Destination must match exactly; matching is plain string
/// equality against the configured addresses.
fn matches_direction(record: &TraceRecord, direction: Direction, endpoints: &Endpoints) -> bool {
    match direction {
        Direction::FromDevice => {
            record.source == endpoints.device && record.destination == endpoints.controller
        }
        Direction::ToDevice => {
            record.source == endpoints.controller && record.destination == endpoints.device
        }
    }
}

/// Partition a trace into its status and command streams.
///
/// Returns `(status, command)` where status is the device → controller
/// stream and command the controller → device stream. Records matching
/// neither address pair are dropped.
pub fn split_directions(trace: &Trace, endpoints: &Endpoints) -> (DirectionalTrace, DirectionalTrace) {
    let mut status = Vec::new();
    let mut command = Vec::new();
    let mut unmatched = 0usize;

    for record in &trace.records {
        if matches_direction(record, Direction::FromDevice, endpoints) {
            status.push(record.clone());
        } else if matches_direction(record, Direction::ToDevice, endpoints) {
            command.push(record.clone());
        } else {
            unmatched += 1;
        }
    }

    if unmatched > 0 {
        log::debug!(
            "{}: dropped {} records matching neither direction",
            trace.name,
            unmatched
        );
    }

    (
        DirectionalTrace {
            direction: Direction::FromDevice,
            records: status,
        },
        DirectionalTrace {
            direction: Direction::ToDevice,
            records: command,
        },
    )
}
