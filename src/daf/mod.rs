//! Read-only access to the descriptor layer of NAIF DAF/SPK files.
//!
//! Only the file record and the linked list of summary records are decoded:
//! that is enough to know which bodies a kernel covers and over which time
//! spans. Segment data (Chebyshev coefficients, states, ...) is never read.
//!
//! # See also
//! ------------
//! * [`daf_file::DafFile`] – Entry point: opens a file and lists its segments.
//! * [`daf_header::DafHeader`] – The 1024-byte file record.
//! * [`summary_record::SpkSegment`] – One segment descriptor.

pub mod daf_file;
pub mod daf_header;
pub mod summary_record;

#[cfg(test)]
pub(crate) mod test_fixtures;

use nom::number::Endianness;
use thiserror::Error;

pub use daf_file::DafFile;
pub use daf_header::DafHeader;
pub use summary_record::SpkSegment;

/// Structural failure while decoding a DAF/SPK file.
#[derive(Error, Debug)]
pub enum DafError {
    #[error("Truncated file: record {record} is incomplete")]
    Truncated { record: usize },

    #[error("Unsupported binary file format: {0:?}")]
    UnsupportedFormat(String),

    #[error("Not an SPK kernel, file identification word is {0}")]
    NotAnSpk(String),

    #[error("Unexpected summary layout ND = {nd}, NI = {ni} (SPK expects ND = 2, NI = 6)")]
    SummaryLayout { nd: i32, ni: i32 },

    #[error("File damaged by an ASCII-mode transfer (FTP validation string mismatch)")]
    DamagedTransfer,

    #[error("Invalid summary record pointer: {0}")]
    InvalidRecordPointer(f64),

    #[error("Summary record list loops back to record {0}")]
    SummaryLoop(usize),

    #[error("Summary record {record} claims {nsum} summaries, at most {max} fit")]
    SummaryCount { record: usize, nsum: i64, max: usize },

    #[error("Segment for body {target} has invalid bounds [{start}, {end}]")]
    InvalidSegmentBounds { target: i32, start: f64, end: f64 },

    #[error("Error during the nom parsing: {0}")]
    NomParsingError(String),

    #[error("Unable to read the file: {0}")]
    Io(#[from] std::io::Error),
}

impl PartialEq for DafError {
    fn eq(&self, other: &Self) -> bool {
        use DafError::*;
        match (self, other) {
            (Truncated { record: a }, Truncated { record: b }) => a == b,
            (UnsupportedFormat(a), UnsupportedFormat(b)) => a == b,
            (NotAnSpk(a), NotAnSpk(b)) => a == b,
            (SummaryLayout { nd: na, ni: ia }, SummaryLayout { nd: nb, ni: ib }) => {
                na == nb && ia == ib
            }
            (DamagedTransfer, DamagedTransfer) => true,
            (InvalidRecordPointer(a), InvalidRecordPointer(b)) => a.to_bits() == b.to_bits(),
            (SummaryLoop(a), SummaryLoop(b)) => a == b,
            (
                SummaryCount {
                    record: ra,
                    nsum: na,
                    max: ma,
                },
                SummaryCount {
                    record: rb,
                    nsum: nb,
                    max: mb,
                },
            ) => ra == rb && na == nb && ma == mb,
            (
                InvalidSegmentBounds {
                    target: ta,
                    start: sa,
                    end: ea,
                },
                InvalidSegmentBounds {
                    target: tb,
                    start: sb,
                    end: eb,
                },
            ) => ta == tb && sa.to_bits() == sb.to_bits() && ea.to_bits() == eb.to_bits(),
            (NomParsingError(a), NomParsingError(b)) => a == b,
            (Io(a), Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}

impl<I: std::fmt::Debug> From<nom::Err<nom::error::Error<I>>> for DafError {
    fn from(err: nom::Err<nom::error::Error<I>>) -> Self {
        DafError::NomParsingError(format!("{err:?}"))
    }
}

/// Map the `LOCFMT` tag of the file record to the byte order of its numbers.
///
/// A blank tag is written by toolkits older than N0050, which only produced
/// files in the byte order of the machine that wrote them.
pub(crate) fn endianness_from_locfmt(locfmt: &str) -> Result<Endianness, DafError> {
    match locfmt {
        "LTL-IEEE" => Ok(Endianness::Little),
        "BIG-IEEE" => Ok(Endianness::Big),
        "" => Ok(Endianness::Native),
        other => Err(DafError::UnsupportedFormat(other.to_string())),
    }
}
