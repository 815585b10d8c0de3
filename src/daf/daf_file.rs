//! Descriptor-level loader for NAIF SPK kernels.
//!
//! # What this module does
//! 1. Reads the **file record** to discover the byte order and the pointer to
//!    the first summary record.
//! 2. Walks the doubly-linked list of **summary records** (`NEXT` pointers)
//!    until the list ends.
//! 3. Decodes every **segment descriptor** found on the way.
//!
//! Segment data is never read: the descriptors alone tell which bodies a file
//! covers and over which time spans.
//!
//! # Units & time scales
//! * Times are **ET/TDB seconds from J2000** (consistent with SPK).

use std::{
    collections::HashSet,
    fs::File,
    io::{self, BufReader, Read, Seek, SeekFrom},
};

use camino::Utf8Path;
use log::{debug, trace};

use super::{
    daf_header::DafHeader,
    summary_record::{SpkSegment, SummaryControl},
    DafError,
};
use crate::constants::{NaifId, DAF_RECORD_BYTES, DAF_RECORD_WORDS, SUMMARY_CONTROL_WORDS};
use crate::spk_errors::SpkError;

/// File record and segment descriptors of one SPK kernel, in file order.
///
/// See also
/// ------------
/// * [`DafFile::open`] – Build this structure from a file on disk.
/// * [`DafFile::from_reader`] – Same from any seekable byte source.
#[derive(Debug, Clone, PartialEq)]
pub struct DafFile {
    header: DafHeader,
    segments: Vec<SpkSegment>,
}

impl DafFile {
    /// Open an SPK kernel and read all of its segment descriptors.
    ///
    /// Arguments
    /// -----------------
    /// * `path`: Filesystem location of the SPK kernel.
    ///
    /// Return
    /// ----------
    /// * The decoded [`DafFile`], or
    ///   [`SpkError::FileNotFound`] when the path does not exist,
    ///   [`SpkError::MalformedFile`] when the content is not a readable SPK,
    ///   [`SpkError::IoError`] for any other I/O failure.
    pub fn open(path: &Utf8Path) -> Result<Self, SpkError> {
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => SpkError::FileNotFound(path.to_path_buf()),
            _ => SpkError::IoError(err),
        })?;
        let mut reader = BufReader::new(file);

        let daf = Self::from_reader(&mut reader).map_err(|err| match err {
            DafError::Io(io_err) => SpkError::IoError(io_err),
            source => SpkError::MalformedFile {
                path: path.to_path_buf(),
                source,
            },
        })?;

        debug!(
            "Read {} segment descriptor(s) from {path}\n{}",
            daf.segments.len(),
            daf.header
        );
        Ok(daf)
    }

    /// Decode an SPK kernel from a seekable byte source.
    ///
    /// Arguments
    /// -----------------
    /// * `reader`: Any [`Read`] + [`Seek`] source positioned anywhere; records
    ///   are located by absolute offsets.
    ///
    /// Return
    /// ----------
    /// * The decoded [`DafFile`] or the first structural [`DafError`] met.
    pub fn from_reader<R: Read + Seek>(reader: &mut R) -> Result<Self, DafError> {
        let file_record = read_record(reader, 1)?;
        let header = DafHeader::from_record(&file_record)?;
        let endianness = header.endianness;

        // Summary size in DP-words: ND + ceil(NI/2)
        let summary_words = header.nd as usize + (header.ni as usize).div_ceil(2);
        let max_summaries = (DAF_RECORD_WORDS - SUMMARY_CONTROL_WORDS) / summary_words;

        let mut segments = Vec::new();
        let mut visited = HashSet::new();
        let mut next = f64::from(header.fward);

        while next != 0.0 {
            let record_number = record_pointer(next)?;
            if !visited.insert(record_number) {
                return Err(DafError::SummaryLoop(record_number));
            }

            let record = read_record(reader, record_number)?;
            let (summaries, control) = SummaryControl::parse(&record, endianness)?;

            let nsum = control.nsum as i64;
            if nsum < 0 || nsum as usize > max_summaries {
                return Err(DafError::SummaryCount {
                    record: record_number,
                    nsum,
                    max: max_summaries,
                });
            }

            for i in 0..nsum as usize {
                let start = i * summary_words * 8;
                let (_, segment) = SpkSegment::parse(&summaries[start..], endianness)?;
                let (first, last) = (segment.start_epoch, segment.end_epoch);
                if first.is_nan() || last.is_nan() || first > last {
                    return Err(DafError::InvalidSegmentBounds {
                        target: segment.target,
                        start: segment.start_epoch,
                        end: segment.end_epoch,
                    });
                }
                trace!("Summary record {record_number}, segment {i}:\n{segment}");
                segments.push(segment);
            }

            next = control.next;
        }

        Ok(DafFile { header, segments })
    }

    pub fn header(&self) -> &DafHeader {
        &self.header
    }

    /// All segment descriptors, in file order.
    pub fn segments(&self) -> &[SpkSegment] {
        &self.segments
    }

    /// Segments whose target is `body`.
    pub fn segments_for(&self, body: NaifId) -> impl Iterator<Item = &SpkSegment> {
        self.segments
            .iter()
            .filter(move |segment| segment.target == body)
    }

    /// Target of every segment, in file order and with repetitions.
    pub fn targets(&self) -> impl Iterator<Item = NaifId> + '_ {
        self.segments.iter().map(|segment| segment.target)
    }
}

/// Validate a `FWARD`/`NEXT` word as the number of a summary record.
///
/// DAF record numbers are 32-bit integers, stored as doubles in the control
/// words; record 1 is the file record and never a summary record.
fn record_pointer(word: f64) -> Result<usize, DafError> {
    if word.fract() == 0.0 && (2.0..=f64::from(i32::MAX)).contains(&word) {
        Ok(word as usize)
    } else {
        Err(DafError::InvalidRecordPointer(word))
    }
}

/// Read the 1-based DAF record `record_number`.
fn read_record<R: Read + Seek>(
    reader: &mut R,
    record_number: usize,
) -> Result<[u8; DAF_RECORD_BYTES], DafError> {
    let offset = record_number
        .checked_sub(1)
        .and_then(|index| index.checked_mul(DAF_RECORD_BYTES))
        .ok_or(DafError::InvalidRecordPointer(record_number as f64))?;
    reader.seek(SeekFrom::Start(offset as u64))?;

    let mut buffer = [0u8; DAF_RECORD_BYTES];
    reader.read_exact(&mut buffer).map_err(|err| match err.kind() {
        io::ErrorKind::UnexpectedEof => DafError::Truncated {
            record: record_number,
        },
        _ => DafError::Io(err),
    })?;
    Ok(buffer)
}
