//! Synthetic SPK files for tests and benchmarks.
//!
//! Only the file record and the summary/name record pairs are written; the
//! segment addresses point nowhere. This module depends on `std` alone so the
//! integration tests and benchmarks can include it with `#[path]`.
#![allow(dead_code)]

use std::{fs, io, path::Path};

const RECORD_BYTES: usize = 1024;
const SUMMARY_WORDS: usize = 5;
const SUMMARIES_PER_RECORD: usize = (RECORD_BYTES / 8 - 3) / SUMMARY_WORDS;
const FTP_STRING: &[u8; 28] = b"FTPSTR:\r:\n:\r\n:\r\0:\x81:\x10\xce:ENDFTP";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureEndian {
    Little,
    Big,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSegment {
    pub target: i32,
    pub center: i32,
    pub start: f64,
    pub end: f64,
}

/// Builder of an in-memory SPK file made of descriptors only.
#[derive(Debug, Clone)]
pub struct SpkFixture {
    endian: FixtureEndian,
    idword: String,
    nd: i32,
    ni: i32,
    segments: Vec<FixtureSegment>,
}

impl Default for SpkFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl SpkFixture {
    pub fn new() -> Self {
        SpkFixture {
            endian: FixtureEndian::Little,
            idword: "DAF/SPK".to_string(),
            nd: 2,
            ni: 6,
            segments: Vec::new(),
        }
    }

    pub fn endian(mut self, endian: FixtureEndian) -> Self {
        self.endian = endian;
        self
    }

    pub fn with_idword(mut self, idword: &str) -> Self {
        self.idword = idword.to_string();
        self
    }

    pub fn with_layout(mut self, nd: i32, ni: i32) -> Self {
        self.nd = nd;
        self.ni = ni;
        self
    }

    /// Segment of `target` relative to the solar system barycenter.
    pub fn with_segment(self, target: i32, start: f64, end: f64) -> Self {
        self.with_centered_segment(target, 0, start, end)
    }

    pub fn with_centered_segment(mut self, target: i32, center: i32, start: f64, end: f64) -> Self {
        self.segments.push(FixtureSegment {
            target,
            center,
            start,
            end,
        });
        self
    }

    /// Number of summary records the file will hold.
    pub fn summary_records(&self) -> usize {
        self.segments.len().div_ceil(SUMMARIES_PER_RECORD).max(1)
    }

    /// Record number (1-based) of the `k`-th summary record.
    pub fn summary_record_number(k: usize) -> usize {
        2 + 2 * k
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let n_records = self.summary_records();
        let total_records = 1 + 2 * n_records;
        let mut bytes = vec![0u8; total_records * RECORD_BYTES];

        let last_summary = Self::summary_record_number(n_records - 1);
        let free = (total_records * RECORD_BYTES / 8 + 1) as i32;
        self.write_file_record(&mut bytes[..RECORD_BYTES], 2, last_summary as i32, free);

        let chunks: Vec<&[FixtureSegment]> = if self.segments.is_empty() {
            vec![self.segments.as_slice()]
        } else {
            self.segments.chunks(SUMMARIES_PER_RECORD).collect()
        };

        for (k, chunk) in chunks.iter().enumerate() {
            let record = Self::summary_record_number(k);
            let next = if k + 1 < n_records {
                Self::summary_record_number(k + 1)
            } else {
                0
            };
            let prev = if k == 0 {
                0
            } else {
                Self::summary_record_number(k - 1)
            };
            let offset = (record - 1) * RECORD_BYTES;
            self.write_summary_record(
                &mut bytes[offset..offset + RECORD_BYTES],
                next as f64,
                prev as f64,
                chunk,
            );
            let name_offset = record * RECORD_BYTES;
            bytes[name_offset..name_offset + RECORD_BYTES].fill(b' ');
        }

        bytes
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.to_bytes())
    }

    fn i32_bytes(&self, value: i32) -> [u8; 4] {
        match self.endian {
            FixtureEndian::Little => value.to_le_bytes(),
            FixtureEndian::Big => value.to_be_bytes(),
        }
    }

    fn f64_bytes(&self, value: f64) -> [u8; 8] {
        match self.endian {
            FixtureEndian::Little => value.to_le_bytes(),
            FixtureEndian::Big => value.to_be_bytes(),
        }
    }

    fn write_file_record(&self, record: &mut [u8], fward: i32, bward: i32, free: i32) {
        let mut idword = [b' '; 8];
        idword[..self.idword.len()].copy_from_slice(self.idword.as_bytes());
        record[0..8].copy_from_slice(&idword);
        record[8..12].copy_from_slice(&self.i32_bytes(self.nd));
        record[12..16].copy_from_slice(&self.i32_bytes(self.ni));

        let mut ifname = [b' '; 60];
        let name = b"SPK-UTILS FIXTURE";
        ifname[..name.len()].copy_from_slice(name);
        record[16..76].copy_from_slice(&ifname);

        record[76..80].copy_from_slice(&self.i32_bytes(fward));
        record[80..84].copy_from_slice(&self.i32_bytes(bward));
        record[84..88].copy_from_slice(&self.i32_bytes(free));
        let locfmt = match self.endian {
            FixtureEndian::Little => b"LTL-IEEE",
            FixtureEndian::Big => b"BIG-IEEE",
        };
        record[88..96].copy_from_slice(locfmt);
        record[699..727].copy_from_slice(FTP_STRING);
    }

    fn write_summary_record(
        &self,
        record: &mut [u8],
        next: f64,
        prev: f64,
        segments: &[FixtureSegment],
    ) {
        record[0..8].copy_from_slice(&self.f64_bytes(next));
        record[8..16].copy_from_slice(&self.f64_bytes(prev));
        record[16..24].copy_from_slice(&self.f64_bytes(segments.len() as f64));

        for (i, segment) in segments.iter().enumerate() {
            let start = 24 + i * SUMMARY_WORDS * 8;
            record[start..start + 8].copy_from_slice(&self.f64_bytes(segment.start));
            record[start + 8..start + 16].copy_from_slice(&self.f64_bytes(segment.end));
            let integers = [segment.target, segment.center, 1, 2, 1025, 1025];
            for (j, value) in integers.iter().enumerate() {
                let at = start + 16 + j * 4;
                record[at..at + 4].copy_from_slice(&self.i32_bytes(*value));
            }
        }
    }
}

/// Patch an `f64` control word of summary record `record` (1-based).
pub fn patch_control_word(bytes: &mut [u8], endian: FixtureEndian, record: usize, word: usize, value: f64) {
    let at = (record - 1) * RECORD_BYTES + word * 8;
    let raw = match endian {
        FixtureEndian::Little => value.to_le_bytes(),
        FixtureEndian::Big => value.to_be_bytes(),
    };
    bytes[at..at + 8].copy_from_slice(&raw);
}
