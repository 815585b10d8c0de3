//! # Constants and type definitions for spk-utils
//!
//! This module centralizes the **fixed capacities**, the **DAF layout constants**, and the
//! **common type aliases** shared by the coverage and object-id queries.
//!
//! ## Overview
//!
//! - Default capacities of the coverage window and of the identifier set
//! - Byte layout of a DAF/SPK file (record size, summary geometry)
//! - Type aliases for body identifiers and ephemeris time

// -------------------------------------------------------------------------------------------------
// Capacities
// -------------------------------------------------------------------------------------------------

/// Default maximum number of disjoint intervals in a coverage window (200 scalar bounds)
pub const MAX_COVERAGE_INTERVALS: usize = 100;

/// Default maximum number of distinct body identifiers read from one file
pub const MAX_OBJECT_IDS: usize = 1000;

// -------------------------------------------------------------------------------------------------
// DAF / SPK layout
// -------------------------------------------------------------------------------------------------

/// Size of one DAF record in bytes
pub const DAF_RECORD_BYTES: usize = 1024;

/// Number of double precision words in one DAF record
pub const DAF_RECORD_WORDS: usize = DAF_RECORD_BYTES / 8;

/// Control words (NEXT, PREV, NSUM) at the head of each summary record
pub const SUMMARY_CONTROL_WORDS: usize = 3;

/// Number of double precision components in an SPK segment descriptor
pub const SPK_ND: i32 = 2;

/// Number of integer components in an SPK segment descriptor
pub const SPK_NI: i32 = 6;

/// File identification word of an SPK kernel
pub const SPK_IDWORD: &str = "DAF/SPK";

/// FTP validation string written by the NAIF toolkit in every binary DAF
pub const FTP_VALIDATION_STRING: &[u8; 28] = b"FTPSTR:\r:\n:\r\n:\r\0:\x81:\x10\xce:ENDFTP";

/// Byte offset of the FTP validation string inside the file record
pub const FTP_OFFSET: usize = 699;

/// Byte offset of the binary format tag (LOCFMT) inside the file record
pub const LOCFMT_OFFSET: usize = 88;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// NAIF integer code of a body (planet, barycenter, spacecraft, ...)
pub type NaifId = i32;

/// Ephemeris time, TDB seconds past J2000
pub type EphemerisTime = f64;
