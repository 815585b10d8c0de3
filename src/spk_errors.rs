use std::fmt;

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::daf::DafError;

/// Which bounded container ran out of room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityKind {
    CoverageIntervals,
    ObjectIds,
    OutputBuffer,
}

impl fmt::Display for CapacityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CapacityKind::CoverageIntervals => "coverage window",
            CapacityKind::ObjectIds => "object id set",
            CapacityKind::OutputBuffer => "output buffer",
        };
        write!(f, "{s}")
    }
}

#[derive(Error, Debug)]
pub enum SpkError {
    #[error("SPK file not found at: {0}")]
    FileNotFound(Utf8PathBuf),

    #[error("Malformed SPK file {path}: {source}")]
    MalformedFile {
        path: Utf8PathBuf,
        #[source]
        source: DafError,
    },

    #[error("Capacity exceeded for the {kind}: {required} entries needed, room for {capacity}")]
    CapacityExceeded {
        kind: CapacityKind,
        required: usize,
        capacity: usize,
    },

    #[error("Ephemeris toolkit error: {0}")]
    ToolkitError(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to load kernel {path}: {reason}")]
    KernelLoadFailed { path: Utf8PathBuf, reason: String },

    #[error("Failed to unload kernel: {0}")]
    KernelUnloadFailed(Utf8PathBuf),

    #[error("Invalid Object ID: {0}")]
    InvalidObjectId(i32),

    #[error("Invalid Object Name: {0}")]
    InvalidObjectName(String),
}

impl PartialEq for SpkError {
    fn eq(&self, other: &Self) -> bool {
        use SpkError::*;
        match (self, other) {
            (FileNotFound(a), FileNotFound(b)) => a == b,
            (
                MalformedFile {
                    path: pa,
                    source: sa,
                },
                MalformedFile {
                    path: pb,
                    source: sb,
                },
            ) => pa == pb && sa == sb,
            (
                CapacityExceeded {
                    kind: ka,
                    required: ra,
                    capacity: ca,
                },
                CapacityExceeded {
                    kind: kb,
                    required: rb,
                    capacity: cb,
                },
            ) => ka == kb && ra == rb && ca == cb,
            (ToolkitError(a), ToolkitError(b)) => a == b,

            (IoError(a), IoError(b)) => a.kind() == b.kind(),

            (
                KernelLoadFailed {
                    path: pa,
                    reason: ra,
                },
                KernelLoadFailed {
                    path: pb,
                    reason: rb,
                },
            ) => pa == pb && ra == rb,
            (KernelUnloadFailed(a), KernelUnloadFailed(b)) => a == b,
            (InvalidObjectId(a), InvalidObjectId(b)) => a == b,
            (InvalidObjectName(a), InvalidObjectName(b)) => a == b,

            _ => false,
        }
    }
}
