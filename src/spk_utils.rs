//! # Coverage and object-id queries
//!
//! The two public operations of the crate:
//!
//! * [`is_epoch_covered`] – does a file hold ephemeris data for a body at a
//!   given epoch?
//! * [`object_ids`] / [`object_ids_into`] – which bodies does a file hold?
//!
//! Each function exists in a `_with` flavour taking any [`EphemerisToolkit`];
//! the plain flavour uses [`DafToolkit`] with the default capacities
//! (100 coverage intervals, 1000 identifiers).
//!
//! Every call opens the file, reads what it needs and closes it again. A
//! failure is returned to the caller of the call that produced it and never
//! affects later calls.
//!
//! ## Example
//!
//! ```rust,no_run
//! use spk_utils::{is_epoch_covered, object_ids};
//!
//! let covered = is_epoch_covered("de440s.bsp", 399, 0.0)?;
//! let ids = object_ids("de440s.bsp")?;
//! println!("covered: {covered}, bodies: {ids:?}");
//! # Ok::<(), spk_utils::spk_errors::SpkError>(())
//! ```

use camino::Utf8Path;
use hifitime::Epoch;

use crate::constants::{EphemerisTime, NaifId};
use crate::spk_errors::{CapacityKind, SpkError};
use crate::toolkit::{DafToolkit, EphemerisToolkit};
use crate::window::CoverageWindow;

/// Tell whether `file_path` holds ephemeris data for `body_id` at `epoch`.
///
/// Arguments
/// -----------------
/// * `file_path`: Path of an SPK kernel.
/// * `body_id`: NAIF code of the body.
/// * `epoch`: Ephemeris time, TDB seconds past J2000.
///
/// Return
/// ----------
/// * `Ok(true)` if `epoch` lies within a coverage interval of `body_id`,
///   both interval ends included.
/// * `Ok(false)` otherwise, in particular when `body_id` is absent from the file.
/// * An [`SpkError`] if the file is missing or unreadable, or if the coverage
///   of the body does not fit in 100 intervals.
///
/// See also
/// ------------
/// * [`is_epoch_covered_with`] – Same with a caller-chosen toolkit.
/// * [`is_time_covered`] – Same with a [`hifitime::Epoch`].
pub fn is_epoch_covered(
    file_path: impl AsRef<Utf8Path>,
    body_id: NaifId,
    epoch: EphemerisTime,
) -> Result<bool, SpkError> {
    is_epoch_covered_with(&DafToolkit::default(), file_path, body_id, epoch)
}

/// [`is_epoch_covered`] answered by `toolkit` instead of the default [`DafToolkit`].
pub fn is_epoch_covered_with<T: EphemerisToolkit + ?Sized>(
    toolkit: &T,
    file_path: impl AsRef<Utf8Path>,
    body_id: NaifId,
    epoch: EphemerisTime,
) -> Result<bool, SpkError> {
    let cover = toolkit.coverage_windows(file_path.as_ref(), body_id)?;
    Ok(cover.contains(epoch))
}

/// [`is_epoch_covered`] for a [`hifitime::Epoch`], converted to ET seconds.
pub fn is_time_covered(
    file_path: impl AsRef<Utf8Path>,
    body_id: NaifId,
    epoch: Epoch,
) -> Result<bool, SpkError> {
    is_epoch_covered(file_path, body_id, epoch.to_et_seconds())
}

/// Coverage window of `body_id` in `file_path`.
pub fn coverage(file_path: impl AsRef<Utf8Path>, body_id: NaifId) -> Result<CoverageWindow, SpkError> {
    DafToolkit::default().coverage_windows(file_path.as_ref(), body_id)
}

/// List the bodies present in `file_path`, in ascending order.
///
/// Arguments
/// -----------------
/// * `file_path`: Path of an SPK kernel.
///
/// Return
/// ----------
/// * The distinct segment targets of the file.
/// * An [`SpkError`] if the file is missing or unreadable, or if it holds more
///   than 1000 distinct bodies.
///
/// See also
/// ------------
/// * [`object_ids_into`] – Same, written into a caller buffer.
pub fn object_ids(file_path: impl AsRef<Utf8Path>) -> Result<Vec<NaifId>, SpkError> {
    object_ids_with(&DafToolkit::default(), file_path)
}

/// [`object_ids`] read through `toolkit`, with its own capacities.
pub fn object_ids_with<T: EphemerisToolkit + ?Sized>(
    toolkit: &T,
    file_path: impl AsRef<Utf8Path>,
) -> Result<Vec<NaifId>, SpkError> {
    let idset = toolkit.object_ids(file_path.as_ref())?;
    let count = idset.cardinality();
    Ok((0..count).filter_map(|i| idset.element_at(i)).collect())
}

/// Write the bodies present in `file_path` into `out[..count]` and return `count`.
///
/// Elements of `out` past `count` are left untouched.
///
/// Return
/// ----------
/// * The number of identifiers written.
/// * [`SpkError::CapacityExceeded`] if `out` is shorter than the number of
///   identifiers; `out` is then not modified at all.
/// * Any error of [`object_ids`].
pub fn object_ids_into(
    file_path: impl AsRef<Utf8Path>,
    out: &mut [NaifId],
) -> Result<usize, SpkError> {
    object_ids_into_with(&DafToolkit::default(), file_path, out)
}

/// [`object_ids_into`] read through `toolkit`.
pub fn object_ids_into_with<T: EphemerisToolkit + ?Sized>(
    toolkit: &T,
    file_path: impl AsRef<Utf8Path>,
    out: &mut [NaifId],
) -> Result<usize, SpkError> {
    let idset = toolkit.object_ids(file_path.as_ref())?;
    let count = idset.cardinality();
    if count > out.len() {
        return Err(SpkError::CapacityExceeded {
            kind: CapacityKind::OutputBuffer,
            required: count,
            capacity: out.len(),
        });
    }

    for (slot, id) in out.iter_mut().zip(idset.iter()) {
        *slot = id;
    }
    Ok(count)
}
