//! # Ephemeris toolkit seam
//!
//! The coverage and object-id queries only need two file-level primitives
//! from an ephemeris toolkit; the remaining ones (window membership, set
//! cardinality, indexed access) are methods of [`CoverageWindow`] and
//! [`IdSet`].
//!
//! [`DafToolkit`] is the implementation shipped with the crate. It reads the
//! segment descriptors of the file on every call and keeps nothing between
//! calls.

use camino::Utf8Path;
use log::debug;

use crate::config::SpkConfig;
use crate::constants::NaifId;
use crate::daf::DafFile;
use crate::id_set::IdSet;
use crate::spk_errors::SpkError;
use crate::window::CoverageWindow;

pub trait EphemerisToolkit {
    /// Union of the time spans of every segment of `file` whose target is
    /// `body`, as a window of disjoint closed intervals.
    ///
    /// An unknown body yields an empty window, not an error.
    fn coverage_windows(&self, file: &Utf8Path, body: NaifId) -> Result<CoverageWindow, SpkError>;

    /// Every body appearing as a segment target in `file`.
    fn object_ids(&self, file: &Utf8Path) -> Result<IdSet, SpkError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DafToolkit {
    config: SpkConfig,
}

impl DafToolkit {
    pub fn new(config: SpkConfig) -> Self {
        DafToolkit { config }
    }

    pub fn config(&self) -> &SpkConfig {
        &self.config
    }

    /// Same as [`EphemerisToolkit::coverage_windows`] on an already decoded file.
    pub fn coverage_of(&self, daf: &DafFile, body: NaifId) -> Result<CoverageWindow, SpkError> {
        let mut window = CoverageWindow::with_capacity(self.config.max_coverage_intervals);
        for segment in daf.segments_for(body) {
            window.insert(segment.start_epoch, segment.end_epoch)?;
        }
        Ok(window)
    }

    /// Same as [`EphemerisToolkit::object_ids`] on an already decoded file.
    pub fn object_ids_of(&self, daf: &DafFile) -> Result<IdSet, SpkError> {
        let mut ids = IdSet::with_capacity(self.config.max_object_ids);
        for target in daf.targets() {
            ids.insert(target)?;
        }
        Ok(ids)
    }
}

impl EphemerisToolkit for DafToolkit {
    fn coverage_windows(&self, file: &Utf8Path, body: NaifId) -> Result<CoverageWindow, SpkError> {
        let daf = DafFile::open(file)?;
        let window = self.coverage_of(&daf, body)?;
        debug!(
            "Coverage of body {body} in {file}: {} interval(s)",
            window.cardinality()
        );
        Ok(window)
    }

    fn object_ids(&self, file: &Utf8Path) -> Result<IdSet, SpkError> {
        let daf = DafFile::open(file)?;
        let ids = self.object_ids_of(&daf)?;
        debug!("{} object id(s) in {file}", ids.cardinality());
        Ok(ids)
    }
}

impl<T: EphemerisToolkit + ?Sized> EphemerisToolkit for &T {
    fn coverage_windows(&self, file: &Utf8Path, body: NaifId) -> Result<CoverageWindow, SpkError> {
        (**self).coverage_windows(file, body)
    }

    fn object_ids(&self, file: &Utf8Path) -> Result<IdSet, SpkError> {
        (**self).object_ids(file)
    }
}

#[cfg(test)]
mod test_toolkit {
    use std::io::Cursor;

    use super::*;
    use crate::daf::test_fixtures::SpkFixture;
    use crate::spk_errors::CapacityKind;

    fn decode(fixture: SpkFixture) -> DafFile {
        DafFile::from_reader(&mut Cursor::new(fixture.to_bytes())).unwrap()
    }

    #[test]
    fn test_coverage_is_union_of_target_segments() {
        let daf = decode(
            SpkFixture::new()
                .with_segment(399, 0.0, 10.0)
                .with_segment(399, 5.0, 20.0)
                .with_segment(399, 40.0, 50.0)
                // 399 as a center does not count
                .with_centered_segment(301, 399, 100.0, 200.0),
        );

        let window = DafToolkit::default().coverage_of(&daf, 399).unwrap();
        assert_eq!(window.to_string(), "{[0, 20], [40, 50]}");
        assert!(!window.contains(150.0));
    }

    #[test]
    fn test_unknown_body_has_empty_coverage() {
        let daf = decode(SpkFixture::new().with_segment(399, 0.0, 10.0));
        let window = DafToolkit::default().coverage_of(&daf, 499).unwrap();
        assert!(window.is_empty());
    }

    #[test]
    fn test_coverage_capacity_from_config() {
        let daf = decode(
            SpkFixture::new()
                .with_segment(-82, 0.0, 1.0)
                .with_segment(-82, 2.0, 3.0)
                .with_segment(-82, 4.0, 5.0),
        );
        let toolkit = DafToolkit::new(SpkConfig::default().with_max_coverage_intervals(2));

        assert_eq!(
            toolkit.coverage_of(&daf, -82).unwrap_err(),
            SpkError::CapacityExceeded {
                kind: CapacityKind::CoverageIntervals,
                required: 3,
                capacity: 2
            }
        );
    }

    #[test]
    fn test_object_ids_are_distinct_targets() {
        let daf = decode(
            SpkFixture::new()
                .with_segment(399, 0.0, 10.0)
                .with_centered_segment(301, 3, 0.0, 10.0)
                .with_segment(3, 0.0, 10.0)
                .with_segment(399, 20.0, 30.0),
        );
        let ids = DafToolkit::default().object_ids_of(&daf).unwrap();
        assert_eq!(ids.as_slice(), &[3, 301, 399]);
    }

    #[test]
    fn test_object_ids_capacity_from_config() {
        let daf = decode(
            SpkFixture::new()
                .with_segment(1, 0.0, 1.0)
                .with_segment(2, 0.0, 1.0)
                .with_segment(1, 2.0, 3.0),
        );
        let toolkit = DafToolkit::new(SpkConfig::default().with_max_object_ids(2));
        assert_eq!(toolkit.object_ids_of(&daf).unwrap().as_slice(), &[1, 2]);

        let toolkit = DafToolkit::new(SpkConfig::default().with_max_object_ids(1));
        assert!(matches!(
            toolkit.object_ids_of(&daf),
            Err(SpkError::CapacityExceeded {
                kind: CapacityKind::ObjectIds,
                ..
            })
        ));
    }
}
