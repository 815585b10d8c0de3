//! # Kernel registry
//!
//! A caller-owned list of loaded kernels with the bodies each SPK kernel
//! provides. It answers "which kernel holds body X" and "which bodies are
//! available" without reopening files, and routes coverage questions to the
//! kernels that can answer them.
//!
//! ## Precedence
//!
//! Kernels are kept in load order. When several loaded kernels provide the
//! same body, the most recently loaded one is reported by
//! [`KernelRegistry::kernel_for`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use spk_utils::kernel_registry::KernelRegistry;
//!
//! let mut registry = KernelRegistry::new();
//! registry.load_kernel("de440s.bsp")?;
//! registry.load_kernel("naif0012.tls")?;
//!
//! println!("bodies: {:?}", registry.loaded_object_ids());
//! println!("earth covered at J2000: {}", registry.is_epoch_covered(399, 0.0)?);
//!
//! registry.clear();
//! # Ok::<(), spk_utils::spk_errors::SpkError>(())
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use itertools::Itertools;
use log::{info, warn};

use crate::constants::{EphemerisTime, NaifId};
use crate::spk_errors::SpkError;
use crate::spk_utils::is_epoch_covered_with;
use crate::toolkit::{DafToolkit, EphemerisToolkit};

#[derive(Debug, Clone, PartialEq)]
struct LoadedKernel {
    path: Utf8PathBuf,
    /// Empty for non-SPK kernels
    object_ids: Vec<NaifId>,
}

#[derive(Debug, Clone)]
pub struct KernelRegistry<T: EphemerisToolkit = DafToolkit> {
    toolkit: T,
    kernels: Vec<LoadedKernel>,
}

impl Default for KernelRegistry<DafToolkit> {
    fn default() -> Self {
        Self::new()
    }
}

impl KernelRegistry<DafToolkit> {
    pub fn new() -> Self {
        Self::with_toolkit(DafToolkit::default())
    }
}

impl<T: EphemerisToolkit> KernelRegistry<T> {
    pub fn with_toolkit(toolkit: T) -> Self {
        KernelRegistry {
            toolkit,
            kernels: Vec::new(),
        }
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    /// Register a kernel.
    ///
    /// SPK kernels (`.bsp`, any case) are read to record the bodies they
    /// provide. Other kernels are only recorded.
    ///
    /// Return
    /// ----------
    /// * [`SpkError::KernelLoadFailed`] if the path is already loaded, does not
    ///   exist, or is an SPK kernel whose bodies cannot be read. The registry
    ///   is unchanged in that case.
    pub fn load_kernel(&mut self, path: impl AsRef<Utf8Path>) -> Result<(), SpkError> {
        let path = path.as_ref();
        let fail = |reason: String| {
            warn!("Kernel {path} not loaded: {reason}");
            SpkError::KernelLoadFailed {
                path: path.to_path_buf(),
                reason,
            }
        };

        if self.is_loaded(path) {
            return Err(fail("already loaded".to_string()));
        }
        if !path.exists() {
            return Err(fail("file not found".to_string()));
        }

        let object_ids = if is_spk(path) {
            let ids = self
                .toolkit
                .object_ids(path)
                .map_err(|err| fail(err.to_string()))?;
            ids.iter().collect()
        } else {
            Vec::new()
        };

        info!("Loaded kernel {path} ({} object id(s))", object_ids.len());
        self.kernels.push(LoadedKernel {
            path: path.to_path_buf(),
            object_ids,
        });
        Ok(())
    }

    /// Forget a kernel and the bodies it provided.
    ///
    /// Return
    /// ----------
    /// * [`SpkError::KernelUnloadFailed`] if the path is not loaded.
    pub fn unload_kernel(&mut self, path: impl AsRef<Utf8Path>) -> Result<(), SpkError> {
        let path = path.as_ref();
        let position = self
            .kernels
            .iter()
            .position(|kernel| kernel.path == path)
            .ok_or_else(|| SpkError::KernelUnloadFailed(path.to_path_buf()))?;
        self.kernels.remove(position);
        info!("Unloaded kernel {path}");
        Ok(())
    }

    /// Unload every kernel.
    pub fn clear(&mut self) {
        info!("Cleared {} kernel(s)", self.kernels.len());
        self.kernels.clear();
    }

    pub fn is_loaded(&self, path: impl AsRef<Utf8Path>) -> bool {
        let path = path.as_ref();
        self.kernels.iter().any(|kernel| kernel.path == path)
    }

    /// Loaded kernel paths, in load order.
    pub fn loaded_kernels(&self) -> impl Iterator<Item = &Utf8Path> {
        self.kernels.iter().map(|kernel| kernel.path.as_path())
    }

    /// Bodies provided by at least one loaded kernel, ascending.
    pub fn loaded_object_ids(&self) -> Vec<NaifId> {
        self.kernels
            .iter()
            .flat_map(|kernel| kernel.object_ids.iter().copied())
            .sorted()
            .dedup()
            .collect()
    }

    /// Most recently loaded kernel providing `body_id`.
    pub fn kernel_for(&self, body_id: NaifId) -> Option<&Utf8Path> {
        self.kernels_for(body_id).next()
    }

    /// Tell whether any loaded kernel holds data for `body_id` at `epoch`.
    ///
    /// Return
    /// ----------
    /// * `Ok(false)` when no loaded kernel provides the body.
    /// * The first error met while reading a kernel that provides the body.
    pub fn is_epoch_covered(&self, body_id: NaifId, epoch: EphemerisTime) -> Result<bool, SpkError> {
        for path in self.kernels_for(body_id) {
            if is_epoch_covered_with(&self.toolkit, path, body_id, epoch)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn kernels_for(&self, body_id: NaifId) -> impl Iterator<Item = &Utf8Path> {
        self.kernels
            .iter()
            .rev()
            .filter(move |kernel| kernel.object_ids.contains(&body_id))
            .map(|kernel| kernel.path.as_path())
    }
}

fn is_spk(path: &Utf8Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("bsp"))
}
