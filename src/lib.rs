pub mod bodies;
pub mod config;
pub mod constants;
pub mod daf;
pub mod id_set;
pub mod kernel_registry;
pub mod spk_errors;
pub mod spk_utils;
pub mod toolkit;
pub mod window;

pub use spk_errors::SpkError;
pub use spk_utils::{
    coverage, is_epoch_covered, is_epoch_covered_with, is_time_covered, object_ids,
    object_ids_into, object_ids_into_with, object_ids_with,
};
pub use toolkit::{DafToolkit, EphemerisToolkit};
