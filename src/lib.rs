// hwlynx library - public API

// Re-export error types
pub mod error;
pub use error::{HwError, Result};

// Module declarations
pub mod core;
pub mod platform;

// Re-export commonly used types
pub use crate::core::monitor::{
    build_report, CancelToken, CategoryFilter, HardwareProvider, HardwareReport, SampleMode,
    Sampler,
};

// Initialize logging
//
// Default level is Warn so stdout stays a clean stream of JSON documents;
// override with RUST_LOG for diagnostics.
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();
}
