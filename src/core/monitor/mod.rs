//! Sensor-tree normalization and reporting engine.
//!
//! This module turns the raw device/sensor topology supplied by a
//! [`HardwareProvider`] into a stable, unit-annotated [`HardwareReport`],
//! filterable by hardware category, and drives one-shot or timed sampling.

mod assembler;
mod filter;
mod normalizer;
pub mod provider;
mod report;
mod sampler;
mod units;

pub use assembler::build_report;
pub use filter::CategoryFilter;
pub use normalizer::normalize_device;
pub use provider::{Device, HardwareCategory, HardwareProvider, Sensor, SensorKind};
pub use report::{HardwareItemInfo, HardwareReport, SensorInfo};
pub use sampler::{CancelToken, SampleMode, Sampler, MIN_INTERVAL_MS};
pub use units::sensor_unit;
