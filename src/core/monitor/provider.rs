//! Hardware provider abstraction.
//!
//! The provider is the external hardware-access layer: it enumerates the
//! device/sensor topology and refreshes live readings. The reporting engine
//! never touches hardware directly; it only consumes this trait.

use serde::{Deserialize, Serialize};

/// Kind of measurement a sensor produces.
///
/// Serialized by variant name, which is also the `type` tag carried on each
/// reported sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorKind {
    Voltage,
    Current,
    Power,
    Clock,
    Temperature,
    Load,
    Frequency,
    Fan,
    Flow,
    Control,
    Level,
    Factor,
    Data,
    SmallData,
    Throughput,
    Energy,
    Noise,
    Unknown,
}

/// Native category tag a provider attaches to a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HardwareCategory {
    Cpu,
    GpuNvidia,
    GpuAmd,
    GpuIntel,
    Memory,
    Motherboard,
    Storage,
    Network,
    Unknown,
}

impl HardwareCategory {
    /// Text rendering of the native tag, used when no section-name override
    /// is stamped during normalization.
    pub fn as_str(&self) -> &'static str {
        match self {
            HardwareCategory::Cpu => "Cpu",
            HardwareCategory::GpuNvidia => "GpuNvidia",
            HardwareCategory::GpuAmd => "GpuAmd",
            HardwareCategory::GpuIntel => "GpuIntel",
            HardwareCategory::Memory => "Memory",
            HardwareCategory::Motherboard => "Motherboard",
            HardwareCategory::Storage => "Storage",
            HardwareCategory::Network => "Network",
            HardwareCategory::Unknown => "Unknown",
        }
    }
}

/// One measurement point on a device.
#[derive(Debug, Clone, PartialEq)]
pub struct Sensor {
    /// Vendor-provided label
    pub name: String,
    /// Current reading; `None` when the sensor has no valid value right now
    pub value: Option<f32>,
    pub kind: SensorKind,
    /// Stable opaque identifier within this provider, e.g. `/cpu/0/load/1`
    pub identifier: String,
}

/// One device node in the provider topology.
///
/// Sensor and sub-device order is meaningful and preserved all the way into
/// the report.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub name: String,
    pub category: HardwareCategory,
    pub sensors: Vec<Sensor>,
    pub sub_devices: Vec<Device>,
}

impl Device {
    pub fn new<S: Into<String>>(name: S, category: HardwareCategory) -> Self {
        Self {
            name: name.into(),
            category,
            sensors: Vec::new(),
            sub_devices: Vec::new(),
        }
    }
}

/// Trait for hardware-access providers.
///
/// A provider owns the topology and the live readings; the handle is opened
/// once at process start, refreshed once per sample, and closed exactly once
/// at shutdown. Implementations are not assumed safe for concurrent refresh.
pub trait HardwareProvider {
    /// Whether the provider is currently usable.
    fn is_open(&self) -> bool;

    /// Open the provider. Safe to call when already open; returns whether
    /// the provider is usable afterwards.
    fn open(&mut self) -> bool;

    /// Close the provider and release underlying resources.
    fn close(&mut self);

    /// Synchronously update every sensor's current value across the whole
    /// topology. One call covers all devices.
    fn refresh_all(&mut self);

    /// Top-level devices in provider order.
    fn devices(&self) -> &[Device];
}
