use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::provider::SensorKind;

/// One reported measurement, unit-annotated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorInfo {
    pub name: String,
    pub value: Option<f32>,
    #[serde(rename = "type")]
    pub kind: SensorKind,
    pub unit: String,
    pub identifier: String,
}

/// One normalized device node: its sensors plus recursively normalized
/// sub-devices. `hardware_type` is the stamped category label, not the
/// provider's native tag, at the top level and at the "CPU Core" level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareItemInfo {
    pub name: String,
    pub hardware_type: String,
    pub sensors: Vec<SensorInfo>,
    pub sub_hardware: Vec<HardwareItemInfo>,
}

/// Root of one telemetry sample.
///
/// The six sections partition the provider's top-level devices by category;
/// sub-devices stay nested and are never promoted to a sibling section.
/// `network` is part of the report shape but never populated by the current
/// category mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareReport {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "CPU")]
    pub cpu: Vec<HardwareItemInfo>,
    #[serde(rename = "GPU")]
    pub gpu: Vec<HardwareItemInfo>,
    #[serde(rename = "Memory")]
    pub memory: Vec<HardwareItemInfo>,
    #[serde(rename = "Motherboard")]
    pub motherboard: Vec<HardwareItemInfo>,
    #[serde(rename = "Storage")]
    pub storage: Vec<HardwareItemInfo>,
    #[serde(rename = "Network")]
    pub network: Vec<HardwareItemInfo>,
}

impl HardwareReport {
    /// An empty report stamped with the given capture instant.
    pub fn empty(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            cpu: Vec::new(),
            gpu: Vec::new(),
            memory: Vec::new(),
            motherboard: Vec::new(),
            storage: Vec::new(),
            network: Vec::new(),
        }
    }

    /// True when no section holds any device.
    pub fn is_empty(&self) -> bool {
        self.cpu.is_empty()
            && self.gpu.is_empty()
            && self.memory.is_empty()
            && self.motherboard.is_empty()
            && self.storage.is_empty()
            && self.network.is_empty()
    }
}
