//! Provider-tree to report-tree normalization.

use super::provider::{Device, HardwareCategory};
use super::report::{HardwareItemInfo, SensorInfo};
use super::units::sensor_unit;

/// Recursion guard against malformed provider topologies. Real hardware
/// trees are at most two levels deep.
const MAX_DEPTH: usize = 8;

/// Stamped category label for direct sub-devices of a CPU package.
const CPU_CORE_LABEL: &str = "CPU Core";

/// Normalize one device into a report node.
///
/// `category_override` stamps the node's category label; the top-level call
/// site passes one of the fixed section names, recursive calls pass `None`
/// unless the CPU-core relabel rule fires. Sensor and sub-device order is
/// preserved exactly; sensors without a current value are kept.
pub fn normalize_device(device: &Device, category_override: Option<&str>) -> HardwareItemInfo {
    normalize_at_depth(device, category_override, 0)
}

fn normalize_at_depth(
    device: &Device,
    category_override: Option<&str>,
    depth: usize,
) -> HardwareItemInfo {
    let hardware_type = category_override
        .map(str::to_string)
        .unwrap_or_else(|| device.category.as_str().to_string());

    let sensors = device
        .sensors
        .iter()
        .map(|sensor| SensorInfo {
            name: sensor.name.clone(),
            value: sensor.value,
            kind: sensor.kind,
            unit: sensor_unit(sensor.kind, &sensor.name).to_string(),
            identifier: sensor.identifier.clone(),
        })
        .collect();

    let sub_hardware = if depth >= MAX_DEPTH {
        log::warn!(
            "device '{}' exceeds max topology depth {}; sub-devices dropped",
            device.name,
            MAX_DEPTH
        );
        Vec::new()
    } else {
        device
            .sub_devices
            .iter()
            .map(|sub| {
                // Direct children of a CPU package are cores, whatever their
                // own tag says. The relabel does not propagate further down.
                let relabel = (device.category == HardwareCategory::Cpu).then_some(CPU_CORE_LABEL);
                normalize_at_depth(sub, relabel, depth + 1)
            })
            .collect()
    };

    HardwareItemInfo {
        name: device.name.clone(),
        hardware_type,
        sensors,
        sub_hardware,
    }
}
