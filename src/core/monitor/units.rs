//! Display-unit resolution for sensor readings.

use super::provider::SensorKind;

/// Resolve the display unit for a sensor.
///
/// Table-driven by kind; Data/SmallData and Throughput additionally key off
/// the sensor's display name, because the upstream provider encodes scale in
/// its labels (e.g. "GPU Memory GB", "Read Rate MB/s"). Magnitude-based
/// guessing would silently reclassify those labels. Unknown kinds resolve to
/// the empty string.
pub fn sensor_unit(kind: SensorKind, name: &str) -> &'static str {
    match kind {
        SensorKind::Voltage => "V",
        SensorKind::Current => "A",
        SensorKind::Power => "W",
        SensorKind::Clock => "MHz",
        SensorKind::Temperature => "°C",
        SensorKind::Load => "%",
        SensorKind::Frequency => "Hz",
        SensorKind::Fan => "RPM",
        SensorKind::Flow => "L/h",
        SensorKind::Control => "%",
        SensorKind::Level => "%",
        SensorKind::Factor => "",
        SensorKind::Data | SensorKind::SmallData => {
            if contains_ignore_case(name, "GB") {
                "GB"
            } else {
                "MB"
            }
        }
        SensorKind::Throughput => {
            // Checked in priority order; "GB/s" must win over "B/s".
            if contains_ignore_case(name, "GB/s") {
                "GB/s"
            } else if contains_ignore_case(name, "MB/s") {
                "MB/s"
            } else if contains_ignore_case(name, "KB/s") {
                "KB/s"
            } else {
                "B/s"
            }
        }
        SensorKind::Energy => "Wh",
        SensorKind::Noise => "dBA",
        SensorKind::Unknown => "",
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_ascii_lowercase().contains(&needle.to_ascii_lowercase())
}
