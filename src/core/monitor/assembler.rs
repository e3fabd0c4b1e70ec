//! Report assembly: one provider refresh, one filtered, normalized snapshot.

use chrono::Utc;

use super::filter::CategoryFilter;
use super::normalizer::normalize_device;
use super::provider::{HardwareCategory, HardwareProvider};
use super::report::HardwareReport;

/// Report section a native category maps into.
#[derive(Debug, Clone, Copy)]
enum Section {
    Cpu,
    Gpu,
    Memory,
    Motherboard,
    Storage,
}

impl Section {
    /// Lower-case key matched against the category filter.
    fn filter_key(self) -> &'static str {
        match self {
            Section::Cpu => "cpu",
            Section::Gpu => "gpu",
            Section::Memory => "memory",
            Section::Motherboard => "motherboard",
            Section::Storage => "storage",
        }
    }

    /// Label stamped onto the normalized top-level node.
    fn label(self) -> &'static str {
        match self {
            Section::Cpu => "CPU",
            Section::Gpu => "GPU",
            Section::Memory => "Memory",
            Section::Motherboard => "Motherboard",
            Section::Storage => "Storage",
        }
    }

    /// Map a native tag to its section. Network and unknown tags have no
    /// section and are skipped before filtering even sees them; this silent
    /// drop mirrors the fixed set of sections the report can hold.
    fn from_category(category: HardwareCategory) -> Option<Self> {
        match category {
            HardwareCategory::Cpu => Some(Section::Cpu),
            HardwareCategory::GpuNvidia | HardwareCategory::GpuAmd | HardwareCategory::GpuIntel => {
                Some(Section::Gpu)
            }
            HardwareCategory::Memory => Some(Section::Memory),
            HardwareCategory::Motherboard => Some(Section::Motherboard),
            HardwareCategory::Storage => Some(Section::Storage),
            HardwareCategory::Network | HardwareCategory::Unknown => None,
        }
    }
}

/// Build one telemetry report.
///
/// Never fails: if the provider cannot be opened the result is an empty
/// report stamped with the capture instant, and the problem goes to the log.
/// That keeps timed mode alive across transient driver trouble; the next
/// sample is the retry.
pub fn build_report(
    provider: &mut dyn HardwareProvider,
    requested_categories: &[String],
) -> HardwareReport {
    let timestamp = Utc::now();

    if !provider.is_open() && !provider.open() {
        log::warn!("hardware provider failed to open; emitting empty report");
        return HardwareReport::empty(timestamp);
    }

    provider.refresh_all();

    let filter = CategoryFilter::resolve(requested_categories);
    let mut report = HardwareReport::empty(timestamp);

    for device in provider.devices() {
        let Some(section) = Section::from_category(device.category) else {
            continue;
        };
        if !filter.includes(section.filter_key()) {
            continue;
        }

        let item = normalize_device(device, Some(section.label()));
        match section {
            Section::Cpu => report.cpu.push(item),
            Section::Gpu => report.gpu.push(item),
            Section::Memory => report.memory.push(item),
            Section::Motherboard => report.motherboard.push(item),
            Section::Storage => report.storage.push(item),
        }
    }

    report
}
