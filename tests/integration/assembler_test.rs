use hwlynx::core::monitor::{
    build_report, Device, HardwareCategory, Sensor, SensorKind,
};
use hwlynx::platform::MockProvider;

fn sensor(name: &str, value: f32, kind: SensorKind, identifier: &str) -> Sensor {
    Sensor {
        name: name.to_string(),
        value: Some(value),
        kind,
        identifier: identifier.to_string(),
    }
}

fn cpu_with_core() -> Device {
    let mut core = Device::new("Core #1", HardwareCategory::Cpu);
    core.sensors
        .push(sensor("Load", 12.5, SensorKind::Load, "/cpu/0/core/0/load/0"));

    let mut cpu = Device::new("CPU0", HardwareCategory::Cpu);
    cpu.sensors.push(sensor(
        "Core Temp",
        45.0,
        SensorKind::Temperature,
        "/cpu/0/temperature/0",
    ));
    cpu.sub_devices.push(core);
    cpu
}

fn components(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_failing_provider_yields_empty_report() {
    let mut provider = MockProvider::failing();
    let before = chrono::Utc::now();
    let report = build_report(&mut provider, &components(&["all"]));
    let after = chrono::Utc::now();

    assert!(report.is_empty());
    assert!(report.timestamp >= before && report.timestamp <= after);
    // no refresh happens on the soft-fail path
    assert_eq!(provider.refresh_count(), 0);
}

#[test]
fn test_cpu_scenario_end_to_end() {
    let mut provider = MockProvider::new(vec![cpu_with_core()]);
    let report = build_report(&mut provider, &components(&["cpu"]));

    assert_eq!(report.cpu.len(), 1);
    assert!(report.gpu.is_empty());
    assert!(report.memory.is_empty());
    assert!(report.motherboard.is_empty());
    assert!(report.storage.is_empty());
    assert!(report.network.is_empty());

    let cpu = &report.cpu[0];
    assert_eq!(cpu.name, "CPU0");
    assert_eq!(cpu.hardware_type, "CPU");
    assert_eq!(cpu.sensors.len(), 1);
    assert_eq!(cpu.sensors[0].name, "Core Temp");
    assert_eq!(cpu.sensors[0].value, Some(45.0));
    assert_eq!(cpu.sensors[0].kind, SensorKind::Temperature);
    assert_eq!(cpu.sensors[0].unit, "°C");

    assert_eq!(cpu.sub_hardware.len(), 1);
    let core = &cpu.sub_hardware[0];
    assert_eq!(core.name, "Core #1");
    assert_eq!(core.hardware_type, "CPU Core");
    assert_eq!(core.sensors[0].name, "Load");
    assert_eq!(core.sensors[0].value, Some(12.5));
    assert_eq!(core.sensors[0].unit, "%");
    assert!(core.sub_hardware.is_empty());
}

#[test]
fn test_one_refresh_per_sample() {
    let mut provider = MockProvider::new(vec![cpu_with_core()]);
    build_report(&mut provider, &components(&["all"]));
    assert_eq!(provider.refresh_count(), 1);
    build_report(&mut provider, &components(&["all"]));
    assert_eq!(provider.refresh_count(), 2);
}

#[test]
fn test_idempotent_structure_across_samples() {
    let mut provider = MockProvider::new(vec![cpu_with_core()]);
    let first = build_report(&mut provider, &components(&["all"]));
    let second = build_report(&mut provider, &components(&["all"]));

    assert_eq!(first.cpu, second.cpu);
    assert_eq!(first.gpu, second.gpu);
    assert_eq!(first.storage, second.storage);
    assert!(second.timestamp >= first.timestamp);
}

#[test]
fn test_gpu_vendor_variants_share_the_gpu_section() {
    let devices = vec![
        Device::new("GeForce", HardwareCategory::GpuNvidia),
        Device::new("Radeon", HardwareCategory::GpuAmd),
        Device::new("Arc", HardwareCategory::GpuIntel),
    ];
    let mut provider = MockProvider::new(devices);
    let report = build_report(&mut provider, &components(&["gpu"]));

    let names: Vec<_> = report.gpu.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["GeForce", "Radeon", "Arc"]);
    assert!(report.gpu.iter().all(|g| g.hardware_type == "GPU"));
}

#[test]
fn test_network_and_unknown_devices_are_dropped() {
    let devices = vec![
        Device::new("eth0", HardwareCategory::Network),
        Device::new("Mystery Box", HardwareCategory::Unknown),
        cpu_with_core(),
    ];
    let mut provider = MockProvider::new(devices);

    let report = build_report(&mut provider, &components(&["all"]));
    assert_eq!(report.cpu.len(), 1);
    assert!(report.network.is_empty());

    // requesting network explicitly changes nothing: the mapping never
    // buckets into that section
    let report = build_report(&mut provider, &components(&["network"]));
    assert!(report.is_empty());
}

#[test]
fn test_filter_excludes_other_sections() {
    let devices = vec![
        cpu_with_core(),
        Device::new("GeForce", HardwareCategory::GpuNvidia),
        Device::new("System Memory", HardwareCategory::Memory),
    ];
    let mut provider = MockProvider::new(devices);
    let report = build_report(&mut provider, &components(&["gpu"]));

    assert!(report.cpu.is_empty());
    assert_eq!(report.gpu.len(), 1);
    assert!(report.memory.is_empty());
}

#[test]
fn test_provider_order_preserved_within_sections() {
    let devices = vec![
        Device::new("sda", HardwareCategory::Storage),
        Device::new("sdb", HardwareCategory::Storage),
        Device::new("nvme0n1", HardwareCategory::Storage),
    ];
    let mut provider = MockProvider::new(devices);
    let report = build_report(&mut provider, &components(&["storage"]));

    let names: Vec<_> = report.storage.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["sda", "sdb", "nvme0n1"]);
}

#[test]
fn test_json_surface_field_names() {
    let mut provider = MockProvider::new(vec![cpu_with_core()]);
    let report = build_report(&mut provider, &components(&["cpu"]));
    let value = serde_json::to_value(&report).unwrap();

    for section in ["CPU", "GPU", "Memory", "Motherboard", "Storage", "Network"] {
        assert!(value.get(section).is_some(), "missing section {}", section);
    }
    assert!(value.get("timestamp").is_some());

    let cpu = &value["CPU"][0];
    assert_eq!(cpu["name"], "CPU0");
    assert_eq!(cpu["hardwareType"], "CPU");
    assert_eq!(cpu["sensors"][0]["type"], "Temperature");
    assert_eq!(cpu["sensors"][0]["unit"], "°C");
    assert_eq!(cpu["sensors"][0]["identifier"], "/cpu/0/temperature/0");
    assert_eq!(cpu["subHardware"][0]["hardwareType"], "CPU Core");
}
