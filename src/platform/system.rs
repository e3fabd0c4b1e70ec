//! sysinfo-backed hardware provider.
//!
//! Best-effort topology built from what `sysinfo` exposes: a CPU package
//! with per-core sub-devices, a memory device, one device per disk, a
//! motherboard device carrying component temperatures, and one device per
//! network interface. Scale is encoded in sensor labels ("... GB", "MB/s")
//! the same way the unit resolver expects it.

use std::time::Instant;

use sysinfo::{Components, CpuRefreshKind, Disks, MemoryRefreshKind, Networks, RefreshKind, System};

use crate::core::monitor::{Device, HardwareCategory, HardwareProvider, Sensor, SensorKind};

const BYTES_PER_GB: f64 = 1_073_741_824.0;

pub struct SystemProvider {
    system: System,
    components: Components,
    disks: Disks,
    networks: Networks,
    devices: Vec<Device>,
    open: bool,
    last_network_update: Option<Instant>,
    last_network_values: Vec<(u64, u64)>, // (rx, tx) per interface
}

impl SystemProvider {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything());

        Self {
            system: System::new_with_specifics(refresh_kind),
            components: Components::new_with_refreshed_list(),
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
            devices: Vec::new(),
            open: false,
            last_network_update: None,
            last_network_values: Vec::new(),
        }
    }

    fn rebuild_topology(&mut self) {
        let mut devices = Vec::new();
        devices.push(self.cpu_device());
        devices.push(self.memory_device());
        if let Some(board) = self.motherboard_device() {
            devices.push(board);
        }
        devices.extend(self.storage_devices());
        devices.extend(self.network_devices());
        self.devices = devices;
    }

    fn cpu_device(&self) -> Device {
        let cpus = self.system.cpus();
        let name = cpus
            .first()
            .map(|c| c.brand().trim().to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| "CPU".to_string());

        let mut device = Device::new(name, HardwareCategory::Cpu);
        device.sensors.push(Sensor {
            name: "CPU Total".to_string(),
            value: Some(self.system.global_cpu_usage()),
            kind: SensorKind::Load,
            identifier: "/cpu/0/load/0".to_string(),
        });

        for (i, cpu) in cpus.iter().enumerate() {
            let mut core = Device::new(format!("Core #{}", i + 1), HardwareCategory::Cpu);
            core.sensors.push(Sensor {
                name: "Load".to_string(),
                value: Some(cpu.cpu_usage()),
                kind: SensorKind::Load,
                identifier: format!("/cpu/0/core/{}/load/0", i),
            });
            core.sensors.push(Sensor {
                name: "Clock".to_string(),
                value: Some(cpu.frequency() as f32),
                kind: SensorKind::Clock,
                identifier: format!("/cpu/0/core/{}/clock/0", i),
            });
            device.sub_devices.push(core);
        }

        device
    }

    fn memory_device(&self) -> Device {
        let total = self.system.total_memory();
        let used = self.system.used_memory();
        let usage = if total > 0 {
            (used as f32 / total as f32) * 100.0
        } else {
            0.0
        };

        let mut device = Device::new("System Memory", HardwareCategory::Memory);
        device.sensors.push(Sensor {
            name: "Memory".to_string(),
            value: Some(usage),
            kind: SensorKind::Load,
            identifier: "/ram/load/0".to_string(),
        });
        device.sensors.push(Sensor {
            name: "Memory Used GB".to_string(),
            value: Some((used as f64 / BYTES_PER_GB) as f32),
            kind: SensorKind::Data,
            identifier: "/ram/data/0".to_string(),
        });
        device.sensors.push(Sensor {
            name: "Memory Available GB".to_string(),
            value: Some((self.system.available_memory() as f64 / BYTES_PER_GB) as f32),
            kind: SensorKind::Data,
            identifier: "/ram/data/1".to_string(),
        });
        device
    }

    /// Component temperature probes grouped under one board device. Absent
    /// on platforms where sysinfo exposes no components.
    fn motherboard_device(&self) -> Option<Device> {
        if self.components.is_empty() {
            return None;
        }

        let name = System::name().unwrap_or_else(|| "Motherboard".to_string());
        let mut device = Device::new(name, HardwareCategory::Motherboard);
        for (i, component) in self.components.iter().enumerate() {
            device.sensors.push(Sensor {
                name: component.label().to_string(),
                value: component.temperature(),
                kind: SensorKind::Temperature,
                identifier: format!("/motherboard/temperature/{}", i),
            });
        }
        Some(device)
    }

    fn storage_devices(&self) -> Vec<Device> {
        self.disks
            .iter()
            .enumerate()
            .map(|(i, disk)| {
                let total = disk.total_space();
                let available = disk.available_space();
                let used = total.saturating_sub(available);
                let usage = if total > 0 {
                    (used as f32 / total as f32) * 100.0
                } else {
                    0.0
                };

                let mut device = Device::new(
                    disk.name().to_string_lossy().to_string(),
                    HardwareCategory::Storage,
                );
                device.sensors.push(Sensor {
                    name: "Used Space".to_string(),
                    value: Some(usage),
                    kind: SensorKind::Load,
                    identifier: format!("/storage/{}/load/0", i),
                });
                device.sensors.push(Sensor {
                    name: "Total Capacity GB".to_string(),
                    value: Some((total as f64 / BYTES_PER_GB) as f32),
                    kind: SensorKind::Data,
                    identifier: format!("/storage/{}/data/0", i),
                });
                device
            })
            .collect()
    }

    /// Network devices feed the assembler's silent-drop path: the report has
    /// no populated Network section, so these never appear in output.
    fn network_devices(&mut self) -> Vec<Device> {
        let now = Instant::now();
        let elapsed_secs = self
            .last_network_update
            .map(|t| now.duration_since(t).as_secs_f64())
            .unwrap_or(1.0);

        let current_values: Vec<_> = self
            .networks
            .values()
            .map(|data| (data.total_received(), data.total_transmitted()))
            .collect();

        let devices = self
            .networks
            .iter()
            .enumerate()
            .map(|(i, (name, data))| {
                let (prev_rx, prev_tx) = self
                    .last_network_values
                    .get(i)
                    .copied()
                    .unwrap_or((data.total_received(), data.total_transmitted()));

                let rx_rate = data.total_received().saturating_sub(prev_rx) as f64 / elapsed_secs;
                let tx_rate =
                    data.total_transmitted().saturating_sub(prev_tx) as f64 / elapsed_secs;

                let mut device = Device::new(name.clone(), HardwareCategory::Network);
                device.sensors.push(Sensor {
                    name: "Download Speed".to_string(),
                    value: Some(rx_rate as f32),
                    kind: SensorKind::Throughput,
                    identifier: format!("/nic/{}/throughput/0", i),
                });
                device.sensors.push(Sensor {
                    name: "Upload Speed".to_string(),
                    value: Some(tx_rate as f32),
                    kind: SensorKind::Throughput,
                    identifier: format!("/nic/{}/throughput/1", i),
                });
                device.sensors.push(Sensor {
                    name: "Data Downloaded GB".to_string(),
                    value: Some((data.total_received() as f64 / BYTES_PER_GB) as f32),
                    kind: SensorKind::Data,
                    identifier: format!("/nic/{}/data/0", i),
                });
                device.sensors.push(Sensor {
                    name: "Data Uploaded GB".to_string(),
                    value: Some((data.total_transmitted() as f64 / BYTES_PER_GB) as f32),
                    kind: SensorKind::Data,
                    identifier: format!("/nic/{}/data/1", i),
                });
                device
            })
            .collect();

        self.last_network_update = Some(now);
        self.last_network_values = current_values;
        devices
    }
}

impl HardwareProvider for SystemProvider {
    fn is_open(&self) -> bool {
        self.open
    }

    fn open(&mut self) -> bool {
        if !self.open {
            log::debug!("opening system hardware provider");
            self.open = true;
        }
        true
    }

    fn close(&mut self) {
        if self.open {
            log::debug!("closing system hardware provider");
            self.devices.clear();
            self.open = false;
        }
    }

    fn refresh_all(&mut self) {
        if !self.open {
            return;
        }
        self.system.refresh_all();
        self.components.refresh(true);
        self.disks.refresh(true);
        self.networks.refresh(true);
        self.rebuild_topology();
    }

    fn devices(&self) -> &[Device] {
        &self.devices
    }
}

impl Default for SystemProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SystemProvider {
    fn drop(&mut self) {
        self.close();
    }
}
