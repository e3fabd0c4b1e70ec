//! Scripted provider for tests.

use crate::core::monitor::{Device, HardwareProvider};

/// A provider with a fixed, caller-supplied topology.
///
/// Supports a fail-to-open mode for exercising the assembler's soft-fail
/// path, and counts refreshes so tests can assert the one-refresh-per-sample
/// contract.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    devices: Vec<Device>,
    open: bool,
    fail_open: bool,
    refresh_count: usize,
}

impl MockProvider {
    pub fn new(devices: Vec<Device>) -> Self {
        Self {
            devices,
            ..Self::default()
        }
    }

    /// A provider whose `open()` always reports failure.
    pub fn failing() -> Self {
        Self {
            fail_open: true,
            ..Self::default()
        }
    }

    pub fn refresh_count(&self) -> usize {
        self.refresh_count
    }
}

impl HardwareProvider for MockProvider {
    fn is_open(&self) -> bool {
        self.open
    }

    fn open(&mut self) -> bool {
        if self.fail_open {
            return false;
        }
        self.open = true;
        true
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn refresh_all(&mut self) {
        self.refresh_count += 1;
    }

    fn devices(&self) -> &[Device] {
        &self.devices
    }
}
