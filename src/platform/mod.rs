//! Platform layer: concrete [`HardwareProvider`] implementations.

mod mock;
mod system;

pub use mock::MockProvider;
pub use system::SystemProvider;

use crate::core::monitor::HardwareProvider;

/// The provider used by the CLI: sysinfo-backed, best effort.
pub fn default_provider() -> Box<dyn HardwareProvider> {
    Box::new(SystemProvider::new())
}
