//! Shared configuration handle

use super::settings::{AppConfig, ConfigError};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::path::Path;
use std::sync::Arc;

/// Cloneable handle to the live configuration
///
/// Components receive a handle at construction and edit the configuration in
/// place; whoever owns persistence decides when to flush it to disk.
#[derive(Debug, Clone, Default)]
pub struct ConfigHandle(Arc<RwLock<AppConfig>>);

impl ConfigHandle {
    /// Wrap a configuration
    pub fn new(config: AppConfig) -> Self {
        Self(Arc::new(RwLock::new(config)))
    }

    /// Read access
    pub fn read(&self) -> RwLockReadGuard<'_, AppConfig> {
        self.0.read()
    }

    /// Write access
    pub fn write(&self) -> RwLockWriteGuard<'_, AppConfig> {
        self.0.write()
    }

    /// Owned copy of the current configuration
    pub fn snapshot(&self) -> AppConfig {
        self.0.read().clone()
    }

    /// Write the current configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.snapshot().save_to(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let handle = ConfigHandle::new(AppConfig::default());
        let other = handle.clone();
        other.write().interface.status_bar_global_speeds = true;
        assert!(handle.read().interface.status_bar_global_speeds);
    }
}
