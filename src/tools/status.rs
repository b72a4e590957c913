//! Server status tool
//!
//! Runtime diagnostics: build metadata, process info, and whether the
//! upstream credential is configured.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::FdcConfig;

/// Runtime status of the server
#[derive(Debug, Clone, Serialize)]
pub struct ServerStatus {
    /// Build information
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,

    /// Upstream configuration
    pub base_url: String,
    pub api_key_configured: bool,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    base_url: String,
    api_key_configured: bool,
}

impl StatusTracker {
    /// Create a tracker snapshot of the startup configuration
    pub fn new(config: &FdcConfig) -> Self {
        Self {
            start_time: Instant::now(),
            base_url: config.base_url.clone(),
            api_key_configured: config.api_key.is_some(),
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> ServerStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ServerStatus {
            version: build_info.version,
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            base_url: self.base_url.clone(),
            api_key_configured: self.api_key_configured,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reflects_config() {
        let tracker = StatusTracker::new(&FdcConfig::with_api_key("DEMO_KEY"));
        let status = tracker.get_status();
        assert!(status.api_key_configured);
        assert_eq!(status.base_url, "https://api.nal.usda.gov/fdc/v1");
        assert_eq!(status.process_id, std::process::id());

        let without_key = StatusTracker::new(&FdcConfig::default());
        assert!(!without_key.get_status().api_key_configured);
    }
}
