//! Loader-level configuration (spec.md §6: "CLI / env / persisted
//! state: None owned by the core").
//!
//! Holds only settings about *running* the program — which hooks to
//! attach and at what log level. Policy/container/path table contents
//! are never read from this file; those flow in exclusively through
//! the map handles the external collaborator populates.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Which of the six kernel hooks to attach. Defaults to all of them;
/// an operator staging a partial rollout can disable individual hooks.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Hooks {
    /// Attach the `sched_process_fork` tracepoint.
    pub fork: bool,
    /// Attach the `task_alloc` LSM hook.
    pub task_alloc: bool,
    /// Attach the `syslog` LSM hook.
    pub syslog: bool,
    /// Attach the `sb_mount` LSM hook.
    pub mount: bool,
    /// Attach the `task_fix_setuid` LSM hook.
    pub setuid: bool,
    /// Attach the `file_open` LSM hook.
    pub open: bool,
}

impl Default for Hooks {
    fn default() -> Self {
        Self {
            fork: true,
            task_alloc: true,
            syslog: true,
            mount: true,
            setuid: true,
            open: true,
        }
    }
}

/// Top-level loader configuration, deserialized from TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Which hooks to attach on startup.
    pub hooks: Hooks,
    /// `log` level for the loader's own diagnostics (the eBPF
    /// program's trace output is controlled separately by
    /// `aya_log::EbpfLogger`, which always forwards at its own level).
    pub log_level: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            hooks: Hooks::default(),
            log_level: "info".to_string(),
        }
    }
}

impl LoaderConfig {
    /// Loads configuration from `path`. Missing file is not an error —
    /// callers get the all-hooks-attached, info-level default.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }
}
