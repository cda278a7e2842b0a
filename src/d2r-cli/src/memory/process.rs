//! Live Process Memory Source
//!
//! Reads from a running D2R process, natively or under Proton/Wine.

use anyhow::{bail, Context, Result};
use d2r::memory::MemorySource;
use d2r::MemoryError;
use process_memory::{CopyAddress, ProcessHandle, TryIntoProcessHandle};
use std::fs;
use std::path::PathBuf;
use sysinfo::System;

use super::MemoryRegion;

/// An attached D2R instance
pub struct D2rProcess {
    pub pid: u32,
    pub handle: ProcessHandle,
    pub exe_path: PathBuf,
    pub maps: Vec<MemoryRegion>,
}

impl MemorySource for D2rProcess {
    fn read_bytes(&self, address: usize, size: usize) -> Result<Vec<u8>, MemoryError> {
        let mut buffer = vec![0u8; size];
        self.handle
            .copy_address(address, &mut buffer)
            .map_err(|e| MemoryError::Unreadable {
                address,
                size,
                reason: e.to_string(),
            })?;
        Ok(buffer)
    }
}

impl D2rProcess {
    /// Attach to the first process matching `process_name`
    pub fn attach(process_name: &str) -> Result<Self> {
        let pid = find_process(process_name)?;
        let handle = (pid as process_memory::Pid)
            .try_into_process_handle()
            .context("Failed to attach to process. Try running with sudo.")?;

        let maps = parse_maps(pid)?;

        let exe_path =
            fs::read_link(format!("/proc/{}/exe", pid)).unwrap_or_else(|_| PathBuf::from("unknown"));

        tracing::debug!(pid, regions = maps.len(), "attached");

        Ok(D2rProcess {
            pid,
            handle,
            exe_path,
            maps,
        })
    }

    /// Lowest mapping of the named module, which is its load base
    pub fn find_module(&self, module: &str) -> Option<&MemoryRegion> {
        self.maps
            .iter()
            .filter(|r| r.is_module(module))
            .min_by_key(|r| r.start)
    }

    /// Base address of the named module
    pub fn module_base(&self, module: &str) -> Result<usize> {
        self.find_module(module)
            .map(|r| r.start)
            .with_context(|| format!("Module {} is not mapped in PID {}", module, self.pid))
    }

    /// Process info summary
    pub fn info(&self, module: &str) -> String {
        let module_info = self
            .find_module(module)
            .map(|m| {
                let mapped: usize = self
                    .maps
                    .iter()
                    .filter(|r| r.is_module(module))
                    .map(|r| r.size())
                    .sum();
                format!("Base: {:#x}, Mapped: {:#x}", m.start, mapped)
            })
            .unwrap_or_else(|| "Not found".to_string());

        format!(
            "PID: {}\nExecutable: {}\nModule {}: {}\nMemory Regions: {} ({} readable)",
            self.pid,
            self.exe_path.display(),
            module,
            module_info,
            self.maps.len(),
            self.maps.iter().filter(|r| r.is_readable()).count()
        )
    }
}

/// Find a running process by executable name
///
/// Matches the process name or its command line, which is where the
/// executable shows up under Wine. The largest match by resident memory
/// wins, since launchers share the name.
pub fn find_process(process_name: &str) -> Result<u32> {
    let mut system = System::new_all();
    system.refresh_all();

    let needle = process_name.to_ascii_lowercase();
    let mut candidates: Vec<(u32, u64)> = Vec::new();

    for process in system.processes().values() {
        let pid = process.pid().as_u32();
        let name = process.name().to_string_lossy().to_ascii_lowercase();
        let cmdline = fs::read_to_string(format!("/proc/{}/cmdline", pid))
            .map(|c| c.to_ascii_lowercase())
            .unwrap_or_default();

        if name.contains(&needle) || cmdline.contains(&needle) {
            let tgid = get_tgid(pid).unwrap_or(pid);
            candidates.push((tgid, process.memory()));
        }
    }

    candidates.sort_by(|a, b| b.1.cmp(&a.1));
    candidates.dedup_by(|a, b| a.0 == b.0);

    if let Some((pid, memory)) = candidates.first() {
        tracing::info!(pid, memory_mb = memory / 1_000_000, "found {}", process_name);
        return Ok(*pid);
    }

    bail!("{} process not found. Is the game running?", process_name)
}

/// Thread group ID (main process) for a given PID/TID
fn get_tgid(pid: u32) -> Option<u32> {
    let status = fs::read_to_string(format!("/proc/{}/status", pid)).ok()?;
    parse_tgid(&status)
}

fn parse_tgid(status: &str) -> Option<u32> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("Tgid:"))
        .and_then(|rest| rest.trim().parse().ok())
}

/// Parse /proc/pid/maps into regions
pub fn parse_maps(pid: u32) -> Result<Vec<MemoryRegion>> {
    let maps_path = format!("/proc/{}/maps", pid);
    let contents = fs::read_to_string(&maps_path)
        .with_context(|| format!("Failed to open {}. Do you have permission?", maps_path))?;
    Ok(parse_maps_str(&contents))
}

fn parse_maps_str(contents: &str) -> Vec<MemoryRegion> {
    contents.lines().filter_map(MemoryRegion::parse_line).collect()
}
