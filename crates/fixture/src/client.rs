// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client fixture generation.

use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

use cs_core::{choose, Choice, ChooseError, ProfileError, ProfileInfo};

use crate::kinds::{self, KindTable};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to pick a client attribute: {0}")]
    Choose(#[from] ChooseError),
    #[error("failed to build a client profile: {0}")]
    Profile(#[from] ProfileError),
    #[error("failed to serialize client system information: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Size class of a simulated client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientKind {
    Tiny,
    Small,
    Medium,
    Large,
    Metal,
}

impl ClientKind {
    pub const ALL: [ClientKind; 5] = [
        ClientKind::Tiny,
        ClientKind::Small,
        ClientKind::Medium,
        ClientKind::Large,
        ClientKind::Metal,
    ];

    /// Fixed hardware shape for this class.
    pub fn hw_profile(self) -> HwProfile {
        match self {
            ClientKind::Tiny => HwProfile { arch: "x86_64", cpus: 2, mem_total: 512, sockets: 1 },
            ClientKind::Small => HwProfile { arch: "x86_64", cpus: 2, mem_total: 1024, sockets: 1 },
            ClientKind::Medium => {
                HwProfile { arch: "x86_64", cpus: 2, mem_total: 8 * 1024, sockets: 1 }
            }
            ClientKind::Large => {
                HwProfile { arch: "x86_64", cpus: 4, mem_total: 16 * 1024, sockets: 1 }
            }
            ClientKind::Metal => {
                HwProfile { arch: "x86_64", cpus: 96, mem_total: 384 * 1024, sockets: 4 }
            }
        }
    }
}

impl std::fmt::Display for ClientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ClientKind::Tiny => "tiny",
            ClientKind::Small => "small",
            ClientKind::Medium => "medium",
            ClientKind::Large => "large",
            ClientKind::Metal => "metal",
        };
        write!(f, "{name}")
    }
}

/// Fixed per-class hardware attributes (memory in MiB).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HwProfile {
    pub arch: &'static str,
    pub cpus: u32,
    pub mem_total: u32,
    pub sockets: u32,
}

/// One fabricated client inventory.
#[derive(Debug, Clone)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub uuid: String,
    pub kind: ClientKind,
    pub num_disk: u32,
    pub num_gpu: u32,
    pub num_net: u32,
    pub pci_data: ProfileInfo,
    pub mod_data: ProfileInfo,
}

impl Client {
    /// Fabricate a client of a randomly chosen size class.
    pub fn generate(id: u32) -> Result<Self, FixtureError> {
        let choices: Vec<Choice<ClientKind>> =
            ClientKind::ALL.iter().map(|&kind| Choice { weight: 20, value: kind }).collect();
        Self::generate_kind(*choose(&choices)?, id)
    }

    /// Fabricate a client of a specific size class.
    pub fn generate_kind(kind: ClientKind, id: u32) -> Result<Self, FixtureError> {
        let (table, num_disk, num_gpu, num_net): (&KindTable, u32, u32, u32) = match kind {
            ClientKind::Tiny => (&kinds::TINY, 0, 0, 0),
            ClientKind::Small => {
                (&kinds::SMALL, *choose(&kinds::small_disk_choices())?, 0, 1)
            }
            ClientKind::Medium => (
                &kinds::MEDIUM,
                *choose(&kinds::medium_disk_choices())?,
                *choose(&kinds::medium_gpu_choices())?,
                1,
            ),
            ClientKind::Large => (
                &kinds::LARGE,
                *choose(&kinds::large_disk_choices())?,
                *choose(&kinds::large_gpu_choices())?,
                1,
            ),
            ClientKind::Metal => (
                &kinds::METAL,
                *choose(&kinds::metal_disk_choices())?,
                *choose(&kinds::metal_gpu_choices())?,
                *choose(&kinds::metal_net_choices())?,
            ),
        };

        let pci_data = build_pci_data(table, num_disk, num_gpu, num_net)?;
        let mod_data = ProfileInfo::new(table.mod_list)?;

        Ok(Self {
            id,
            name: format!("{kind}-{id}"),
            uuid: Uuid::new_v4().to_string(),
            kind,
            num_disk,
            num_gpu,
            num_net,
            pci_data,
            mod_data,
        })
    }

    pub fn uname(&self) -> String {
        format!(
            "Simulated {} client {} with {} Disks, {} GPUs, {} Nets",
            self.kind, self.uuid, self.num_disk, self.num_gpu, self.num_net
        )
    }

    /// Full system information map, as persisted to `sysinfo.json`.
    pub fn sys_info(&self) -> Result<Map<String, Value>, FixtureError> {
        let hw = self.kind.hw_profile();
        let mut map = Map::new();
        map.insert("arch".to_string(), Value::String(hw.arch.to_string()));
        map.insert("cloud_provider".to_string(), Value::String("amazon".to_string()));
        map.insert("cpus".to_string(), Value::from(hw.cpus));
        map.insert("hostname".to_string(), Value::String(self.name.clone()));
        map.insert("hypervisor".to_string(), Value::String("amazon".to_string()));
        map.insert("mem_total".to_string(), Value::from(hw.mem_total));
        map.insert("mod_data".to_string(), serde_json::to_value(&self.mod_data)?);
        map.insert("pci_data".to_string(), serde_json::to_value(&self.pci_data)?);
        map.insert("sockets".to_string(), Value::from(hw.sockets));
        map.insert("uname".to_string(), Value::String(self.uname()));
        map.insert("uuid".to_string(), Value::String(self.uuid.clone()));
        Ok(map)
    }
}

fn build_pci_data(
    table: &KindTable,
    num_disk: u32,
    num_gpu: u32,
    num_net: u32,
) -> Result<ProfileInfo, FixtureError> {
    let extra = (num_disk + num_gpu + num_net) as usize;
    let mut lines = Vec::with_capacity(table.pci_header.len() + extra + 1);
    lines.extend(table.pci_header.iter().map(|line| line.to_string()));

    let mut slot = table.pci_slot;
    for _ in 0..num_disk {
        lines.push(format!(
            "{:02x}:{:02x}.0 Non-Volatile memory controller: Amazon.com, Inc. NVMe EBS Controller",
            table.pci_bus, slot
        ));
        slot += 1;
    }
    for _ in 0..num_gpu {
        lines.push(format!(
            "{:02x}:{:02x}.0 3D controller: NVIDIA Corporation TU104GL [Tesla T4] (rev a1)",
            table.pci_bus, slot
        ));
        slot += 1;
    }
    for _ in 0..num_net {
        lines.push(format!(
            "{:02x}:{:02x}.0 Ethernet controller: Amazon.com, Inc. Elastic Network Adapter (ENA)",
            table.pci_bus, slot
        ));
        slot += 1;
    }

    // blank last line creates a trailing newline
    lines.push(String::new());

    Ok(ProfileInfo::new(lines.join("\n"))?)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
