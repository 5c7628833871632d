// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client identifiers and their sharded datastore paths.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// 32-bit client identifier.
///
/// The id maps onto a three-level directory layout by splitting into
/// three 10-bit fields rendered as zero-padded hex path components;
/// for ids below 2^30 no directory level fans out beyond 1024
/// entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(pub u32);

impl FileId {
    fn top_dir_bits(self) -> u32 {
        self.0 >> 20
    }

    fn mid_dir_bits(self) -> u32 {
        (self.0 >> 10) & 0x3ff
    }

    fn leaf_dir_bits(self) -> u32 {
        self.0 & 0x3ff
    }

    /// Relative directory for this client, e.g. `001/001/101`.
    pub fn dir_path(self) -> PathBuf {
        let mut path = PathBuf::new();
        path.push(format!("{:03x}", self.top_dir_bits()));
        path.push(format!("{:03x}", self.mid_dir_bits()));
        path.push(format!("{:03x}", self.leaf_dir_bits()));
        path
    }

    /// File name for one typed artifact, e.g. `sysinfo.json`.
    pub fn file_name(self, file_type: FileType) -> String {
        format!("{}.json", file_type)
    }

    /// Relative path of one typed artifact under the datastore root.
    pub fn path(self, file_type: FileType) -> PathBuf {
        self.dir_path().join(self.file_name(file_type))
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// The typed JSON artifacts stored per client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    SysInfo,
    RegInfo,
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FileType::SysInfo => "sysinfo",
            FileType::RegInfo => "reginfo",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
#[path = "ids_tests.rs"]
mod tests;
