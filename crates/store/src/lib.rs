// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cs-store: sharded on-disk client datastore
//!
//! Each client's typed JSON artifacts live under a three-level
//! directory derived from its 32-bit id (see [`cs_core::FileId`]), so
//! a billion clients never put more than 1024 entries in any single
//! directory.
//!
//! The store keeps no in-memory state beyond the root path and opens
//! files only for the duration of each call. Concurrent writes to the
//! same `(id, type)` pair are undefined; callers serialize per id (the
//! work-queue driver does so by issuing exactly one job per id).

use std::fs;
use std::io;
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};
use std::io::Write;
use std::path::{Path, PathBuf};

use nix::unistd::{access, AccessFlags};
use thiserror::Error;

use cs_core::{FileId, FileType};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("permission denied for datastore root {path:?}: {source}")]
    RootPermission { path: PathBuf, source: io::Error },
    #[error("failed to create datastore root {path:?}: {source}")]
    RootCreate { path: PathBuf, source: io::Error },
    #[error("failed to stat datastore root {path:?}: {source}")]
    RootStat { path: PathBuf, source: io::Error },
    #[error("datastore root {path:?} is not a directory")]
    RootNotDir { path: PathBuf },
    #[error("datastore root {path:?} lacks appropriate access permissions: {source}")]
    RootAccess { path: PathBuf, source: nix::Error },
    #[error("failed to create datastore file hierarchy {path:?}: {source}")]
    CreateTree { path: PathBuf, source: io::Error },
    #[error("failed to write datastore file {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to read datastore file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to delete datastore file {path:?}: {source}")]
    Delete { path: PathBuf, source: io::Error },
}

/// On-disk K/V store mapping `(id, type)` to a JSON blob.
#[derive(Debug, Clone)]
pub struct ClientStore {
    root: PathBuf,
}

impl ClientStore {
    /// Open (creating if necessary) the datastore rooted at `root`.
    ///
    /// Fails fast on permission problems; a missing root is created
    /// recursively with mode 0755 and must end up a writable,
    /// searchable directory.
    pub fn init(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();

        match fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(StoreError::RootNotDir { path: root }),
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                return Err(StoreError::RootPermission { path: root, source: err });
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                fs::DirBuilder::new()
                    .recursive(true)
                    .mode(0o755)
                    .create(&root)
                    .map_err(|source| StoreError::RootCreate { path: root.clone(), source })?;
            }
            Err(source) => return Err(StoreError::RootStat { path: root, source }),
        }

        access(&root, AccessFlags::W_OK | AccessFlags::X_OK)
            .map_err(|source| StoreError::RootAccess { path: root.clone(), source })?;

        tracing::debug!(root = %root.display(), "datastore opened");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute directory holding one client's artifacts.
    pub fn client_dir(&self, id: FileId) -> PathBuf {
        self.root.join(id.dir_path())
    }

    /// Absolute path of one typed artifact.
    pub fn client_path(&self, id: FileId, file_type: FileType) -> PathBuf {
        self.root.join(id.path(file_type))
    }

    fn ensure_dir(&self, id: FileId) -> Result<(), StoreError> {
        let dir = self.client_dir(id);
        fs::DirBuilder::new()
            .recursive(true)
            .mode(0o755)
            .create(&dir)
            .map_err(|source| StoreError::CreateTree { path: dir, source })
    }

    /// Write one artifact, creating the directory tree as needed.
    ///
    /// A failed write deletes any partially created file before
    /// surfacing the error.
    pub fn write(
        &self,
        id: FileId,
        file_type: FileType,
        data: &[u8],
        perm: u32,
    ) -> Result<(), StoreError> {
        self.ensure_dir(id)?;

        let path = self.client_path(id, file_type);
        if let Err(source) = write_file(&path, data, perm) {
            // delete any partially created file, ignoring the error
            let _ = fs::remove_file(&path);
            return Err(StoreError::Write { path, source });
        }

        tracing::debug!(id = %id, %file_type, bytes = data.len(), "artifact written");
        Ok(())
    }

    pub fn read(&self, id: FileId, file_type: FileType) -> Result<Vec<u8>, StoreError> {
        let path = self.client_path(id, file_type);
        fs::read(&path).map_err(|source| StoreError::Read { path, source })
    }

    pub fn delete(&self, id: FileId, file_type: FileType) -> Result<(), StoreError> {
        let path = self.client_path(id, file_type);
        fs::remove_file(&path).map_err(|source| StoreError::Delete { path, source })
    }

    /// True if the artifact path resolves at all.
    ///
    /// A directory squatting on the path also reports true; callers
    /// historically rely on that, so it is preserved.
    pub fn exists(&self, id: FileId, file_type: FileType) -> bool {
        fs::metadata(self.client_path(id, file_type)).is_ok()
    }
}

fn write_file(path: &Path, data: &[u8], perm: u32) -> io::Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(perm)
        .open(path)?;
    file.write_all(data)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
