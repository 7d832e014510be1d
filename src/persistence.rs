//! Store snapshot persistence with a checksummed binary format.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::constants::SNAPSHOT_VERSION_MAGIC;
use crate::store::MemoryStore;

/// Saves and loads store snapshots with checksum verification.
pub struct SnapshotManager {
    snapshot_path: PathBuf,
}

impl SnapshotManager {
    /// Creates a new SnapshotManager instance.
    ///
    /// Sets up the data directory at the appropriate location for the
    /// platform using the `directories` crate.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "taskquest").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine data directory")
        })?;

        let data_dir = project_dirs.data_dir();
        fs::create_dir_all(data_dir)?;

        Ok(Self {
            snapshot_path: data_dir.join("store.dat"),
        })
    }

    /// Creates a manager writing to an explicit path (used in tests).
    pub fn with_path(snapshot_path: PathBuf) -> Self {
        Self { snapshot_path }
    }

    /// Saves the store to disk with checksum verification.
    ///
    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - Serialized store (variable length)
    /// - SHA256 checksum (32 bytes)
    pub fn save(&self, store: &MemoryStore) -> io::Result<()> {
        let data = bincode::serialize(store)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let data_len = data.len() as u32;

        // Checksum over version + length + data
        let mut hasher = Sha256::new();
        hasher.update(SNAPSHOT_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.snapshot_path)?;
        file.write_all(&SNAPSHOT_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        debug!(path = %self.snapshot_path.display(), bytes = data.len(), "store snapshot saved");
        Ok(())
    }

    /// Loads the store from disk with checksum verification.
    ///
    /// Returns an error if the file is missing, carries the wrong version
    /// magic, fails checksum verification, or cannot be deserialized.
    pub fn load(&self) -> io::Result<MemoryStore> {
        let mut file = fs::File::open(&self.snapshot_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);

        if version != SNAPSHOT_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Invalid snapshot version: expected 0x{:016X}, got 0x{:016X}",
                    SNAPSHOT_VERSION_MAGIC, version
                ),
            ));
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        let computed_checksum = hasher.finalize();

        if stored_checksum != computed_checksum.as_slice() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Checksum verification failed",
            ));
        }

        let store = bincode::deserialize(&data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(store)
    }

    /// Checks if a snapshot file exists.
    pub fn snapshot_exists(&self) -> bool {
        self.snapshot_path.exists()
    }

    /// Writes a pretty-printed JSON copy of the store next to the snapshot,
    /// for inspection and migration tooling. Returns the path written.
    pub fn export_json(&self, store: &MemoryStore) -> io::Result<PathBuf> {
        let path = self.snapshot_path.with_extension("json");
        let json = serde_json::to_string_pretty(store)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&path, json)?;
        Ok(path)
    }

    /// Loads a store from a JSON export.
    pub fn import_json(&self) -> io::Result<MemoryStore> {
        let path = self.snapshot_path.with_extension("json");
        let json = fs::read_to_string(&path)?;
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
