//! JsonConnection manages file paths for the JSON store and performs the
//! actual reads and writes.
use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Handle on the base data directory. Cheap to clone; repositories share
/// it.
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a connection rooted at the given directory, creating it if
    /// needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("create data directory {}", base_path.display()))?;
        }
        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the platform data directory
    /// (e.g. `~/.local/share/nexo`).
    pub fn new_default() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .context("could not determine platform data directory")?
            .join("nexo");
        info!("using data directory {}", data_dir.display());
        Self::new(data_dir)
    }

    pub fn users_file_path(&self) -> PathBuf {
        self.base_directory.join("users.json")
    }

    pub fn ledger_file_path(&self, user_id: &str) -> PathBuf {
        self.base_directory
            .join("ledgers")
            .join(format!("{}.json", safe_file_stem(user_id)))
    }

    /// Read and deserialize a JSON document. `Ok(None)` when the file
    /// does not exist yet.
    pub fn read_document<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?;
        let value = serde_json::from_str(&raw)
            .with_context(|| format!("parse {}", path.display()))?;
        Ok(Some(value))
    }

    /// Serialize and write a JSON document. Writes to a temp file in the
    /// same directory, then renames over the target so the put fully
    /// succeeds or fully fails.
    pub fn write_document<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(value).context("serialize document")?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, raw).with_context(|| format!("write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path)
            .with_context(|| format!("replace {}", path.display()))?;
        Ok(())
    }
}

/// Restrict a user id to filesystem-safe characters for use as a file
/// stem.
fn safe_file_stem(user_id: &str) -> String {
    user_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
