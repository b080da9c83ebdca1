use std::path::PathBuf;

pub const DEFAULT_AUTO_COMPRESS_THRESHOLD_BYTES: u64 = 100 * 1024; // 100 KiB

/// Compression preference for session files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    /// Always write plain JSON.
    Off,
    /// Always write gzip-compressed JSON.
    On,
    /// Write gzip when payload exceeds the configured threshold.
    Auto,
}

/// Runtime options for session persistence.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Directory holding session, backup, and lock files.
    pub base_dir: PathBuf,
    /// Identifies the document within the storage directory.
    pub document_id: String,
    /// Files larger than this are refused on save and load.
    pub max_file_size_bytes: u64,
    pub compression: CompressionMode,
    pub auto_compress_threshold_bytes: u64,
    /// How many rotated backups to keep (0 = none, 1 = a single `.bak`).
    pub backup_retention: usize,
}

impl SessionOptions {
    /// Creates an options struct with sensible defaults.
    pub fn new(base_dir: PathBuf, document_id: impl Into<String>) -> Self {
        let document_id = sanitize_identifier(&document_id.into());
        Self {
            base_dir,
            document_id,
            max_file_size_bytes: 10 * 1024 * 1024,
            compression: CompressionMode::Auto,
            auto_compress_threshold_bytes: DEFAULT_AUTO_COMPRESS_THRESHOLD_BYTES,
            backup_retention: 1,
        }
    }

    /// Default storage directory under the platform data dir.
    pub fn default_base_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("inkboard")
    }

    pub fn session_file_path(&self) -> PathBuf {
        self.base_dir.join(format!("{}.json", self.file_stem()))
    }

    pub fn backup_file_path(&self) -> PathBuf {
        self.base_dir.join(format!("{}.json.bak", self.file_stem()))
    }

    pub fn lock_file_path(&self) -> PathBuf {
        self.base_dir.join(format!("{}.lock", self.file_stem()))
    }

    fn file_stem(&self) -> String {
        format!("session-{}", self.document_id)
    }
}

pub(crate) fn sanitize_identifier(raw: &str) -> String {
    if raw.is_empty() {
        return "default".to_string();
    }

    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
