use super::options::{CompressionMode, SessionOptions};
use crate::draw::Shape;
use anyhow::{Context, Result};
use chrono::Utc;
use flate2::{Compression, bufread::GzDecoder, write::GzEncoder};
use fs2::FileExt;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

const CURRENT_VERSION: u32 = 1;

/// On-disk envelope around the shape log.
#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    version: u32,
    last_modified: String,
    #[serde(default)]
    shapes: Vec<Shape>,
}

/// Persist the committed shape log to disk.
///
/// Writes through a temp file and an atomic rename, rotating the previous
/// session file into a `.bak` when retention allows. An empty log removes
/// the session file instead of writing an empty one.
pub fn save_history(shapes: &[Shape], options: &SessionOptions) -> Result<()> {
    fs::create_dir_all(&options.base_dir).with_context(|| {
        format!(
            "failed to create session directory {}",
            options.base_dir.display()
        )
    })?;

    let lock_path = options.lock_file_path();
    let lock_file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .open(&lock_path)
        .with_context(|| format!("failed to open session lock file {}", lock_path.display()))?;
    lock_file
        .lock_exclusive()
        .with_context(|| format!("failed to lock session file {}", lock_path.display()))?;

    let result = save_history_inner(shapes, options);

    FileExt::unlock(&lock_file).unwrap_or_else(|err| {
        warn!(
            "failed to unlock session file {}: {}",
            lock_path.display(),
            err
        )
    });

    result
}

fn save_history_inner(shapes: &[Shape], options: &SessionOptions) -> Result<()> {
    let session_path = options.session_file_path();
    let backup_path = options.backup_file_path();

    if shapes.is_empty() {
        if session_path.exists() {
            debug!(
                "Removing session file {} because the shape log is empty",
                session_path.display()
            );
            fs::remove_file(&session_path).with_context(|| {
                format!(
                    "failed to remove empty session file {}",
                    session_path.display()
                )
            })?;
        }
        return Ok(());
    }

    let file_payload = SessionFile {
        version: CURRENT_VERSION,
        last_modified: Utc::now().to_rfc3339(),
        shapes: shapes.to_vec(),
    };

    let mut json_bytes =
        serde_json::to_vec_pretty(&file_payload).context("failed to serialise session payload")?;

    if json_bytes.len() as u64 > options.max_file_size_bytes {
        warn!(
            "Session data size {} bytes exceeds the configured limit of {} bytes; skipping save",
            json_bytes.len(),
            options.max_file_size_bytes
        );
        return Ok(());
    }

    let should_compress = match options.compression {
        CompressionMode::Off => false,
        CompressionMode::On => true,
        CompressionMode::Auto => (json_bytes.len() as u64) >= options.auto_compress_threshold_bytes,
    };

    if should_compress {
        json_bytes = compress_bytes(&json_bytes)?;
    }

    let tmp_path = temp_path(&session_path);
    {
        let mut tmp_file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
            .with_context(|| {
                format!(
                    "failed to open temporary session file {}",
                    tmp_path.display()
                )
            })?;
        tmp_file
            .write_all(&json_bytes)
            .context("failed to write session payload")?;
        tmp_file
            .sync_all()
            .context("failed to sync temporary session file")?;
    }

    if session_path.exists() {
        if options.backup_retention > 0 {
            if backup_path.exists() {
                fs::remove_file(&backup_path).ok();
            }
            fs::rename(&session_path, &backup_path).with_context(|| {
                format!(
                    "failed to rotate previous session file {} -> {}",
                    session_path.display(),
                    backup_path.display()
                )
            })?;
        } else {
            fs::remove_file(&session_path).ok();
        }
    }

    fs::rename(&tmp_path, &session_path).with_context(|| {
        format!(
            "failed to move temporary session file {} -> {}",
            tmp_path.display(),
            session_path.display()
        )
    })?;

    info!(
        "Session saved to {} ({} shapes, {} bytes, compression={})",
        session_path.display(),
        shapes.len(),
        json_bytes.len(),
        should_compress
    );

    Ok(())
}

/// Load the previously saved shape log.
///
/// Never fails toward the caller: missing, oversized, locked-out, or
/// corrupt data is logged at warn level and treated as "no prior history".
pub fn load_history(options: &SessionOptions) -> Vec<Shape> {
    match try_load_history(options) {
        Ok(shapes) => shapes,
        Err(err) => {
            warn!("ignoring unreadable session data: {err:#}");
            Vec::new()
        }
    }
}

fn try_load_history(options: &SessionOptions) -> Result<Vec<Shape>> {
    let session_path = options.session_file_path();
    if !session_path.exists() {
        debug!(
            "No session file present at {}, starting empty",
            session_path.display()
        );
        return Ok(Vec::new());
    }

    let metadata = fs::metadata(&session_path)
        .with_context(|| format!("failed to stat session file {}", session_path.display()))?;
    if metadata.len() > options.max_file_size_bytes {
        warn!(
            "Session file {} is {} bytes which exceeds the configured limit ({} bytes); refusing to load",
            session_path.display(),
            metadata.len(),
            options.max_file_size_bytes
        );
        return Ok(Vec::new());
    }

    let lock_path = options.lock_file_path();
    let lock_file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .open(&lock_path)
        .with_context(|| format!("failed to open session lock file {}", lock_path.display()))?;
    lock_file
        .lock_shared()
        .with_context(|| format!("failed to acquire shared lock {}", lock_path.display()))?;

    let result = load_history_inner(&session_path);

    FileExt::unlock(&lock_file).unwrap_or_else(|err| {
        warn!(
            "failed to unlock session file {}: {}",
            lock_path.display(),
            err
        )
    });

    result
}

fn load_history_inner(session_path: &Path) -> Result<Vec<Shape>> {
    let mut file_bytes = Vec::new();
    {
        let mut file = File::open(session_path)
            .with_context(|| format!("failed to open session file {}", session_path.display()))?;
        file.read_to_end(&mut file_bytes)
            .context("failed to read session file")?;
    }

    let decompressed = if is_gzip(&file_bytes) {
        let mut decoder = GzDecoder::new(&file_bytes[..]);
        let mut out = Vec::new();
        decoder
            .read_to_end(&mut out)
            .context("failed to decompress session file")?;
        out
    } else {
        file_bytes
    };

    let session_file: SessionFile =
        serde_json::from_slice(&decompressed).context("failed to parse session json")?;

    debug!(
        "Loaded {} shapes from {} (version {})",
        session_file.shapes.len(),
        session_path.display(),
        session_file.version
    );

    Ok(session_file.shapes)
}

fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .context("failed to compress session payload")?;
    encoder
        .finish()
        .context("failed to finalise compressed session payload")
}

fn is_gzip(bytes: &[u8]) -> bool {
    bytes.len() > 2 && bytes[0] == 0x1f && bytes[1] == 0x8b
}

fn temp_path(target: &Path) -> PathBuf {
    let mut candidate = target.with_extension("json.tmp");
    let mut counter = 0u32;
    while candidate.exists() {
        counter += 1;
        candidate = target.with_extension(format!("json.tmp{counter}"));
    }
    candidate
}
