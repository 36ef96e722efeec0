//! Streaming model downloads and the fetch/install pipeline.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use super::archive;
use super::store::{ModelStore, VOSK_COMPLETION_MARKER};
use super::types::{Catalog, EngineKind, ModelDescriptor};
use crate::error::Error;

/// Connect timeout shared by both engines.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Read timeout for single-file whisper models.
pub const WHISPER_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Read timeout for vosk archives, which are larger.
pub const VOSK_READ_TIMEOUT: Duration = Duration::from_secs(60);

// One install at a time per engine namespace, so two callers cannot
// interleave writes to the same model path.
static WHISPER_INSTALL_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
static VOSK_INSTALL_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn install_lock(kind: EngineKind) -> &'static Mutex<()> {
    let lock = match kind {
        EngineKind::Whisper => &WHISPER_INSTALL_LOCK,
        EngineKind::Vosk => &VOSK_INSTALL_LOCK,
    };
    lock.get_or_init(|| Mutex::new(()))
}

/// Stream `url` to `dest`.
///
/// The body is written through an 8 KiB buffer, never buffered whole in
/// memory. On any failure after the destination file is created, the
/// partial file is removed before the error is returned, so a retry
/// never finds a half-written artifact. Single attempt; retry policy
/// belongs to the caller, as does any already-present short-circuit.
pub fn fetch(
    url: &str,
    dest: &Path,
    connect_timeout: Duration,
    read_timeout: Duration,
) -> Result<(), Error> {
    let client = reqwest::blocking::Client::builder()
        .connect_timeout(connect_timeout)
        .read_timeout(read_timeout)
        .build()
        .map_err(|e| Error::Network(e.to_string()))?;

    let mut response = client
        .get(url)
        .send()
        .map_err(|e| Error::Network(format!("{url}: {e}")))?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Network(format!("{url}: unexpected status {status}")));
    }

    let mut file = fs::File::create(dest)?;
    let result = (|| {
        let mut buffer = [0u8; 8192];
        loop {
            let bytes_read = response
                .read(&mut buffer)
                .map_err(|e| Error::Network(format!("{url}: read failed: {e}")))?;
            if bytes_read == 0 {
                break;
            }
            file.write_all(&buffer[..bytes_read])
                .map_err(|e| Error::Network(format!("{url}: write failed: {e}")))?;
        }
        file.flush()
            .map_err(|e| Error::Network(format!("{url}: write failed: {e}")))
    })();

    if result.is_err() {
        let _ = fs::remove_file(dest);
    }
    result
}

/// Download and install a model unless it is already present.
///
/// Present models short-circuit to success without touching the
/// network. Installs within one engine namespace are serialized.
pub fn ensure_model(
    catalog: &Catalog,
    store: &ModelStore,
    kind: EngineKind,
    id: &str,
) -> Result<PathBuf, Error> {
    let descriptor = catalog.resolve(kind, id)?;
    if store.exists(&descriptor) {
        crate::verbose!("{kind} model '{id}' already installed");
        return Ok(store.path_for(&descriptor));
    }

    let _guard = install_lock(kind)
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    // Re-check under the lock; another caller may have just finished.
    if store.exists(&descriptor) {
        return Ok(store.path_for(&descriptor));
    }

    store.ensure_layout()?;

    match kind {
        EngineKind::Whisper => install_whisper(store, &descriptor),
        EngineKind::Vosk => install_vosk(store, &descriptor),
    }
}

fn install_whisper(store: &ModelStore, descriptor: &ModelDescriptor) -> Result<PathBuf, Error> {
    let dest = store.path_for(descriptor);
    crate::verbose!("downloading whisper model '{}' from {}", descriptor.id, descriptor.url);
    fetch(&descriptor.url, &dest, CONNECT_TIMEOUT, WHISPER_READ_TIMEOUT)?;
    Ok(dest)
}

fn install_vosk(store: &ModelStore, descriptor: &ModelDescriptor) -> Result<PathBuf, Error> {
    let target = store.path_for(descriptor);
    let archive_path = store
        .namespace_dir(EngineKind::Vosk)
        .join(format!("temp_{}.zip", descriptor.id));

    crate::verbose!("downloading vosk model '{}' from {}", descriptor.id, descriptor.url);
    fetch(&descriptor.url, &archive_path, CONNECT_TIMEOUT, VOSK_READ_TIMEOUT)?;

    let root = descriptor.archive_root.as_deref().unwrap_or(&descriptor.id);
    let result = archive::install_zip(&archive_path, root, &target);
    // The archive is spent whether or not extraction worked.
    let _ = fs::remove_file(&archive_path);
    result?;

    // The marker must come out of the archive; it is never synthesized.
    if !target.join(VOSK_COMPLETION_MARKER).is_file() {
        let _ = fs::remove_dir_all(&target);
        return Err(Error::ArchiveCorrupt(format!(
            "archive for '{}' did not contain a {VOSK_COMPLETION_MARKER} marker",
            descriptor.id
        )));
    }

    Ok(target)
}
