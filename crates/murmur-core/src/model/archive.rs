//! Zip package installation for directory-based models.

use std::fs;
use std::io;
use std::path::Path;

use zip::ZipArchive;

use crate::error::Error;

/// Extract `archive` into `target_dir`, stripping `root_prefix` from
/// every entry path.
///
/// Any previous install at `target_dir` is removed before extraction
/// starts, and a failure mid-extraction removes the partial tree again:
/// the target ends up fully replaced or absent, never stale. Entries
/// outside `root_prefix/` are not part of the expected package layout
/// and are skipped. Deleting the spent archive is the caller's job.
pub fn install_zip(archive: &Path, root_prefix: &str, target_dir: &Path) -> Result<(), Error> {
    if target_dir.exists() {
        fs::remove_dir_all(target_dir)?;
    }

    let result = extract(archive, root_prefix, target_dir);
    if result.is_err() {
        let _ = fs::remove_dir_all(target_dir);
    }
    result
}

fn extract(archive: &Path, root_prefix: &str, target_dir: &Path) -> Result<(), Error> {
    let corrupt = |e: &dyn std::fmt::Display| {
        Error::ArchiveCorrupt(format!("{}: {e}", archive.display()))
    };

    let file = fs::File::open(archive)?;
    let mut zip = ZipArchive::new(file).map_err(|e| corrupt(&e))?;
    let prefix = format!("{root_prefix}/");

    for index in 0..zip.len() {
        let mut entry = zip.by_index(index).map_err(|e| corrupt(&e))?;

        // Refuse entries whose path would escape the target.
        if entry.enclosed_name().is_none() {
            continue;
        }

        let name = entry.name().to_owned();
        let Some(relative) = name.strip_prefix(&prefix) else {
            continue;
        };
        if relative.is_empty() {
            continue;
        }

        let dest = target_dir.join(relative);
        if entry.is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out = fs::File::create(&dest)?;
            io::copy(&mut entry, &mut out).map_err(|e| corrupt(&e))?;
        }
    }

    Ok(())
}
