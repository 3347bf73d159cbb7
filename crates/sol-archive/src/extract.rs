use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::{Error, Result};
use crate::options::{ExtractOptions, LinkPolicy};
use crate::report::ExtractReport;
use crate::sanitize::{ensure_contained_link_target, sanitize_entry_path};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Extract a gzip-compressed tar stream under `dest`.
///
/// Entries are materialized strictly in stream order; missing ancestor
/// directories are created on demand, so archive ordering does not matter.
/// The first error aborts the call and leaves already-written entries in
/// place. Callers that need all-or-nothing behavior should extract into a
/// staging directory and rename it into place on success.
pub fn extract<R: Read>(
    mut reader: R,
    dest: &Path,
    options: &ExtractOptions,
) -> Result<ExtractReport> {
    // Reject non-gzip input before touching the filesystem. The sniffed
    // bytes are chained back in front of the stream for the decoder.
    let mut magic = [0u8; 2];
    reader.read_exact(&mut magic).map_err(Error::Decompression)?;
    if magic != GZIP_MAGIC {
        return Err(Error::NotGzip);
    }

    let stream = BufReader::new(io::Cursor::new(magic).chain(reader));
    let mut archive = tar::Archive::new(GzDecoder::new(stream));
    let mut report = ExtractReport::default();

    for entry in archive.entries().map_err(Error::Malformed)? {
        let mut entry = entry.map_err(Error::Malformed)?;
        let name = entry.path().map_err(Error::Malformed)?.into_owned();
        let kind = entry.header().entry_type();
        let mode = entry.header().mode().map_err(Error::Malformed)?;
        let link_target = entry
            .link_name()
            .map_err(Error::Malformed)?
            .map(|t| t.into_owned());

        let target = sanitize_entry_path(&name, dest, options.strip_components)?;

        if kind.is_dir() {
            fs::create_dir_all(&target.resolved).map_err(|e| Error::CreateDir {
                path: target.resolved.clone(),
                source: e,
            })?;
            set_mode(&target.resolved, mode)?;
            report.directories += 1;
        } else if kind.is_file() {
            if let Some(parent) = target.resolved.parent() {
                fs::create_dir_all(parent).map_err(|e| Error::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }

            let mut out = File::create(&target.resolved).map_err(|e| Error::WriteFile {
                path: target.resolved.clone(),
                source: e,
            })?;
            // The entry reader is bounded by the header's declared size, so
            // this consumes exactly the data region and leaves the stream
            // cursor at the next header.
            let written = io::copy(&mut entry, &mut out).map_err(|e| Error::WriteFile {
                path: target.resolved.clone(),
                source: e,
            })?;
            drop(out);

            set_mode(&target.resolved, mode)?;
            report.files += 1;
            report.bytes_written += written;
        } else if kind.is_symlink() {
            let Some(link_target) = link_target else {
                return Err(Error::Malformed(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("symlink entry '{}' has no target", name.display()),
                )));
            };

            if options.link_policy == LinkPolicy::Contain {
                ensure_contained_link_target(&link_target, &target.resolved, dest)?;
            }

            symlink(&link_target, &target.resolved).map_err(|e| Error::CreateSymlink {
                link: target.resolved.clone(),
                source: e,
            })?;
            report.symlinks += 1;
        } else {
            return Err(Error::UnsupportedEntryType { kind, entry: name });
        }
    }

    Ok(report)
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|e| {
        Error::SetPermissions {
            path: path.to_path_buf(),
            source: e,
        }
    })
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    // The target may not exist yet, so its dir-ness is taken from the
    // recorded text rather than the filesystem.
    if target.to_string_lossy().ends_with('/') {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}
