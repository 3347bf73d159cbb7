//! Atomic filesystem primitives.
//!
//! Both operations follow the same shape: prepare the new state under a
//! temporary sibling name, then `rename` over the live path, so observers
//! never see a window with the path missing or half-written.

mod error;

pub use error::{Error, Result};

use std::path::{Path, PathBuf};

fn staging_name(path: &Path) -> PathBuf {
    let name = path.file_name().unwrap_or_default().to_string_lossy();
    path.with_file_name(format!(".{name}.tmp"))
}

/// Point `link` at `target`, replacing any prior link without a gap.
#[cfg(unix)]
pub fn atomic_symlink(target: impl AsRef<Path>, link: impl AsRef<Path>) -> Result<()> {
    let target = target.as_ref();
    let link = link.as_ref();
    let tmp = staging_name(link);

    // A stale staging link from an interrupted run would fail the create.
    let _ = std::fs::remove_file(&tmp);

    std::os::unix::fs::symlink(target, &tmp).map_err(|e| Error::Write {
        path: tmp.clone(),
        source: e,
    })?;
    std::fs::rename(&tmp, link).map_err(|e| Error::Replace {
        path: link.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(windows)]
pub fn atomic_symlink(target: impl AsRef<Path>, link: impl AsRef<Path>) -> Result<()> {
    use std::os::windows::prelude::OsStrExt;
    use windows::Win32::Storage::FileSystem::{
        CreateSymbolicLinkW, MOVE_FILE_FLAGS, MoveFileExW, SYMBOLIC_LINK_FLAGS,
    };
    use windows::core::PCWSTR;

    let target = target.as_ref();
    let link = link.as_ref();
    let tmp = staging_name(link);
    let _ = std::fs::remove_file(&tmp);

    let target_wide: Vec<u16> = target
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();
    let tmp_wide: Vec<u16> = tmp
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();
    let link_wide: Vec<u16> = link
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();

    let created = unsafe {
        CreateSymbolicLinkW(
            PCWSTR::from_raw(tmp_wide.as_ptr()),
            PCWSTR::from_raw(target_wide.as_ptr()),
            SYMBOLIC_LINK_FLAGS(1),
        )
    };
    if !created.as_bool() {
        return Err(Error::Write {
            path: tmp,
            source: std::io::Error::last_os_error(),
        });
    }

    let moved = unsafe {
        MoveFileExW(
            PCWSTR::from_raw(tmp_wide.as_ptr()),
            PCWSTR::from_raw(link_wide.as_ptr()),
            MOVE_FILE_FLAGS(1),
        )
    };
    if moved.is_err() {
        return Err(Error::Replace {
            path: link.to_path_buf(),
            source: std::io::Error::last_os_error(),
        });
    }

    Ok(())
}

/// Move a fully-populated staging directory into its final location.
#[cfg(unix)]
pub fn replace_dir(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    let src = src.as_ref();
    let dest = dest.as_ref();

    std::fs::rename(src, dest).map_err(|e| Error::Replace {
        path: dest.to_path_buf(),
        source: e,
    })
}

#[cfg(windows)]
pub fn replace_dir(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    use std::os::windows::prelude::OsStrExt;
    use std::thread;
    use std::time::Duration;
    use windows::Win32::Storage::FileSystem::{MOVE_FILE_FLAGS, MoveFileExW};
    use windows::core::PCWSTR;

    const RETRY_COUNT: u32 = 64;
    const RETRY_DELAY_MS: u64 = 8;

    let src = src.as_ref();
    let dest = dest.as_ref();

    let src_wide: Vec<u16> = src
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();
    let dest_wide: Vec<u16> = dest
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();

    // Sharing violations from scanners clear quickly; retry with backoff.
    let mut delay = RETRY_DELAY_MS;
    for attempt in 0..RETRY_COUNT {
        let result = unsafe {
            MoveFileExW(
                PCWSTR::from_raw(src_wide.as_ptr()),
                PCWSTR::from_raw(dest_wide.as_ptr()),
                MOVE_FILE_FLAGS(2),
            )
        };

        if result.is_ok() {
            return Ok(());
        }

        if attempt < RETRY_COUNT - 1 {
            thread::sleep(Duration::from_millis(delay));
            delay *= 2;
        }
    }

    Err(Error::RetryLimitExceeded {
        path: dest.to_path_buf(),
    })
}
