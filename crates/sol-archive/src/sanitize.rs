use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Result of sanitizing an archive entry name.
#[derive(Clone, Debug)]
pub struct SanitizedPath {
    pub original: PathBuf,
    pub resolved: PathBuf,
}

/// Compute the on-disk target for an archive entry name.
///
/// The name is split on `/`, the first `strip` segments are discarded, and
/// the remainder is normalized and joined onto `dest`. Names with nothing
/// left after stripping are an error, never silently skipped. `..` segments
/// are clamped lexically and the joined result is verified to stay under
/// `dest`, so crafted names cannot reference a location outside it.
///
/// An entry whose remainder is empty only because of a trailing slash (the
/// archive's top-level wrapper directory) resolves to `dest` itself.
pub fn sanitize_entry_path(name: &Path, dest: &Path, strip: usize) -> Result<SanitizedPath> {
    let raw = name.to_string_lossy();
    let segments: Vec<&str> = raw.split('/').collect();
    if segments.len() <= strip {
        return Err(Error::ShallowEntryName {
            entry: name.to_path_buf(),
            strip,
        });
    }

    let remainder: PathBuf = segments[strip..]
        .iter()
        .filter(|s| !s.is_empty())
        .collect();
    let normalized = normalize(&remainder);

    // Normalization leaves only plain segments; anything else is hostile.
    if normalized
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return Err(Error::PathEscape {
            entry: name.to_path_buf(),
            resolved: normalized,
        });
    }

    let resolved = dest.join(&normalized);
    if !resolved.starts_with(dest) {
        return Err(Error::PathEscape {
            entry: name.to_path_buf(),
            resolved,
        });
    }

    Ok(SanitizedPath {
        original: name.to_path_buf(),
        resolved,
    })
}

/// Verify that a symlink's recorded target cannot leave the destination.
///
/// Applied only under [`LinkPolicy::Contain`](crate::LinkPolicy::Contain);
/// the target itself is still written verbatim.
pub(crate) fn ensure_contained_link_target(
    target: &Path,
    link: &Path,
    dest: &Path,
) -> Result<()> {
    if target.is_absolute() {
        return Err(Error::AbsoluteLinkTarget {
            target: target.to_path_buf(),
            link: link.to_path_buf(),
        });
    }

    let resolved = normalize(&link.parent().unwrap_or(dest).join(target));
    if !resolved.starts_with(dest) {
        return Err(Error::LinkEscape {
            target: target.to_path_buf(),
            resolved,
        });
    }

    Ok(())
}

/// Resolve `.` and `..` lexically. `..` at the front pops into nothing
/// rather than escaping.
fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                result.pop();
            }
            Component::Normal(part) => result.push(part),
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) => result.push(component.as_os_str()),
        }
    }

    result
}
