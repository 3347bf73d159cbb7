use sol_fs::{atomic_symlink, replace_dir};
use tempfile::tempdir;

#[cfg(unix)]
#[test]
fn symlink_is_created_when_absent() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("target");
    let link = dir.path().join("link");

    std::fs::write(&target, "data").unwrap();
    atomic_symlink(&target, &link).unwrap();

    assert!(link.is_symlink());
    assert_eq!(std::fs::read_to_string(&link).unwrap(), "data");
}

#[cfg(unix)]
#[test]
fn symlink_swap_replaces_prior_target() {
    let dir = tempdir().unwrap();
    let old = dir.path().join("old");
    let new = dir.path().join("new");
    let link = dir.path().join("link");

    std::fs::write(&old, "old").unwrap();
    std::fs::write(&new, "new").unwrap();

    atomic_symlink(&old, &link).unwrap();
    atomic_symlink(&new, &link).unwrap();

    assert_eq!(std::fs::read_link(&link).unwrap(), new);
    assert_eq!(std::fs::read_to_string(&link).unwrap(), "new");
}

#[cfg(unix)]
#[test]
fn symlink_swap_survives_stale_staging_link() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("target");
    let link = dir.path().join("link");

    std::fs::write(&target, "data").unwrap();
    // Leftover from a hypothetical interrupted swap.
    std::os::unix::fs::symlink("nowhere", dir.path().join(".link.tmp")).unwrap();

    atomic_symlink(&target, &link).unwrap();
    assert_eq!(std::fs::read_link(&link).unwrap(), target);
}

#[test]
fn replace_dir_moves_staging_into_place() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("staging");
    let dest = dir.path().join("final");

    std::fs::create_dir_all(&src).unwrap();
    std::fs::write(src.join("file.txt"), "content").unwrap();

    replace_dir(&src, &dest).unwrap();

    assert!(!src.exists());
    assert_eq!(
        std::fs::read_to_string(dest.join("file.txt")).unwrap(),
        "content"
    );
}
