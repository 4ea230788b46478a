use std::path::{Path, PathBuf};

use super::*;
use tempfile::TempDir;

#[test]
fn canonicalize_resolves_relative_segments() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();

    let indirect = dir.path().join("sub").join("..");
    let result = canonicalize(&indirect).unwrap();

    assert_eq!(result, dunce::canonicalize(dir.path()).unwrap());
}

#[cfg(unix)]
#[test]
fn canonicalize_resolves_symlinks() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("real");
    std::fs::create_dir(&target).unwrap();
    let link = dir.path().join("link");
    std::os::unix::fs::symlink(&target, &link).unwrap();

    assert_eq!(canonicalize(&link).unwrap(), canonicalize(&target).unwrap());
}

#[test]
fn canonicalize_missing_path_is_an_error() {
    let err = canonicalize(Path::new("/nonexistent/path")).unwrap_err();
    assert!(matches!(err, ModTrackError::Canonicalize { .. }));
}

#[test]
fn relative_path_of_descendant() {
    let result = relative_path(Path::new("/src"), Path::new("/src/app/core.hmod"));
    assert_eq!(result, Some(PathBuf::from("app/core.hmod")));
}

#[test]
fn relative_path_of_non_descendant_is_none() {
    assert!(relative_path(Path::new("/src"), Path::new("/other/core.hmod")).is_none());
}

#[test]
fn relative_path_of_dir_itself_is_empty() {
    let result = relative_path(Path::new("/src"), Path::new("/src"));
    assert_eq!(result, Some(PathBuf::new()));
}
