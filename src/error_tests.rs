use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = ModTrackError::Config("missing platform".to_string());
    assert_eq!(err.to_string(), "Configuration error: missing platform");
}

#[test]
fn error_display_canonicalize_includes_path() {
    let err = ModTrackError::Canonicalize {
        path: PathBuf::from("src/app"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
    };
    assert!(err.to_string().contains("src/app"));
}

#[test]
fn error_display_file_access_includes_path() {
    let err = ModTrackError::FileAccess {
        path: PathBuf::from("core.hmod"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.to_string().contains("core.hmod"));
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::other("disk went away");
    let err: ModTrackError = io_err.into();
    assert!(matches!(err, ModTrackError::Io(_)));
}

#[test]
fn error_from_json() {
    let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
    let err: ModTrackError = json_err.into();
    assert!(matches!(err, ModTrackError::JsonSerialize(_)));
}

#[test]
fn canonicalize_source_is_preserved() {
    let err = ModTrackError::Canonicalize {
        path: PathBuf::from("gone"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    let source = std::error::Error::source(&err);
    assert!(source.is_some());
}
