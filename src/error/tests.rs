//! Unit tests for error handling

use super::*;
use std::error::Error as _;
use std::io;
use std::path::PathBuf;

#[test]
fn path_resolution_display_includes_cause() {
    let err = FetchError::PathResolution(io::Error::new(
        io::ErrorKind::NotFound,
        "platform cannot report it",
    ));

    let msg = err.to_string();
    assert!(msg.contains("executable directory"));
    assert!(msg.contains("platform cannot report it"));
}

#[test]
fn file_delete_display_includes_path_and_cause() {
    let err = FetchError::FileDelete {
        path: PathBuf::from("/opt/fetcher/prizepicks_props.json"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
    };

    let msg = err.to_string();
    assert!(msg.contains("prizepicks_props.json"));
    assert!(msg.contains("permission denied"));
}

#[test]
fn file_write_display_includes_path_and_cause() {
    let err = FetchError::FileWrite {
        path: PathBuf::from("/opt/fetcher/prizepicks_props.json"),
        source: io::Error::new(io::ErrorKind::StorageFull, "no space left on device"),
    };

    let msg = err.to_string();
    assert!(msg.contains("failed to write"));
    assert!(msg.contains("/opt/fetcher/prizepicks_props.json"));
    assert!(msg.contains("no space left on device"));
}

#[tokio::test]
async fn network_variant_from_reqwest_error() {
    // Connecting to a closed local port produces a real reqwest error without
    // touching the network.
    let client = reqwest::Client::new();
    let reqwest_error = client
        .get("http://127.0.0.1:1/")
        .send()
        .await
        .unwrap_err();

    let err = FetchError::Network(reqwest_error);
    match err {
        FetchError::Network(_) => (),
        _ => panic!("Expected Network error variant"),
    }
}

#[test]
fn error_source_chain() {
    let err = FetchError::PathResolution(io::Error::new(io::ErrorKind::NotFound, "gone"));
    assert!(err.source().is_some());
}

#[test]
fn result_type_alias() {
    fn ok_fn() -> Result<&'static str> {
        Ok("success")
    }

    assert_eq!(ok_fn().unwrap(), "success");
}
