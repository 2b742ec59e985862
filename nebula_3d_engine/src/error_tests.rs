//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug,
//! Clone, std::error::Error), plus the engine_err!/engine_bail! macros.

use crate::error::{Error, Result};
use crate::{engine_err, engine_bail};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("Renderer lock poisoned".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Backend error"));
    assert!(display.contains("Renderer lock poisoned"));
}

#[test]
fn test_out_of_memory_display() {
    let err = Error::OutOfMemory;
    let display = format!("{}", err);
    assert_eq!(display, "Out of GPU memory");
}

#[test]
fn test_invalid_resource_display() {
    let err = Error::InvalidResource("Geometry not found".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid resource"));
    assert!(display.contains("Geometry not found"));
}

#[test]
fn test_initialization_failed_display() {
    let err = Error::InitializationFailed("Renderer creation failed".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Initialization failed"));
    assert!(display.contains("Renderer creation failed"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::OutOfMemory;
    // Verify Error implements std::error::Error trait
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let err1 = Error::BackendError("test".to_string());
    let debug1 = format!("{:?}", err1);
    assert!(debug1.contains("BackendError"));

    let err2 = Error::OutOfMemory;
    let debug2 = format!("{:?}", err2);
    assert!(debug2.contains("OutOfMemory"));

    let err3 = Error::InvalidResource("resource".to_string());
    let debug3 = format!("{:?}", err3);
    assert!(debug3.contains("InvalidResource"));

    let err4 = Error::InitializationFailed("init".to_string());
    let debug4 = format!("{:?}", err4);
    assert!(debug4.contains("InitializationFailed"));
}

#[test]
fn test_error_clone() {
    let err1 = Error::BackendError("test".to_string());
    let err2 = err1.clone();
    assert_eq!(format!("{}", err1), format!("{}", err2));

    let err3 = Error::OutOfMemory;
    let err4 = err3.clone();
    assert_eq!(format!("{}", err3), format!("{}", err4));
}

// ============================================================================
// MACRO TESTS
// ============================================================================

#[test]
fn test_engine_err_builds_invalid_resource() {
    let err = engine_err!("nebula3d::Test", "Missing drawable {}", 7);
    match err {
        Error::InvalidResource(msg) => assert_eq!(msg, "Missing drawable 7"),
        other => panic!("expected InvalidResource, got {:?}", other),
    }
}

#[test]
fn test_engine_bail_returns_early() {
    fn failing() -> Result<u32> {
        engine_bail!("nebula3d::Test", "Always fails");
    }

    let result = failing();
    assert!(result.is_err());
    assert!(format!("{}", result.unwrap_err()).contains("Always fails"));
}
