//! Config load validation tests for algokit-config.
// crates/algokit-config/tests/load_validation.rs
// =============================================================================
// Module: Config Load Validation Tests
// Description: Validate config loading guards (path, size, encoding).
// Purpose: Ensure config input handling is strict and fail-closed.
// =============================================================================

mod common;

use std::io::Write;
use std::path::Path;

use algokit_config::AlgokitConfig;
use algokit_config::OutputFormat;
use common::TestResult;
use common::assert_invalid;
use tempfile::NamedTempFile;

#[test]
fn load_rejects_path_too_long() -> TestResult {
    let long_path = "a".repeat(5_000);
    let path = Path::new(&long_path);
    assert_invalid(AlgokitConfig::load(Some(path)), "config path exceeds max length")
}

#[test]
fn load_rejects_path_component_too_long() -> TestResult {
    let long_component = "a".repeat(300);
    let path = Path::new(&long_component);
    assert_invalid(AlgokitConfig::load(Some(path)), "config path component too long")
}

#[test]
fn load_rejects_missing_explicit_file() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("absent.toml");
    assert_invalid(AlgokitConfig::load(Some(&path)), "config io error")
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    let payload = vec![b'#'; 1_048_577];
    file.write_all(&payload).map_err(|err| err.to_string())?;
    assert_invalid(AlgokitConfig::load(Some(file.path())), "config file exceeds size limit")
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(&[0xFF, 0xFE, 0xFF]).map_err(|err| err.to_string())?;
    assert_invalid(AlgokitConfig::load(Some(file.path())), "config file must be utf-8")
}

#[test]
fn load_reads_explicit_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(b"[output]\nformat = \"json\"\n").map_err(|err| err.to_string())?;
    let config = AlgokitConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config.output.format != OutputFormat::Json {
        return Err("output.format not applied".to_string());
    }
    Ok(())
}

#[test]
fn load_applies_validation() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(b"[limits]\nmax_edges = 0\n").map_err(|err| err.to_string())?;
    assert_invalid(AlgokitConfig::load(Some(file.path())), "limits.max_edges out of range")
}
