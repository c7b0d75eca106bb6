//! Config default and section tests for algokit-config.
// crates/algokit-config/tests/config_defaults.rs
// =============================================================================
// Module: Config Defaults Tests
// Description: Validate defaults, section parsing and limit ranges.
// Purpose: Ensure every section is optional and every bound is enforced.
// =============================================================================

mod common;

use algokit_config::LogFormat;
use algokit_config::LogLevel;
use algokit_config::OutputFormat;
use algokit_core::SortAlgorithm;
use algokit_core::UnionFindAlgorithm;
use common::TestResult;
use common::assert_invalid;
use common::config_from_toml;

#[test]
fn empty_config_uses_defaults() -> TestResult {
    let config = config_from_toml("").map_err(|err| err.to_string())?;
    if config.logging.level != LogLevel::Warn || config.logging.format != LogFormat::Text {
        return Err("logging defaults".to_string());
    }
    if config.sorting.algorithm != SortAlgorithm::MergeTopDown {
        return Err("sorting default".to_string());
    }
    if config.union_find.algorithm != UnionFindAlgorithm::WeightedQuickUnion {
        return Err("union-find default".to_string());
    }
    if config.output.format != OutputFormat::Text {
        return Err("output default".to_string());
    }
    if config.limits.max_input_bytes != 16 * 1024 * 1024 {
        return Err("max_input_bytes default".to_string());
    }
    let limits = config.graph_limits();
    if limits.max_vertices != 1_000_000 || limits.max_edges != 10_000_000 {
        return Err("graph limit defaults".to_string());
    }
    Ok(())
}

#[test]
fn sections_parse() -> TestResult {
    let config = config_from_toml(
        r#"
[logging]
level = "debug"
format = "json"

[limits]
max_vertices = 10
max_edges = 20

[sorting]
algorithm = "quick_three_way"

[union_find]
algorithm = "quick_find"
"#,
    )
    .map_err(|err| err.to_string())?;
    if config.logging.level != LogLevel::Debug || config.logging.format != LogFormat::Json {
        return Err("logging section".to_string());
    }
    if config.sorting.algorithm != SortAlgorithm::QuickThreeWay {
        return Err("sorting section".to_string());
    }
    if config.union_find.algorithm != UnionFindAlgorithm::QuickFind {
        return Err("union-find section".to_string());
    }
    let limits = config.graph_limits();
    if limits.max_vertices != 10 || limits.max_edges != 20 {
        return Err("limits section".to_string());
    }
    Ok(())
}

#[test]
fn unknown_keys_are_rejected() -> TestResult {
    assert_invalid(config_from_toml("[sorting]\nalgo = \"shell\"\n"), "config parse error")?;
    assert_invalid(config_from_toml("[server]\nbind = \"x\"\n"), "config parse error")
}

#[test]
fn unknown_algorithm_is_rejected() -> TestResult {
    assert_invalid(config_from_toml("[sorting]\nalgorithm = \"bogo\"\n"), "config parse error")
}

#[test]
fn limits_out_of_range() -> TestResult {
    assert_invalid(
        config_from_toml("[limits]\nmax_input_bytes = 0\n"),
        "limits.max_input_bytes out of range",
    )?;
    assert_invalid(
        config_from_toml("[limits]\nmax_input_bytes = 268435457\n"),
        "limits.max_input_bytes out of range",
    )?;
    assert_invalid(
        config_from_toml("[limits]\nmax_vertices = 50000001\n"),
        "limits.max_vertices out of range",
    )?;
    assert_invalid(
        config_from_toml("[limits]\nmax_edges = 200000001\n"),
        "limits.max_edges out of range",
    )
}
