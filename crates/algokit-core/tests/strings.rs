// crates/algokit-core/tests/strings.rs
// ============================================================================
// Module: String Sort Tests
// Description: Alphabets, key-indexed counting and the radix string sorts.
// Purpose: Check digit mapping and the ordering guarantees of each sort.
// Dependencies: algokit_core::strings
// ============================================================================
//! ## Overview
//! Exercises the public string-processing surface with the classic
//! section-assignment, license-plate and word-list inputs.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use algokit_core::AlgoError;
use algokit_core::strings::Alphabet;
use algokit_core::strings::key_indexed;
use algokit_core::strings::lsd;
use algokit_core::strings::msd;
use support::TestResult;
use support::ensure;

// ============================================================================
// SECTION: Alphabets
// ============================================================================

/// Predefined alphabets report their radix and digit width.
#[test]
fn predefined_alphabets() -> TestResult {
    ensure(Alphabet::binary().radix() == 2 && Alphabet::binary().lg_r() == 1, "binary")?;
    ensure(Alphabet::decimal().radix() == 10 && Alphabet::decimal().lg_r() == 4, "decimal")?;
    ensure(Alphabet::lowercase().radix() == 26 && Alphabet::lowercase().lg_r() == 5, "lowercase")?;
    let dna = Alphabet::dna();
    ensure(dna.radix() == 4 && dna.lg_r() == 2, "dna")?;
    ensure(dna.to_indices("ACGT")? == [0, 1, 2, 3], "dna digits in order")?;
    ensure(Alphabet::uppercase().to_index('Z')? == 25, "uppercase Z")?;
    Ok(())
}

/// Alphabet construction and lookups report bad input.
#[test]
fn alphabet_errors() -> TestResult {
    ensure(Alphabet::new("ABCA") == Err(AlgoError::RepeatedCharacter('A')), "repeat")?;
    let dna = Alphabet::dna();
    ensure(dna.to_index('U') == Err(AlgoError::CharacterNotInAlphabet('U')), "missing char")?;
    ensure(dna.to_indices("GATTACA").is_ok(), "valid strand")?;
    ensure(dna.to_indices("GAUUACA").is_err(), "RNA strand")?;
    ensure(
        dna.to_char(4)
            == Err(AlgoError::IndexOutOfBounds {
                index: 4,
                bound: 4,
            }),
        "digit past the radix",
    )?;
    let round_trip = dna.to_chars(&dna.to_indices("GATTACA")?)?;
    ensure(round_trip == "GATTACA", "digits map back to the strand")?;
    Ok(())
}

// ============================================================================
// SECTION: Key-Indexed Counting
// ============================================================================

/// Students sort by section while keeping name order within each section.
#[test]
fn key_indexed_counting_is_stable() -> TestResult {
    let mut students = vec![
        ("Anderson", 2),
        ("Brown", 3),
        ("Davis", 3),
        ("Garcia", 4),
        ("Harris", 1),
        ("Jackson", 3),
        ("Johnson", 4),
        ("Jones", 3),
        ("Martin", 1),
        ("Martinez", 2),
        ("Miller", 2),
        ("Moore", 1),
    ];
    key_indexed::sort_by_key(&mut students, 5, |&(_, section)| section)?;
    let names: Vec<&str> = students.iter().map(|&(name, _)| name).collect();
    ensure(
        names
            == [
                "Harris", "Martin", "Moore", "Anderson", "Martinez", "Miller", "Brown", "Davis",
                "Jackson", "Jones", "Garcia", "Johnson",
            ],
        "sections ascend and names keep input order",
    )?;
    Ok(())
}

/// Keys outside the radix leave the input untouched.
#[test]
fn key_out_of_radix() -> TestResult {
    let mut keys = vec![3, 1, 9, 0];
    ensure(
        key_indexed::sort(&mut keys, 5)
            == Err(AlgoError::KeyOutOfRadix {
                key: 9,
                radix: 5,
            }),
        "9 is not below radix 5",
    )?;
    ensure(keys == [3, 1, 9, 0], "input unchanged on error")?;
    key_indexed::sort(&mut keys, 10)?;
    ensure(keys == [0, 1, 3, 9], "sorted with a wide enough radix")?;
    Ok(())
}

// ============================================================================
// SECTION: Radix Sorts
// ============================================================================

/// LSD and MSD agree on fixed-width keys.
#[test]
fn lsd_and_msd_agree_on_plates() -> TestResult {
    let plates = [
        "4PGC938", "2IYE230", "3CIO720", "1ICK750", "1OHV845", "4JZY524", "1ICK750", "3CIO720",
        "1OHV845", "1OHV845", "2RLA629", "2RLA629", "3ATW723",
    ];
    let mut by_lsd = plates.to_vec();
    lsd::sort(&mut by_lsd, 7)?;
    let mut by_msd = plates.to_vec();
    msd::sort(&mut by_msd);
    let mut expected = plates.to_vec();
    expected.sort_unstable();
    ensure(by_lsd == expected, "lsd sorts plates")?;
    ensure(by_msd == expected, "msd sorts plates")?;
    Ok(())
}

/// LSD reports the first string shorter than the width.
#[test]
fn lsd_rejects_short_strings() -> TestResult {
    let mut words = vec!["abc", "de", "fgh"];
    ensure(
        lsd::sort(&mut words, 3)
            == Err(AlgoError::StringTooShort {
                index: 1,
                width: 3,
            }),
        "second string is too short",
    )?;
    ensure(words == ["abc", "de", "fgh"], "input unchanged on error")?;
    lsd::sort(&mut words, 0)?;
    ensure(words == ["abc", "de", "fgh"], "zero width is a no-op")?;
    Ok(())
}

/// MSD handles prefixes, empty strings and partitions beyond the cutoff.
#[test]
fn msd_orders_prefixes_first() -> TestResult {
    let mut words = vec!["she", "", "sh", "s", "shells", "shell", "", "sea"];
    msd::sort(&mut words);
    ensure(words == ["", "", "s", "sea", "sh", "she", "shell", "shells"], "prefixes first")?;
    let owned: Vec<String> =
        (0 .. 3 * msd::CUTOFF).map(|i| format!("k{:03}", (i * 17) % 100)).collect();
    let mut large: Vec<&str> = owned.iter().map(String::as_str).collect();
    let mut expected = large.clone();
    expected.sort_unstable();
    msd::sort(&mut large);
    ensure(large == expected, "partition above the cutoff")?;
    Ok(())
}
