// crates/algokit-core/src/strings/lsd.rs
// ============================================================================
// Module: LSD String Sort
// Description: Least-significant-digit-first radix sort on fixed-width keys.
// Purpose: Linear-time sort for equal-length keys such as plates or codes.
// Dependencies: crate::error, crate::strings::key_indexed
// ============================================================================

//! Runs one stable key-indexed counting pass per byte position, from the
//! last of the leading `w` bytes to the first. Bytes beyond `w` are ignored,
//! so strings equal on their first `w` bytes keep their input order.

use crate::error::AlgoError;
use crate::error::AlgoResult;
use crate::strings::key_indexed::sort_by_key;

/// Number of distinct byte values.
const BYTE_RADIX: usize = 256;

/// Sorts `a` on the leading `w` bytes of each string.
///
/// # Errors
///
/// Returns [`AlgoError::StringTooShort`] naming the first string shorter than
/// `w` bytes; `a` is left unchanged.
pub fn sort(a: &mut [&str], w: usize) -> AlgoResult<()> {
    if let Some(index) = a.iter().position(|s| s.len() < w) {
        return Err(AlgoError::StringTooShort {
            index,
            width: w,
        });
    }
    for d in (0 .. w).rev() {
        sort_by_key(a, BYTE_RADIX, |s| s.as_bytes().get(d).map_or(0, |&b| usize::from(b)))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::sort;
    use crate::error::AlgoError;

    #[test]
    fn sorts_license_plates() -> Result<(), AlgoError> {
        let mut plates = vec![
            "4PGC938", "2IYE230", "3CIO720", "1ICK750", "1OHV845", "4JZY524", "1ICK750", "3CIO720",
            "1OHV845", "1OHV845", "2RLA629", "2RLA629", "3ATW723",
        ];
        sort(&mut plates, 7)?;
        assert_eq!(
            plates,
            vec![
                "1ICK750", "1ICK750", "1OHV845", "1OHV845", "1OHV845", "2IYE230", "2RLA629",
                "2RLA629", "3ATW723", "3CIO720", "3CIO720", "4JZY524", "4PGC938",
            ]
        );
        Ok(())
    }

    #[test]
    fn prefix_ties_keep_input_order() -> Result<(), AlgoError> {
        let mut codes = vec!["b9", "a2", "b1", "a1"];
        sort(&mut codes, 1)?;
        assert_eq!(codes, vec!["a2", "a1", "b9", "b1"]);
        assert_eq!(
            sort(&mut codes, 3),
            Err(AlgoError::StringTooShort {
                index: 0,
                width: 3,
            })
        );
        Ok(())
    }
}
