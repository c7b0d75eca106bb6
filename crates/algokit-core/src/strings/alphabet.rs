// crates/algokit-core/src/strings/alphabet.rs
// ============================================================================
// Module: Alphabets
// Description: Character sets with dense index mappings.
// Purpose: Translate between characters and radix digits for string sorts.
// Dependencies: crate::error
// ============================================================================

//! ## Overview
//! An [`Alphabet`] assigns each of its `R` characters a digit in `0 .. R`, in
//! the order the characters were given. Any Unicode scalar value may appear.
//!
//! ## Invariants
//! - No character appears twice.
//! - `to_char(to_index(c)) == c` for every member `c`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

use crate::error::AlgoError;
use crate::error::AlgoResult;
use crate::error::check_index;

// ============================================================================
// SECTION: Alphabet
// ============================================================================

/// Ordered set of characters with digit lookup in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    /// Characters by digit.
    chars: Vec<char>,
    /// Digit by character.
    digits: HashMap<char, usize>,
}

impl Alphabet {
    /// Creates an alphabet from the characters of `chars`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::RepeatedCharacter`] when a character repeats.
    pub fn new(chars: &str) -> AlgoResult<Self> {
        let mut digits = HashMap::new();
        for (digit, c) in chars.chars().enumerate() {
            if digits.insert(c, digit).is_some() {
                return Err(AlgoError::RepeatedCharacter(c));
            }
        }
        Ok(Self {
            chars: chars.chars().collect(),
            digits,
        })
    }

    /// Builds an alphabet from characters known to be distinct.
    fn from_distinct(chars: impl Iterator<Item = char>) -> Self {
        let chars: Vec<char> = chars.collect();
        let digits = chars.iter().enumerate().map(|(digit, &c)| (c, digit)).collect();
        Self {
            chars,
            digits,
        }
    }

    /// The binary alphabet `01`.
    #[must_use]
    pub fn binary() -> Self {
        Self::from_distinct("01".chars())
    }

    /// The decimal alphabet `0123456789`.
    #[must_use]
    pub fn decimal() -> Self {
        Self::from_distinct('0' ..= '9')
    }

    /// The lowercase alphabet `a` to `z`.
    #[must_use]
    pub fn lowercase() -> Self {
        Self::from_distinct('a' ..= 'z')
    }

    /// The uppercase alphabet `A` to `Z`.
    #[must_use]
    pub fn uppercase() -> Self {
        Self::from_distinct('A' ..= 'Z')
    }

    /// The nucleotide alphabet `ACGT`.
    #[must_use]
    pub fn dna() -> Self {
        Self::from_distinct("ACGT".chars())
    }

    /// Returns the number of characters.
    #[must_use]
    pub const fn radix(&self) -> usize {
        self.chars.len()
    }

    /// Returns the number of bits needed to represent a digit.
    #[must_use]
    pub fn lg_r(&self) -> u32 {
        usize::BITS - self.radix().saturating_sub(1).leading_zeros()
    }

    /// Returns true when `c` is in the alphabet.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.digits.contains_key(&c)
    }

    /// Returns the digit of `c`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::CharacterNotInAlphabet`] for a non-member.
    pub fn to_index(&self, c: char) -> AlgoResult<usize> {
        self.digits.get(&c).copied().ok_or(AlgoError::CharacterNotInAlphabet(c))
    }

    /// Returns the digits of every character of `s`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::CharacterNotInAlphabet`] for the first non-member.
    pub fn to_indices(&self, s: &str) -> AlgoResult<Vec<usize>> {
        s.chars().map(|c| self.to_index(c)).collect()
    }

    /// Returns the character with digit `index`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::IndexOutOfBounds`] unless `index < radix()`.
    pub fn to_char(&self, index: usize) -> AlgoResult<char> {
        check_index(index, self.radix())?;
        Ok(self.chars[index])
    }

    /// Returns the characters for every digit in `indices`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::IndexOutOfBounds`] for the first invalid digit.
    pub fn to_chars(&self, indices: &[usize]) -> AlgoResult<String> {
        indices.iter().map(|&index| self.to_char(index)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Alphabet;
    use crate::error::AlgoError;

    #[test]
    fn maps_both_directions() -> Result<(), AlgoError> {
        let alphabet = Alphabet::new("ABCDR")?;
        assert!(alphabet.contains('A'));
        assert!(!alphabet.contains('a'));
        assert_eq!(alphabet.to_char(0)?, 'A');
        assert_eq!(alphabet.to_index('B')?, 1);
        assert_eq!(alphabet.to_indices("AABB")?, vec![0, 0, 1, 1]);
        assert_eq!(alphabet.to_chars(&[2, 3])?, "CD");
        assert_eq!(alphabet.lg_r(), 3);
        Ok(())
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(Alphabet::new("ABCA"), Err(AlgoError::RepeatedCharacter('A')));
        let dna = Alphabet::dna();
        assert_eq!(dna.to_index('U'), Err(AlgoError::CharacterNotInAlphabet('U')));
        assert!(dna.to_char(4).is_err());
    }

    #[test]
    fn predefined_radixes() {
        assert_eq!(Alphabet::binary().lg_r(), 1);
        assert_eq!(Alphabet::decimal().radix(), 10);
        assert_eq!(Alphabet::lowercase().lg_r(), 5);
        assert_eq!(Alphabet::uppercase().radix(), 26);
    }
}
