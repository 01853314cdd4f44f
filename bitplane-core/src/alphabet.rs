//! The bidirectional symbol table used to turn text into codes, and back again.
//!
//! Codes are 1-based positions within the alphabet. The code `0` is reserved
//! as the message terminator and is never assigned to a symbol.

use crate::{
    bit_plane::MAX_TRIPLE_VALUE,
    error::{Error, Result},
};

use std::num::NonZeroU8;

/// The code that marks the end of an encoded message.
pub const TERMINATOR: u8 = 0;
/// The maximum number of symbols an alphabet may hold.
pub const MAX_SYMBOLS: usize = MAX_TRIPLE_VALUE as usize;

/// The symbols of the standard alphabet, in code order.
const STANDARD_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ ";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alphabet {
    symbols: Vec<char>,
    /// Whether input text should be converted to uppercase before it is encoded.
    fold_case: bool,
}

impl Alphabet {
    /// Create a custom alphabet.
    ///
    /// # Arguments
    ///
    /// * `symbols` - The symbols of the alphabet. The first symbol is assigned the code 1.
    /// * `fold_case` - Whether input text should be uppercased before encoding.
    ///
    /// `Note:` when `fold_case` is set, every symbol must already be in its
    /// uppercase form, otherwise it could never be matched.
    ///
    pub fn new(symbols: &str, fold_case: bool) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(Error::AlphabetEmpty);
        }

        if symbols.len() > MAX_SYMBOLS {
            return Err(Error::AlphabetTooLarge);
        }

        for (i, c) in symbols.iter().enumerate() {
            if symbols[..i].contains(c) {
                return Err(Error::AlphabetDuplicate(*c));
            }

            if fold_case && !c.to_uppercase().eq(std::iter::once(*c)) {
                return Err(Error::AlphabetSymbolUnreachable(*c));
            }
        }

        Ok(Self { symbols, fold_case })
    }

    /// The standard alphabet: `A` to `Z` as 1 to 26, and space as 27.
    pub fn standard() -> Self {
        Self {
            symbols: STANDARD_SYMBOLS.chars().collect(),
            fold_case: true,
        }
    }

    /// The number of symbols within the alphabet.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get the code assigned to a symbol, if the symbol is part of the alphabet.
    pub fn code_of(&self, symbol: char) -> Option<NonZeroU8> {
        let index = self.symbols.iter().position(|&s| s == symbol)?;

        // The alphabet is never larger than 63 symbols, so this will always fit.
        NonZeroU8::new((index + 1) as u8)
    }

    /// Get the symbol assigned to a code, if any.
    pub fn symbol_of(&self, code: u8) -> Option<char> {
        let index = (code as usize).checked_sub(1)?;
        self.symbols.get(index).copied()
    }

    /// Encode a string of text into a [`Message`].
    ///
    /// The whole string is rejected if any character cannot be represented.
    ///
    /// `Note:` case folding uses the full Unicode uppercase mapping, which may
    /// expand a single character into several. For example `ß` becomes `SS`,
    /// so the message can hold more symbols than `text` has characters. Use
    /// [`Message::encoded_len`] rather than the length of the text when
    /// checking capacity.
    ///
    /// # Arguments
    ///
    /// * `text` - The text to be encoded.
    ///
    pub fn encode(&self, text: &str) -> Result<Message> {
        let mut codes = Vec::with_capacity(text.len());

        let mut push = |c: char| -> Result<()> {
            let code = self.code_of(c).ok_or(Error::CharacterUnsupported(c))?;
            codes.push(code);
            Ok(())
        };

        if self.fold_case {
            text.chars().flat_map(char::to_uppercase).try_for_each(&mut push)?;
        } else {
            text.chars().try_for_each(&mut push)?;
        }

        Ok(Message { codes })
    }

    /// Decode a sequence of codes into a string.
    ///
    /// Decoding stops at the first terminator, which is not emitted. Any code
    /// that has no symbol will cause decoding to fail.
    ///
    /// # Arguments
    ///
    /// * `codes` - The codes to be decoded.
    ///
    pub fn decode(&self, codes: &[u8]) -> Result<String> {
        codes
            .iter()
            .take_while(|&&code| code != TERMINATOR)
            .map(|&code| self.symbol_of(code).ok_or(Error::CodeUnknown(code)))
            .collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

/// An encoded message.
///
/// The terminator is not stored with the symbols, it is only appended when
/// the message is serialised with [`Message::to_codes`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Message {
    codes: Vec<NonZeroU8>,
}

impl Message {
    /// The number of symbols in the message, excluding the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The number of codes needed to store the message, including the terminator.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        self.codes.len() + 1
    }

    /// Serialise the message, appending the terminator.
    pub fn to_codes(&self) -> Vec<u8> {
        self.codes
            .iter()
            .map(|c| c.get())
            .chain(std::iter::once(TERMINATOR))
            .collect()
    }
}
