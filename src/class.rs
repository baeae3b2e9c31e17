//! Byte classes used to scan spans of the document.
//!
//! Every class is a 256-entry table computed at compile time, so checking a
//! byte is a single lookup.

/// A set of bytes, stored as a membership table indexed by byte value.
#[derive(Clone)]
pub struct ByteClass {
    table: [bool; 256],
}

impl ByteClass {
    /// Creates a class that contains only the listed bytes.
    pub const fn including(bytes: &[u8]) -> Self {
        let mut table = [false; 256];
        let mut i = 0;
        while i < bytes.len() {
            table[bytes[i] as usize] = true;
            i += 1;
        }
        Self { table }
    }

    /// Creates a class that contains all bytes except the listed ones.
    pub const fn excluding(bytes: &[u8]) -> Self {
        let mut table = [true; 256];
        let mut i = 0;
        while i < bytes.len() {
            table[bytes[i] as usize] = false;
            i += 1;
        }
        Self { table }
    }

    /// Checks whether `byte` belongs to this class.
    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        self.table[byte as usize]
    }

    /// Returns the length of the longest prefix of `bytes` consisting of
    /// bytes of this class.
    #[inline]
    pub fn span(&self, bytes: &[u8]) -> usize {
        bytes
            .iter()
            .position(|&b| !self.contains(b))
            .unwrap_or(bytes.len())
    }
}

impl std::fmt::Debug for ByteClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let members = self.table.iter().filter(|&&m| m).count();
        f.debug_struct("ByteClass")
            .field("members", &members)
            .finish()
    }
}

/// XML whitespace: `\t`, `\n`, `\r` and space.
pub static SPACE: ByteClass = ByteClass::including(b"\t\n\r ");
/// Element names and processing instruction targets.
pub static NAME: ByteClass = ByteClass::excluding(b"\0\t\n\r />?");
pub static ATTRIBUTE_NAME: ByteClass = ByteClass::excluding(b"\0\t\n\r !/<=>?");

/// Content of a `"`-quoted value.
pub static DOUBLE_QUOTED: ByteClass = ByteClass::excluding(b"\0\"");
/// Content of a `"`-quoted value up to the next reference.
pub static DOUBLE_QUOTED_NO_REF: ByteClass = ByteClass::excluding(b"\0\"&");
/// Content of a `'`-quoted value.
pub static SINGLE_QUOTED: ByteClass = ByteClass::excluding(b"\0'");
/// Content of a `'`-quoted value up to the next reference.
pub static SINGLE_QUOTED_NO_REF: ByteClass = ByteClass::excluding(b"\0&'");

pub static TEXT: ByteClass = ByteClass::excluding(b"\0<");
pub static TEXT_NO_SPACE: ByteClass = ByteClass::excluding(b"\0\t\n\r <");
pub static TEXT_NO_REF: ByteClass = ByteClass::excluding(b"\0&<");
pub static TEXT_NO_SPACE_REF: ByteClass = ByteClass::excluding(b"\0\t\n\r &<");

/// Checks whether `byte` is XML whitespace.
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    SPACE.contains(byte)
}

////////////////////////////////////////////////////////////////////////////////////////////////////

/// Marks bytes that are not digits in a [`DigitTable`].
pub const NOT_A_DIGIT: u8 = 255;

/// Maps bytes to their digit value in some base, or to [`NOT_A_DIGIT`].
#[derive(Clone)]
pub struct DigitTable {
    table: [u8; 256],
    base: u32,
}

impl DigitTable {
    const fn new(base: u32) -> Self {
        let mut table = [NOT_A_DIGIT; 256];
        let mut b = 0;
        while b < 256 {
            let value = match b as u8 {
                c @ b'0'..=b'9' => c - b'0',
                c @ b'a'..=b'f' => c - b'a' + 10,
                c @ b'A'..=b'F' => c - b'A' + 10,
                _ => NOT_A_DIGIT,
            };
            if value != NOT_A_DIGIT && (value as u32) < base {
                table[b] = value;
            }
            b += 1;
        }
        Self { table, base }
    }

    /// Returns the value of `byte` as a digit, or [`NOT_A_DIGIT`].
    #[inline]
    pub fn value(&self, byte: u8) -> u8 {
        self.table[byte as usize]
    }

    /// The base of the digits in this table.
    #[inline]
    pub fn base(&self) -> u32 {
        self.base
    }
}

pub static DECIMAL: DigitTable = DigitTable::new(10);
pub static HEXADECIMAL: DigitTable = DigitTable::new(16);
