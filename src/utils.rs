use std::fmt::{self, Debug, Formatter};

/// Writes a byte string as a quoted literal: printable ASCII is written as
/// is, `"` is escaped and everything else is written as a hex number.
pub fn write_byte_string(f: &mut Formatter<'_>, byte_string: &[u8]) -> fmt::Result {
    write!(f, "\"")?;
    for b in byte_string {
        match *b {
            32..=33 | 35..=126 => write!(f, "{}", *b as char)?,
            34 => write!(f, "\\\"")?,
            _ => write!(f, "{:#02X}", b)?,
        }
    }
    write!(f, "\"")?;
    Ok(())
}

/// Wrapper around a borrowed byte slice with a readable `Debug` output.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Bytes<'a>(pub &'a [u8]);

impl<'a> Debug for Bytes<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_byte_string(f, self.0)
    }
}

impl<'a> PartialEq<[u8]> for Bytes<'a> {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl<'a, const N: usize> PartialEq<[u8; N]> for Bytes<'a> {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.0 == other
    }
}
