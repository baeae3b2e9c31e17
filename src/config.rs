//! Options that change how a document is parsed.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A set of behavior flags, fixed for one parse call. Flags are combined
/// with `|`:
///
/// ```
/// use inplace_xml::Flags;
///
/// let flags = Flags::TRIM_SPACE | Flags::NORMALIZE_SPACE;
/// assert!(flags.contains(Flags::TRIM_SPACE));
/// assert!(!flags.contains(Flags::ENTITY_TRANSLATION));
/// ```
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde-types", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde-types", serde(from = "u32", into = "u32"))]
pub struct Flags(u32);

impl Flags {
    /// No flags: text is reported verbatim, references are not decoded and
    /// closing tags are checked against the opened element.
    pub const NONE: Flags = Flags(0x0000_0000);
    /// Skip whitespace before text runs and strip it from their end. Text
    /// consisting only of whitespace is not reported at all.
    pub const TRIM_SPACE: Flags = Flags(0x0000_0001);
    /// Collapse each run of whitespace inside text into one space.
    pub const NORMALIZE_SPACE: Flags = Flags(0x0000_0002);
    /// Decode entity and character references in text and attribute values.
    pub const ENTITY_TRANSLATION: Flags = Flags(0x0000_0004);
    /// Report closing tags with whatever name they have, without comparing it
    /// to the name of the opened element. The handler becomes responsible for
    /// the check.
    ///
    /// Note, that despite the name, setting this flag turns the built-in
    /// validation of closing tags *off*.
    pub const CLOSING_TAG_VALIDATE: Flags = Flags(0x0000_0008);

    /// The recommended combination: [`TRIM_SPACE`] | [`ENTITY_TRANSLATION`].
    ///
    /// [`TRIM_SPACE`]: Self::TRIM_SPACE
    /// [`ENTITY_TRANSLATION`]: Self::ENTITY_TRANSLATION
    pub const DEFAULT: Flags = Flags(Self::TRIM_SPACE.0 | Self::ENTITY_TRANSLATION.0);

    const ALL: [(Flags, &'static str); 4] = [
        (Self::TRIM_SPACE, "TRIM_SPACE"),
        (Self::NORMALIZE_SPACE, "NORMALIZE_SPACE"),
        (Self::ENTITY_TRANSLATION, "ENTITY_TRANSLATION"),
        (Self::CLOSING_TAG_VALIDATE, "CLOSING_TAG_VALIDATE"),
    ];
    const MASK: u32 = 0x0000_000F;

    /// Returns `true` if all flags of `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Sets all flags of `other`.
    #[inline]
    pub fn insert(&mut self, other: Flags) {
        self.0 |= other.0;
    }

    /// Clears all flags of `other`.
    #[inline]
    pub fn remove(&mut self, other: Flags) {
        self.0 &= !other.0;
    }

    /// Sets or clears all flags of `other`.
    #[inline]
    pub fn set(&mut self, other: Flags, value: bool) {
        if value {
            self.insert(other);
        } else {
            self.remove(other);
        }
    }

    /// Raw bits of the set.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Creates a set from raw bits, dropping bits that do not correspond to
    /// any flag.
    #[inline]
    pub const fn from_bits_truncate(bits: u32) -> Flags {
        Flags(bits & Self::MASK)
    }
}

impl BitOr for Flags {
    type Output = Flags;

    #[inline]
    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl From<u32> for Flags {
    #[inline]
    fn from(bits: u32) -> Self {
        Flags::from_bits_truncate(bits)
    }
}

impl From<Flags> for u32 {
    #[inline]
    fn from(flags: Flags) -> Self {
        flags.0
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Flags::NONE {
            return f.write_str("NONE");
        }
        let mut first = true;
        for (flag, name) in Flags::ALL {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////

/// Default value of [`Config::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// A struct that holds a parser configuration.
///
/// The [`Default`] configuration uses [`Flags::DEFAULT`] and limits element
/// nesting by [`DEFAULT_MAX_DEPTH`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde-types", derive(serde::Deserialize, serde::Serialize))]
#[non_exhaustive]
pub struct Config {
    /// Behavior flags.
    ///
    /// Default: [`Flags::DEFAULT`]
    pub flags: Flags,

    /// The deepest element nesting that is accepted. The root element has a
    /// depth of 1. A document with deeper nesting fails with
    /// [`SyntaxErrorKind::TooDeep`].
    ///
    /// Nesting does not consume the thread stack, so the limit only bounds the
    /// memory spent on the names of open elements. `None` removes the limit.
    ///
    /// Default: `Some(`[`DEFAULT_MAX_DEPTH`]`)`
    ///
    /// [`SyntaxErrorKind::TooDeep`]: crate::errors::SyntaxErrorKind::TooDeep
    pub max_depth: Option<usize>,
}

impl Config {
    /// Set or clear [`Flags::TRIM_SPACE`].
    #[inline]
    pub fn trim_space(&mut self, value: bool) -> &mut Self {
        self.flags.set(Flags::TRIM_SPACE, value);
        self
    }

    /// Set or clear [`Flags::NORMALIZE_SPACE`].
    #[inline]
    pub fn normalize_space(&mut self, value: bool) -> &mut Self {
        self.flags.set(Flags::NORMALIZE_SPACE, value);
        self
    }

    /// Set or clear [`Flags::ENTITY_TRANSLATION`].
    #[inline]
    pub fn entity_translation(&mut self, value: bool) -> &mut Self {
        self.flags.set(Flags::ENTITY_TRANSLATION, value);
        self
    }

    /// Set or clear [`Flags::CLOSING_TAG_VALIDATE`].
    #[inline]
    pub fn closing_tag_validate(&mut self, value: bool) -> &mut Self {
        self.flags.set(Flags::CLOSING_TAG_VALIDATE, value);
        self
    }

    /// Set [`Self::max_depth`].
    #[inline]
    pub fn max_depth(&mut self, value: Option<usize>) -> &mut Self {
        self.max_depth = value;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            flags: Flags::DEFAULT,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl From<Flags> for Config {
    fn from(flags: Flags) -> Self {
        Self {
            flags,
            ..Self::default()
        }
    }
}
