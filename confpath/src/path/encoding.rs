//! Conversion of configuration text into filesystem-native paths.
//!
//! Configuration files are read as UTF-8 text, but the filesystem may expect
//! path bytes in a different charset. [`PathEncoder`] is the seam for that
//! conversion and [`Charset`] is the built-in implementation.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A path in the filesystem's native encoding.
///
/// Produced by a [`PathEncoder`] and never decoded back to text by the
/// resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedPath(PathBuf);

impl EncodedPath {
    /// Wraps a path that is already in native encoding.
    ///
    /// # Examples
    ///
    /// ```
    /// use confpath::path::EncodedPath;
    ///
    /// let home = EncodedPath::from_native("/home/alice");
    /// assert_eq!(home.as_path(), std::path::Path::new("/home/alice"));
    /// ```
    #[must_use]
    pub fn from_native(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Get a reference to the path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Convert into the underlying `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }

    /// Appends a relative suffix.
    ///
    /// An empty suffix leaves the path untouched; in particular no trailing
    /// separator is added.
    #[must_use]
    pub(crate) fn push_relative(mut self, suffix: &EncodedPath) -> Self {
        if !suffix.0.as_os_str().is_empty() {
            self.0.push(&suffix.0);
        }
        self
    }
}

impl AsRef<Path> for EncodedPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for EncodedPath {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&Path> for EncodedPath {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

impl From<&str> for EncodedPath {
    fn from(path: &str) -> Self {
        Self(PathBuf::from(path))
    }
}

/// Text that has no representation in the target charset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("character {character:?} at byte {offset} is not representable in {charset}")]
pub struct EncodingError {
    /// Name of the target charset.
    pub charset: String,
    /// The offending character.
    pub character: char,
    /// Byte offset of the character in the input text.
    pub offset: usize,
}

/// Converts configuration text into a native path.
pub trait PathEncoder: Send + Sync {
    /// Convert `text` into the filesystem's native encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` contains a character that the target
    /// encoding cannot represent.
    fn to_native(&self, text: &str) -> Result<EncodedPath, EncodingError>;
}

/// Filesystem charsets understood by the built-in encoder.
///
/// NUL is never representable, since no filesystem accepts it inside a path.
///
/// # Examples
///
/// ```
/// use confpath::path::{Charset, PathEncoder};
///
/// let charset: Charset = "latin1".parse().unwrap();
/// assert_eq!(charset, Charset::Latin1);
/// assert!(charset.to_native("/music/caf\u{e9}").is_ok());
/// assert!(charset.to_native("/music/\u{4e2d}").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Charset {
    /// UTF-8, the identity conversion.
    #[default]
    Utf8,
    /// ISO-8859-1: code points up to U+00FF, one byte each.
    Latin1,
    /// 7-bit ASCII.
    Ascii,
}

impl Charset {
    /// Highest code point the charset can represent.
    const fn max_code_point(self) -> u32 {
        match self {
            Self::Utf8 => char::MAX as u32,
            Self::Latin1 => 0xFF,
            Self::Ascii => 0x7F,
        }
    }

    fn check(self, text: &str) -> Result<(), EncodingError> {
        let limit = self.max_code_point();
        match text
            .char_indices()
            .find(|&(_, c)| c == '\0' || u32::from(c) > limit)
        {
            Some((offset, character)) => Err(EncodingError {
                charset: self.to_string(),
                character,
                offset,
            }),
            None => Ok(()),
        }
    }

    #[cfg(unix)]
    fn encode(self, text: &str) -> PathBuf {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        match self {
            Self::Utf8 | Self::Ascii => PathBuf::from(text),
            // Every char passed `check`, so it fits in one byte.
            #[allow(clippy::cast_possible_truncation)]
            Self::Latin1 => PathBuf::from(OsString::from_vec(
                text.chars().map(|c| u32::from(c) as u8).collect(),
            )),
        }
    }

    #[cfg(not(unix))]
    fn encode(self, text: &str) -> PathBuf {
        PathBuf::from(text)
    }
}

impl PathEncoder for Charset {
    fn to_native(&self, text: &str) -> Result<EncodedPath, EncodingError> {
        self.check(text)?;
        Ok(EncodedPath(self.encode(text)))
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => write!(f, "UTF-8"),
            Self::Latin1 => write!(f, "ISO-8859-1"),
            Self::Ascii => write!(f, "ASCII"),
        }
    }
}

impl FromStr for Charset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => Ok(Self::Latin1),
            "ascii" | "us-ascii" => Ok(Self::Ascii),
            _ => Err(format!("unsupported filesystem charset: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for Charset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for Charset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
