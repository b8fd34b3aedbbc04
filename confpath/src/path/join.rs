//! Joining a home directory with the remainder of a tilde path.

use crate::path::encoding::{EncodedPath, EncodingError, PathEncoder};

/// Join `base` with the text following a `~` or `~user` prefix.
///
/// Leading separators of `remainder` are dropped, so `~bob`, `~bob/` and
/// `~bob//` all yield `base` itself, and `~bob//x` yields `base/x`. The rest of
/// the remainder is appended verbatim; `.` and `..` are not interpreted.
///
/// # Errors
///
/// Returns an error if the remainder cannot be encoded.
///
/// # Examples
///
/// ```
/// use confpath::path::{join, Charset, EncodedPath};
/// use std::path::Path;
///
/// let home = EncodedPath::from_native("/home/bob");
/// let joined = join::join(home.clone(), "/music", &Charset::Utf8).unwrap();
/// assert_eq!(joined.as_path(), Path::new("/home/bob/music"));
///
/// let same = join::join(home.clone(), "", &Charset::Utf8).unwrap();
/// assert_eq!(same, home);
/// ```
pub fn join(
    base: EncodedPath,
    remainder: &str,
    encoder: &dyn PathEncoder,
) -> Result<EncodedPath, EncodingError> {
    let suffix = encoder.to_native(remainder.trim_start_matches('/'))?;
    Ok(base.push_relative(&suffix))
}
