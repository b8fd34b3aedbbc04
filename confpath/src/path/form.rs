//! Classification of raw path text by its leading characters.

/// The syntactic shape of a raw configuration path.
///
/// # Examples
///
/// ```
/// use confpath::path::PathForm;
///
/// assert_eq!(PathForm::classify("~"), PathForm::CurrentHome { remainder: "" });
/// assert_eq!(
///     PathForm::classify("~alice/music"),
///     PathForm::UserHome { user: "alice", remainder: "/music" }
/// );
/// assert_eq!(PathForm::classify("/var/lib"), PathForm::Plain);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathForm<'a> {
    /// `~` or `~/rest`. The remainder starts at the first `/`, or is empty.
    CurrentHome {
        /// Text after the leading `~`.
        remainder: &'a str,
    },

    /// `~user` or `~user/rest`.
    UserHome {
        /// The embedded user name, never empty.
        user: &'a str,
        /// Text from the first `/` onward, or empty.
        remainder: &'a str,
    },

    /// Anything not starting with `~`.
    Plain,
}

impl<'a> PathForm<'a> {
    /// Classify `raw`.
    #[must_use]
    pub fn classify(raw: &'a str) -> Self {
        let Some(rest) = raw.strip_prefix('~') else {
            return Self::Plain;
        };

        if rest.is_empty() || rest.starts_with('/') {
            return Self::CurrentHome { remainder: rest };
        }

        match rest.find('/') {
            Some(slash) => Self::UserHome {
                user: &rest[..slash],
                remainder: &rest[slash..],
            },
            None => Self::UserHome {
                user: rest,
                remainder: "",
            },
        }
    }

    /// Whether the form substitutes a home directory.
    #[must_use]
    pub fn is_tilde(&self) -> bool {
        !matches!(self, Self::Plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_tilde() {
        assert_eq!(
            PathForm::classify("~"),
            PathForm::CurrentHome { remainder: "" }
        );
    }

    #[test]
    fn test_tilde_slash() {
        assert_eq!(
            PathForm::classify("~/music/rock"),
            PathForm::CurrentHome {
                remainder: "/music/rock"
            }
        );
    }

    #[test]
    fn test_user_without_remainder() {
        assert_eq!(
            PathForm::classify("~bob"),
            PathForm::UserHome {
                user: "bob",
                remainder: ""
            }
        );
    }

    #[test]
    fn test_user_with_doubled_separator() {
        assert_eq!(
            PathForm::classify("~bob//x"),
            PathForm::UserHome {
                user: "bob",
                remainder: "//x"
            }
        );
    }

    #[test]
    fn test_tilde_only_counts_at_start() {
        assert_eq!(PathForm::classify("/home/~bob"), PathForm::Plain);
        assert_eq!(PathForm::classify("music/~"), PathForm::Plain);
        assert_eq!(PathForm::classify(""), PathForm::Plain);
    }

    #[test]
    fn test_user_name_may_contain_tilde_and_dots() {
        assert_eq!(
            PathForm::classify("~~x.y/z"),
            PathForm::UserHome {
                user: "~x.y",
                remainder: "/z"
            }
        );
    }

    #[test]
    fn test_is_tilde() {
        assert!(PathForm::classify("~").is_tilde());
        assert!(PathForm::classify("~bob").is_tilde());
        assert!(!PathForm::classify("/bob").is_tilde());
    }
}
