//! Platform-style format string rendering.
//!
//! Format strings follow printf syntax extended with a privacy flag:
//! `%{public}s` shows its argument, `%{private}s` masks it, and a bare
//! `%s` is treated as private. Arguments arrive pre-stringified, so every
//! conversion inserts its argument verbatim; flags, width, precision and
//! length modifiers are accepted but have no effect on the output.

/// Replacement text for a masked argument.
pub const PRIVATE_MASK: &str = "<private>";

const PUBLIC_FLAG: &[u8] = b"{public}";
const PRIVATE_FLAG: &[u8] = b"{private}";
const FLAG_CHARS: &[u8] = b"-+ #0";
const LENGTH_CHARS: &[u8] = b"hlLzjtq";
const CONVERSION_CHARS: &[u8] = b"diuoxXfFeEgGaAcsp";

/// Visibility of a single conversion's argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privacy {
    Public,
    Private,
    /// No flag given; the platform treats these as private.
    Unspecified,
}

impl Privacy {
    fn is_visible(self, reveal_private: bool) -> bool {
        match self {
            Privacy::Public => true,
            Privacy::Private | Privacy::Unspecified => reveal_private,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Directive {
    /// `%%`
    Percent,
    /// A conversion spanning `len` bytes, including the leading `%`.
    Conversion { privacy: Privacy, len: usize },
}

/// Render `format`, substituting `args` positionally.
///
/// Conversions without a remaining argument are left as literal text and
/// surplus arguments are ignored. A `%` that does not start a valid
/// conversion is copied through unchanged.
///
/// # Example
///
/// ```
/// use settingsdata_log::log::render;
///
/// assert_eq!(render("value=%{public}d", &["5"], false), "value=5");
/// assert_eq!(render("user=%{private}s", &["bob"], false), "user=<private>");
/// assert_eq!(render("user=%s", &["bob"], true), "user=bob");
/// ```
pub fn render(format: &str, args: &[&str], reveal_private: bool) -> String {
    let bytes = format.as_bytes();
    let mut out = String::with_capacity(format.len() + args.iter().map(|a| a.len()).sum::<usize>());
    let mut args = args.iter();
    let mut literal_start = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        if bytes[idx] != b'%' {
            idx += 1;
            continue;
        }

        out.push_str(&format[literal_start..idx]);
        match parse_directive(&bytes[idx..]) {
            Some(Directive::Percent) => {
                out.push('%');
                idx += 2;
            }
            Some(Directive::Conversion { privacy, len }) => {
                match args.next() {
                    Some(arg) if privacy.is_visible(reveal_private) => out.push_str(arg),
                    Some(_) => out.push_str(PRIVATE_MASK),
                    None => out.push_str(&format[idx..idx + len]),
                }
                idx += len;
            }
            None => {
                out.push('%');
                idx += 1;
            }
        }
        literal_start = idx;
    }

    out.push_str(&format[literal_start..]);
    out
}

/// Parse the directive at the start of `bytes`, which begins with `%`.
///
/// Every byte a directive spans is ASCII, so its length is always a valid
/// char boundary offset.
fn parse_directive(bytes: &[u8]) -> Option<Directive> {
    if bytes.get(1) == Some(&b'%') {
        return Some(Directive::Percent);
    }

    let mut pos = 1;
    let privacy = if bytes[pos..].starts_with(PUBLIC_FLAG) {
        pos += PUBLIC_FLAG.len();
        Privacy::Public
    } else if bytes[pos..].starts_with(PRIVATE_FLAG) {
        pos += PRIVATE_FLAG.len();
        Privacy::Private
    } else {
        Privacy::Unspecified
    };

    pos += count_while(&bytes[pos..], |b| FLAG_CHARS.contains(&b));
    pos += count_while(&bytes[pos..], |b| b.is_ascii_digit());
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        pos += count_while(&bytes[pos..], |b| b.is_ascii_digit());
    }
    // At most two length characters (`hh`, `ll`).
    pos += count_while(&bytes[pos..], |b| LENGTH_CHARS.contains(&b)).min(2);

    match bytes.get(pos) {
        Some(c) if CONVERSION_CHARS.contains(c) => Some(Directive::Conversion {
            privacy,
            len: pos + 1,
        }),
        _ => None,
    }
}

fn count_while(bytes: &[u8], pred: impl Fn(u8) -> bool) -> usize {
    bytes.iter().take_while(|&&b| pred(b)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(render("fail", &[], false), "fail");
        assert_eq!(render("", &[], false), "");
    }

    #[test]
    fn test_public_argument_shown() {
        assert_eq!(render("value=%{public}d", &["5"], false), "value=5");
    }

    #[test]
    fn test_private_and_unflagged_masked() {
        assert_eq!(
            render("%{private}s and %s", &["a", "b"], false),
            "<private> and <private>"
        );
    }

    #[test]
    fn test_reveal_private_shows_all() {
        assert_eq!(render("%{private}s and %s", &["a", "b"], true), "a and b");
    }

    #[test]
    fn test_positional_substitution() {
        assert_eq!(
            render("%{public}s=%{public}s;", &["key", "value"], false),
            "key=value;"
        );
    }

    #[test]
    fn test_escaped_percent() {
        assert_eq!(render("100%% done", &[], false), "100% done");
        assert_eq!(render("%{public}d%%", &["42"], false), "42%");
    }

    #[test]
    fn test_missing_argument_left_literal() {
        assert_eq!(
            render("a=%{public}s b=%{public}d", &["1"], false),
            "a=1 b=%{public}d"
        );
    }

    #[test]
    fn test_excess_arguments_ignored() {
        assert_eq!(render("only %{public}s", &["one", "two"], false), "only one");
    }

    #[test]
    fn test_flags_width_precision_and_length_accepted() {
        assert_eq!(render("%{public}-08.3lf", &["1.5"], false), "1.5");
        assert_eq!(render("%{public}lld|%{public}hhx", &["7", "ff"], false), "7|ff");
        assert_eq!(render("%{public}zu", &["3"], false), "3");
    }

    #[test]
    fn test_trailing_percent_literal() {
        assert_eq!(render("50%", &["x"], false), "50%");
    }

    #[test]
    fn test_unknown_conversion_literal() {
        assert_eq!(render("%q and %{public}s", &["x"], false), "%q and x");
        assert_eq!(render("%{public}", &["x"], false), "%{public}");
    }

    #[test]
    fn test_unknown_privacy_flag_literal() {
        assert_eq!(render("%{secret}s", &["x"], false), "%{secret}s");
    }

    #[test]
    fn test_non_ascii_text_preserved() {
        assert_eq!(render("设置 %{public}s ✓", &["完成"], false), "设置 完成 ✓");
    }

    #[test]
    fn test_parse_directive_lengths() {
        assert_eq!(
            parse_directive(b"%{public}d rest"),
            Some(Directive::Conversion {
                privacy: Privacy::Public,
                len: 10
            })
        );
        assert_eq!(
            parse_directive(b"%5s"),
            Some(Directive::Conversion {
                privacy: Privacy::Unspecified,
                len: 3
            })
        );
        assert_eq!(parse_directive(b"%%"), Some(Directive::Percent));
        assert_eq!(parse_directive(b"%"), None);
    }
}
