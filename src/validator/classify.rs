//! Character classes and length limits for the restricted grammar.
//!
//! The limits follow RFC 5321 section 4.5.3.1: 64 bytes for the local part,
//! 255 for the domain, and 320 for the whole address (local + `@` + domain).

use phf::phf_set;

pub(crate) const DOT: char = '.';
pub(crate) const HYPHEN: char = '-';
pub(crate) const AT: char = '@';

/// Addresses longer than this are rejected before the scan starts.
pub(crate) const MAX_ADDRESS_CHARS: usize = 320;
/// The local part may hold at most this many non-dot characters.
pub(crate) const MAX_LOCAL_CHARS: usize = 64;
/// The domain may hold at most this many non-dot characters.
pub(crate) const MAX_DOMAIN_CHARS: usize = 255;

/// A dotless domain is accepted only through this suffix.
pub(crate) const LOCALHOST_SUFFIX: &str = "@localhost";

/// Punctuation allowed in the local part besides letters and digits.
static LOCAL_SYMBOLS: phf::Set<char> = phf_set! {
    '!', '#', '$', '%', '&', '\'', '*', '+', '-', '/',
    '=', '?', '^', '_', '`', '{', '|', '}', '~',
};

/// Unicode-wide letter-or-digit test, not ASCII-only. Accented letters and
/// non-Latin scripts pass; symbols and punctuation do not.
pub(crate) fn is_letter_or_digit(ch: char) -> bool {
    ch.is_alphanumeric()
}

pub(crate) fn is_local_char(ch: char) -> bool {
    is_letter_or_digit(ch) || LOCAL_SYMBOLS.contains(&ch)
}
