use serde::Serialize;
use std::fmt;

/// String that is truncated to at most `N` bytes on a character boundary.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LimitedLenString<const N: usize>(String);

pub(crate) type LimitedLenString1024 = LimitedLenString<1024>;
pub(crate) type LimitedLenString8192 = LimitedLenString<8192>;

impl<const N: usize> LimitedLenString<N> {
    /// Maximum length in bytes.
    pub const MAX_LEN: usize = N;

    /// The contained string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> From<String> for LimitedLenString<N> {
    fn from(mut s: String) -> Self {
        if s.len() > N {
            #[cfg(feature = "internal-logs")]
            tracing::debug!(len = s.len(), max_len = N, "truncating text field");
            truncate_on_char_boundary(&mut s, N);
        }
        Self(s)
    }
}

/// Shortens `s` to at most `max_len` bytes without splitting a character.
pub(crate) fn truncate_on_char_boundary(s: &mut String, max_len: usize) {
    if s.len() <= max_len {
        return;
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}

impl<const N: usize> From<&str> for LimitedLenString<N> {
    fn from(s: &str) -> Self {
        s.to_string().into()
    }
}

impl<const N: usize> AsRef<str> for LimitedLenString<N> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> fmt::Debug for LimitedLenString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<const N: usize> fmt::Display for LimitedLenString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_short_strings() {
        let s = LimitedLenString::<8>::from("short");
        assert_eq!("short", s.as_str());
    }

    #[test]
    fn truncates_long_strings() {
        let s = LimitedLenString::<1024>::from("x".repeat(2000));
        assert_eq!(1024, s.as_str().len());
    }

    #[test]
    fn truncates_on_char_boundary() {
        // "→" is three bytes long.
        let s = LimitedLenString::<5>::from("a→→");
        assert_eq!("a→", s.as_str());
    }
}
