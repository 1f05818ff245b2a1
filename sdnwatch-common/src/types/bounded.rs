use std::fmt::{Debug, Display};
use std::ops::Deref;

use serde::{Serialize, Serializer};

/// A string that never holds more than `N` bytes.
///
/// Values longer than the capacity are cut down to the longest prefix that
/// fits and still ends on a character boundary. Truncation is silent.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BoundedString<const N: usize>(String);

impl<const N: usize> BoundedString<N> {
    pub const CAPACITY: usize = N;

    pub fn truncating(value: &str) -> Self {
        let mut end = value.len().min(Self::CAPACITY);
        while !value.is_char_boundary(end) {
            end -= 1;
        }
        Self(value[..end].to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> Deref for BoundedString<N> {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> AsRef<str> for BoundedString<N> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> PartialEq<&str> for BoundedString<N> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl<const N: usize> Display for BoundedString<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<const N: usize> Debug for BoundedString<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl<const N: usize> Serialize for BoundedString<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_value_is_kept() {
        let value = BoundedString::<8>::truncating("abc");
        assert_eq!(value, "abc");
    }

    #[test]
    fn test_exact_capacity_is_kept() {
        let value = BoundedString::<3>::truncating("abc");
        assert_eq!(value.as_str(), "abc");
    }

    #[test]
    fn test_long_value_is_truncated_to_capacity() {
        for len in 0..40 {
            let input = "x".repeat(len);
            let value = BoundedString::<16>::truncating(&input);
            assert_eq!(value.len(), len.min(BoundedString::<16>::CAPACITY));
        }
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // "é" is two bytes wide, so a 3 byte field only fits one of them
        let value = BoundedString::<3>::truncating("éé");
        assert_eq!(value.as_str(), "é");
    }
}
