//! Character ranges and transitions shared by both automaton kinds.

use super::StateID;

/// A character of the automaton alphabet.
///
/// Regular characters are the 16-bit code units `0..=0xFFFF`. The value `-1` is reserved for the
/// end of the input stream so that it can be matched like any other character.
pub(crate) type Codepoint = i32;

/// Pseudo-character read when the input stream is exhausted.
pub(crate) const END_OF_STREAM: Codepoint = -1;

/// Lowest regular character.
pub(crate) const CHARACTER_MIN: Codepoint = 0;

/// Highest regular character.
pub(crate) const CHARACTER_MAX: Codepoint = 0xFFFF;

/// Convert a character of the input into the automaton alphabet.
/// Characters beyond [CHARACTER_MAX] keep their scalar value, no transition will ever match them.
#[inline]
pub(crate) fn codepoint_of(c: char) -> Codepoint {
    c as u32 as Codepoint
}

/// Convert a codepoint back into a character, `None` for the end of stream sentinel.
#[inline]
pub(crate) fn char_of(codepoint: Codepoint) -> Option<char> {
    u32::try_from(codepoint).ok().and_then(char::from_u32)
}

/// An inclusive range of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct CharacterRange {
    pub(crate) begin: Codepoint,
    pub(crate) end: Codepoint,
}

impl CharacterRange {
    pub(crate) fn new(begin: Codepoint, end: Codepoint) -> Self {
        debug_assert!(begin <= end, "invalid range {}..={}", begin, end);
        Self { begin, end }
    }

    /// A range that contains exactly one character.
    pub(crate) fn single(c: char) -> Self {
        let codepoint = codepoint_of(c);
        Self::new(codepoint, codepoint)
    }

    /// The range of all regular characters, i.e. what `.` matches.
    pub(crate) fn any() -> Self {
        Self::new(CHARACTER_MIN, CHARACTER_MAX)
    }

    /// Calculates the complement of the given ranges with respect to all regular characters.
    /// The input ranges may be unsorted and overlapping.
    pub(crate) fn complement(ranges: &[CharacterRange]) -> Vec<CharacterRange> {
        let mut sorted = ranges.to_vec();
        sorted.sort_unstable();
        let mut result = Vec::new();
        let mut next = CHARACTER_MIN;
        for range in sorted {
            if range.begin > next {
                result.push(CharacterRange::new(next, range.begin - 1));
            }
            next = next.max(range.end + 1);
        }
        if next <= CHARACTER_MAX {
            result.push(CharacterRange::new(next, CHARACTER_MAX));
        }
        result
    }
}

impl std::fmt::Display for CharacterRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let show = |codepoint: Codepoint| match char_of(codepoint) {
            Some(c) => c.escape_default().to_string(),
            None => "EOF".to_string(),
        };
        if self.begin == self.end {
            write!(f, "{}", show(self.begin))
        } else {
            write!(f, "{}-{}", show(self.begin), show(self.end))
        }
    }
}

/// A transition on an inclusive range of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Branch {
    pub(crate) begin: Codepoint,
    pub(crate) end: Codepoint,
    pub(crate) target: StateID,
}

impl Branch {
    pub(crate) fn new(begin: Codepoint, end: Codepoint, target: StateID) -> Self {
        debug_assert!(begin <= end, "invalid branch range {}..={}", begin, end);
        Self { begin, end, target }
    }

    #[inline]
    pub(crate) fn contains(&self, codepoint: Codepoint) -> bool {
        self.begin <= codepoint && codepoint <= self.end
    }

    pub(crate) fn range(&self) -> CharacterRange {
        CharacterRange::new(self.begin, self.end)
    }
}
