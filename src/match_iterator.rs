use std::{collections::VecDeque, sync::Arc};

use log::trace;

use crate::{
    internal::{
        branch::{char_of, codepoint_of, Codepoint, END_OF_STREAM},
        Dfa, StateID,
    },
    Match,
};

/// Scans a stream of characters for the longest matches of a [crate::Matcher].
///
/// Each call of [MatchIterator::try_match_next] resumes where the previous match ended.
/// Characters read ahead while looking for a longer match are kept in a buffer and are never read
/// from the stream twice.
pub struct MatchIterator<V, I> {
    automaton: Arc<Dfa<V>>,
    input: I,
    // Characters read from the input but not consumed by a match yet
    buffer: VecDeque<Codepoint>,
    // Number of characters read, end of stream sentinels included
    offset: usize,
    // The input returned `None` once and is not polled again
    input_ended: bool,
    // A match consumed the end of stream
    exhausted: bool,
    // Iteration stopped at an empty match
    stalled: bool,
}

impl<V, I> MatchIterator<V, I>
where
    V: Clone,
    I: Iterator<Item = char>,
{
    /// Match the longest prefix of the remaining input.
    ///
    /// Returns `None` if no pattern matches at the current position. If the empty string is
    /// accepted and nothing longer matches, a match with an empty capture is returned and the
    /// position does not move. After a match of the end of the input, all further calls return
    /// `None`.
    pub fn try_match_next(&mut self) -> Option<Match<V>> {
        if self.exhausted {
            return None;
        }

        let automaton = Arc::clone(&self.automaton);
        let mut state = automaton.start();
        let mut length = 0;
        let mut best: Option<(usize, StateID)> = None;

        loop {
            if length == self.buffer.len() {
                let codepoint = self.read();
                self.buffer.push_back(codepoint);
            }
            match automaton.follow(state, self.buffer[length]) {
                Some(next) => {
                    state = next;
                    length += 1;
                    if automaton.value(state).is_some() {
                        best = Some((length, state));
                    }
                }
                None => break,
            }
        }

        let Some((length, state)) = best else {
            return automaton
                .value(automaton.start())
                .map(|value| Match::new(value.clone(), String::new()));
        };

        let mut capture = String::with_capacity(length);
        for codepoint in self.buffer.drain(..length) {
            match char_of(codepoint) {
                Some(c) => capture.push(c),
                None => self.exhausted = true,
            }
        }
        trace!(
            "Match at position {}, state {}: {:?}",
            MatchIterator::position(self),
            state,
            capture
        );
        let value = automaton.value(state)?.clone();
        Some(Match::new(value, capture))
    }
}

impl<V, I> MatchIterator<V, I> {
    pub(crate) fn new(automaton: Arc<Dfa<V>>, input: I) -> Self {
        Self {
            automaton,
            input,
            buffer: VecDeque::new(),
            offset: 0,
            input_ended: false,
            exhausted: false,
            stalled: false,
        }
    }

    /// The number of characters consumed by matches so far, a consumed end of the input counting
    /// as one character.
    pub fn position(&self) -> usize {
        self.offset - self.buffer.len()
    }

    /// Check whether a match of the end of the input has been returned.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<V, I> MatchIterator<V, I>
where
    I: Iterator<Item = char>,
{
    fn read(&mut self) -> Codepoint {
        self.offset += 1;
        if !self.input_ended {
            if let Some(c) = self.input.next() {
                return codepoint_of(c);
            }
            self.input_ended = true;
        }
        END_OF_STREAM
    }
}

impl<V, I> Iterator for MatchIterator<V, I>
where
    V: Clone,
    I: Iterator<Item = char>,
{
    type Item = Match<V>;

    /// Same as [MatchIterator::try_match_next] but stops after the first empty match, which
    /// would be repeated forever otherwise.
    fn next(&mut self) -> Option<Self::Item> {
        if self.stalled {
            return None;
        }
        let matched = self.try_match_next()?;
        if matched.is_empty() {
            self.stalled = true;
        }
        Some(matched)
    }
}
