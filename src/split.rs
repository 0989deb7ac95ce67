//! Owned split-string container

use crate::character::PathChar;
use crate::error::{allocate, PathError, Result};

/// A string split on a delimiter into individually owned segments.
///
/// Segments can be cleared in place with [`SplitString::set_segment`]; a
/// cleared segment keeps its position so indices stay stable while a caller
/// walks and rewrites the list. Everything is released together on drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitString<C: PathChar> {
    string: Vec<C>,
    segments: Vec<Option<Vec<C>>>,
}

impl<C: PathChar> SplitString<C> {
    /// Splits `string` on every occurrence of `delimiter`.
    ///
    /// An empty string yields a single empty segment, as does each pair of
    /// adjacent delimiters.
    pub fn new(string: &[C], delimiter: C) -> Result<Self> {
        let mut owned = allocate(string.len(), "split string")?;
        owned.extend_from_slice(string);

        let number_of_segments = string.iter().filter(|unit| **unit == delimiter).count() + 1;
        let mut segments = allocate(number_of_segments, "split string segments")?;
        for segment in string.split(|unit| *unit == delimiter) {
            let mut copy = allocate(segment.len(), "split string segment")?;
            copy.extend_from_slice(segment);
            segments.push(Some(copy));
        }

        Ok(Self {
            string: owned,
            segments,
        })
    }

    /// The string the segments were split from
    pub fn string(&self) -> &[C] {
        &self.string
    }

    pub fn number_of_segments(&self) -> usize {
        self.segments.len()
    }

    /// The segment at `index`, or `None` if it was cleared
    pub fn segment(&self, index: usize) -> Result<Option<&[C]>> {
        self.segments
            .get(index)
            .map(|segment| segment.as_deref())
            .ok_or_else(|| out_of_bounds(index))
    }

    /// Replaces or clears the segment at `index`
    pub fn set_segment(&mut self, index: usize, segment: Option<Vec<C>>) -> Result<()> {
        let slot = self
            .segments
            .get_mut(index)
            .ok_or_else(|| out_of_bounds(index))?;
        *slot = segment;
        Ok(())
    }

    /// Segments that have not been cleared, in order
    pub fn remaining(&self) -> impl Iterator<Item = &[C]> {
        self.segments.iter().filter_map(|segment| segment.as_deref())
    }
}

fn out_of_bounds(index: usize) -> PathError {
    PathError::invalid_argument("segment index", format!("index {index} out of bounds"))
}
