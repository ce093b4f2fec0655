//! Shuffled name pools for category and priority assignment.
//!
//! A pool is the canonical names repeated `multiplier` times, shuffled once,
//! then read through a cursor. Every entry is handed out exactly once; reading
//! past the end is an explicit [`PoolError::Exhausted`].

use rand::Rng;
use rand::seq::SliceRandom;

use crate::PoolError;

#[derive(Debug, Clone)]
pub struct NamePool {
    label: &'static str,
    names: Vec<&'static str>,
    cursor: usize,
}

impl NamePool {
    /// Repeat `canonical` `multiplier` times and shuffle the result.
    pub fn shuffled<R: Rng + ?Sized>(
        label: &'static str,
        canonical: &[&'static str],
        multiplier: usize,
        rng: &mut R,
    ) -> Self {
        let mut names: Vec<&'static str> = canonical
            .iter()
            .copied()
            .cycle()
            .take(canonical.len().saturating_mul(multiplier))
            .collect();
        names.shuffle(rng);
        Self {
            label,
            names,
            cursor: 0,
        }
    }

    /// Hand out the next name.
    pub fn draw(&mut self) -> Result<&'static str, PoolError> {
        let name = self
            .names
            .get(self.cursor)
            .copied()
            .ok_or(PoolError::Exhausted {
                pool: self.label,
                drawn: self.cursor,
            })?;
        self.cursor += 1;
        Ok(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.names.len() - self.cursor
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}
