//! Periodic parameter sets.
//!
//! A [`PeriodicData`] is either a borrowed `'static` table (the built-in presets,
//! or any constant table a caller keeps in flash) or an owned fixed-capacity
//! buffer the engine may mutate. Replacing a set drops the previous owned buffer
//! exactly once. Borrowed tables are never copied or freed.

use crate::types::{PeriodicTerm, WaveformError};
use heapless::Vec;

/// An ordered list of periodic terms, either borrowed or owned.
///
/// # Type Parameters
/// * `N` - Capacity of the owned buffer
#[derive(Debug, Clone)]
pub enum PeriodicData<const N: usize> {
    /// Read-only constant table.
    Borrowed(&'static [PeriodicTerm]),

    /// Engine-owned mutable terms.
    Owned(Vec<PeriodicTerm, N>),
}

impl<const N: usize> PeriodicData<N> {
    /// An empty owned set. Evaluates to zero under every function kind.
    pub const fn empty() -> Self {
        PeriodicData::Owned(Vec::new())
    }

    /// Wraps a constant table without copying it.
    pub const fn borrowed(terms: &'static [PeriodicTerm]) -> Self {
        PeriodicData::Borrowed(terms)
    }

    /// Copies `terms` into a new owned set.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `terms` is longer than `N`
    pub fn owned(terms: &[PeriodicTerm]) -> Result<Self, WaveformError> {
        Vec::from_slice(terms)
            .map(PeriodicData::Owned)
            .map_err(|_| capacity_exceeded(terms.len(), N))
    }

    /// Creates an owned set of `size` zero terms.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `size` is larger than `N`
    pub fn zeroed(size: usize) -> Result<Self, WaveformError> {
        let mut terms = Vec::new();
        terms
            .resize(size, PeriodicTerm::ZERO)
            .map_err(|_| capacity_exceeded(size, N))?;
        Ok(PeriodicData::Owned(terms))
    }

    /// Returns the terms as a slice.
    #[inline]
    pub fn terms(&self) -> &[PeriodicTerm] {
        match self {
            PeriodicData::Borrowed(terms) => terms,
            PeriodicData::Owned(terms) => terms.as_slice(),
        }
    }

    /// Returns the first term, which single-waveform kinds evaluate.
    #[inline]
    pub fn base(&self) -> Option<&PeriodicTerm> {
        self.terms().first()
    }

    /// Number of terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.terms().len()
    }

    /// True if there are no terms.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms().is_empty()
    }

    /// True if this set aliases a constant table.
    #[inline]
    pub fn is_borrowed(&self) -> bool {
        matches!(self, PeriodicData::Borrowed(_))
    }

    /// Applies `f` to the first term, converting to an owned set first.
    ///
    /// A borrowed table is copied into an owned buffer before mutation. An empty
    /// set grows to a single zero term.
    ///
    /// # Errors
    /// * `CapacityExceeded` - the copy or the single term does not fit in `N`.
    ///   The set is left unchanged.
    pub fn update_base<F>(&mut self, f: F) -> Result<(), WaveformError>
    where
        F: FnOnce(&mut PeriodicTerm),
    {
        if N == 0 {
            return Err(capacity_exceeded(self.len().max(1), N));
        }

        let mut terms = match self {
            PeriodicData::Borrowed(terms) => {
                Vec::from_slice(*terms).map_err(|_| capacity_exceeded(terms.len(), N))?
            }
            PeriodicData::Owned(terms) => core::mem::take(terms),
        };

        if terms.is_empty() {
            // N > 0, so a single push always fits
            let _ = terms.push(PeriodicTerm::ZERO);
        }
        if let Some(base) = terms.first_mut() {
            f(base);
        }

        *self = PeriodicData::Owned(terms);
        Ok(())
    }
}

impl<const N: usize> Default for PeriodicData<N> {
    fn default() -> Self {
        Self::empty()
    }
}

fn capacity_exceeded(requested: usize, capacity: usize) -> WaveformError {
    warn!(
        "periodic data needs {} terms, capacity is {}",
        requested, capacity
    );
    WaveformError::CapacityExceeded {
        requested,
        capacity,
    }
}
