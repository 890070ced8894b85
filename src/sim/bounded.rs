//! Fixed-capacity inline storage
//!
//! Bodies, obstacles and walls live in arrays sized at compile time with an
//! explicit element count. Nothing here ever allocates, and a write past the
//! capacity is reported instead of being dropped.

use std::ops::Index;

use thiserror::Error;

/// Returned when pushing into a full [`Bounded`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("fixed capacity of {capacity} exceeded")]
pub struct CapacityError {
    pub capacity: usize,
}

/// Inline array of up to `N` elements with an explicit count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounded<T: Copy + Default, const N: usize> {
    items: [T; N],
    len: usize,
}

impl<T: Copy + Default, const N: usize> Default for Bounded<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> Bounded<T, N> {
    pub fn new() -> Self {
        Self {
            items: [T::default(); N],
            len: 0,
        }
    }

    /// Build from a slice, failing if it does not fit
    pub fn from_slice(items: &[T]) -> Result<Self, CapacityError> {
        let mut out = Self::new();
        for &item in items {
            out.push(item)?;
        }
        Ok(out)
    }

    pub fn push(&mut self, item: T) -> Result<(), CapacityError> {
        if self.len == N {
            return Err(CapacityError { capacity: N });
        }
        self.items[self.len] = item;
        self.len += 1;
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(item)
    }
}

impl<T: Copy + Default, const N: usize> Index<usize> for Bounded<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<'a, T: Copy + Default, const N: usize> IntoIterator for &'a Bounded<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut b: Bounded<u8, 3> = Bounded::new();
        assert!(b.is_empty());
        b.push(1).unwrap();
        b.push(2).unwrap();
        b.push(3).unwrap();
        assert!(b.is_full());
        assert_eq!(b.push(4), Err(CapacityError { capacity: 3 }));
        assert_eq!(b.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_from_slice_rejects_overflow() {
        assert!(Bounded::<u8, 2>::from_slice(&[1, 2]).is_ok());
        assert!(Bounded::<u8, 2>::from_slice(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_index_stays_within_len() {
        let b = Bounded::<u8, 4>::from_slice(&[7, 8]).unwrap();
        assert_eq!(b[1], 8);
        assert_eq!(b.iter().count(), 2);
        let result = std::panic::catch_unwind(|| b[2]);
        assert!(result.is_err());
    }
}
