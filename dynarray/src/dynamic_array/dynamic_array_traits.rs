use crate::{CapacityHint, DynamicArray};
use alloc::vec::Vec;
use core::{
  cmp::Ordering,
  fmt,
  hash::{Hash, Hasher},
  iter::FromIterator,
  ops::{Deref, DerefMut},
};

impl<T> AsMut<[T]> for DynamicArray<T> {
  #[inline]
  fn as_mut(&mut self) -> &mut [T] {
    self.as_mut_slice()
  }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
  #[inline]
  fn as_ref(&self) -> &[T] {
    self.as_slice()
  }
}

/// Deep copy. The copy owns a new buffer whose capacity equals the source length.
///
/// ```rust
/// use dynarray::doc_tests::dynamic_array_3;
/// let mut original = dynamic_array_3();
/// original.reserve(10);
/// let mut copy = original.clone();
/// copy[0] = 10;
/// assert_eq!(original.as_slice(), &[1, 2, 3]);
/// assert_eq!((copy.as_slice(), copy.capacity()), (&[10, 2, 3][..], 3));
/// ```
impl<T> Clone for DynamicArray<T>
where
  T: Clone,
{
  #[inline]
  fn clone(&self) -> Self {
    Self::from_slice(self)
  }
}

impl<T> fmt::Debug for DynamicArray<T>
where
  T: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T> Default for DynamicArray<T> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Deref for DynamicArray<T> {
  type Target = [T];

  #[inline]
  fn deref(&self) -> &[T] {
    self.as_slice()
  }
}

impl<T> DerefMut for DynamicArray<T> {
  #[inline]
  fn deref_mut(&mut self) -> &mut [T] {
    self.as_mut_slice()
  }
}

impl<T> Eq for DynamicArray<T> where T: Eq {}

impl<T> Extend<T> for DynamicArray<T> {
  fn extend<I>(&mut self, iter: I)
  where
    I: IntoIterator<Item = T>,
  {
    let iter = iter.into_iter();
    let new_len = self.len().saturating_add(iter.size_hint().0);
    if new_len > self.capacity() {
      self.reserve(new_len);
    }
    for elem in iter {
      self.push_back(elem);
    }
  }
}

impl<'a, T> Extend<&'a T> for DynamicArray<T>
where
  T: Copy + 'a,
{
  fn extend<I>(&mut self, iter: I)
  where
    I: IntoIterator<Item = &'a T>,
  {
    self.extend(iter.into_iter().copied());
  }
}

impl<T> From<&[T]> for DynamicArray<T>
where
  T: Clone,
{
  #[inline]
  fn from(from: &[T]) -> Self {
    Self::from_slice(from)
  }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
  #[inline]
  fn from(from: [T; N]) -> Self {
    Self::from_array(from)
  }
}

impl<T> From<CapacityHint> for DynamicArray<T> {
  #[inline]
  fn from(from: CapacityHint) -> Self {
    Self::with_capacity_hint(from)
  }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
  #[inline]
  fn from(from: DynamicArray<T>) -> Self {
    from.into_iter().collect()
  }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
  fn from(from: Vec<T>) -> Self {
    let mut this = Self::with_capacity(from.len());
    this.extend(from);
    this
  }
}

impl<T> FromIterator<T> for DynamicArray<T> {
  #[inline]
  fn from_iter<I>(iter: I) -> Self
  where
    I: IntoIterator<Item = T>,
  {
    let mut this = Self::new();
    this.extend(iter);
    this
  }
}

impl<T> Hash for DynamicArray<T>
where
  T: Hash,
{
  #[inline]
  fn hash<H>(&self, state: &mut H)
  where
    H: Hasher,
  {
    Hash::hash(self.as_slice(), state)
  }
}

impl<T> Ord for DynamicArray<T>
where
  T: Ord,
{
  #[inline]
  fn cmp(&self, other: &Self) -> Ordering {
    Ord::cmp(self.as_slice(), other.as_slice())
  }
}

impl<T, U> PartialEq<DynamicArray<U>> for DynamicArray<T>
where
  T: PartialEq<U>,
{
  #[inline]
  fn eq(&self, other: &DynamicArray<U>) -> bool {
    self.as_slice() == other.as_slice()
  }
}

impl<T, U> PartialEq<[U]> for DynamicArray<T>
where
  T: PartialEq<U>,
{
  #[inline]
  fn eq(&self, other: &[U]) -> bool {
    self.as_slice() == other
  }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T>
where
  T: PartialEq<U>,
{
  #[inline]
  fn eq(&self, other: &[U; N]) -> bool {
    self.as_slice() == &other[..]
  }
}

/// Lexicographic comparison.
///
/// ```rust
/// use dynarray::dynarray;
/// assert!(dynarray![1, 2] < dynarray![1, 2, 0]);
/// assert!(dynarray![1, 3] > dynarray![1, 2, 9]);
/// ```
impl<T> PartialOrd for DynamicArray<T>
where
  T: PartialOrd,
{
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    PartialOrd::partial_cmp(self.as_slice(), other.as_slice())
  }
}
