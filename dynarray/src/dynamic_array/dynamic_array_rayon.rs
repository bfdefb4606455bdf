use crate::DynamicArray;
use alloc::vec::Vec;
use rayon::{
  iter::{FromParallelIterator, IntoParallelIterator, ParallelExtend, ParallelIterator},
  slice::{Iter, IterMut},
};

impl<T> FromParallelIterator<T> for DynamicArray<T>
where
  T: Send,
{
  fn from_par_iter<I>(par_iter: I) -> Self
  where
    I: IntoParallelIterator<Item = T>,
  {
    let mut this = Self::new();
    this.par_extend(par_iter);
    this
  }
}

impl<'a, T> IntoParallelIterator for &'a DynamicArray<T>
where
  T: Sync + 'a,
{
  type Item = &'a T;
  type Iter = Iter<'a, T>;

  #[inline]
  fn into_par_iter(self) -> Self::Iter {
    self.as_slice().into_par_iter()
  }
}

impl<'a, T> IntoParallelIterator for &'a mut DynamicArray<T>
where
  T: Send + 'a,
{
  type Item = &'a mut T;
  type Iter = IterMut<'a, T>;

  #[inline]
  fn into_par_iter(self) -> Self::Iter {
    self.as_mut_slice().into_par_iter()
  }
}

/// Elements are gathered by the workers and then appended in their original order.
impl<T> ParallelExtend<T> for DynamicArray<T>
where
  T: Send,
{
  fn par_extend<I>(&mut self, par_iter: I)
  where
    I: IntoParallelIterator<Item = T>,
  {
    let gathered: Vec<T> = par_iter.into_par_iter().collect();
    let new_len = self.len().saturating_add(gathered.len());
    if new_len > self.capacity() {
      self.reserve(new_len);
    }
    self.extend(gathered);
  }
}

#[cfg(test)]
mod tests {
  use crate::DynamicArray;
  use rayon::prelude::*;

  #[quickcheck_macros::quickcheck]
  fn parallel_sum_matches_sequential(array: DynamicArray<i32>) -> bool {
    let sequential: i64 = array.iter().map(|x| i64::from(*x)).sum();
    let parallel: i64 = array.par_iter().map(|x| i64::from(*x)).sum();
    sequential == parallel
  }

  #[test]
  fn collect_keeps_order_and_exact_capacity() {
    let array: DynamicArray<usize> = (0..1000).into_par_iter().map(|x| x * 2).collect();
    assert_eq!(array.len(), 1000);
    assert_eq!(array.capacity(), 1000);
    assert!(array.iter().copied().eq((0..1000).map(|x| x * 2)));
  }

  #[test]
  fn mutable_parallel_iteration() {
    let mut array = DynamicArray::with_value(64, 1u32);
    array.par_iter_mut().enumerate().for_each(|(idx, elem)| *elem += idx as u32);
    assert!(array.iter().copied().eq(1..65));
  }
}
