use crate::{dynamic_array::DynamicArrayError, DynamicArray, Error};
use alloc::{boxed::Box, vec::Vec};
use quickcheck::{Arbitrary, Gen, TestResult};

impl<T> Arbitrary for DynamicArray<T>
where
  T: Arbitrary,
{
  #[inline]
  fn arbitrary<G>(g: &mut G) -> Self
  where
    G: Gen,
  {
    Vec::<T>::arbitrary(g).into()
  }

  fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
    Box::new(self.iter().cloned().collect::<Vec<_>>().shrink().map(Self::from))
  }
}

/// Mirrors a single mutation on both the array and a `Vec`.
#[derive(Clone, Debug)]
enum Op {
  Clear,
  Erase(usize),
  Insert(usize, i16),
  PopBack,
  PushBack(i16),
  Reserve(u8),
  Resize(u8),
  ShrinkToFit,
}

impl Arbitrary for Op {
  fn arbitrary<G>(g: &mut G) -> Self
  where
    G: Gen,
  {
    match u8::arbitrary(g) % 8 {
      0 => Self::Clear,
      1 => Self::Erase(usize::arbitrary(g)),
      2 => Self::Insert(usize::arbitrary(g), i16::arbitrary(g)),
      3 => Self::PopBack,
      4 => Self::Reserve(u8::arbitrary(g)),
      5 => Self::Resize(u8::arbitrary(g)),
      6 => Self::ShrinkToFit,
      _ => Self::PushBack(i16::arbitrary(g)),
    }
  }
}

#[quickcheck_macros::quickcheck]
fn behaves_like_vec(ops: Vec<Op>) -> bool {
  let mut array = DynamicArray::new();
  let mut vec = Vec::new();
  for op in ops {
    match op {
      Op::Clear => {
        let capacity = array.capacity();
        array.clear();
        vec.clear();
        if array.capacity() != capacity {
          return false;
        }
      }
      Op::Erase(idx) => {
        if !vec.is_empty() {
          let idx = idx % vec.len();
          let _ = vec.remove(idx);
          if array.erase(idx) != idx {
            return false;
          }
        }
      }
      Op::Insert(idx, value) => {
        let idx = idx % (vec.len() + 1);
        vec.insert(idx, value);
        if array.insert(idx, value) != idx {
          return false;
        }
      }
      Op::PopBack => {
        if array.pop_back() != vec.pop() {
          return false;
        }
      }
      Op::PushBack(value) => {
        array.push_back(value);
        vec.push(value);
      }
      Op::Reserve(capacity) => {
        let capacity = usize::from(capacity);
        let expected = array.capacity().max(capacity);
        array.reserve(capacity);
        if array.capacity() != expected {
          return false;
        }
      }
      Op::Resize(len) => {
        let len = usize::from(len);
        array.resize(len);
        vec.resize(len, 0);
      }
      Op::ShrinkToFit => {
        array.shrink_to_fit();
        if array.capacity() != array.len() {
          return false;
        }
      }
    }
    if array.as_slice() != vec.as_slice() || array.len() > array.capacity() {
      return false;
    }
  }
  true
}

#[quickcheck_macros::quickcheck]
fn checked_and_unchecked_access_agree(array: DynamicArray<i32>) -> bool {
  (0..array.len()).all(|idx| array.at(idx) == Ok(&array[idx]))
    && array.at(array.len()) == Err(Error::DynamicArray(DynamicArrayError::IndexOutOfRange))
}

#[quickcheck_macros::quickcheck]
fn clone_is_independent(original: DynamicArray<i32>, value: i32) -> TestResult {
  if original.is_empty() {
    return TestResult::discard();
  }
  let mut copy = original.clone();
  copy[0] = copy[0].wrapping_add(1);
  copy.push_back(value);
  let len = original.len();
  TestResult::from_bool(
    copy[0] != original[0] && copy.len() == len + 1 && copy[1..len] == original[1..],
  )
}

#[quickcheck_macros::quickcheck]
fn equality_is_reflexive_and_symmetric(a: DynamicArray<u8>, b: DynamicArray<u8>) -> bool {
  a == a.clone() && (a == b) == (b == a)
}

#[quickcheck_macros::quickcheck]
fn insert_then_erase_restores(array: DynamicArray<i32>, idx: usize, value: i32) -> bool {
  let mut modified = array.clone();
  let idx = idx % (array.len() + 1);
  let inserted = modified.insert(idx, value);
  let inserted_ok = modified[inserted] == value && modified.len() == array.len() + 1;
  let _ = modified.erase(inserted);
  inserted_ok && modified == array
}

#[quickcheck_macros::quickcheck]
fn ordering_is_lexicographic(a: DynamicArray<i8>, b: DynamicArray<i8>) -> bool {
  let [va, vb]: [Vec<i8>; 2] = [a.iter().copied().collect(), b.iter().copied().collect()];
  a.cmp(&b) == va.cmp(&vb) && a.partial_cmp(&b) == va.partial_cmp(&vb)
}

#[quickcheck_macros::quickcheck]
fn push_then_pop_restores(array: DynamicArray<i32>, value: i32) -> bool {
  let mut modified = array.clone();
  modified.push_back(value);
  modified.pop_back() == Some(value) && modified == array
}

#[quickcheck_macros::quickcheck]
fn reserve_is_exact_or_noop(array: DynamicArray<i32>, new_capacity: u8) -> bool {
  let mut modified = array.clone();
  let new_capacity = usize::from(new_capacity);
  let ptr = modified.as_ptr();
  let capacity = modified.capacity();
  modified.reserve(new_capacity);
  let capacity_ok = if new_capacity <= capacity {
    modified.capacity() == capacity && modified.as_ptr() == ptr
  } else {
    modified.capacity() == new_capacity
  };
  capacity_ok && modified == array
}

#[quickcheck_macros::quickcheck]
fn resize_keeps_prefix_and_appends_defaults(array: DynamicArray<i32>, new_len: u8) -> bool {
  let mut modified = array.clone();
  let new_len = usize::from(new_len);
  modified.resize(new_len);
  let kept = new_len.min(array.len());
  modified.len() == new_len
    && modified[..kept] == array[..kept]
    && modified[kept..].iter().all(|elem| *elem == 0)
}

#[quickcheck_macros::quickcheck]
fn take_leaves_empty_source(array: DynamicArray<i32>) -> bool {
  let expected = array.clone();
  let mut source = array;
  let destination = source.take();
  source.len() == 0 && source.capacity() == 0 && destination == expected
}
