//! Growth and access

#![allow(
  // Run-time logic
  clippy::panic
)]

use dynarray::{dynarray, CapacityHint, DynamicArray};

fn main() -> dynarray::Result<()> {
  let mut array = DynamicArray::new();
  let mut capacities = [0; 5];
  for (value, capacity) in (1..6).zip(capacities.iter_mut()) {
    array.try_push_back(value)?;
    *capacity = array.capacity();
  }
  assert!(capacities == [1, 2, 4, 4, 8]);

  let idx = array.try_insert(2, 99)?;
  assert!(*array.at(idx)? == 99);
  let _ = array.erase(idx);
  assert!(array == [1, 2, 3, 4, 5]);

  let mut hinted = DynamicArray::with_capacity_hint(CapacityHint::new(5));
  hinted.extend(array.iter().rev().copied());
  assert!(hinted.capacity() == 5 && hinted == dynarray![5, 4, 3, 2, 1]);

  hinted.try_resize(7)?;
  assert!(hinted.as_slice() == [5, 4, 3, 2, 1, 0, 0]);
  assert!(hinted.at(7).is_err());
  Ok(())
}
