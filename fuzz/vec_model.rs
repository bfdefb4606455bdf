//! Replays arbitrary mutations against a `Vec`

#![allow(missing_docs)]
#![no_main]

use arbitrary::Arbitrary;
use dynarray::DynamicArray;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
  Clear,
  Erase(usize),
  Insert(usize, u8),
  PopBack,
  PushBack(u8),
  Reserve(u8),
  Resize(u8),
  ShrinkToFit,
  Truncate(u8),
}

fuzz_target!(|ops: Vec<Op>| {
  let mut array = DynamicArray::new();
  let mut vec = Vec::new();
  for op in ops {
    match op {
      Op::Clear => {
        array.clear();
        vec.clear();
      }
      Op::Erase(idx) => {
        if !vec.is_empty() {
          let idx = idx % vec.len();
          let _ = vec.remove(idx);
          assert_eq!(array.erase(idx), idx);
        }
      }
      Op::Insert(idx, value) => {
        let idx = idx % (vec.len() + 1);
        vec.insert(idx, value);
        assert_eq!(array.insert(idx, value), idx);
      }
      Op::PopBack => assert_eq!(array.pop_back(), vec.pop()),
      Op::PushBack(value) => {
        array.push_back(value);
        vec.push(value);
      }
      Op::Reserve(capacity) => array.reserve(capacity.into()),
      Op::Resize(len) => {
        array.resize(len.into());
        vec.resize(len.into(), 0);
      }
      Op::ShrinkToFit => array.shrink_to_fit(),
      Op::Truncate(len) => {
        array.truncate(len.into());
        vec.truncate(len.into());
      }
    }
    assert!(array.len() <= array.capacity());
    assert_eq!(array.as_slice(), vec.as_slice());
  }
});
