//! Random arrays

#![allow(missing_docs)]
#![no_main]

use dynarray::DynamicArray;
use libfuzzer_sys::fuzz_target;
use rand::rngs::mock::StepRng;

fuzz_target!(|values: (u16, u64)| {
  let (upper_bound, initial) = values;
  let mut rng = StepRng::new(initial, 1);
  let array = DynamicArray::<u8>::new_random_with_rand(&mut rng, upper_bound.into());
  assert!(array.len() <= usize::from(upper_bound));
});
