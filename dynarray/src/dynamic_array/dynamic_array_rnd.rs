use crate::DynamicArray;
use rand::{
  distributions::{Distribution, Standard},
  Rng,
};

impl<T> DynamicArray<T> {
  /// Creates a new random instance with exactly `len` elements delimited by the passed arguments.
  ///
  /// # Arguments
  ///
  /// * `len`: Number of elements
  /// * `rng`: `rand::Rng` trait
  /// * `cb`: Callback to control data creation, receives the index of each element
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::DynamicArray;
  /// use rand::rngs::mock::StepRng;
  /// let mut rng = StepRng::new(0, 0);
  /// let array = DynamicArray::new_controlled_random_with_rand(4, &mut rng, |_, idx| idx * 2);
  /// assert_eq!(array.as_slice(), &[0, 2, 4, 6]);
  /// assert_eq!(array.capacity(), 4);
  /// ```
  pub fn new_controlled_random_with_rand<F, R>(len: usize, rng: &mut R, mut cb: F) -> Self
  where
    F: FnMut(&mut R, usize) -> T,
    R: Rng,
  {
    let mut idx = 0;
    let mut this = Self::with_capacity(len);
    this.resize_with(len, || {
      let elem = cb(rng, idx);
      idx += 1;
      elem
    });
    this
  }

  /// Creates a new random instance with less than `upper_bound` elements.
  ///
  /// # Arguments
  ///
  /// * `rng`: `rand::Rng` trait
  /// * `upper_bound`: The maximum allowed exclusive length
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynarray::DynamicArray;
  /// use rand::rngs::mock::StepRng;
  /// let mut rng = StepRng::new(3, 1);
  /// let random: DynamicArray<u8> = DynamicArray::new_random_with_rand(&mut rng, 5);
  /// assert!(random.len() < 5);
  /// ```
  pub fn new_random_with_rand<R>(rng: &mut R, upper_bound: usize) -> Self
  where
    R: Rng,
    Standard: Distribution<T>,
  {
    let len = if upper_bound == 0 { 0 } else { rng.gen_range(0, upper_bound) };
    Self::new_controlled_random_with_rand(len, rng, |rng, _| rng.gen())
  }
}
