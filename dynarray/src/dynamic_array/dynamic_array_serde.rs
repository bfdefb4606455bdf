use crate::DynamicArray;
use core::{cmp, fmt, marker::PhantomData};
use serde::{
  de::{SeqAccess, Visitor},
  Deserialize, Deserializer, Serialize, Serializer,
};

// Upper bound of the up-front reservation taken from untrusted size hints
const MAX_PREALLOCATED: usize = 4096;

impl<'de, T> Deserialize<'de> for DynamicArray<T>
where
  T: Deserialize<'de>,
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    deserializer.deserialize_seq(DynamicArrayVisitor(PhantomData))
  }
}

impl<T> Serialize for DynamicArray<T>
where
  T: Serialize,
{
  #[inline]
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.collect_seq(self.iter())
  }
}

struct DynamicArrayVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for DynamicArrayVisitor<T>
where
  T: Deserialize<'de>,
{
  type Value = DynamicArray<T>;

  fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    formatter.write_str("a sequence")
  }

  fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
  where
    A: SeqAccess<'de>,
  {
    let capacity = cmp::min(seq.size_hint().unwrap_or(0), MAX_PREALLOCATED);
    let mut array = DynamicArray::with_capacity(capacity);
    while let Some(elem) = seq.next_element()? {
      array.push_back(elem);
    }
    Ok(array)
  }
}
