//! JSON round trip

#![allow(
  // Run-time logic
  clippy::panic
)]

use dynarray::DynamicArray;

fn main() -> Result<(), serde_json::Error> {
  let array: DynamicArray<String> = ["foo", "bar"].iter().map(|s| String::from(*s)).collect();
  let json = serde_json::to_string(&array)?;
  assert!(json == r#"["foo","bar"]"#);
  let back: DynamicArray<String> = serde_json::from_str(&json)?;
  assert!(back == array);
  Ok(())
}
