//! # dynarray
//!
//! This crate provides a contiguous, growable and random-access array that owns its elements and
//! gives explicit control over its capacity.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod capacity_hint;
pub mod dynamic_array;
mod error;
mod macros;
mod utils;

/// Shorcut of core::result::Result<T, dynarray::Error>;
pub type Result<T> = core::result::Result<T, Error>;

pub use capacity_hint::CapacityHint;
pub use dynamic_array::DynamicArray;
pub use error::*;
