#![cfg_attr(not(feature = "std"), no_std)]

mod common;
mod decode;
mod encode;

pub use decode::{from_str, Decoder};
pub use encode::{to_string, to_string_pretty};
