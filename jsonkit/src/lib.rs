//! Schema-less JSON codec. Values serialize through an order-preserving
//! generic tree, and deserialization is driven by the destination type:
//! `from_str::<T>` rebuilds an instance of exactly `T` from generic JSON
//! text. `from_str::<core::Value>` is the untyped entry point.

#![cfg_attr(not(feature = "std"), no_std)]

pub use jsonkit_core::{Deserialize, MapKey, Serialize, Stack};
pub use jsonkit_derive::{Deserialize, Serialize};

pub mod core {
    pub use jsonkit_core::internal::{serialize_sequence, stage_sequence};
    pub use jsonkit_core::internal::{ContainerKind, Error, ErrorKind, Result, Value};
    pub use jsonkit_core::{Deserialize, MapKey, Serialize, Stack};
}

pub use jsonkit_string::{from_str, to_string, to_string_pretty};
