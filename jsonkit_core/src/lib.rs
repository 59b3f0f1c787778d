#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod core;
mod impls;
mod stack;

pub use crate::core::{Deserialize, MapKey, Serialize};
pub use crate::stack::Stack;

pub mod internal {
    pub use crate::core::{ContainerKind, Error, ErrorKind, Result, Value};
    pub use crate::impls::{serialize_sequence, stage_sequence};

    pub mod sys {
        pub use alloc::boxed::Box;
        pub use alloc::collections::{BTreeMap, BTreeSet, LinkedList, VecDeque};
        pub use alloc::format;
        pub use alloc::rc::Rc;
        pub use alloc::string::{String, ToString};
        pub use alloc::sync::Arc;
        pub use alloc::vec::Vec;
    }
}
