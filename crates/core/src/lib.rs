#![deny(clippy::all)]

mod core;

pub use crate::core::{
    encode_char_literal, is_arbitrary_width_int, is_reserved, ShortNameAllocator, KEYWORDS,
    RESERVED_IDENTS,
};
