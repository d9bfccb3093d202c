mod char_literal;
mod name_allocator;
mod reserved;

pub use char_literal::encode_char_literal;
pub use name_allocator::ShortNameAllocator;
pub use reserved::{is_arbitrary_width_int, is_reserved, KEYWORDS, RESERVED_IDENTS};
