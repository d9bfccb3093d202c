use lazy_static::lazy_static;
use rustc_hash::FxHashSet;

/// Zig keywords. Lexed as their own token categories and also seeded into
/// the allocator so no identifier is ever shortened to one of them.
pub static KEYWORDS: &[&str] = &[
    "addrspace",
    "align",
    "allowzero",
    "and",
    "anyframe",
    "anytype",
    "asm",
    "async",
    "await",
    "break",
    "callconv",
    "catch",
    "comptime",
    "const",
    "continue",
    "defer",
    "else",
    "enum",
    "errdefer",
    "error",
    "export",
    "extern",
    "fn",
    "for",
    "if",
    "inline",
    "linksection",
    "noalias",
    "noinline",
    "nosuspend",
    "opaque",
    "or",
    "orelse",
    "packed",
    "pub",
    "resume",
    "return",
    "struct",
    "suspend",
    "switch",
    "test",
    "threadlocal",
    "try",
    "union",
    "unreachable",
    "usingnamespace",
    "var",
    "volatile",
    "while",
];

/// The discard binding, the entry point, and the primitive names and
/// values. These keep their original spelling in the output and are also
/// seeded into the allocator.
pub static RESERVED_IDENTS: &[&str] = &[
    "_",
    "main",
    "anyerror",
    "anyframe",
    "anyopaque",
    "bool",
    "comptime_float",
    "comptime_int",
    "false",
    "isize",
    "noreturn",
    "null",
    "true",
    "type",
    "undefined",
    "usize",
    "void",
    "c_char",
    "c_int",
    "c_long",
    "c_longdouble",
    "c_longlong",
    "c_short",
    "c_uint",
    "c_ulong",
    "c_ulonglong",
    "c_ushort",
    "f16",
    "f32",
    "f64",
    "f80",
    "f128",
];

lazy_static! {
    static ref RESERVED: FxHashSet<&'static str> = RESERVED_IDENTS.iter().copied().collect();
}

pub fn is_reserved(ident: &str) -> bool {
    RESERVED.contains(ident)
}

/// `i` or `u` followed by one or more digits is a sized integer type name.
/// Every such spelling is legal Zig, so the width is not validated further.
pub fn is_arbitrary_width_int(ident: &str) -> bool {
    match ident.strip_prefix(['i', 'u']) {
        Some(width) => !width.is_empty() && width.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_table_contents() {
        assert!(is_reserved("_"));
        assert!(is_reserved("main"));
        assert!(is_reserved("usize"));
        assert!(is_reserved("c_longdouble"));
        assert!(is_reserved("comptime_int"));
        assert!(is_reserved("undefined"));

        assert!(!is_reserved("std"));
        assert!(!is_reserved("i64"));
        assert!(!is_reserved("Main"));
    }

    #[test]
    fn sized_int_pattern() {
        for ident in ["i1", "u1", "u0", "i64", "u128", "i1024"] {
            assert!(is_arbitrary_width_int(ident), "{ident}");
        }

        for ident in ["i", "u", "f32", "ix", "i64x", "int", "u_8", "I8", ""] {
            assert!(!is_arbitrary_width_int(ident), "{ident}");
        }
    }
}
