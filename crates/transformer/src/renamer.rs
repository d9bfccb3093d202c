use rustc_hash::FxHashMap;
use tracing::trace;

use zmin_core::{
    is_arbitrary_width_int, is_reserved, ShortNameAllocator, KEYWORDS, RESERVED_IDENTS,
};

/// Assigns short replacement names to identifiers. One instance per run;
/// nothing is shared across runs.
///
/// Reserved identifiers and sized integer type names keep their spelling and
/// never enter the table. Everything else gets the next free allocator
/// candidate on first sight, and every later occurrence of the same spelling
/// resolves to the same name. The table is only ever extended.
#[derive(Debug)]
pub struct Renamer {
    map: FxHashMap<String, String>,
    allocator: ShortNameAllocator,
}

impl Renamer {
    pub fn new() -> Self {
        let mut allocator = ShortNameAllocator::new();
        allocator.reserve(
            KEYWORDS
                .iter()
                .chain(RESERVED_IDENTS)
                .map(|name| (*name).to_string()),
        );

        Self {
            map: FxHashMap::default(),
            allocator,
        }
    }

    pub fn rename<'a>(&'a mut self, original: &'a str) -> &'a str {
        if is_reserved(original) || is_arbitrary_width_int(original) {
            return original;
        }

        let allocator = &mut self.allocator;

        self.map
            .entry(original.to_owned())
            .or_insert_with(|| {
                let short = allocator.alloc();
                trace!(original = original, short = %short, "renamed identifier");
                short
            })
            .as_str()
    }

    pub fn into_map(self) -> FxHashMap<String, String> {
        self.map
    }
}

impl Default for Renamer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    #[test]
    fn same_spelling_resolves_to_same_name() {
        let mut renamer = Renamer::new();

        let first = renamer.rename("alpha").to_string();
        let second = renamer.rename("beta").to_string();

        assert_eq!(first, "a");
        assert_eq!(second, "b");
        assert_eq!(renamer.rename("alpha"), "a");
        assert_eq!(renamer.rename("beta"), "b");
    }

    #[test]
    fn reserved_and_sized_ints_keep_their_spelling() {
        let mut renamer = Renamer::new();

        for ident in ["_", "main", "usize", "comptime_int", "true", "i64", "u128", "u7"] {
            assert_eq!(renamer.rename(ident), ident);
        }

        assert!(renamer.into_map().is_empty());
    }

    #[test]
    fn fresh_names_are_distinct_and_never_keywords() {
        let mut renamer = Renamer::new();

        let names = (0..500)
            .map(|i| renamer.rename(&format!("ident_{i}")).to_string())
            .collect::<Vec<_>>();

        let unique = names.iter().map(String::as_str).collect::<FxHashSet<_>>();
        assert_eq!(unique.len(), names.len());

        for keyword in KEYWORDS {
            assert!(!unique.contains(keyword), "allocated keyword {keyword}");
        }
    }
}
