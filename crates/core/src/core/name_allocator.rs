use rustc_hash::FxHashSet;
use tracing::trace;

/// Hands out replacement names in a fixed order: `a..z`, `A..Z`, then
/// two-letter combinations once the single letters run out.
///
/// Names marked via [`ShortNameAllocator::reserve`] are skipped, so seeding
/// the language keywords guarantees no allocation ever shadows one.
#[derive(Debug, Default)]
pub struct ShortNameAllocator {
    cursor: usize,
    taken: FxHashSet<String>,
}

impl ShortNameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks names as unavailable. Call before the first `alloc`.
    pub fn reserve<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.taken.extend(names);
    }

    fn candidate(&self) -> String {
        let mut hi = self.cursor / 52;
        let mut name = String::new();

        let mut push_letter = |idx: u8| {
            name.push(if idx < 26 {
                (b'a' + idx) as char
            } else {
                (b'A' + (idx - 26)) as char
            });
        };

        while hi > 0 {
            push_letter(((hi - 1) % 52) as u8);

            hi /= 52;
        }

        push_letter((self.cursor % 52) as u8);

        name
    }

    /// Returns the next unused candidate and advances the cursor.
    pub fn alloc(&mut self) -> String {
        loop {
            let name = self.candidate();
            self.cursor += 1;

            if !self.taken.contains(&name) {
                trace!(name = %name, "allocated short name");
                self.taken.insert(name.clone());
                return name;
            }
        }
    }
}
