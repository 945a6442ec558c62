//! Symbolic instance names

use ioc_domain::constants::{SYMBOL_COUNTER_WIDTH, SYMBOL_PREFIX};

/// Per-context counter handing out transcript variable names
///
/// Names look like `_004_leaf`: the counter keeps them unique, the
/// lowercased short type name keeps them readable.
#[derive(Debug, Default)]
pub struct SymbolAllocator {
    next: usize,
}

impl SymbolAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next symbol for a type with the given short name
    pub fn allocate(&mut self, short_name: &str) -> String {
        let counter = self.next;
        self.next += 1;
        format!(
            "{SYMBOL_PREFIX}{counter:0width$}{SYMBOL_PREFIX}{}",
            short_name.to_lowercase(),
            width = SYMBOL_COUNTER_WIDTH
        )
    }

    /// Number of symbols handed out so far
    pub fn issued(&self) -> usize {
        self.next
    }
}
