use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::market_data::normalize_symbol;

/// Symbols chosen for the comparison view. Insertion-ordered and
/// duplicate-free. Selection is sticky: a symbol is never dropped just
/// because a filter change made it temporarily invisible, only by an
/// explicit toggle or clear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionSet {
    symbols: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the symbol if absent, removes it if present.
    pub fn toggle(&mut self, symbol: &str) {
        let symbol = normalize_symbol(symbol);
        match self.symbols.iter().position(|s| *s == symbol) {
            Some(index) => {
                self.symbols.remove(index);
            }
            None => self.symbols.push(symbol),
        }
    }

    /// Select-all over the currently visible rows. If the selection
    /// already equals `visible` exactly, this clears it instead
    /// (header-checkbox toggle semantics); otherwise the selection is
    /// replaced with the visible set.
    pub fn select_all(&mut self, visible: &[String]) {
        let mut target: Vec<String> = Vec::with_capacity(visible.len());
        for symbol in visible {
            let symbol = normalize_symbol(symbol);
            if !target.contains(&symbol) {
                target.push(symbol);
            }
        }
        let current: BTreeSet<&String> = self.symbols.iter().collect();
        let incoming: BTreeSet<&String> = target.iter().collect();
        if current == incoming {
            self.symbols.clear();
        } else {
            self.symbols = target;
        }
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    pub fn contains(&self, symbol: &str) -> bool {
        let symbol = normalize_symbol(symbol);
        self.symbols.iter().any(|s| *s == symbol)
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
