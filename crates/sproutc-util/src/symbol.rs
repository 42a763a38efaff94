//! String interning for identifiers.
//!
//! `spec.md` §3 describes `Symbol` as "a wrapper around an identifier string
//! with name equality." A naive `String` wrapper satisfies that, but every
//! symbol in a source file that repeats a name (`x` bound, then used a dozen
//! times) would otherwise carry its own heap allocation. Interning collapses
//! all occurrences of the same name to one small, `Copy` handle and reduces
//! symbol comparison to an integer compare.
//!
//! The front end is single-threaded (`spec.md` §5), so the global table is
//! guarded by a plain `Mutex` rather than a lock-free map — there is never
//! contention to optimise away.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::{Mutex, OnceLock};

/// An interned identifier. Two symbols are equal iff the strings they were
/// interned from are equal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

struct Interner {
    indices: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

impl Interner {
    fn new() -> Self {
        Self {
            indices: FxHashMap::default(),
            strings: Vec::new(),
        }
    }

    fn intern(&mut self, s: &str) -> Symbol {
        if let Some(&idx) = self.indices.get(s) {
            return Symbol(idx);
        }
        // Strings are never interned twice and the table lives for the
        // process lifetime, so leaking to get a `'static` slice is safe and
        // avoids a second allocation on every lookup.
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let idx = self.strings.len() as u32;
        self.strings.push(leaked);
        self.indices.insert(leaked, idx);
        Symbol(idx)
    }

    fn resolve(&self, sym: Symbol) -> &'static str {
        self.strings[sym.0 as usize]
    }
}

fn table() -> &'static Mutex<Interner> {
    static TABLE: OnceLock<Mutex<Interner>> = OnceLock::new();
    TABLE.get_or_init(|| Mutex::new(Interner::new()))
}

impl Symbol {
    /// Intern `s`, returning the symbol that names it.
    pub fn intern(s: &str) -> Self {
        table().lock().unwrap().intern(s)
    }

    /// The string this symbol names.
    pub fn as_str(&self) -> &'static str {
        table().lock().unwrap().resolve(*self)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_text_interns_to_the_same_symbol() {
        assert_eq!(Symbol::intern("foo"), Symbol::intern("foo"));
    }

    #[test]
    fn different_text_interns_to_different_symbols() {
        assert_ne!(Symbol::intern("foo"), Symbol::intern("bar"));
    }

    #[test]
    fn as_str_round_trips() {
        let sym = Symbol::intern("lambda-body");
        assert_eq!(sym.as_str(), "lambda-body");
    }

    #[test]
    fn display_matches_source_text() {
        assert_eq!(Symbol::intern("cons").to_string(), "cons");
    }
}
