//! Insertion-ordered symbol tables.

use super::symbol::Symbol;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Map from input symbol to a value, keeping insertion order.
///
/// Alphabets are small, so entries live in a vector and lookups scan it.
/// Inserting an existing symbol replaces its value in place; the entry keeps
/// the position of its first insertion. Iteration order is therefore stable,
/// which rendering relies on for reproducible output.
///
/// Serializes as a list of `[symbol, value]` pairs. Deserialization goes
/// through `insert`, so a repeated symbol keeps only its last value.
#[derive(Clone, Debug, PartialEq)]
pub struct SymbolTable<I: Symbol, V> {
    entries: Vec<(I, V)>,
}

impl<I: Symbol, V> Default for SymbolTable<I, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Symbol, V> SymbolTable<I, V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a value, returning the previous value for this symbol.
    pub fn insert(&mut self, symbol: I, value: V) -> Option<V> {
        match self.entries.iter_mut().find(|(s, _)| *s == symbol) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((symbol, value));
                None
            }
        }
    }

    pub fn get(&self, symbol: &I) -> Option<&V> {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, symbol: &I) -> bool {
        self.get(symbol).is_some()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &V)> + '_ {
        self.entries.iter().map(|(s, v)| (*s, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<I: Symbol, V> FromIterator<(I, V)> for SymbolTable<I, V> {
    fn from_iter<T: IntoIterator<Item = (I, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (symbol, value) in iter {
            table.insert(symbol, value);
        }
        table
    }
}

impl<I: Symbol, V: Serialize> Serialize for SymbolTable<I, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de, I: Symbol, V: Deserialize<'de>> Deserialize<'de> for SymbolTable<I, V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<(I, V)>::deserialize(deserializer).map(|entries| entries.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_is_empty() {
        let table: SymbolTable<i32, String> = SymbolTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.get(&0).is_none());
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let table: SymbolTable<i32, &str> = [(1, "S1"), (0, "S0"), (-3, "S3")]
            .into_iter()
            .collect();

        let symbols: Vec<i32> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec![1, 0, -3]);
    }

    #[test]
    fn reinsert_replaces_value_in_place() {
        let mut table = SymbolTable::new();
        table.insert(1, "A");
        table.insert(0, "B");

        let previous = table.insert(1, "C");

        assert_eq!(previous, Some("A"));
        assert_eq!(table.len(), 2);
        let entries: Vec<(i32, &str)> = table.iter().map(|(s, v)| (s, *v)).collect();
        assert_eq!(entries, vec![(1, "C"), (0, "B")]);
    }

    #[test]
    fn contains_reports_presence() {
        let table: SymbolTable<u8, &str> = [(2u8, "x")].into_iter().collect();
        assert!(table.contains(&2));
        assert!(!table.contains(&3));
    }

    #[test]
    fn table_serializes_as_pairs() {
        let table: SymbolTable<i32, String> =
            [(1, "S1".to_string()), (0, "S0".to_string())].into_iter().collect();

        let json = serde_json::to_string(&table).unwrap();

        assert_eq!(json, r#"[[1,"S1"],[0,"S0"]]"#);
    }

    #[test]
    fn deserialized_repeated_symbol_keeps_last_value() {
        let table: SymbolTable<i32, String> =
            serde_json::from_str(r#"[[1,"B"],[0,"A"],[1,"C"]]"#).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&1).map(String::as_str), Some("C"));
        let symbols: Vec<i32> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec![1, 0]);
    }
}
