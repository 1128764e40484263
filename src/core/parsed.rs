// src/core/parsed.rs

use super::extractor::Extraction;
use super::registry::Registry;
use serde::Serialize;
use std::collections::BTreeMap;

/// La vista final de un parseo exitoso: nombre -> valores enlazados.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedArgs {
    values: BTreeMap<String, Vec<String>>,
    occurrences: BTreeMap<String, usize>,
    /// Posicionales declarados (ya mapeados) seguidos de los extras sin tocar.
    pool: Vec<String>,
    declared_positionals: usize,
}

impl ParsedArgs {
    pub(crate) fn new(registry: &Registry, extraction: Extraction) -> Self {
        let mut values = BTreeMap::new();
        let mut occurrences = BTreeMap::new();

        let Extraction {
            values: switch_values,
            counts,
            positionals,
            extras,
        } = extraction;

        for ((switch, bound), count) in registry.switches().iter().zip(switch_values).zip(counts) {
            values.insert(switch.name.clone(), bound);
            occurrences.insert(switch.name.clone(), count);
        }
        for (positional, bound) in registry.positionals().iter().zip(&positionals) {
            values.insert(positional.name.clone(), vec![bound.clone()]);
        }

        let declared_positionals = positionals.len();
        let mut pool = positionals;
        pool.extend(extras);

        Self {
            values,
            occurrences,
            pool,
            declared_positionals,
        }
    }

    /// Valores de un switch, o un único valor si el nombre es un posicional.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// Primer valor enlazado a un nombre.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name)?.first().map(String::as_str)
    }

    /// Acceso por índice al pool de posicionales, incluidos los que no se declararon.
    pub fn at(&self, index: usize) -> Option<&str> {
        self.pool.get(index).map(String::as_str)
    }

    pub fn extras(&self) -> &[String] {
        &self.pool[self.declared_positionals..]
    }

    /// Cuántas veces apareció un switch en el flujo (0 si no apareció o no existe).
    pub fn occurrences(&self, name: &str) -> usize {
        self.occurrences.get(name).copied().unwrap_or(0)
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.occurrences(name) > 0
    }

    /// Proyección completa. Los extras aparecen con su índice del pool como clave,
    /// sin pisar nunca un nombre declarado.
    pub fn to_map(&self) -> BTreeMap<String, Vec<String>> {
        let mut out = self.values.clone();
        for (index, token) in self.pool.iter().enumerate().skip(self.declared_positionals) {
            out.entry(index.to_string())
                .or_insert_with(|| vec![token.clone()]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::core::registry::Registry;
    use crate::models::{PositionalSpec, SwitchSpec};

    #[test]
    fn projection_exposes_names_indices_and_extras() {
        let mut registry = Registry::new();
        registry
            .declare_switch(SwitchSpec::new("o", "output").nargs("1"))
            .unwrap()
            .declare_switch(SwitchSpec::new("q", "quiet"))
            .unwrap()
            .declare_positional(PositionalSpec::new("input").map(|v| v.to_uppercase()))
            .unwrap();

        let parsed = registry.parse(&["in", "x", "y", "-o", "out.txt"]).unwrap();

        assert_eq!(parsed.value("output"), Some("out.txt"));
        assert_eq!(parsed.get("quiet"), Some(&[][..]));
        assert_eq!(parsed.value("input"), Some("IN"));
        assert_eq!(parsed.at(0), Some("IN"));
        assert_eq!(parsed.at(2), Some("y"));
        assert_eq!(parsed.at(3), None);
        assert_eq!(parsed.extras(), &["x".to_string(), "y".to_string()][..]);
        assert!(parsed.is_present("output"));
        assert!(!parsed.is_present("quiet"));
        assert_eq!(parsed.get("missing"), None);

        let map = parsed.to_map();
        assert_eq!(map["1"], vec!["x".to_string()]);
        assert_eq!(map["2"], vec!["y".to_string()]);
        assert_eq!(map["input"], vec!["IN".to_string()]);
        assert!(!map.contains_key("0"));
    }

    #[test]
    fn numeric_keys_never_shadow_declared_names() {
        let mut registry = Registry::new();
        registry
            .declare_positional(PositionalSpec::new("first"))
            .unwrap()
            .declare_switch(SwitchSpec::new("1", "").nargs("*"))
            .unwrap();
        let parsed = registry.parse(&["a", "b", "-1", "z"]).unwrap();
        assert_eq!(parsed.to_map()["1"], vec!["z".to_string()]);
        assert_eq!(parsed.extras(), &["b".to_string()][..]);
    }
}
