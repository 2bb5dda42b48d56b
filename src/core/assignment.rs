use std::collections::HashMap;
use std::hash::Hash;

use crate::core::ValueSet;

/// Borrowed view of the values one assignment binding carries. Each
/// binding is uniformly typed; callers needing both domains for one key
/// issue separate bindings.
#[derive(Debug, Clone, Copy)]
pub enum ValuesRef<'a> {
    Int(&'a [i64]),
    Text(&'a [String]),
}

impl ValueSet {
    pub fn as_values_ref(&self) -> ValuesRef<'_> {
        match self {
            ValueSet::Int(values) => ValuesRef::Int(values),
            ValueSet::Text(values) => ValuesRef::Text(values),
        }
    }
}

/// The query side: a set of attribute-to-values bindings, offered to the
/// engine by inverted iteration.
pub trait Assignment<K> {
    /// Upper bound on the number of distinct keys `for_each_binding`
    /// will present.
    fn size(&self) -> usize;

    /// Invoke `f` once per bound attribute.
    fn for_each_binding(&self, f: impl FnMut(&K, ValuesRef<'_>));
}

/// Map-backed assignment; the concrete implementation used by the tests
/// and available to hosts that materialize their bindings.
#[derive(Debug, Clone, Default)]
pub struct MapAssignment<K> {
    bindings: HashMap<K, ValueSet>,
}

impl<K: Eq + Hash> MapAssignment<K> {
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    /// Bind `key` to integer values, replacing any previous binding.
    pub fn bind_int(&mut self, key: K, values: Vec<i64>) -> &mut Self {
        self.bindings.insert(key, ValueSet::Int(values));
        self
    }

    /// Bind `key` to string values, replacing any previous binding.
    pub fn bind_text(&mut self, key: K, values: Vec<String>) -> &mut Self {
        self.bindings.insert(key, ValueSet::Text(values));
        self
    }

    pub fn bind(&mut self, key: K, values: ValueSet) -> &mut Self {
        self.bindings.insert(key, values);
        self
    }
}

impl<K: Eq + Hash> Assignment<K> for MapAssignment<K> {
    fn size(&self) -> usize {
        self.bindings.len()
    }

    fn for_each_binding(&self, mut f: impl FnMut(&K, ValuesRef<'_>)) {
        for (key, values) in &self.bindings {
            f(key, values.as_values_ref());
        }
    }
}
