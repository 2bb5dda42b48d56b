use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Value list of one predicate, closed over the two supported domains.
///
/// A list is uniformly integer or uniformly string; mixing domains inside
/// one predicate is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSet {
    Int(Vec<i64>),
    Text(Vec<String>),
}

impl ValueSet {
    pub fn len(&self) -> usize {
        match self {
            ValueSet::Int(values) => values.len(),
            ValueSet::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSet::Int(values) => write!(f, "{{{}}}", values.iter().join(", ")),
            ValueSet::Text(values) => write!(f, "{{{}}}", values.iter().join(", ")),
        }
    }
}

/// One equality predicate: `key ∈ values` when positive, `key ∉ values`
/// when negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression<K> {
    pub key: K,
    pub values: ValueSet,
    pub positive: bool,
}

impl<K> Expression<K> {
    pub fn new(key: K, values: ValueSet, positive: bool) -> Self {
        Self { key, values, positive }
    }
}

impl<K: fmt::Display> fmt::Display for Expression<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} in {}", if self.positive { "+" } else { "-" }, self.key, self.values)
    }
}

/// An AND over equality predicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conjunction<K> {
    pub expressions: Vec<Expression<K>>,
}

impl<K> Conjunction<K> {
    pub fn new(expressions: Vec<Expression<K>>) -> Self {
        Self { expressions }
    }

    /// Number of positive predicates; selects the size bucket the
    /// conjunction is indexed under.
    pub fn positive_arity(&self) -> usize {
        self.expressions.iter().filter(|expression| expression.positive).count()
    }
}

impl<K: fmt::Display> fmt::Display for Conjunction<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.expressions.iter().join(" AND "))
    }
}

/// A document: an OR over conjunctions. It matches an assignment when at
/// least one conjunction is satisfied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<K> {
    pub conjunctions: Vec<Conjunction<K>>,
}

impl<K> Document<K> {
    pub fn new(conjunctions: Vec<Conjunction<K>>) -> Self {
        Self { conjunctions }
    }
}
