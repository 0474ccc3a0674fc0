//! A dynamically typed element whose hashability is only known at runtime.
//!
//! `List` never hashes. `Tuple` hashes only if every member does, and finds out
//! part-way through the attempt. Everything else hashes.

use std::hash::{Hash, Hasher};
use std::mem;

use super::seen::{TryHash, Unhashable};

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Tuple(Vec<Value>),
    List(Vec<Value>),
}

impl Value {
    /// Runs a throwaway hash attempt.
    pub fn is_hashable(&self) -> bool {
        let mut sink = std::collections::hash_map::DefaultHasher::new();
        self.try_hash(&mut sink).is_ok()
    }
}

impl TryHash for Value {
    fn try_hash<H: Hasher>(&self, state: &mut H) -> Result<(), Unhashable> {
        mem::discriminant(self).hash(state);
        match self {
            Value::Bool(b) => b.hash(state),
            Value::Int(i) => i.hash(state),
            // 0.0 == -0.0 must hash alike; NaN never compares equal so any hash works
            Value::Float(x) => {
                let bits = if *x == 0.0 { 0 } else { x.to_bits() };
                bits.hash(state);
            }
            Value::Str(s) => s.hash(state),
            Value::Tuple(items) => {
                items.len().hash(state);
                for item in items {
                    item.try_hash(state)?;
                }
            }
            Value::List(_) => return Err(Unhashable),
        }
        Ok(())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// Vectors become lists, the unhashable sequence type.
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}
