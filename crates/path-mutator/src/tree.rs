//! [`Tree`] — the value type property paths are resolved against.
//!
//! A tree is a scalar, a keyed mapping or an ordered sequence. Sequences can
//! carry holes ([`Tree::Undefined`]) left behind when a path writes past
//! their end.

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};
use std::fmt;

use crate::error::{CloneError, KindMismatch};

/// Maximum container nesting accepted by [`Tree::deep_copy`].
pub const MAX_TREE_DEPTH: usize = 512;

/// String-keyed children, kept in insertion order.
pub type Mapping = IndexMap<String, Tree>;

/// Ordered children; absent slots are [`Tree::Undefined`].
pub type Sequence = Vec<Tree>;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Tree {
    #[default]
    Null,
    /// An absent sequence slot (a hole).
    Undefined,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Mapping(Mapping),
    Sequence(Sequence),
}

/// The variant of a [`Tree`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeKind {
    Null,
    Undefined,
    Bool,
    Number,
    String,
    Mapping,
    Sequence,
}

impl TreeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TreeKind::Null => "null",
            TreeKind::Undefined => "undefined",
            TreeKind::Bool => "boolean",
            TreeKind::Number => "number",
            TreeKind::String => "string",
            TreeKind::Mapping => "mapping",
            TreeKind::Sequence => "sequence",
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed view of a scalar tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Null,
    Undefined,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(&'a str),
}

impl Scalar<'_> {
    /// Whether the scalar counts as empty for auto-vivification.
    ///
    /// Null, holes, `false`, zero (including `-0.0` and NaN) and the empty
    /// string are falsy.
    pub fn is_falsy(&self) -> bool {
        match self {
            Scalar::Null | Scalar::Undefined => true,
            Scalar::Bool(b) => !b,
            Scalar::Integer(i) => *i == 0,
            Scalar::Float(f) => *f == 0.0 || f.is_nan(),
            Scalar::String(s) => s.is_empty(),
        }
    }
}

impl Tree {
    pub fn empty_mapping() -> Tree {
        Tree::Mapping(Mapping::new())
    }

    pub fn empty_sequence() -> Tree {
        Tree::Sequence(Sequence::new())
    }

    pub fn kind(&self) -> TreeKind {
        match self {
            Tree::Null => TreeKind::Null,
            Tree::Undefined => TreeKind::Undefined,
            Tree::Bool(_) => TreeKind::Bool,
            Tree::Integer(_) | Tree::Float(_) => TreeKind::Number,
            Tree::String(_) => TreeKind::String,
            Tree::Mapping(_) => TreeKind::Mapping,
            Tree::Sequence(_) => TreeKind::Sequence,
        }
    }

    pub fn as_mapping(&self) -> Result<&Mapping, KindMismatch> {
        match self {
            Tree::Mapping(map) => Ok(map),
            other => Err(other.mismatch(TreeKind::Mapping)),
        }
    }

    pub fn as_mapping_mut(&mut self) -> Result<&mut Mapping, KindMismatch> {
        match self {
            Tree::Mapping(map) => Ok(map),
            other => Err(other.mismatch(TreeKind::Mapping)),
        }
    }

    pub fn as_sequence(&self) -> Result<&Sequence, KindMismatch> {
        match self {
            Tree::Sequence(seq) => Ok(seq),
            other => Err(other.mismatch(TreeKind::Sequence)),
        }
    }

    pub fn as_sequence_mut(&mut self) -> Result<&mut Sequence, KindMismatch> {
        match self {
            Tree::Sequence(seq) => Ok(seq),
            other => Err(other.mismatch(TreeKind::Sequence)),
        }
    }

    /// Returns `None` for mappings and sequences.
    pub fn as_scalar(&self) -> Option<Scalar<'_>> {
        match self {
            Tree::Null => Some(Scalar::Null),
            Tree::Undefined => Some(Scalar::Undefined),
            Tree::Bool(b) => Some(Scalar::Bool(*b)),
            Tree::Integer(i) => Some(Scalar::Integer(*i)),
            Tree::Float(f) => Some(Scalar::Float(*f)),
            Tree::String(s) => Some(Scalar::String(s)),
            Tree::Mapping(_) | Tree::Sequence(_) => None,
        }
    }

    /// Containers are never falsy, even when empty.
    pub fn is_falsy(&self) -> bool {
        self.as_scalar().is_some_and(|scalar| scalar.is_falsy())
    }

    /// Structural deep copy allocating fresh containers at every level.
    ///
    /// # Errors
    ///
    /// - [`CloneError::NonFiniteNumber`] if a float is NaN or infinite
    /// - [`CloneError::TooDeep`] if containers nest deeper than [`MAX_TREE_DEPTH`]
    pub fn deep_copy(&self) -> Result<Tree, CloneError> {
        self.copy_at(0)
    }

    fn copy_at(&self, depth: usize) -> Result<Tree, CloneError> {
        match self {
            Tree::Float(f) if !f.is_finite() => Err(CloneError::NonFiniteNumber(*f)),
            Tree::Mapping(map) => {
                let depth = enter(depth)?;
                let mut out = Mapping::with_capacity(map.len());
                for (key, val) in map {
                    out.insert(key.clone(), val.copy_at(depth)?);
                }
                Ok(Tree::Mapping(out))
            }
            Tree::Sequence(seq) => {
                let depth = enter(depth)?;
                seq.iter()
                    .map(|val| val.copy_at(depth))
                    .collect::<Result<Sequence, _>>()
                    .map(Tree::Sequence)
            }
            scalar => Ok(scalar.clone()),
        }
    }

    fn mismatch(&self, expected: TreeKind) -> KindMismatch {
        KindMismatch {
            expected,
            found: self.kind(),
        }
    }
}

fn enter(depth: usize) -> Result<usize, CloneError> {
    if depth >= MAX_TREE_DEPTH {
        return Err(CloneError::TooDeep {
            max: MAX_TREE_DEPTH,
        });
    }
    Ok(depth + 1)
}

// ── Conversions ───────────────────────────────────────────────────────────

impl From<Value> for Tree {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Tree::Null,
            Value::Bool(b) => Tree::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Tree::Integer(i),
                None => Tree::Float(n.as_f64().unwrap_or(0.0)),
            },
            Value::String(s) => Tree::String(s),
            Value::Array(arr) => Tree::Sequence(arr.into_iter().map(Tree::from).collect()),
            Value::Object(obj) => {
                Tree::Mapping(obj.into_iter().map(|(k, v)| (k, Tree::from(v))).collect())
            }
        }
    }
}

/// Lossy in the same places JSON text is: holes become `null`, undefined
/// mapping entries are dropped and non-finite floats become `null`.
impl From<&Tree> for Value {
    fn from(tree: &Tree) -> Self {
        match tree {
            Tree::Null | Tree::Undefined => Value::Null,
            Tree::Bool(b) => Value::Bool(*b),
            Tree::Integer(i) => Value::from(*i),
            Tree::Float(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
            Tree::String(s) => Value::String(s.clone()),
            Tree::Sequence(seq) => Value::Array(seq.iter().map(Value::from).collect()),
            Tree::Mapping(map) => {
                let mut obj = Map::new();
                for (key, val) in map {
                    if !matches!(val, Tree::Undefined) {
                        obj.insert(key.clone(), Value::from(val));
                    }
                }
                Value::Object(obj)
            }
        }
    }
}

impl From<bool> for Tree {
    fn from(b: bool) -> Self {
        Tree::Bool(b)
    }
}

impl From<i64> for Tree {
    fn from(i: i64) -> Self {
        Tree::Integer(i)
    }
}

impl From<f64> for Tree {
    fn from(f: f64) -> Self {
        Tree::Float(f)
    }
}

impl From<&str> for Tree {
    fn from(s: &str) -> Self {
        Tree::String(s.to_string())
    }
}

impl From<String> for Tree {
    fn from(s: String) -> Self {
        Tree::String(s)
    }
}
