use crate::{bail, err, Record, Result, Value};

use indexmap::IndexMap;

/// A free-form tree of values addressed by dotted paths such as
/// `address.city`.
///
/// Reads never create nodes. Writes through [`set`](Nested::set) require
/// every intermediate node to exist; [`get_or_create`](Nested::get_or_create)
/// builds missing nodes explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested {
    Leaf(Value),
    Node(IndexMap<String, Nested>),
}

impl Nested {
    /// An empty node.
    pub fn node() -> Nested {
        Nested::Node(IndexMap::new())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Nested::Node(_))
    }

    pub fn get(&self, path: &str) -> Option<&Nested> {
        path.split('.').try_fold(self, |current, segment| match current {
            Nested::Node(children) => children.get(segment),
            Nested::Leaf(_) => None,
        })
    }

    /// The value at `path`. A node is returned as a `Value::Map`.
    pub fn value(&self, path: &str) -> Option<Value> {
        self.get(path).cloned().map(Value::from)
    }

    /// Writes `value` at `path`, replacing whatever is there.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<()> {
        let (parent, last) = match path.rsplit_once('.') {
            Some((parent, last)) => (self.walk_mut(parent)?, last),
            None => (self, path),
        };

        match parent {
            Nested::Node(children) => {
                children.insert(last.to_string(), Nested::from(value.into()));
                Ok(())
            }
            Nested::Leaf(_) => bail!("cannot set `{path}`: parent is a value, not a node"),
        }
    }

    /// Returns the entry at `path`, creating empty nodes for every missing
    /// segment. Fails when a segment on the way is a value.
    pub fn get_or_create(&mut self, path: &str) -> Result<&mut Nested> {
        let mut current = self;

        for segment in path.split('.') {
            current = match current {
                Nested::Node(children) => children
                    .entry(segment.to_string())
                    .or_insert_with(Nested::node),
                Nested::Leaf(_) => {
                    bail!("cannot create `{path}`: `{segment}` is below a value")
                }
            };
        }

        Ok(current)
    }

    /// Removes and returns the entry at `path`.
    pub fn remove(&mut self, path: &str) -> Option<Nested> {
        let (parent, last) = match path.rsplit_once('.') {
            Some((parent, last)) => (self.walk_mut(parent).ok()?, last),
            None => (self, path),
        };

        match parent {
            Nested::Node(children) => children.shift_remove(last),
            Nested::Leaf(_) => None,
        }
    }

    fn walk_mut(&mut self, path: &str) -> Result<&mut Nested> {
        let mut current = self;

        for segment in path.split('.') {
            current = match current {
                Nested::Node(children) => children
                    .get_mut(segment)
                    .ok_or_else(|| err!("no node at `{segment}` in `{path}`"))?,
                Nested::Leaf(_) => bail!("`{segment}` in `{path}` is a value, not a node"),
            };
        }

        Ok(current)
    }
}

impl Default for Nested {
    fn default() -> Self {
        Nested::node()
    }
}

impl From<Value> for Nested {
    fn from(value: Value) -> Self {
        match value {
            Value::Map(record) => Nested::Node(
                record
                    .into_iter()
                    .map(|(key, value)| (key, Nested::from(value)))
                    .collect(),
            ),
            value => Nested::Leaf(value),
        }
    }
}

impl From<Nested> for Value {
    fn from(nested: Nested) -> Self {
        match nested {
            Nested::Leaf(value) => value,
            Nested::Node(children) => Value::Map(
                children
                    .into_iter()
                    .map(|(key, child)| (key, Value::from(child)))
                    .collect::<Record>(),
            ),
        }
    }
}
