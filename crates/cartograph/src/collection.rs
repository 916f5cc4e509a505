use crate::{Model, Result, Value};

use indexmap::IndexMap;
use std::{
    collections::{vec_deque, VecDeque},
    ops::Index,
};

/// An ordered list of models, as returned by [`Mapper::find`](crate::Mapper::find).
#[derive(Debug, Clone, Default)]
pub struct Collection {
    models: VecDeque<Model>,
}

impl Collection {
    pub fn new() -> Collection {
        Collection::default()
    }

    /// Appends a model at the end.
    pub fn push(&mut self, model: Model) {
        self.models.push_back(model);
    }

    /// Removes the last model.
    pub fn pop(&mut self) -> Option<Model> {
        self.models.pop_back()
    }

    /// Removes the first model.
    pub fn shift(&mut self) -> Option<Model> {
        self.models.pop_front()
    }

    /// Inserts a model at the front.
    pub fn unshift(&mut self, model: Model) {
        self.models.push_front(model);
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn first(&self) -> Option<&Model> {
        self.models.front()
    }

    pub fn get(&self, index: usize) -> Option<&Model> {
        self.models.get(index)
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, Model> {
        self.models.iter()
    }

    pub fn get_by_identity(&self, identity: impl Into<Value>) -> Option<&Model> {
        let key = identity.into().to_key();
        self.models.iter().find(|model| model.identity().to_key() == key)
    }

    /// Sets `field` on every model. Stops at the first model that does not
    /// declare it.
    pub fn set_all(&self, field: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        for model in &self.models {
            model.set(field, value.clone())?;
        }
        Ok(())
    }

    /// Reads `field` from every model, keyed by identity.
    pub fn get_all(&self, field: &str) -> Result<IndexMap<String, Value>> {
        self.each(|model| model.get(field))
    }

    /// Calls `f` on every model in order and collects the results keyed by
    /// identity. Stops at the first error.
    pub fn each<T>(&self, mut f: impl FnMut(&Model) -> Result<T>) -> Result<IndexMap<String, T>> {
        let mut out = IndexMap::with_capacity(self.models.len());
        for model in &self.models {
            out.insert(model.identity().to_key(), f(model)?);
        }
        Ok(out)
    }
}

impl From<Vec<Model>> for Collection {
    fn from(models: Vec<Model>) -> Self {
        Collection {
            models: models.into(),
        }
    }
}

impl Index<usize> for Collection {
    type Output = Model;

    fn index(&self, index: usize) -> &Model {
        &self.models[index]
    }
}

impl FromIterator<Model> for Collection {
    fn from_iter<I: IntoIterator<Item = Model>>(iter: I) -> Self {
        Collection {
            models: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Collection {
    type Item = Model;
    type IntoIter = vec_deque::IntoIter<Model>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Model;
    type IntoIter = vec_deque::Iter<'a, Model>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}
