use crate::{Error, Gateway, Mapper, Model, Result};

use indexmap::IndexMap;
use parking_lot::{Mutex, RwLock};
use std::{collections::HashMap, fmt, sync::Arc};

/// Shared state for a set of mappers: named gateways, named mappers and the
/// identity map.
///
/// A registry is created once per application or session and handed to each
/// [`Mapper`] at construction. Gateways are shared by every mapper no matter
/// which model type it maps. Identity map entries live as long as the
/// registry; nothing is evicted.
#[derive(Default)]
pub struct Registry {
    gateways: RwLock<IndexMap<String, Arc<dyn Gateway>>>,

    /// Mappers resolvable by class name from model configuration.
    mappers: RwLock<IndexMap<String, Mapper>>,

    /// model class -> identity key -> live instance
    instances: Mutex<HashMap<String, HashMap<String, Model>>>,
}

impl Registry {
    pub fn new() -> Arc<Registry> {
        Arc::new(Registry::default())
    }

    /// Registers `gateway` under `name`, replacing any gateway already
    /// registered with that name.
    pub fn add_gateway(&self, name: impl Into<String>, gateway: Arc<dyn Gateway>) -> &Self {
        let name = name.into();
        tracing::trace!(gateway = %name, "registering gateway");
        self.gateways.write().insert(name, gateway);
        self
    }

    pub fn gateway(&self, name: &str) -> Result<Arc<dyn Gateway>> {
        self.gateways
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::unknown_gateway(name))
    }

    pub fn has_gateway(&self, name: &str) -> bool {
        self.gateways.read().contains_key(name)
    }

    /// Registers `mapper` under `class` so model configuration can name it.
    pub fn add_mapper(&self, class: impl Into<String>, mapper: Mapper) -> &Self {
        let class = class.into();
        tracing::trace!(mapper = %class, "registering mapper");
        self.mappers.write().insert(class, mapper);
        self
    }

    pub fn mapper(&self, class: &str) -> Result<Mapper> {
        self.mappers
            .read()
            .get(class)
            .cloned()
            .ok_or_else(|| Error::configuration(format!("mapper `{class}` is not registered")))
    }

    /// Returns the live instance of `class` with the given identity key.
    pub fn instance(&self, class: &str, key: &str) -> Option<Model> {
        self.instances.lock().get(class)?.get(key).cloned()
    }

    /// Stores `model` as the live instance for its identity, replacing any
    /// previous instance.
    pub(crate) fn register_instance(&self, class: &str, key: String, model: Model) {
        self.instances
            .lock()
            .entry(class.to_string())
            .or_default()
            .insert(key, model);
    }

    /// Returns the live instance for the identity, storing `model` first if
    /// there is none.
    pub(crate) fn keep_instance(&self, class: &str, key: String, model: Model) -> Model {
        self.instances
            .lock()
            .entry(class.to_string())
            .or_default()
            .entry(key)
            .or_insert(model)
            .clone()
    }

    /// Number of live instances held for `class`.
    pub fn instance_count(&self, class: &str) -> usize {
        self.instances.lock().get(class).map_or(0, HashMap::len)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("gateways", &self.gateways.read().keys().collect::<Vec<_>>())
            .field("mappers", &self.mappers.read().keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
