mod criteria;
pub use criteria::Criteria;

mod table;
pub use table::TableMapping;

use crate::{Collection, DataMap, Error, Model, ModelOptions, Record, Registry, Result, Value};

use std::{
    fmt,
    sync::{Arc, Weak},
};

/// Per-model-type translation between domain fields and storage.
///
/// These hooks are the only place where domain field names are translated to
/// storage field names. Each call builds fresh [`DataMap`]s.
pub trait Mapping: Send + Sync + 'static {
    /// Name of the model type. Namespaces the identity map.
    fn model_class(&self) -> &str;

    /// Domain field that identifies a model.
    fn id_property(&self) -> &str {
        "id"
    }

    /// Translates a model's full field set into one map per target
    /// gateway. When the model is persisted, each map's `criteria` selects
    /// the stored record.
    fn map_to_gateways(&self, data: &Record) -> Result<Vec<DataMap>>;

    /// Translates search criteria into a single map for `read`.
    fn map_to_search_gateway(&self, criteria: &Record) -> Result<DataMap>;

    /// Translates one raw row into a map whose `data` holds domain fields.
    fn map_to_model(&self, row: &Record) -> Result<DataMap>;
}

/// Saves, deletes and finds models of one type through the registry's
/// gateways, keeping at most one live instance per identity.
///
/// `Mapper` is a cheap handle; clones share the same mapping. It refers to
/// its registry weakly, so operations fail with a configuration error once
/// the registry is dropped.
#[derive(Clone)]
pub struct Mapper {
    inner: Arc<Inner>,
}

struct Inner {
    mapping: Box<dyn Mapping>,
    registry: Weak<Registry>,
}

impl Mapper {
    pub fn new(mapping: impl Mapping, registry: &Arc<Registry>) -> Mapper {
        Mapper {
            inner: Arc::new(Inner {
                mapping: Box::new(mapping),
                registry: Arc::downgrade(registry),
            }),
        }
    }

    pub fn model_class(&self) -> &str {
        self.inner.mapping.model_class()
    }

    pub fn id_property(&self) -> &str {
        self.inner.mapping.id_property()
    }

    pub fn registry(&self) -> Result<Arc<Registry>> {
        self.inner.registry.upgrade().ok_or_else(|| {
            Error::configuration(format!(
                "registry for mapper `{}` has been dropped",
                self.model_class()
            ))
        })
    }

    /// Builds a new, unsaved model bound to this mapper. The identifier
    /// field is declared as `Null` when `data` does not carry it.
    pub fn model(&self, mut data: Record) -> Result<Model> {
        if !data.contains_key(self.id_property()) {
            data.insert(self.id_property().to_string(), Value::Null);
        }

        Model::new(
            ModelOptions::new()
                .mapper(self.clone())
                .id_property(self.id_property())
                .data(data),
        )
    }

    /// Inserts the model when its identifier is unset, updates it otherwise,
    /// then registers it in the identity map.
    ///
    /// On insert, the identifier returned by each gateway is written back to
    /// the model field named by the map's `id_property`. Gateways are called
    /// in map order; when one fails, the error is returned and writes already
    /// made by earlier gateways stay in place.
    ///
    /// `cascade` is accepted for related models; this mapper has none to
    /// cascade to.
    pub fn save(&self, model: &Model, cascade: bool) -> Result<()> {
        let registry = self.registry()?;
        let mapping = &self.inner.mapping;
        let is_new = model.identity().is_unset();
        let maps = mapping.map_to_gateways(&model.to_record())?;

        for map in maps {
            let gateway = registry.gateway(&map.gateway)?;

            if is_new {
                tracing::debug!(
                    model = mapping.model_class(),
                    gateway = %map.gateway,
                    store = %map.store,
                    cascade,
                    "inserting model"
                );
                let id = gateway.create(&map.store, &map.data, map.sequence.as_deref())?;

                if let Some(id_property) = &map.id_property {
                    model.set(id_property, id)?;
                }
            } else {
                tracing::debug!(
                    model = mapping.model_class(),
                    gateway = %map.gateway,
                    store = %map.store,
                    cascade,
                    "updating model"
                );
                gateway.update(&map.store, &map.data, &map.criteria)?;
            }
        }

        let identity = model.identity();
        if identity.is_unset() {
            tracing::debug!(
                model = mapping.model_class(),
                "saved model has no identity; not tracked"
            );
        } else {
            registry.register_instance(mapping.model_class(), identity.to_key(), model.clone());
        }

        Ok(())
    }

    /// Deletes the model from every gateway it maps to. Does nothing when
    /// the model has no identifier.
    pub fn delete(&self, model: &Model, cascade: bool) -> Result<()> {
        if model.identity().is_unset() {
            return Ok(());
        }

        let registry = self.registry()?;
        let mapping = &self.inner.mapping;
        let maps = mapping.map_to_gateways(&model.to_record())?;

        for map in maps {
            let gateway = registry.gateway(&map.gateway)?;
            let count = gateway.delete(&map.store, &map.criteria)?;

            tracing::debug!(
                model = mapping.model_class(),
                gateway = %map.gateway,
                store = %map.store,
                count,
                cascade,
                "deleted model"
            );
        }

        Ok(())
    }

    /// Finds models matching `criteria`.
    ///
    /// A bare identifier, or criteria consisting of exactly the identifier
    /// field, is answered from the identity map when a live instance exists,
    /// without touching the gateway. Otherwise the gateway is read and each
    /// row becomes a model; rows whose identity already has a live instance
    /// yield that instance. Nothing matching is an empty collection.
    pub fn find(&self, criteria: impl Into<Criteria>) -> Result<Collection> {
        let criteria = criteria.into();
        let registry = self.registry()?;
        let mapping = &self.inner.mapping;

        if let Some(identity) = criteria.identity(mapping.id_property()) {
            if let Some(model) = registry.instance(mapping.model_class(), &identity.to_key()) {
                tracing::debug!(
                    model = mapping.model_class(),
                    identity = %identity,
                    "identity map hit"
                );
                return Ok(Collection::from(vec![model]));
            }
        }

        let criteria = criteria.into_record(mapping.id_property());
        let map = mapping.map_to_search_gateway(&criteria)?;
        let gateway = registry.gateway(&map.gateway)?;
        let rows = gateway.read(&map.store, &map.criteria)?;

        tracing::debug!(
            model = mapping.model_class(),
            gateway = %map.gateway,
            store = %map.store,
            rows = rows.len(),
            "read models"
        );

        let mut collection = Collection::new();

        for row in rows {
            let map = mapping.map_to_model(&row)?;
            let model = self.load(&registry, map.data)?;
            collection.push(model);
        }

        Ok(collection)
    }

    /// Returns the first model [`find`](Mapper::find) would return.
    pub fn find_one(&self, criteria: impl Into<Criteria>) -> Result<Option<Model>> {
        Ok(self.find(criteria)?.shift())
    }

    fn load(&self, registry: &Registry, data: Record) -> Result<Model> {
        let model = Model::new(
            ModelOptions::new()
                .mapper(self.clone())
                .id_property(self.id_property())
                .data(data),
        )?;

        let identity = model.identity();
        if identity.is_unset() {
            return Ok(model);
        }

        Ok(registry.keep_instance(self.model_class(), identity.to_key(), model))
    }
}

impl fmt::Debug for Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("model_class", &self.model_class())
            .field("id_property", &self.id_property())
            .finish()
    }
}
