use crate::constants::{EMBEDDED_PROPERTY, HAL_RESERVED_PROPERTIES, LINKS_PROPERTY, SELF_RELATION};
use crate::error::{ArgumentError, HalError};
use crate::link::LinkObject;
use crate::relation::LinkRelation;
use crate::serialization::{copy_properties, LinkTable, RelationTable};
use crate::utils::value_kind;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A HAL resource: properties, links and embedded resources.
///
/// A resource is assembled by the caller and flattened with [`Resource::to_map`].
/// Embedding moves the child into its parent, so a resource graph is always a
/// tree and flattening terminates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resource {
    properties: Map<String, Value>,
    links: LinkTable,
    embedded: RelationTable<Resource>,
}

impl Resource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, keeping its original position when the key already exists.
    ///
    /// `_links` and `_embedded` are accepted here but never emitted; flattening
    /// owns those keys.
    ///
    /// Values go through `serde_json::Value`, where a non-finite float
    /// (`NaN`, `±inf`) becomes `null`.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_property(key, value);
        self
    }

    /// Merges the fields of a serializable struct or map into the properties.
    ///
    /// # Errors
    /// Returns `HalError::Encoding` if `data` fails to serialize and
    /// `HalError::InvalidArgument` if it does not serialize to an object.
    pub fn add_data<T>(&mut self, data: &T) -> Result<(), HalError>
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(data)? {
            Value::Object(fields) => {
                for (key, value) in fields {
                    self.properties.insert(key, value);
                }
                Ok(())
            }
            other => Err(ArgumentError::NonObjectData {
                found: value_kind(&other).to_string(),
            }
            .into()),
        }
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    pub fn remove_property(&mut self, key: &str) -> Option<Value> {
        self.properties.shift_remove(key)
    }

    /// Registers `link` under `relation`. A CURIE-qualified relation also
    /// declares its CURIE link under `curies`.
    pub fn add_link(&mut self, relation: &LinkRelation, link: LinkObject) {
        self.links.add(relation, link);
    }

    pub fn add_links<I>(&mut self, relation: &LinkRelation, links: I)
    where
        I: IntoIterator<Item = LinkObject>,
    {
        for link in links {
            self.links.add(relation, link);
        }
    }

    pub fn add_self_link(&mut self, href: impl Into<String>) {
        self.links.push(SELF_RELATION, LinkObject::new(href));
    }

    #[must_use]
    pub fn with_self_link(mut self, href: impl Into<String>) -> Self {
        self.add_self_link(href);
        self
    }

    /// Declares a CURIE without using it in a relation yet.
    ///
    /// # Errors
    /// Returns `HalError::InvalidArgument` if the link has no name.
    pub fn add_curie(&mut self, curie: LinkObject) -> Result<(), HalError> {
        self.links.add_curie(curie)
    }

    /// Emits `relation` as an array of links even when it holds only one.
    pub fn force_link_array(&mut self, relation: &LinkRelation) {
        self.links.force_array(relation);
    }

    pub fn links(&self, full_name: &str) -> Option<&[LinkObject]> {
        self.links.get(full_name)
    }

    pub fn curies(&self) -> &[LinkObject] {
        self.links.curies()
    }

    pub fn add_embedded(&mut self, relation: &LinkRelation, resource: Resource) {
        self.links.declare_curie_of(relation);
        self.embedded.push(&relation.full_name(), resource);
    }

    pub fn add_embedded_all<I>(&mut self, relation: &LinkRelation, resources: I)
    where
        I: IntoIterator<Item = Resource>,
    {
        for resource in resources {
            self.add_embedded(relation, resource);
        }
    }

    /// Emits `relation` as an array of resources even when it holds only one.
    pub fn force_embedded_array(&mut self, relation: &LinkRelation) {
        self.embedded.force_array(&relation.full_name());
    }

    pub fn embedded(&self, full_name: &str) -> Option<&[Resource]> {
        self.embedded.get(full_name)
    }

    /// Flattens the resource into its HAL shape: properties in insertion
    /// order, then `_links`, then `_embedded`. Empty sections are omitted.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = copy_properties(&self.properties, &HAL_RESERVED_PROPERTIES);

        if let Some(links) = self.links.to_value() {
            map.insert(LINKS_PROPERTY.to_string(), links);
        }

        if !self.embedded.is_empty() {
            let embedded = self.embedded.to_map(Resource::to_map);
            map.insert(EMBEDDED_PROPERTY.to_string(), Value::Object(embedded));
        }

        map
    }
}

impl Serialize for Resource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_map().serialize(serializer)
    }
}
