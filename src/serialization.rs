use crate::constants::CURIES_RELATION;
use crate::error::{ArgumentError, HalError};
use crate::link::LinkObject;
use crate::relation::LinkRelation;
use serde::Serialize;
use serde_json::{Map, Value};

/// Output form of one relation: a bare object for a single entry, an array otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum Projection<T> {
    One(T),
    Many(Vec<T>),
}

impl<T: Into<Value>> Projection<T> {
    pub fn into_value(self) -> Value {
        match self {
            Projection::One(item) => item.into(),
            Projection::Many(items) => Value::Array(items.into_iter().map(Into::into).collect()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct RelationEntry<T> {
    name: String,
    items: Vec<T>,
    always_array: bool,
}

/// Relation name to an ordered sequence of items, ordered by first registration.
///
/// Storage is always a sequence; only [`RelationTable::to_map`] collapses
/// single entries.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RelationTable<T> {
    entries: Vec<RelationEntry<T>>,
}

impl<T> Default for RelationTable<T> {
    fn default() -> Self {
        RelationTable {
            entries: Vec::new(),
        }
    }
}

impl<T> RelationTable<T> {
    fn entry_mut(&mut self, name: &str) -> &mut RelationEntry<T> {
        let index = match self.entries.iter().position(|entry| entry.name == name) {
            Some(index) => index,
            None => {
                self.entries.push(RelationEntry {
                    name: name.to_string(),
                    items: Vec::new(),
                    always_array: false,
                });
                self.entries.len() - 1
            }
        };
        &mut self.entries[index]
    }

    pub fn push(&mut self, name: &str, item: T) {
        self.entry_mut(name).items.push(item);
    }

    /// Keeps the array form for `name` even when it holds a single item.
    pub fn force_array(&mut self, name: &str) {
        self.entry_mut(name).always_array = true;
    }

    pub fn get(&self, name: &str) -> Option<&[T]> {
        self.entries
            .iter()
            .find(|entry| entry.name == name && !entry.items.is_empty())
            .map(|entry| entry.items.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|entry| entry.items.is_empty())
    }

    /// Projects every relation holding at least one item, in registration order.
    pub fn project<'a, U>(&'a self, f: impl Fn(&'a T) -> U) -> Vec<(&'a str, Projection<U>)> {
        self.entries
            .iter()
            .filter(|entry| !entry.items.is_empty())
            .map(|entry| {
                let projection = match entry.items.as_slice() {
                    [single] if !entry.always_array => Projection::One(f(single)),
                    items => Projection::Many(items.iter().map(&f).collect()),
                };
                (entry.name.as_str(), projection)
            })
            .collect()
    }

    pub fn to_map<'a, U>(&'a self, f: impl Fn(&'a T) -> U) -> Map<String, Value>
    where
        U: Into<Value>,
    {
        let mut map = Map::new();
        for (name, projection) in self.project(f) {
            log::trace!("flattening relation {name:?}");
            map.insert(name.to_string(), projection.into_value());
        }
        map
    }
}

/// Copies user properties in insertion order, skipping `reserved` keys.
pub(crate) fn copy_properties(properties: &Map<String, Value>, reserved: &[&str]) -> Map<String, Value> {
    let mut map = Map::new();
    for (key, value) in properties {
        if reserved.contains(&key.as_str()) {
            log::warn!("skipping property {key:?}: the key is reserved");
            continue;
        }
        map.insert(key.clone(), value.clone());
    }
    map
}

/// The `_links` section shared by resources and HAL-FORMS documents.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct LinkTable {
    curies: Vec<LinkObject>,
    relations: RelationTable<LinkObject>,
}

impl LinkTable {
    pub fn add(&mut self, relation: &LinkRelation, link: LinkObject) {
        self.declare_curie_of(relation);
        self.relations.push(&relation.full_name(), link);
    }

    /// Adds `link` under a relation known to need no CURIE, such as `self`.
    pub fn push(&mut self, full_name: &str, link: LinkObject) {
        self.relations.push(full_name, link);
    }

    /// Registers the CURIE link of `relation`, if it has one.
    pub fn declare_curie_of(&mut self, relation: &LinkRelation) {
        if let Some(curie) = relation.curie_link() {
            self.register_curie(curie.clone());
        }
    }

    pub fn force_array(&mut self, relation: &LinkRelation) {
        self.relations.force_array(&relation.full_name());
    }

    pub fn add_curie(&mut self, curie: LinkObject) -> Result<(), HalError> {
        if !curie.name.as_deref().is_some_and(|prefix| !prefix.is_empty()) {
            return Err(ArgumentError::UnnamedCurie { href: curie.href }.into());
        }
        self.register_curie(curie);
        Ok(())
    }

    fn register_curie(&mut self, curie: LinkObject) {
        match self.curies.iter().find(|known| known.name == curie.name) {
            Some(known) if known.href != curie.href => {
                log::warn!(
                    "CURIE {:?} already declared with href {:?}, ignoring {:?}",
                    curie.name.as_deref().unwrap_or_default(),
                    known.href,
                    curie.href
                );
            }
            Some(_) => {}
            None => self.curies.push(curie),
        }
    }

    pub fn get(&self, full_name: &str) -> Option<&[LinkObject]> {
        if full_name == CURIES_RELATION && !self.curies.is_empty() {
            return Some(&self.curies);
        }
        self.relations.get(full_name)
    }

    pub fn curies(&self) -> &[LinkObject] {
        &self.curies
    }

    pub fn is_empty(&self) -> bool {
        self.curies.is_empty() && self.relations.is_empty()
    }

    /// The nested `_links` object, `None` when nothing was registered.
    pub fn to_value(&self) -> Option<Value> {
        if self.is_empty() {
            return None;
        }
        let mut map = Map::new();
        if !self.curies.is_empty() {
            let curies = self.curies.iter().map(|curie| Value::Object(curie.to_map()));
            map.insert(CURIES_RELATION.to_string(), Value::Array(curies.collect()));
        }
        for (name, links) in self.relations.to_map(LinkObject::to_map) {
            if name == CURIES_RELATION && map.contains_key(CURIES_RELATION) {
                log::warn!("links under the \"curies\" relation are replaced by declared CURIEs");
                continue;
            }
            map.insert(name, links);
        }
        Some(Value::Object(map))
    }
}

#[cfg(test)]
mod tests {
    use super::{Projection, RelationTable};
    use serde_json::{json, Value};

    #[test]
    fn test_single_item_collapses() {
        let mut table = RelationTable::default();
        table.push("self", 1);
        assert_eq!(table.project(|n| *n), vec![("self", Projection::One(1))]);
    }

    #[test]
    fn test_forced_array_keeps_sequence() {
        let mut table = RelationTable::default();
        table.force_array("item");
        table.push("item", 1);
        assert_eq!(table.project(|n| *n), vec![("item", Projection::Many(vec![1]))]);
    }

    #[test]
    fn test_registration_order() {
        let mut table = RelationTable::default();
        table.push("b", 1);
        table.push("a", 2);
        table.push("b", 3);

        let map = table.to_map(|n| Value::from(*n));
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(map["b"], json!([1, 3]));
        assert_eq!(map["a"], json!(2));
    }

    #[test]
    fn test_empty_relations_are_skipped() {
        let mut table: RelationTable<i32> = RelationTable::default();
        table.force_array("item");
        assert!(table.is_empty());
        assert!(table.project(|n| *n).is_empty());
        assert!(table.get("item").is_none());
    }

    #[test]
    fn test_projection_serializes_untagged() {
        assert_eq!(serde_json::to_value(Projection::One("a")).unwrap(), json!("a"));
        assert_eq!(
            serde_json::to_value(Projection::Many(vec!["a", "b"])).unwrap(),
            json!(["a", "b"])
        );
    }
}
