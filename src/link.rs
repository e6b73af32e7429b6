use crate::utils::{insert_flag, insert_opt};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

const STANDARD_ATTRIBUTES: [&str; 8] = [
    "href",
    "templated",
    "type",
    "deprecation",
    "name",
    "profile",
    "title",
    "hreflang",
];

/// A single hypermedia link of a HAL document.
///
/// Only `href` is mandatory. The href is not interpreted: URI templates are
/// not checked and malformed values pass through to the output unchanged.
///
/// When attached to a [`LinkRelation`](crate::relation::LinkRelation) as its
/// CURIE link, `name` is the CURIE prefix and `href` the template the prefix
/// expands to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinkObject {
    pub href: String,
    pub templated: bool,
    pub media_type: Option<String>,
    pub deprecation: Option<String>,
    pub name: Option<String>,
    pub profile: Option<String>,
    pub title: Option<String>,
    pub hreflang: Option<String>,
    extensions: Map<String, Value>,
}

impl LinkObject {
    pub fn new(href: impl Into<String>) -> Self {
        LinkObject {
            href: href.into(),
            ..Self::default()
        }
    }

    /// Builds a templated CURIE link, e.g. `curie("acme", "https://docs.acme.com/rels/{rel}")`.
    pub fn curie(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new(href).with_name(name).templated(true)
    }

    #[must_use]
    pub fn templated(mut self, templated: bool) -> Self {
        self.templated = templated;
        self
    }

    #[must_use]
    pub fn with_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    #[must_use]
    pub fn with_deprecation(mut self, deprecation: impl Into<String>) -> Self {
        self.deprecation = Some(deprecation.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.hreflang = Some(hreflang.into());
        self
    }

    /// Adds a non-standard attribute. Keys of standard HAL attributes are ignored
    /// when flattening, so an extension can never shadow `href` and friends.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }

    /// The link's attribute map in HAL attribute order, extensions last.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("href".to_string(), Value::String(self.href.clone()));
        insert_flag(&mut map, "templated", self.templated);
        insert_opt(&mut map, "type", self.media_type.clone());
        insert_opt(&mut map, "deprecation", self.deprecation.clone());
        insert_opt(&mut map, "name", self.name.clone());
        insert_opt(&mut map, "profile", self.profile.clone());
        insert_opt(&mut map, "title", self.title.clone());
        insert_opt(&mut map, "hreflang", self.hreflang.clone());

        for (key, value) in &self.extensions {
            if STANDARD_ATTRIBUTES.contains(&key.as_str()) {
                log::warn!("ignoring link extension attribute {key:?}: it is a standard HAL attribute");
                continue;
            }
            map.insert(key.clone(), value.clone());
        }
        map
    }
}

impl From<&str> for LinkObject {
    fn from(href: &str) -> Self {
        LinkObject::new(href)
    }
}

impl From<String> for LinkObject {
    fn from(href: String) -> Self {
        LinkObject::new(href)
    }
}

impl Serialize for LinkObject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_map().serialize(serializer)
    }
}
