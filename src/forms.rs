//! HAL-FORMS documents.
//!
//! A [`Document`] carries properties and links like a HAL resource plus a
//! `_templates` section describing the state transitions a client may
//! perform. The templates are assembled as given: no template is checked
//! against the document's properties.

use crate::constants::{
    DEFAULT_TEMPLATE, HAL_FORMS_RESERVED_PROPERTIES, LINKS_PROPERTY, SELF_RELATION,
    TEMPLATES_PROPERTY,
};
use crate::error::HalError;
use crate::link::LinkObject;
use crate::relation::LinkRelation;
use crate::serialization::{copy_properties, LinkTable};
use crate::utils::{insert_flag, insert_opt};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A HAL-FORMS document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    properties: Map<String, Value>,
    links: LinkTable,
    templates: Vec<(String, Template)>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-finite floats are stored, and emitted, as `null`.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_property(key, value);
        self
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn add_link(&mut self, relation: &LinkRelation, link: LinkObject) {
        self.links.add(relation, link);
    }

    pub fn add_self_link(&mut self, href: impl Into<String>) {
        self.links.push(SELF_RELATION, LinkObject::new(href));
    }

    /// # Errors
    /// Returns `HalError::InvalidArgument` if the link has no name.
    pub fn add_curie(&mut self, curie: LinkObject) -> Result<(), HalError> {
        self.links.add_curie(curie)
    }

    pub fn links(&self, full_name: &str) -> Option<&[LinkObject]> {
        self.links.get(full_name)
    }

    /// Adds a template under `key`, replacing any template already stored there
    /// while keeping its position.
    pub fn add_template(&mut self, key: impl Into<String>, template: Template) {
        let key = key.into();
        match self.templates.iter_mut().find(|(name, _)| *name == key) {
            Some((_, existing)) => *existing = template,
            None => self.templates.push((key, template)),
        }
    }

    pub fn add_default_template(&mut self, template: Template) {
        self.add_template(DEFAULT_TEMPLATE, template);
    }

    #[must_use]
    pub fn with_template(mut self, key: impl Into<String>, template: Template) -> Self {
        self.add_template(key, template);
        self
    }

    pub fn template(&self, key: &str) -> Option<&Template> {
        self.templates
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, template)| template)
    }

    /// Flattens the document: properties, then `_links`, then `_templates`.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = copy_properties(&self.properties, &HAL_FORMS_RESERVED_PROPERTIES);

        if let Some(links) = self.links.to_value() {
            map.insert(LINKS_PROPERTY.to_string(), links);
        }

        if !self.templates.is_empty() {
            let templates: Map<String, Value> = self
                .templates
                .iter()
                .map(|(key, template)| (key.clone(), Value::Object(template.to_map())))
                .collect();
            map.insert(TEMPLATES_PROPERTY.to_string(), Value::Object(templates));
        }

        map
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_map().serialize(serializer)
    }
}

/// One affordance: how to build and send a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub method: String,
    pub title: Option<String>,
    pub content_type: Option<String>,
    pub target: Option<String>,
    pub properties: Vec<Property>,
}

impl Template {
    pub fn new(method: impl Into<String>) -> Self {
        Template {
            method: method.into(),
            title: None,
            content_type: None,
            target: None,
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        insert_opt(&mut map, "title", self.title.clone());
        map.insert("method".to_string(), Value::String(self.method.clone()));
        insert_opt(&mut map, "contentType", self.content_type.clone());
        insert_opt(&mut map, "target", self.target.clone());
        let properties = self
            .properties
            .iter()
            .map(|property| Value::Object(property.to_map()))
            .collect();
        map.insert("properties".to_string(), Value::Array(properties));
        map
    }
}

/// Describes one field of a template.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Property {
    pub name: String,
    pub prompt: Option<String>,
    pub read_only: bool,
    pub regex: Option<String>,
    pub required: bool,
    pub templated: bool,
    pub value: Option<String>,
    pub input_type: Option<String>,
    pub placeholder: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub step: Option<f64>,
    pub cols: Option<u64>,
    pub rows: Option<u64>,
    pub options: Option<Options>,
}

impl Property {
    pub fn new(name: impl Into<String>) -> Self {
        Property {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    #[must_use]
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    #[must_use]
    pub fn with_regex(mut self, regex: impl Into<String>) -> Self {
        self.regex = Some(regex.into());
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn templated(mut self, templated: bool) -> Self {
        self.templated = templated;
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the HTML input type hint, e.g. `"email"` or `"number"`.
    #[must_use]
    pub fn with_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// A non-finite bound is emitted as `null`.
    #[must_use]
    pub fn with_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub fn with_length(mut self, min_length: Option<u64>, max_length: Option<u64>) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// A non-finite step is emitted as `null`.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    #[must_use]
    pub fn with_size(mut self, cols: u64, rows: u64) -> Self {
        self.cols = Some(cols);
        self.rows = Some(rows);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::String(self.name.clone()));
        insert_opt(&mut map, "prompt", self.prompt.clone());
        insert_flag(&mut map, "readOnly", self.read_only);
        insert_opt(&mut map, "regex", self.regex.clone());
        insert_flag(&mut map, "required", self.required);
        insert_flag(&mut map, "templated", self.templated);
        insert_opt(&mut map, "value", self.value.clone());
        insert_opt(&mut map, "type", self.input_type.clone());
        insert_opt(&mut map, "placeholder", self.placeholder.clone());
        insert_opt(&mut map, "min", self.min);
        insert_opt(&mut map, "max", self.max);
        insert_opt(&mut map, "minLength", self.min_length);
        insert_opt(&mut map, "maxLength", self.max_length);
        insert_opt(&mut map, "step", self.step);
        insert_opt(&mut map, "cols", self.cols);
        insert_opt(&mut map, "rows", self.rows);
        if let Some(options) = &self.options {
            map.insert("options".to_string(), Value::Object(options.to_map()));
        }
        map
    }
}

/// A selectable value, either bare or with a display prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Plain(String),
    Labeled { prompt: String, value: String },
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Plain(value.to_string())
    }
}

impl From<OptionValue> for Value {
    fn from(option: OptionValue) -> Self {
        match option {
            OptionValue::Plain(value) => Value::String(value),
            OptionValue::Labeled { prompt, value } => {
                let mut map = Map::new();
                map.insert("prompt".to_string(), Value::String(prompt));
                map.insert("value".to_string(), Value::String(value));
                Value::Object(map)
            }
        }
    }
}

/// The set of values a property may take, listed inline or behind a link.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    pub inline: Vec<OptionValue>,
    pub link: Option<LinkObject>,
    pub max_items: Option<u64>,
    pub min_items: Option<u64>,
    pub prompt_field: Option<String>,
    pub value_field: Option<String>,
    pub selected_values: Vec<String>,
}

impl Options {
    pub fn inline<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<OptionValue>,
    {
        Options {
            inline: values.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn linked(link: LinkObject) -> Self {
        Options {
            link: Some(link),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_items(mut self, min_items: Option<u64>, max_items: Option<u64>) -> Self {
        self.min_items = min_items;
        self.max_items = max_items;
        self
    }

    #[must_use]
    pub fn with_fields(mut self, prompt_field: impl Into<String>, value_field: impl Into<String>) -> Self {
        self.prompt_field = Some(prompt_field.into());
        self.value_field = Some(value_field.into());
        self
    }

    #[must_use]
    pub fn with_selected(mut self, value: impl Into<String>) -> Self {
        self.selected_values.push(value.into());
        self
    }

    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        if !self.inline.is_empty() {
            let inline = self.inline.iter().cloned().map(Value::from).collect();
            map.insert("inline".to_string(), Value::Array(inline));
        }
        if let Some(link) = &self.link {
            map.insert("link".to_string(), Value::Object(link.to_map()));
        }
        insert_opt(&mut map, "maxItems", self.max_items);
        insert_opt(&mut map, "minItems", self.min_items);
        insert_opt(&mut map, "promptField", self.prompt_field.clone());
        insert_opt(&mut map, "valueField", self.value_field.clone());
        if !self.selected_values.is_empty() {
            let selected = self.selected_values.iter().cloned().map(Value::String).collect();
            map.insert("selectedValues".to_string(), Value::Array(selected));
        }
        map
    }
}
