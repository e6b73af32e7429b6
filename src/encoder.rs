use crate::constants::{HAL_FORMS_MEDIA_TYPE, HAL_JSON_MEDIA_TYPE};
use crate::error::{EncodingError, HalError};
use crate::forms::Document;
use crate::resource::Resource;
use serde_json::{Map, Value};
use std::io::Write;

/// A model that flattens into a HAL-shaped ordered map.
pub trait Hypermedia {
    /// Media type of the JSON rendition.
    const MEDIA_TYPE: &'static str;

    fn to_map(&self) -> Map<String, Value>;

    /// Serializes the flattened model into a compact JSON string.
    ///
    /// # Errors
    /// Returns `HalError::Encoding` if serialization fails.
    fn to_json(&self) -> Result<String, HalError> {
        Ok(serde_json::to_string(&self.to_map())?)
    }

    /// Serializes the flattened model into a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns `HalError::Encoding` if serialization fails.
    fn to_json_pretty(&self) -> Result<String, HalError> {
        Ok(serde_json::to_string_pretty(&self.to_map())?)
    }

    /// Serializes the flattened model into a YAML string.
    ///
    /// # Errors
    /// Returns `HalError::Encoding` if serialization fails.
    fn to_yaml(&self) -> Result<String, HalError> {
        Ok(serde_yaml::to_string(&self.to_map())?)
    }
}

impl Hypermedia for Resource {
    const MEDIA_TYPE: &'static str = HAL_JSON_MEDIA_TYPE;

    fn to_map(&self) -> Map<String, Value> {
        Resource::to_map(self)
    }
}

impl Hypermedia for Document {
    const MEDIA_TYPE: &'static str = HAL_FORMS_MEDIA_TYPE;

    fn to_map(&self) -> Map<String, Value> {
        Document::to_map(self)
    }
}

/// Turns a flattened model into bytes. Encoders hold no state between calls.
pub trait Encoder {
    /// # Errors
    /// Returns `HalError::Encoding` if the serializer or the writer fails.
    fn encode_to_writer<H, W>(&self, model: &H, writer: W) -> Result<(), HalError>
    where
        H: Hypermedia + ?Sized,
        W: Write;

    /// # Errors
    /// Returns `HalError::Encoding` if the serializer fails.
    fn encode<H>(&self, model: &H) -> Result<Vec<u8>, HalError>
    where
        H: Hypermedia + ?Sized,
    {
        let mut bytes = Vec::new();
        self.encode_to_writer(model, &mut bytes)?;
        Ok(bytes)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonEncoder {
    pretty: bool,
}

impl JsonEncoder {
    /// Compact output, no insignificant whitespace.
    pub fn new() -> Self {
        JsonEncoder { pretty: false }
    }

    pub fn pretty() -> Self {
        JsonEncoder { pretty: true }
    }
}

impl Encoder for JsonEncoder {
    fn encode_to_writer<H, W>(&self, model: &H, writer: W) -> Result<(), HalError>
    where
        H: Hypermedia + ?Sized,
        W: Write,
    {
        let map = model.to_map();
        log::debug!(
            "encoding {} document with {} top-level keys",
            H::MEDIA_TYPE,
            map.len()
        );
        let result = if self.pretty {
            serde_json::to_writer_pretty(writer, &map)
        } else {
            serde_json::to_writer(writer, &map)
        };
        result.map_err(|err| -> HalError {
            if err.is_io() {
                EncodingError::Io(err.into()).into()
            } else {
                EncodingError::Json(err).into()
            }
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YamlEncoder;

impl Encoder for YamlEncoder {
    fn encode_to_writer<H, W>(&self, model: &H, writer: W) -> Result<(), HalError>
    where
        H: Hypermedia + ?Sized,
        W: Write,
    {
        let map = model.to_map();
        log::debug!("encoding document as YAML with {} top-level keys", map.len());
        serde_yaml::to_writer(writer, &map)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Encoder, Hypermedia, JsonEncoder};
    use crate::forms::Document;
    use crate::resource::Resource;

    #[test]
    fn test_item_encodes_byte_exact() {
        let resource = Resource::new()
            .with_property("id", 42)
            .with_self_link("/items/42");

        let bytes = JsonEncoder::new().encode(&resource).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"id":42,"_links":{"self":{"href":"/items/42"}}}"#
        );
    }

    #[test]
    fn test_to_json_matches_encoder() {
        let resource = Resource::new().with_property("a", true);
        let bytes = JsonEncoder::new().encode(&resource).unwrap();
        assert_eq!(resource.to_json().unwrap().into_bytes(), bytes);
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        let resource = Resource::new().with_property("a", 1).with_property("b", 2);
        let pretty = String::from_utf8(JsonEncoder::pretty().encode(&resource).unwrap()).unwrap();
        assert_eq!(pretty, "{\n  \"a\": 1,\n  \"b\": 2\n}");
    }

    #[test]
    fn test_media_types() {
        assert_eq!(<Resource as Hypermedia>::MEDIA_TYPE, "application/hal+json");
        assert_eq!(<Document as Hypermedia>::MEDIA_TYPE, "application/prs.hal-forms+json");
    }

    #[test]
    fn test_yaml_keeps_key_order() {
        let resource = Resource::new()
            .with_property("name", "widget")
            .with_property("count", 3)
            .with_self_link("/widgets/1");

        assert_eq!(
            resource.to_yaml().unwrap(),
            "name: widget\ncount: 3\n_links:\n  self:\n    href: /widgets/1\n"
        );
    }
}
