//! Fixed HAL and HAL-FORMS vocabulary.

/// Reserved key holding the Link Objects of a HAL document.
pub const LINKS_PROPERTY: &str = "_links";

/// Reserved key holding embedded resources of a HAL document.
pub const EMBEDDED_PROPERTY: &str = "_embedded";

/// Reserved key holding the templates of a HAL-FORMS document.
pub const TEMPLATES_PROPERTY: &str = "_templates";

/// Keys a HAL resource injects when flattening; never copied from user properties.
pub const HAL_RESERVED_PROPERTIES: [&str; 2] = [LINKS_PROPERTY, EMBEDDED_PROPERTY];

/// Keys reserved in a HAL-FORMS document.
pub const HAL_FORMS_RESERVED_PROPERTIES: [&str; 3] =
    [LINKS_PROPERTY, EMBEDDED_PROPERTY, TEMPLATES_PROPERTY];

/// Relation under which CURIE links are listed.
pub const CURIES_RELATION: &str = "curies";

pub const SELF_RELATION: &str = "self";

/// Key of the template a HAL-FORMS client renders by default.
pub const DEFAULT_TEMPLATE: &str = "default";

pub const HAL_JSON_MEDIA_TYPE: &str = "application/hal+json";

pub const HAL_FORMS_MEDIA_TYPE: &str = "application/prs.hal-forms+json";
