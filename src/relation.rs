use crate::error::{ArgumentError, HalError};
use crate::link::LinkObject;
use std::fmt::Display;

/// Names the role a link or embedded resource plays for its owning resource.
///
/// A relation may be qualified by a CURIE link, in which case its full name is
/// the compact form `<prefix>:<name>` and the CURIE link describes what the
/// prefix expands to.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRelation {
    name: String,
    curie_link: Option<LinkObject>,
}

impl LinkRelation {
    /// # Errors
    /// Returns `HalError::InvalidArgument` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, HalError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ArgumentError::EmptyRelationName.into());
        }
        Ok(LinkRelation {
            name,
            curie_link: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attaches the CURIE link whose `name` becomes this relation's prefix.
    ///
    /// # Errors
    /// Returns `HalError::InvalidArgument` if the link has no name.
    pub fn set_curie_link(&mut self, curie_link: LinkObject) -> Result<(), HalError> {
        let has_prefix = curie_link
            .name
            .as_deref()
            .is_some_and(|prefix| !prefix.is_empty());
        if !has_prefix {
            return Err(ArgumentError::UnnamedCurie {
                href: curie_link.href,
            }
            .into());
        }
        self.curie_link = Some(curie_link);
        Ok(())
    }

    /// Builder form of [`set_curie_link`](Self::set_curie_link).
    ///
    /// # Errors
    /// Returns `HalError::InvalidArgument` if the link has no name.
    pub fn with_curie_link(mut self, curie_link: LinkObject) -> Result<Self, HalError> {
        self.set_curie_link(curie_link)?;
        Ok(self)
    }

    pub fn has_curie(&self) -> bool {
        self.curie_link.is_some()
    }

    pub fn curie_link(&self) -> Option<&LinkObject> {
        self.curie_link.as_ref()
    }

    /// The key this relation is written under: `name`, or `prefix:name` with a CURIE.
    pub fn full_name(&self) -> String {
        match self.curie_link.as_ref().and_then(|link| link.name.as_deref()) {
            Some(prefix) => format!("{prefix}:{}", self.name),
            None => self.name.clone(),
        }
    }
}

impl TryFrom<&str> for LinkRelation {
    type Error = HalError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        LinkRelation::new(name)
    }
}

impl TryFrom<String> for LinkRelation {
    type Error = HalError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        LinkRelation::new(name)
    }
}

impl Display for LinkRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name())
    }
}
