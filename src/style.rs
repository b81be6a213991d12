//! Font styling configuration for rendered subtitle lines.

use crate::error::{Error, Result};
use std::str::FromStr;

/// Font attributes applied to one track's rendered line.
///
/// A fixed set of named fields rather than a free-form map: unknown attribute
/// names are rejected when the style is constructed, long before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontStyle {
    /// `size` attribute of the font tag.
    pub size: Option<String>,
    /// `color` attribute of the font tag.
    pub color: Option<String>,
}

impl FontStyle {
    /// Default style for the primary (learned-language) line.
    pub fn primary_default() -> Self {
        Self {
            size: Some("18".to_string()),
            color: None,
        }
    }

    /// Default style for the secondary (understood-language) line.
    pub fn secondary_default() -> Self {
        Self {
            size: Some("15".to_string()),
            color: Some("gray".to_string()),
        }
    }

    /// Attribute pairs in name order, so rendered tags are deterministic.
    fn attributes(&self) -> Vec<(&'static str, &str)> {
        let mut attributes = Vec::new();
        if let Some(color) = &self.color {
            attributes.push(("color", color.as_str()));
        }
        if let Some(size) = &self.size {
            attributes.push(("size", size.as_str()));
        }
        attributes
    }

    /// Wrap text in a `<font>` span carrying these attributes.
    ///
    /// A style with no attributes set leaves the text unwrapped.
    pub fn wrap(&self, text: &str) -> String {
        let attributes = self.attributes();
        if attributes.is_empty() {
            return text.to_string();
        }
        let mut tag = String::from("<font");
        for (name, value) in attributes {
            tag.push_str(&format!(" {name}=\"{value}\""));
        }
        format!("{tag}>{text}</font>")
    }
}

impl FromStr for FontStyle {
    type Err = Error;

    /// Parse a `name:value,name:value` attribute list, e.g. `size:15,color:gray`.
    fn from_str(s: &str) -> Result<Self> {
        let mut style = FontStyle::default();
        for entry in s.split(',').filter(|entry| !entry.is_empty()) {
            let (name, value) = entry
                .split_once(':')
                .ok_or_else(|| Error::MalformedStyleEntry {
                    entry: entry.to_string(),
                })?;
            match name.trim() {
                "size" => style.size = Some(value.trim().to_string()),
                "color" => style.color = Some(value.trim().to_string()),
                other => {
                    return Err(Error::UnknownStyleAttribute {
                        name: other.to_string(),
                    })
                }
            }
        }
        Ok(style)
    }
}
