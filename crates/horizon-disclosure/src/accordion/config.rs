//! Accordion configuration.
//!
//! [`AccordionConfig`] can be built in code with the `with_*` methods or
//! decoded with serde from the public camelCase names:
//!
//! ```
//! use horizon_disclosure::accordion::{AccordionConfig, Mode};
//!
//! let config: AccordionConfig = serde_json::from_str(
//!     r#"{ "mode": "multiple", "allowZeroCollapse": false, "preExpand": ["two", "three"] }"#,
//! ).unwrap();
//!
//! assert_eq!(config.mode, Mode::Multiple);
//! assert!(!config.allow_zero_collapse);
//! ```
//!
//! `type` is accepted as an alias of `mode`. Any other mode value fails with
//! the fixed invalid-mode message.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::state::ItemValue;
use crate::error::{AccordionError, Result};

/// Default heading level wrapping each header trigger.
pub const DEFAULT_HEADING_LEVEL: u8 = 3;

/// How many items may be open at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Mode {
    /// At most one open item.
    Single,
    /// Any number of open items.
    Multiple,
}

impl Mode {
    /// The configuration spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Single => "single",
            Mode::Multiple => "multiple",
        }
    }
}

impl FromStr for Mode {
    type Err = AccordionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "single" => Ok(Mode::Single),
            "multiple" => Ok(Mode::Multiple),
            other => Err(AccordionError::InvalidMode {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Mode {
    type Error = AccordionError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_allow_zero_collapse() -> bool {
    true
}

fn default_heading_level() -> u8 {
    DEFAULT_HEADING_LEVEL
}

/// Declarative accordion configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionConfig {
    /// Single or multiple open items.
    #[serde(alias = "type")]
    pub mode: Mode,

    /// Whether toggles may leave zero items open.
    #[serde(default = "default_allow_zero_collapse")]
    pub allow_zero_collapse: bool,

    /// Items open at construction (uncontrolled accordions only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_expand: Option<ItemValue>,

    /// Level of the heading wrapping each trigger (`h1`..`h6`).
    #[serde(default = "default_heading_level")]
    pub heading_level: u8,
}

impl AccordionConfig {
    /// Configuration for `mode` with defaults for everything else.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            allow_zero_collapse: default_allow_zero_collapse(),
            pre_expand: None,
            heading_level: DEFAULT_HEADING_LEVEL,
        }
    }

    /// Single-mode configuration.
    pub fn single() -> Self {
        Self::new(Mode::Single)
    }

    /// Multiple-mode configuration.
    pub fn multiple() -> Self {
        Self::new(Mode::Multiple)
    }

    /// Configuration from a mode string, failing on anything but
    /// `single`/`multiple`.
    pub fn parse(mode: &str) -> Result<Self> {
        Ok(Self::new(mode.parse()?))
    }

    /// Set whether toggles may leave zero items open.
    pub fn with_allow_zero_collapse(mut self, allow: bool) -> Self {
        self.allow_zero_collapse = allow;
        self
    }

    /// Set the items open at construction.
    pub fn with_pre_expand(mut self, value: impl Into<ItemValue>) -> Self {
        self.pre_expand = Some(value.into());
        self
    }

    /// Set the heading level, clamped to 1..=6.
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.heading_level = level.clamp(1, 6);
        self
    }

    /// Heading tag name. Decoded levels outside 1..=6 are clamped here.
    pub fn heading_tag(&self) -> String {
        format!("h{}", self.heading_level.clamp(1, 6))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::INVALID_MODE_MESSAGE;

    #[test]
    fn test_mode_parse() {
        assert_eq!("single".parse::<Mode>().unwrap(), Mode::Single);
        assert_eq!("multiple".parse::<Mode>().unwrap(), Mode::Multiple);

        let err = "invalidType".parse::<Mode>().unwrap_err();
        assert_eq!(err.to_string(), INVALID_MODE_MESSAGE);
        // Matching is exact.
        assert!("Single".parse::<Mode>().is_err());
        assert!("".parse::<Mode>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = AccordionConfig::single();
        assert_eq!(config.mode, Mode::Single);
        assert!(config.allow_zero_collapse);
        assert_eq!(config.pre_expand, None);
        assert_eq!(config.heading_tag(), "h3");
    }

    #[test]
    fn test_builder() {
        let config = AccordionConfig::parse("multiple")
            .unwrap()
            .with_allow_zero_collapse(false)
            .with_pre_expand(["a", "b"])
            .with_heading_level(9);

        assert_eq!(config.mode, Mode::Multiple);
        assert!(!config.allow_zero_collapse);
        assert_eq!(config.pre_expand, Some(ItemValue::from(["a", "b"])));
        assert_eq!(config.heading_level, 6);
        assert_eq!(config.heading_tag(), "h6");
        assert_eq!(config.with_heading_level(0).heading_level, 1);
    }

    #[test]
    fn test_decoded_heading_level_clamped_in_tag() {
        let config: AccordionConfig =
            serde_json::from_str(r#"{ "mode": "single", "headingLevel": 0 }"#).unwrap();
        assert_eq!(config.heading_level, 0);
        assert_eq!(config.heading_tag(), "h1");
    }

    #[test]
    fn test_parse_rejects_invalid_mode() {
        assert_eq!(
            AccordionConfig::parse("invalidType"),
            Err(AccordionError::InvalidMode {
                value: "invalidType".into()
            })
        );
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Single.to_string(), "single");
        assert_eq!(Mode::Multiple.as_str(), "multiple");
    }
}
