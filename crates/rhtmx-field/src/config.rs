// File: src/config.rs
// Purpose: Field configuration as supplied by callers (TOML, JSON or builder)

use crate::value::Value;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Raw field configuration
///
/// Every key is optional and unknown keys are ignored, so configuration from
/// untrusted sources can be passed straight through. Normalization happens
/// when a [`Field`](crate::Field) is built from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    /// Wrapper tag name (default: "p")
    pub wrap: String,

    pub id: String,

    pub name: String,

    /// Renderer key, e.g. "text", "select"
    #[serde(rename = "type")]
    pub field_type: String,

    pub label: String,

    /// "before_field" or "after_field"
    pub label_pos: String,

    /// "block" or "inline"
    pub layout: String,

    /// Value → label pairs for radio groups and selects
    pub choices: IndexMap<String, String>,

    /// Extra HTML attributes for the control tag
    pub meta: IndexMap<String, Value>,

    pub value: Value,
}

impl FieldConfig {
    pub fn new(field_type: impl Into<String>) -> Self {
        Self {
            field_type: field_type.into(),
            ..Self::default()
        }
    }

    /// Parse configuration from a TOML table
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse field config from TOML")
    }

    /// Parse configuration from a JSON object
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse field config from JSON")
    }

    pub fn wrap(mut self, wrap: impl Into<String>) -> Self {
        self.wrap = wrap.into();
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn label_pos(mut self, label_pos: impl Into<String>) -> Self {
        self.label_pos = label_pos.into();
        self
    }

    pub fn layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    pub fn choice(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.choices.insert(value.into(), label.into());
        self
    }

    pub fn meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }
}

/// Where a label sits relative to its control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPos {
    BeforeField,
    #[default]
    AfterField,
}

impl LabelPos {
    /// Exact match on "before_field" / "after_field", otherwise after_field
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "before_field" => LabelPos::BeforeField,
            "after_field" => LabelPos::AfterField,
            other => {
                if !other.is_empty() {
                    tracing::trace!("Unknown label position {:?}, using after_field", other);
                }
                LabelPos::default()
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LabelPos::BeforeField => "before_field",
            LabelPos::AfterField => "after_field",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    Block,
    #[default]
    Inline,
}

impl Layout {
    /// Exact match on "block" / "inline", otherwise inline
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "block" => Layout::Block,
            "inline" => Layout::Inline,
            other => {
                if !other.is_empty() {
                    tracing::trace!("Unknown layout {:?}, using inline", other);
                }
                Layout::default()
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Block => "block",
            Layout::Inline => "inline",
        }
    }
}
