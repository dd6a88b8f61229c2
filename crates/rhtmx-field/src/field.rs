// File: src/field.rs
// Purpose: Field construction, attribute normalization and render dispatch

use crate::attrs::normalize_meta;
use crate::config::{FieldConfig, LabelPos, Layout};
use crate::escape::{Escape, HtmlEscaper};
use crate::slug::{slugify, to_ascii, Replacement};
use crate::value::Value;
use indexmap::IndexMap;

const DEFAULT_WRAP: &str = "p";

/// Characters kept as-is in field names so `tags[]` style names survive
const NAME_EXEMPT: [char; 2] = ['[', ']'];

/// Field types that have a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Email,
    Number,
    Url,
    File,
    Textarea,
    Checkbox,
    Submit,
    Radio,
    Select,
}

impl FieldType {
    /// Look up the renderer for a normalized type key
    pub fn from_key(key: &str) -> Option<Self> {
        let field_type = match key {
            "text" => FieldType::Text,
            "email" => FieldType::Email,
            "number" => FieldType::Number,
            "url" => FieldType::Url,
            "file" => FieldType::File,
            "textarea" => FieldType::Textarea,
            "checkbox" => FieldType::Checkbox,
            "submit" => FieldType::Submit,
            "radio" => FieldType::Radio,
            "select" => FieldType::Select,
            _ => return None,
        };
        Some(field_type)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Number => "number",
            FieldType::Url => "url",
            FieldType::File => "file",
            FieldType::Textarea => "textarea",
            FieldType::Checkbox => "checkbox",
            FieldType::Submit => "submit",
            FieldType::Radio => "radio",
            FieldType::Select => "select",
        }
    }
}

/// A single form control with its label and wrapper tag
///
/// Built once from a [`FieldConfig`]; all attributes are normalized at
/// construction and [`Field::render`] always returns the same markup.
///
/// ```
/// use rhtmx_field::{Field, FieldConfig};
///
/// let field = Field::new(
///     FieldConfig::new("text")
///         .id("email")
///         .name("email")
///         .label("Email")
///         .label_pos("before_field"),
/// );
///
/// assert_eq!(
///     field.render(),
///     r#"<p><label for="email" id="email-label">Email</label> <input type="text" id="email" name="email" value="" /></p>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Field<E = HtmlEscaper> {
    pub(crate) wrap: String,
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) type_key: String,
    pub(crate) field_type: Option<FieldType>,
    pub(crate) label: String,
    pub(crate) label_pos: LabelPos,
    pub(crate) layout: Layout,
    pub(crate) choices: IndexMap<String, String>,
    pub(crate) meta: IndexMap<String, Value>,
    pub(crate) value: Value,
    pub(crate) escape: E,
}

impl Field<HtmlEscaper> {
    pub fn new(config: FieldConfig) -> Self {
        Self::with_escaper(config, HtmlEscaper)
    }
}

impl<E: Escape> Field<E> {
    /// Build a field that escapes attribute values with `escape`
    pub fn with_escaper(config: FieldConfig, escape: E) -> Self {
        let wrap = match slugify(&config.wrap, Replacement::Underscore, &[]) {
            slug if slug.is_empty() => DEFAULT_WRAP.to_string(),
            slug => slug,
        };

        let type_key = slugify(&config.field_type, Replacement::Underscore, &[]);
        let field_type = FieldType::from_key(&type_key);

        let value = match config.value {
            Value::Null => Value::String(String::new()),
            value => value,
        };

        Self {
            wrap,
            id: slugify(&config.id, Replacement::Hyphen, &[]),
            name: slugify(&to_ascii(&config.name), Replacement::Hyphen, &NAME_EXEMPT),
            type_key,
            field_type,
            label: config.label,
            label_pos: LabelPos::parse_or_default(&config.label_pos),
            layout: Layout::parse_or_default(&config.layout),
            choices: config.choices,
            meta: normalize_meta(config.meta),
            value,
            escape,
        }
    }

    /// Render the field: wrapper and label, the control, then the closing half.
    ///
    /// Unknown field types render as an empty string.
    pub fn render(&self) -> String {
        let Some(field_type) = self.field_type else {
            tracing::debug!("No renderer for field type {:?}, skipping", self.type_key);
            return String::new();
        };

        tracing::trace!(
            field_type = field_type.as_str(),
            label_pos = self.label_pos.as_str(),
            layout = self.layout.as_str(),
            "Rendering field {:?}",
            self.id
        );

        let mut html = self.render_start(field_type);
        html.push_str(&self.render_body(field_type));
        html.push_str(&self.render_end(field_type));
        html
    }

    fn render_start(&self, field_type: FieldType) -> String {
        let mut html = format!("<{}>", self.wrap);

        if !self.has_shared_label(field_type) {
            return html;
        }

        match self.label_pos {
            LabelPos::BeforeField => {
                if self.id.is_empty() {
                    html.push_str(&format!("<label>{} ", self.label));
                } else {
                    html.push_str(&self.label_tag());
                    html.push(' ');
                }

                if self.breaks_line(field_type) {
                    html.push_str("<br />");
                }
            }
            LabelPos::AfterField => {
                if self.id.is_empty() {
                    html.push_str("<label>");
                }
            }
        }

        html
    }

    fn render_end(&self, field_type: FieldType) -> String {
        let mut html = String::new();

        if self.has_shared_label(field_type) {
            match self.label_pos {
                LabelPos::AfterField => {
                    if self.breaks_line(field_type) {
                        html.push_str("<br />");
                    }

                    if self.id.is_empty() {
                        html.push_str(&format!(" {}</label>", self.label));
                    } else {
                        html.push(' ');
                        html.push_str(&self.label_tag());
                    }
                }
                LabelPos::BeforeField => {
                    if self.id.is_empty() {
                        html.push_str("</label>");
                    }
                }
            }
        }

        html.push_str(&format!("</{}>", self.wrap));
        html
    }

    // Radio groups label each choice themselves
    fn has_shared_label(&self, field_type: FieldType) -> bool {
        field_type != FieldType::Radio && !self.label.is_empty()
    }

    fn breaks_line(&self, field_type: FieldType) -> bool {
        self.layout == Layout::Block && field_type != FieldType::Checkbox
    }

    /// `<label for="id" id="id-label">`, or a bare `<label>` without an id
    pub(crate) fn label_tag(&self) -> String {
        if self.id.is_empty() {
            return format!("<label>{}</label>", self.label);
        }

        let id = self.escape.attr(&self.id);
        format!(r#"<label for="{id}" id="{id}-label">{}</label>"#, self.label)
    }

    pub fn wrap(&self) -> &str {
        &self.wrap
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized type key, whether or not a renderer exists for it
    pub fn type_key(&self) -> &str {
        &self.type_key
    }

    pub fn field_type(&self) -> Option<FieldType> {
        self.field_type
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn label_pos(&self) -> LabelPos {
        self.label_pos
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn choices(&self) -> &IndexMap<String, String> {
        &self.choices
    }

    pub fn meta(&self) -> &IndexMap<String, Value> {
        &self.meta
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
