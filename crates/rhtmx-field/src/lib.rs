// RHTMX Field - single form field renderer
// Escaped, well-formed markup for one form control with its label and wrapper

pub mod attrs;
pub mod config;
pub mod equiv;
pub mod escape;
pub mod field;
pub mod slug;
pub mod value;

mod render;

// Re-export core types
pub use config::{FieldConfig, LabelPos, Layout};
pub use escape::{Escape, HtmlEscaper};
pub use field::{Field, FieldType};
pub use value::Value;

/// Build a field from `config` and render it with the default escaper
///
/// ```
/// use rhtmx_field::{render, FieldConfig};
///
/// let html = render(FieldConfig::new("checkbox").id("agree").name("agree").value("1"));
/// assert_eq!(
///     html,
///     r#"<p><input type="checkbox" id="agree" name="agree" value="1" checked="checked" /></p>"#
/// );
/// ```
pub fn render(config: FieldConfig) -> String {
    Field::new(config).render()
}

/// Like [`render`], escaping attribute values with `escape`
pub fn render_with<E: Escape>(config: FieldConfig, escape: E) -> String {
    Field::with_escaper(config, escape).render()
}
