// File: src/render.rs
// Purpose: Markup for each field type, between the wrapper/label halves

use crate::attrs::render_meta;
use crate::config::LabelPos;
use crate::equiv::{as_set, checked, selected};
use crate::escape::Escape;
use crate::field::{Field, FieldType};
use crate::slug::{slugify, Replacement};
use crate::value::Value;

impl<E: Escape> Field<E> {
    pub(crate) fn render_body(&self, field_type: FieldType) -> String {
        match field_type {
            FieldType::Text => self.render_input("text"),
            FieldType::Email => self.render_input("email"),
            FieldType::Number => self.render_input("number"),
            // URL fields have always been emitted as plain text inputs
            FieldType::Url => self.render_input("text"),
            FieldType::File => self.render_file(),
            FieldType::Textarea => self.render_textarea(),
            FieldType::Checkbox => self.render_checkbox(),
            FieldType::Submit => self.render_submit(),
            FieldType::Radio => self.render_radio(),
            FieldType::Select => self.render_select(),
        }
    }

    fn render_input(&self, input_type: &str) -> String {
        format!(
            r#"<input type="{}" {}id="{}" name="{}" value="{}" />"#,
            input_type,
            self.meta_prefix(),
            self.escape.attr(&self.id),
            self.escape.attr(&self.name),
            self.escape.attr(&self.value.to_string())
        )
    }

    fn render_file(&self) -> String {
        format!(
            r#"<input type="file" {}id="{}" name="{}" />"#,
            self.meta_prefix(),
            self.escape.attr(&self.id),
            self.escape.attr(&self.name)
        )
    }

    fn render_textarea(&self) -> String {
        format!(
            r#"<textarea {}id="{}" name="{}">{}</textarea>"#,
            self.meta_prefix(),
            self.escape.attr(&self.id),
            self.escape.attr(&self.name),
            self.escape.attr(&self.value.to_string())
        )
    }

    fn render_checkbox(&self) -> String {
        format!(
            r#"<input type="checkbox" {}id="{}" name="{}" value="1"{} />"#,
            self.meta_prefix(),
            self.escape.attr(&self.id),
            self.escape.attr(&self.name),
            spaced(checked(&Value::from(1), &self.value))
        )
    }

    fn render_submit(&self) -> String {
        format!(
            r#"<button type="submit" {}id="{}" name="{}">{}</button>"#,
            self.meta_prefix(),
            self.escape.attr(&self.id),
            self.escape.attr(&self.name),
            self.escape.attr(&self.value.to_string())
        )
    }

    fn render_radio(&self) -> String {
        let mut html = String::new();

        if !self.label.is_empty() {
            html.push_str(&self.label_tag());
            html.push_str("<br />");
        }

        if self.choices.is_empty() {
            return html;
        }

        let meta = self.meta_prefix();
        let name = self.escape.attr(&self.name);

        for (choice_value, choice_label) in &self.choices {
            let choice_id = self.escape.attr(&format!(
                "{}-{}",
                self.id,
                slugify(choice_value, Replacement::Hyphen, &[])
            ));
            let choice_label_tag = format!(r#"<label for="{}">{}</label>"#, choice_id, choice_label);

            if self.label_pos == LabelPos::BeforeField {
                html.push_str(&choice_label_tag);
                html.push(' ');
            }

            html.push_str(&format!(
                r#"<input type="radio" {}id="{}" name="{}" value="{}"{} />"#,
                meta,
                choice_id,
                name,
                self.escape.attr(choice_value),
                spaced(checked(&Value::from(choice_value.as_str()), &self.value))
            ));

            if self.label_pos == LabelPos::AfterField {
                html.push(' ');
                html.push_str(&choice_label_tag);
            }

            html.push_str("<br />");
        }

        html
    }

    fn render_select(&self) -> String {
        if self.choices.is_empty() {
            return String::new();
        }

        let mut html = format!(
            r#"<select {}id="{}" name="{}">"#,
            self.meta_prefix(),
            self.escape.attr(&self.id),
            self.escape.attr(&self.name)
        );

        // A multi-select treats its value as a set, even a single scalar
        let value_set = self.is_multiple().then(|| Value::Array(as_set(&self.value)));

        for (choice_value, choice_label) in &self.choices {
            let choice = Value::from(choice_value.as_str());
            let is_selected = match &value_set {
                Some(set) => selected(set, &choice),
                None => selected(&choice, &self.value),
            };

            html.push_str(&format!(
                r#"<option{} value="{}">{}</option>"#,
                spaced(is_selected),
                self.escape.attr(choice_value),
                choice_label
            ));
        }

        html.push_str("</select>");
        html
    }

    // Meta keys are normalized at construction, so this agrees with the
    // attribute actually written by `render_meta`
    fn is_multiple(&self) -> bool {
        matches!(self.meta.get("multiple"), Some(value) if *value != Value::Bool(false))
    }

    /// Serialized meta followed by a separating space, or nothing
    fn meta_prefix(&self) -> String {
        let meta = render_meta(&self.meta, &self.escape);
        if meta.is_empty() {
            meta
        } else {
            meta + " "
        }
    }
}

fn spaced(attr: &str) -> String {
    if attr.is_empty() {
        String::new()
    } else {
        format!(" {}", attr)
    }
}
