//! DOM-level checks on rendered fields
//!
//! Each test renders one field, parses the markup and inspects the
//! elements the way a browser would see them.

use rhtmx_field::{render, Field, FieldConfig, Value};
use scraper::{ElementRef, Html, Selector};

fn select<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    let selector = Selector::parse(css).unwrap();
    doc.select(&selector).collect()
}

fn attr<'a>(element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

#[test]
fn test_text_field_render() {
    let html = render(
        FieldConfig::new("text")
            .id("field-id")
            .name("field-name")
            .value("Some text")
            .label("Field label")
            .label_pos("before_field")
            .wrap("div")
            .meta("class", "my-class")
            .meta("placeholder", "Nothing"),
    );
    let doc = Html::parse_fragment(&html);

    assert_eq!(select(&doc, "div").len(), 1);
    let inputs = select(&doc, "input");
    let labels = select(&doc, "label");
    assert_eq!(inputs.len(), 1);
    assert_eq!(labels.len(), 1);

    let input = &inputs[0];
    assert_eq!(attr(input, "id"), Some("field-id"));
    assert_eq!(attr(input, "name"), Some("field-name"));
    assert_eq!(attr(input, "type"), Some("text"));
    assert_eq!(attr(input, "value"), Some("Some text"));
    assert_eq!(attr(input, "class"), Some("my-class"));
    assert_eq!(attr(input, "placeholder"), Some("Nothing"));

    assert_eq!(attr(&labels[0], "id"), Some("field-id-label"));
    assert_eq!(attr(&labels[0], "for"), Some("field-id"));
    assert_eq!(labels[0].text().collect::<String>(), "Field label");
}

#[test]
fn test_email_field_without_id_wraps_in_label() {
    let html = render(
        FieldConfig::new("email")
            .name("field-name")
            .label("Field label")
            .value("a@b.c")
            .meta("class", "my-class"),
    );
    let doc = Html::parse_fragment(&html);

    assert_eq!(select(&doc, "p").len(), 1);
    let inputs = select(&doc, "label > input");
    assert_eq!(inputs.len(), 1);
    assert_eq!(attr(&inputs[0], "id"), Some(""));
    assert_eq!(attr(&inputs[0], "type"), Some("email"));
    assert_eq!(attr(&inputs[0], "value"), Some("a@b.c"));

    let labels = select(&doc, "label");
    assert_eq!(labels.len(), 1);
    assert_eq!(attr(&labels[0], "for"), None);
    assert_eq!(labels[0].text().collect::<String>().trim(), "Field label");
}

#[test]
fn test_number_field_with_numeric_values() {
    let html = render(
        FieldConfig::new("number")
            .id("field-id")
            .name("field-name")
            .value(10)
            .meta("class", "my-class")
            .meta("placeholder", 45),
    );
    let doc = Html::parse_fragment(&html);
    let inputs = select(&doc, "input");

    assert_eq!(attr(&inputs[0], "type"), Some("number"));
    assert_eq!(attr(&inputs[0], "value"), Some("10"));
    assert_eq!(attr(&inputs[0], "placeholder"), Some("45"));
}

#[test]
fn test_url_field_keeps_text_type() {
    let html = render(
        FieldConfig::new("url")
            .id("field-id")
            .name("field-name")
            .value("https://example.com/?a=1&b=2"),
    );
    let doc = Html::parse_fragment(&html);
    let inputs = select(&doc, "input");

    assert_eq!(attr(&inputs[0], "type"), Some("text"));
    assert_eq!(attr(&inputs[0], "value"), Some("https://example.com/?a=1&b=2"));
    assert!(html.contains("&amp;b=2"));
}

#[test]
fn test_textarea_normalizes_id_and_name() {
    let html = render(
        FieldConfig::new("textarea")
            .id("f|ield-ID")
            .name("//field- ~name")
            .value("Some text here")
            .meta("placeholder", "Your text here"),
    );
    let doc = Html::parse_fragment(&html);
    let textareas = select(&doc, "textarea");

    assert_eq!(textareas.len(), 1);
    assert_eq!(attr(&textareas[0], "id"), Some("f-ield-id"));
    assert_eq!(attr(&textareas[0], "name"), Some("field---name"));
    assert_eq!(textareas[0].text().collect::<String>(), "Some text here");
}

#[test]
fn test_checkbox_checked_and_unchecked() {
    let checked = render(FieldConfig::new("checkbox").id("field-id").name("field-name").value("1"));
    let doc = Html::parse_fragment(&checked);
    assert_eq!(attr(&select(&doc, "input")[0], "checked"), Some("checked"));

    let unchecked = render(FieldConfig::new("checkbox").id("field-id").name("field-name").value("0"));
    let doc = Html::parse_fragment(&unchecked);
    assert_eq!(attr(&select(&doc, "input")[0], "checked"), None);
}

#[test]
fn test_radio_group() {
    let html = render(
        FieldConfig::new("radio")
            .id("field-id")
            .name("field-name")
            .value("no")
            .label("Field label")
            .choice("yes", "Yes")
            .choice("no", "No")
            .meta("class", "my-class"),
    );
    let doc = Html::parse_fragment(&html);

    assert_eq!(select(&doc, "p").len(), 1);
    let inputs = select(&doc, "input[type=radio]");
    let labels = select(&doc, "label");
    assert_eq!(inputs.len(), 2);
    assert_eq!(labels.len(), 3);

    assert_eq!(attr(&inputs[0], "id"), Some("field-id-yes"));
    assert_eq!(attr(&inputs[1], "id"), Some("field-id-no"));
    assert!(inputs.iter().all(|i| attr(i, "name") == Some("field-name")));
    assert!(inputs.iter().all(|i| attr(i, "class") == Some("my-class")));
    assert_eq!(attr(&inputs[0], "checked"), None);
    assert_eq!(attr(&inputs[1], "checked"), Some("checked"));

    let label_texts: Vec<String> = labels.iter().map(|l| l.text().collect()).collect();
    assert_eq!(label_texts, vec!["Field label", "Yes", "No"]);
    assert_eq!(attr(&labels[0], "id"), Some("field-id-label"));
    assert_eq!(attr(&labels[2], "for"), Some("field-id-no"));
}

#[test]
fn test_select_single_value() {
    let html = render(
        FieldConfig::new("select")
            .id("field-id")
            .name("field-name")
            .value("no")
            .choice("yes", "Yes")
            .choice("no", "No")
            .meta("class", "my-class"),
    );
    let doc = Html::parse_fragment(&html);

    let selects = select(&doc, "select");
    assert_eq!(selects.len(), 1);
    assert_eq!(attr(&selects[0], "class"), Some("my-class"));

    let options = select(&doc, "option");
    assert_eq!(options.len(), 2);
    assert_eq!(attr(&options[0], "value"), Some("yes"));
    assert_eq!(attr(&options[0], "selected"), None);
    assert_eq!(attr(&options[1], "selected"), Some("selected"));
    assert_eq!(options[1].text().collect::<String>(), "No");
}

#[test]
fn test_multi_select_treats_scalar_as_set() {
    let html = render(
        FieldConfig::new("select")
            .id("field-id")
            .name("field-name[]")
            .value("no")
            .choice("yes", "Yes")
            .choice("no", "No")
            .meta("class", "my-class")
            .meta("multiple", "multiple"),
    );
    let doc = Html::parse_fragment(&html);

    let selects = select(&doc, "select");
    assert_eq!(attr(&selects[0], "name"), Some("field-name[]"));
    assert_eq!(attr(&selects[0], "multiple"), Some("multiple"));

    let options = select(&doc, "option");
    assert_eq!(attr(&options[0], "selected"), None);
    assert_eq!(attr(&options[1], "selected"), Some("selected"));
}

#[test]
fn test_submit_button_render() {
    let html = render(
        FieldConfig::new("submit")
            .name("field-name")
            .value("Save")
            .meta("class", "my-class"),
    );
    let doc = Html::parse_fragment(&html);
    let buttons = select(&doc, "button");

    assert_eq!(buttons.len(), 1);
    assert_eq!(attr(&buttons[0], "id"), Some(""));
    assert_eq!(attr(&buttons[0], "type"), Some("submit"));
    assert_eq!(attr(&buttons[0], "class"), Some("my-class"));
    assert_eq!(buttons[0].text().collect::<String>(), "Save");
}

#[test]
fn test_meta_cannot_override_canonical_attributes() {
    let html = render(
        FieldConfig::new("text")
            .id("real")
            .name("real")
            .value("real")
            .meta("id", "fake")
            .meta("name", "fake")
            .meta("type", "hidden")
            .meta("value", "fake"),
    );
    assert!(!html.contains("fake"));
    assert!(!html.contains("hidden"));

    let doc = Html::parse_fragment(&html);
    let inputs = select(&doc, "input");
    assert_eq!(attr(&inputs[0], "type"), Some("text"));
    assert_eq!(attr(&inputs[0], "value"), Some("real"));
}

#[test]
fn test_meta_reserved_keys_matched_after_normalization() {
    let field = Field::new(
        FieldConfig::new("text")
            .id("real")
            .name("real")
            .value("real")
            .meta("ID", "fake")
            .meta("Value", "fake")
            .meta(" name", "fake")
            .meta("TYPE ", "hidden")
            .meta("Class", "kept"),
    );
    assert_eq!(field.meta().keys().collect::<Vec<_>>(), vec!["class"]);

    let html = field.render();
    assert!(!html.contains("fake"), "{}", html);

    let doc = Html::parse_fragment(&html);
    let inputs = select(&doc, "input");
    assert_eq!(attr(&inputs[0], "id"), Some("real"));
    assert_eq!(attr(&inputs[0], "name"), Some("real"));
    assert_eq!(attr(&inputs[0], "value"), Some("real"));
    assert_eq!(attr(&inputs[0], "type"), Some("text"));
    assert_eq!(attr(&inputs[0], "class"), Some("kept"));
}

#[test]
fn test_boolean_meta_values() {
    let html = render(
        FieldConfig::new("text")
            .id("q")
            .meta("required", true)
            .meta("disabled", false),
    );
    let doc = Html::parse_fragment(&html);
    let inputs = select(&doc, "input");

    assert_eq!(attr(&inputs[0], "required"), Some(""));
    assert_eq!(attr(&inputs[0], "disabled"), None);
}

#[test]
fn test_meta_order_follows_insertion() {
    let html = render(
        FieldConfig::new("text")
            .meta("data-z", "1")
            .meta("aria-label", "x")
            .meta("class", "c"),
    );
    let z = html.find("data-z").unwrap();
    let aria = html.find("aria-label").unwrap();
    let class = html.find("class").unwrap();
    assert!(z < aria && aria < class);
}

#[test]
fn test_escaped_attribute_values_round_trip() {
    let tricky = r#"He said "hi" & <left>"#;
    let html = render(FieldConfig::new("text").id("q").name("q").value(tricky).meta("title", tricky));
    let doc = Html::parse_fragment(&html);
    let inputs = select(&doc, "input");

    assert_eq!(inputs.len(), 1);
    assert_eq!(attr(&inputs[0], "value"), Some(tricky));
    assert_eq!(attr(&inputs[0], "title"), Some(tricky));
}

#[test]
fn test_config_from_json_renders() {
    let config = FieldConfig::from_json_str(
        r#"{
            "type": "radio",
            "id": "answer",
            "name": "answer",
            "labelPos": "before_field",
            "value": 2,
            "choices": {"1": "One", "2": "Two"}
        }"#,
    )
    .unwrap();
    let field = Field::new(config);
    assert_eq!(field.value(), &Value::Number(2.0));

    let doc = Html::parse_fragment(&field.render());
    let checked = select(&doc, "input[checked]");
    assert_eq!(checked.len(), 1);
    assert_eq!(attr(&checked[0], "value"), Some("2"));
}
