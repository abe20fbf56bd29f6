use serde_json::Value;

use crate::domain::Contact;

/// Render a message template against one contact.
///
/// Placeholders use `{{…}}` syntax and resolve in this order:
/// `{{name}}` to the contact's name, `{{attributes.<key>}}` to the
/// attribute map, and any other `{{<key>}}` to a direct field on the
/// record. Missing values render as the empty string, never as the
/// literal placeholder: bulk recipients routinely have partial data and
/// a hole in the text is preferable to leaking `{{name}}` to a customer.
///
/// An unterminated `{{` is kept as literal text.
pub fn merge_template(template: &str, contact: &Contact) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                out.push_str(&resolve(contact, after[..end].trim()));
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

fn resolve(contact: &Contact, key: &str) -> String {
    if key == "name" {
        return contact.name.clone().unwrap_or_default();
    }
    if let Some(attr) = key.strip_prefix("attributes.") {
        return contact.attributes.get(attr).map(stringify).unwrap_or_default();
    }
    contact.fields.get(key).map(stringify).unwrap_or_default()
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Arrays/objects are not expected in contact columns; fall back
        // to their JSON text rather than dropping them.
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_placeholder_uses_the_contact_name() {
        let contact = Contact::named("Ana");
        assert_eq!(merge_template("Hi {{name}}!", &contact), "Hi Ana!");
    }

    #[test]
    fn missing_attribute_renders_empty_not_the_placeholder() {
        let contact = Contact::named("Ana");
        assert_eq!(
            merge_template("Hi {{name}}, code {{attributes.code}}", &contact),
            "Hi Ana, code "
        );
    }

    #[test]
    fn attributes_and_direct_fields_resolve_separately() {
        let contact = Contact::named("Ana")
            .with_attribute("code", "A1")
            .with_field("city", "Luanda");

        assert_eq!(
            merge_template("{{attributes.code}} / {{city}}", &contact),
            "A1 / Luanda"
        );
        // An attribute named like a field is not visible as `{{<key>}}`.
        assert_eq!(merge_template("{{code}}", &contact), "");
    }

    #[test]
    fn numbers_and_booleans_stringify_plainly() {
        let contact = Contact::default()
            .with_attribute("points", 42)
            .with_field("optin", true);
        assert_eq!(
            merge_template("{{attributes.points}} {{optin}}", &contact),
            "42 true"
        );
    }

    #[test]
    fn null_and_missing_name_render_empty() {
        let contact = Contact::default().with_field("note", serde_json::Value::Null);
        assert_eq!(merge_template("[{{name}}][{{note}}]", &contact), "[][]");
    }

    #[test]
    fn inner_whitespace_in_placeholders_is_tolerated() {
        let contact = Contact::named("Ana");
        assert_eq!(merge_template("Hi {{ name }}!", &contact), "Hi Ana!");
    }

    #[test]
    fn unterminated_placeholder_stays_literal() {
        let contact = Contact::named("Ana");
        assert_eq!(merge_template("Hi {{name", &contact), "Hi {{name");
        assert_eq!(merge_template("{{name}} {{", &contact), "Ana {{");
    }

    #[test]
    fn text_without_placeholders_passes_through() {
        let contact = Contact::default();
        assert_eq!(merge_template("Plain text.", &contact), "Plain text.");
        assert_eq!(merge_template("", &contact), "");
    }
}
