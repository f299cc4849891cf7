//! Normalization of the record API's `images` field.
//!
//! The field arrives as a JSON-encoded array, a single JSON value, or a bare
//! URL. Consumers always get a list.

use serde_json::Value;

/// Parse an `images` field into a list of image references.
///
/// ```
/// use stylehub_storefront::catalog::parse_images;
///
/// assert_eq!(parse_images(Some(r#"["/a.jpg","/b.jpg"]"#)), ["/a.jpg", "/b.jpg"]);
/// assert_eq!(parse_images(Some("https://cdn.example.com/a.jpg")), ["https://cdn.example.com/a.jpg"]);
/// assert!(parse_images(Some("not an image")).is_empty());
/// assert!(parse_images(None).is_empty());
/// ```
#[must_use]
pub fn parse_images(field: Option<&str>) -> Vec<String> {
    let Some(raw) = field.map(str::trim).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(values)) => values.iter().filter_map(image_ref).collect(),
        Ok(value) => image_ref(&value).into_iter().collect(),
        Err(_) if looks_like_image(raw) => vec![raw.to_string()],
        Err(_) => Vec::new(),
    }
}

fn image_ref(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn looks_like_image(raw: &str) -> bool {
    raw.starts_with("http") || raw.contains('.')
}

/// Rewrite a raw record's `images` field into a JSON array in place.
pub(crate) fn normalize_record_images(record: &mut Value) {
    let Some(obj) = record.as_object_mut() else {
        return;
    };
    let normalized = match obj.get("images") {
        Some(Value::String(s)) => parse_images(Some(s.as_str())),
        Some(Value::Null) => Vec::new(),
        _ => return,
    };
    obj.insert(
        "images".to_string(),
        Value::Array(normalized.into_iter().map(Value::String).collect()),
    );
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_blank_input_is_empty() {
        assert!(parse_images(Some("")).is_empty());
        assert!(parse_images(Some("   ")).is_empty());
    }

    #[test]
    fn test_single_json_string_is_wrapped() {
        assert_eq!(parse_images(Some("\"/img/a.png\"")), ["/img/a.png"]);
    }

    #[test]
    fn test_array_skips_non_references() {
        assert_eq!(
            parse_images(Some(r#"["/a.png", null, "", {"x":1}]"#)),
            ["/a.png"]
        );
    }

    #[test]
    fn test_bare_path_without_scheme() {
        assert_eq!(parse_images(Some("img/a.png")), ["img/a.png"]);
    }

    #[test]
    fn test_normalize_record_images() {
        let mut record = json!({ "Id": 1, "images": "[\"/a.png\"]" });
        normalize_record_images(&mut record);
        assert_eq!(record["images"], json!(["/a.png"]));

        let mut record = json!({ "Id": 1, "images": null });
        normalize_record_images(&mut record);
        assert_eq!(record["images"], json!([]));

        let mut record = json!({ "Id": 1, "images": ["/b.png"] });
        normalize_record_images(&mut record);
        assert_eq!(record["images"], json!(["/b.png"]));
    }
}
