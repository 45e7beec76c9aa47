use serde::{Deserialize, Deserializer};

/// One entry of the API's `item` array. Every field may be missing, and a
/// field holding anything other than a string is treated as missing.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RawApiItem {
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RawApiResponse {
    #[serde(default)]
    pub item: Option<Vec<RawApiItem>>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(serde_json::Value::String(text)) => Some(text),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_api_item_ignores_unknown_fields() {
        let json = r#"{
            "id": "1234",
            "name": "Choco Pie",
            "maker": "Lotte",
            "price": "300",
            "url": "https://sysbird.jp/toriko/1234",
            "image": "https://sysbird.jp/toriko/1234.jpg"
        }"#;

        let item: RawApiItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.name.as_deref(), Some("Choco Pie"));
        assert_eq!(item.url.as_deref(), Some("https://sysbird.jp/toriko/1234"));
        assert_eq!(item.image.as_deref(), Some("https://sysbird.jp/toriko/1234.jpg"));
    }

    #[test]
    fn test_raw_api_item_treats_non_string_fields_as_missing() {
        let json = r#"{ "name": 42, "url": null, "image": ["https://x/1.png"] }"#;

        let item: RawApiItem = serde_json::from_str(json).unwrap();

        assert_eq!(item, RawApiItem::default());
    }

    #[test]
    fn test_raw_api_response_without_item_field_has_no_items() {
        let response: RawApiResponse = serde_json::from_str(r#"{ "count": 0 }"#).unwrap();

        assert!(response.item.is_none());
    }
}
