use reqwest::Url;
use uuid::Uuid;

use crate::core::models::{ItemMaterializationError, RawApiItem};

/// A raw API entry whose name, link and image URL are all present and usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEntry {
    pub name: String,
    pub link: Url,
    pub image_url: Url,
}

impl ValidatedEntry {
    pub fn from_raw(raw: RawApiItem) -> Option<Self> {
        let name = raw.name.filter(|name| !name.trim().is_empty())?;
        let link = parse_web_url(raw.url.as_deref()?)?;
        let image_url = parse_web_url(raw.image.as_deref()?)?;

        Some(Self {
            name,
            link,
            image_url,
        })
    }
}

fn parse_web_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

#[derive(Clone, PartialEq, Eq)]
pub struct ItemImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Debug for ItemImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemImage")
            .field("byte_len", &self.bytes.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl ItemImage {
    /// Accepts the fetched bytes only if they decode as an image.
    pub fn decode(image_url: &Url, bytes: Vec<u8>) -> Result<Self, ItemMaterializationError> {
        let decoded = image::load_from_memory(&bytes).map_err(|error| {
            ItemMaterializationError::ImageDecode {
                url: image_url.to_string(),
                reason: error.to_string(),
            }
        })?;

        log::debug!(
            "[SEARCH_RESULT] decoded {}x{} image from {}",
            decoded.width(),
            decoded.height(),
            image_url
        );

        Ok(Self {
            width: decoded.width(),
            height: decoded.height(),
            bytes,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultItem {
    pub id: Uuid,
    pub name: String,
    pub link: Url,
    pub image_url: Url,
    pub image: ItemImage,
}

impl SearchResultItem {
    pub fn build(entry: ValidatedEntry, image: ItemImage) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: entry.name,
            link: entry.link,
            image_url: entry.image_url,
            image,
        }
    }
}

#[cfg(test)]
pub(crate) fn encode_test_png(width: u32, height: u32) -> Vec<u8> {
    let pixels = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 120, 40, 255]));
    let mut cursor = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(pixels)
        .write_to(&mut cursor, image::ImageFormat::Png)
        .unwrap();
    cursor.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_item(name: Option<&str>, url: Option<&str>, image: Option<&str>) -> RawApiItem {
        RawApiItem {
            name: name.map(str::to_string),
            url: url.map(str::to_string),
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn test_from_raw_keeps_complete_entry() {
        let entry = ValidatedEntry::from_raw(raw_item(
            Some("A"),
            Some("https://x/1"),
            Some("https://x/1.png"),
        ))
        .unwrap();

        assert_eq!(entry.name, "A");
        assert_eq!(entry.link.as_str(), "https://x/1");
        assert_eq!(entry.image_url.as_str(), "https://x/1.png");
    }

    #[test]
    fn test_from_raw_drops_entry_missing_any_field() {
        let cases = [
            raw_item(None, Some("https://x/1"), Some("https://x/1.png")),
            raw_item(Some("A"), None, Some("https://x/1.png")),
            raw_item(Some("A"), Some("https://x/1"), None),
        ];

        for raw in cases {
            assert!(ValidatedEntry::from_raw(raw).is_none());
        }
    }

    #[test]
    fn test_from_raw_drops_blank_name() {
        let raw = raw_item(Some("   "), Some("https://x/1"), Some("https://x/1.png"));

        assert!(ValidatedEntry::from_raw(raw).is_none());
    }

    #[test]
    fn test_from_raw_drops_malformed_or_non_web_urls() {
        let relative = raw_item(Some("A"), Some("/okashi/1"), Some("https://x/1.png"));
        let ftp_image = raw_item(Some("A"), Some("https://x/1"), Some("ftp://x/1.png"));

        assert!(ValidatedEntry::from_raw(relative).is_none());
        assert!(ValidatedEntry::from_raw(ftp_image).is_none());
    }

    #[test]
    fn test_item_image_decode_accepts_png() {
        let url = Url::parse("https://x/1.png").unwrap();

        let image = ItemImage::decode(&url, encode_test_png(4, 3)).unwrap();

        assert_eq!(image.width, 4);
        assert_eq!(image.height, 3);
        assert!(!image.bytes.is_empty());
    }

    #[test]
    fn test_item_image_decode_rejects_non_image_bytes() {
        let url = Url::parse("https://x/1.png").unwrap();

        let result = ItemImage::decode(&url, b"<html>not found</html>".to_vec());

        assert!(matches!(
            result,
            Err(ItemMaterializationError::ImageDecode { .. })
        ));
    }

    #[test]
    fn test_build_assigns_distinct_ids() {
        let url = Url::parse("https://x/1.png").unwrap();
        let image = ItemImage::decode(&url, encode_test_png(1, 1)).unwrap();
        let entry = ValidatedEntry::from_raw(raw_item(
            Some("A"),
            Some("https://x/1"),
            Some("https://x/1.png"),
        ))
        .unwrap();

        let first = SearchResultItem::build(entry.clone(), image.clone());
        let second = SearchResultItem::build(entry, image);

        assert_ne!(first.id, second.id);
        assert_eq!(first.name, second.name);
    }

    #[test]
    fn test_item_image_debug_omits_raw_bytes() {
        let url = Url::parse("https://x/1.png").unwrap();
        let image = ItemImage::decode(&url, encode_test_png(2, 2)).unwrap();

        let debug = format!("{:?}", image);

        assert!(debug.contains("byte_len"));
        assert!(!debug.contains("bytes: ["));
    }
}
