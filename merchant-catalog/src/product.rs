use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::taxonomy::GoogleTaxonomy;

pub type ProductId = i64;
pub type ImageId = i64;

/// Primitive type tag of a product attribute
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    Boolean,
    Integer,
    Char,
    Float,
    Numeric,
    Date,
    Datetime,
    Selection,
}

/// Attribute type as the Content API names it in `customAttributes`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoogleType {
    Boolean,
    Float,
    Int,
    Price,
    Group,
    String,
}

impl AttributeType {
    pub fn google_type(&self) -> GoogleType {
        match self {
            AttributeType::Boolean => GoogleType::Boolean,
            AttributeType::Float => GoogleType::Float,
            AttributeType::Integer => GoogleType::Int,
            AttributeType::Numeric => GoogleType::Price,
            AttributeType::Selection => GoogleType::Group,
            AttributeType::Char | AttributeType::Date | AttributeType::Datetime => {
                GoogleType::String
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attribute {
    pub id: i64,
    pub name: String,
    /// Label shown to users; falls back to `name`.
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(rename = "type")]
    pub type_: AttributeType,
}

impl Attribute {
    pub fn rec_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

/// Value stored against a product attribute.
///
/// Serialized untagged so the feed carries the plain JSON value. `Numeric`
/// is only built in code: it serializes as a decimal string, which reads
/// back as `Text` and produces the same feed JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AttributeValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Numeric(Decimal),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductAttribute {
    pub attribute: Attribute,
    pub value: AttributeValue,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Image {
    pub id: ImageId,
    /// Path of the file relative to the storefront's static root
    pub path: String,
}

/// Unit of measure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Uom {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// A sellable product as loaded from the catalog store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    /// Internal product code, published as the manufacturer part number.
    pub code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub list_price: Decimal,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub weight_uom: Option<Uom>,
    #[serde(default)]
    pub default_image: Option<Image>,
    #[serde(default)]
    pub images: Vec<Image>,
    /// Slug of the storefront detail page.
    pub uri: String,
    #[serde(default)]
    pub attributes: Option<Vec<ProductAttribute>>,
    /// Most relevant Google category, if one was picked.
    #[serde(default)]
    pub google_product_category: Option<GoogleTaxonomy>,
    #[serde(default)]
    pub google_product_types: Vec<GoogleTaxonomy>,
}

impl Product {
    /// Images other than the default one, in stored order.
    pub fn additional_images(&self) -> impl Iterator<Item = &Image> {
        let default_id = self.default_image.as_ref().map(|img| img.id);
        self.images
            .iter()
            .filter(move |img| Some(img.id) != default_id)
    }

    /// Attribute pairs, treating a missing collection like an empty one.
    pub fn attribute_values(&self) -> &[ProductAttribute] {
        self.attributes.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn image(id: ImageId) -> Image {
        Image {
            id,
            path: format!("img/{}.jpg", id),
        }
    }

    #[test]
    fn test_google_type_covers_every_tag() {
        assert_eq!(AttributeType::Boolean.google_type(), GoogleType::Boolean);
        assert_eq!(AttributeType::Float.google_type(), GoogleType::Float);
        assert_eq!(AttributeType::Integer.google_type(), GoogleType::Int);
        assert_eq!(AttributeType::Numeric.google_type(), GoogleType::Price);
        assert_eq!(AttributeType::Selection.google_type(), GoogleType::Group);
        assert_eq!(AttributeType::Char.google_type(), GoogleType::String);
        assert_eq!(AttributeType::Date.google_type(), GoogleType::String);
        assert_eq!(AttributeType::Datetime.google_type(), GoogleType::String);
    }

    #[test]
    fn test_google_type_serializes_lowercase() {
        let json = serde_json::to_string(&GoogleType::Int).unwrap();
        assert_eq!(json, "\"int\"");
    }

    #[test]
    fn test_rec_name_prefers_display_name() {
        let mut attr = Attribute {
            id: 1,
            name: "brand_code".to_string(),
            display_name: Some("Brand".to_string()),
            type_: AttributeType::Char,
        };
        assert_eq!(attr.rec_name(), "Brand");
        attr.display_name = None;
        assert_eq!(attr.rec_name(), "brand_code");
    }

    #[test]
    fn test_additional_images_skip_default() {
        let product = Product {
            id: 1,
            code: None,
            name: "Mug".to_string(),
            description: None,
            list_price: dec!(4.50),
            weight: None,
            weight_uom: None,
            default_image: Some(image(2)),
            images: vec![image(1), image(2), image(3)],
            uri: "mug".to_string(),
            attributes: None,
            google_product_category: None,
            google_product_types: vec![],
        };
        let ids: Vec<ImageId> = product.additional_images().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(product.attribute_values().is_empty());
    }

    #[test]
    fn test_numeric_value_reads_back_as_text() {
        let json = serde_json::to_value(AttributeValue::Numeric(dec!(1.25))).unwrap();
        assert_eq!(json, serde_json::json!("1.25"));

        let back: AttributeValue = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back, AttributeValue::Text("1.25".to_string()));
        assert_eq!(serde_json::to_value(&back).unwrap(), json);
    }

    #[test]
    fn test_attribute_value_deserializes_plain_json() {
        let v: AttributeValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, AttributeValue::Boolean(true));
        let v: AttributeValue = serde_json::from_str("3").unwrap();
        assert_eq!(v, AttributeValue::Integer(3));
        let v: AttributeValue = serde_json::from_str("\"Acme\"").unwrap();
        assert_eq!(v, AttributeValue::Text("Acme".to_string()));
    }
}
