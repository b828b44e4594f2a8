use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// One record of the storefront catalog feed. Field names mirror the feed's
/// camelCase JSON. The engine reads records, never mutates them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub regular_price: Decimal,
    #[serde(default)]
    pub sale_price: Option<Decimal>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub external_url: String,
    #[serde(default)]
    pub button_text: Option<String>,
}

impl Product {
    /// A product is on sale only when the sale price actually undercuts the
    /// regular price.
    pub fn is_on_sale(&self) -> bool {
        matches!(self.sale_price, Some(sale) if sale < self.regular_price)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{Product, ProductId};

    #[test]
    fn deserializes_feed_record_with_camel_case_names() {
        let record: Product = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "ChatGPT Plus Monthly",
                "description": "Shared premium subscription",
                "category": "AI Tools",
                "regularPrice": 2000,
                "salePrice": 399,
                "image": "chatgpt.jpg",
                "externalUrl": "https://pay.example/chatgpt",
                "buttonText": "Buy Now"
            }"#,
        )
        .expect("feed record should deserialize");

        assert_eq!(record.id, ProductId(7));
        assert_eq!(record.regular_price, Decimal::from(2000));
        assert_eq!(record.sale_price, Some(Decimal::from(399)));
        assert_eq!(record.button_text.as_deref(), Some("Buy Now"));
    }

    #[test]
    fn degraded_record_without_prices_still_loads() {
        let record: Product = serde_json::from_str(
            r#"{"id": 1, "name": "Mystery", "description": "", "category": "Software"}"#,
        )
        .expect("record with missing optional fields should deserialize");

        assert_eq!(record.regular_price, Decimal::ZERO);
        assert_eq!(record.sale_price, None);
        assert!(record.image.is_empty());
        assert!(!record.is_on_sale());
    }

    #[test]
    fn on_sale_requires_sale_price_below_regular() {
        let mut record = Product {
            id: ProductId(1),
            name: "Canva Pro".to_owned(),
            description: String::new(),
            category: "Cloud Services".to_owned(),
            regular_price: Decimal::from(1000),
            sale_price: Some(Decimal::from(750)),
            image: String::new(),
            external_url: String::new(),
            button_text: None,
        };
        assert!(record.is_on_sale());

        record.sale_price = Some(Decimal::from(1000));
        assert!(!record.is_on_sale());

        record.sale_price = None;
        assert!(!record.is_on_sale());
    }
}
