//! Starter catalog inserted by the seed endpoint when no products exist.

use crate::models::Product;

const IMAGE_BASE: &str = "https://store.storeimages.cdn-apple.com/4668/as-images.apple.com/is/";

fn image(path: &str) -> Vec<String> {
    vec![format!("{IMAGE_BASE}{path}")]
}

/// The four fixture products, in insertion order
pub fn starter_catalog() -> Vec<Product> {
    vec![
        Product {
            description: Some("Titanium. A17 Pro chip. Pro camera system.".to_string()),
            storage: Some("128GB".to_string()),
            color: Some("Natural Titanium".to_string()),
            images: image(
                "iphone-15-pro-finish-select-202309-6-7inch-naturaltitanium?wid=512&hei=512&fmt=jpeg&qlt=90&.v=1692893201418",
            ),
            stock: 10,
            ..Product::new("iPhone 15 Pro", 999.0, "new")
        },
        Product {
            description: Some("Dynamic Island. 48MP Main camera.".to_string()),
            storage: Some("128GB".to_string()),
            color: Some("Blue".to_string()),
            images: image(
                "iphone-15-finish-select-202309-6-1inch-blue?wid=512&hei=512&fmt=jpeg&qlt=90&.v=1693087732363",
            ),
            stock: 12,
            ..Product::new("iPhone 15", 799.0, "new")
        },
        Product {
            description: Some("Excellent condition. Fully tested. 85% battery health.".to_string()),
            is_new: false,
            condition: Some("Excellent".to_string()),
            grade: Some("A".to_string()),
            storage: Some("256GB".to_string()),
            color: Some("Space Black".to_string()),
            images: image(
                "iphone-14-pro-finish-select-202209-6-7inch-spaceblack?wid=512&hei=512&fmt=jpeg&qlt=90&.v=1660754106034",
            ),
            stock: 5,
            ..Product::new("iPhone 14 Pro (Pre\u{2011}Owned)", 699.0, "preowned")
        },
        Product {
            description: Some("Snap on wireless charging.".to_string()),
            images: image("MHXH3?wid=572&hei=572&fmt=jpeg&qlt=95&.v=1694014870996"),
            stock: 30,
            ..Product::new("MagSafe Charger", 39.0, "accessories")
        },
    ]
}
