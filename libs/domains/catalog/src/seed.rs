//! Initial catalog contents, inserted once into an empty collection.

use crate::models::Product;

const SUMMARY: &str =
    "This phone is the company's biggest change to its flagship smartphone in years. It includes a borderless.";
const DESCRIPTION: &str = "Lorem ipsum dolor sit amet, consectetur adipisicing elit. Ut, tenetur natus doloremque laborum quos iste ipsum rerum obcaecati impedit odit illo dolorum ab tempora nihil dicta earum fugiat. Temporibus, voluptatibus.";

/// The fixed seed set
pub fn products() -> Vec<Product> {
    [
        ("1", "IPhone X", "Smart Phone", 950.00, "Apple"),
        ("2", "Samsung 10", "Smart Phone", 840.00, "Samsung"),
        ("3", "Huawei Plus", "White Appliances", 650.00, "Huawei"),
        ("4", "Xiaomi Mi 9", "White Appliances", 470.00, "Xiaomi"),
        ("5", "HTC U11+ Plus", "Smart Phone", 380.00, "HTC"),
        ("6", "LG G7 ThinQ", "Home Kitchen", 240.00, "LG"),
    ]
    .into_iter()
    .map(|(id, name, category, price, brand)| {
        Product::new(id, name, category, price)
            .with_summary(SUMMARY)
            .with_description(DESCRIPTION)
            .with_image_file(format!("product-{id}.png"))
            .with_brand(brand)
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let products = products();
        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), products.len());
        assert_eq!(products.len(), 6);
    }

    #[test]
    fn test_seed_contains_iphone() {
        let iphone = products().into_iter().find(|p| p.id == "1").unwrap();
        assert_eq!(iphone.name, "IPhone X");
        assert_eq!(iphone.category, "Smart Phone");
        assert_eq!(iphone.price, 950.00);
        assert_eq!(iphone.image_file, "product-1.png");
    }
}
