use serde::{Deserialize, Serialize};

use crate::domain::product::{Product, ProductKind, ShampooProduct, ShoeProduct, SodaProduct};

/// The in-progress form state for one product. Holds every field across all
/// kinds as a plain string so the presentation layer can bind inputs by name;
/// which fields actually apply is decided by the kind's config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub kind: ProductKind,
    pub name: String,
    pub price: String,
    pub brand: String,
    pub flavor: String,
    pub package_type: String,
    pub serving_size: String,
    pub scent: String,
    pub bottle_size: String,
    pub shoe_size: String,
    pub shoe_color: String,
    pub gender: String,
}

impl ProductDraft {
    /// Fresh draft for the given kind with every field empty.
    pub fn new(kind: ProductKind) -> Self {
        Self {
            kind,
            name: String::new(),
            price: String::new(),
            brand: String::new(),
            flavor: String::new(),
            package_type: String::new(),
            serving_size: String::new(),
            scent: String::new(),
            bottle_size: String::new(),
            shoe_size: String::new(),
            shoe_color: String::new(),
            gender: String::new(),
        }
    }

    /// Reads a field by its config name. `None` for names no kind defines.
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "name" => &self.name,
            "price" => &self.price,
            "brand" => &self.brand,
            "flavor" => &self.flavor,
            "packageType" => &self.package_type,
            "servingSize" => &self.serving_size,
            "scent" => &self.scent,
            "bottleSize" => &self.bottle_size,
            "shoeSize" => &self.shoe_size,
            "shoeColor" => &self.shoe_color,
            "gender" => &self.gender,
            _ => return None,
        };
        Some(value)
    }

    /// Writes a field by its config name. Unknown names are ignored and
    /// reported as `false` so forward-compatible callers never fail.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        let slot = match name {
            "name" => &mut self.name,
            "price" => &mut self.price,
            "brand" => &mut self.brand,
            "flavor" => &mut self.flavor,
            "packageType" => &mut self.package_type,
            "servingSize" => &mut self.serving_size,
            "scent" => &mut self.scent,
            "bottleSize" => &mut self.bottle_size,
            "shoeSize" => &mut self.shoe_size,
            "shoeColor" => &mut self.shoe_color,
            "gender" => &mut self.gender,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    /// Freezes the draft into its kind's product variant. Fields that are
    /// optional for the kind collapse to `None` when left empty. Callers are
    /// expected to validate first; this never checks required fields itself.
    pub fn to_product(&self) -> Product {
        match self.kind {
            ProductKind::Soda => Product::Soda(SodaProduct {
                name: self.name.clone(),
                price: self.price.clone(),
                brand: optional(&self.brand),
                flavor: optional(&self.flavor),
                package_type: self.package_type.clone(),
                serving_size: optional(&self.serving_size),
            }),
            ProductKind::Shampoo => Product::Shampoo(ShampooProduct {
                name: self.name.clone(),
                price: self.price.clone(),
                brand: optional(&self.brand),
                scent: optional(&self.scent),
                bottle_size: self.bottle_size.clone(),
            }),
            ProductKind::Shoes => Product::Shoes(ShoeProduct {
                name: self.name.clone(),
                price: self.price.clone(),
                brand: optional(&self.brand),
                shoe_size: optional(&self.shoe_size),
                shoe_color: optional(&self.shoe_color),
                gender: optional(&self.gender),
            }),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_is_empty_for_every_kind() {
        for kind in ProductKind::ALL {
            let draft = ProductDraft::new(kind);
            assert_eq!(draft.kind, kind);
            for name in [
                "name",
                "price",
                "brand",
                "flavor",
                "packageType",
                "servingSize",
                "scent",
                "bottleSize",
                "shoeSize",
                "shoeColor",
                "gender",
            ] {
                assert_eq!(draft.field(name), Some(""));
            }
        }
    }

    #[test]
    fn set_field_ignores_unknown_names() {
        let mut draft = ProductDraft::new(ProductKind::Soda);
        assert!(draft.set_field("flavor", "Cherry"));
        assert!(!draft.set_field("carbonation", "high"));
        assert_eq!(draft.field("flavor"), Some("Cherry"));
        assert_eq!(draft.field("carbonation"), None);
    }

    #[test]
    fn to_product_drops_empty_optionals() {
        let mut draft = ProductDraft::new(ProductKind::Shoes);
        draft.set_field("name", "Runner");
        draft.set_field("price", "59.90");
        draft.set_field("shoeColor", "Red");
        match draft.to_product() {
            Product::Shoes(shoes) => {
                assert_eq!(shoes.name, "Runner");
                assert_eq!(shoes.brand, None);
                assert_eq!(shoes.shoe_color.as_deref(), Some("Red"));
                assert_eq!(shoes.gender, None);
            }
            other => panic!("expected shoes, got {:?}", other),
        }
    }
}
