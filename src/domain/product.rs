use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported product kinds. Fixed at build time; every kind carries its own
/// field set and validation rules in the config table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProductKind {
    Soda,
    Shampoo,
    Shoes,
}

impl ProductKind {
    /// Every kind, in selector display order.
    pub const ALL: [ProductKind; 3] = [ProductKind::Soda, ProductKind::Shampoo, ProductKind::Shoes];

    pub fn label(&self) -> &'static str {
        match self {
            ProductKind::Soda => "Soda",
            ProductKind::Shampoo => "Shampoo",
            ProductKind::Shoes => "Shoes",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A submitted, validated product. Constructed only from a draft that passed
/// validation; never mutated afterwards. Each variant carries only the fields
/// that exist for its kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "productType")]
pub enum Product {
    Soda(SodaProduct),
    Shampoo(ShampooProduct),
    Shoes(ShoeProduct),
}

impl Product {
    pub fn kind(&self) -> ProductKind {
        match self {
            Product::Soda(_) => ProductKind::Soda,
            Product::Shampoo(_) => ProductKind::Shampoo,
            Product::Shoes(_) => ProductKind::Shoes,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Product::Soda(p) => &p.name,
            Product::Shampoo(p) => &p.name,
            Product::Shoes(p) => &p.name,
        }
    }

    pub fn price(&self) -> &str {
        match self {
            Product::Soda(p) => &p.price,
            Product::Shampoo(p) => &p.price,
            Product::Shoes(p) => &p.price,
        }
    }

    pub fn brand(&self) -> Option<&str> {
        match self {
            Product::Soda(p) => p.brand.as_deref(),
            Product::Shampoo(p) => p.brand.as_deref(),
            Product::Shoes(p) => p.brand.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SodaProduct {
    pub name: String,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    pub package_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShampooProduct {
    pub name: String,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scent: Option<String>,
    pub bottle_size: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShoeProduct {
    pub name: String,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoe_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoe_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}
