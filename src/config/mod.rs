//! Static per-kind form configuration: field lists, validation requirements,
//! and the presentation metadata the form surface needs to render itself.

use once_cell::sync::Lazy;

use crate::domain::ProductKind;

/// How a field is rendered and edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
}

/// One editable field of a product form.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Key into [`ProductDraft::field`](crate::domain::ProductDraft::field).
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Populated only for [`FieldKind::Select`] fields, in display order.
    pub options: Vec<String>,
}

impl FieldConfig {
    fn text(name: &'static str, label: &'static str, required: bool) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required,
            options: Vec::new(),
        }
    }

    fn select(name: &'static str, label: &'static str, required: bool, options: &[&str]) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Select,
            required,
            options: options.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Submit button colors for a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    pub background: &'static str,
    pub color: &'static str,
}

/// Full form configuration for one product kind. Built once at startup and
/// never mutated; field order here drives render and validation order.
#[derive(Debug, Clone)]
pub struct KindConfig {
    pub kind: ProductKind,
    pub label: &'static str,
    pub button_text: &'static str,
    pub button_style: ButtonStyle,
    pub fields: Vec<FieldConfig>,
}

impl KindConfig {
    /// Looks up a field by its draft key.
    pub fn field(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.iter().find(|field| field.name == name)
    }
}

fn common_fields() -> Vec<FieldConfig> {
    vec![
        FieldConfig::text("name", "Name", true),
        FieldConfig::text("price", "Price", true),
        FieldConfig::text("brand", "Brand", false),
    ]
}

static SODA: Lazy<KindConfig> = Lazy::new(|| {
    let mut fields = common_fields();
    fields.extend([
        FieldConfig::text("flavor", "Flavor", false),
        FieldConfig::select(
            "packageType",
            "Package type",
            true,
            &["Can", "Plastic Bottle", "Glass Bottle"],
        ),
        FieldConfig::text("servingSize", "Serving Size", false),
    ]);
    KindConfig {
        kind: ProductKind::Soda,
        label: "Soda",
        button_text: "Add Soda",
        button_style: ButtonStyle {
            background: "#b82b1b",
            color: "white",
        },
        fields,
    }
});

static SHAMPOO: Lazy<KindConfig> = Lazy::new(|| {
    let mut fields = common_fields();
    fields.extend([
        FieldConfig::text("scent", "Scent", false),
        FieldConfig::text("bottleSize", "Bottle Size", true),
    ]);
    KindConfig {
        kind: ProductKind::Shampoo,
        label: "Shampoo",
        button_text: "Add Shampoo",
        button_style: ButtonStyle {
            background: "#36ff3d",
            color: "#242424",
        },
        fields,
    }
});

static SHOES: Lazy<KindConfig> = Lazy::new(|| {
    let mut fields = common_fields();
    fields.extend([
        FieldConfig::text("shoeSize", "Shoe size", false),
        FieldConfig::text("shoeColor", "Shoe color", false),
        FieldConfig::select("gender", "Gender", false, &["Male", "Female", "Unisex"]),
    ]);
    KindConfig {
        kind: ProductKind::Shoes,
        label: "Shoes",
        button_text: "Add Shoes",
        button_style: ButtonStyle {
            background: "#19aad8",
            color: "#242424",
        },
        fields,
    }
});

/// Returns the configuration for a kind. Total over [`ProductKind`].
pub fn config_for(kind: ProductKind) -> &'static KindConfig {
    match kind {
        ProductKind::Soda => &SODA,
        ProductKind::Shampoo => &SHAMPOO,
        ProductKind::Shoes => &SHOES,
    }
}
