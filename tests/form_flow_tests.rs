use std::cell::RefCell;
use std::collections::HashMap;

use catalog_core::{
    core::{FormController, ProductStore, SubmitOutcome},
    domain::{Product, ProductKind},
    storage::{Result, SnapshotBackend},
};

#[derive(Default)]
struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl SnapshotBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[test]
fn soda_submission_lands_in_the_collection() {
    let mut controller = FormController::new(ProductKind::Soda);
    let mut store = ProductStore::open(MemoryBackend::default());

    controller.set_field("name", "Cola");
    controller.set_field("price", "1.50");
    controller.set_field("packageType", "Can");

    match controller.submit() {
        SubmitOutcome::Accepted(product) => store.add(product),
        SubmitOutcome::Rejected(errors) => panic!("unexpected rejection: {:?}", errors),
    }

    assert_eq!(store.len(), 1);
    match &store.all()[0] {
        Product::Soda(soda) => {
            assert_eq!(soda.name, "Cola");
            assert_eq!(soda.price, "1.50");
            assert_eq!(soda.package_type, "Can");
            assert_eq!(soda.brand, None);
            assert_eq!(soda.flavor, None);
            assert_eq!(soda.serving_size, None);
        }
        other => panic!("expected a soda, got {:?}", other),
    }

    // The form reset to empty defaults on the same kind.
    assert_eq!(controller.kind(), ProductKind::Soda);
    assert_eq!(controller.draft().field("name"), Some(""));
    assert_eq!(controller.draft().field("packageType"), Some(""));
}

#[test]
fn incomplete_shampoo_never_reaches_the_collection() {
    let mut controller = FormController::new(ProductKind::Shampoo);
    let mut store = ProductStore::open(MemoryBackend::default());

    controller.set_field("name", "Wash");
    controller.set_field("price", "");

    match controller.submit() {
        SubmitOutcome::Rejected(errors) => {
            assert_eq!(errors.len(), 2);
            assert_eq!(
                errors.get("price").map(String::as_str),
                Some("Price is required")
            );
            assert_eq!(
                errors.get("bottleSize").map(String::as_str),
                Some("Bottle Size is required")
            );
        }
        SubmitOutcome::Accepted(product) => panic!("unexpected acceptance: {:?}", product),
    }

    assert!(store.is_empty());
    // Entered values survive a failed submit.
    assert_eq!(controller.draft().field("name"), Some("Wash"));

    // Correct the form and resubmit.
    controller.set_field("price", "3.00");
    controller.set_field("bottleSize", "500ml");
    match controller.submit() {
        SubmitOutcome::Accepted(product) => store.add(product),
        SubmitOutcome::Rejected(errors) => panic!("unexpected rejection: {:?}", errors),
    }
    assert_eq!(store.len(), 1);
}

#[test]
fn switching_kinds_discards_entered_fields() {
    let mut controller = FormController::new(ProductKind::Soda);
    controller.set_field("name", "Cola");
    controller.set_field("flavor", "Cherry");

    controller.select_kind(ProductKind::Shoes);
    assert_eq!(controller.draft().field("name"), Some(""));
    assert_eq!(controller.draft().field("flavor"), Some(""));
    assert_eq!(controller.config().button_text, "Add Shoes");

    controller.select_kind(ProductKind::Soda);
    assert_eq!(controller.draft().field("flavor"), Some(""));
}

#[test]
fn every_kind_submits_through_its_own_config() {
    let mut store = ProductStore::open(MemoryBackend::default());

    for kind in ProductKind::ALL {
        let mut controller = FormController::new(kind);
        controller.set_field("name", format!("{} item", kind));
        controller.set_field("price", "9.99");
        // Satisfy kind-specific requirements where they exist.
        controller.set_field("packageType", "Can");
        controller.set_field("bottleSize", "250ml");
        match controller.submit() {
            SubmitOutcome::Accepted(product) => {
                assert_eq!(product.kind(), kind);
                store.add(product);
            }
            SubmitOutcome::Rejected(errors) => panic!("{} rejected: {:?}", kind, errors),
        }
    }

    assert_eq!(store.len(), 3);
    let kinds: Vec<ProductKind> = store.all().iter().map(Product::kind).collect();
    assert_eq!(
        kinds,
        [ProductKind::Soda, ProductKind::Shampoo, ProductKind::Shoes]
    );
}
