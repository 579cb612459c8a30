//! Shared fixtures for the crate's tests.
//!
//! Fixture users are inserted with a placeholder digest; tests that exercise
//! real hashing go through [`crate::users::signup`] instead.

use quotehub_core::{Budget, BudgetId, Product, ProductId, Supplier, SupplierId, User, UserId};
use quotehub_store::{MemoryStore, Store};

pub fn store() -> MemoryStore {
    MemoryStore::new()
}

pub fn fixture_user(store: &MemoryStore, email: &str, is_admin: bool) -> User {
    store
        .insert_user(User {
            id: UserId::new(0),
            name: email.to_string(),
            email: email.to_string(),
            password_hash: "fixture-digest".to_string(),
            is_admin,
        })
        .unwrap()
}

pub fn fixture_budget(store: &MemoryStore, owner: &User) -> Budget {
    store.insert_budget(Budget {
        id: BudgetId::new(0),
        title: "Office Supplies".to_string(),
        starts_on: "2024-01-01".to_string(),
        ends_on: "2024-01-31".to_string(),
        state: "open".to_string(),
        token: String::new(),
        user_id: owner.id,
    })
}

pub fn fixture_product(store: &MemoryStore, owner: &User) -> (Budget, Product) {
    let budget = fixture_budget(store, owner);
    let product = store.insert_product(Product {
        id: ProductId::new(0),
        name: "Chairs".to_string(),
        reference: "CH-01".to_string(),
        desired_quantity: 10,
        budget_id: budget.id,
    });
    (budget, product)
}

pub fn fixture_supplier(store: &MemoryStore, owner: &User) -> Supplier {
    store.insert_supplier(Supplier {
        id: SupplierId::new(0),
        name: "Acme".to_string(),
        email: "sales@acme.test".to_string(),
        contact: String::new(),
        token: String::new(),
        user_id: owner.id,
    })
}
