//! In-memory store for dev/test.
//!
//! One `RwLock` around all tables: every mutation (including each cascade
//! delete) runs inside a single write-lock section, so operations are atomic
//! with respect to each other. Listing order is normalized to ascending id.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use quotehub_core::{
    Budget, BudgetId, Product, ProductId, QuoteResponse, ResponseId, Supplier, SupplierId, User,
    UserId,
};

use crate::store::{Store, StoreError, StoreResult};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<i64, User>,
    budgets: HashMap<i64, Budget>,
    products: HashMap<i64, Product>,
    suppliers: HashMap<i64, Supplier>,
    responses: HashMap<i64, QuoteResponse>,
    next_user_id: i64,
    next_budget_id: i64,
    next_product_id: i64,
    next_supplier_id: i64,
    next_response_id: i64,
}

impl Tables {
    fn delete_product_rows(&mut self, product_id: i64) {
        self.products.remove(&product_id);
        self.responses
            .retain(|_, r| r.product_id != ProductId::new(product_id));
    }

    fn delete_budget_rows(&mut self, budget_id: i64) {
        self.budgets.remove(&budget_id);
        let product_ids: Vec<i64> = self
            .products
            .values()
            .filter(|p| p.budget_id == BudgetId::new(budget_id))
            .map(|p| p.id.as_i64())
            .collect();
        for pid in product_ids {
            self.delete_product_rows(pid);
        }
    }

    fn delete_supplier_rows(&mut self, supplier_id: i64) {
        self.suppliers.remove(&supplier_id);
        self.responses
            .retain(|_, r| r.supplier_id != SupplierId::new(supplier_id));
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn sorted_by_id<T, F>(mut items: Vec<T>, id: F) -> Vec<T>
where
    F: Fn(&T) -> i64,
{
    items.sort_by_key(|item| id(item));
    items
}

impl Store for MemoryStore {
    // ─────────────────────────────────────────────────────────────────────────
    // Users
    // ─────────────────────────────────────────────────────────────────────────

    fn insert_user(&self, mut user: User) -> StoreResult<User> {
        let mut t = self.write();
        if t.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail);
        }
        t.next_user_id += 1;
        user.id = UserId::new(t.next_user_id);
        t.users.insert(user.id.as_i64(), user.clone());
        Ok(user)
    }

    fn user(&self, id: UserId) -> Option<User> {
        self.read().users.get(&id.as_i64()).cloned()
    }

    fn user_by_email(&self, email: &str) -> Option<User> {
        self.read().users.values().find(|u| u.email == email).cloned()
    }

    fn users(&self) -> Vec<User> {
        sorted_by_id(self.read().users.values().cloned().collect(), |u| {
            u.id.as_i64()
        })
    }

    fn update_user(&self, user: User) -> StoreResult<User> {
        let mut t = self.write();
        if !t.users.contains_key(&user.id.as_i64()) {
            return Err(StoreError::Missing);
        }
        if t.users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(StoreError::DuplicateEmail);
        }
        t.users.insert(user.id.as_i64(), user.clone());
        Ok(user)
    }

    fn delete_user(&self, id: UserId) -> StoreResult<()> {
        let mut t = self.write();
        if t.users.remove(&id.as_i64()).is_none() {
            return Err(StoreError::Missing);
        }
        let budget_ids: Vec<i64> = t
            .budgets
            .values()
            .filter(|b| b.user_id == id)
            .map(|b| b.id.as_i64())
            .collect();
        for bid in budget_ids {
            t.delete_budget_rows(bid);
        }
        let supplier_ids: Vec<i64> = t
            .suppliers
            .values()
            .filter(|s| s.user_id == id)
            .map(|s| s.id.as_i64())
            .collect();
        for sid in supplier_ids {
            t.delete_supplier_rows(sid);
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Budgets
    // ─────────────────────────────────────────────────────────────────────────

    fn insert_budget(&self, mut budget: Budget) -> Budget {
        let mut t = self.write();
        t.next_budget_id += 1;
        budget.id = BudgetId::new(t.next_budget_id);
        t.budgets.insert(budget.id.as_i64(), budget.clone());
        budget
    }

    fn budget(&self, id: BudgetId) -> Option<Budget> {
        self.read().budgets.get(&id.as_i64()).cloned()
    }

    fn budgets_for_user(&self, user_id: UserId) -> Vec<Budget> {
        sorted_by_id(
            self.read()
                .budgets
                .values()
                .filter(|b| b.user_id == user_id)
                .cloned()
                .collect(),
            |b| b.id.as_i64(),
        )
    }

    fn update_budget(&self, budget: Budget) -> StoreResult<Budget> {
        let mut t = self.write();
        if !t.budgets.contains_key(&budget.id.as_i64()) {
            return Err(StoreError::Missing);
        }
        t.budgets.insert(budget.id.as_i64(), budget.clone());
        Ok(budget)
    }

    fn delete_budget(&self, id: BudgetId) -> StoreResult<()> {
        let mut t = self.write();
        if !t.budgets.contains_key(&id.as_i64()) {
            return Err(StoreError::Missing);
        }
        t.delete_budget_rows(id.as_i64());
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Products
    // ─────────────────────────────────────────────────────────────────────────

    fn insert_product(&self, mut product: Product) -> Product {
        let mut t = self.write();
        t.next_product_id += 1;
        product.id = ProductId::new(t.next_product_id);
        t.products.insert(product.id.as_i64(), product.clone());
        product
    }

    fn product(&self, id: ProductId) -> Option<Product> {
        self.read().products.get(&id.as_i64()).cloned()
    }

    fn products_for_budget(&self, budget_id: BudgetId) -> Vec<Product> {
        sorted_by_id(
            self.read()
                .products
                .values()
                .filter(|p| p.budget_id == budget_id)
                .cloned()
                .collect(),
            |p| p.id.as_i64(),
        )
    }

    fn update_product(&self, product: Product) -> StoreResult<Product> {
        let mut t = self.write();
        if !t.products.contains_key(&product.id.as_i64()) {
            return Err(StoreError::Missing);
        }
        t.products.insert(product.id.as_i64(), product.clone());
        Ok(product)
    }

    fn delete_product(&self, id: ProductId) -> StoreResult<()> {
        let mut t = self.write();
        if !t.products.contains_key(&id.as_i64()) {
            return Err(StoreError::Missing);
        }
        t.delete_product_rows(id.as_i64());
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Suppliers
    // ─────────────────────────────────────────────────────────────────────────

    fn insert_supplier(&self, mut supplier: Supplier) -> Supplier {
        let mut t = self.write();
        t.next_supplier_id += 1;
        supplier.id = SupplierId::new(t.next_supplier_id);
        t.suppliers.insert(supplier.id.as_i64(), supplier.clone());
        supplier
    }

    fn supplier(&self, id: SupplierId) -> Option<Supplier> {
        self.read().suppliers.get(&id.as_i64()).cloned()
    }

    fn suppliers_for_user(&self, user_id: UserId) -> Vec<Supplier> {
        sorted_by_id(
            self.read()
                .suppliers
                .values()
                .filter(|s| s.user_id == user_id)
                .cloned()
                .collect(),
            |s| s.id.as_i64(),
        )
    }

    fn update_supplier(&self, supplier: Supplier) -> StoreResult<Supplier> {
        let mut t = self.write();
        if !t.suppliers.contains_key(&supplier.id.as_i64()) {
            return Err(StoreError::Missing);
        }
        t.suppliers.insert(supplier.id.as_i64(), supplier.clone());
        Ok(supplier)
    }

    fn delete_supplier(&self, id: SupplierId) -> StoreResult<()> {
        let mut t = self.write();
        if !t.suppliers.contains_key(&id.as_i64()) {
            return Err(StoreError::Missing);
        }
        t.delete_supplier_rows(id.as_i64());
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Quote responses
    // ─────────────────────────────────────────────────────────────────────────

    fn insert_response(&self, mut response: QuoteResponse) -> QuoteResponse {
        let mut t = self.write();
        t.next_response_id += 1;
        response.id = ResponseId::new(t.next_response_id);
        t.responses.insert(response.id.as_i64(), response.clone());
        response
    }

    fn response(&self, id: ResponseId) -> Option<QuoteResponse> {
        self.read().responses.get(&id.as_i64()).cloned()
    }

    fn responses_for_product(&self, product_id: ProductId) -> Vec<QuoteResponse> {
        sorted_by_id(
            self.read()
                .responses
                .values()
                .filter(|r| r.product_id == product_id)
                .cloned()
                .collect(),
            |r| r.id.as_i64(),
        )
    }

    fn update_response(&self, response: QuoteResponse) -> StoreResult<QuoteResponse> {
        let mut t = self.write();
        if !t.responses.contains_key(&response.id.as_i64()) {
            return Err(StoreError::Missing);
        }
        t.responses.insert(response.id.as_i64(), response.clone());
        Ok(response)
    }

    fn delete_response(&self, id: ResponseId) -> StoreResult<()> {
        let mut t = self.write();
        if t.responses.remove(&id.as_i64()).is_none() {
            return Err(StoreError::Missing);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User {
            id: UserId::new(0),
            name: "Test".to_string(),
            email: email.to_string(),
            password_hash: "digest".to_string(),
            is_admin: false,
        }
    }

    fn budget(user_id: UserId) -> Budget {
        Budget {
            id: BudgetId::new(0),
            title: "Office Supplies".to_string(),
            starts_on: "2024-01-01".to_string(),
            ends_on: "2024-01-31".to_string(),
            state: "open".to_string(),
            token: String::new(),
            user_id,
        }
    }

    fn product(budget_id: BudgetId) -> Product {
        Product {
            id: ProductId::new(0),
            name: "Chairs".to_string(),
            reference: "CH-01".to_string(),
            desired_quantity: 10,
            budget_id,
        }
    }

    fn supplier(user_id: UserId) -> Supplier {
        Supplier {
            id: SupplierId::new(0),
            name: "Acme".to_string(),
            email: "sales@acme.test".to_string(),
            contact: String::new(),
            token: String::new(),
            user_id,
        }
    }

    fn response(supplier_id: SupplierId, product_id: ProductId) -> QuoteResponse {
        QuoteResponse {
            id: ResponseId::new(0),
            value: 42.5,
            supplier_id,
            product_id,
        }
    }

    #[test]
    fn insert_assigns_fresh_ids() {
        let store = MemoryStore::new();
        let a = store.insert_user(user("a@x.com")).unwrap();
        let b = store.insert_user(user("b@x.com")).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.user(a.id).unwrap().email, "a@x.com");
    }

    #[test]
    fn duplicate_email_rejected_without_partial_write() {
        let store = MemoryStore::new();
        store.insert_user(user("a@x.com")).unwrap();
        assert_eq!(
            store.insert_user(user("a@x.com")).unwrap_err(),
            StoreError::DuplicateEmail
        );
        assert_eq!(store.users().len(), 1);
    }

    #[test]
    fn update_after_delete_is_missing() {
        let store = MemoryStore::new();
        let u = store.insert_user(user("a@x.com")).unwrap();
        let b = store.insert_budget(budget(u.id));
        store.delete_budget(b.id).unwrap();
        assert_eq!(store.update_budget(b).unwrap_err(), StoreError::Missing);
    }

    #[test]
    fn deleting_user_cascades_through_the_whole_tree() {
        let store = MemoryStore::new();
        let u = store.insert_user(user("a@x.com")).unwrap();
        let b = store.insert_budget(budget(u.id));
        let p = store.insert_product(product(b.id));
        let s = store.insert_supplier(supplier(u.id));
        let r = store.insert_response(response(s.id, p.id));

        store.delete_user(u.id).unwrap();

        assert!(store.budget(b.id).is_none());
        assert!(store.product(p.id).is_none());
        assert!(store.supplier(s.id).is_none());
        assert!(store.response(r.id).is_none());
    }

    #[test]
    fn deleting_product_removes_its_responses_only() {
        let store = MemoryStore::new();
        let u = store.insert_user(user("a@x.com")).unwrap();
        let b = store.insert_budget(budget(u.id));
        let p1 = store.insert_product(product(b.id));
        let p2 = store.insert_product(product(b.id));
        let s = store.insert_supplier(supplier(u.id));
        let r1 = store.insert_response(response(s.id, p1.id));
        let r2 = store.insert_response(response(s.id, p2.id));

        store.delete_product(p1.id).unwrap();

        assert!(store.response(r1.id).is_none());
        assert!(store.response(r2.id).is_some());
        assert!(store.supplier(s.id).is_some());
    }

    #[test]
    fn deleting_supplier_removes_its_responses() {
        let store = MemoryStore::new();
        let u = store.insert_user(user("a@x.com")).unwrap();
        let b = store.insert_budget(budget(u.id));
        let p = store.insert_product(product(b.id));
        let s = store.insert_supplier(supplier(u.id));
        let r = store.insert_response(response(s.id, p.id));

        store.delete_supplier(s.id).unwrap();

        assert!(store.response(r.id).is_none());
        assert!(store.product(p.id).is_some());
    }

    #[test]
    fn listing_is_scoped_by_foreign_key() {
        let store = MemoryStore::new();
        let u1 = store.insert_user(user("a@x.com")).unwrap();
        let u2 = store.insert_user(user("b@x.com")).unwrap();
        store.insert_budget(budget(u1.id));
        store.insert_budget(budget(u1.id));
        store.insert_budget(budget(u2.id));

        assert_eq!(store.budgets_for_user(u1.id).len(), 2);
        assert_eq!(store.budgets_for_user(u2.id).len(), 1);
    }

    #[test]
    fn email_uniqueness_applies_to_updates_too() {
        let store = MemoryStore::new();
        store.insert_user(user("a@x.com")).unwrap();
        let mut b = store.insert_user(user("b@x.com")).unwrap();
        b.email = "a@x.com".to_string();
        assert_eq!(store.update_user(b).unwrap_err(), StoreError::DuplicateEmail);
    }
}
