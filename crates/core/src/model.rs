//! Entity model and sparse-patch payloads.
//!
//! Update payloads follow a deliberate "sparse patch" semantic: a field is
//! applied only when it is present **and** non-empty (empty string, zero
//! quantity and zero value all read as "leave untouched"). Ownership-bearing
//! foreign keys (`user_id`, `budget_id`, `product_id`) are never applied from
//! a patch; re-parenting requests are ignored and the current parent is
//! reaffirmed by the resource managers.

use serde::{Deserialize, Serialize};

use crate::id::{BudgetId, ProductId, ResponseId, SupplierId, UserId};

// ─────────────────────────────────────────────────────────────────────────────
// Entities
// ─────────────────────────────────────────────────────────────────────────────

/// An account. Owns budgets and suppliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Never serialized; the digest stays inside the backend.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub is_admin: bool,
}

/// A quote-request campaign with a title, date window and free-text state.
///
/// `state` transitions are not validated here; that is caller policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,
    pub title: String,
    pub starts_on: String,
    pub ends_on: String,
    pub state: String,
    pub token: String,
    pub user_id: UserId,
}

/// A desired line item within a budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub reference: String,
    pub desired_quantity: u32,
    pub budget_id: BudgetId,
}

/// A vendor contact registered by a user, eligible to submit responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub token: String,
    pub user_id: UserId,
}

/// A supplier's price quote for a specific product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub id: ResponseId,
    pub value: f64,
    pub supplier_id: SupplierId,
    pub product_id: ProductId,
}

// ─────────────────────────────────────────────────────────────────────────────
// Create payloads
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewBudget {
    pub title: String,
    #[serde(default)]
    pub starts_on: String,
    #[serde(default)]
    pub ends_on: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub reference: String,
    pub desired_quantity: u32,
    pub budget_id: BudgetId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSupplier {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewQuoteResponse {
    pub value: f64,
    pub supplier_id: SupplierId,
    pub product_id: ProductId,
}

// ─────────────────────────────────────────────────────────────────────────────
// Patch payloads
// ─────────────────────────────────────────────────────────────────────────────

/// Applies `src` onto `dst` only when present and non-empty.
fn patch_text(dst: &mut String, src: Option<String>) {
    if let Some(v) = src {
        if !v.is_empty() {
            *dst = v;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Plaintext; re-hashed by the user manager before persisting.
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub is_admin: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BudgetPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub starts_on: Option<String>,
    #[serde(default)]
    pub ends_on: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl BudgetPatch {
    pub fn apply(self, budget: &mut Budget) {
        patch_text(&mut budget.title, self.title);
        patch_text(&mut budget.starts_on, self.starts_on);
        patch_text(&mut budget.ends_on, self.ends_on);
        patch_text(&mut budget.state, self.state);
        patch_text(&mut budget.token, self.token);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub desired_quantity: Option<u32>,
    /// Accepted on the wire but never applied (re-parenting is ignored).
    #[serde(default)]
    pub budget_id: Option<BudgetId>,
}

impl ProductPatch {
    pub fn apply(self, product: &mut Product) {
        patch_text(&mut product.name, self.name);
        patch_text(&mut product.reference, self.reference);
        if let Some(qty) = self.desired_quantity {
            if qty != 0 {
                product.desired_quantity = qty;
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl SupplierPatch {
    pub fn apply(self, supplier: &mut Supplier) {
        patch_text(&mut supplier.name, self.name);
        patch_text(&mut supplier.email, self.email);
        patch_text(&mut supplier.contact, self.contact);
        patch_text(&mut supplier.token, self.token);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteResponsePatch {
    #[serde(default)]
    pub value: Option<f64>,
    /// Applied only after the response manager verifies the new supplier
    /// belongs to the acting user.
    #[serde(default)]
    pub supplier_id: Option<SupplierId>,
    /// Accepted on the wire but never applied (re-parenting is ignored).
    #[serde(default)]
    pub product_id: Option<ProductId>,
}

impl QuoteResponsePatch {
    /// Applies the quoted value only; the entity references are handled by
    /// the response manager, which must authorize them first.
    pub fn apply(self, response: &mut QuoteResponse) {
        if let Some(v) = self.value {
            if v != 0.0 {
                response.value = v;
            }
        }
    }
}
