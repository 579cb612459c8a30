//! `quotehub-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** types (no HTTP, no storage): the
//! identifier newtypes, the entity model, the sparse-patch payloads and the
//! domain error taxonomy.

pub mod error;
pub mod id;
pub mod model;

pub use error::{DomainError, DomainResult};
pub use id::{BudgetId, ProductId, ResponseId, SupplierId, UserId};
pub use model::{
    Budget, BudgetPatch, NewBudget, NewProduct, NewQuoteResponse, NewSupplier, Product,
    ProductPatch, QuoteResponse, QuoteResponsePatch, Signup, Supplier, SupplierPatch, User,
    UserPatch,
};
