//! Store trait and error model.

use thiserror::Error;

use quotehub_core::{
    Budget, BudgetId, DomainError, Product, ProductId, QuoteResponse, ResponseId, Supplier,
    SupplierId, User, UserId,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// User.email uniqueness violated; nothing was written.
    #[error("email already registered")]
    DuplicateEmail,

    /// The targeted row does not exist (e.g. deleted by a concurrent
    /// operation between the ownership check and the write).
    #[error("row not found")]
    Missing,
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => {
                DomainError::conflict("a user with this email already exists")
            }
            StoreError::Missing => DomainError::NotFound,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Entity store. Insert methods ignore the incoming `id` field and return the
/// entity with a freshly assigned id. Update methods overwrite a row only if
/// it still exists ([`StoreError::Missing`] otherwise), which makes each
/// read-check-write sequence fail harmlessly after a concurrent delete.
/// Delete methods cascade to dependents atomically.
pub trait Store: Send + Sync {
    // Users
    fn insert_user(&self, user: User) -> StoreResult<User>;
    fn user(&self, id: UserId) -> Option<User>;
    fn user_by_email(&self, email: &str) -> Option<User>;
    fn users(&self) -> Vec<User>;
    fn update_user(&self, user: User) -> StoreResult<User>;
    /// Cascades to the user's budgets and suppliers, and transitively to
    /// products and responses.
    fn delete_user(&self, id: UserId) -> StoreResult<()>;

    // Budgets
    fn insert_budget(&self, budget: Budget) -> Budget;
    fn budget(&self, id: BudgetId) -> Option<Budget>;
    fn budgets_for_user(&self, user_id: UserId) -> Vec<Budget>;
    fn update_budget(&self, budget: Budget) -> StoreResult<Budget>;
    /// Cascades to the budget's products and their responses.
    fn delete_budget(&self, id: BudgetId) -> StoreResult<()>;

    // Products
    fn insert_product(&self, product: Product) -> Product;
    fn product(&self, id: ProductId) -> Option<Product>;
    fn products_for_budget(&self, budget_id: BudgetId) -> Vec<Product>;
    fn update_product(&self, product: Product) -> StoreResult<Product>;
    /// Cascades to the product's responses.
    fn delete_product(&self, id: ProductId) -> StoreResult<()>;

    // Suppliers
    fn insert_supplier(&self, supplier: Supplier) -> Supplier;
    fn supplier(&self, id: SupplierId) -> Option<Supplier>;
    fn suppliers_for_user(&self, user_id: UserId) -> Vec<Supplier>;
    fn update_supplier(&self, supplier: Supplier) -> StoreResult<Supplier>;
    /// Cascades to responses submitted by the supplier.
    fn delete_supplier(&self, id: SupplierId) -> StoreResult<()>;

    // Quote responses
    fn insert_response(&self, response: QuoteResponse) -> QuoteResponse;
    fn response(&self, id: ResponseId) -> Option<QuoteResponse>;
    fn responses_for_product(&self, product_id: ProductId) -> Vec<QuoteResponse>;
    fn update_response(&self, response: QuoteResponse) -> StoreResult<QuoteResponse>;
    fn delete_response(&self, id: ResponseId) -> StoreResult<()>;
}
