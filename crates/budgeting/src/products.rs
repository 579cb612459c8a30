//! Product resource manager.
//!
//! Products hang off a budget, so every operation here resolves the
//! product → budget → owner chain first. Creating a product under a budget
//! the acting user does not own reads as `NotFound`, the same as a budget
//! that does not exist.

use quotehub_core::{
    BudgetId, DomainError, DomainResult, NewProduct, Product, ProductId, ProductPatch, User,
};
use quotehub_store::Store;

use crate::ownership;

pub fn create(store: &dyn Store, acting: &User, new: NewProduct) -> DomainResult<Product> {
    if new.name.trim().is_empty() {
        return Err(DomainError::validation("name must not be empty"));
    }

    let (budget, owner) = ownership::budget_chain(store, new.budget_id)?;
    ownership::ensure_owner(acting, owner)?;

    let product = store.insert_product(Product {
        id: ProductId::new(0),
        name: new.name,
        reference: new.reference,
        desired_quantity: new.desired_quantity,
        budget_id: budget.id,
    });
    tracing::debug!(product_id = %product.id, budget_id = %budget.id, "product created");
    Ok(product)
}

/// Products of one budget; the budget itself must be owned by the caller.
pub fn list_for_budget(
    store: &dyn Store,
    acting: &User,
    budget_id: BudgetId,
) -> DomainResult<Vec<Product>> {
    let (_, owner) = ownership::budget_chain(store, budget_id)?;
    ownership::ensure_owner(acting, owner)?;
    Ok(store.products_for_budget(budget_id))
}

pub fn get(store: &dyn Store, acting: &User, id: ProductId) -> DomainResult<Product> {
    let (product, owner) = ownership::product_chain(store, id)?;
    ownership::ensure_owner(acting, owner)?;
    Ok(product)
}

pub fn update(
    store: &dyn Store,
    acting: &User,
    id: ProductId,
    patch: ProductPatch,
) -> DomainResult<Product> {
    let (mut product, owner) = ownership::product_chain(store, id)?;
    ownership::ensure_owner(acting, owner)?;

    // `patch.budget_id` is ignored: re-parenting a product would move it
    // across an ownership boundary, so the current parent is kept.
    patch.apply(&mut product);

    Ok(store.update_product(product)?)
}

pub fn delete(store: &dyn Store, acting: &User, id: ProductId) -> DomainResult<()> {
    let (_, owner) = ownership::product_chain(store, id)?;
    ownership::ensure_owner(acting, owner)?;
    store.delete_product(id)?;
    tracing::debug!(product_id = %id, "product deleted");
    Ok(())
}
