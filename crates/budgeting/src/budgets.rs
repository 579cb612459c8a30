//! Budget resource manager.

use quotehub_core::{Budget, BudgetId, BudgetPatch, DomainError, DomainResult, NewBudget, User};
use quotehub_store::Store;

use crate::ownership;

pub fn create(store: &dyn Store, acting: &User, new: NewBudget) -> DomainResult<Budget> {
    if new.title.trim().is_empty() {
        return Err(DomainError::validation("title must not be empty"));
    }

    // Owner comes from the acting user, never from the payload.
    let budget = store.insert_budget(Budget {
        id: BudgetId::new(0),
        title: new.title,
        starts_on: new.starts_on,
        ends_on: new.ends_on,
        state: new.state,
        token: new.token,
        user_id: acting.id,
    });
    tracing::debug!(budget_id = %budget.id, "budget created");
    Ok(budget)
}

pub fn list(store: &dyn Store, acting: &User) -> Vec<Budget> {
    store.budgets_for_user(acting.id)
}

pub fn get(store: &dyn Store, acting: &User, id: BudgetId) -> DomainResult<Budget> {
    let (budget, owner) = ownership::budget_chain(store, id)?;
    ownership::ensure_owner(acting, owner)?;
    Ok(budget)
}

pub fn update(
    store: &dyn Store,
    acting: &User,
    id: BudgetId,
    patch: BudgetPatch,
) -> DomainResult<Budget> {
    let (mut budget, owner) = ownership::budget_chain(store, id)?;
    ownership::ensure_owner(acting, owner)?;

    patch.apply(&mut budget);
    // Re-parenting is never honored; the owner is reaffirmed.
    budget.user_id = acting.id;

    Ok(store.update_budget(budget)?)
}

pub fn delete(store: &dyn Store, acting: &User, id: BudgetId) -> DomainResult<()> {
    let (_, owner) = ownership::budget_chain(store, id)?;
    ownership::ensure_owner(acting, owner)?;
    store.delete_budget(id)?;
    tracing::debug!(budget_id = %id, "budget deleted");
    Ok(())
}
