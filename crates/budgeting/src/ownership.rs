//! Ownership chain resolution.
//!
//! For each entity kind this walks the foreign-key hops up to the owning
//! user, loading the owner at every hop (no denormalized owner fields). The
//! verdict helpers conflate "absent" and "not owned" into `NotFound`; callers
//! surface exactly that, never a distinct permission-denied signal. Admin
//! status is consulted only for User records, never for the chain checks.

use quotehub_core::{
    Budget, BudgetId, DomainError, DomainResult, Product, ProductId, QuoteResponse, ResponseId,
    Supplier, SupplierId, User, UserId,
};
use quotehub_store::Store;

/// Load a budget together with its owner.
pub fn budget_chain(store: &dyn Store, id: BudgetId) -> DomainResult<(Budget, UserId)> {
    let budget = store.budget(id).ok_or(DomainError::NotFound)?;
    let owner = budget.user_id;
    Ok((budget, owner))
}

/// Load a product and walk product → budget → owner.
///
/// A dangling `budget_id` should not occur under referential integrity but is
/// handled defensively as `NotFound`.
pub fn product_chain(store: &dyn Store, id: ProductId) -> DomainResult<(Product, UserId)> {
    let product = store.product(id).ok_or(DomainError::NotFound)?;
    let budget = store.budget(product.budget_id).ok_or(DomainError::NotFound)?;
    Ok((product, budget.user_id))
}

/// Load a response and walk response → product → budget → owner.
pub fn response_chain(store: &dyn Store, id: ResponseId) -> DomainResult<(QuoteResponse, UserId)> {
    let response = store.response(id).ok_or(DomainError::NotFound)?;
    let (_, owner) = product_chain(store, response.product_id)?;
    Ok((response, owner))
}

/// Load a supplier together with its owner.
pub fn supplier_chain(store: &dyn Store, id: SupplierId) -> DomainResult<(Supplier, UserId)> {
    let supplier = store.supplier(id).ok_or(DomainError::NotFound)?;
    let owner = supplier.user_id;
    Ok((supplier, owner))
}

/// Verdict: is `acting` the owner resolved by a chain walk?
pub fn owns(acting: &User, owner: UserId) -> bool {
    acting.id == owner
}

/// `NotFound` unless `acting` owns the resource.
pub fn ensure_owner(acting: &User, owner: UserId) -> DomainResult<()> {
    if owns(acting, owner) {
        Ok(())
    } else {
        Err(DomainError::NotFound)
    }
}

/// User-record access: the target themself, or any admin.
pub fn ensure_user_access(acting: &User, target: UserId) -> DomainResult<()> {
    if acting.id == target || acting.is_admin {
        Ok(())
    } else {
        Err(DomainError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{fixture_product, fixture_user, store};

    #[test]
    fn product_chain_resolves_through_the_budget() {
        let store = store();
        let alice = fixture_user(&store, "alice@x.com", false);
        let (_, product) = fixture_product(&store, &alice);

        let (loaded, owner) = product_chain(&store, product.id).unwrap();
        assert_eq!(loaded.id, product.id);
        assert_eq!(owner, alice.id);
    }

    #[test]
    fn missing_ancestor_reads_as_not_found() {
        let store = store();
        let alice = fixture_user(&store, "alice@x.com", false);
        let (budget, product) = fixture_product(&store, &alice);

        // Simulate a broken FK: the budget disappears underneath the product.
        // Cascade removes the product too, so the chain hits NotFound at the
        // first hop already.
        quotehub_store::Store::delete_budget(&store, budget.id).unwrap();
        assert_eq!(
            product_chain(&store, product.id).unwrap_err(),
            DomainError::NotFound
        );
    }

    #[test]
    fn admin_does_not_bypass_chain_ownership() {
        let store = store();
        let alice = fixture_user(&store, "alice@x.com", false);
        let admin = fixture_user(&store, "root@x.com", true);
        let (budget, _) = fixture_product(&store, &alice);

        let (_, owner) = budget_chain(&store, budget.id).unwrap();
        assert_eq!(ensure_owner(&admin, owner).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn admin_may_access_any_user_record() {
        let store = store();
        let alice = fixture_user(&store, "alice@x.com", false);
        let admin = fixture_user(&store, "root@x.com", true);

        assert!(ensure_user_access(&admin, alice.id).is_ok());
        assert!(ensure_user_access(&alice, alice.id).is_ok());
        assert_eq!(
            ensure_user_access(&alice, admin.id).unwrap_err(),
            DomainError::NotFound
        );
    }
}
