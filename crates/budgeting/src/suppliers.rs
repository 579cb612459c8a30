//! Supplier resource manager.

use quotehub_core::{
    DomainError, DomainResult, NewSupplier, Supplier, SupplierId, SupplierPatch, User,
};
use quotehub_store::Store;

use crate::ownership;

pub fn create(store: &dyn Store, acting: &User, new: NewSupplier) -> DomainResult<Supplier> {
    if new.name.trim().is_empty() {
        return Err(DomainError::validation("name must not be empty"));
    }

    let supplier = store.insert_supplier(Supplier {
        id: SupplierId::new(0),
        name: new.name,
        email: new.email,
        contact: new.contact,
        token: new.token,
        user_id: acting.id,
    });
    tracing::debug!(supplier_id = %supplier.id, "supplier registered");
    Ok(supplier)
}

pub fn list(store: &dyn Store, acting: &User) -> Vec<Supplier> {
    store.suppliers_for_user(acting.id)
}

pub fn get(store: &dyn Store, acting: &User, id: SupplierId) -> DomainResult<Supplier> {
    let (supplier, owner) = ownership::supplier_chain(store, id)?;
    ownership::ensure_owner(acting, owner)?;
    Ok(supplier)
}

pub fn update(
    store: &dyn Store,
    acting: &User,
    id: SupplierId,
    patch: SupplierPatch,
) -> DomainResult<Supplier> {
    let (mut supplier, owner) = ownership::supplier_chain(store, id)?;
    ownership::ensure_owner(acting, owner)?;

    patch.apply(&mut supplier);
    supplier.user_id = acting.id;

    Ok(store.update_supplier(supplier)?)
}

pub fn delete(store: &dyn Store, acting: &User, id: SupplierId) -> DomainResult<()> {
    let (_, owner) = ownership::supplier_chain(store, id)?;
    ownership::ensure_owner(acting, owner)?;
    store.delete_supplier(id)?;
    tracing::debug!(supplier_id = %id, "supplier deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{fixture_supplier, fixture_user, store};

    #[test]
    fn supplier_is_scoped_to_its_owner() {
        let store = store();
        let alice = fixture_user(&store, "alice@x.com", false);
        let bob = fixture_user(&store, "bob@x.com", false);
        let supplier = fixture_supplier(&store, &alice);

        assert!(get(&store, &alice, supplier.id).is_ok());
        assert_eq!(
            get(&store, &bob, supplier.id).unwrap_err(),
            DomainError::NotFound
        );
        assert_eq!(list(&store, &alice).len(), 1);
        assert!(list(&store, &bob).is_empty());
    }

    #[test]
    fn update_applies_only_non_empty_fields() {
        let store = store();
        let alice = fixture_user(&store, "alice@x.com", false);
        let supplier = fixture_supplier(&store, &alice);

        let patch = SupplierPatch {
            contact: Some("+55 11 5555-0000".to_string()),
            email: Some(String::new()),
            ..Default::default()
        };
        let updated = update(&store, &alice, supplier.id, patch).unwrap();
        assert_eq!(updated.contact, "+55 11 5555-0000");
        assert_eq!(updated.email, supplier.email);
        assert_eq!(updated.name, supplier.name);
    }

    #[test]
    fn delete_by_non_owner_is_not_found() {
        let store = store();
        let alice = fixture_user(&store, "alice@x.com", false);
        let bob = fixture_user(&store, "bob@x.com", false);
        let supplier = fixture_supplier(&store, &alice);

        assert_eq!(
            delete(&store, &bob, supplier.id).unwrap_err(),
            DomainError::NotFound
        );
        delete(&store, &alice, supplier.id).unwrap();
        assert_eq!(
            get(&store, &alice, supplier.id).unwrap_err(),
            DomainError::NotFound
        );
    }
}
