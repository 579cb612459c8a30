//! Quote-response resource manager.
//!
//! A response is co-owned: it belongs to a product (the chain that decides
//! visibility) and references the supplier that submitted it. Creating one
//! requires owning both the product's budget and the supplier.

use quotehub_core::{
    DomainError, DomainResult, NewQuoteResponse, ProductId, QuoteResponse, QuoteResponsePatch,
    ResponseId, User,
};
use quotehub_store::Store;

use crate::ownership;

pub fn create(store: &dyn Store, acting: &User, new: NewQuoteResponse) -> DomainResult<QuoteResponse> {
    let (product, owner) = ownership::product_chain(store, new.product_id)?;
    ownership::ensure_owner(acting, owner)?;

    let (supplier, supplier_owner) = ownership::supplier_chain(store, new.supplier_id)?;
    ownership::ensure_owner(acting, supplier_owner)?;

    let response = store.insert_response(QuoteResponse {
        id: ResponseId::new(0),
        value: new.value,
        supplier_id: supplier.id,
        product_id: product.id,
    });
    tracing::debug!(response_id = %response.id, product_id = %product.id, "response recorded");
    Ok(response)
}

/// Responses for one product; the product's chain must resolve to the caller.
pub fn list_for_product(
    store: &dyn Store,
    acting: &User,
    product_id: ProductId,
) -> DomainResult<Vec<QuoteResponse>> {
    let (_, owner) = ownership::product_chain(store, product_id)?;
    ownership::ensure_owner(acting, owner)?;
    Ok(store.responses_for_product(product_id))
}

pub fn get(store: &dyn Store, acting: &User, id: ResponseId) -> DomainResult<QuoteResponse> {
    let (response, owner) = ownership::response_chain(store, id)?;
    ownership::ensure_owner(acting, owner)?;
    Ok(response)
}

pub fn update(
    store: &dyn Store,
    acting: &User,
    id: ResponseId,
    patch: QuoteResponsePatch,
) -> DomainResult<QuoteResponse> {
    let (mut response, owner) = ownership::response_chain(store, id)?;
    ownership::ensure_owner(acting, owner)?;

    let new_supplier = patch.supplier_id;
    patch.apply(&mut response);

    // The supplier reference may move, but only to a supplier the acting
    // user owns; `patch.product_id` (re-parenting) is ignored.
    if let Some(supplier_id) = new_supplier {
        let (supplier, supplier_owner) = ownership::supplier_chain(store, supplier_id)?;
        ownership::ensure_owner(acting, supplier_owner)?;
        response.supplier_id = supplier.id;
    }

    Ok(store.update_response(response)?)
}

pub fn delete(store: &dyn Store, acting: &User, id: ResponseId) -> DomainResult<()> {
    let (_, owner) = ownership::response_chain(store, id)?;
    ownership::ensure_owner(acting, owner)?;
    store.delete_response(id)?;
    tracing::debug!(response_id = %id, "response deleted");
    Ok(())
}
