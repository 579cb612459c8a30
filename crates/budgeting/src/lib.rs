//! `quotehub-budgeting` — the authorization-aware resource access layer.
//!
//! One module per entity kind, each exposing the uniform
//! create/list/get/update/delete operations, plus [`ownership`], the chain
//! resolver every read and mutation runs through. Each authorization decision
//! re-loads the owning entity at every hop; a missing entity anywhere in the
//! chain reads as [`quotehub_core::DomainError::NotFound`], identical to
//! "not owned", so resource existence never leaks across accounts.

pub mod budgets;
pub mod ownership;
pub mod products;
pub mod responses;
pub mod suppliers;
pub mod users;

#[cfg(test)]
pub(crate) mod testutil;
