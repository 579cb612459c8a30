//! User resource manager, signup/login and identity resolution.
//!
//! Login failures are always the generic `Unauthenticated`: callers can never
//! tell an unknown email from a wrong password. Admin status matters only
//! here: listing all users is admin-only, and get/update/delete accept the
//! user themself or an admin.

use chrono::{DateTime, Utc};
use serde::Serialize;

use quotehub_auth::{AccessClaims, Hs256Tokens, hash_password, verify_password};
use quotehub_core::{DomainError, DomainResult, Signup, User, UserId, UserPatch};
use quotehub_store::Store;

use crate::ownership;

/// A freshly issued access token, ready for the login response body.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: &'static str,
}

pub fn signup(store: &dyn Store, new: Signup) -> DomainResult<User> {
    let email = new.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(DomainError::validation("invalid email format"));
    }
    if new.password.is_empty() {
        return Err(DomainError::validation("password must not be empty"));
    }

    let password_hash =
        hash_password(&new.password).map_err(|e| DomainError::internal(e.to_string()))?;

    let user = store.insert_user(User {
        id: UserId::new(0),
        name: new.name.trim().to_string(),
        email,
        password_hash,
        is_admin: new.is_admin,
    })?;
    tracing::info!(user_id = %user.id, "user signed up");
    Ok(user)
}

/// Check credentials. `None` for unknown email *and* for a wrong password.
pub fn authenticate(store: &dyn Store, email: &str, password: &str) -> Option<User> {
    let user = store.user_by_email(&email.trim().to_lowercase())?;
    verify_password(password, &user.password_hash).then_some(user)
}

pub fn login(
    store: &dyn Store,
    tokens: &Hs256Tokens,
    email: &str,
    password: &str,
    now: DateTime<Utc>,
) -> DomainResult<IssuedToken> {
    let user = authenticate(store, email, password).ok_or(DomainError::Unauthenticated)?;
    let access_token = tokens
        .issue(user.id, now)
        .map_err(|e| DomainError::internal(e.to_string()))?;
    tracing::debug!(user_id = %user.id, "access token issued");
    Ok(IssuedToken {
        access_token,
        token_type: "bearer",
    })
}

/// Resolve validated claims to a live user record.
///
/// A stale token whose subject was deleted is indistinguishable from an
/// invalid token.
pub fn current_user(store: &dyn Store, claims: &AccessClaims) -> DomainResult<User> {
    store.user(claims.sub).ok_or(DomainError::Unauthenticated)
}

/// Admin-only. This is the one place `Forbidden` exists: the operation
/// itself is not secret, only its result is restricted.
pub fn list(store: &dyn Store, acting: &User) -> DomainResult<Vec<User>> {
    if !acting.is_admin {
        return Err(DomainError::Forbidden);
    }
    Ok(store.users())
}

pub fn get(store: &dyn Store, acting: &User, id: UserId) -> DomainResult<User> {
    let user = store.user(id).ok_or(DomainError::NotFound)?;
    ownership::ensure_user_access(acting, id)?;
    Ok(user)
}

pub fn update(store: &dyn Store, acting: &User, id: UserId, patch: UserPatch) -> DomainResult<User> {
    let mut user = store.user(id).ok_or(DomainError::NotFound)?;
    ownership::ensure_user_access(acting, id)?;

    if let Some(name) = patch.name {
        if !name.is_empty() {
            user.name = name;
        }
    }
    if let Some(email) = patch.email {
        if !email.is_empty() {
            user.email = email.trim().to_lowercase();
        }
    }
    if let Some(password) = patch.password {
        if !password.is_empty() {
            user.password_hash =
                hash_password(&password).map_err(|e| DomainError::internal(e.to_string()))?;
        }
    }
    // Only an admin may grant the flag; self-service updates cannot escalate.
    if acting.is_admin && patch.is_admin == Some(true) {
        user.is_admin = true;
    }

    Ok(store.update_user(user)?)
}

pub fn delete(store: &dyn Store, acting: &User, id: UserId) -> DomainResult<()> {
    store.user(id).ok_or(DomainError::NotFound)?;
    ownership::ensure_user_access(acting, id)?;
    store.delete_user(id)?;
    tracing::info!(user_id = %id, "user deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{fixture_product, fixture_supplier, fixture_user, store};
    use crate::{budgets, products, responses, suppliers};
    use chrono::Duration;
    use quotehub_core::NewQuoteResponse;

    fn signup_payload(email: &str) -> Signup {
        Signup {
            name: "Alice".to_string(),
            email: email.to_string(),
            password: "hunter2".to_string(),
            is_admin: false,
        }
    }

    #[test]
    fn signup_hashes_the_password() {
        let store = store();
        let user = signup(&store, signup_payload("a@x.com")).unwrap();
        assert_ne!(user.password_hash, "hunter2");
        assert!(verify_password("hunter2", &user.password_hash));
    }

    #[test]
    fn duplicate_email_signup_is_a_conflict_without_a_row() {
        let store = store();
        signup(&store, signup_payload("a@x.com")).unwrap();
        assert!(matches!(
            signup(&store, signup_payload("a@x.com")).unwrap_err(),
            DomainError::Conflict(_)
        ));
        assert_eq!(store.users().len(), 1);
    }

    #[test]
    fn signup_rejects_malformed_email_before_touching_the_store() {
        let store = store();
        assert!(matches!(
            signup(&store, signup_payload("not-an-email")).unwrap_err(),
            DomainError::Validation(_)
        ));
        assert!(store.users().is_empty());
    }

    #[test]
    fn login_round_trip_and_generic_rejection() {
        let store = store();
        let tokens = Hs256Tokens::new(b"test-secret", Duration::minutes(10));
        let user = signup(&store, signup_payload("a@x.com")).unwrap();
        let now = Utc::now();

        let issued = login(&store, &tokens, "a@x.com", "hunter2", now).unwrap();
        assert_eq!(issued.token_type, "bearer");

        let claims =
            quotehub_auth::TokenValidator::validate(&tokens, &issued.access_token, now).unwrap();
        assert_eq!(current_user(&store, &claims).unwrap().id, user.id);

        // Wrong password and unknown email fail identically.
        assert_eq!(
            login(&store, &tokens, "a@x.com", "wrong", now).unwrap_err(),
            DomainError::Unauthenticated
        );
        assert_eq!(
            login(&store, &tokens, "ghost@x.com", "hunter2", now).unwrap_err(),
            DomainError::Unauthenticated
        );
    }

    #[test]
    fn stale_token_for_a_deleted_account_is_unauthenticated() {
        let store = store();
        let admin = fixture_user(&store, "root@x.com", true);
        let user = fixture_user(&store, "a@x.com", false);
        let claims = AccessClaims {
            sub: user.id,
            issued_at: Utc::now(),
            expires_at: Utc::now() + Duration::minutes(10),
        };

        delete(&store, &admin, user.id).unwrap();
        assert_eq!(
            current_user(&store, &claims).unwrap_err(),
            DomainError::Unauthenticated
        );
    }

    #[test]
    fn listing_is_admin_only_and_forbidden_is_distinct() {
        let store = store();
        let admin = fixture_user(&store, "root@x.com", true);
        let alice = fixture_user(&store, "a@x.com", false);

        assert_eq!(list(&store, &admin).unwrap().len(), 2);
        assert_eq!(list(&store, &alice).unwrap_err(), DomainError::Forbidden);
    }

    #[test]
    fn get_is_self_or_admin() {
        let store = store();
        let admin = fixture_user(&store, "root@x.com", true);
        let alice = fixture_user(&store, "a@x.com", false);
        let bob = fixture_user(&store, "b@x.com", false);

        assert!(get(&store, &alice, alice.id).is_ok());
        assert!(get(&store, &admin, alice.id).is_ok());
        assert_eq!(get(&store, &bob, alice.id).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn self_update_cannot_grant_admin() {
        let store = store();
        let alice = fixture_user(&store, "a@x.com", false);
        let patch = UserPatch {
            is_admin: Some(true),
            name: Some("Alice B.".to_string()),
            ..Default::default()
        };
        let updated = update(&store, &alice, alice.id, patch).unwrap();
        assert!(!updated.is_admin);
        assert_eq!(updated.name, "Alice B.");
    }

    #[test]
    fn admin_update_can_grant_admin_and_rehash_password() {
        let store = store();
        let admin = fixture_user(&store, "root@x.com", true);
        let alice = fixture_user(&store, "a@x.com", false);
        let patch = UserPatch {
            is_admin: Some(true),
            password: Some("new-secret".to_string()),
            ..Default::default()
        };
        let updated = update(&store, &admin, alice.id, patch).unwrap();
        assert!(updated.is_admin);
        assert!(verify_password("new-secret", &updated.password_hash));
    }

    #[test]
    fn email_update_collision_is_a_conflict() {
        let store = store();
        fixture_user(&store, "a@x.com", false);
        let bob = fixture_user(&store, "b@x.com", false);
        let patch = UserPatch {
            email: Some("a@x.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            update(&store, &bob, bob.id, patch).unwrap_err(),
            DomainError::Conflict(_)
        ));
    }

    #[test]
    fn deleting_a_user_cascades_to_everything_they_own() {
        let store = store();
        let alice = fixture_user(&store, "a@x.com", false);
        let observer = fixture_user(&store, "root@x.com", true);
        let (budget, product) = fixture_product(&store, &alice);
        let supplier = fixture_supplier(&store, &alice);
        let response = responses::create(
            &store,
            &alice,
            NewQuoteResponse {
                value: 42.5,
                supplier_id: supplier.id,
                product_id: product.id,
            },
        )
        .unwrap();

        delete(&store, &alice, alice.id).unwrap();

        // Even an admin observer finds nothing left behind.
        assert!(store.budget(budget.id).is_none());
        assert!(store.product(product.id).is_none());
        assert!(store.supplier(supplier.id).is_none());
        assert!(store.response(response.id).is_none());
        assert_eq!(
            get(&store, &observer, alice.id).unwrap_err(),
            DomainError::NotFound
        );

        // And the domain operations agree, for any surviving caller.
        assert_eq!(
            budgets::get(&store, &observer, budget.id).unwrap_err(),
            DomainError::NotFound
        );
        assert_eq!(
            products::get(&store, &observer, product.id).unwrap_err(),
            DomainError::NotFound
        );
        assert_eq!(
            suppliers::get(&store, &observer, supplier.id).unwrap_err(),
            DomainError::NotFound
        );
        assert_eq!(
            responses::get(&store, &observer, response.id).unwrap_err(),
            DomainError::NotFound
        );
    }
}
