//! Username → actor identity resolution.

use tender_core::errors::CoreError;
use tender_core::identity::ActorIdentity;

use crate::store::AccessStore;

/// Resolves acting usernames against the employee directory.
///
/// Borrowed from a manager for the duration of one operation; holds no state.
pub struct IdentityResolver<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: AccessStore + ?Sized> IdentityResolver<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Resolve `username` to an identity.
    ///
    /// # Errors
    ///
    /// `CoreError::UnknownUser` when no employee has that username,
    /// `CoreError::Storage` on store faults.
    pub async fn resolve(&self, username: &str) -> Result<ActorIdentity, CoreError> {
        match self.store.resolve_username(username).await? {
            Some(identity) => Ok(identity),
            None => {
                tracing::debug!(username, "username did not resolve to an employee");
                Err(CoreError::UnknownUser {
                    username: username.to_string(),
                })
            }
        }
    }
}
