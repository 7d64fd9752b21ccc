use super::MissingReference;
use std::sync::Arc;

/// A back-reference to a parent entity that may not have been set yet.
///
/// Entities whose parents are only known after construction hold their references as
/// links; resolving an unset link yields a [`MissingReference`] instead of a fault.
#[derive(Debug)]
pub struct Link<T>(Option<Arc<T>>);

impl<T> Link<T> {
    #[must_use]
    pub const fn unset() -> Self {
        Self(None)
    }

    #[must_use]
    pub const fn to(target: Arc<T>) -> Self {
        Self(Some(target))
    }

    pub fn set(&mut self, target: Arc<T>) {
        self.0 = Some(target);
    }

    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.0.is_some()
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.0.as_deref()
    }

    /// Resolve the link on behalf of `entity`, naming `reference` if it is unset.
    pub fn resolve(&self, entity: &'static str, reference: &'static str) -> Result<&T, MissingReference> {
        self.get().ok_or(MissingReference::new(entity, reference))
    }
}

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        Self(self.0.as_ref().map(Arc::clone))
    }
}

impl<T> Default for Link<T> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T> From<Arc<T>> for Link<T> {
    fn from(target: Arc<T>) -> Self {
        Self::to(target)
    }
}

impl<T: PartialEq> PartialEq for Link<T> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}
