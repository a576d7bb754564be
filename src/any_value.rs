use crate::token::TypeKey;
use std::any::Any;

/// A type-erased value that remembers which type it was built from
///
/// This is what crosses the unchecked boundary of [`TypeMap::put_erased`]:
/// the caller names a key, and the map compares it with the key recorded
/// here before inserting.
///
/// [`TypeMap::put_erased`]: crate::TypeMap::put_erased
#[derive(Debug)]
pub struct AnyValue {
    key: TypeKey,
    value: Box<dyn Any + Send + Sync>,
}

impl AnyValue {
    /// Erases a value of any type that implements Any, Send, and Sync
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            key: TypeKey::of::<T>(),
            value: Box::new(value),
        }
    }

    /// The key of the type this value was built from
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// Check if the contained value is of type T
    pub fn is_type<T: Any>(&self) -> bool {
        self.key.is::<T>()
    }

    pub(crate) fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    pub(crate) fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut::<T>()
    }

    /// Recovers the value if it is of type T, otherwise hands it back
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        if !self.is_type::<T>() {
            return Err(self);
        }
        let key = self.key;
        self.value
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|value| Self { key, value })
    }
}
