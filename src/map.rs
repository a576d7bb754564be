use crate::any_value::AnyValue;
use crate::error::TypeKitError;
use crate::token::{TypeKey, TypeToken};
use std::any::Any;
use std::collections::HashMap;
use tracing::{trace, warn};

/// A heterogeneous container keyed by type tokens
///
/// `TypeMap` holds at most one value per type. Every value is stored next to
/// the key of the type it was built from and is only handed back through a
/// token for that same type, so a lookup can never produce a value of the
/// wrong type.
///
/// The map is an ordinary mutable value. It is not thread-safe for
/// concurrent mutation; wrap it in a `Mutex` or similar to share it.
///
/// # Examples
///
/// ```
/// use sovran_typekit::{TypeMap, TypeToken, TypeKitError};
///
/// let mut favorites = TypeMap::new();
/// favorites.put(TypeToken::<String>::of(), "Java".to_string())?;
/// favorites.put(TypeToken::<i64>::of(), 42)?;
///
/// assert_eq!(favorites.get(TypeToken::<String>::of()).map(String::as_str), Some("Java"));
/// assert_eq!(favorites.get(TypeToken::<i64>::of()), Some(&42));
/// assert_eq!(favorites.get(TypeToken::<bool>::of()), None);
/// # Ok::<(), TypeKitError>(())
/// ```
#[derive(Debug, Default)]
pub struct TypeMap {
    items: HashMap<TypeKey, AnyValue>,
}

impl TypeMap {
    /// Creates a new, empty TypeMap
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Creates an empty TypeMap with room for `capacity` types
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashMap::with_capacity(capacity),
        }
    }

    /// Stores a value under its token, replacing any previous value
    ///
    /// Returns the displaced value, if there was one.
    ///
    /// # Errors
    ///
    /// Goes through the same check as [`put_erased`](Self::put_erased), so it
    /// returns `TypeKitError::TypeMismatch` if the check ever disagrees with
    /// the signature. With the token and value tied to the same `T` it can't.
    pub fn put<T>(&mut self, token: TypeToken<T>, value: T) -> Result<Option<T>, TypeKitError>
    where
        T: Any + Send + Sync,
    {
        let previous = self.insert_checked(token.erase(), AnyValue::new(value))?;
        Ok(previous.and_then(|old| old.downcast::<T>().ok()))
    }

    /// Stores an erased value under `key`
    ///
    /// This entry point has no static link between the key and the value,
    /// so the value's recorded type is compared with the key before anything
    /// is inserted.
    ///
    /// # Errors
    ///
    /// Returns `TypeKitError::TypeMismatch` if `value` was not built from
    /// the type `key` denotes. The map is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_typekit::{AnyValue, TypeKey, TypeKitError, TypeMap};
    ///
    /// let mut map = TypeMap::new();
    /// map.put_erased(TypeKey::of::<u8>(), AnyValue::new(1u8))?;
    ///
    /// let err = map.put_erased(TypeKey::of::<u8>(), AnyValue::new("one"));
    /// assert!(matches!(err, Err(TypeKitError::TypeMismatch { .. })));
    /// # Ok::<(), TypeKitError>(())
    /// ```
    pub fn put_erased(&mut self, key: TypeKey, value: AnyValue) -> Result<(), TypeKitError> {
        self.insert_checked(key, value).map(|_| ())
    }

    fn insert_checked(
        &mut self,
        key: TypeKey,
        value: AnyValue,
    ) -> Result<Option<AnyValue>, TypeKitError> {
        if value.key() != key {
            warn!(
                expected = key.type_name(),
                found = value.key().type_name(),
                "typemap: rejected value of the wrong type"
            );
            return Err(TypeKitError::TypeMismatch {
                expected: key.type_name(),
                found: value.key().type_name(),
            });
        }

        trace!(type_name = key.type_name(), "typemap: put");
        Ok(self.items.insert(key, value))
    }

    /// Retrieves a reference to the value stored for `T`
    ///
    /// Returns `None` if nothing has been stored for `T`.
    pub fn get<T: Any>(&self, token: TypeToken<T>) -> Option<&T> {
        trace!(type_name = token.type_name(), "typemap: get");
        self.items
            .get(&token.erase())
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// Retrieves a clone of the value stored for `T`
    pub fn get_cloned<T: Any + Clone>(&self, token: TypeToken<T>) -> Option<T> {
        self.get(token).cloned()
    }

    /// Retrieves a mutable reference to the value stored for `T`
    pub fn get_mut<T: Any>(&mut self, token: TypeToken<T>) -> Option<&mut T> {
        trace!(type_name = token.type_name(), "typemap: get_mut");
        self.items
            .get_mut(&token.erase())
            .and_then(|value| value.downcast_mut::<T>())
    }

    /// Gets a value by executing a closure with read access
    ///
    /// # Errors
    ///
    /// Returns `TypeKitError::NotFound` if nothing is stored for `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_typekit::{TypeMap, TypeToken, TypeKitError};
    ///
    /// let numbers = TypeToken::<Vec<i32>>::of();
    /// let mut map = TypeMap::new();
    /// map.put(numbers, vec![1, 2, 3])?;
    ///
    /// let sum = map.with(numbers, |v| v.iter().sum::<i32>())?;
    /// assert_eq!(sum, 6);
    /// # Ok::<(), TypeKitError>(())
    /// ```
    pub fn with<T: Any, F, R>(&self, token: TypeToken<T>, f: F) -> Result<R, TypeKitError>
    where
        F: FnOnce(&T) -> R,
    {
        let value = self
            .get(token)
            .ok_or(TypeKitError::NotFound(token.type_name()))?;
        Ok(f(value))
    }

    /// Gets a value by executing a closure with write access
    ///
    /// # Errors
    ///
    /// Returns `TypeKitError::NotFound` if nothing is stored for `T`.
    pub fn with_mut<T: Any, F, R>(&mut self, token: TypeToken<T>, f: F) -> Result<R, TypeKitError>
    where
        F: FnOnce(&mut T) -> R,
    {
        let value = self
            .get_mut(token)
            .ok_or(TypeKitError::NotFound(token.type_name()))?;
        Ok(f(value))
    }

    /// Removes and returns the value stored for `T`
    pub fn remove<T: Any>(&mut self, token: TypeToken<T>) -> Option<T> {
        trace!(type_name = token.type_name(), "typemap: remove");
        self.items
            .remove(&token.erase())
            .and_then(|value| value.downcast::<T>().ok())
    }

    /// Returns true if a value is stored for `T`
    pub fn contains<T: Any>(&self, token: TypeToken<T>) -> bool {
        self.items.contains_key(&token.erase())
    }

    /// Returns true if a value is stored under the erased key
    pub fn contains_key(&self, key: TypeKey) -> bool {
        self.items.contains_key(&key)
    }

    /// Returns the keys of every stored type, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = TypeKey> + '_ {
        self.items.keys().copied()
    }

    /// Returns the number of stored types
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every stored value
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
