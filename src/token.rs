use std::any::{type_name, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A runtime handle to the concrete type `T`
///
/// Tokens compare by the `TypeId` they denote, so two tokens built in
/// different places for the same `T` are equal and interchangeable as keys.
///
/// # Examples
///
/// ```
/// use sovran_typekit::TypeToken;
///
/// const NAME: TypeToken<String> = TypeToken::new();
///
/// assert_eq!(NAME, TypeToken::<String>::of());
/// let name = NAME;
/// assert_eq!(name.erase(), TypeToken::<String>::of().erase());
/// assert_ne!(name.erase(), TypeToken::<i64>::of().erase());
/// ```
pub struct TypeToken<T: ?Sized + 'static> {
    key: TypeKey,
    // Send + Sync whatever T is, and fine for unsized T
    _marker: PhantomData<fn() -> *const T>,
}

impl<T: ?Sized + 'static> TypeToken<T> {
    /// Creates the token for `T`; usable in `const` items
    pub const fn new() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            _marker: PhantomData,
        }
    }

    /// Creates the token for `T`; reads better at call sites than `new`
    pub const fn of() -> Self {
        Self::new()
    }

    /// The `TypeId` of the denoted type
    pub fn id(&self) -> TypeId {
        self.key.id()
    }

    /// The diagnostic name of the denoted type
    pub fn type_name(&self) -> &'static str {
        self.key.type_name()
    }

    /// Drops the type parameter, keeping only the identity
    pub const fn erase(&self) -> TypeKey {
        self.key
    }
}

impl<T: ?Sized + 'static> Clone for TypeToken<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized + 'static> Copy for TypeToken<T> {}

impl<T: ?Sized + 'static> Default for TypeToken<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + 'static> PartialEq for TypeToken<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T: ?Sized + 'static> Eq for TypeToken<T> {}

impl<T: ?Sized + 'static> Hash for TypeToken<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<T: ?Sized + 'static> fmt::Debug for TypeToken<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeToken<{}>", self.type_name())
    }
}

impl<T: ?Sized + 'static> fmt::Display for TypeToken<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A type identity with the type parameter erased
///
/// This is the key form `TypeMap` stores entries under, and what the
/// unchecked entry point accepts. Equality and hashing use the `TypeId` only.
#[derive(Clone, Copy)]
pub struct TypeKey {
    // fn pointers rather than values so `of` can be const
    id: fn() -> TypeId,
    name: fn() -> &'static str,
}

impl TypeKey {
    /// The key for `T`; usable in `const` items
    pub const fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>,
            name: type_name::<T>,
        }
    }

    /// The `TypeId` this key denotes
    pub fn id(&self) -> TypeId {
        (self.id)()
    }

    /// The diagnostic name of the denoted type, as `std::any::type_name`
    /// reports it
    pub fn type_name(&self) -> &'static str {
        (self.name)()
    }

    /// Returns true if this key denotes `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id() == TypeId::of::<T>()
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl PartialOrd for TypeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id().cmp(&other.id())
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.type_name())
    }
}

impl<T: ?Sized + 'static> From<TypeToken<T>> for TypeKey {
    fn from(token: TypeToken<T>) -> Self {
        token.erase()
    }
}
