//! Callback signatures
//!
//! A [`Callback`] is a plain function pointer with zero to five owned
//! arguments. The arguments travel as a tuple so that one generic table and
//! one dispatch loop serve every arity.

/// A function pointer that can be stored in a slot table and invoked
///
/// Implemented for `fn()`, `fn(A)`, `fn(A, B)` up to `fn(A, B, C, D, E)`.
/// Handles are compared by identity when unregistering, and copied out of
/// the table for dispatch.
///
/// Arguments must be owned types: `fn(&str)` is higher-ranked
/// (`for<'a> fn(&'a str)`) and does not implement this trait.
pub trait Callback: Copy + PartialEq {
    /// Argument tuple: `()` for `fn()`, `(A,)` for `fn(A)`, and so on
    type Args;

    /// Call the function with the arguments spread out of the tuple
    fn call(self, args: Self::Args);
}

macro_rules! impl_callback {
    ($($ty:ident $arg:ident),*) => {
        impl<$($ty),*> Callback for fn($($ty),*) {
            type Args = ($($ty,)*);

            #[inline]
            fn call(self, ($($arg,)*): Self::Args) {
                (self)($($arg),*)
            }
        }
    };
}

impl_callback!();
impl_callback!(A a);
impl_callback!(A a, B b);
impl_callback!(A a, B b, C c);
impl_callback!(A a, B b, C c, D d);
impl_callback!(A a, B b, C c, D d, E e);
