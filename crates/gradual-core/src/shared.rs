use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Read/write capability a tween uses to reach the variable it animates.
///
/// The engine never owns the variable itself. Whatever sits behind the
/// binding must stay meaningful for as long as the tween is registered; the
/// tween writes through it on every effective tick.
pub trait ValueBinding<T> {
    fn get(&self) -> T;
    fn set(&self, value: T);

    /// Whether the variable behind the binding can still be read and written.
    ///
    /// A binding that loses its target reports `false`; the tween then retires
    /// without writing.
    fn is_bound(&self) -> bool {
        true
    }
}

/// Single-threaded shared owner for a host variable.
///
/// This type stores `T` inside an `Rc<RefCell<...>>`, allowing cheap cloning of the
/// handle while the host keeps reading the value the engine writes.
pub struct Shared<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Run `f` with an immutable reference to the stored value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let borrow = self.inner.borrow();
        f(&*borrow)
    }

    /// Run `f` with a mutable reference to the stored value.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut borrow = self.inner.borrow_mut();
        f(&mut *borrow)
    }

    /// Replace the stored value entirely.
    pub fn replace(&self, new_value: T) {
        *self.inner.borrow_mut() = new_value;
    }

    /// Whether both handles point at the same variable.
    pub fn ptr_eq(&self, other: &Shared<T>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Copy> Shared<T> {
    pub fn get(&self) -> T {
        *self.inner.borrow()
    }

    pub fn set(&self, value: T) {
        self.replace(value);
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&*self.inner.borrow()).finish()
    }
}

impl<T: Copy> ValueBinding<T> for Shared<T> {
    fn get(&self) -> T {
        Shared::get(self)
    }

    fn set(&self, value: T) {
        Shared::set(self, value);
    }
}

/// Binding built from a read callback and a write callback.
///
/// Useful when the animated value lives somewhere the host cannot hand out a
/// [`Shared`] for, e.g. a field inside a larger struct.
pub struct FnBinding<R, W> {
    read: R,
    write: W,
}

impl<R, W> FnBinding<R, W> {
    pub fn new(read: R, write: W) -> Self {
        Self { read, write }
    }
}

impl<T, R, W> ValueBinding<T> for FnBinding<R, W>
where
    R: Fn() -> T,
    W: Fn(T),
{
    fn get(&self) -> T {
        (self.read)()
    }

    fn set(&self, value: T) {
        (self.write)(value)
    }
}
