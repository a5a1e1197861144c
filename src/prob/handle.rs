use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::ptr;
use std::sync::Arc;
use super::*;

/// Shared handle to a distribution with identity semantics: two handles are equal
/// only when they point to the same allocation, even if the distributions they hold
/// have identical parameters. This lets each measurement be used as an independent
/// key of a map (e.g. per-parameter uncertainty budgets) without two separate but
/// parameter-identical measurements colliding. Cloning a handle preserves its identity.
#[derive(Debug)]
pub struct Handle<D> {
    inner : Arc<D>
}

impl<D> Handle<D> {

    pub fn new(d : D) -> Self {
        Self { inner : Arc::new(d) }
    }

    /// Whether both handles refer to the same distribution instance.
    pub fn same(a : &Self, b : &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

}

impl<D> Clone for Handle<D> {

    fn clone(&self) -> Self {
        Self { inner : Arc::clone(&self.inner) }
    }

}

impl<D> PartialEq for Handle<D> {

    fn eq(&self, other : &Self) -> bool {
        Self::same(self, other)
    }

}

impl<D> Eq for Handle<D> { }

impl<D> Hash for Handle<D> {

    fn hash<H : Hasher>(&self, state : &mut H) {
        ptr::hash(Arc::as_ptr(&self.inner), state)
    }

}

impl<D> Deref for Handle<D> {

    type Target = D;

    fn deref(&self) -> &D {
        &self.inner
    }

}

impl<D> AsRef<D> for Handle<D> {

    fn as_ref(&self) -> &D {
        &self.inner
    }

}

impl<D> From<D> for Handle<D> {

    fn from(d : D) -> Self {
        Self::new(d)
    }

}

impl<D> Display for Handle<D>
    where D : Display
{

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.inner, f)
    }

}

impl<D> Distribution for Handle<D>
    where D : Distribution
{

    type Value = D::Value;

    fn central_value(&self) -> &D::Value {
        self.inner.central_value()
    }

    fn sample_with<R>(&self, rng : &mut R) -> D::Value
        where R : Rng + ?Sized
    {
        self.inner.sample_with(rng)
    }

    fn log_prob(&self, x : &D::Value) -> f64 {
        self.inner.log_prob(x)
    }

}
