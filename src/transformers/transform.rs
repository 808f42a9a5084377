//! Transform trait.

pub trait Transform<T> {
    /// Takes ownership of `item` and returns its transformed version.
    fn transform_own(&self, item: T) -> T;
}
