//! Optional value helpers

/// The contained value, or `fallback` when `None`
#[inline]
pub fn value_or_default<T>(value: Option<T>, fallback: T) -> T {
    value.unwrap_or(fallback)
}

/// The contained value, or `T::default()` when `None`
#[inline]
pub fn value_or_type_default<T: Default>(value: Option<T>) -> T {
    value.unwrap_or_default()
}

/// `true` for `None` and for `Some` of an empty collection
#[inline]
pub fn is_none_or_empty<C, T>(value: &Option<C>) -> bool
where
    C: AsRef<[T]>,
{
    value.as_ref().map_or(true, |c| c.as_ref().is_empty())
}
