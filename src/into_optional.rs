use crate::Optional;

/// Converts a value, an `Option` or an `Optional` into an `Optional`.
///
/// Accepts:
///   - T (present)
///   - Option<T> (present when `Some`)
///   - Optional<T> (unchanged)
pub trait IntoOptional<T> {
    fn into_optional(self) -> Optional<T>;
}

impl<T> IntoOptional<T> for T {
    fn into_optional(self) -> Optional<T> {
        Optional::of(self)
    }
}

impl<T> IntoOptional<T> for Option<T> {
    fn into_optional(self) -> Optional<T> {
        self.into()
    }
}

impl<T> IntoOptional<T> for Optional<T> {
    fn into_optional(self) -> Optional<T> {
        self
    }
}
