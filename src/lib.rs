mod error;
mod into_optional;
mod render;
mod util;

use std::fmt::{self, Display, Formatter};

use crate::render::Rendered;
use crate::util::short_type_name;

pub use crate::error::{OResult, OptionalError};
pub use crate::into_optional::IntoOptional;
pub use crate::render::Render;

/// A value of type `T` that may be absent.
///
/// Immutable once built: every accessor either borrows or consumes the
/// instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    value: Option<T>,
}

/// Shorthand for [`Optional::none`].
pub const fn none<T>() -> Optional<T> {
    Optional::none()
}

/// Shorthand for [`Optional::of`].
pub const fn of<T>(value: T) -> Optional<T> {
    Optional::of(value)
}

pub fn optional<T>(value: impl IntoOptional<T>) -> Optional<T> {
    value.into_optional()
}

impl<T> Optional<T> {
    pub const fn none() -> Self {
        Self { value: None }
    }

    pub const fn of(value: T) -> Self {
        Self { value: Some(value) }
    }

    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub const fn is_none(&self) -> bool {
        self.value.is_none()
    }

    pub const fn as_ref(&self) -> Optional<&T> {
        match &self.value {
            Some(v) => Optional::of(v),
            None => Optional::none(),
        }
    }

    /// Returns the value and `true`, or `T::default()` and `false` when
    /// absent. Check the flag before trusting the value.
    pub fn get(self) -> (T, bool)
    where
        T: Default,
    {
        match self.value {
            Some(v) => (v, true),
            None => (T::default(), false),
        }
    }

    pub fn try_get(self) -> OResult<T> {
        self.value.ok_or(OptionalError::Empty)
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with `optional value is empty` when absent. Use [`get`],
    /// [`get_or_else`] or [`try_get`] when absence is expected.
    ///
    /// [`get`]: Optional::get
    /// [`get_or_else`]: Optional::get_or_else
    /// [`try_get`]: Optional::try_get
    #[track_caller]
    pub fn must_get(self) -> T {
        match self.try_get() {
            Ok(v) => v,
            Err(e) => {
                log::error!("must_get on None({})", short_type_name::<T>());
                panic!("{}", e)
            }
        }
    }

    pub fn get_or_else(self, fallback: T) -> T {
        self.value.unwrap_or(fallback)
    }

    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// `Some(<type>)[<value>]` when present, `None(<type>)[]` when absent.
    pub fn describe(&self) -> String
    where
        T: Render,
    {
        self.to_string()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.value
    }
}

impl<T: Render> Display for Optional<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = short_type_name::<T>();
        match &self.value {
            Some(v) => write!(f, "Some({})[{}]", name, Rendered(v)),
            None => write!(f, "None({})[]", name),
        }
    }
}

impl<T: Render> Render for Optional<T> {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_value() {
        let o = of(10);
        assert_eq!((10, true), o.get());
        assert_eq!(10, o.get_or_else(777));
        assert_eq!(10, o.must_get());
        assert!(o.is_present());
        assert!(!o.is_none());
    }

    #[test]
    fn present_zero_value() {
        let o = of(0);
        assert_eq!((0, true), o.get());
        assert_eq!(0, o.get_or_else(777));
        assert_eq!(0, o.must_get());
    }

    #[test]
    fn absent_value() {
        let o = none::<i32>();
        assert_eq!((0, false), o.get());
        assert_eq!(777, o.get_or_else(777));
        assert!(o.is_none());
        assert!(!o.is_present());
    }

    #[test]
    #[should_panic(expected = "optional value is empty")]
    fn must_get_on_none_panics() {
        none::<i32>().must_get();
    }

    #[test]
    fn try_get() -> OResult<()> {
        assert_eq!(10, of(10).try_get()?);
        assert_eq!(Err(OptionalError::Empty), none::<i32>().try_get());
        assert_eq!(
            "optional value is empty",
            none::<u8>().try_get().unwrap_err().to_string()
        );
        Ok(())
    }

    #[test]
    fn get_does_not_alter_value() {
        let v = vec!["a".to_string(), "b".to_string()];
        let (got, ok) = of(v.clone()).get();
        assert!(ok);
        assert_eq!(v, got);

        let (got, ok) = none::<Vec<String>>().get();
        assert!(!ok);
        assert!(got.is_empty());
    }

    #[test]
    fn as_ref_borrows() {
        let o = of("owned".to_string());
        assert_eq!("owned", o.as_ref().must_get());
        assert_eq!("owned", o.must_get());
        assert!(none::<String>().as_ref().is_none());
    }

    #[test]
    fn describe_int() {
        assert_eq!("Some(i32)[5]", of(5).describe());
        assert_eq!("None(i32)[]", none::<i32>().describe());
    }

    #[test]
    fn describe_string() {
        assert_eq!("Some(String)[case1]", of("case1".to_string()).describe());
        assert_eq!("None(String)[]", none::<String>().describe());
        assert_eq!("Some(&str)[case1]", of("case1").describe());
    }

    #[test]
    fn describe_custom_rendering() {
        #[derive(Debug)]
        struct TextBuffer(String);

        impl Render for TextBuffer {
            fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, "buffer:{}", self.0)
            }
        }

        assert_eq!(
            "Some(TextBuffer)[buffer:abc]",
            of(TextBuffer("abc".into())).describe()
        );
        assert_eq!("None(TextBuffer)[]", none::<TextBuffer>().describe());
    }

    #[test]
    fn describe_debug_fallback() {
        #[allow(dead_code)]
        #[derive(Debug)]
        struct Pair(u8, u8);

        impl Render for Pair {}

        assert_eq!("Some(Pair)[Pair(1, 2)]", of(Pair(1, 2)).describe());
        assert_eq!("Some(Vec<u8>)[[1, 2]]", of(vec![1u8, 2]).describe());
    }

    #[test]
    fn describe_nested() {
        assert_eq!("Some(Optional<i32>)[Some(i32)[5]]", of(of(5)).describe());
        assert_eq!(
            "Some(Optional<i32>)[None(i32)[]]",
            of(none::<i32>()).describe()
        );
        assert_eq!("None(Optional<i32>)[]", none::<Optional<i32>>().describe());
    }

    #[test]
    fn describe_std_fallbacks() {
        assert_eq!("Some(&[u8])[[1, 2]]", of(&[1u8, 2][..]).describe());
        assert_eq!("Some((u8, u8))[(1, 2)]", of((1u8, 2u8)).describe());
    }

    #[test]
    fn display_matches_describe() {
        let o = of(3u64);
        assert_eq!(o.describe(), format!("{}", o));
    }

    #[test]
    fn conversions() {
        assert_eq!(of(3), optional(Some(3)));
        assert_eq!(none::<i32>(), optional(None::<i32>));
        assert_eq!(of(7), optional(7));
        assert_eq!(of(7), optional(of(7)));

        assert_eq!(Some(3), of(3).into_option());
        assert_eq!(None, Option::<i32>::from(none::<i32>()));
        assert_eq!(of('c'), Optional::from(Some('c')));
        assert_eq!(none::<u8>(), Optional::default());
    }
}
