use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::{self, Debug, Display, Formatter};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

/// Textual rendering of a value inside [`Optional::describe`](crate::Optional::describe).
///
/// The provided method writes the `Debug` output. Types with a custom
/// human-readable form override `render`; `impl Render for MyType {}` opts a
/// type into the `Debug` fallback.
///
/// `Debug` is a supertrait, so a type with a custom rendering still has to
/// implement (or derive) `Debug` before it can be described.
pub trait Render: Debug {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

macro_rules! render_with_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Render for $t {
                fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    Display::fmt(self, f)
                }
            }
        )*
    };
}

render_with_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl Render for Cow<'_, str> {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Rc<T> {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Arc<T> {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl Render for Path {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.display(), f)
    }
}

impl Render for PathBuf {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.as_path().render(f)
    }
}

impl<T: Debug> Render for [T] {}
impl<T: Debug> Render for Vec<T> {}
impl<T: Debug> Render for VecDeque<T> {}
impl<T: Debug> Render for Option<T> {}
impl<T: Debug, const N: usize> Render for [T; N] {}
impl<K: Debug, V: Debug, S> Render for HashMap<K, V, S> {}
impl<K: Debug, V: Debug> Render for BTreeMap<K, V> {}
impl<T: Debug, S> Render for HashSet<T, S> {}
impl<T: Debug> Render for BTreeSet<T> {}
impl Render for std::time::Duration {}
impl Render for () {}

macro_rules! render_tuple_with_debug {
    ($(($($t:ident),+)),* $(,)?) => {
        $(
            impl<$($t: Debug),+> Render for ($($t,)+) {}
        )*
    };
}

render_tuple_with_debug!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
    (A, B, C, D, E, F, G, H, I),
    (A, B, C, D, E, F, G, H, I, J),
    (A, B, C, D, E, F, G, H, I, J, K),
    (A, B, C, D, E, F, G, H, I, J, K, L),
);

/// Adapts a `Render` value to `Display` so it can go through `write!`.
pub(crate) struct Rendered<'a, T: ?Sized>(pub(crate) &'a T);

impl<T: Render + ?Sized> Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}
