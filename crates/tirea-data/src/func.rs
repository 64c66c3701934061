//! Function composition.
//!
//! [`pipe`] applies left to right, [`compose`] right to left. The [`pipe!`]
//! and [`compose!`] macros take any number of functions. A first function
//! that needs several arguments takes them as one tuple.
//!
//! ```
//! use tirea_data::{compose, pipe};
//!
//! let add = |(a, b): (i32, i32)| a + b;
//! let double = |x: i32| x * 2;
//! let describe = |x: i32| format!("got {x}");
//!
//! assert_eq!(pipe!(add, double, describe)((1, 2)), "got 6");
//! assert_eq!(compose!(describe, double, add)((1, 2)), "got 6");
//! ```

pub use crate::obj::switch;

/// `pipe(f, g)(x) == g(f(x))`.
pub fn pipe<A, B, C, F, G>(first: F, then: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |args| then(first(args))
}

/// `compose(f, g)(x) == f(g(x))`.
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |args| outer(inner(args))
}

/// Left-to-right composition of one or more functions.
#[macro_export]
macro_rules! pipe {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::func::pipe($f, $crate::pipe!($($rest),+))
    };
}

/// Right-to-left composition of one or more functions.
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::func::compose($f, $crate::compose!($($rest),+))
    };
}
