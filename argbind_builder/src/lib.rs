//! Builder module for `argbind`.
//! See [documentation root](https://docs.rs/argbind/latest/argbind/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;

pub use api::*;
pub use model::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
