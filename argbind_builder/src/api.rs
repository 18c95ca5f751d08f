mod binding;
mod core;
mod descriptor;
mod store;

pub use self::core::*;
pub use binding::{CollectionTarget, ScalarTarget};
pub use descriptor::*;
pub use store::*;
