#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A value converted from its raw token, ready to be written into a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Captured {
    Int(i32),
    Bool(bool),
    Text(String),
}

/// A single-value write-through target.
///
/// Build one implicitly by passing `&mut i32`, `&mut bool` or `&mut String` to [`ValueStore::store_value`](crate::ValueStore::store_value).
#[derive(Debug)]
pub enum ScalarTarget<'a> {
    /// Written by [`ValueKind::Integer`](crate::ValueKind::Integer) options.
    Int(&'a mut i32),
    /// Written by [`ValueKind::Flag`](crate::ValueKind::Flag) options.
    Bool(&'a mut bool),
    /// Written by [`ValueKind::String`](crate::ValueKind::String) options.
    Text(&'a mut String),
}

impl<'a> ScalarTarget<'a> {
    /// Overwrite the target, provided the captured value has the same shape.
    pub(crate) fn assign(&mut self, captured: &Captured) {
        match (self, captured) {
            (ScalarTarget::Int(variable), Captured::Int(value)) => **variable = *value,
            (ScalarTarget::Bool(variable), Captured::Bool(value)) => **variable = *value,
            (ScalarTarget::Text(variable), Captured::Text(value)) => {
                **variable = value.clone();
            }
            (_target, _captured) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Skipping {_target:?}, it cannot hold {_captured:?}.");
                }
            }
        }
    }
}

impl<'a> From<&'a mut i32> for ScalarTarget<'a> {
    fn from(variable: &'a mut i32) -> Self {
        ScalarTarget::Int(variable)
    }
}

impl<'a> From<&'a mut bool> for ScalarTarget<'a> {
    fn from(variable: &'a mut bool) -> Self {
        ScalarTarget::Bool(variable)
    }
}

impl<'a> From<&'a mut String> for ScalarTarget<'a> {
    fn from(variable: &'a mut String) -> Self {
        ScalarTarget::Text(variable)
    }
}

/// A multi-value write-through target.
///
/// Build one implicitly by passing `&mut Vec<i32>`, `&mut Vec<bool>` or `&mut Vec<String>` to [`ValueStore::store_values`](crate::ValueStore::store_values).
#[derive(Debug)]
pub enum CollectionTarget<'a> {
    /// Extended by [`ValueKind::Integer`](crate::ValueKind::Integer) options.
    Ints(&'a mut Vec<i32>),
    /// Extended by [`ValueKind::Flag`](crate::ValueKind::Flag) options, once per occurrence.
    Bools(&'a mut Vec<bool>),
    /// Extended by [`ValueKind::String`](crate::ValueKind::String) options.
    Texts(&'a mut Vec<String>),
}

impl<'a> CollectionTarget<'a> {
    /// Append to the target, provided the captured value has the same shape.
    pub(crate) fn push(&mut self, captured: &Captured) {
        match (self, captured) {
            (CollectionTarget::Ints(variable), Captured::Int(value)) => variable.push(*value),
            (CollectionTarget::Bools(variable), Captured::Bool(value)) => variable.push(*value),
            (CollectionTarget::Texts(variable), Captured::Text(value)) => {
                variable.push(value.clone());
            }
            (_target, _captured) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Skipping {_target:?}, it cannot collect {_captured:?}.");
                }
            }
        }
    }
}

impl<'a> From<&'a mut Vec<i32>> for CollectionTarget<'a> {
    fn from(variable: &'a mut Vec<i32>) -> Self {
        CollectionTarget::Ints(variable)
    }
}

impl<'a> From<&'a mut Vec<bool>> for CollectionTarget<'a> {
    fn from(variable: &'a mut Vec<bool>) -> Self {
        CollectionTarget::Bools(variable)
    }
}

impl<'a> From<&'a mut Vec<String>> for CollectionTarget<'a> {
    fn from(variable: &'a mut Vec<String>) -> Self {
        CollectionTarget::Texts(variable)
    }
}
