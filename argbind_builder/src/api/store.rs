use thiserror::Error;

use crate::api::binding::*;
use crate::constant::*;
use crate::model::ValueKind;

/// The only hard failure: a token that does not convert into the type of its target.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {type_name}.")]
pub struct InvalidConversion {
    /// The raw token.
    pub token: String,
    /// The type the token was meant for.
    pub type_name: &'static str,
}

pub(crate) fn convert_int(token: &str) -> Result<i32, InvalidConversion> {
    token.parse::<i32>().map_err(|_| InvalidConversion {
        token: token.to_string(),
        type_name: std::any::type_name::<i32>(),
    })
}

/// The values collected for one declared option.
///
/// Obtained from the `ArgParser::add_*` declarations, and configured by chaining.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::ArgParser;
///
/// let mut numbers: Vec<i32> = Vec::default();
/// let mut parser = ArgParser::new("program");
/// parser
///     .add_int_argument(('n', "number", "Numbers to add up."))
///     .multi_value(2)
///     .store_values(&mut numbers);
///
/// assert!(parser.parse_tokens(&["program", "-n=1", "--number=2"]).unwrap());
/// drop(parser);
/// assert_eq!(numbers, vec![1, 2]);
/// ```
pub struct ValueStore<'a> {
    kind: ValueKind,
    values: Vec<String>,
    scalar: Option<ScalarTarget<'a>>,
    collection: Option<CollectionTarget<'a>>,
    min_args: usize,
    multi_value: bool,
    positional: bool,
    default_value: String,
}

impl<'a> std::fmt::Debug for ValueStore<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let multi = if self.multi_value {
            format!(", multi({})", self.min_args)
        } else {
            "".to_string()
        };
        let positional = if self.positional { ", positional" } else { "" };

        write!(
            f,
            "ValueStore[{kind}, {values:?}{multi}{positional}]",
            kind = self.kind,
            values = self.values,
        )
    }
}

impl<'a> ValueStore<'a> {
    pub(crate) fn new(kind: ValueKind) -> Self {
        let values = match kind {
            ValueKind::Flag => vec![FLAG_FALSE.to_string()],
            ValueKind::String | ValueKind::Integer => Vec::default(),
        };

        Self {
            kind,
            values,
            scalar: None,
            collection: None,
            min_args: 0,
            multi_value: false,
            positional: false,
            default_value: String::default(),
        }
    }

    /// Set the default value, which also becomes the first collected value.
    ///
    /// Flag defaults are read as booleans: `true` or `1` sets the flag, anything else clears it.
    pub fn default(&mut self, value: impl ToString) -> &mut Self {
        let mut value = value.to_string();

        if self.kind == ValueKind::Flag {
            let sentinel = if value == FLAG_TRUE || value == "true" {
                FLAG_TRUE
            } else {
                FLAG_FALSE
            };
            value = sentinel.to_string();
            self.values.clear();
        }

        self.put(value.clone());
        self.default_value = value;
        self
    }

    /// Collect every occurrence instead of keeping the last one.
    /// The option is only satisfied once at least `min_args` values are collected.
    pub fn multi_value(&mut self, min_args: usize) -> &mut Self {
        self.multi_value = true;
        self.min_args = min_args;
        self
    }

    /// Write each value through to `variable` (for single-valued options).
    /// The element type must line up with the option kind, otherwise the variable is never written.
    pub fn store_value(&mut self, variable: impl Into<ScalarTarget<'a>>) -> &mut Self {
        self.scalar.replace(variable.into());
        self
    }

    /// Append each value to `variable` (for multi-valued options).
    /// The element type must line up with the option kind, otherwise the variable is never written.
    pub fn store_values(&mut self, variable: impl Into<CollectionTarget<'a>>) -> &mut Self {
        self.collection.replace(variable.into());
        self
    }

    /// Route tokens without a leading `-` to this option.
    /// Only the first positional option of a parser ever receives values.
    pub fn positional(&mut self) -> &mut Self {
        self.positional = true;
        self
    }

    pub(crate) fn add(&mut self, token: &str) -> Result<(), InvalidConversion> {
        if self.kind == ValueKind::Flag {
            match self.values.first_mut() {
                Some(sentinel) => *sentinel = FLAG_TRUE.to_string(),
                None => self.values.push(FLAG_TRUE.to_string()),
            }

            if let Some(scalar) = self.scalar.as_mut() {
                scalar.assign(&Captured::Bool(true));
            }

            if self.multi_value {
                if let Some(collection) = self.collection.as_mut() {
                    collection.push(&Captured::Bool(true));
                }
            }

            return Ok(());
        }

        // Convert before touching any state, so a failure leaves everything as it was.
        let bound = if self.multi_value {
            self.collection.is_some()
        } else {
            self.scalar.is_some()
        };
        let captured = if bound {
            Some(self.capture(token)?)
        } else {
            None
        };

        self.put(token.to_string());

        if let Some(captured) = captured {
            if self.multi_value {
                if let Some(collection) = self.collection.as_mut() {
                    collection.push(&captured);
                }
            } else if let Some(scalar) = self.scalar.as_mut() {
                scalar.assign(&captured);
            }
        }

        Ok(())
    }

    fn put(&mut self, value: String) {
        match self.values.last_mut() {
            Some(last) if !self.multi_value => *last = value,
            _ => self.values.push(value),
        }
    }

    fn capture(&self, token: &str) -> Result<Captured, InvalidConversion> {
        match self.kind {
            ValueKind::Integer => convert_int(token).map(Captured::Int),
            ValueKind::String => Ok(Captured::Text(token.to_string())),
            ValueKind::Flag => Ok(Captured::Bool(true)),
        }
    }

    /// The last collected value, or `""` if there is none.
    pub fn get(&self) -> &str {
        self.values.last().map(String::as_str).unwrap_or_default()
    }

    /// The value at `index`, or `""` if `index` is out of bounds.
    pub fn get_at(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or_default()
    }

    /// Whether the minimum number of values has been collected.
    /// Vacuously true for single-valued options.
    pub fn is_min_arg(&self) -> bool {
        self.values.len() >= self.min_args
    }

    /// Whether there is neither a collected value nor a default.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.default_value.is_empty()
    }

    /// The kind of value this option collects.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Every collected value, defaults included, in insertion order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The minimum number of values for a multi-valued option.
    pub fn min_args(&self) -> usize {
        self.min_args
    }

    /// Whether every occurrence is collected.
    pub fn is_multi_value(&self) -> bool {
        self.multi_value
    }

    /// Whether tokens without a leading `-` are routed here.
    pub fn is_positional(&self) -> bool {
        self.positional
    }

    /// The default, or `""` if none was set.
    pub fn default_value(&self) -> &str {
        &self.default_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::Alphanumeric;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn random_values(count: usize) -> Vec<String> {
        (0..count)
            .map(|i| {
                let suffix: String = thread_rng()
                    .sample_iter(&Alphanumeric)
                    .take(8)
                    .map(char::from)
                    .collect();
                // The index prefix keeps the values distinct.
                format!("{i}-{suffix}")
            })
            .collect()
    }

    #[test]
    fn new_flag_seeded() {
        let store = ValueStore::new(ValueKind::Flag);
        assert_eq!(store.values(), &[FLAG_FALSE.to_string()]);
        assert_eq!(store.get(), FLAG_FALSE);
        assert!(!store.is_empty());
    }

    #[rstest]
    #[case(ValueKind::String)]
    #[case(ValueKind::Integer)]
    fn new_empty(#[case] kind: ValueKind) {
        let store = ValueStore::new(kind);
        assert!(store.values().is_empty());
        assert_eq!(store.get(), "");
        assert_eq!(store.get_at(0), "");
        assert!(store.is_empty());
        assert!(store.is_min_arg());
    }

    #[rstest]
    #[case(ValueKind::String, "abc")]
    #[case(ValueKind::String, "")]
    #[case(ValueKind::Integer, "12")]
    fn default_unmodified(#[case] kind: ValueKind, #[case] value: &str) {
        let mut store = ValueStore::new(kind);
        store.default(value);
        assert_eq!(store.get(), value);
        assert_eq!(store.get_at(0), value);
        assert_eq!(store.default_value(), value);
    }

    #[test]
    fn default_number() {
        let mut store = ValueStore::new(ValueKind::Integer);
        store.default(-3);
        assert_eq!(store.get(), "-3");
        assert!(!store.is_empty());
    }

    #[rstest]
    #[case("true", FLAG_TRUE)]
    #[case("1", FLAG_TRUE)]
    #[case("false", FLAG_FALSE)]
    #[case("0", FLAG_FALSE)]
    #[case("anything", FLAG_FALSE)]
    fn default_flag(#[case] value: &str, #[case] expected: &str) {
        let mut store = ValueStore::new(ValueKind::Flag);
        store.default(value);
        assert_eq!(store.values(), &[expected.to_string()]);
        assert_eq!(store.default_value(), expected);
    }

    #[test]
    fn default_does_not_write_through() {
        let mut variable = String::from("untouched");
        let mut store = ValueStore::new(ValueKind::String);
        store.store_value(&mut variable).default("abc");
        drop(store);
        assert_eq!(variable, "untouched");
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(5)]
    fn flag_idempotent(#[case] repeat: usize) {
        let mut variable = false;
        let mut store = ValueStore::new(ValueKind::Flag);
        store.store_value(&mut variable);

        for _ in 0..repeat {
            store.add("").unwrap();
            assert_eq!(store.values(), &[FLAG_TRUE.to_string()]);
        }

        drop(store);
        assert!(variable);
    }

    #[test]
    fn flag_ignores_token() {
        let mut store = ValueStore::new(ValueKind::Flag);
        store.add("not-a-bool").unwrap();
        assert_eq!(store.get(), FLAG_TRUE);
    }

    #[test]
    fn flag_multi_counts() {
        let mut scalar = false;
        let mut occurrences: Vec<bool> = Vec::default();
        let mut store = ValueStore::new(ValueKind::Flag);
        store
            .multi_value(0)
            .store_value(&mut scalar)
            .store_values(&mut occurrences);
        store.add("").unwrap();
        store.add("").unwrap();
        store.add("").unwrap();
        assert_eq!(store.values(), &[FLAG_TRUE.to_string()]);
        drop(store);
        assert!(scalar);
        assert_eq!(occurrences, vec![true, true, true]);
    }

    #[test]
    fn single_overwrites() {
        let mut variable = String::default();
        let mut store = ValueStore::new(ValueKind::String);
        store.default("x").store_value(&mut variable);
        store.add("a").unwrap();
        store.add("b").unwrap();
        assert_eq!(store.values(), &["b".to_string()]);
        assert_eq!(store.get(), "b");
        drop(store);
        assert_eq!(variable, "b");
    }

    #[test]
    fn single_int_write_through() {
        let mut variable: i32 = 0;
        let mut store = ValueStore::new(ValueKind::Integer);
        store.store_value(&mut variable);
        store.add("42").unwrap();
        drop(store);
        assert_eq!(variable, 42);
    }

    #[test]
    fn single_int_invalid() {
        let mut variable: i32 = 3;
        let mut store = ValueStore::new(ValueKind::Integer);
        store.store_value(&mut variable).default(3);

        let error = store.add("abc").unwrap_err();

        assert_eq!(
            error,
            InvalidConversion {
                token: "abc".to_string(),
                type_name: "i32",
            }
        );
        assert_eq!(store.get(), "3");
        drop(store);
        assert_eq!(variable, 3);
    }

    #[test]
    fn single_int_unbound_keeps_text() {
        let mut store = ValueStore::new(ValueKind::Integer);
        store.add("abc").unwrap();
        assert_eq!(store.get(), "abc");
    }

    #[test]
    fn single_ignores_collection() {
        let mut variable: Vec<String> = Vec::default();
        let mut store = ValueStore::new(ValueKind::String);
        store.store_values(&mut variable);
        store.add("a").unwrap();
        drop(store);
        assert!(variable.is_empty());
    }

    #[test]
    fn multi_ordered() {
        for _ in 0..20 {
            // Setup
            let count = thread_rng().gen_range(1..10);
            let expected = random_values(count);
            let mut variable: Vec<String> = Vec::default();
            let mut store = ValueStore::new(ValueKind::String);
            store.multi_value(0).store_values(&mut variable);

            // Execute
            for value in &expected {
                store.add(value).unwrap();
            }

            // Verify
            for (i, value) in expected.iter().enumerate() {
                assert_eq!(store.get_at(i), value);
            }
            assert_eq!(store.get_at(count), "");
            assert_eq!(store.get(), expected[count - 1]);
            drop(store);
            assert_eq!(variable, expected);
        }
    }

    #[test]
    fn multi_after_default() {
        let mut store = ValueStore::new(ValueKind::Integer);
        store.multi_value(0).default(1);
        store.add("2").unwrap();
        assert_eq!(store.values(), &["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn multi_int_write_through() {
        let mut variable: Vec<i32> = Vec::default();
        let mut store = ValueStore::new(ValueKind::Integer);
        store.multi_value(0).store_values(&mut variable);
        store.add("1").unwrap();
        store.add("-7").unwrap();
        assert_matches!(store.add("x"), Err(InvalidConversion { .. }));
        assert_eq!(store.values(), &["1".to_string(), "-7".to_string()]);
        drop(store);
        assert_eq!(variable, vec![1, -7]);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    fn min_arg_flips(#[case] min_args: usize) {
        let mut store = ValueStore::new(ValueKind::String);
        store.multi_value(min_args);

        for i in 0..min_args {
            assert!(!store.is_min_arg());
            store.add(&i.to_string()).unwrap();
        }

        assert!(store.is_min_arg());
        assert_eq!(store.min_args(), min_args);
        assert!(store.is_multi_value());
    }

    #[test]
    fn empty_with_default_only() {
        let mut store = ValueStore::new(ValueKind::String);
        store.default("d");
        assert!(!store.is_empty());
    }

    #[test]
    fn positional() {
        let mut store = ValueStore::new(ValueKind::String);
        assert!(!store.is_positional());
        store.positional();
        assert!(store.is_positional());
    }

    #[test]
    fn debug() {
        let mut store = ValueStore::new(ValueKind::Integer);
        store.multi_value(2).positional().default(4);
        assert_eq!(
            format!("{store:?}"),
            "ValueStore[Integer, [\"4\"], multi(2), positional]"
        );
    }
}
