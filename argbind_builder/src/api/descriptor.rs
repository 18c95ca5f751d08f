use crate::constant::*;
use crate::model::ValueKind;

/// The names and description of one option.
///
/// The declaration methods of `ArgParser` take anything that converts into a descriptor:
/// * `(char, &str, &str)`: short name, long name, description.
/// * `(&str, &str)`: long name, description.
/// * `(char, &str)`: short name, long name.
/// * `&str`: long name.
///
/// A missing description is filled with `"no description"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionDescriptor {
    short: Option<char>,
    long: String,
    description: String,
}

impl OptionDescriptor {
    /// Create an option descriptor.
    pub fn new(short: Option<char>, long: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            short,
            long: long.into(),
            description: description.into(),
        }
    }

    /// The single character name, used as `-s`.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// The long name, used as `--long`.
    pub fn long(&self) -> &str {
        &self.long
    }

    /// The human readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether `candidate` names this option.
    ///
    /// That is the case when the long name equals `candidate`, or when the short name equals the first character of `candidate`.
    /// The empty candidate never matches.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::OptionDescriptor;
    ///
    /// let descriptor = OptionDescriptor::from(('p', "param1"));
    /// assert!(descriptor.matches("param1"));
    /// assert!(descriptor.matches("p"));
    /// assert!(descriptor.matches("pqr"));
    /// assert!(descriptor.matches("param"));
    /// assert!(!descriptor.matches("qaram"));
    /// assert!(!descriptor.matches(""));
    /// ```
    pub fn matches(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }

        (!self.long.is_empty() && self.long == candidate)
            || matches!(self.short, Some(short) if candidate.starts_with(short))
    }

    /// Render the single help line for this option.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::{OptionDescriptor, ValueKind};
    ///
    /// let descriptor = OptionDescriptor::from(('n', "number", "How many."));
    /// assert_eq!(
    ///     descriptor.render(ValueKind::Integer, true, 1, false, "5"),
    ///     "-n, --number=<int>,  How many. [repeated, min args = 1, default = 5]"
    /// );
    /// ```
    pub fn render(
        &self,
        kind: ValueKind,
        multi_value: bool,
        min_args: usize,
        positional: bool,
        default_value: &str,
    ) -> String {
        let mut line = match self.short {
            Some(short) => format!("-{short},"),
            None => "   ".to_string(),
        };

        if self.long.is_empty() {
            line.push_str("   ");
        } else {
            line.push_str(" --");
            line.push_str(&self.long);
        }

        line.push_str(kind.annotation());
        line.push_str(",  ");
        line.push_str(&self.description);

        let mut notes = Vec::default();

        if multi_value {
            notes.push(format!("repeated, min args = {min_args}"));
        }

        if positional {
            notes.push("positional".to_string());
        }

        if !default_value.is_empty() {
            let shown = match kind {
                ValueKind::Flag if default_value == FLAG_TRUE => "true",
                ValueKind::Flag => "false",
                ValueKind::String | ValueKind::Integer => default_value,
            };
            notes.push(format!("default = {shown}"));
        }

        if !notes.is_empty() {
            line.push_str(&format!(" [{}]", notes.join(", ")));
        }

        line
    }
}

impl From<(char, &str, &str)> for OptionDescriptor {
    fn from((short, long, description): (char, &str, &str)) -> Self {
        OptionDescriptor::new(Some(short), long, description)
    }
}

impl From<(&str, &str)> for OptionDescriptor {
    fn from((long, description): (&str, &str)) -> Self {
        OptionDescriptor::new(None, long, description)
    }
}

impl From<(char, &str)> for OptionDescriptor {
    fn from((short, long): (char, &str)) -> Self {
        OptionDescriptor::new(Some(short), long, NO_DESCRIPTION)
    }
}

impl From<&str> for OptionDescriptor {
    fn from(long: &str) -> Self {
        OptionDescriptor::new(None, long, NO_DESCRIPTION)
    }
}
