/// The kind of value an option collects.
///
/// Values are always stored as the raw `&str` they arrived as.
/// The kind decides how they are converted on the way into a bound target, and how the option is rendered in the help listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Free text: `--name=<string>`.
    String,
    /// A base 10 `i32`: `--name=<int>`.
    Integer,
    /// A switch that takes no value: `--name`.
    Flag,
}

impl ValueKind {
    pub(crate) fn annotation(&self) -> &'static str {
        match self {
            ValueKind::String => "=<string>",
            ValueKind::Integer => "=<int>",
            ValueKind::Flag => "",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
