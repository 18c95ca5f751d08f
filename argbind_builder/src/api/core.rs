use std::env;

use crate::api::{convert_int, InvalidConversion, OptionDescriptor, ValueStore};
use crate::constant::*;
use crate::model::ValueKind;
use crate::parser::{ConsoleInterface, Diagnostic, Parser, Printer, UserInterface};

/// The command line parser.
///
/// Options are declared up front with the `add_*` methods, the argument vector is then fed through one of the `parse*` methods, and values are read back with the `get_*` methods.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::ArgParser;
///
/// let mut parser = ArgParser::new("My Parser");
/// parser.add_string_argument(('p', "param1"));
///
/// assert!(parser.parse_tokens(&["app", "--param1=value1"]).unwrap());
/// assert_eq!(parser.get_string_value("param1", None), "value1");
/// ```
pub struct ArgParser<'a> {
    parser: Parser<'a>,
    printer: Printer,
    help_requested: bool,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> std::fmt::Debug for ArgParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgParser")
            .field("name", &self.printer.program())
            .field("parser", &self.parser)
            .finish()
    }
}

impl<'a> ArgParser<'a> {
    /// Create a command line parser, which prints to the console.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_interface(name, Box::new(ConsoleInterface::default()))
    }

    pub(crate) fn with_interface(
        name: impl Into<String>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            parser: Parser::empty(),
            printer: Printer::new(name, ""),
            help_requested: false,
            user_interface,
        }
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Create a command line parser which discards everything it would print.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::ArgParser;
    ///
    /// // Function under test.
    /// pub fn declare(parser: &mut ArgParser) {
    ///     parser.add_int_argument(('n', "number")).default(1);
    /// }
    ///
    /// let mut parser = ArgParser::test_dummy();
    /// declare(&mut parser);
    /// parser.parse_tokens(&["app", "-n=2"]).unwrap();
    /// assert_eq!(parser.get_int_value("number", None).unwrap(), 2);
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn test_dummy() -> Self {
        Self::with_interface(
            "test-dummy",
            Box::new(crate::parser::SilentInterface::default()),
        )
    }

    /// The parser name, as shown on the first line of the help listing.
    pub fn name(&self) -> &str {
        self.printer.program()
    }

    /// Document the program description shown in the help listing.
    /// If repeated, only the final description applies.
    pub fn about(&mut self, description: impl Into<String>) -> &mut Self {
        self.printer.set_about(description);
        self
    }

    fn add_argument(
        &mut self,
        descriptor: impl Into<OptionDescriptor>,
        kind: ValueKind,
    ) -> &mut ValueStore<'a> {
        self.parser.declare(descriptor.into(), kind)
    }

    /// Declare an integer option: `--name=<int>`.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::ArgParser;
    ///
    /// let mut count: i32 = 0;
    /// let mut parser = ArgParser::new("program");
    /// parser
    ///     .add_int_argument(('c', "count", "How many times."))
    ///     .default(1)
    ///     .store_value(&mut count);
    ///
    /// parser.parse_tokens(&["program", "-c=3"]).unwrap();
    /// drop(parser);
    /// assert_eq!(count, 3);
    /// ```
    pub fn add_int_argument(
        &mut self,
        descriptor: impl Into<OptionDescriptor>,
    ) -> &mut ValueStore<'a> {
        self.add_argument(descriptor, ValueKind::Integer)
    }

    /// Declare a string option: `--name=<string>`.
    pub fn add_string_argument(
        &mut self,
        descriptor: impl Into<OptionDescriptor>,
    ) -> &mut ValueStore<'a> {
        self.add_argument(descriptor, ValueKind::String)
    }

    /// Declare a flag: `--name`, `-n`, or as part of a cluster such as `-abn`.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::ArgParser;
    ///
    /// let mut verbose = false;
    /// let mut parser = ArgParser::new("program");
    /// parser.add_flag(('v', "verbose")).store_value(&mut verbose);
    /// parser.add_flag(('q', "quiet"));
    ///
    /// parser.parse_tokens(&["program", "-vq"]).unwrap();
    /// assert!(parser.get_flag("quiet", None));
    /// drop(parser);
    /// assert!(verbose);
    /// ```
    pub fn add_flag(&mut self, descriptor: impl Into<OptionDescriptor>) -> &mut ValueStore<'a> {
        self.add_argument(descriptor, ValueKind::Flag)
    }

    /// Configure the help option and the program description.
    /// The help option is not a declared option: it only triggers the help listing.
    pub fn add_help(&mut self, short: char, long: impl Into<String>, description: impl Into<String>) {
        self.parser
            .set_help(OptionDescriptor::new(Some(short), long, HELP_MESSAGE));
        self.printer.set_about(description);
    }

    /// Run the parser against the input tokens.
    /// Token `0` is the program name, and is skipped.
    ///
    /// Returns `Ok(true)` when any of these hold:
    /// * No options are declared.
    /// * Help was requested by one of the tokens.
    /// * At least one option holds a value or default, and every multi-valued option holds its minimum number of values.
    ///
    /// `Ok(false)` therefore does not single out the option at fault; inspect [`ArgParser::empty`] and [`ArgParser::is_min_arg`] for that.
    /// The only error is a token that cannot be converted into a bound integer target; parsing stops at that token.
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<bool, InvalidConversion> {
        self.help_requested = false;
        self.help_requested =
            self.parser
                .consume(tokens, &self.printer, self.user_interface.as_ref())?;

        Ok(!self.parser.has_options()
            || self.help_requested
            || (!self.parser.all_empty() && self.parser.is_min_arg()))
    }

    /// Run the parser against any sequence of tokens, as per [`ArgParser::parse_tokens`].
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::ArgParser;
    ///
    /// let argv = vec!["app".to_string(), "--param1=value1".to_string()];
    /// let mut parser = ArgParser::new("program");
    /// parser.add_string_argument("param1");
    ///
    /// assert!(parser.parse_args(argv).unwrap());
    /// ```
    pub fn parse_args<I, S>(&mut self, args: I) -> Result<bool, InvalidConversion>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let tokens: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        self.parse_tokens(tokens.as_slice())
    }

    /// Run the parser against the process arguments ([`std::env::args`]), as per [`ArgParser::parse_tokens`].
    pub fn parse(&mut self) -> Result<bool, InvalidConversion> {
        self.parse_args(env::args())
    }

    /// Whether the most recent parse encountered the help option.
    pub fn help_requested(&self) -> bool {
        self.help_requested
    }

    /// The help listing.
    pub fn help_description(&self) -> String {
        self.printer.help_description(&self.parser)
    }

    /// Print the one line help summary.
    /// Returns `false` (printing nothing) if no help option is configured.
    pub fn help(&self) -> bool {
        match self.printer.help_summary(&self.parser) {
            Some(summary) => {
                self.user_interface.print(summary);
                true
            }
            None => false,
        }
    }

    /// The value of the option `name`.
    ///
    /// With `index: None` this is the last value, otherwise the value at `index`.
    /// An unknown option or an empty value is reported on the error channel, and yields `""`.
    pub fn get_value(&self, name: &str, index: Option<usize>) -> String {
        match self.parser.store(name) {
            Some(store) => {
                let value = match index {
                    Some(index) => store.get_at(index),
                    None => store.get(),
                };

                if value.is_empty() {
                    self.user_interface
                        .print_diagnostic(Diagnostic::UnsetValue(name.to_string()));
                }

                value.to_string()
            }
            None => {
                self.user_interface
                    .print_diagnostic(Diagnostic::UnknownOption(name.to_string()));
                String::default()
            }
        }
    }

    /// The value of the string option `name`, as per [`ArgParser::get_value`].
    pub fn get_string_value(&self, name: &str, index: Option<usize>) -> String {
        self.get_value(name, index)
    }

    /// The value of the integer option `name`, as per [`ArgParser::get_value`].
    /// Errors when the value is not a base 10 `i32` (including when it is unset).
    pub fn get_int_value(&self, name: &str, index: Option<usize>) -> Result<i32, InvalidConversion> {
        convert_int(&self.get_value(name, index))
    }

    /// Whether the flag `name` is set, as per [`ArgParser::get_value`].
    pub fn get_flag(&self, name: &str, index: Option<usize>) -> bool {
        let value = self.get_value(name, index);
        value == FLAG_TRUE || value == "true"
    }

    /// The position of the first declared option matching `name`.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.parser.find(name)
    }

    /// The position of the first declared option marked positional.
    pub fn find_positional(&self) -> Option<usize> {
        self.parser.find_positional()
    }

    /// The store of the first declared option matching `name`.
    pub fn store(&self, name: &str) -> Option<&ValueStore<'a>> {
        self.parser.store(name)
    }

    /// Whether every multi-valued option holds its minimum number of values.
    pub fn is_min_arg(&self) -> bool {
        self.parser.is_min_arg()
    }

    /// Whether no option holds a value or default.
    /// Vacuously true when nothing is declared.
    pub fn empty(&self) -> bool {
        self.parser.all_empty()
    }
}
