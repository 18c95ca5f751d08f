use crate::model::ValueKind;
use crate::parser::base::Parser;

pub(crate) struct Printer {
    program: String,
    about: String,
}

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new("", "")
    }

    pub(crate) fn new(program: impl Into<String>, about: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: about.into(),
        }
    }

    pub(crate) fn program(&self) -> &str {
        &self.program
    }

    pub(crate) fn set_about(&mut self, about: impl Into<String>) {
        self.about = about.into();
    }

    /// The full listing: program, about, one line per option, then the help option.
    pub(crate) fn help_description(&self, parser: &Parser) -> String {
        let mut description = format!("{}\n{}\n\n", self.program, self.about);

        for (descriptor, store) in parser.options() {
            description.push_str(&descriptor.render(
                store.kind(),
                store.is_multi_value(),
                store.min_args(),
                store.is_positional(),
                store.default_value(),
            ));
            description.push('\n');
        }

        if let Some(help) = parser.help() {
            description.push('\n');
            description.push_str(&help.render(ValueKind::Flag, false, 0, false, ""));
            description.push('\n');
        }

        description
    }

    /// The one line summary of the help option, if there is one.
    pub(crate) fn help_summary(&self, parser: &Parser) -> Option<String> {
        let help = parser.help()?;
        let short = match help.short() {
            Some(short) => format!("-{short},  "),
            None => "".to_string(),
        };

        Some(format!("{short}--{}, {}", help.long(), self.about))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::OptionDescriptor;
    use crate::test::assert_contains;

    #[test]
    fn help_description_empty() {
        let printer = Printer::new("program", "");
        assert_eq!(printer.help_description(&Parser::empty()), "program\n\n\n");
    }

    #[test]
    fn help_description() {
        // Setup
        let mut parser = Parser::empty();
        parser.declare(OptionDescriptor::from(('i', "input", "File to read.")), ValueKind::String);
        parser
            .declare(OptionDescriptor::from("count"), ValueKind::Integer)
            .multi_value(1)
            .positional();
        parser
            .declare(OptionDescriptor::from(('v', "verbose")), ValueKind::Flag)
            .default(true);
        parser.set_help(OptionDescriptor::new(Some('h'), "help", "Display this help and exit"));
        let printer = Printer::new("program", "Reads things.");

        // Execute
        let message = printer.help_description(&parser);

        // Verify
        assert_eq!(
            message,
            r#"program
Reads things.

-i, --input=<string>,  File to read.
    --count=<int>,  no description [repeated, min args = 1, positional]
-v, --verbose,  no description [default = true]

-h, --help,  Display this help and exit
"#
        );
    }

    #[test]
    fn help_description_about() {
        let mut printer = Printer::new("program", "first");
        printer.set_about("second");
        let message = printer.help_description(&Parser::empty());
        assert_contains!(message, "second");
        assert!(!message.contains("first"));
        assert_eq!(printer.program(), "program");
    }

    #[test]
    fn help_summary() {
        let mut parser = Parser::empty();
        let printer = Printer::new("program", "Reads things.");
        assert_eq!(printer.help_summary(&parser), None);

        parser.set_help(OptionDescriptor::new(Some('h'), "help", ""));
        assert_eq!(
            printer.help_summary(&parser),
            Some("-h,  --help, Reads things.".to_string())
        );

        parser.set_help(OptionDescriptor::new(None, "usage", ""));
        assert_eq!(
            printer.help_summary(&parser),
            Some("--usage, Reads things.".to_string())
        );
    }
}
