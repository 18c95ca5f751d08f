use crate::parser::base::Diagnostic;

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_diagnostic(&self, diagnostic: Diagnostic);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_diagnostic(&self, diagnostic: Diagnostic) {
        eprintln!("{diagnostic}");
    }
}

/// Swallows all output.
#[cfg(feature = "unit_test")]
#[derive(Default)]
pub(crate) struct SilentInterface {}

#[cfg(feature = "unit_test")]
impl UserInterface for SilentInterface {
    fn print(&self, _message: String) {
        // Do nothing.
    }

    fn print_diagnostic(&self, _diagnostic: Diagnostic) {
        // Do nothing.
    }
}
