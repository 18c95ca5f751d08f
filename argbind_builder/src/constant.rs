// Stored in a flag's single slot.
pub(crate) const FLAG_TRUE: &str = "1";
pub(crate) const FLAG_FALSE: &str = "0";

pub(crate) const NO_DESCRIPTION: &str = "no description";
pub(crate) const HELP_MESSAGE: &str = "Display this help and exit";
