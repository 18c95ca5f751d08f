use thiserror::Error;

use crate::api::{InvalidConversion, OptionDescriptor, ValueStore};
use crate::model::ValueKind;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A recoverable problem reported on the error channel during retrieval.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum Diagnostic {
    /// No declared option matches the name.
    #[error("no such argument: {0}")]
    UnknownOption(String),
    /// The option is declared, but holds neither a value nor a default.
    #[error("the value of this argument is not set: {0}")]
    UnsetValue(String),
}

/// How a single raw token is interpreted.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    /// `--name`, `--name=value`, `-n` or `-n=value`.
    Named { name: &'t str, value: &'t str },
    /// `-abc`: each character names an option of its own.
    Cluster(&'t str),
    /// Anything without a leading `-`.
    Positional(&'t str),
}

impl<'t> Token<'t> {
    pub(crate) fn classify(token: &'t str) -> Self {
        if let Some(rest) = token.strip_prefix("--") {
            let (name, value) = rest.split_once('=').unwrap_or((rest, ""));
            Token::Named { name, value }
        } else if let Some(rest) = token.strip_prefix('-') {
            match rest.split_once('=') {
                Some((name, value)) => Token::Named { name, value },
                None if rest.chars().count() > 1 => Token::Cluster(rest),
                None => Token::Named {
                    name: rest,
                    value: "",
                },
            }
        } else {
            Token::Positional(token)
        }
    }
}

pub(crate) struct Parser<'a> {
    options: Vec<(OptionDescriptor, ValueStore<'a>)>,
    help: Option<OptionDescriptor>,
}

impl<'a> std::fmt::Debug for Parser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl<'a> Parser<'a> {
    pub(crate) fn empty() -> Self {
        Self {
            options: Vec::default(),
            help: None,
        }
    }

    pub(crate) fn declare(
        &mut self,
        descriptor: OptionDescriptor,
        kind: ValueKind,
    ) -> &mut ValueStore<'a> {
        let index = self.options.len();
        self.options.push((descriptor, ValueStore::new(kind)));
        &mut self.options[index].1
    }

    pub(crate) fn set_help(&mut self, descriptor: OptionDescriptor) {
        self.help.replace(descriptor);
    }

    pub(crate) fn help(&self) -> Option<&OptionDescriptor> {
        self.help.as_ref()
    }

    pub(crate) fn options(&self) -> impl Iterator<Item = &(OptionDescriptor, ValueStore<'a>)> {
        self.options.iter()
    }

    pub(crate) fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// The first declared option matching `name`.
    pub(crate) fn find(&self, name: &str) -> Option<usize> {
        self.options
            .iter()
            .position(|(descriptor, _)| descriptor.matches(name))
    }

    /// The first declared option marked positional.
    pub(crate) fn find_positional(&self) -> Option<usize> {
        self.options
            .iter()
            .position(|(_, store)| store.is_positional())
    }

    pub(crate) fn store(&self, name: &str) -> Option<&ValueStore<'a>> {
        self.find(name).map(|index| &self.options[index].1)
    }

    pub(crate) fn is_min_arg(&self) -> bool {
        self.options.iter().all(|(_, store)| store.is_min_arg())
    }

    /// Vacuously true when nothing is declared.
    pub(crate) fn all_empty(&self) -> bool {
        self.options.iter().all(|(_, store)| store.is_empty())
    }

    /// Feed every token after the program name into the matching stores.
    ///
    /// The help listing is printed as soon as a token names the help option, and parsing carries on.
    /// Returns whether help was requested.
    pub(crate) fn consume(
        &mut self,
        tokens: &[&str],
        printer: &Printer,
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<bool, InvalidConversion> {
        let mut help_requested = false;

        for token in tokens.iter().skip(1) {
            let classified = Token::classify(token);
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Token '{token}' classified as {classified:?}.");
            }

            match classified {
                Token::Positional(value) => match self.find_positional() {
                    Some(index) => self.options[index].1.add(value)?,
                    None => {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("No positional option to receive '{value}'.");
                        }
                    }
                },
                Token::Cluster(shorts) => {
                    for short in shorts.chars() {
                        let mut buffer = [0; 4];
                        let name = short.encode_utf8(&mut buffer);
                        help_requested |= self.resolve(name, "", printer, user_interface)?;
                    }
                }
                Token::Named { name, value } => {
                    help_requested |= self.resolve(name, value, printer, user_interface)?;
                }
            }
        }

        Ok(help_requested)
    }

    fn resolve(
        &mut self,
        name: &str,
        value: &str,
        printer: &Printer,
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<bool, InvalidConversion> {
        let help_matched = matches!(&self.help, Some(help) if help.matches(name));

        if help_matched {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Help requested via '{name}'.");
            }

            user_interface.print(printer.help_description(self));
        }

        match self.find(name) {
            Some(index) => self.options[index].1.add(value)?,
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    if !help_matched {
                        debug!("No option matches '{name}', skipping.");
                    }
                }
            }
        }

        Ok(help_matched)
    }
}
