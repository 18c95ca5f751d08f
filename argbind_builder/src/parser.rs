mod base;
mod interface;
mod printer;

pub(crate) use base::*;
pub(crate) use interface::*;
pub(crate) use printer::*;
