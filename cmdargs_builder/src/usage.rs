mod interface;
mod printer;

pub(crate) use self::interface::*;
pub(crate) use self::printer::*;
