pub(crate) mod palette;
pub(crate) mod parse;
pub(crate) mod picker;
pub(crate) mod source;
