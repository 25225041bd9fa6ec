pub(crate) const DEFAULT_SEPARATOR: char = ',';
pub(crate) const OPTIONS_HEADING: &str = "Options are:";
// Options are indented by 4 columns, and descriptions start 5 columns after the widest option.
pub(crate) const USAGE_INDENT: usize = 4;
pub(crate) const USAGE_MARGIN: usize = 5;
// Room for 3 words of average length (5) separated by spaces.
pub(crate) const MINIMUM_DESCRIPTION_WIDTH: usize = 17;
