// Column at which a leaf's description starts in rendered help.
pub(crate) const DESCRIPTION_COLUMN: usize = 40;
// Column at which a command's description starts in rendered help.
pub(crate) const COMMAND_COLUMN: usize = 25;
pub(crate) const INDENT_STEP: usize = 2;

pub(crate) const DEFAULT_LABEL: &str = "By default: ";
pub(crate) const IMPLICIT_LABEL: &str = "Implicitly: ";

pub(crate) const OPTION_PREFIX: char = '-';
pub(crate) const VALUE_SEPARATOR: char = '=';

pub(crate) const ERROR_PREFIX: &str = "Parse error: ";
