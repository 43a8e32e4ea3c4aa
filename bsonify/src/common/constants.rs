// path constants
pub const DEFAULT_FIELD_SEPARATOR: &str = ".";

// field tag constants
pub const TAG_SKIP: &str = "-";
pub const TAG_OPTION_SEPARATOR: char = ',';
pub const OPTION_OMIT_EMPTY: &str = "omitempty";
