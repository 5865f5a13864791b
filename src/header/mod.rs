//! C header generation from camera config files

mod generator;
mod literal;
mod symbol;

pub use generator::{
    fingerprint, CheckOutcome, GeneratedHeader, GenerationSummary, HeaderEntry, HeaderGenerator,
    PlannedEntry, CONFIG_STRING_TABLE_NAME, CONFIG_TABLE_NAME, GENERATED_MARKER, NOTICE,
};
pub use symbol::{ConfigSymbol, SYMBOL_SUFFIX};
