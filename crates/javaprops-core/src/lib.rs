#![forbid(unsafe_code)]

mod error;
mod escape;
mod line_reader;
mod loader;
mod options;
mod properties;
mod split;
mod writer;

pub use crate::error::{PropertiesError, PropertiesResult};
pub use crate::escape::{EscapeMode, MalformedEscape, decode_escapes, encode_escapes};
pub use crate::line_reader::LineReader;
pub use crate::loader::load;
pub use crate::options::{LineEnding, StoreOptions};
pub use crate::properties::{Properties, PropertyLookup};
pub use crate::split::split_key_value;
pub use crate::writer::store;
