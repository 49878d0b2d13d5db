//! Generic XML tree construction, serialization, and parsing primitives used
//! by higher-level generators.

pub mod node;
pub mod read;
pub mod write;

pub use node::Element;
pub use read::{parse, parse_file, ParseError};
pub use write::{write, write_file, WriteError};
