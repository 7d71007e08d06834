mod nom_parser;
mod types;

pub use self::nom_parser::ParsedLine;
pub use self::types::Message;
