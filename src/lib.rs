pub mod models;
pub mod mrz_parser;
pub mod processing;
pub mod utils;

pub use models::{MrzFormat, ParsedMrz};
pub use mrz_parser::MrzParser;
pub use utils::MrzError;
