pub mod data;

pub use data::{MrzFormat, ParsedMrz};
