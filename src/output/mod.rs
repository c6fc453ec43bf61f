//! Output formatting module
//!
//! Provides two output formats:
//! - Status lines for the terminal
//! - JSON export

pub mod json;
pub mod terminal;

pub use json::{print_json, to_json, JsonCheck};
pub use terminal::{
    describe_remaining, format_details, format_result_line, print_error, print_results,
};
