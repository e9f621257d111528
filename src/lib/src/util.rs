//! Various utility functions
//!

pub mod logging;
pub mod paginate;
pub mod str;

pub use paginate::{page_num_from_param, parse_link_header};
