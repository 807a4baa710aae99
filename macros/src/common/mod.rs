// Common utilities shared by the user-facing macros
//
// This module contains:
// - parse_utils: keyword and operation-list parsing

mod parse_utils;

pub use parse_utils::*;
