//! `journal_core` keeps a date-organized collection of plain-text journal
//! entries and notes. It resolves user-configurable path, filename, and
//! content templates through scope-aware fallback chains — scope, then
//! configured pattern, then built-in default — and injects the generated
//! content into existing markdown documents at computed positions without
//! corrupting their structure.

pub use config::*;
pub use dates::*;
pub use document::*;
pub use error::*;
pub use inject::*;
pub use locale::*;
pub use position::*;
pub use resolver::*;
pub use substitute::*;
pub use template::*;

pub mod config;
mod dates;
mod document;
mod error;
mod inject;
mod locale;
mod position;
mod resolver;
mod substitute;
mod template;

#[cfg(test)]
mod __fixtures;
