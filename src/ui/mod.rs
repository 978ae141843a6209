//! Terminal presentation: the progress spinner and color helpers.
//!
//! Both write to stderr only; stdout is reserved for translated documents.

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;
