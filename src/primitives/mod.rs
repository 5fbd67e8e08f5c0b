//! Leaf grammar elements: single characters, any character, end of input,
//! and the always-failing placeholder.

pub mod any;
pub mod character;
pub mod end;
pub mod nothing;

pub use any::AnyChar;
pub use character::CharParser;
pub use end::End;
pub use nothing::Nothing;
