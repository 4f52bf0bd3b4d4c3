//! Built-in constraint checkers

pub mod confirmed;
pub mod email;
pub mod length;
pub mod pattern;
pub mod required;

pub use confirmed::ConfirmedValidator;
pub use email::EmailValidator;
pub use length::{LengthBound, LengthValidator};
pub use pattern::{CharacterClass, ExcludedCharsValidator, PatternValidator};
pub use required::RequiredValidator;
