//! Entity state.
//!
//! A single [`Character`] type carries the shared combat stats plus a tagged
//! [`Class`] payload. Construction always goes through [`validation`], and
//! every mutation reports to an injected notification sink.
mod character;
mod class;
mod template;
pub mod validation;

pub use character::{Character, LifeState};
pub use class::{Class, ClassKind};
pub use template::{CharacterTemplate, ClassTemplate};
