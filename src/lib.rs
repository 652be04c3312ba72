//! # cssb - CSS Selector Builder
//!
//! A chainable builder for CSS selector strings with ordering validation.
//!
//! Selectors are assembled part by part in the fixed CSS order (element, id,
//! class, attribute, pseudo-class, pseudo-element) and rendered with
//! [`SelectorBuilder::stringify`]. Out-of-order parts and repeated singleton
//! parts are rejected at the offending call. Two selectors can be joined
//! with a combinator via [`combine`].
//!
//! ## Quick Start
//!
//! ```rust
//! use cssb::{combine, element, id};
//!
//! let selector = id("main").class("container")?.class("editable")?;
//! assert_eq!(selector.stringify(), "#main.container.editable");
//!
//! let paired = combine(&element("p"), "+", &element("span"));
//! assert_eq!(paired.stringify(), "p + span");
//! # Ok::<(), cssb::CssbError>(())
//! ```
//!
//! ## Supported parts
//!
//! - Element: `div`
//! - Id: `#main`
//! - Class: `.container` (repeatable)
//! - Attribute: `[href$=".png"]` (repeatable)
//! - Pseudo-class: `:focus` (repeatable)
//! - Pseudo-element: `::before`
//! - Combinators: any string, e.g. `>`, `+`, `~`, or `" "` for descendant
//!
//! Part values are taken verbatim; this crate does no CSS parsing, matching,
//! or specificity computation.
//!
//! ## Modules
//!
//! - [`builder`]: the selector builder and `combine`
//! - [`error`]: error types
//! - [`json`]: generic object/JSON conversion helpers
//! - [`rect`]: the rectangle exercise

pub mod builder;
pub mod error;
pub mod json;
pub mod rect;

pub use builder::{Category, Part, SelectorBuilder, combine};
pub use error::CssbError;
pub use rect::Rectangle;

/// Starts a selector with an element part, e.g. `div`.
pub fn element(value: &str) -> SelectorBuilder {
    first(Category::Element, value)
}

/// Starts a selector with an id part, e.g. `#main`.
pub fn id(value: &str) -> SelectorBuilder {
    first(Category::Id, value)
}

/// Starts a selector with a class part, e.g. `.container`.
pub fn class(value: &str) -> SelectorBuilder {
    first(Category::Class, value)
}

/// Starts a selector with an attribute part, e.g. `[href$=".png"]`.
pub fn attr(value: &str) -> SelectorBuilder {
    first(Category::Attribute, value)
}

/// Starts a selector with a pseudo-class part, e.g. `:hover`.
pub fn pseudo_class(value: &str) -> SelectorBuilder {
    first(Category::PseudoClass, value)
}

/// Starts a selector with a pseudo-element part, e.g. `::after`.
pub fn pseudo_element(value: &str) -> SelectorBuilder {
    first(Category::PseudoElement, value)
}

fn first(category: Category, value: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(category, value)
}
