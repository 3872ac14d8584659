//! Fluent construction and canonical rendering of CSS selectors.
//!
//! # Scope
//!
//! This crate implements the construction direction only — structured calls
//! in, canonical selector text out:
//!
//! - **Compound selectors** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - type, id, class, attribute, pseudo-class, and pseudo-element parts
//!   - canonical part order enforced at every call
//!   - singleton parts (type, id, pseudo-element) rejected on repetition
//!
//! - **Complex selectors** ([§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex))
//!   - descendant, child, next-sibling, and subsequent-sibling combinators
//!   - arbitrary nesting via [`combine`]; rendering is left-to-right with
//!     exactly one space on each side of every combinator
//!
//! - **Canonical rendering** via [`std::fmt::Display`]
//!
//! # Not Implemented
//!
//! - Selector parsing (string → structure); construction is one-way
//! - Selector matching against a document tree
//! - Validation of part content — class names, attribute expressions, and
//!   pseudo-class names are rendered verbatim
//!
//! # Example
//!
//! ```
//! use quokka_selectors as css;
//!
//! let link = css::element("a")?.attr("href$=\".png\"")?.pseudo_class("focus")?;
//! assert_eq!(link.to_string(), "a[href$=\".png\"]:focus");
//!
//! let pair = css::combine(css::element("div")?.id("main")?, "+", css::element("table")?);
//! assert_eq!(pair.to_string(), "div#main + table");
//! # Ok::<(), css::BuildError>(())
//! ```

/// Selector construction state machine and rendering per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod builder;
/// Error taxonomy for selector construction.
pub mod error;
/// Part kinds and combinators per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod part;

// Re-exports for convenience
pub use builder::{CompoundSelector, Selector};
pub use error::BuildError;
pub use part::{Combinator, PartKind};

/// Start a selector from a type (element) part.
///
/// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
///
/// # Errors
///
/// Propagates the builder's grammar errors; the first call on a fresh
/// selector does not fail in practice.
pub fn element(value: &str) -> Result<Selector, BuildError> {
    Selector::new().element(value)
}

/// Start a selector from an ID part.
///
/// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
///
/// # Errors
///
/// Propagates the builder's grammar errors; the first call on a fresh
/// selector does not fail in practice.
pub fn id(value: &str) -> Result<Selector, BuildError> {
    Selector::new().id(value)
}

/// Start a selector from a class part.
///
/// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
///
/// # Errors
///
/// Propagates the builder's grammar errors; the first call on a fresh
/// selector does not fail in practice.
pub fn class(value: &str) -> Result<Selector, BuildError> {
    Selector::new().class(value)
}

/// Start a selector from an attribute part.
///
/// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// # Errors
///
/// Propagates the builder's grammar errors; the first call on a fresh
/// selector does not fail in practice.
pub fn attr(value: &str) -> Result<Selector, BuildError> {
    Selector::new().attr(value)
}

/// Start a selector from a pseudo-class part.
///
/// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
///
/// # Errors
///
/// Propagates the builder's grammar errors; the first call on a fresh
/// selector does not fail in practice.
pub fn pseudo_class(value: &str) -> Result<Selector, BuildError> {
    Selector::new().pseudo_class(value)
}

/// Start a selector from a pseudo-element part.
///
/// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
///
/// # Errors
///
/// Propagates the builder's grammar errors; the first call on a fresh
/// selector does not fail in practice.
pub fn pseudo_element(value: &str) -> Result<Selector, BuildError> {
    Selector::new().pseudo_element(value)
}

/// Join two selectors with a combinator, keeping `left` as the root.
///
/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// The symbol is not validated against the canonical set; see
/// [`Selector::combine`] for the permissive policy.
#[must_use]
pub fn combine(left: Selector, combinator: &str, right: Selector) -> Selector {
    left.combine(combinator, right)
}
