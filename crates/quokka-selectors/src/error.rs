//! Error taxonomy for selector construction.

use thiserror::Error;

/// A violation of the compound selector grammar.
///
/// All failures are raised synchronously at the offending call, and the
/// rejected part is never recorded, so a failed call cannot leave behind a
/// partially-updated selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A part was added after a higher-ranked part kind was already recorded
    /// on the same compound selector.
    ///
    /// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
    /// fixes the canonical part order: type, id, classes, attributes,
    /// pseudo-classes, pseudo-element.
    #[error(
        "selector parts must appear in order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation,

    /// A second `element`, `id`, or `pseudo_element` call on a compound
    /// selector that already has that field set.
    #[error("element, id, and pseudo-element may occur at most once")]
    DuplicateSingleton,
}
