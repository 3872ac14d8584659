//! Fluent construction of compound and complex selectors.
//!
//! [§ 4.1 Structure and Terminology](https://www.w3.org/TR/selectors-4/#structure)
//!
//! A [`Selector`] accumulates the parts of one compound selector and the
//! combinator links that hang further selectors off it. Part calls are
//! validated against the canonical part order before anything is recorded;
//! rendering via [`std::fmt::Display`] is a pure read over the built state.

use std::fmt;

use quokka_common::warning::warn_once;

use crate::error::BuildError;
use crate::part::{Combinator, PartKind};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// The singleton parts (element, id, pseudo-element) hold at most one value
/// over the selector's lifetime; the repeatable parts accumulate in call
/// order. `current_step` is the highest rank recorded so far — the ordering
/// guard compares against it before any field is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    /// Type selector text, set at most once.
    element: Option<String>,
    /// ID selector text, set at most once.
    id: Option<String>,
    /// Class selector texts, insertion order preserved.
    classes: Vec<String>,
    /// Raw attribute expressions, insertion order preserved.
    attributes: Vec<String>,
    /// Pseudo-class texts, insertion order preserved.
    pseudo_classes: Vec<String>,
    /// Pseudo-element text, set at most once.
    pseudo_element: Option<String>,
    /// Highest part rank recorded so far; starts at `Element` and only grows.
    current_step: PartKind,
}

/// One combinator edge of a complex selector.
///
/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// The combinator text is stored verbatim; see [`Selector::combine`] for the
/// permissive-symbol policy. Each link exclusively owns its right subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CombinatorLink {
    /// Combinator text, rendered with one space of padding on each side.
    combinator: String,
    /// The right operand, itself a full selector tree.
    right: Selector,
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// "A complex selector is a chain of one or more compound selectors
/// separated by combinators."
///
/// A selector under construction: one [`CompoundSelector`] plus an ordered
/// list of combinator links. Combining never flattens the operands — the
/// left selector stays the root and the links render left-to-right after
/// its own compound text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    /// The parts recorded on this node.
    compound: CompoundSelector,
    /// Combinator links in append order, rendered after the compound.
    links: Vec<CombinatorLink>,
}

impl Selector {
    /// Create an empty selector with no parts recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The compound selector at this node, without its combinator links.
    ///
    /// Rendering the returned value gives the node's own text only — useful
    /// when the chain tail should be displayed without its subtree.
    #[must_use]
    pub const fn compound(&self) -> &CompoundSelector {
        &self.compound
    }

    /// Record the type (element) part.
    ///
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// # Errors
    ///
    /// [`BuildError::OrderViolation`] if a higher-ranked part was already
    /// recorded; [`BuildError::DuplicateSingleton`] if the element is
    /// already set.
    pub fn element(self, value: &str) -> Result<Self, BuildError> {
        self.record(PartKind::Element, value)
    }

    /// Record the ID part.
    ///
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// # Errors
    ///
    /// [`BuildError::OrderViolation`] if a higher-ranked part was already
    /// recorded; [`BuildError::DuplicateSingleton`] if the id is already set.
    pub fn id(self, value: &str) -> Result<Self, BuildError> {
        self.record(PartKind::Id, value)
    }

    /// Record a class part. Classes may repeat freely.
    ///
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// # Errors
    ///
    /// [`BuildError::OrderViolation`] if a higher-ranked part was already
    /// recorded. Repetition never fails.
    pub fn class(self, value: &str) -> Result<Self, BuildError> {
        self.record(PartKind::Class, value)
    }

    /// Record an attribute part. The expression text is kept verbatim and
    /// rendered inside brackets; attribute parts may repeat freely.
    ///
    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// # Errors
    ///
    /// [`BuildError::OrderViolation`] if a higher-ranked part was already
    /// recorded. Repetition never fails.
    pub fn attr(self, value: &str) -> Result<Self, BuildError> {
        self.record(PartKind::Attribute, value)
    }

    /// Record a pseudo-class part. Pseudo-classes may repeat freely.
    ///
    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// # Errors
    ///
    /// [`BuildError::OrderViolation`] if a higher-ranked part was already
    /// recorded. Repetition never fails.
    pub fn pseudo_class(self, value: &str) -> Result<Self, BuildError> {
        self.record(PartKind::PseudoClass, value)
    }

    /// Record the pseudo-element part.
    ///
    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// # Errors
    ///
    /// [`BuildError::OrderViolation`] if a higher-ranked part was already
    /// recorded; [`BuildError::DuplicateSingleton`] if the pseudo-element is
    /// already set.
    pub fn pseudo_element(self, value: &str) -> Result<Self, BuildError> {
        self.record(PartKind::PseudoElement, value)
    }

    /// Append `right` under `combinator`, keeping `self` as the root.
    ///
    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    ///
    /// Any symbol is accepted and rendered verbatim with one space of
    /// padding on each side. A symbol outside the four canonical
    /// combinators ([`Combinator`]) triggers a one-shot diagnostic through
    /// the shared warning system instead of failing the call.
    #[must_use]
    pub fn combine(mut self, combinator: &str, right: Self) -> Self {
        if !Combinator::is_canonical(combinator) {
            warn_once(
                "selectors",
                &format!("unrecognized combinator '{combinator}', rendering verbatim"),
            );
        }
        self.links.push(CombinatorLink {
            combinator: combinator.to_string(),
            right,
        });
        self
    }

    /// Ordering guard and recording step shared by every part method.
    ///
    /// Both checks run before any field is written, so a rejected part
    /// leaves no trace. The guard makes the subsequent rank assignment
    /// equivalent to `max(current_step, kind)`.
    fn record(mut self, kind: PartKind, value: &str) -> Result<Self, BuildError> {
        if self.compound.current_step > kind {
            return Err(BuildError::OrderViolation);
        }

        let compound = &mut self.compound;
        match kind {
            PartKind::Element => set_singleton(&mut compound.element, value)?,
            PartKind::Id => set_singleton(&mut compound.id, value)?,
            PartKind::Class => compound.classes.push(value.to_string()),
            PartKind::Attribute => compound.attributes.push(value.to_string()),
            PartKind::PseudoClass => compound.pseudo_classes.push(value.to_string()),
            PartKind::PseudoElement => set_singleton(&mut compound.pseudo_element, value)?,
        }
        compound.current_step = kind;
        Ok(self)
    }
}

/// Fill a singleton slot, rejecting a second write.
fn set_singleton(slot: &mut Option<String>, value: &str) -> Result<(), BuildError> {
    if slot.is_some() {
        return Err(BuildError::DuplicateSingleton);
    }
    *slot = Some(value.to_string());
    Ok(())
}

impl fmt::Display for CompoundSelector {
    /// Render the compound's groups in their fixed order with no separators
    /// beyond each group's own prefix characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            f.write_str(element)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for attribute in &self.attributes {
            write!(f, "[{attribute}]")?;
        }
        for pseudo_class in &self.pseudo_classes {
            write!(f, ":{pseudo_class}")?;
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            write!(f, "::{pseudo_element}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Selector {
    /// Render the canonical textual form: the compound's own text, then each
    /// link left-to-right as one space, the combinator text, one space, and
    /// the recursively rendered right selector.
    ///
    /// The spacing rule holds for every combinator, including the descendant
    /// combinator whose own text is a space — the resulting three-space run
    /// is canonical and never collapsed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compound)?;
        for link in &self.links {
            write!(f, " {} {}", link.combinator, link.right)?;
        }
        Ok(())
    }
}
