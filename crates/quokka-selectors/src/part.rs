//! Selector part kinds and combinators.
//!
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/) distinguishes the
//! simple selectors that may appear inside a single compound selector from
//! the combinators that join compound selectors into a complex selector.
//! Both vocabularies are small, closed sets, so they are modeled as enums.

use strum_macros::{Display, EnumString};

/// The kind of a simple selector part within a compound selector.
///
/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// Declaration order is the canonical part order within a compound selector:
/// element, id, class, attribute, pseudo-class, pseudo-element. The derived
/// `Ord` is the rank the builder's ordering guard compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum PartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Examples: `div`, `table`, `a`
    #[default]
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    ///
    /// Examples: `#main`, `#data`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Examples: `.container`, `.draggable`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// The builder records the bracket content verbatim.
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    #[strum(serialize = "attribute", serialize = "attr")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// "A pseudo-class is a simple selector that permits selection based on
    /// information that lies outside of the document tree."
    ///
    /// Examples: `:focus`, `:first-child`
    PseudoClass,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// "Pseudo-elements represent abstract elements of the document beyond
    /// those explicitly created by the document language."
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,
}

impl PartKind {
    /// Whether this part kind may occur more than once in a compound selector.
    ///
    /// Type, id, and pseudo-element parts are singletons; classes, attribute
    /// selectors, and pseudo-classes may repeat freely.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        matches!(self, Self::Class | Self::Attribute | Self::PseudoClass)
    }
}

/// A combinator joining two compound selectors.
///
/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// `Display` and `FromStr` map each variant to its canonical CSS text. Note
/// that the descendant combinator's canonical text is itself a single space,
/// so a rendered descendant link contains a visible three-space run once the
/// surrounding padding is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound
    /// selectors." — `A B`
    #[strum(serialize = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two
    /// compound selectors." — `A > B`
    #[strum(serialize = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two
    /// compound selectors." — `A + B`
    #[strum(serialize = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two
    /// compound selectors." — `A ~ B`
    #[strum(serialize = "~")]
    SubsequentSibling,
}

impl Combinator {
    /// Whether `symbol` is the text of one of the four canonical combinators.
    #[must_use]
    pub fn is_canonical(symbol: &str) -> bool {
        symbol.parse::<Self>().is_ok()
    }
}
