//! Selectors Level 3 — Typed construction of selector strings.
//! Spec: <https://www.w3.org/TR/selectors-3/>
//!
//! This crate builds compound selectors from typed parts instead of parsing
//! text:
//! - Type, id, class, attribute, pseudo-class, and pseudo-element fragments
//! - A fixed fragment ordering with one-shot slots for type, id, and
//!   pseudo-element fragments
//! - Combinators joining two finished selectors
//! - Specificity calculation
//!
//! Fragment content and combinator tokens pass through verbatim; nothing
//! here validates identifier syntax or evaluates selectors against a
//! document.

#![forbid(unsafe_code)]

mod builder;
mod specificity;

// Re-export public API
pub use builder::{Selector, attr, class, combine, element, id, pseudo_class, pseudo_element};
pub use specificity::Specificity;

use core::error::Error;
use core::fmt;

/// Fragment kinds in their required order inside a compound selector.
/// Spec: Section 5 — Simple selector sequences (ordering of the sequence)
///
/// The derived ordering doubles as the ordering rule: a fragment may be
/// appended only while the chain's current stage does not exceed its kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FragmentKind {
    /// Spec: Section 6.1 — Type selectors
    Element,
    /// Spec: Section 6.5 — ID selectors
    Id,
    /// Spec: Section 6.4 — Class selectors
    Class,
    /// Spec: Section 6.3 — Attribute selectors
    Attribute,
    /// Spec: Section 6.6 — Pseudo-classes
    PseudoClass,
    /// Spec: Section 7 — Pseudo-elements
    PseudoElement,
}

/// Validation failures raised while appending selector fragments.
///
/// Both are fail-fast programmer errors surfaced to the immediate caller;
/// there is no recovery path inside the builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorError {
    /// A one-shot fragment kind (type, id, pseudo-element) was appended a
    /// second time on the same chain.
    DuplicateSlot,
    /// A fragment was appended after a later-stage fragment.
    OrderViolation,
}

impl fmt::Display for SelectorError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSlot => formatter.write_str(
                "Element, id and pseudo-element should not occur more than one time inside the selector.",
            ),
            Self::OrderViolation => formatter.write_str(
                "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element.",
            ),
        }
    }
}

impl Error for SelectorError {}
