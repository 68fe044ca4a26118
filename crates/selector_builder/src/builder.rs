//! Selector construction and rendering.
//! Spec: <https://www.w3.org/TR/selectors-3/>

use crate::{FragmentKind, SelectorError, Specificity};
use core::fmt;
use log::debug;

/// A compound selector under construction, or a finished combined selector.
/// Spec: Section 5 — Simple selector sequences
///
/// Every append returns a fresh value, so branching two continuations off
/// one intermediate selector leaves both unaffected by the other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    /// Rendered fragments accumulated so far.
    text: String,
    /// Highest-priority fragment kind appended so far, if any.
    stage: Option<FragmentKind>,
    /// One-shot slot for the type fragment.
    has_element: bool,
    /// One-shot slot for the id fragment.
    has_id: bool,
    /// One-shot slot for the pseudo-element fragment.
    has_pseudo_element: bool,
    /// Running specificity of the accumulated fragments.
    specificity: Specificity,
}

impl Selector {
    /// Append a type fragment. Must be the first fragment of a chain.
    /// Spec: Section 6.1 — Type selectors
    ///
    /// # Errors
    /// [`SelectorError::DuplicateSlot`] if a type fragment is already
    /// present, [`SelectorError::OrderViolation`] if any other fragment was
    /// appended first.
    #[inline]
    pub fn element(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Element, value)
    }

    /// Append an id fragment as `#value`.
    /// Spec: Section 6.5 — ID selectors
    ///
    /// # Errors
    /// [`SelectorError::DuplicateSlot`] if an id fragment is already
    /// present, [`SelectorError::OrderViolation`] if a class, attribute,
    /// pseudo-class, or pseudo-element fragment was appended first.
    #[inline]
    pub fn id(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Id, value)
    }

    /// Append a class fragment as `.value`. Repeatable.
    /// Spec: Section 6.4 — Class selectors
    ///
    /// # Errors
    /// [`SelectorError::OrderViolation`] if an attribute, pseudo-class, or
    /// pseudo-element fragment was appended first.
    #[inline]
    pub fn class(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Class, value)
    }

    /// Append an attribute fragment as `[value]`. Repeatable.
    /// The bracket body passes through verbatim.
    /// Spec: Section 6.3 — Attribute selectors
    ///
    /// # Errors
    /// [`SelectorError::OrderViolation`] if a pseudo-class or
    /// pseudo-element fragment was appended first.
    #[inline]
    pub fn attr(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Attribute, value)
    }

    /// Append a pseudo-class fragment as `:value`. Repeatable.
    /// Spec: Section 6.6 — Pseudo-classes
    ///
    /// # Errors
    /// [`SelectorError::OrderViolation`] if a pseudo-element fragment was
    /// appended first.
    #[inline]
    pub fn pseudo_class(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoClass, value)
    }

    /// Append a pseudo-element fragment as `::value`.
    /// Spec: Section 7 — Pseudo-elements
    ///
    /// # Errors
    /// [`SelectorError::DuplicateSlot`] if a pseudo-element fragment is
    /// already present.
    #[inline]
    pub fn pseudo_element(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoElement, value)
    }

    /// Render the accumulated selector text.
    /// Idempotent until further fragments are appended.
    #[inline]
    #[must_use]
    pub fn stringify(&self) -> String {
        self.text.clone()
    }

    /// The accumulated selector text, borrowed.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Specificity of the accumulated fragments.
    /// Spec: Section 9 — Calculating a selector's specificity
    #[inline]
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.specificity
    }

    /// Validate an append against the slot latches and the stage ordering.
    /// The slot check runs first: a duplicate one-shot fragment reports
    /// `DuplicateSlot` even when the ordering check would also fail.
    fn check(&self, kind: FragmentKind) -> Result<(), SelectorError> {
        if self.slot_taken(kind) {
            debug!(
                "[SELECTOR] duplicate {kind:?} fragment rejected on `{}`",
                self.text
            );
            return Err(SelectorError::DuplicateSlot);
        }
        if self.stage.is_some_and(|stage| stage > kind) {
            debug!(
                "[SELECTOR] out-of-order {kind:?} fragment rejected on `{}`",
                self.text
            );
            return Err(SelectorError::OrderViolation);
        }
        Ok(())
    }

    /// Whether the one-shot slot for `kind` is already filled.
    fn slot_taken(&self, kind: FragmentKind) -> bool {
        match kind {
            FragmentKind::Element => self.has_element,
            FragmentKind::Id => self.has_id,
            FragmentKind::PseudoElement => self.has_pseudo_element,
            FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => false,
        }
    }

    /// Validate, then produce the next selector value.
    fn append(&self, kind: FragmentKind, value: &str) -> Result<Self, SelectorError> {
        self.check(kind)?;
        Ok(self.applied(kind, value))
    }

    /// Produce the next selector value without validation. A fresh base
    /// passes every check, which is what makes the free constructors below
    /// infallible.
    fn applied(&self, kind: FragmentKind, value: &str) -> Self {
        let mut next = self.clone();
        push_fragment(&mut next.text, kind, value);
        next.stage = Some(kind);
        match kind {
            FragmentKind::Element => next.has_element = true,
            FragmentKind::Id => next.has_id = true,
            FragmentKind::PseudoElement => next.has_pseudo_element = true,
            FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => {}
        }
        next.specificity = self.specificity.bumped(kind);
        next
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.text)
    }
}

/// Write one fragment with its kind's prefix. Content is literal; nothing
/// is escaped or normalized.
fn push_fragment(text: &mut String, kind: FragmentKind, value: &str) {
    match kind {
        FragmentKind::Element => text.push_str(value),
        FragmentKind::Id => {
            text.push('#');
            text.push_str(value);
        }
        FragmentKind::Class => {
            text.push('.');
            text.push_str(value);
        }
        FragmentKind::Attribute => {
            text.push('[');
            text.push_str(value);
            text.push(']');
        }
        FragmentKind::PseudoClass => {
            text.push(':');
            text.push_str(value);
        }
        FragmentKind::PseudoElement => {
            text.push_str("::");
            text.push_str(value);
        }
    }
}

/// Start a chain with a type fragment.
/// Spec: Section 6.1 — Type selectors
#[inline]
#[must_use]
pub fn element(value: &str) -> Selector {
    Selector::default().applied(FragmentKind::Element, value)
}

/// Start a chain with an id fragment.
/// Spec: Section 6.5 — ID selectors
#[inline]
#[must_use]
pub fn id(value: &str) -> Selector {
    Selector::default().applied(FragmentKind::Id, value)
}

/// Start a chain with a class fragment.
/// Spec: Section 6.4 — Class selectors
#[inline]
#[must_use]
pub fn class(value: &str) -> Selector {
    Selector::default().applied(FragmentKind::Class, value)
}

/// Start a chain with an attribute fragment.
/// Spec: Section 6.3 — Attribute selectors
#[inline]
#[must_use]
pub fn attr(value: &str) -> Selector {
    Selector::default().applied(FragmentKind::Attribute, value)
}

/// Start a chain with a pseudo-class fragment.
/// Spec: Section 6.6 — Pseudo-classes
#[inline]
#[must_use]
pub fn pseudo_class(value: &str) -> Selector {
    Selector::default().applied(FragmentKind::PseudoClass, value)
}

/// Start a chain with a pseudo-element fragment.
/// Spec: Section 7 — Pseudo-elements
#[inline]
#[must_use]
pub fn pseudo_element(value: &str) -> Selector {
    Selector::default().applied(FragmentKind::PseudoElement, value)
}

/// Join two finished selectors with a combinator token, single spaces
/// around it. The token passes through verbatim; nothing checks that it is
/// one of the four CSS combinators. Nested combinations join recursively.
/// Spec: Section 8 — Combinators
#[must_use]
pub fn combine(left: &Selector, combinator: &str, right: &Selector) -> Selector {
    Selector {
        text: format!("{left} {combinator} {right}"),
        specificity: left.specificity.merged(right.specificity),
        ..Selector::default()
    }
}
