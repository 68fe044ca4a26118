//! CSS selector specificity calculation.
//! Spec: <https://www.w3.org/TR/selectors-3/#specificity>

use crate::FragmentKind;

/// Specificity triple (a, b, c).
/// Spec: Section 9 — Calculating a selector's specificity
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Specificity(pub u16, pub u16, pub u16);

impl Specificity {
    /// Count one appended fragment into the triple: id selectors count as
    /// a; class, attribute, and pseudo-class selectors count as b; type and
    /// pseudo-element selectors count as c.
    /// Spec: Section 9 — Specificity (a, b, c)
    pub(crate) fn bumped(self, kind: FragmentKind) -> Self {
        match kind {
            FragmentKind::Id => Self(self.0.saturating_add(1), self.1, self.2),
            FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => {
                Self(self.0, self.1.saturating_add(1), self.2)
            }
            FragmentKind::Element | FragmentKind::PseudoElement => {
                Self(self.0, self.1, self.2.saturating_add(1))
            }
        }
    }

    /// Component-wise sum of two specificities, used when two selectors are
    /// joined by a combinator.
    /// Spec: Section 9 — Specificity accumulation
    #[must_use]
    pub fn merged(self, other: Self) -> Self {
        Self(
            self.0.saturating_add(other.0),
            self.1.saturating_add(other.1),
            self.2.saturating_add(other.2),
        )
    }
}
