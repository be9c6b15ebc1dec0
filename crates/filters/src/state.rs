use serde::{Deserialize, Serialize};

/// Session-scoped record of whether filtering is active and which values were
/// last submitted.
///
/// Lifecycle is one user session: the state survives across render cycles and
/// is mutated only by the two user actions, "Apply Filters" ([`Self::apply`])
/// and "Clear Filters" ([`Self::clear`]). Every other access is a read.
///
/// Invariant: while `applied` is false the stored selections are invisible,
/// and the accessors return `None` no matter what was submitted earlier. Callers
/// must go through [`Self::country`] / [`Self::category`] rather than reading
/// fields, which is why the fields are private.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    applied: bool,
    country: Option<String>,
    category: Option<String>,
}

impl FilterState {
    /// The "Apply Filters" action: stores both selections verbatim (including
    /// absent ones) and marks the state as applied.
    ///
    /// No validation happens here. A selection that no longer matches the
    /// current data simply yields a zero-row filtered view downstream.
    pub fn apply(&mut self, country: Option<String>, category: Option<String>) {
        self.applied = true;
        self.country = country;
        self.category = category;
    }

    /// The "Clear Filters" action: back to the defaults, showing everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_applied(&self) -> bool {
        self.applied
    }

    /// The active country selection, or `None` when filters are not applied.
    pub fn country(&self) -> Option<&str> {
        if self.applied { self.country.as_deref() } else { None }
    }

    /// The active category selection, or `None` when filters are not applied.
    pub fn category(&self) -> Option<&str> {
        if self.applied { self.category.as_deref() } else { None }
    }
}
