use crate::ValueKind;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a strict, coercing or path-qualified accessor.
///
/// Accessors never partially succeed: they either return the requested value or this error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The addressed value cannot supply the requested type.
    ///
    /// `found` is `None` when the path addressed nothing, e.g. an out-of-range index or a
    /// missing key.
    #[error("incompatible type: expected {expected}, found {}", describe(*.found))]
    IncompatibleType {
        expected: ValueKind,
        found: Option<ValueKind>,
    },
}

impl Error {
    pub(crate) fn incompatible(expected: ValueKind, found: Option<ValueKind>) -> Self {
        tracing::trace!(%expected, found = describe(found), "incompatible type");
        Error::IncompatibleType { expected, found }
    }

    /// The kind the caller asked for.
    #[must_use]
    pub fn expected(&self) -> ValueKind {
        match self {
            Error::IncompatibleType { expected, .. } => *expected,
        }
    }

    /// The kind that was actually present, if anything was.
    #[must_use]
    pub fn found(&self) -> Option<ValueKind> {
        match self {
            Error::IncompatibleType { found, .. } => *found,
        }
    }
}

fn describe(found: Option<ValueKind>) -> &'static str {
    found.map_or("nothing", ValueKind::as_str)
}
