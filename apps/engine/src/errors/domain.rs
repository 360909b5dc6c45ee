//! Domain-level error type used across the rules core.
//!
//! This error type is UI-agnostic. Flow operations return
//! `Result<T, DomainError>` and guarantee that an `Err` leaves the game
//! state untouched, so callers may ignore rejections freely.

use thiserror::Error;

/// Validation detail kinds (minimal set; extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    OutOfTurn,
    PhaseMismatch,
    TileNotInHand,
    TileNotPlayable,
    NotOpeningTile,
    DrawWhileMovesExist,
    BoneyardEmpty,
    StaleTicket,
    InvalidTargetScore,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DomainError {
    /// Input validation or rule violation; rejected without state change.
    #[error("validation {kind:?}: {detail}")]
    Validation { kind: ValidationKind, detail: String },
    /// A strategy returned something the flow could not apply.
    #[error("strategy failure: {detail}")]
    Strategy { detail: String },
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            detail: detail.into(),
        }
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation {
            kind: ValidationKind::Other(detail.clone()),
            detail,
        }
    }

    pub fn strategy(detail: impl Into<String>) -> Self {
        Self::Strategy {
            detail: detail.into(),
        }
    }

    /// The validation kind, when this is a validation rejection.
    pub fn kind(&self) -> Option<&ValidationKind> {
        match self {
            Self::Validation { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
