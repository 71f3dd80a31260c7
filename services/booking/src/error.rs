//! Domain error taxonomy for the booking service
//!
//! Every validation or authorization failure surfaces as a [`BookingError`]
//! kind carrying a human-readable reason, so callers branch on the kind
//! rather than matching message text. Storage faults are kept distinct from
//! validation failures.

use common::error::DatabaseError;
use thiserror::Error;

/// Domain error type for the booking core
#[derive(Error, Debug)]
pub enum BookingError {
    /// A required field is absent or empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Input does not match the expected format (email, password, date, price)
    #[error("{0}")]
    InvalidFormat(String),

    /// Well-formed input outside the allowed bounds (age, price, date order)
    #[error("{0}")]
    OutOfRange(String),

    /// Referenced entity does not exist (vacation, user, like)
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Operation conflicts with existing state (duplicate like)
    #[error("{0}")]
    Conflict(&'static str),

    /// The country reference does not resolve
    #[error("Invalid country selection")]
    InvalidCountry,

    /// Operation requires an authenticated session
    #[error("Authentication required")]
    Unauthenticated,

    /// Authenticated identity lacks the required role
    #[error("{0}")]
    Unauthorized(&'static str),

    /// Login failed; unknown email and bad password are indistinguishable
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Storage-layer fault, distinct from validation failures
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Internal collaborator fault (e.g. password hashing)
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Type alias for booking results
pub type BookingResult<T> = Result<T, BookingError>;
