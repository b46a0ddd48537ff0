//! Error types for the percolation core library.
//!
//! Every fallible operation reports one of two kinds: a size or count
//! parameter that cannot describe a structure, or an index that falls outside
//! the domain of an existing structure.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced by [`crate::DisjointSet`], [`crate::PercolationGrid`], and
/// the experiment driver.
///
/// Errors are contract violations reported to the caller immediately. A
/// failed call never mutates the structure it was invoked on.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PercolationError {
    /// A size or count parameter was zero or too large to allocate.
    #[error("{parameter} must describe a non-empty structure (got {got})")]
    InvalidArgument {
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// Value supplied by the caller.
        got: usize,
    },
    /// An index or coordinate fell outside its valid domain.
    #[error("{axis} {value} is outside {lower}..={upper}")]
    OutOfRange {
        /// Which index was rejected: `element`, `row`, or `column`.
        axis: &'static str,
        /// Value supplied by the caller.
        value: usize,
        /// Smallest accepted value.
        lower: usize,
        /// Largest accepted value.
        upper: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`PercolationError`] variants.
    enum PercolationErrorCode for PercolationError {
        /// A size or count parameter was zero or too large to allocate.
        InvalidArgument => InvalidArgument { .. } => "PERCOLATION_INVALID_ARGUMENT",
        /// An index or coordinate fell outside its valid domain.
        OutOfRange => OutOfRange { .. } => "PERCOLATION_OUT_OF_RANGE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, PercolationError>;
