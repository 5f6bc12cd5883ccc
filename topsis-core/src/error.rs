//! Error types for the TOPSIS core library.
//!
//! Every failure is classified into one of the seven [`ErrorKind`]s and carries
//! a stable [`TopsisErrorCode`], so collaborators can render the same failure
//! differently without re-deriving validation logic.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => ($kind:ident, $code:expr)
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

            /// Return the classified [`ErrorKind`] this code belongs to.
            #[must_use]
            pub const fn kind(self) -> ErrorKind {
                match self {
                    $(Self::$CodeVariant => ErrorKind::$kind,)+
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

            /// Retrieve the classified [`ErrorKind`] for this error.
            #[must_use]
            pub const fn kind(&self) -> ErrorKind {
                self.code().kind()
            }
        }
    };
}

/// The classified failure kinds a ranking can terminate with.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// The table does not have the shape a decision table requires.
    Schema,
    /// A criterion cell or weight token is not a finite real number.
    Type,
    /// A weights or impacts specification is not a comma-separated list.
    Format,
    /// Weight, impact and criterion counts disagree.
    CountMismatch,
    /// A token parsed but holds a value outside its domain.
    Value,
    /// A criterion column cannot be normalised.
    DegenerateColumn,
    /// A closeness coefficient has a zero denominator.
    DivisionByZero,
}

impl ErrorKind {
    /// Return the taxonomy name of this kind, e.g. `SchemaError`.
    ///
    /// # Examples
    /// ```
    /// use topsis_core::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::CountMismatch.as_str(), "CountMismatchError");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Schema => "SchemaError",
            Self::Type => "TypeError",
            Self::Format => "FormatError",
            Self::CountMismatch => "CountMismatchError",
            Self::Value => "ValueError",
            Self::DegenerateColumn => "DegenerateColumnError",
            Self::DivisionByZero => "DivisionByZeroError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names the comma-separated specification a format error refers to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ListKind {
    /// The weights specification.
    Weights,
    /// The impacts specification.
    Impacts,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weights => f.write_str("weights"),
            Self::Impacts => f.write_str("impacts"),
        }
    }
}

/// Why a criterion column could not be normalised.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DegenerateReason {
    /// Every value in the column is zero.
    ZeroNorm,
}

impl fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroNorm => f.write_str("zero norm"),
        }
    }
}

/// A criterion cell that failed to parse as a finite real number.
///
/// `row` is the zero-based data row and `column` the zero-based table column
/// (column 0 is the identifier, so criterion cells start at column 1).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct NonNumericCell {
    /// Zero-based data row index.
    pub row: usize,
    /// Zero-based table column index.
    pub column: usize,
    /// Header of the offending column.
    pub column_name: String,
    /// The raw cell text.
    pub value: String,
}

impl fmt::Display for NonNumericCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} column `{}` ({}) = `{}`",
            self.row, self.column_name, self.column, self.value
        )
    }
}

struct CellList<'a>(&'a [NonNumericCell]);

impl fmt::Display for CellList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, cell) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}

/// Error type produced when validating input or computing a ranking.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TopsisError {
    /// The header declares fewer than one identifier and two criteria.
    #[error(
        "table has {columns} columns but at least 3 are required (one identifier and two or more criteria)"
    )]
    TooFewColumns {
        /// Number of columns found in the header.
        columns: usize,
    },
    /// A data row does not have as many fields as the header.
    #[error("row {row} has {found} fields but the header declares {expected}")]
    RaggedRow {
        /// Zero-based data row index.
        row: usize,
        /// Number of header fields.
        expected: usize,
        /// Number of fields in the row.
        found: usize,
    },
    /// The table has a header but no alternatives.
    #[error("table contains no alternatives")]
    NoAlternatives,
    /// One or more criterion cells are not finite real numbers.
    #[error("criterion columns must contain numeric values only: {}", CellList(.cells))]
    NonNumericCriteria {
        /// Every offending cell, in column-major order.
        cells: Vec<NonNumericCell>,
    },
    /// A weights or impacts specification lacks a comma separator.
    #[error("{list} must be separated by ',' (comma); got `{spec}`")]
    NotCommaSeparated {
        /// Which specification was malformed.
        list: ListKind,
        /// The raw specification.
        spec: String,
    },
    /// Weight, impact and criterion counts are not all equal.
    #[error(
        "number of weights ({weights}), impacts ({impacts}) and criterion columns ({criteria}) must be equal"
    )]
    CountMismatch {
        /// Number of weight tokens.
        weights: usize,
        /// Number of impact tokens.
        impacts: usize,
        /// Number of criterion columns.
        criteria: usize,
    },
    /// A weight token is not a finite real number.
    #[error("weight {index} (`{token}`) is not a finite real number")]
    NonNumericWeight {
        /// Zero-based position within the weights list.
        index: usize,
        /// The raw token.
        token: String,
    },
    /// A weight parsed but is zero or negative.
    #[error("weight {index} (`{token}`) must be greater than zero")]
    NonPositiveWeight {
        /// Zero-based position within the weights list.
        index: usize,
        /// The raw token.
        token: String,
    },
    /// An impact token is neither `+` nor `-`.
    #[error("impact {index} (`{token}`) must be either `+` or `-`")]
    InvalidImpact {
        /// Zero-based position within the impacts list.
        index: usize,
        /// The raw token.
        token: String,
    },
    /// A criterion column cannot be scaled to unit norm.
    #[error("criterion column `{name}` (criterion {criterion}) cannot be normalised: {reason}")]
    DegenerateColumn {
        /// Zero-based criterion index.
        criterion: usize,
        /// Header of the column.
        name: String,
        /// Why normalisation failed.
        reason: DegenerateReason,
    },
    /// An alternative coincides with both ideal solutions.
    #[error(
        "alternative `{identifier}` (row {row}) coincides with both ideal solutions; closeness is undefined"
    )]
    DivisionByZero {
        /// Zero-based data row index.
        row: usize,
        /// The alternative's identifier, verbatim.
        identifier: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`TopsisError`] variants.
    enum TopsisErrorCode for TopsisError {
        /// The header declares fewer than three columns.
        TooFewColumns => TooFewColumns { .. } => (Schema, "TOPSIS_TOO_FEW_COLUMNS"),
        /// A data row does not match the header width.
        RaggedRow => RaggedRow { .. } => (Schema, "TOPSIS_RAGGED_ROW"),
        /// The table has no alternatives.
        NoAlternatives => NoAlternatives => (Schema, "TOPSIS_NO_ALTERNATIVES"),
        /// Criterion cells failed to parse.
        NonNumericCriteria => NonNumericCriteria { .. } => (Type, "TOPSIS_NON_NUMERIC_CRITERIA"),
        /// A specification lacks a comma separator.
        NotCommaSeparated => NotCommaSeparated { .. } => (Format, "TOPSIS_NOT_COMMA_SEPARATED"),
        /// Weight, impact and criterion counts disagree.
        CountMismatch => CountMismatch { .. } => (CountMismatch, "TOPSIS_COUNT_MISMATCH"),
        /// A weight token failed to parse.
        NonNumericWeight => NonNumericWeight { .. } => (Type, "TOPSIS_NON_NUMERIC_WEIGHT"),
        /// A weight is zero or negative.
        NonPositiveWeight => NonPositiveWeight { .. } => (Value, "TOPSIS_NON_POSITIVE_WEIGHT"),
        /// An impact token is not `+` or `-`.
        InvalidImpact => InvalidImpact { .. } => (Value, "TOPSIS_INVALID_IMPACT"),
        /// A criterion column has a zero norm.
        DegenerateColumn => DegenerateColumn { .. } => (DegenerateColumn, "TOPSIS_DEGENERATE_COLUMN"),
        /// A closeness coefficient has a zero denominator.
        DivisionByZero => DivisionByZero { .. } => (DivisionByZero, "TOPSIS_DIVISION_BY_ZERO"),
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, TopsisError>;
