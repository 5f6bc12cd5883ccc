//! TOPSIS core library.
//!
//! Ranks alternatives scored on several weighted criteria by their relative
//! closeness to an ideal solution. The pipeline is pure and in-memory:
//! [`validate`] the raw table and specifications, [`normalise`] each criterion
//! column, [`apply_weights`], resolve the [`IdealSolution`], compute
//! [`closeness_scores`], and assign [`dense_ranks`]. [`compute_ranking`] runs
//! all stages.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod distance;
mod error;
mod ideal;
mod matrix;
mod normalise;
mod rank;
mod ranking;
mod result;
mod table;
mod validate;

#[cfg(test)]
mod test_utils;

pub use crate::{
    distance::{Separation, closeness_scores, separations},
    error::{
        DegenerateReason, ErrorKind, ListKind, NonNumericCell, Result, TopsisError,
        TopsisErrorCode,
    },
    ideal::IdealSolution,
    matrix::Matrix,
    normalise::{apply_weights, normalise},
    rank::{Rank, dense_ranks},
    ranking::compute_ranking,
    result::{RANK_COLUMN, RankedAlternative, ResultTable, SCORE_COLUMN, ScoreFormat},
    table::{DecisionTable, Impact, ImpactVector, RawTable, WeightVector},
    validate::{MIN_COLUMNS, ValidatedInput, validate},
};
