#![expect(clippy::expect_used, reason = "tests require contextual panics")]
//! Integration tests for `compute_ranking`: golden output and the classified
//! failure for each malformed input.

mod common;

use rstest::rstest;
use topsis_core::{ErrorKind, RawTable, ScoreFormat, TopsisError, compute_ranking};
use topsis_test_support::fixtures::{
    MOBILE_CSV, MOBILE_EXPECTED, MOBILE_IMPACTS, MOBILE_WEIGHTS, SCORE_TOLERANCE,
};

use common::{raw_table, table_from_csv};

#[test]
fn mobile_table_matches_golden_scores_and_ranks() {
    let table = table_from_csv(MOBILE_CSV);
    let result = compute_ranking(&table, MOBILE_WEIGHTS, MOBILE_IMPACTS).expect("ranking");

    assert_eq!(result.len(), MOBILE_EXPECTED.len());
    for (alternative, (identifier, score, rank)) in result.alternatives().iter().zip(MOBILE_EXPECTED) {
        assert_eq!(alternative.identifier(), identifier);
        assert!(
            (alternative.score() - score).abs() < SCORE_TOLERANCE,
            "{identifier}: expected {score}, got {}",
            alternative.score()
        );
        assert_eq!(alternative.rank().get(), rank, "{identifier}");
    }
}

#[test]
fn mobile_ranks_are_strict_and_gap_free() {
    let table = table_from_csv(MOBILE_CSV);
    let result = compute_ranking(&table, MOBILE_WEIGHTS, MOBILE_IMPACTS).expect("ranking");
    let mut ranks: Vec<usize> = result.ranks().map(|rank| rank.get()).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
}

#[test]
fn weights_act_as_relative_multipliers() {
    let table = table_from_csv(MOBILE_CSV);
    let quarter = compute_ranking(&table, MOBILE_WEIGHTS, MOBILE_IMPACTS).expect("ranking");
    let unit = compute_ranking(&table, "1,1,1,1", MOBILE_IMPACTS).expect("ranking");
    for (a, b) in quarter.scores().zip(unit.scores()) {
        assert!((a - b).abs() < SCORE_TOLERANCE);
    }
}

fn three_phones(first: [&str; 3]) -> RawTable {
    raw_table(
        &["Id", "A", "B"],
        &[&["x", first[0], "4"], &["y", first[1], "1"], &["z", first[2], "6"]],
    )
}

fn assert_scores_match(got: &[f64], want: &[f64]) {
    assert!(got.iter().all(|score| score.is_finite()), "non-finite scores: {got:?}");
    for (a, b) in got.iter().zip(want) {
        assert!((a - b).abs() < SCORE_TOLERANCE, "{got:?} vs {want:?}");
    }
}

#[rstest]
#[case::huge("1e300,1e300")]
#[case::subnormal("1e-320,1e-320")]
fn uniform_weights_of_any_magnitude_rank_like_unit_weights(#[case] weights: &str) {
    let table = three_phones(["1", "3", "2"]);
    let scaled = compute_ranking(&table, weights, "+,-").expect("ranking");
    let unit = compute_ranking(&table, "1,1", "+,-").expect("ranking");
    assert_scores_match(
        &scaled.scores().collect::<Vec<_>>(),
        &unit.scores().collect::<Vec<_>>(),
    );
    assert!(scaled.ranks().eq(unit.ranks()));
}

#[rstest]
#[case::huge(["1e200", "3e200", "2e200"])]
#[case::tiny(["1e-300", "3e-300", "2e-300"])]
fn cell_magnitude_does_not_change_the_ranking(#[case] first: [&str; 3]) {
    let scaled = compute_ranking(&three_phones(first), "1,1", "+,-").expect("ranking");
    let plain = compute_ranking(&three_phones(["1", "3", "2"]), "1,1", "+,-").expect("ranking");
    assert_scores_match(
        &scaled.scores().collect::<Vec<_>>(),
        &plain.scores().collect::<Vec<_>>(),
    );
    assert!(scaled.ranks().eq(plain.ranks()));
}

#[test]
fn result_records_render_with_stable_precision() {
    let table = table_from_csv(MOBILE_CSV);
    let result = compute_ranking(&table, MOBILE_WEIGHTS, MOBILE_IMPACTS).expect("ranking");
    assert_eq!(
        result.headers(),
        &["Model", "Price", "Storage", "Camera", "Looks", "Topsis Score", "Rank"]
    );
    let records: Vec<Vec<String>> = result.records(ScoreFormat::Fixed(4)).collect();
    assert_eq!(records[2], vec!["C", "300", "32", "16", "4", "0.8095", "1"]);
}

#[test]
fn duplicate_rows_share_a_rank() {
    let table = raw_table(
        &["Id", "A", "B"],
        &[&["p", "1", "9"], &["q", "5", "5"], &["p", "1", "9"]],
    );
    let result = compute_ranking(&table, "1,1", "+,+").expect("ranking");
    let ranks: Vec<usize> = result.ranks().map(|rank| rank.get()).collect();
    assert_eq!(ranks.first(), ranks.last());
    let mut distinct = ranks.clone();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(distinct, vec![1, 2]);
}

fn mobile_with_looks(looks: [&str; 4]) -> RawTable {
    raw_table(
        &["Model", "Price", "Storage", "Camera", "Looks"],
        &[
            &["A", "250", "16", "12", looks[0]],
            &["B", "200", "16", "8", looks[1]],
            &["C", "300", "32", "16", looks[2]],
            &["D", "275", "32", "8", looks[3]],
        ],
    )
}

#[rstest]
#[case::two_columns(
    raw_table(&["Id", "A"], &[&["x", "1"]]),
    "1,1",
    "+,+",
    ErrorKind::Schema
)]
#[case::non_numeric_cell(mobile_with_looks(["5", "3", "good", "4"]), MOBILE_WEIGHTS, MOBILE_IMPACTS, ErrorKind::Type)]
#[case::weights_without_comma(mobile_with_looks(["5", "3", "4", "4"]), "1", MOBILE_IMPACTS, ErrorKind::Format)]
#[case::count_mismatch(mobile_with_looks(["5", "3", "4", "4"]), "1,1,1", "+,+,+", ErrorKind::CountMismatch)]
#[case::weights_and_impacts_disagree(mobile_with_looks(["5", "3", "4", "4"]), "1,1,1,1", "+,+,+", ErrorKind::CountMismatch)]
#[case::non_numeric_weight(mobile_with_looks(["5", "3", "4", "4"]), "1,a,1,1", MOBILE_IMPACTS, ErrorKind::Type)]
#[case::impact_x(mobile_with_looks(["5", "3", "4", "4"]), MOBILE_WEIGHTS, "+,+,x,-", ErrorKind::Value)]
#[case::zero_column(mobile_with_looks(["0", "0", "0", "0"]), MOBILE_WEIGHTS, MOBILE_IMPACTS, ErrorKind::DegenerateColumn)]
fn malformed_input_fails_with_classified_error(
    #[case] table: RawTable,
    #[case] weights: &str,
    #[case] impacts: &str,
    #[case] expected: ErrorKind,
) {
    let err = compute_ranking(&table, weights, impacts).expect_err("input must be rejected");
    assert_eq!(err.kind(), expected, "unexpected error: {err}");
}

#[test]
fn zero_column_names_the_criterion() {
    let err = compute_ranking(&mobile_with_looks(["0", "0", "0", "0"]), MOBILE_WEIGHTS, MOBILE_IMPACTS)
        .expect_err("zero column must fail");
    assert!(
        matches!(&err, TopsisError::DegenerateColumn { criterion: 3, name, .. } if name == "Looks"),
        "unexpected error: {err:?}"
    );
}

#[test]
fn non_numeric_error_message_locates_the_cell() {
    let err = compute_ranking(
        &mobile_with_looks(["5", "3", "good", "4"]),
        MOBILE_WEIGHTS,
        MOBILE_IMPACTS,
    )
    .expect_err("non-numeric cell must fail");
    assert_eq!(
        err.to_string(),
        "criterion columns must contain numeric values only: row 2 column `Looks` (4) = `good`"
    );
}
