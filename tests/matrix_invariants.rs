use std::collections::BTreeSet;

use bloomgrid::{build_matrix, FrequencyRecord, MatrixSpec};

fn corpus() -> Vec<FrequencyRecord> {
    vec![
        FrequencyRecord::new("BT1", "listar", 9, vec![1, 2]),
        FrequencyRecord::new("BT1", "analisar", 3, vec![3]),
        FrequencyRecord::new("BT2", "analisar", 7, vec![4]),
        FrequencyRecord::new("BT2", "explicar", 7, vec![5]),
        FrequencyRecord::new("BT4", "analisar", 5, vec![6, 7]),
        FrequencyRecord::new("BT4", "comparar", 1, vec![8]),
        FrequencyRecord::new("BT6", "criar", 4, vec![9]),
        // Duplicate pair, aggregated on top of the BT2 row above.
        FrequencyRecord::new("BT2", "analisar", 2, vec![10]),
    ]
}

fn bloom_spec() -> MatrixSpec {
    MatrixSpec {
        reference_category: Some("BT2".to_string()),
        ..MatrixSpec::default()
    }
}

#[test]
fn row_labels_equal_declared_categories_in_order() {
    let matrix = build_matrix(&corpus(), &bloom_spec()).expect("matrix");
    assert_eq!(
        matrix.categories(),
        ["BT1", "BT2", "BT3", "BT4", "BT5", "BT6"]
    );
    assert_eq!(matrix.row_count(), 6);
}

#[test]
fn keyword_totals_match_aggregated_input() {
    let matrix = build_matrix(&corpus(), &bloom_spec()).expect("matrix");
    assert_eq!(matrix.keyword_total("analisar"), Some(3 + 7 + 5 + 2));
    assert_eq!(matrix.keyword_total("listar"), Some(9));
    assert_eq!(matrix.keyword_total("comparar"), Some(1));
}

#[test]
fn raising_min_total_frequency_is_monotonic() {
    let corpus = corpus();
    let mut previous: Option<BTreeSet<String>> = None;
    for threshold in [1, 4, 7, 10, 15] {
        let spec = MatrixSpec {
            min_total_frequency: threshold,
            ..bloom_spec()
        };
        let matrix = build_matrix(&corpus, &spec).expect("matrix");
        let surviving: BTreeSet<String> = matrix.keywords().map(String::from).collect();
        if let Some(previous) = &previous {
            assert!(
                surviving.is_subset(previous),
                "threshold {threshold} grew the keyword set"
            );
        }
        previous = Some(surviving);
    }
}

#[test]
fn reference_row_is_descending_with_lexicographic_ties() {
    let matrix = build_matrix(&corpus(), &bloom_spec()).expect("matrix");
    let reference_row = matrix.row("BT2").expect("row");
    for pair in reference_row.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
    // "analisar" (9 in BT2 after aggregation) outranks "explicar" (7); the
    // zero-valued keywords trail in ascending name order.
    assert_eq!(
        matrix.keywords().collect::<Vec<_>>(),
        ["analisar", "explicar", "comparar", "criar", "listar"]
    );
}

#[test]
fn identical_inputs_build_identical_matrices() {
    let spec = bloom_spec();
    let first = build_matrix(&corpus(), &spec).expect("matrix");
    let second = build_matrix(&corpus(), &spec).expect("matrix");
    assert_eq!(first, second);
}

#[test]
fn allow_list_then_floor_combine_without_readding() {
    let allow: BTreeSet<String> = ["analisar", "comparar"]
        .into_iter()
        .map(String::from)
        .collect();
    let spec = MatrixSpec {
        included_keywords: Some(allow),
        min_total_frequency: 2,
        ..bloom_spec()
    };
    let matrix = build_matrix(&corpus(), &spec).expect("matrix");
    // "comparar" passes the allow-list but not the floor; nothing outside
    // the allow-list can reappear.
    assert_eq!(matrix.keywords().collect::<Vec<_>>(), ["analisar"]);
}

#[test]
fn spec_scenario_two_categories() {
    let records = vec![
        FrequencyRecord::new("BT1", "analisar", 3, vec![1]),
        FrequencyRecord::new("BT1", "criar", 5, vec![2]),
        FrequencyRecord::new("BT2", "analisar", 7, vec![3]),
    ];
    let spec = MatrixSpec {
        declared_categories: vec!["BT1".to_string(), "BT2".to_string()],
        reference_category: Some("BT2".to_string()),
        ..MatrixSpec::default()
    };
    let matrix = build_matrix(&records, &spec).expect("matrix");
    assert_eq!(matrix.categories(), ["BT1", "BT2"]);
    assert_eq!(matrix.keywords().collect::<Vec<_>>(), ["analisar", "criar"]);
    assert_eq!(matrix.value("BT1", "analisar"), Some(3));
    assert_eq!(matrix.value("BT1", "criar"), Some(5));
    assert_eq!(matrix.value("BT2", "analisar"), Some(7));
    assert_eq!(matrix.value("BT2", "criar"), Some(0));

    let filtered = build_matrix(
        &records,
        &MatrixSpec {
            min_total_frequency: 6,
            ..spec
        },
    )
    .expect("matrix");
    assert_eq!(filtered.keywords().collect::<Vec<_>>(), ["analisar"]);
    assert_eq!(filtered.column_count(), 1);
}

#[test]
fn matrix_round_trips_through_serde() {
    let matrix = build_matrix(&corpus(), &bloom_spec()).expect("matrix");
    let encoded = serde_json::to_string(&matrix).expect("encode");
    let decoded: bloomgrid::FrequencyMatrix = serde_json::from_str(&encoded).expect("decode");
    assert_eq!(decoded, matrix);
}
