use birdcall::domain::{
    ClassificationResult, ClassificationSet, ClassificationSetError, Label, confidence_percent,
};

#[test]
fn given_duplicate_labels_when_building_set_then_rejects() {
    let result = ClassificationSet::new(vec![
        ClassificationResult::new("sum", 0.4),
        ClassificationResult::new("sum", 0.6),
    ]);

    assert_eq!(
        result,
        Err(ClassificationSetError::DuplicateLabel(Label::new("sum")))
    );
}

#[test]
fn given_score_above_one_when_building_set_then_rejects() {
    let result = ClassificationSet::new(vec![ClassificationResult::new("sum", 1.2)]);

    assert!(matches!(
        result,
        Err(ClassificationSetError::InvalidScore { .. })
    ));
}

#[test]
fn given_nan_score_when_building_set_then_rejects() {
    let result = ClassificationSet::new(vec![ClassificationResult::new("sum", f32::NAN)]);

    assert!(matches!(
        result,
        Err(ClassificationSetError::InvalidScore { .. })
    ));
}

#[test]
fn given_unordered_results_when_ranking_then_orders_by_descending_score() {
    let set = ClassificationSet::new(vec![
        ClassificationResult::new("a", 0.1),
        ClassificationResult::new("b", 0.7),
        ClassificationResult::new("c", 0.2),
    ])
    .unwrap();

    let ranked: Vec<&str> = set.ranked().iter().map(|r| r.label.as_str()).collect();

    assert_eq!(ranked, vec!["b", "c", "a"]);
    assert_eq!(set.top().map(|r| r.label.as_str()), Some("b"));
}

#[test]
fn given_empty_set_when_asking_for_top_then_returns_none() {
    let set = ClassificationSet::new(Vec::new()).unwrap();

    assert!(set.is_empty());
    assert!(set.top().is_none());
}

#[test]
fn given_scores_when_converting_to_percent_then_rounds_to_nearest() {
    assert_eq!(confidence_percent(0.734), 73);
    assert_eq!(confidence_percent(0.735), 74);
    assert_eq!(confidence_percent(1.0), 100);
    assert_eq!(confidence_percent(0.0), 0);
}
