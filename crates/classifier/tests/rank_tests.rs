use classifier::{LabelTable, Prediction, Scores, UNKNOWN_LABEL, rank};

fn labels(names: &[&str]) -> LabelTable {
    names.iter().copied().collect()
}

fn ids(predictions: &[Prediction]) -> Vec<&str> {
    predictions.iter().map(|p| p.class_id.as_str()).collect()
}

#[test]
fn test_rank_reference_scenario() {
    let scores = Scores::F32(vec![0.05, 0.9, 0.3, 0.12, 0.02]);
    let result = rank(&scores, &labels(&["a", "b", "c", "d", "e"]), 0.1, 3);

    let expected = [("1", "b", 0.9), ("2", "c", 0.3), ("3", "d", 0.12)];
    assert_eq!(result.len(), expected.len());
    for (prediction, (id, label, confidence)) in result.iter().zip(expected) {
        assert_eq!(prediction.class_id, id);
        assert_eq!(prediction.label, label);
        assert_eq!(prediction.confidence, confidence);
    }
}

#[test]
fn test_rank_all_below_threshold_is_empty() {
    let scores = Scores::F32(vec![0.05, 0.09, 0.1, 0.0]);
    let result = rank(&scores, &labels(&["a", "b", "c", "d"]), 0.1, 10);
    assert!(result.is_empty());
}

#[test]
fn test_rank_threshold_is_exclusive() {
    // 51 / 255 is exactly 0.2
    let scores = Scores::U8(vec![51, 52]);
    let result = rank(&scores, &labels(&["a", "b"]), 0.2, 10);
    assert_eq!(ids(&result), vec!["1"]);
}

#[test]
fn test_rank_never_exceeds_k() {
    let scores = Scores::U8((0..=255).collect());
    let table: LabelTable = (0..256).map(|i| format!("class{}", i)).collect();
    for k in [1, 2, 10, 300] {
        let result = rank(&scores, &table, 0.1, k);
        assert!(result.len() <= k);
    }
    assert!(rank(&scores, &table, 0.1, 0).is_empty());
}

#[test]
fn test_rank_length_is_min_of_passing_and_k() {
    let scores = Scores::F32(vec![0.5, 0.6, 0.05, 0.7]);
    let table = labels(&["a", "b", "c", "d"]);
    assert_eq!(rank(&scores, &table, 0.1, 2).len(), 2);
    assert_eq!(rank(&scores, &table, 0.1, 10).len(), 3);
}

#[test]
fn test_rank_descending_with_index_tie_break() {
    let scores = Scores::F32(vec![0.2, 0.8, 0.5, 0.8, 0.5]);
    let result = rank(&scores, &labels(&["a", "b", "c", "d", "e"]), 0.1, 10);
    assert_eq!(ids(&result), vec!["1", "3", "2", "4", "0"]);
    for pair in result.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
}

#[test]
fn test_rank_equal_maxima_keep_lower_index_when_truncated() {
    let scores = Scores::U8(vec![10, 200, 30, 200]);
    let result = rank(&scores, &labels(&["a", "b", "c", "d"]), 0.1, 1);
    assert_eq!(ids(&result), vec!["1"]);
}

#[test]
fn test_rank_is_true_top_k() {
    // a barely-passing low index must not crowd out the best high index
    let mut raw = vec![0.0f32; 1000];
    raw[0] = 0.11;
    raw[1] = 0.12;
    raw[998] = 0.95;
    raw[999] = 0.5;
    let table: LabelTable = (0..1000).map(|i| i.to_string()).collect();
    let result = rank(&Scores::F32(raw), &table, 0.1, 2);
    assert_eq!(ids(&result), vec!["998", "999"]);
}

#[test]
fn test_rank_unknown_label_past_table() {
    let scores = Scores::F32(vec![0.2, 0.3, 0.9]);
    let result = rank(&scores, &labels(&["a", "b"]), 0.1, 10);
    assert_eq!(result[0].class_id, "2");
    assert_eq!(result[0].label, UNKNOWN_LABEL);
    assert_eq!(result[1].label, "b");
}

#[test]
fn test_rank_byte_scores_divide_by_255() {
    let scores = Scores::U8(vec![255, 0, 128]);
    let result = rank(&scores, &labels(&["a", "b", "c"]), 0.1, 10);
    assert_eq!(result[0].confidence, 1.0);
    assert!((result[1].confidence - 128.0 / 255.0).abs() < 1e-6);
}

#[test]
fn test_rank_float_scores_are_not_rescaled() {
    let scores = Scores::F32(vec![0.9]);
    let result = rank(&scores, &labels(&["a"]), 0.1, 10);
    assert_eq!(result[0].confidence, 0.9);
}

#[test]
fn test_rank_drops_nan() {
    let scores = Scores::F32(vec![f32::NAN, 0.4]);
    let result = rank(&scores, &labels(&["a", "b"]), 0.1, 10);
    assert_eq!(ids(&result), vec!["1"]);
}

#[test]
fn test_prediction_display() {
    let prediction = Prediction {
        class_id: "281".to_string(),
        label: "tabby".to_string(),
        confidence: 0.734,
    };
    assert_eq!(prediction.to_string(), "[281] tabby (73.4%)");
}

#[test]
fn test_rank_clamps_out_of_range_float_scores() {
    let scores = Scores::F32(vec![5.3, -2.0, 0.4]);
    let result = rank(&scores, &labels(&["a", "b", "c"]), 0.1, 10);

    assert_eq!(ids(&result), vec!["0", "2"]);
    assert_eq!(result[0].confidence, 1.0);
    assert!(result.iter().all(|p| (0.0..=1.0).contains(&p.confidence)));
    assert_eq!(result[0].to_string(), "[0] a (100.0%)");
}

#[test]
fn test_scores_confidence_normalizes_once() {
    let bytes = Scores::U8(vec![0, 51, 255]);
    assert_eq!(bytes.confidence(1), Some(0.2));
    assert_eq!(bytes.confidence(2), Some(1.0));
    assert_eq!(bytes.confidence(3), None);

    let floats = Scores::F32(vec![0.25, 1.5, -0.5]);
    assert_eq!(floats.confidences().collect::<Vec<_>>(), vec![0.25, 1.0, 0.0]);
    assert!(Scores::F32(vec![f32::NAN]).confidence(0).unwrap().is_nan());
}
