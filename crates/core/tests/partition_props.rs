use icicle_core::partition::partition;
use proptest::prelude::*;

proptest! {
    #[test]
    fn widths_are_proportional(weights in prop::collection::vec(0i64..1_000_000, 1..40), width in 1.0f64..10_000.0) {
        let sum: i64 = weights.iter().sum();
        let spans = partition(&weights, width);
        prop_assert_eq!(spans.len(), weights.len());
        let total: f64 = spans.iter().map(|(_, w)| w).sum();
        prop_assert!(total <= width + 1e-6);
        for ((offset, w), weight) in spans.iter().zip(&weights) {
            prop_assert!(offset.is_finite() && w.is_finite());
            if sum == 0 {
                prop_assert_eq!(*w, 0.0);
            } else {
                let expected = width * *weight as f64 / sum as f64;
                prop_assert!((w - expected).abs() <= 1e-9 * width.max(1.0));
            }
        }
    }

    #[test]
    fn spans_tile_without_overlap(weights in prop::collection::vec(1i64..1000, 1..40), width in 1.0f64..5000.0) {
        let spans = partition(&weights, width);
        for pair in spans.windows(2) {
            let (o0, w0) = pair[0];
            let (o1, _) = pair[1];
            prop_assert!((o0 + w0 - o1).abs() <= 1e-6);
        }
    }
}
