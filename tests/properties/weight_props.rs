//! Weight bounds and ordering.

use proptest::prelude::*;

use labskill::calculate_weights;

fn arb_steps() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-e]", 0..6), 1..6)
}

proptest! {
    #[test]
    fn weights_are_bounded_and_sorted(steps in arb_steps(), universe in prop::collection::vec("[a-f]", 1..6)) {
        prop_assume!(steps.iter().any(|s| !s.is_empty()));
        let weights = calculate_weights(&universe, &steps).unwrap();
        for entry in &weights {
            // avg position <= 1 and proportion <= 1, each rounded
            prop_assert!(entry.weight >= 0.0 && entry.weight <= 2.0);
        }
        let values: Vec<f64> = weights.iter().map(|e| e.weight).collect();
        prop_assert!(values.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn empty_steps_are_rejected(universe in prop::collection::vec("[a-f]", 1..4), count in 0usize..4) {
        let steps = vec![Vec::<String>::new(); count];
        prop_assert!(calculate_weights(&universe, &steps).is_err());
    }
}
