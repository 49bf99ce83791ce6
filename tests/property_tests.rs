//! Property-based tests for machine execution.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated input sequences.

use mealy::{MealyMachine, Node};
use proptest::prelude::*;

fn detector() -> MealyMachine<i32, i64> {
    let mut fsm = MealyMachine::new("S0");
    fsm.add_node(Node::new("S0").on(1, "S1", "Output_A").with_transition(0, "S0"));
    fsm.add_node(Node::new("S1").on(1, "S1", "Output_C").on(0, "S0", "Output_D"));
    fsm.add_node(Node::new("S2").on(2, "S0", "Reset"));
    fsm
}

prop_compose! {
    fn arbitrary_symbol()(symbol in prop::option::weighted(0.9, -1..4i32)) -> Option<i32> {
        symbol
    }
}

prop_compose! {
    fn arbitrary_inputs()(
        inputs in prop::collection::vec((any::<i64>(), arbitrary_symbol()), 0..40)
    ) -> Vec<(i64, Option<i32>)> {
        inputs
    }
}

proptest! {
    #[test]
    fn execution_is_deterministic(inputs in arbitrary_inputs()) {
        let mut first = detector();
        let mut second = detector();

        first.execute(inputs.clone()).unwrap();
        second.execute(inputs).unwrap();

        prop_assert_eq!(first.state_history(), second.state_history());
        prop_assert_eq!(first.output_history(), second.output_history());
        prop_assert_eq!(first.current_state(), second.current_state());
    }

    #[test]
    fn split_execution_is_cumulative(inputs in arbitrary_inputs(), split in 0..40usize) {
        let split = split.min(inputs.len());
        let mut whole = detector();
        let mut parts = detector();

        whole.execute(inputs.clone()).unwrap();
        parts.execute(inputs[..split].to_vec()).unwrap();
        parts.execute(inputs[split..].to_vec()).unwrap();

        prop_assert_eq!(whole.state_history(), parts.state_history());
        prop_assert_eq!(whole.output_history(), parts.output_history());
        prop_assert_eq!(whole.current_state(), parts.current_state());
    }

    #[test]
    fn one_state_entry_per_input(inputs in arbitrary_inputs()) {
        let mut fsm = detector();
        fsm.execute(inputs.clone()).unwrap();

        prop_assert_eq!(fsm.state_history().len(), inputs.len());
        prop_assert!(fsm.output_history().len() <= fsm.state_history().len());
        prop_assert_eq!(fsm.path().len(), inputs.len() + 1);
        prop_assert_eq!(*fsm.path().last().unwrap(), fsm.current_state());
    }

    #[test]
    fn order_keys_are_carried_through(inputs in arbitrary_inputs()) {
        let mut fsm = detector();
        fsm.execute(inputs.clone()).unwrap();

        let keys: Vec<i64> = fsm.state_history().keys().copied().collect();
        let expected: Vec<i64> = inputs.iter().map(|(key, _)| *key).collect();
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn unmapped_symbol_self_loops(symbol in 5..1000i32, key in any::<i64>()) {
        let mut fsm = detector();
        fsm.execute([(key, symbol)]).unwrap();

        prop_assert_eq!(fsm.current_state(), "S0");
        prop_assert_eq!(fsm.state_history().pairs(), vec![(key, "S0")]);
        prop_assert!(fsm.output_history().is_empty());
    }

    #[test]
    fn states_stay_within_registered_nodes(inputs in arbitrary_inputs()) {
        let mut fsm = detector();
        fsm.execute(inputs).unwrap();

        for state in fsm.state_history().values() {
            prop_assert!(fsm.contains_node(state));
        }
    }
}
