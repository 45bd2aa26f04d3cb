//! Property tests over arbitrary button and timing sequences

use proptest::prelude::*;

use super::Sequencer;
use crate::config::TimingConfig;
use crate::state::{State, StateQueue, QUEUE_LEN};
use crate::testing::MockMotor;
use crate::traits::ButtonLevels;

/// One loop iteration: how far the clock moved and what was held
#[derive(Debug, Clone, Copy)]
struct Step {
    delta_us: u64,
    buttons: ButtonLevels,
}

fn any_state() -> impl Strategy<Value = State> {
    prop_oneof![
        Just(State::Idle),
        Just(State::Countdown),
        Just(State::Extending),
        Just(State::Retracting),
    ]
}

fn any_buttons() -> impl Strategy<Value = ButtonLevels> {
    (any::<bool>(), any::<bool>()).prop_map(|(advance, retract)| ButtonLevels { advance, retract })
}

fn any_step() -> impl Strategy<Value = Step> {
    // Mostly loop-sized steps, with the occasional long jump past a stroke
    let delta = prop_oneof![
        8 => 0u64..2_000,
        1 => 400_000u64..700_000,
        1 => 0u64..30_000_000,
    ];
    (delta, any_buttons()).prop_map(|(delta_us, buttons)| Step { delta_us, buttons })
}

fn any_sequencer() -> impl Strategy<Value = Sequencer> {
    (
        proptest::array::uniform6(any_state()),
        0u64..20_000_000,
        0u64..1_000_000,
        any::<bool>(),
    )
        .prop_map(|(slots, next, last, extended)| {
            Sequencer::with_state(
                StateQueue::from_slots(slots),
                next.max(last),
                last,
                extended,
                TimingConfig::default(),
            )
        })
}

proptest! {
    #[test]
    fn queue_stays_full_and_idle_padded(
        mut seq in any_sequencer(),
        steps in proptest::collection::vec(any_step(), 1..300),
    ) {
        let mut motor = MockMotor::new();
        let mut now = seq.last_transition_us();

        for step in steps {
            now += step.delta_us;
            if seq.advance_if_due(now, &mut motor).is_some() {
                prop_assert_eq!(seq.queue().as_slice().len(), QUEUE_LEN);
                prop_assert_eq!(seq.queue().get(QUEUE_LEN - 1), Some(State::Idle));
            }
            seq.apply_input(now, step.buttons);
            prop_assert_eq!(seq.queue().as_slice().len(), QUEUE_LEN);
        }
    }

    #[test]
    fn deadlines_never_precede_when_set(
        mut seq in any_sequencer(),
        steps in proptest::collection::vec(any_step(), 1..300),
    ) {
        let mut motor = MockMotor::new();
        let mut now = seq.last_transition_us();

        for step in steps {
            now += step.delta_us;

            let before = seq.next_transition_us();
            seq.advance_if_due(now, &mut motor);
            if seq.next_transition_us() != before {
                prop_assert!(seq.next_transition_us() >= now);
            }

            let before = seq.next_transition_us();
            seq.apply_input(now, step.buttons);
            if seq.next_transition_us() != before {
                prop_assert!(seq.next_transition_us() >= now);
            }
        }
    }

    #[test]
    fn position_latches_only_on_completed_strokes(
        mut seq in any_sequencer(),
        steps in proptest::collection::vec(any_step(), 1..300),
    ) {
        let mut motor = MockMotor::new();
        let mut now = seq.last_transition_us();

        for step in steps {
            now += step.delta_us;

            let before = seq.is_extended();
            let interrupted = seq.is_interrupted();
            if let Some(t) = seq.advance_if_due(now, &mut motor) {
                let expected = match (t.from, interrupted) {
                    (State::Extending, false) => true,
                    (State::Retracting, false) => false,
                    _ => before,
                };
                prop_assert_eq!(seq.is_extended(), expected);
            }

            let before = seq.is_extended();
            seq.apply_input(now, step.buttons);
            prop_assert_eq!(seq.is_extended(), before);
        }
    }

    #[test]
    fn lockout_blocks_all_mutation(
        seq in any_sequencer(),
        offset in 0u64..500_000,
        buttons in any_buttons(),
    ) {
        prop_assume!(seq.active() != State::Idle);

        let mut seq = seq;
        let now = seq.last_transition_us() + offset;
        let queue = *seq.queue();
        let deadline = seq.next_transition_us();

        let outcome = seq.apply_input(now, buttons);
        prop_assert!(!outcome.is_action());
        prop_assert_eq!(*seq.queue(), queue);
        prop_assert_eq!(seq.next_transition_us(), deadline);
    }

    #[test]
    fn input_never_replaces_active_state(
        mut seq in any_sequencer(),
        now_offset in 0u64..20_000_000,
        buttons in any_buttons(),
    ) {
        let active = seq.active();
        let queue = *seq.queue();
        let deadline = seq.next_transition_us();
        let now = seq.last_transition_us() + now_offset;

        let outcome = seq.apply_input(now, buttons);

        prop_assert_eq!(seq.active(), active);
        if !outcome.is_action() {
            prop_assert_eq!(*seq.queue(), queue);
            prop_assert_eq!(seq.next_transition_us(), deadline);
        }
    }
}
