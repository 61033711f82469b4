//! Property-based invariant tests for the dock controller.
//!
//! ## Invariants
//!
//! 1. Settlement: once every pending transition has fired, the stage is
//!    `Collapsed` or `FullyExpanded`.
//! 2. Single chain: no more than one chain's worth of steps is ever pending.
//! 3. Path: every stage change is either a command entry or a scheduled
//!    edge of the stage graph.
//! 4. Reduced motion: commands never schedule anything.
//! 5. Unmount: after unmount the stage never changes again.

use std::cell::RefCell;
use std::rc::Rc;

use fdock::{ChainScheduler, DockController, DockOptions, Stage, VirtualClock};
use proptest::prelude::*;

// ── Strategies ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Op {
    Expand,
    Collapse,
    Toggle,
    Advance(u64),
    SetDisabled(bool),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Expand),
        3 => Just(Op::Collapse),
        3 => Just(Op::Toggle),
        5 => (0u64..1_200).prop_map(Op::Advance),
        1 => any::<bool>().prop_map(Op::SetDisabled),
    ]
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(arb_op(), 1..60)
}

type Dock = DockController<ChainScheduler<Stage, VirtualClock>>;
type Changes = Rc<RefCell<Vec<(Stage, Stage)>>>;

fn recording_dock(options: DockOptions) -> (VirtualClock, Dock, Changes) {
    let clock = VirtualClock::new();
    let changes: Changes = Rc::default();
    let sink = Rc::clone(&changes);
    let dock = DockController::with_options(options, ChainScheduler::new(clock.clone()))
        .on_stage_change(move |from, to| sink.borrow_mut().push((from, to)));
    (clock, dock, changes)
}

fn apply(op: Op, clock: &VirtualClock, dock: &mut Dock) {
    match op {
        Op::Expand => dock.expand(),
        Op::Collapse => dock.collapse(),
        Op::Toggle => dock.toggle(),
        Op::Advance(ms) => {
            clock.advance_ms(ms);
            dock.poll();
        }
        Op::SetDisabled(disabled) => dock.set_disabled(disabled),
    }
}

fn is_command_entry(to: Stage) -> bool {
    matches!(
        to,
        Stage::WidthExpanding | Stage::ContentFadingOut | Stage::FullyExpanded | Stage::Collapsed
    )
}

// ── 1 + 2. Settlement and single chain ────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn settles_to_terminal_stage(ops in arb_ops(), open in any::<bool>()) {
        let (clock, mut dock, _) = recording_dock(DockOptions::new().default_expanded(open));
        for op in ops {
            apply(op, &clock, &mut dock);
            prop_assert!(dock.pending_transitions() <= 3);
            if dock.pending_transitions() == 0 {
                prop_assert!(dock.stage().is_terminal(), "stuck at {}", dock.stage());
            }
        }
        clock.advance_ms(5_000);
        dock.poll();
        prop_assert_eq!(dock.pending_transitions(), 0);
        prop_assert!(dock.stage().is_terminal());
        prop_assert!(dock.is_settled());
    }

    #[test]
    fn last_effective_command_decides_final_stage(ops in arb_ops()) {
        let (clock, mut dock, _) = recording_dock(DockOptions::new());
        let mut expected = Stage::Collapsed;
        for op in ops {
            let disabled = dock.is_disabled();
            let was_expanded = dock.is_expanded();
            apply(op, &clock, &mut dock);
            if disabled {
                continue;
            }
            match op {
                Op::Expand => expected = Stage::FullyExpanded,
                Op::Collapse => expected = Stage::Collapsed,
                Op::Toggle if was_expanded => expected = Stage::Collapsed,
                Op::Toggle => expected = Stage::FullyExpanded,
                Op::Advance(_) | Op::SetDisabled(_) => {}
            }
        }
        clock.advance_ms(5_000);
        dock.poll();
        prop_assert_eq!(dock.stage(), expected);
    }
}

// ── 3. Path ───────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn every_change_is_command_entry_or_scheduled_edge(ops in arb_ops()) {
        let (clock, mut dock, changes) = recording_dock(DockOptions::new());
        for op in ops {
            apply(op, &clock, &mut dock);
        }
        for &(from, to) in changes.borrow().iter() {
            prop_assert_ne!(from, to);
            prop_assert!(
                from.next_scheduled() == Some(to) || is_command_entry(to),
                "illegal change {} -> {}", from, to
            );
        }
    }
}

// ── 4. Reduced motion ─────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn reduced_motion_never_schedules(ops in arb_ops()) {
        let (clock, mut dock, _) = recording_dock(DockOptions::new().reduced_motion(true));
        for op in ops {
            apply(op, &clock, &mut dock);
            prop_assert!(dock.stage().is_terminal());
            prop_assert_eq!(dock.pending_transitions(), 0);
        }
        prop_assert_eq!(dock.scheduler().chains_scheduled(), 0);
    }
}

// ── 5. Unmount ────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn unmount_freezes_stage(before in arb_ops(), after in arb_ops()) {
        let (clock, mut dock, changes) = recording_dock(DockOptions::new());
        for op in before {
            apply(op, &clock, &mut dock);
        }
        dock.unmount();
        let frozen = dock.stage();
        let seen = changes.borrow().len();
        prop_assert_eq!(dock.pending_transitions(), 0);

        for op in after {
            apply(op, &clock, &mut dock);
        }
        clock.advance_ms(5_000);
        dock.poll();
        prop_assert_eq!(dock.stage(), frozen);
        prop_assert_eq!(changes.borrow().len(), seen);
    }
}
