//! MoveTask policy tests: identity no-ops, remove-then-insert ordering,
//! and cross-lane relocation.

use super::support::{
    assert_consistent, board_id, column_id, lane, sample_state, sample_task, task_id,
};
use crate::domain::{AppState, TaskId};
use crate::store::{DropPosition, DropResult, Transition, apply};
use eyre::ensure;
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};
use std::sync::Arc;

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn move_request(task: &str, from: (&str, usize), to: (&str, usize)) -> Transition {
    Transition::MoveTask {
        board_id: board_id("b1"),
        drop: DropResult::dropped(
            task_id(task),
            DropPosition::new(column_id(from.0), from.1),
            DropPosition::new(column_id(to.0), to.1),
        ),
    }
}

/// Extends the fixture lane to `c1 = [t1, t2, t3]`.
fn three_task_state(clock: &impl Clock) -> Arc<AppState> {
    apply(
        &sample_state(clock),
        &Transition::AddTask {
            board_id: board_id("b1"),
            column_id: column_id("c1"),
            task: sample_task("t3", clock),
        },
        clock,
    )
}

#[rstest]
fn cancelled_drag_returns_the_same_allocation(clock: DefaultClock) {
    let before = sample_state(&clock);
    let after = apply(
        &before,
        &Transition::MoveTask {
            board_id: board_id("b1"),
            drop: DropResult::cancelled(task_id("t1"), DropPosition::new(column_id("c1"), 0)),
        },
        &clock,
    );

    assert!(Arc::ptr_eq(&before, &after));
}

#[rstest]
fn dropping_at_the_picked_up_position_returns_the_same_allocation(clock: DefaultClock) {
    let before = sample_state(&clock);
    let after = apply(&before, &move_request("t1", ("c1", 0), ("c1", 0)), &clock);

    assert!(Arc::ptr_eq(&before, &after));
}

#[rstest]
fn reorders_within_a_lane(clock: DefaultClock) {
    let state = apply(
        &sample_state(&clock),
        &move_request("t1", ("c1", 0), ("c1", 1)),
        &clock,
    );

    assert_consistent(&state);
    assert_eq!(lane(&state, "b1", "c1"), vec![task_id("t2"), task_id("t1")]);
}

// The destination index addresses the lane with the moved id already
// removed, which yields the conventional drag-and-drop reordering.
#[rstest]
#[case(0, 1, ["t2", "t1", "t3"])]
#[case(0, 2, ["t2", "t3", "t1"])]
#[case(2, 0, ["t3", "t1", "t2"])]
#[case(1, 2, ["t1", "t3", "t2"])]
fn same_lane_moves_follow_remove_then_insert_order(
    #[case] source_index: usize,
    #[case] destination_index: usize,
    #[case] expected: [&'static str; 3],
    clock: DefaultClock,
) {
    let state = three_task_state(&clock);
    let moved = lane(&state, "b1", "c1")
        .get(source_index)
        .expect("fixture lane should cover the source index")
        .clone();

    let after = apply(
        &state,
        &move_request(moved.as_str(), ("c1", source_index), ("c1", destination_index)),
        &clock,
    );

    let want: Vec<TaskId> = expected.iter().map(|id| task_id(id)).collect();
    assert_eq!(lane(&after, "b1", "c1"), want);
}

#[rstest]
fn moves_between_lanes(clock: DefaultClock) -> eyre::Result<()> {
    let before = sample_state(&clock);
    let original_task = before
        .board(&board_id("b1"))
        .and_then(|board| board.task(&task_id("t1")))
        .expect("fixture task should exist")
        .clone();

    let after = apply(&before, &move_request("t1", ("c1", 0), ("c2", 0)), &clock);

    assert_consistent(&after);
    ensure!(lane(&after, "b1", "c1") == vec![task_id("t2")]);
    ensure!(lane(&after, "b1", "c2") == vec![task_id("t1")]);

    // Only lane membership changed; the task entity is untouched.
    let moved_task = after
        .board(&board_id("b1"))
        .and_then(|board| board.task(&task_id("t1")))
        .expect("task should remain");
    ensure!(*moved_task == original_task);
    Ok(())
}

#[rstest]
fn moves_into_the_middle_of_another_lane(clock: DefaultClock) {
    let mut state = apply(
        &sample_state(&clock),
        &Transition::AddTask {
            board_id: board_id("b1"),
            column_id: column_id("c2"),
            task: sample_task("t3", &clock),
        },
        &clock,
    );
    state = apply(&state, &move_request("t1", ("c1", 0), ("c2", 1)), &clock);

    assert_eq!(lane(&state, "b1", "c2"), vec![task_id("t3"), task_id("t1")]);
}

#[rstest]
fn destination_index_clamps_to_the_lane_end(clock: DefaultClock) {
    let state = apply(
        &sample_state(&clock),
        &move_request("t1", ("c1", 0), ("c1", 99)),
        &clock,
    );

    assert_consistent(&state);
    assert_eq!(lane(&state, "b1", "c1"), vec![task_id("t2"), task_id("t1")]);
}

#[rstest]
fn move_on_a_missing_board_returns_the_same_allocation(clock: DefaultClock) {
    let before = sample_state(&clock);
    let after = apply(
        &before,
        &Transition::MoveTask {
            board_id: board_id("ghost"),
            drop: DropResult::dropped(
                task_id("t1"),
                DropPosition::new(column_id("c1"), 0),
                DropPosition::new(column_id("c2"), 0),
            ),
        },
        &clock,
    );

    assert!(Arc::ptr_eq(&before, &after));
}

#[rstest]
fn move_naming_a_missing_lane_returns_the_same_allocation(clock: DefaultClock) {
    let before = sample_state(&clock);
    let after = apply(&before, &move_request("t1", ("c1", 0), ("ghost", 0)), &clock);

    assert!(Arc::ptr_eq(&before, &after));
}
