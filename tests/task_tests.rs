#![cfg(feature = "task")]
//! Integration tests for `Task<A>`.
//!
//! Covers:
//! - Laziness of composition and single resolution
//! - Fault and cancellation propagation through every combinator
//! - `rescue` and `catch_as` routing
//! - Aggregation in `zip`, `apply`, `sequence` and `traverse`
//! - Keyed joins
//! - Panics in callbacks becoming faults
//! - Executors and cancellation signals

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures::future::BoxFuture;
use monadkit::control::{Maybe, present};
use monadkit::task::{
    AggregateError, Executor, InlineExecutor, KeyMismatch, Outcome, PanicError, PredicateRejected,
    Task, TaskError, lift2, lift3, sequence, traverse,
};
use rstest::rstest;

fn counter() -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    (calls.clone(), calls)
}

fn fault_kind(outcome: &Outcome<impl Sized>) -> Maybe<String> {
    outcome.error().map(|error| error.message())
}

#[derive(Debug)]
struct Timeout;

impl fmt::Display for Timeout {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("timed out")
    }
}

impl std::error::Error for Timeout {}

// =============================================================================
// Construction and Resolution
// =============================================================================

#[rstest]
fn completed_task_resolves_to_value() {
    assert_eq!(Task::completed("done").wait(), Outcome::Completed("done"));
}

#[rstest]
fn faulted_task_keeps_its_error() {
    let error = TaskError::msg("broken");
    assert_eq!(Task::<i32>::faulted(error.clone()).wait(), Outcome::Faulted(error));
}

#[rstest]
fn result_future_maps_err_to_fault() {
    let task = Task::<i32>::from_result_future(async { Err::<i32, _>(Timeout) });
    let outcome = task.wait();
    assert!(matches!(&outcome, Outcome::Faulted(error) if error.is::<Timeout>()));
}

#[rstest]
#[tokio::test]
async fn new_defers_future_creation_until_awaited() {
    let (calls, seen) = counter();
    let task = Task::new(move || {
        calls.fetch_add(1, Ordering::SeqCst);
        async { 5 }
    });
    assert_eq!(seen.load(Ordering::SeqCst), 0);
    assert_eq!(task.await, Outcome::Completed(5));
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn spawned_task_runs_without_being_awaited() {
    let (calls, seen) = counter();
    let task = Task::spawn(async move {
        calls.fetch_add(1, Ordering::SeqCst);
        1
    });
    assert!(task.is_scheduled());
    tokio::task::yield_now().await;
    assert_eq!(task.await, Outcome::Completed(1));
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Functor, Monad and Filter
// =============================================================================

#[rstest]
fn map_then_filter_scenarios() {
    let accepted = Task::completed(10).map(|x| x * 2).filter(|x| *x > 15);
    assert_eq!(accepted.wait(), Outcome::Completed(20));

    let rejected = Task::completed(10).map(|x| x * 2).filter(|x| *x > 100).wait();
    assert!(matches!(&rejected, Outcome::Faulted(error) if error.is::<PredicateRejected>()));
    assert!(rejected.error().map(|error| error.is_cancellation_style()) == present(true));
}

struct Ticket {
    number: u32,
}

#[rstest]
fn filter_with_describes_values_without_debug() {
    let accepted = Task::completed(Ticket { number: 9 })
        .filter_with(|t| t.number > 5, |t| format!("ticket #{}", t.number))
        .map(|t| t.number)
        .wait();
    assert_eq!(accepted, Outcome::Completed(9));

    let (calls, seen) = counter();
    let rejected = Task::completed(Ticket { number: 2 })
        .filter_with(
            |t| t.number > 5,
            move |t| {
                calls.fetch_add(1, Ordering::SeqCst);
                format!("ticket #{}", t.number)
            },
        )
        .map(|t| t.number)
        .wait();
    let description = match &rejected {
        Outcome::Faulted(error) => error
            .downcast_ref::<PredicateRejected>()
            .map(|r| r.description().to_string()),
        _ => None,
    };
    assert_eq!(description, Some("ticket #2".to_string()));
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[rstest]
fn filter_rejection_message_uses_debug() {
    let outcome = Task::completed(3).filter(|x| *x > 5).wait();
    assert_eq!(
        fault_kind(&outcome),
        present("value 3 rejected by predicate".to_string())
    );
}

#[rstest]
fn select_and_select_many_aliases() {
    let outcome = Task::completed(2)
        .select(|x| x + 1)
        .select_many(|x| Task::completed(x * 10))
        .wait();
    assert_eq!(outcome, Outcome::Completed(30));
}

#[rstest]
#[case(Outcome::Faulted(TaskError::msg("early")))]
#[case(Outcome::Cancelled)]
fn non_completed_source_skips_every_callback(#[case] source: Outcome<i32>) {
    let (calls, seen) = counter();
    let map_calls = calls.clone();
    let bind_calls = calls.clone();
    let filter_calls = calls;
    let outcome = Task::from_outcome(source.clone())
        .map(move |x| {
            map_calls.fetch_add(1, Ordering::SeqCst);
            x
        })
        .flat_map(move |x| {
            bind_calls.fetch_add(1, Ordering::SeqCst);
            Task::completed(x)
        })
        .filter(move |_| {
            filter_calls.fetch_add(1, Ordering::SeqCst);
            true
        })
        .wait();
    assert_eq!(outcome, source);
    assert_eq!(seen.load(Ordering::SeqCst), 0);
}

#[rstest]
fn flat_map_forwards_inner_fault() {
    let error = TaskError::msg("inner");
    let inner = error.clone();
    let outcome = Task::completed(1)
        .flat_map(move |_| Task::<i32>::faulted(inner))
        .wait();
    assert_eq!(outcome, Outcome::Faulted(error));
}

#[rstest]
#[case(present(Task::completed(4)), Outcome::Completed(4))]
#[case(Maybe::Absent, Outcome::Cancelled)]
fn flat_map_maybe_treats_missing_task_as_cancellation(
    #[case] inner: Maybe<Task<i32>>,
    #[case] expected: Outcome<i32>,
) {
    let outcome = Task::completed(()).flat_map_maybe(move |()| inner).wait();
    assert_eq!(outcome, expected);
}

#[rstest]
fn flat_map_with_projects_source_and_bound() {
    let outcome = Task::completed("user")
        .flat_map_with(|name| Task::completed(name.len()), |name, len| format!("{name}:{len}"))
        .wait();
    assert_eq!(outcome, Outcome::Completed("user:4".to_string()));
}

#[rstest]
fn continue_with_observes_fault() {
    let outcome = Task::<i32>::faulted(TaskError::msg("seen"))
        .continue_with(|outcome| Outcome::Completed(outcome.is_faulted()))
        .wait();
    assert_eq!(outcome, Outcome::Completed(true));
}

// =============================================================================
// Panics Become Faults
// =============================================================================

#[rstest]
fn panicking_selector_faults_the_task() {
    let outcome = Task::completed(1)
        .map(|_: i32| -> i32 { panic!("selector exploded") })
        .wait();
    let message = outcome
        .error()
        .map(|error| error.downcast_ref::<PanicError>().map(|p| p.message().to_string()));
    assert_eq!(message, present(Some("selector exploded".to_string())));
}

#[rstest]
fn panicking_future_faults_the_task() {
    let task = Task::<i32>::from_future(async { panic!("future exploded") });
    assert!(matches!(task.wait(), Outcome::Faulted(error) if error.is::<PanicError>()));
}

#[rstest]
#[case::flat_map_binder(Task::completed(1).flat_map(|_| -> Task<i32> { panic!("binder") }))]
#[case::select_many_binder(Task::completed(1).select_many(|_| -> Task<i32> { panic!("binder") }))]
#[case::flat_map_maybe_binder(
    Task::completed(1).flat_map_maybe(|_| -> Maybe<Task<i32>> { panic!("binder") })
)]
#[case::flat_map_with_binder(
    Task::completed(1).flat_map_with(|_| -> Task<i32> { panic!("binder") }, |a, b| a + b)
)]
#[case::filter_predicate(Task::completed(1).filter(|_| -> bool { panic!("predicate") }))]
#[case::rescue_factory(
    Task::<i32>::faulted(TaskError::msg("down")).rescue(|_| -> Task<i32> { panic!("factory") })
)]
#[case::catch_as_handler(
    Task::<i32>::faulted(TaskError::new(Timeout)).catch_as(|_: &Timeout| -> i32 { panic!("handler") })
)]
#[case::zip_combiner(
    Task::completed(1).zip(Task::completed(2), |_, _| -> i32 { panic!("combiner") })
)]
fn panicking_callback_faults_instead_of_unwinding(#[case] task: Task<i32>) {
    let outcome = task.wait();
    assert!(matches!(&outcome, Outcome::Faulted(error) if error.is::<PanicError>()));
}

#[rstest]
#[tokio::test]
async fn panicking_binder_is_observed_through_await() {
    let outcome = Task::completed("input")
        .flat_map(|_| -> Task<usize> { panic!("binder failed") })
        .await;
    let message = outcome
        .error()
        .map(|error| error.downcast_ref::<PanicError>().map(|p| p.message().to_string()));
    assert_eq!(message, present(Some("binder failed".to_string())));
}

// =============================================================================
// Rescue and CatchAs
// =============================================================================

#[rstest]
fn rescue_runs_factory_only_on_fault() {
    let (calls, seen) = counter();
    let factory_calls = calls.clone();
    let untouched = Task::completed(1)
        .rescue(move |_| {
            factory_calls.fetch_add(1, Ordering::SeqCst);
            Task::completed(0)
        })
        .wait();
    assert_eq!(untouched, Outcome::Completed(1));
    assert_eq!(seen.load(Ordering::SeqCst), 0);

    let rescued = Task::<i32>::faulted(TaskError::msg("down"))
        .rescue(move |error| {
            calls.fetch_add(1, Ordering::SeqCst);
            Task::completed(error.message().len() as i32)
        })
        .wait();
    assert_eq!(rescued, Outcome::Completed(4));
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[rstest]
fn rescue_does_not_handle_cancellation() {
    let (calls, seen) = counter();
    let outcome = Task::<i32>::cancelled()
        .rescue(move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            Task::completed(0)
        })
        .wait();
    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(seen.load(Ordering::SeqCst), 0);
}

#[rstest]
fn rescue_fallback_may_fault_again() {
    let second = TaskError::msg("second");
    let fallback = second.clone();
    let outcome = Task::<i32>::faulted(TaskError::msg("first"))
        .rescue(move |_| Task::faulted(fallback))
        .wait();
    assert_eq!(outcome, Outcome::Faulted(second));
}

#[rstest]
fn catch_as_recovers_matching_kind_only() {
    let recovered = Task::<&str>::faulted(TaskError::new(Timeout))
        .catch_as(|_: &Timeout| "retry later")
        .wait();
    assert_eq!(recovered, Outcome::Completed("retry later"));

    let other = TaskError::msg("not a timeout");
    let passed = Task::<&str>::faulted(other.clone())
        .catch_as(|_: &Timeout| "retry later")
        .wait();
    assert_eq!(passed, Outcome::Faulted(other));
}

#[rstest]
fn catch_as_leaves_cancellation_alone() {
    let outcome = Task::<i32>::cancelled().catch_as(|_: &Timeout| 0).wait();
    assert_eq!(outcome, Outcome::Cancelled);
}

// =============================================================================
// Zip, And, Or, Apply
// =============================================================================

#[rstest]
#[tokio::test]
async fn zip_runs_operands_concurrently() {
    tokio::time::pause();
    let slow = Task::from_future(async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        2
    });
    let fast = Task::from_future(async { 3 });
    assert_eq!(slow.zip(fast, |a, b| a * b).await, Outcome::Completed(6));
}

#[rstest]
fn zip_aggregates_two_faults_in_operand_order() {
    let first = TaskError::msg("first");
    let second = TaskError::msg("second");
    let outcome = Task::<i32>::faulted(first.clone())
        .zip(Task::<i32>::faulted(second.clone()), |a, b| a + b)
        .wait();
    let errors = match &outcome {
        Outcome::Faulted(error) => error
            .downcast_ref::<AggregateError>()
            .map(|aggregate| aggregate.errors().to_vec()),
        _ => None,
    };
    assert_eq!(errors, Some(vec![first, second]));
}

#[rstest]
fn zip_with_cancellation_only_is_cancelled() {
    let outcome = Task::completed(1).zip(Task::<i32>::cancelled(), |a, b| a + b).wait();
    assert_eq!(outcome, Outcome::Cancelled);
}

#[rstest]
#[case(true, true, true, true)]
#[case(true, false, false, true)]
#[case(false, true, false, true)]
#[case(false, false, false, false)]
fn boolean_combinators(
    #[case] left: bool,
    #[case] right: bool,
    #[case] expected_and: bool,
    #[case] expected_or: bool,
) {
    assert_eq!(
        Task::completed(left).and(Task::completed(right)).wait(),
        Outcome::Completed(expected_and)
    );
    assert_eq!(
        Task::completed(left).or(Task::completed(right)).wait(),
        Outcome::Completed(expected_or)
    );
}

#[rstest]
fn or_does_not_short_circuit_over_a_fault() {
    let outcome = Task::completed(true)
        .or(Task::faulted(TaskError::msg("right side")))
        .wait();
    assert_eq!(fault_kind(&outcome), present("right side".to_string()));
}

#[rstest]
fn not_negates() {
    assert_eq!(Task::completed(false).not().wait(), Outcome::Completed(true));
}

#[rstest]
fn apply_family() {
    let add = Task::completed(|a: i32, b: i32| a + b);
    assert_eq!(
        add.apply2(Task::completed(1), Task::completed(2)).wait(),
        Outcome::Completed(3)
    );

    let negate = Task::completed(|x: i32| -x);
    assert_eq!(negate.apply(Task::completed(5)).wait(), Outcome::Completed(-5));

    let concat = Task::completed(|a: &str, b: &str, c: &str| format!("{a}{b}{c}"));
    assert_eq!(
        concat
            .apply3(Task::completed("x"), Task::completed("y"), Task::completed("z"))
            .wait(),
        Outcome::Completed("xyz".to_string())
    );
}

#[rstest]
fn lift_functions() {
    assert_eq!(
        lift2(|a: i32, b: i32| a * b, Task::completed(6), Task::completed(7)).wait(),
        Outcome::Completed(42)
    );
    assert_eq!(
        lift3(
            |a: i32, b: i32, c: i32| a + b + c,
            Task::completed(1),
            Task::cancelled(),
            Task::completed(3)
        )
        .wait(),
        Outcome::Cancelled
    );
}

// =============================================================================
// Join and GroupJoin
// =============================================================================

#[rstest]
fn join_with_matching_keys() {
    let user = Task::completed((1_u32, "ada"));
    let order = Task::completed((1_u32, 30_u32));
    let outcome = user
        .join(order, |u| u.0, |o| o.0, |u, o| format!("{} spent {}", u.1, o.1))
        .wait();
    assert_eq!(outcome, Outcome::Completed("ada spent 30".to_string()));
}

#[rstest]
fn join_with_differing_keys_faults() {
    let (calls, seen) = counter();
    let outcome = Task::completed(1_u32)
        .join(Task::completed(2_u32), |a| *a, |b| *b, move |a, b| {
            calls.fetch_add(1, Ordering::SeqCst);
            a + b
        })
        .wait();
    let mismatch = match &outcome {
        Outcome::Faulted(error) => error
            .downcast_ref::<KeyMismatch>()
            .map(|m| (m.left_key().to_string(), m.right_key().to_string())),
        _ => None,
    };
    assert_eq!(mismatch, Some(("1".to_string(), "2".to_string())));
    assert_eq!(seen.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn join_schedules_both_operands_eagerly() {
    let (calls, seen) = counter();
    let other_calls = calls.clone();
    let left = Task::from_future(async move {
        calls.fetch_add(1, Ordering::SeqCst);
        1
    });
    let right = Task::from_future(async move {
        other_calls.fetch_add(1, Ordering::SeqCst);
        1
    });
    let joined = left.join(right, |a| *a, |b| *b, |a, b| a + b);
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
    assert_eq!(seen.load(Ordering::SeqCst), 2);
    assert_eq!(joined.await, Outcome::Completed(2));
}

#[rstest]
#[tokio::test]
async fn group_join_hands_inner_as_resolved_task() {
    let outcome = Task::completed(10)
        .group_join(Task::completed(10), |a| *a, |b| *b, |outer, inner: Task<i32>| {
            inner.map(move |value| outer + value)
        })
        .await;
    let nested = match outcome {
        Outcome::Completed(task) => task.await,
        other => panic!("unexpected outcome: {other:?}"),
    };
    assert_eq!(nested, Outcome::Completed(20));
}

// =============================================================================
// Sequence and Traverse
// =============================================================================

#[rstest]
fn sequence_preserves_input_order() {
    let tasks = vec![
        Task::from_future(async { 1 }),
        Task::completed(2),
        Task::from_future(async { 3 }),
    ];
    assert_eq!(sequence(tasks).wait(), Outcome::Completed(vec![1, 2, 3]));
}

#[rstest]
fn sequence_of_nothing_is_empty() {
    assert_eq!(sequence(Vec::<Task<i32>>::new()).wait(), Outcome::Completed(vec![]));
}

#[rstest]
fn sequence_reports_fault_over_cancellation() {
    let error = TaskError::msg("bad element");
    let tasks = vec![
        Task::cancelled(),
        Task::completed(1),
        Task::faulted(error.clone()),
    ];
    assert_eq!(sequence(tasks).wait(), Outcome::Faulted(error));
}

#[rstest]
fn sequence_awaits_every_task_after_a_fault() {
    let (calls, seen) = counter();
    let tasks = vec![
        Task::faulted(TaskError::msg("first")),
        Task::from_future(async move {
            calls.fetch_add(1, Ordering::SeqCst);
            2
        }),
    ];
    assert!(sequence(tasks).wait().is_faulted());
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[rstest]
fn traverse_maps_then_sequences() {
    let outcome = traverse(vec!["a", "bb", "ccc"], |s| Task::completed(s.len())).wait();
    assert_eq!(outcome, Outcome::Completed(vec![1, 2, 3]));

    let failing = traverse(vec![1, 2], |x| {
        if x == 2 {
            Task::faulted(TaskError::msg("two"))
        } else {
            Task::completed(x)
        }
    })
    .wait();
    assert_eq!(fault_kind(&failing), present("two".to_string()));
}

// =============================================================================
// Executors and Cancellation
// =============================================================================

struct DroppingExecutor;

impl Executor for DroppingExecutor {
    fn execute(&self, future: BoxFuture<'static, ()>) {
        drop(future);
    }
}

#[rstest]
fn inline_executor_runs_before_returning() {
    let (calls, seen) = counter();
    let task = Task::from_future(async move {
        calls.fetch_add(1, Ordering::SeqCst);
        9
    })
    .schedule_on(&InlineExecutor);
    assert_eq!(seen.load(Ordering::SeqCst), 1);
    assert!(task.is_scheduled());
    assert_eq!(task.wait(), Outcome::Completed(9));
}

#[rstest]
fn dropped_work_resolves_as_cancelled() {
    let task = Task::from_future(async { 1 }).schedule_on(&DroppingExecutor);
    assert_eq!(task.wait(), Outcome::Cancelled);
}

#[rstest]
fn resolved_task_is_not_rescheduled() {
    let task = Task::completed(3).schedule_on(&DroppingExecutor);
    assert!(!task.is_scheduled());
    assert_eq!(task.wait(), Outcome::Completed(3));
}

#[rstest]
#[tokio::test]
async fn cancel_on_signal_before_completion() {
    tokio::time::pause();
    let slow = Task::from_future(async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        1
    });
    let outcome = slow
        .cancel_on(async {
            tokio::time::sleep(Duration::from_millis(1)).await;
        })
        .await;
    assert_eq!(outcome, Outcome::Cancelled);
}

#[rstest]
#[tokio::test]
async fn cancel_on_after_completion_keeps_value() {
    let outcome = Task::completed(5)
        .cancel_on(futures::future::pending())
        .await;
    assert_eq!(outcome, Outcome::Completed(5));
}

#[rstest]
#[tokio::test(flavor = "current_thread")]
async fn try_wait_refuses_current_thread_runtime() {
    assert!(Task::completed(1).try_wait().is_err());
}

#[rstest]
fn into_result_bridges_to_question_mark() {
    fn total() -> Result<i32, TaskError> {
        let a = Task::completed(1).wait().into_result()?;
        let b = Task::completed(2).wait().into_result()?;
        Ok(a + b)
    }
    assert_eq!(total().ok(), Some(3));
}

#[rstest]
fn spawn_on_and_wait_value() {
    let task = Task::spawn_on(async { 11 }, &InlineExecutor);
    assert!(task.is_scheduled());
    assert_eq!(task.wait_value().ok(), Some(11));

    let cancelled = Task::<i32>::cancelled().wait_value();
    assert!(cancelled.is_err_and(|error| error.is::<monadkit::task::CancelledError>()));
}
