//! `Future` adapter over [`BakeTask`].

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use normbake_types::constants::DEFAULT_TICK_BUDGET_MS;
use normbake_types::{BakeError, BakeResult};

use crate::buffer::NormalMapBuffer;
use crate::task::BakeTask;

/// Runs one bake tick per poll, then wakes itself and yields, so the
/// executor can run other work between ticks.
///
/// Progress goes to `on_progress` after every tick; the final call carries
/// `1.0` and happens before the future resolves.
pub struct BakeFuture<'a, F> {
    task: Option<BakeTask<'a>>,
    budget: Duration,
    on_progress: F,
}

impl<'a, F: FnMut(f32) + Unpin> BakeFuture<'a, F> {
    pub fn new(task: BakeTask<'a>, on_progress: F) -> Self {
        Self {
            task: Some(task),
            budget: Duration::from_millis(DEFAULT_TICK_BUDGET_MS),
            on_progress,
        }
    }

    /// Overrides the per-tick wall-clock budget.
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }
}

impl<F: FnMut(f32) + Unpin> Future for BakeFuture<'_, F> {
    type Output = BakeResult<NormalMapBuffer>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let Some(task) = this.task.as_mut() else {
            return Poll::Ready(Err(polled_after_completion()));
        };

        match task.step(this.budget) {
            Ok(report) => {
                (this.on_progress)(report.progress);
                if report.done {
                    Poll::Ready(
                        this.task
                            .take()
                            .map_or_else(|| Err(polled_after_completion()), BakeTask::result),
                    )
                } else {
                    cx.waker().wake_by_ref();
                    Poll::Pending
                }
            }
            Err(error) => {
                this.task = None;
                Poll::Ready(Err(error))
            }
        }
    }
}

fn polled_after_completion() -> BakeError {
    BakeError::NotComplete {
        state: "polled after completion".into(),
    }
}

impl<'a> BakeTask<'a> {
    /// Turns the task into a future that reports progress to `on_progress`.
    pub fn into_future_with<F: FnMut(f32) + Unpin>(self, on_progress: F) -> BakeFuture<'a, F> {
        BakeFuture::new(self, on_progress)
    }
}
