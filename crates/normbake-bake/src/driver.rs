//! One-call bake entry points.

use std::time::Duration;

use normbake_mesh::Mesh;
use normbake_spatial::{BvhIndex, SpatialIndex};
use normbake_types::constants::DEFAULT_TICK_BUDGET_MS;
use normbake_types::BakeResult;

use crate::buffer::NormalMapBuffer;
use crate::config::BakeOptions;
use crate::task::BakeTask;
use crate::validate::validate_inputs;

/// Bakes `reference` onto `target`'s UV layout, building a BVH over the
/// reference first.
///
/// `on_progress` is called after every tick with a non-decreasing fraction;
/// the last call is `1.0`.
pub fn bake(
    reference: &Mesh,
    target: &Mesh,
    options: &BakeOptions,
    on_progress: impl FnMut(f32),
) -> BakeResult<NormalMapBuffer> {
    // Reject bad inputs before paying for the index build
    validate_inputs(reference, target, options)?;
    let index = BvhIndex::build(reference)?;
    bake_with_index(reference, target, &index, options, on_progress)
}

/// Like [`bake`], with a caller-supplied index built from `reference`
/// (for instance from an [`IndexCache`](normbake_spatial::IndexCache)).
pub fn bake_with_index(
    reference: &Mesh,
    target: &Mesh,
    index: &dyn SpatialIndex,
    options: &BakeOptions,
    mut on_progress: impl FnMut(f32),
) -> BakeResult<NormalMapBuffer> {
    let mut task = BakeTask::new(reference, target, index, options.clone())?;
    let budget = Duration::from_millis(DEFAULT_TICK_BUDGET_MS);
    loop {
        let report = task.step(budget)?;
        on_progress(report.progress);
        if report.done {
            break;
        }
    }
    task.result()
}
