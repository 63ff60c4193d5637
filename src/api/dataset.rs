use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use tracing::{debug, trace, warn};

use crate::core::{
    AggregationStrategy, DataPoint, SeriesConfig, excerpt_points, fit_edited_point,
};
use crate::error::{SeriesError, SeriesResult};

use super::excerpt_gate::{ExcerptGate, ExcerptRequest};

/// Full-resolution series (source of truth) plus its displayed excerpt.
///
/// The displayed series is wholesale-replaced on every admitted excerpt
/// request; it has no identity across calls. The full series is mutated only
/// by edit refitting, and only in its `y` values.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetPair {
    pub full: Vec<DataPoint>,
    pub displayed: Vec<DataPoint>,
    pub config: SeriesConfig,
}

/// Plain-data model for a set of excerptable, edit-refittable traces.
///
/// Hosts feed in full-resolution series once, request excerpts whenever the
/// visible window changes, and report finished point edits. All calls run to
/// completion on the caller's thread; the only cross-call coordination is the
/// quiesce gate deferring excerpts past an in-flight edit.
#[derive(Debug, Default)]
pub struct BoundaryLinesModel {
    datasets: IndexMap<String, DatasetPair>,
    gate: ExcerptGate,
}

impl BoundaryLinesModel {
    pub const TRACE_LABEL: &'static str = "trace";
    pub const LOWER_BASELINE_LABEL: &'static str = "lower-baseline";
    pub const UPPER_BASELINE_LABEL: &'static str = "upper-baseline";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the classic boundary-lines trio sharing one point budget:
    /// the trace folds by averaging, the lower baseline by `Max`, the upper
    /// baseline by `Min`.
    pub fn with_baselines(
        traces: Vec<DataPoint>,
        lower_baseline: Vec<DataPoint>,
        upper_baseline: Vec<DataPoint>,
        max_data_points: usize,
    ) -> SeriesResult<Self> {
        let mut model = Self::new();
        model.insert_dataset(
            Self::TRACE_LABEL,
            traces,
            SeriesConfig::new(max_data_points, AggregationStrategy::None)?,
        )?;
        model.insert_dataset(
            Self::LOWER_BASELINE_LABEL,
            lower_baseline,
            SeriesConfig::new(max_data_points, AggregationStrategy::Max)?,
        )?;
        model.insert_dataset(
            Self::UPPER_BASELINE_LABEL,
            upper_baseline,
            SeriesConfig::new(max_data_points, AggregationStrategy::Min)?,
        )?;
        Ok(model)
    }

    /// Registers a full-resolution series under `label`. The displayed side
    /// starts empty until the first admitted excerpt request.
    pub fn insert_dataset(
        &mut self,
        label: &str,
        full: Vec<DataPoint>,
        config: SeriesConfig,
    ) -> SeriesResult<()> {
        if full.windows(2).any(|pair| pair[0].x > pair[1].x) {
            return Err(SeriesError::InvalidData(format!(
                "series '{label}' must be sorted non-decreasing by time"
            )));
        }

        debug!(label, points = full.len(), "insert dataset");
        self.datasets.insert(
            label.to_owned(),
            DatasetPair {
                full,
                displayed: Vec::new(),
                config,
            },
        );
        Ok(())
    }

    #[must_use]
    pub fn dataset(&self, label: &str) -> Option<&DatasetPair> {
        self.datasets.get(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.gate.is_editing()
    }

    /// First and last full-resolution times of a dataset, for hosts that want
    /// an initial whole-span excerpt.
    #[must_use]
    pub fn full_span(&self, label: &str) -> Option<(f64, f64)> {
        let pair = self.datasets.get(label)?;
        let first = pair.full.first()?;
        let last = pair.full.last()?;
        Some((first.x, last.x))
    }

    /// Excerpts every dataset for the requested window, unless an edit is in
    /// flight, in which case the request is deferred (latest window wins).
    ///
    /// Returns `true` when the excerpt ran, `false` when it was deferred.
    pub fn request_excerpt(&mut self, request: ExcerptRequest) -> SeriesResult<bool> {
        if !self.gate.admit(request) {
            debug!(
                from = request.from,
                to = request.to,
                "excerpt deferred until edit completes"
            );
            return Ok(false);
        }

        self.excerpt_all(request)?;
        Ok(true)
    }

    /// Marks a point edit as in flight; excerpt requests queue up behind it.
    pub fn begin_edit(&mut self) {
        self.gate.begin_edit();
    }

    /// Completes an edit: writes the new value into the displayed point,
    /// refits the full-resolution series around it, then releases any
    /// deferred excerpt request.
    ///
    /// A failed edit still releases the gate; any deferred excerpt request is
    /// dropped with it and the host re-requests its window.
    pub fn finish_edit(&mut self, label: &str, point_index: usize, new_y: f64) -> SeriesResult<()> {
        if let Err(err) = self.apply_edit(label, point_index, new_y) {
            warn!(label, point_index, error = %err, "edit refit failed");
            let _ = self.gate.end_edit();
            return Err(err);
        }

        trace!(label, point_index, new_y, "edit refitted onto full series");
        if let Some(pending) = self.gate.end_edit() {
            debug!(
                from = pending.from,
                to = pending.to,
                "running deferred excerpt after edit"
            );
            self.excerpt_all(pending)?;
        }
        Ok(())
    }

    fn apply_edit(&mut self, label: &str, point_index: usize, new_y: f64) -> SeriesResult<()> {
        let pair = self.dataset_mut(label)?;
        let point = pair.displayed.get_mut(point_index).ok_or_else(|| {
            SeriesError::InvalidData(format!(
                "displayed point index {point_index} out of bounds for series '{label}'"
            ))
        })?;
        point.y = new_y;
        fit_edited_point(&mut pair.full, &pair.displayed, point_index)
    }

    /// Index of the displayed point nearest to `time`, for hosts mapping
    /// pointer positions onto edit indices.
    #[must_use]
    pub fn nearest_displayed_index(&self, label: &str, time: f64) -> Option<usize> {
        let pair = self.datasets.get(label)?;
        pair.displayed
            .iter()
            .enumerate()
            .min_by_key(|(_, point)| OrderedFloat((point.x - time).abs()))
            .map(|(index, _)| index)
    }

    fn excerpt_all(&mut self, request: ExcerptRequest) -> SeriesResult<()> {
        for (label, pair) in &mut self.datasets {
            let displayed = excerpt_points(
                &pair.full,
                pair.config,
                request.from,
                request.to,
                request.has_margin,
            )?;
            trace!(
                label = label.as_str(),
                displayed = displayed.len(),
                "displayed series replaced"
            );
            pair.displayed = displayed;
        }
        Ok(())
    }

    fn dataset_mut(&mut self, label: &str) -> SeriesResult<&mut DatasetPair> {
        self.datasets
            .get_mut(label)
            .ok_or_else(|| SeriesError::InvalidData(format!("unknown dataset '{label}'")))
    }
}
