//! Shape selection for rendering an evaluation matrix
//!
//! The engine always returns the full matrix. How much of it to show is a
//! read-side decision made here, once, for every front end.

use crate::evaluation::EvaluationMatrix;
use crate::metrics::MetricKind;
use crate::models::ModelId;
use serde::Serialize;

/// What a front end should render for an evaluation result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EvaluationView<'a> {
    /// Several models under several metrics
    Matrix(&'a EvaluationMatrix),
    /// Several models under one metric
    MetricComparison {
        metric: MetricKind,
        scores: Vec<(ModelId, f64)>,
    },
    /// One model under several metrics
    ModelProfile {
        model: ModelId,
        scores: Vec<(MetricKind, f64)>,
    },
    /// One model under one metric
    Scalar {
        model: ModelId,
        metric: MetricKind,
        value: f64,
    },
}

impl EvaluationView<'_> {
    /// Heading for the rendered view
    pub fn title(&self, test_period: &str) -> String {
        match self {
            EvaluationView::Matrix(_) => format!("Model Comparison for {}", test_period),
            EvaluationView::MetricComparison { metric, .. } => {
                format!("{} Comparison for {}", metric, test_period)
            }
            EvaluationView::ModelProfile { model, .. } => {
                format!("{} Evaluation for {}", model, test_period)
            }
            EvaluationView::Scalar { model, metric, .. } => format!("{} for {}", metric, model),
        }
    }
}

/// Pick the view shape from the matrix dimensions
pub fn select_view(matrix: &EvaluationMatrix) -> EvaluationView<'_> {
    match (matrix.models(), matrix.metrics()) {
        ([model], [metric]) => match matrix.score(*model, *metric) {
            Some(value) => EvaluationView::Scalar {
                model: *model,
                metric: *metric,
                value,
            },
            None => EvaluationView::Matrix(matrix),
        },
        (_, [metric]) => EvaluationView::MetricComparison {
            metric: *metric,
            scores: matrix.column(*metric).unwrap_or_default(),
        },
        ([model], _) => EvaluationView::ModelProfile {
            model: *model,
            scores: matrix.row(*model).unwrap_or_default(),
        },
        _ => EvaluationView::Matrix(matrix),
    }
}
