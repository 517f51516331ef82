use crate::workflow::runner::WorkflowResult;
use satlinkcore::link::LinkAssessment;
use satlinkcore::prelude::LinkInput;
use satlinkcore::BlockageZone;
use serde::{Deserialize, Serialize};

/// Snapshot served to the display layer: latest evaluation plus the zones it
/// was evaluated against.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VisualizationModel {
    pub input: Option<LinkInput>,
    pub assessment: Option<LinkAssessment>,
    pub suggested_heading: Option<f64>,
    pub zones: Vec<BlockageZone>,
}

impl VisualizationModel {
    pub fn from_result(result: &WorkflowResult, zones: Vec<BlockageZone>) -> Self {
        Self {
            input: Some(result.input),
            assessment: Some(result.assessment.clone()),
            suggested_heading: result.suggested_heading,
            zones,
        }
    }
}
