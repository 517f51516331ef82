pub mod assessment;
pub mod heading;
pub mod status;

pub use assessment::{assess, evaluate_link, LinkAssessment};
pub use heading::{suggest_clear_heading, validate_step, MAX_STEP_DEG, MIN_STEP_DEG};
pub use status::{
    classify, classify_with, ClassifierThresholds, SignalStatus, MARGINAL_ELEVATION_DEG,
    NO_LOS_ELEVATION_DEG,
};
