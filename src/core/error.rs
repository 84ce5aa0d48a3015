use thiserror::Error;

/// Startup configuration problems. These are programmer errors: the slider
/// refuses to mount rather than guessing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("stage table is empty")]
    EmptyStageTable,
    #[error("stage {index} has a non-finite bound")]
    NonFiniteBound { index: usize },
    #[error("first stage must start at 0.0, found {lower}")]
    NotStartingAtZero { lower: f32 },
    #[error("last stage must end at 1.0, found {upper}")]
    NotEndingAtOne { upper: f32 },
    #[error("stage {index} is empty or inverted ({lower}..{upper})")]
    EmptyInterval { index: usize, lower: f32, upper: f32 },
    #[error("gap between stage {index} (ends {upper}) and the next stage (starts {next_lower})")]
    Gap {
        index: usize,
        upper: f32,
        next_lower: f32,
    },
    #[error("stage {index} (ends {upper}) overlaps the next stage (starts {next_lower})")]
    Overlap {
        index: usize,
        upper: f32,
        next_lower: f32,
    },
    #[error("invalid spring: {0}")]
    Spring(&'static str),
    #[error("invalid scene setting: {0}")]
    Scene(&'static str),
    #[error("invalid overlay setting: {0}")]
    Overlay(&'static str),
    #[error("invalid section watcher setting: {0}")]
    Sections(&'static str),
}
