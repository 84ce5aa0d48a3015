pub mod accordion;
pub mod config;
pub mod constants;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod header;
pub mod lifecycle;
pub mod pipeline;
pub mod presenter;
pub mod progress;
pub mod quality;
pub mod scene;
pub mod sections;
pub mod stages;
pub mod theme;

pub use config::SliderConfig;
pub use error::ConfigError;
pub use pipeline::{FrameInput, FrameOutput, SliderPipeline};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
