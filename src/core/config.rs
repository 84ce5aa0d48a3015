use super::constants::TRANSITION_SECS;
use super::error::ConfigError;
use super::progress::SpringParams;
use super::scene::SceneConfig;
use super::sections::SectionConfig;
use super::stages::{validate_boundaries, Stage, StageTable};

/// Everything the slider needs at construction. Static for the lifetime of a
/// mount.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    pub stages: StageTable,
    pub spring: SpringParams,
    pub scene: SceneConfig,
    pub transition_secs: f32,
    pub sections: SectionConfig,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            stages: StageTable::industrial(),
            spring: SpringParams::default(),
            scene: SceneConfig::default(),
            transition_secs: TRANSITION_SECS,
            sections: SectionConfig::default(),
        }
    }
}

impl SliderConfig {
    /// Default tuning with a custom stage list.
    pub fn with_stages(stages: Vec<Stage>) -> Result<Self, ConfigError> {
        Ok(Self {
            stages: StageTable::new(stages)?,
            ..Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_boundaries(self.stages.boundaries())?;
        self.spring.validate()?;
        self.scene.validate()?;
        self.sections.validate()?;
        if !self.transition_secs.is_finite() || self.transition_secs < 0.0 {
            return Err(ConfigError::Overlay("transition duration must be finite and >= 0"));
        }
        Ok(())
    }
}
