use super::constants::{
    QUALITY_DENSITY_HIGH, QUALITY_DENSITY_LOW, QUALITY_FPS_LOWER, QUALITY_FPS_UPPER,
    QUALITY_PIXEL_RATIO_HIGH, QUALITY_PIXEL_RATIO_LOW, QUALITY_SAMPLE_FRAMES,
};

/// Render resolution cap and particle density applied by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QualityLevel {
    pub pixel_ratio: f32,
    pub density: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QualityChange {
    Declined(QualityLevel),
    Inclined(QualityLevel),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QualityConfig {
    pub sample_frames: usize,
    pub fps_lower: f32,
    pub fps_upper: f32,
    pub low: QualityLevel,
    pub high: QualityLevel,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            sample_frames: QUALITY_SAMPLE_FRAMES,
            fps_lower: QUALITY_FPS_LOWER,
            fps_upper: QUALITY_FPS_UPPER,
            low: QualityLevel {
                pixel_ratio: QUALITY_PIXEL_RATIO_LOW,
                density: QUALITY_DENSITY_LOW,
            },
            high: QualityLevel {
                pixel_ratio: QUALITY_PIXEL_RATIO_HIGH,
                density: QUALITY_DENSITY_HIGH,
            },
        }
    }
}

/// Frame-rate watchdog. Averages frame times over a window and flips between
/// the low and high levels with hysteresis (`fps_lower` < `fps_upper`).
#[derive(Clone, Debug)]
pub struct QualityGovernor {
    config: QualityConfig,
    window_sum: f32,
    window_len: usize,
    high: bool,
}

impl QualityGovernor {
    pub fn new(config: QualityConfig) -> Self {
        Self {
            config,
            window_sum: 0.0,
            window_len: 0,
            high: true,
        }
    }

    pub fn level(&self) -> QualityLevel {
        if self.high {
            self.config.high
        } else {
            self.config.low
        }
    }

    pub fn record_frame(&mut self, dt_sec: f32) -> Option<QualityChange> {
        if !dt_sec.is_finite() || dt_sec <= 0.0 {
            return None;
        }
        self.window_sum += dt_sec;
        self.window_len += 1;
        if self.window_len < self.config.sample_frames.max(1) {
            return None;
        }
        let fps = self.window_len as f32 / self.window_sum;
        self.window_sum = 0.0;
        self.window_len = 0;
        if self.high && fps < self.config.fps_lower {
            self.high = false;
            return Some(QualityChange::Declined(self.config.low));
        }
        if !self.high && fps > self.config.fps_upper {
            self.high = true;
            return Some(QualityChange::Inclined(self.config.high));
        }
        None
    }
}
