use super::config::SliderConfig;
use super::error::ConfigError;
use super::presenter::{NavigationRequest, OverlayEvents, OverlayPresenter};
use super::progress::{ProgressTracker, ScrollMetrics};
use super::quality::QualityChange;
use super::scene::{InstanceRaw, SceneCompositor, ScenePose, SurfaceSize};
use super::stages::{StageContent, StageResolver, StageTable};

#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    pub dt_sec: f32,
    pub elapsed_sec: f32,
    /// Drawable size of the 3D surface, if one is mounted.
    pub surface: Option<SurfaceSize>,
}

#[derive(Clone, Debug, Default)]
pub struct FrameOutput {
    pub progress: f32,
    pub stage_changed: Option<usize>,
    pub overlay_events: OverlayEvents,
    /// `None` when the scene was skipped this frame.
    pub scene: Option<ScenePose>,
    pub quality: Option<QualityChange>,
}

/// The hero slider's per-frame driver.
///
/// Scroll/resize handlers only call [`SliderPipeline::on_scroll`]. Each frame
/// runs the stages in a fixed order: smoothing, stage resolution, overlay
/// reaction, scene placement.
pub struct SliderPipeline {
    stages: StageTable,
    tracker: ProgressTracker,
    resolver: StageResolver,
    presenter: OverlayPresenter,
    compositor: SceneCompositor,
}

impl SliderPipeline {
    pub fn new(config: SliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let SliderConfig {
            stages,
            spring,
            scene,
            transition_secs,
            ..
        } = config;
        let presenter = OverlayPresenter::new(stages.len(), transition_secs);
        Ok(Self {
            tracker: ProgressTracker::new(spring),
            resolver: StageResolver::new(),
            presenter,
            compositor: SceneCompositor::new(scene)?,
            stages,
        })
    }

    /// Adopt the mount-time scroll position without animating toward it.
    pub fn prime(&mut self, metrics: ScrollMetrics) {
        self.tracker.prime(metrics);
        let p = self.tracker.smoothed();
        let idx = self.stages.resolve(p);
        self.resolver.reset_to(idx);
        self.presenter.reset_to(idx);
        self.compositor.prime(p);
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        self.tracker.record(metrics);
    }

    pub fn frame(&mut self, input: FrameInput) -> FrameOutput {
        let progress = self.tracker.advance(input.dt_sec);

        let stage_changed = self.resolver.update(&self.stages, progress);

        let mut overlay_events = OverlayEvents::new();
        if let Some(idx) = stage_changed {
            overlay_events = self.presenter.present(idx);
        }
        if let Some(ev) = self.presenter.advance(input.dt_sec) {
            overlay_events.push(ev);
        }

        let (scene, quality) = match self.compositor.frame(
            progress,
            input.dt_sec,
            input.elapsed_sec,
            input.surface,
        ) {
            Some((pose, change)) => (Some(pose), change),
            None => (None, None),
        };

        FrameOutput {
            progress,
            stage_changed,
            overlay_events,
            scene,
            quality,
        }
    }

    pub fn progress(&self) -> f32 {
        self.tracker.smoothed()
    }

    pub fn active_stage(&self) -> usize {
        self.resolver.current()
    }

    pub fn stages(&self) -> &StageTable {
        &self.stages
    }

    pub fn presenter(&self) -> &OverlayPresenter {
        &self.presenter
    }

    pub fn compositor(&self) -> &SceneCompositor {
        &self.compositor
    }

    /// Content of the stage currently shown (or entering).
    pub fn shown_content(&self) -> Option<&StageContent> {
        self.presenter
            .shown()
            .and_then(|i| self.stages.content(i))
    }

    pub fn activate_cta(&self, stage: usize) -> Option<NavigationRequest> {
        self.presenter.activate_cta(stage, &self.stages)
    }

    pub fn set_ambient_density(&mut self, density: f32) {
        self.compositor.set_ambient_density(density);
    }

    pub fn instances(&self, pose: ScenePose) -> Vec<InstanceRaw> {
        self.compositor.instances(pose)
    }

    pub fn teardown(&mut self) {
        self.presenter.clear();
    }
}
