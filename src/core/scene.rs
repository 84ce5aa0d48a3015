use super::constants::{
    AMBIENT_DENSITY_PEAK, ROOT_LERP_RATE, SCENE_SEED, SPARKLE_COUNT, SPARKLE_SPREAD, SWAY_AMPLITUDE, SWAY_SPEED,
    TRAVEL_DISTANCE, ZONE_ANCHORS,
};
use super::error::ConfigError;
use super::quality::{QualityChange, QualityConfig, QualityGovernor, QualityLevel};
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::prelude::*;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Beam,
    Pipe,
    Joint,
    Rod,
    Platform,
    Beacon,
    Mirror,
    Sparkle,
}

/// One statically placed box instance. `transform` is relative to the scene
/// root and never changes after the scene is built.
#[derive(Clone, Copy, Debug)]
pub struct SceneElement {
    pub kind: ElementKind,
    /// Stage zone the element belongs to; `None` for the shared cage.
    pub zone: Option<usize>,
    pub transform: Mat4,
    pub color: [f32; 4],
}

/// GPU instance layout: column-major model matrix followed by linear RGBA.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub travel_distance: f32,
    pub lerp_rate: f32,
    pub sway_speed: f32,
    pub sway_amplitude: f32,
    pub zone_anchors: Vec<Vec3>,
    pub sparkle_count: usize,
    pub seed: u64,
    pub quality: QualityConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            travel_distance: TRAVEL_DISTANCE,
            lerp_rate: ROOT_LERP_RATE,
            sway_speed: SWAY_SPEED,
            sway_amplitude: SWAY_AMPLITUDE,
            zone_anchors: ZONE_ANCHORS.iter().map(|a| Vec3::from_array(*a)).collect(),
            sparkle_count: SPARKLE_COUNT,
            seed: SCENE_SEED,
            quality: QualityConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.travel_distance.is_finite() || self.travel_distance < 0.0 {
            return Err(ConfigError::Scene("travel distance must be finite and >= 0"));
        }
        if !self.lerp_rate.is_finite() || self.lerp_rate <= 0.0 {
            return Err(ConfigError::Scene("lerp rate must be positive"));
        }
        if !self.sway_speed.is_finite() || !self.sway_amplitude.is_finite() {
            return Err(ConfigError::Scene("sway must be finite"));
        }
        if !self.zone_anchors.iter().all(|a| a.is_finite()) {
            return Err(ConfigError::Scene("zone anchors must be finite"));
        }
        if self.quality.fps_lower >= self.quality.fps_upper {
            return Err(ConfigError::Scene("quality fps bounds must be increasing"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn is_drawable(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Where the scene root should sit for a given progress.
#[inline]
pub fn target_offset(progress: f32, travel_distance: f32) -> f32 {
    let p = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    p * travel_distance
}

/// Frame-rate independent lerp factor for an exponential approach.
#[inline]
pub fn lerp_alpha(rate_per_sec: f32, dt_sec: f32) -> f32 {
    1.0 - (-rate_per_sec * dt_sec.max(0.0)).exp()
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScenePose {
    pub root_offset: f32,
    pub sway: f32,
}

impl ScenePose {
    pub fn root_transform(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.root_offset, 0.0))
            * Mat4::from_rotation_y(self.sway)
    }
}

/// Camera-follow state of the scene root.
#[derive(Clone, Copy, Debug, Default)]
pub struct SceneRig {
    pose: ScenePose,
}

impl SceneRig {
    pub fn pose(&self) -> ScenePose {
        self.pose
    }

    pub fn snap_to(&mut self, offset: f32) {
        self.pose.root_offset = offset;
    }

    pub fn update(&mut self, target: f32, config: &SceneConfig, dt_sec: f32, elapsed_sec: f32) {
        let a = lerp_alpha(config.lerp_rate, dt_sec);
        self.pose.root_offset += (target - self.pose.root_offset) * a;
        self.pose.sway = (elapsed_sec * config.sway_speed).sin() * config.sway_amplitude;
    }
}

pub struct SceneCompositor {
    config: SceneConfig,
    elements: Vec<SceneElement>,
    rig: SceneRig,
    governor: QualityGovernor,
    sparkle_total: usize,
    ambient_fill: f32,
}

impl SceneCompositor {
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let elements = build_industrial_scene(&config);
        let sparkle_total = elements
            .iter()
            .filter(|e| e.kind == ElementKind::Sparkle)
            .count();
        let governor = QualityGovernor::new(config.quality);
        Ok(Self {
            config,
            elements,
            rig: SceneRig::default(),
            governor,
            sparkle_total,
            ambient_fill: 1.0,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn elements(&self) -> &[SceneElement] {
        &self.elements
    }

    pub fn pose(&self) -> ScenePose {
        self.rig.pose()
    }

    pub fn quality(&self) -> QualityLevel {
        self.governor.level()
    }

    /// Section ambience: sparser presets draw fewer sparkles.
    pub fn set_ambient_density(&mut self, density: f32) {
        if density.is_finite() {
            self.ambient_fill = (density / AMBIENT_DENSITY_PEAK).clamp(0.0, 1.0);
        }
    }

    /// Place the root without easing (mount-time).
    pub fn prime(&mut self, progress: f32) {
        self.rig
            .snap_to(target_offset(progress, self.config.travel_distance));
    }

    /// Per-frame update. Returns `None` (and leaves all state untouched) when
    /// there is nothing to draw into.
    pub fn frame(
        &mut self,
        progress: f32,
        dt_sec: f32,
        elapsed_sec: f32,
        surface: Option<SurfaceSize>,
    ) -> Option<(ScenePose, Option<QualityChange>)> {
        if !surface.is_some_and(|s| s.is_drawable()) {
            return None;
        }
        let target = target_offset(progress, self.config.travel_distance);
        self.rig.update(target, &self.config, dt_sec, elapsed_sec);
        let change = self.governor.record_frame(dt_sec);
        Some((self.rig.pose(), change))
    }

    /// Instance data for `pose`, thinning sparkles by quality and ambience.
    pub fn instances(&self, pose: ScenePose) -> Vec<InstanceRaw> {
        let root = pose.root_transform();
        let density = self.governor.level().density.clamp(0.0, 1.0) * self.ambient_fill;
        let sparkle_budget = (self.sparkle_total as f32 * density).ceil() as usize;
        let mut sparkles = 0usize;
        let mut out = Vec::with_capacity(self.elements.len());
        for e in &self.elements {
            if e.kind == ElementKind::Sparkle {
                if sparkles >= sparkle_budget {
                    continue;
                }
                sparkles += 1;
            }
            out.push(InstanceRaw {
                model: (root * e.transform).to_cols_array_2d(),
                color: e.color,
            });
        }
        out
    }
}

// ---------------- Scene construction ----------------

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `0xRRGGBB` to linear RGBA.
pub fn hex_color(rgb: u32, alpha: f32) -> [f32; 4] {
    let ch = |shift: u32| srgb_to_linear(((rgb >> shift) & 0xff) as f32 / 255.0);
    [ch(16), ch(8), ch(0), alpha]
}

fn place(translation: Vec3, rotation: Quat, scale: Vec3) -> Mat4 {
    Mat4::from_scale_rotation_translation(scale, rotation, translation)
}

fn euler(x: f32, y: f32, z: f32) -> Quat {
    Quat::from_euler(EulerRot::XYZ, x, y, z)
}

struct ZoneBuilder<'a> {
    out: &'a mut Vec<SceneElement>,
    zone: Option<usize>,
    frame: Mat4,
}

impl ZoneBuilder<'_> {
    fn push(&mut self, kind: ElementKind, local: Mat4, color: [f32; 4]) {
        self.out.push(SceneElement {
            kind,
            zone: self.zone,
            transform: self.frame * local,
            color,
        });
    }

    /// Three parallel pipes with a collar ring near each end.
    fn pipe_bundle(&mut self, at: Mat4, color: [f32; 4]) {
        let collar = hex_color(0x475569, 1.0);
        for x in [-0.6, 0.0, 0.6] {
            let local = at * place(Vec3::new(x, 0.0, 0.0), Quat::IDENTITY, Vec3::new(0.5, 10.0, 0.5));
            self.push(ElementKind::Pipe, local, color);
        }
        for y in [3.0, -3.0] {
            let local = at * place(Vec3::new(0.0, y, 0.0), Quat::IDENTITY, Vec3::new(2.2, 0.4, 1.2));
            self.push(ElementKind::Joint, local, collar);
        }
    }
}

fn build_industrial_scene(config: &SceneConfig) -> Vec<SceneElement> {
    let mut out = Vec::new();
    let anchor = |i: usize| {
        config
            .zone_anchors
            .get(i)
            .copied()
            .unwrap_or(Vec3::new(0.0, -(i as f32) * 20.0, 0.0))
    };

    // Cage framing the whole travel range
    {
        let beam = hex_color(0x1e293b, 1.0);
        let mut b = ZoneBuilder {
            out: &mut out,
            zone: None,
            frame: Mat4::IDENTITY,
        };
        for x in [10.0, -10.0] {
            b.push(
                ElementKind::Beam,
                place(Vec3::new(x, 0.0, -10.0), Quat::IDENTITY, Vec3::new(0.5, 20.0, 0.5)),
                beam,
            );
        }
        for y in [10.0, -10.0] {
            b.push(
                ElementKind::Beam,
                place(Vec3::new(0.0, y, -10.0), Quat::IDENTITY, Vec3::new(40.0, 0.5, 0.5)),
                beam,
            );
        }
    }

    // Zone 0: hero pipe bundles and sparkles
    {
        let mut b = ZoneBuilder {
            out: &mut out,
            zone: Some(0),
            frame: Mat4::from_translation(anchor(0)),
        };
        let tilt = Mat4::from_quat(euler(0.2, 0.4, 0.8));
        b.pipe_bundle(
            tilt * Mat4::from_translation(Vec3::new(3.0, 2.0, 2.0)),
            hex_color(0x3b82f6, 1.0),
        );
        b.pipe_bundle(
            tilt * place(Vec3::new(-3.0, -2.0, -2.0), euler(0.0, 0.0, FRAC_PI_6), Vec3::ONE),
            hex_color(0x2563eb, 1.0),
        );
    }

    // Zone 1: product range, rods of increasing gauge
    {
        let mut b = ZoneBuilder {
            out: &mut out,
            zone: Some(1),
            frame: Mat4::from_translation(anchor(1)) * Mat4::from_quat(euler(FRAC_PI_3, 0.2, 0.0)),
        };
        for (i, r) in [0.2_f32, 0.4, 0.6, 1.2, 1.5].into_iter().enumerate() {
            let color = if i == 3 {
                hex_color(0x3b82f6, 1.0)
            } else {
                hex_color(0xcbd5e1, 1.0)
            };
            b.push(
                ElementKind::Rod,
                place(
                    Vec3::new((i as f32 - 2.0) * 2.5, 0.0, 0.0),
                    Quat::IDENTITY,
                    Vec3::new(2.0 * r, 12.0, 2.0 * r),
                ),
                color,
            );
        }
    }

    // Zone 2: logistics platform carrying a bundle
    {
        let mut b = ZoneBuilder {
            out: &mut out,
            zone: Some(2),
            frame: Mat4::from_translation(anchor(2)),
        };
        b.push(
            ElementKind::Platform,
            place(Vec3::ZERO, Quat::IDENTITY, Vec3::new(20.0, 0.4, 6.0)),
            hex_color(0x0f172a, 1.0),
        );
        b.pipe_bundle(
            place(Vec3::new(0.0, 2.0, 0.0), euler(0.0, 0.0, FRAC_PI_2), Vec3::splat(0.8)),
            hex_color(0x3b82f6, 1.0),
        );
    }

    // Zone 3: quality beacon over a dark mirror floor
    {
        let mut b = ZoneBuilder {
            out: &mut out,
            zone: Some(3),
            frame: Mat4::from_translation(anchor(3)),
        };
        b.push(
            ElementKind::Beacon,
            place(Vec3::ZERO, euler(FRAC_PI_4, 0.0, FRAC_PI_4), Vec3::splat(2.1)),
            hex_color(0x2563eb, 1.0),
        );
        b.push(
            ElementKind::Mirror,
            place(Vec3::new(0.0, -4.0, 0.0), Quat::IDENTITY, Vec3::new(20.0, 0.05, 20.0)),
            hex_color(0x050505, 1.0),
        );
    }

    // Sparkles last so density thinning only ever drops particles
    let mut rng = StdRng::seed_from_u64(config.seed);
    let sparkle = hex_color(0x3b82f6, 0.4);
    let half = SPARKLE_SPREAD * 0.5;
    let hero = anchor(0);
    for _ in 0..config.sparkle_count {
        let p = hero
            + Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            );
        out.push(SceneElement {
            kind: ElementKind::Sparkle,
            zone: Some(0),
            transform: place(p, Quat::IDENTITY, Vec3::splat(0.08)),
            color: sparkle,
        });
    }
    out
}
