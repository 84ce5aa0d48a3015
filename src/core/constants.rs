// Tuning defaults shared by the slider core and the web frontend.

// Progress spring (over-damped: zeta = 30 / (2 * sqrt(80)) ~ 1.68)
pub const SPRING_STIFFNESS: f32 = 80.0;
pub const SPRING_DAMPING: f32 = 30.0;
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_REST_DELTA: f32 = 0.001; // snap to target inside this distance
pub const SPRING_REST_SPEED: f32 = 0.01; // ...and below this speed (units/sec)
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 120.0;
pub const SPRING_MAX_DT_SEC: f32 = 0.25; // long stalls (background tab) are capped

// Scene travel
pub const TRAVEL_DISTANCE: f32 = 70.0; // world units covered by progress 0..1
pub const ROOT_LERP_RATE: f32 = 6.32; // per second; matches 0.1 per frame at 60 Hz
pub const SWAY_SPEED: f32 = 0.1; // rad/sec of the sway phase
pub const SWAY_AMPLITUDE: f32 = 0.03; // radians around Y

// Zone anchors (world-space offsets of each stage's decorative group)
pub const ZONE_ANCHORS: [[f32; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [0.0, -20.0, -10.0],
    [0.0, -42.0, 0.0],
    [0.0, -65.0, 0.0],
];

// Overlay
pub const TRANSITION_SECS: f32 = 0.8;
pub const OVERLAY_SLIDE_PX: f32 = 100.0;

// Section watcher
pub const SECTION_THRESHOLD: f64 = 0.3;
pub const SECTION_ROOT_MARGIN: &str = "-20% 0px -20% 0px";

// Quality governor
pub const QUALITY_SAMPLE_FRAMES: usize = 40;
pub const QUALITY_FPS_LOWER: f32 = 45.0;
pub const QUALITY_FPS_UPPER: f32 = 58.0;
pub const QUALITY_PIXEL_RATIO_LOW: f32 = 1.0;
pub const QUALITY_PIXEL_RATIO_HIGH: f32 = 1.5;
pub const QUALITY_DENSITY_LOW: f32 = 0.5;
pub const QUALITY_DENSITY_HIGH: f32 = 1.0;

// Camera
pub const CAMERA_Z: f32 = 15.0;
pub const CAMERA_FOV_DEG: f32 = 50.0;

// Decorative particles
pub const SPARKLE_COUNT: usize = 100;
pub const SPARKLE_SPREAD: f32 = 30.0;
pub const SCENE_SEED: u64 = 1991;
pub const AMBIENT_DENSITY_PEAK: f32 = 1.5; // densest section preset shows every sparkle

// Header auto-hide
pub const HEADER_HIDE_AFTER_PX: f64 = 60.0;

// Product detail zoom: 1.0 to 3.0 in 0.2 steps
pub const ZOOM_STEP: f32 = 0.2;
pub const ZOOM_MAX_STEPS: u8 = 10;
