// Shared tuning constants for the hero wave and the page animations.

// Hero wave bundle
pub const WAVE_STRANDS: usize = 14; // superimposed lines per frame
pub const WAVE_TIME_STEP: f64 = 0.02; // clock advance per frame, not wall-clock
pub const WAVE_SAMPLE_STEP: f64 = 4.0; // logical px between path samples
pub const WAVE_AMP_BASE: f64 = 58.0;
pub const WAVE_AMP_SPAN: f64 = 42.0;
pub const WAVE_FREQ_BASE: f64 = 10.0;
pub const WAVE_FREQ_SPAN: f64 = 4.0;
pub const WAVE_PHASE_RATE_BASE: f64 = 1.2;
pub const WAVE_PHASE_RATE_SPAN: f64 = 0.6;
pub const WAVE_BREATH_DEPTH: f64 = 0.16; // global amplitude pulse depth
pub const WAVE_BREATH_RATE: f64 = 0.35;
pub const WAVE_ENVELOPE_VARIANCE: f64 = 0.024; // Gaussian falloff toward the edges
pub const WAVE_RIPPLE_FREQ: f64 = 80.0; // high-frequency texture term
pub const WAVE_RIPPLE_RATE: f64 = 3.0;
pub const WAVE_RIPPLE_AMP: f64 = 3.0;
pub const WAVE_ALPHA_BASE: f64 = 0.12; // outer strands read bolder
pub const WAVE_ALPHA_SPAN: f64 = 0.14;
pub const WAVE_WIDTH_BASE: f64 = 0.6;
pub const WAVE_WIDTH_SPAN: f64 = 0.45;

// Live-stats simulator
pub const TELEMETRY_INTERVAL_SEC: f64 = 0.9; // update cadence
pub const TELEMETRY_INITIAL_FRAME: u64 = 214;
pub const TELEMETRY_INITIAL_RATE_HZ: i32 = 120;
pub const TELEMETRY_RATE_MIN_HZ: i32 = 110;
pub const TELEMETRY_RATE_MAX_HZ: i32 = 140;
pub const TELEMETRY_LEVEL_JITTER: f64 = 6.0;
pub const TELEMETRY_DEFAULT_LEVEL_BASE: f64 = 60.0;
pub const TELEMETRY_ASYMMETRY_BASE: f64 = 11.0;
pub const TELEMETRY_ASYMMETRY_JITTER: f64 = 3.0;
pub const TELEMETRY_ASYMMETRY_MIN: u8 = 6;
pub const TELEMETRY_ASYMMETRY_MAX: u8 = 18;
pub const TELEMETRY_IMPACT_BASE: f64 = 32.0;
pub const TELEMETRY_IMPACT_JITTER: f64 = 6.0;
pub const TELEMETRY_IMPACT_MIN: u8 = 18;
pub const TELEMETRY_IMPACT_MAX: u8 = 52;

// Intro curtain (ms)
pub const CURTAIN_HOLD_MS: u64 = 4200; // logo spin before the curtains open
pub const CURTAIN_OPEN_MS: u64 = 15200;
pub const CURTAIN_FADE_MS: u64 = 900;
pub const CURTAIN_LINGER_MS: u64 = 150; // slack before the overlay is removed

// Overview constellation
pub const STAR_COUNT: usize = 26;
pub const STAR_TWINKLE_BASE_SEC: f32 = 3.6;
pub const STAR_TWINKLE_SPAN_SEC: f32 = 4.8;
pub const STAR_DELAY_SPAN_SEC: f32 = 4.5;
pub const STAR_TINT_PROB: f32 = 0.3;
pub const PANEL_MAX_TILT_DEG: f32 = 4.5; // kept subtle to avoid fighting hover
pub const PANEL_MAX_LIFT_PX: f32 = 2.0;
pub const PANEL_FLOAT_STAGGER_SEC: f32 = 0.55;
pub const PANEL_FLOAT_JITTER_SEC: f32 = 0.25;
