// Host-side tests for the hero wave engine, run against a recording
// surface so every drawing call can be asserted on.

use app_core::constants::*;
use app_core::lifecycle::WaveInstance;
use app_core::surface::{DrawSurface, HostMetrics, StrokeStyle};
use app_core::wave::{strand_fraction, WaveConfigError, WaveEngine, WaveParams};

#[derive(Default)]
struct RecordingSurface {
    backing: Vec<(u32, u32)>,
    scales: Vec<f64>,
    clears: usize,
    paths: Vec<Vec<(f64, f64)>>,
    strokes: Vec<StrokeStyle>,
}

impl DrawSurface for RecordingSurface {
    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.backing.push((width, height));
    }
    fn set_pixel_scale(&mut self, dpr: f64) {
        self.scales.push(dpr);
    }
    fn clear(&mut self, _width: f64, _height: f64) {
        self.clears += 1;
    }
    fn begin_path(&mut self) {
        self.paths.push(Vec::new());
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.paths.last_mut().expect("move_to before begin_path").push((x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.paths.last_mut().expect("line_to before begin_path").push((x, y));
    }
    fn stroke(&mut self, style: &StrokeStyle) {
        self.strokes.push(*style);
    }
}

struct FixedHost {
    dpr: f64,
    width: f64,
    height: f64,
}

impl HostMetrics for FixedHost {
    fn device_pixel_ratio(&self) -> f64 {
        self.dpr
    }
    fn surface_box(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

fn engine() -> WaveEngine {
    WaveEngine::new(WaveParams::default()).expect("default params are valid")
}

#[test]
fn strand_fraction_spans_unit_interval_and_increases() {
    for count in [2usize, 3, 14, 50] {
        assert_eq!(strand_fraction(0, count), 0.0);
        assert_eq!(strand_fraction(count - 1, count), 1.0);
        let mut prev = -1.0;
        for i in 0..count {
            let p = strand_fraction(i, count);
            assert!((0.0..=1.0).contains(&p), "p out of range for {i}/{count}");
            assert!(p > prev, "fraction not increasing at strand {i} of {count}");
            prev = p;
        }
    }
}

#[test]
fn strand_profile_grows_with_fraction() {
    let params = WaveParams::default();
    let mut prev_amp = f64::NEG_INFINITY;
    let mut prev_freq = f64::NEG_INFINITY;
    let mut prev_rate = f64::NEG_INFINITY;
    let mut prev_alpha = f64::NEG_INFINITY;
    let mut prev_width = f64::NEG_INFINITY;
    for i in 0..=20 {
        let p = i as f64 / 20.0;
        let amp = params.amplitude(p, 1.0);
        let freq = params.frequency(p);
        let rate = params.phase_rate(p);
        let style = params.stroke_style(p);
        assert!(amp >= prev_amp, "amplitude dipped at p={p}");
        assert!(freq >= prev_freq, "frequency dipped at p={p}");
        assert!(rate >= prev_rate, "phase rate dipped at p={p}");
        assert!(style.alpha >= prev_alpha, "alpha dipped at p={p}");
        assert!(style.width >= prev_width, "width dipped at p={p}");
        prev_amp = amp;
        prev_freq = freq;
        prev_rate = rate;
        prev_alpha = style.alpha;
        prev_width = style.width;
    }
}

#[test]
fn envelope_peaks_at_center_and_dies_at_edges() {
    let params = WaveParams::default();
    let peak = params.edge_envelope(0.5);
    assert!((peak - 1.0).abs() < 1e-12, "peak should be 1, got {peak}");
    for i in 0..=100 {
        let u = i as f64 / 100.0;
        let env = params.edge_envelope(u);
        assert!(env <= peak, "envelope exceeds its center value at u={u}");
        assert!(env >= 0.0);
    }
    assert!(params.edge_envelope(0.0) <= 1e-3, "left edge not suppressed");
    assert!(params.edge_envelope(1.0) <= 1e-3, "right edge not suppressed");
}

#[test]
fn breath_oscillates_around_unity() {
    let params = WaveParams::default();
    for k in 0..1000 {
        let t = k as f64 * 0.1;
        let b = params.breath(t);
        assert!(b >= 1.0 - params.breath_depth - 1e-12);
        assert!(b <= 1.0 + params.breath_depth + 1e-12);
    }
}

#[test]
fn resize_applies_dpr_scaling_law() {
    for dpr in [1.0, 1.5, 2.0, 3.0] {
        let mut engine = engine();
        let mut surface = RecordingSurface::default();
        let host = FixedHost { dpr, width: 800.0, height: 200.0 };
        engine.resize(&host, &mut surface);

        let expected = ((800.0f64 * dpr).round() as u32, (200.0f64 * dpr).round() as u32);
        assert_eq!(surface.backing.last().copied(), Some(expected), "dpr={dpr}");
        assert_eq!(surface.scales.last().copied(), Some(dpr));
        assert_eq!(engine.center_y(), 100.0);
        assert_eq!(engine.logical_size(), (800.0, 200.0));
    }
}

#[test]
fn resize_twice_is_idempotent() {
    let mut engine = engine();
    let mut surface = RecordingSurface::default();
    let host = FixedHost { dpr: 2.0, width: 799.6, height: 200.4 };
    engine.resize(&host, &mut surface);
    engine.resize(&host, &mut surface);

    assert_eq!(surface.backing.len(), 2);
    assert_eq!(surface.backing[0], surface.backing[1], "backing size drifted");
    assert_eq!(surface.backing[0], (1598, 400));
}

#[test]
fn resize_clamps_degenerate_boxes() {
    let mut engine = engine();
    let mut surface = RecordingSurface::default();
    let host = FixedHost { dpr: 0.5, width: 0.0, height: 0.0 };
    engine.resize(&host, &mut surface);

    assert_eq!(surface.backing.last().copied(), Some((1, 1)));
    assert_eq!(engine.device_pixel_ratio(), 1.0, "dpr below 1 should clamp");
    assert_eq!(engine.logical_size(), (1.0, 1.0));
}

#[test]
fn clock_advances_by_the_fixed_step_only() {
    let mut engine = engine();
    let mut surface = RecordingSurface::default();
    let host = FixedHost { dpr: 1.0, width: 800.0, height: 200.0 };
    engine.resize(&host, &mut surface);

    assert_eq!(engine.time(), 0.0);
    for _ in 0..100 {
        engine.tick(&mut surface);
    }
    assert_eq!(engine.frames(), 100);
    assert_eq!(engine.time(), 100.0 * WAVE_TIME_STEP);
}

#[test]
fn tick_strokes_every_strand_without_bad_coordinates() {
    let mut engine = engine();
    let mut surface = RecordingSurface::default();
    let host = FixedHost { dpr: 1.0, width: 800.0, height: 200.0 };
    engine.resize(&host, &mut surface);

    for _ in 0..100 {
        engine.tick(&mut surface);
    }

    assert_eq!(surface.clears, 100);
    assert_eq!(surface.paths.len(), WAVE_STRANDS * 100);
    assert_eq!(surface.strokes.len(), WAVE_STRANDS * 100);

    let samples_per_path = (800.0 / WAVE_SAMPLE_STEP) as usize + 1;
    for (n, path) in surface.paths.iter().enumerate() {
        assert_eq!(path.len(), samples_per_path, "path {n} sample count");
        assert_eq!(path[0].0, 0.0, "path {n} does not start at the left edge");
        assert_eq!(path[path.len() - 1].0, 800.0, "path {n} does not reach the right edge");
        for &(x, y) in path {
            assert!(x.is_finite() && y.is_finite(), "non-finite sample in path {n}");
        }
    }

    // innermost vs outermost strand follow the linear depth cue
    let first = surface.strokes[0];
    let last = surface.strokes[WAVE_STRANDS - 1];
    assert!((first.alpha - WAVE_ALPHA_BASE).abs() < 1e-12);
    assert!((first.width - WAVE_WIDTH_BASE).abs() < 1e-12);
    assert!((last.alpha - first.alpha - WAVE_ALPHA_SPAN).abs() < 1e-12);
    assert!((last.width - first.width - WAVE_WIDTH_SPAN).abs() < 1e-12);
}

#[test]
fn invalid_configs_are_rejected() {
    let mut params = WaveParams::default();
    params.strand_count = 1;
    assert_eq!(WaveEngine::new(params).err(), Some(WaveConfigError::TooFewStrands(1)));

    let mut params = WaveParams::default();
    params.time_step = 0.0;
    assert!(matches!(
        WaveEngine::new(params),
        Err(WaveConfigError::NonPositiveTimeStep(_))
    ));

    let mut params = WaveParams::default();
    params.sample_step = -4.0;
    assert!(matches!(
        WaveEngine::new(params),
        Err(WaveConfigError::NonPositiveSampleStep(_))
    ));

    let mut params = WaveParams::default();
    params.envelope_variance = 0.0;
    assert!(matches!(
        WaveEngine::new(params),
        Err(WaveConfigError::NonPositiveEnvelopeVariance(_))
    ));
}

#[test]
fn attach_without_a_surface_yields_nothing() {
    let host = FixedHost { dpr: 2.0, width: 800.0, height: 200.0 };
    let instance =
        WaveInstance::<FixedHost, RecordingSurface>::attach(host, None, WaveParams::default());
    assert!(instance.is_none(), "missing surface must be treated as unavailable");
}

#[test]
fn attach_sizes_the_backing_store_before_the_first_frame() {
    let host = FixedHost { dpr: 2.0, width: 800.0, height: 200.0 };
    let instance =
        WaveInstance::attach(host, Some(RecordingSurface::default()), WaveParams::default())
            .expect("attach with a surface succeeds");

    assert!(instance.is_running());
    assert_eq!(instance.surface().backing, vec![(1600, 400)]);
    assert_eq!(instance.surface().clears, 0, "no frame should have drawn yet");
    assert_eq!(instance.engine().center_y(), 100.0);
}

#[test]
fn frames_and_resizes_stop_after_detach() {
    let host = FixedHost { dpr: 1.0, width: 800.0, height: 200.0 };
    let mut instance =
        WaveInstance::attach(host, Some(RecordingSurface::default()), WaveParams::default())
            .expect("attach with a surface succeeds");

    assert!(instance.on_frame(), "a running instance keeps scheduling");
    assert_eq!(instance.surface().clears, 1);

    instance.detach();
    assert!(!instance.is_running());
    assert!(!instance.on_frame(), "a queued frame after detach is a no-op");
    assert_eq!(instance.surface().clears, 1, "no drawing after detach");

    let backing_calls = instance.surface().backing.len();
    instance.on_resize();
    assert_eq!(instance.surface().backing.len(), backing_calls, "no resize after detach");

    // detach twice is fine
    instance.detach();
    assert!(!instance.on_frame());
}

#[test]
fn detach_before_any_frame_is_safe() {
    let host = FixedHost { dpr: 1.0, width: 640.0, height: 120.0 };
    let mut instance =
        WaveInstance::attach(host, Some(RecordingSurface::default()), WaveParams::default())
            .expect("attach with a surface succeeds");
    instance.detach();
    instance.detach();
    assert_eq!(instance.surface().clears, 0);
}

#[test]
fn rejected_config_never_touches_the_surface() {
    let mut params = WaveParams::default();
    params.strand_count = 0;
    let host = FixedHost { dpr: 1.0, width: 800.0, height: 200.0 };
    let instance = WaveInstance::attach(host, Some(RecordingSurface::default()), params);
    assert!(instance.is_none());
}
