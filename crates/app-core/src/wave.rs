use crate::constants::*;
use crate::surface::{DrawSurface, HostMetrics, StrokeStyle};
use std::f64::consts::TAU;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WaveConfigError {
    #[error("strand count must be at least 2 (got {0})")]
    TooFewStrands(usize),
    #[error("time step must be positive (got {0})")]
    NonPositiveTimeStep(f64),
    #[error("sample step must be positive (got {0})")]
    NonPositiveSampleStep(f64),
    #[error("envelope variance must be positive (got {0})")]
    NonPositiveEnvelopeVariance(f64),
}

/// Tuning for the strand bundle. Derived per-strand values are pure
/// functions of the strand's position fraction `p` in \[0, 1\].
#[derive(Clone, Debug)]
pub struct WaveParams {
    pub strand_count: usize,
    pub time_step: f64,
    pub sample_step: f64,
    pub amp_base: f64,
    pub amp_span: f64,
    pub freq_base: f64,
    pub freq_span: f64,
    pub phase_rate_base: f64,
    pub phase_rate_span: f64,
    pub breath_depth: f64,
    pub breath_rate: f64,
    pub envelope_variance: f64,
    pub ripple_freq: f64,
    pub ripple_rate: f64,
    pub ripple_amp: f64,
    pub alpha_base: f64,
    pub alpha_span: f64,
    pub width_base: f64,
    pub width_span: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            strand_count: WAVE_STRANDS,
            time_step: WAVE_TIME_STEP,
            sample_step: WAVE_SAMPLE_STEP,
            amp_base: WAVE_AMP_BASE,
            amp_span: WAVE_AMP_SPAN,
            freq_base: WAVE_FREQ_BASE,
            freq_span: WAVE_FREQ_SPAN,
            phase_rate_base: WAVE_PHASE_RATE_BASE,
            phase_rate_span: WAVE_PHASE_RATE_SPAN,
            breath_depth: WAVE_BREATH_DEPTH,
            breath_rate: WAVE_BREATH_RATE,
            envelope_variance: WAVE_ENVELOPE_VARIANCE,
            ripple_freq: WAVE_RIPPLE_FREQ,
            ripple_rate: WAVE_RIPPLE_RATE,
            ripple_amp: WAVE_RIPPLE_AMP,
            alpha_base: WAVE_ALPHA_BASE,
            alpha_span: WAVE_ALPHA_SPAN,
            width_base: WAVE_WIDTH_BASE,
            width_span: WAVE_WIDTH_SPAN,
        }
    }
}

impl WaveParams {
    pub fn validate(&self) -> Result<(), WaveConfigError> {
        if self.strand_count < 2 {
            return Err(WaveConfigError::TooFewStrands(self.strand_count));
        }
        if !(self.time_step > 0.0) {
            return Err(WaveConfigError::NonPositiveTimeStep(self.time_step));
        }
        if !(self.sample_step > 0.0) {
            return Err(WaveConfigError::NonPositiveSampleStep(self.sample_step));
        }
        if !(self.envelope_variance > 0.0) {
            return Err(WaveConfigError::NonPositiveEnvelopeVariance(
                self.envelope_variance,
            ));
        }
        Ok(())
    }

    /// Global amplitude pulse shared by all strands.
    pub fn breath(&self, t: f64) -> f64 {
        1.0 + self.breath_depth * (t * self.breath_rate).sin()
    }

    pub fn amplitude(&self, p: f64, breath: f64) -> f64 {
        (self.amp_base + p * self.amp_span) * breath
    }

    pub fn frequency(&self, p: f64) -> f64 {
        self.freq_base + p * self.freq_span
    }

    pub fn phase_rate(&self, p: f64) -> f64 {
        self.phase_rate_base + p * self.phase_rate_span
    }

    /// Bell-shaped multiplier suppressing the wave toward the
    /// horizontal edges; peaks at 1 for `u = 0.5`.
    pub fn edge_envelope(&self, u: f64) -> f64 {
        (-(u - 0.5).powi(2) / self.envelope_variance).exp()
    }

    pub fn stroke_style(&self, p: f64) -> StrokeStyle {
        StrokeStyle {
            alpha: self.alpha_base + p * self.alpha_span,
            width: self.width_base + p * self.width_span,
        }
    }
}

/// Position of strand `index` across the bundle, 0 at the innermost
/// strand and 1 at the outermost. `count` must be at least 2.
#[inline]
pub fn strand_fraction(index: usize, count: usize) -> f64 {
    index as f64 / (count - 1) as f64
}

/// Per-frame synthesis of the hero wave. The clock is a frame counter
/// times a fixed step, so `time()` is exact and strictly monotonic for
/// the life of the engine; it resets only when a fresh engine is built.
pub struct WaveEngine {
    params: WaveParams,
    frames: u64,
    width: f64,
    height: f64,
    center_y: f64,
    dpr: f64,
}

impl WaveEngine {
    pub fn new(params: WaveParams) -> Result<Self, WaveConfigError> {
        params.validate()?;
        Ok(Self {
            params,
            frames: 0,
            width: 1.0,
            height: 1.0,
            center_y: 0.5,
            dpr: 1.0,
        })
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn time(&self) -> f64 {
        self.frames as f64 * self.params.time_step
    }

    pub fn logical_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    pub fn device_pixel_ratio(&self) -> f64 {
        self.dpr
    }

    /// Recompute the logical size from the host box and push the
    /// matching backing size and DPR transform to the surface. The DPR
    /// is sampled here, once per resize, never per frame.
    pub fn resize(&mut self, host: &impl HostMetrics, surface: &mut impl DrawSurface) {
        let (box_w, box_h) = host.surface_box();
        self.width = box_w.floor().max(1.0);
        self.height = box_h.floor().max(1.0);
        self.center_y = self.height / 2.0;
        self.dpr = host.device_pixel_ratio().max(1.0);

        let backing_w = (self.width * self.dpr).round().max(1.0) as u32;
        let backing_h = (self.height * self.dpr).round().max(1.0) as u32;
        surface.set_backing_size(backing_w, backing_h);
        surface.set_pixel_scale(self.dpr);
    }

    /// Advance the clock one step and redraw the full bundle. Each
    /// strand is one continuous path sampled every `sample_step`
    /// logical pixels across the width.
    pub fn tick(&mut self, surface: &mut impl DrawSurface) {
        self.frames += 1;
        let t = self.time();

        surface.clear(self.width, self.height);
        let breath = self.params.breath(t);

        for i in 0..self.params.strand_count {
            let p = strand_fraction(i, self.params.strand_count);
            let amp = self.params.amplitude(p, breath);
            let freq = self.params.frequency(p);
            let phase = t * self.params.phase_rate(p);

            surface.begin_path();
            let mut x = 0.0;
            while x <= self.width {
                let y = self.sample_height(x, i as f64, amp, freq, phase, t);
                if x == 0.0 {
                    surface.move_to(x, y);
                } else {
                    surface.line_to(x, y);
                }
                x += self.params.sample_step;
            }
            surface.stroke(&self.params.stroke_style(p));
        }
    }

    fn sample_height(&self, x: f64, strand: f64, amp: f64, freq: f64, phase: f64, t: f64) -> f64 {
        let u = x / self.width;
        let envelope = self.params.edge_envelope(u);
        self.center_y
            + (u * freq * TAU + phase).sin() * amp * envelope
            + (u * self.params.ripple_freq * TAU + t * self.params.ripple_rate + strand).sin()
                * self.params.ripple_amp
                * envelope
    }
}
