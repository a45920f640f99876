use crate::constants::*;
use rand::prelude::*;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TelemetryFrame {
    pub frame: u64,
    pub rate_hz: i32,
    pub levels: SmallVec<[u8; 8]>,
    pub asymmetry: u8,
    pub impact: u8,
}

/// Simulated "live" muscle-map readouts. Deterministic per seed; emits
/// one frame per elapsed interval while running, nothing while hidden.
pub struct TelemetrySim {
    channel_bases: Vec<f64>,
    rng: StdRng,
    running: bool,
    interval_accum: f64,
    frame: u64,
    rate_hz: i32,
}

impl TelemetrySim {
    pub fn new(channel_bases: Vec<f64>, initial_frame: u64, initial_rate_hz: i32, seed: u64) -> Self {
        Self {
            channel_bases,
            rng: StdRng::seed_from_u64(seed),
            running: false,
            interval_accum: 0.0,
            frame: initial_frame,
            rate_hz: initial_rate_hz,
        }
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn rate_hz(&self) -> i32 {
        self.rate_hz
    }

    pub fn tick(&mut self, dt: Duration, out_frames: &mut Vec<TelemetryFrame>) {
        if !self.running {
            // time spent off-screen does not bank updates
            return;
        }
        self.interval_accum += dt.as_secs_f64();
        while self.interval_accum >= TELEMETRY_INTERVAL_SEC {
            self.interval_accum -= TELEMETRY_INTERVAL_SEC;
            let frame = self.step();
            out_frames.push(frame);
        }
    }

    fn step(&mut self) -> TelemetryFrame {
        self.frame += self.rng.gen_range(1u64..=2);

        if self.rng.gen::<f64>() > 0.85 {
            let delta = if self.rng.gen::<f64>() > 0.5 { 1 } else { -1 };
            self.rate_hz = (self.rate_hz + delta).clamp(TELEMETRY_RATE_MIN_HZ, TELEMETRY_RATE_MAX_HZ);
        }

        let mut levels = SmallVec::new();
        for i in 0..self.channel_bases.len() {
            let base = self.channel_bases[i];
            levels.push(self.jitter(base, TELEMETRY_LEVEL_JITTER).round() as u8);
        }

        let asymmetry = (self.jitter(TELEMETRY_ASYMMETRY_BASE, TELEMETRY_ASYMMETRY_JITTER).round()
            as u8)
            .clamp(TELEMETRY_ASYMMETRY_MIN, TELEMETRY_ASYMMETRY_MAX);
        let impact = (self.jitter(TELEMETRY_IMPACT_BASE, TELEMETRY_IMPACT_JITTER).round() as u8)
            .clamp(TELEMETRY_IMPACT_MIN, TELEMETRY_IMPACT_MAX);

        TelemetryFrame {
            frame: self.frame,
            rate_hz: self.rate_hz,
            levels,
            asymmetry,
            impact,
        }
    }

    fn jitter(&mut self, base: f64, amount: f64) -> f64 {
        let offset = self.rng.gen::<f64>() * amount * 2.0 - amount;
        (base + offset).clamp(0.0, 100.0)
    }
}
