use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

/// One decorative star in the overview layer. Position is a percentage
/// of the layer box; the timing fields feed CSS custom properties.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub position: Vec2,
    pub twinkle_period_sec: f32,
    pub twinkle_delay_sec: f32,
    pub tinted: bool,
}

pub fn generate_stars(count: usize, seed: u64) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Star {
            position: Vec2::new(rng.gen::<f32>() * 100.0, rng.gen::<f32>() * 100.0),
            twinkle_period_sec: STAR_TWINKLE_BASE_SEC + rng.gen::<f32>() * STAR_TWINKLE_SPAN_SEC,
            twinkle_delay_sec: rng.gen::<f32>() * STAR_DELAY_SPAN_SEC,
            tinted: rng.gen::<f32>() < STAR_TINT_PROB,
        })
        .collect()
}

/// Animation-delay offset for the floating panel at `index`, staggered
/// so neighbours never bob in sync.
pub fn float_stagger_sec(index: usize, rng: &mut impl Rng) -> f32 {
    index as f32 * PANEL_FLOAT_STAGGER_SEC + rng.gen::<f32>() * PANEL_FLOAT_JITTER_SEC
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelTilt {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub lift_px: f32,
}

/// Map a cursor position (unit coordinates over the wrap box) to the
/// panel transform: tilt toward the cursor, lift with distance from
/// center. Centered cursor means no transform at all.
pub fn panel_tilt(cursor: Vec2, max_tilt_deg: f32, max_lift_px: f32) -> PanelTilt {
    let cx = cursor.x - 0.5;
    let cy = cursor.y - 0.5;
    PanelTilt {
        rotate_x_deg: -cy * max_tilt_deg,
        rotate_y_deg: cx * max_tilt_deg,
        lift_px: (cx.abs() + cy.abs()) * max_lift_px,
    }
}
