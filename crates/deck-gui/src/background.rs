//! Ambient particle background.
//!
//! A flattened ring of particles drifts behind every slide: very slow
//! rotation, a subtle vertical breathing motion, and a tint that blends
//! toward a per-slide target color. The field consumes exactly one input
//! from the rest of the application - the active slide's tag - and owns
//! its own continuous animation; navigation timing never touches it.

use std::time::Instant;

use iced::widget::canvas::{self, Canvas, Geometry, Path};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Theme, mouse};

use deck_core::SlideTag;

use crate::message::Message;
use crate::theme::with_alpha;

/// Particle count. Few points, deliberately sparse.
const PARTICLE_COUNT: usize = 400;

/// Golden angle in radians; spreads ring positions without clustering.
const GOLDEN_ANGLE: f32 = 2.399_963_2;

/// Fixed tilt of the ring plane toward the camera, radians.
const RING_TILT: f32 = 0.2;

// =============================================================================
// TINT TABLE
// =============================================================================

/// Target tint for a slide. Monochrome with a slight per-section cast.
pub fn tint_for(tag: SlideTag) -> Color {
    match tag {
        // Deep blue
        SlideTag::Intro => Color::from_rgb(0.2, 0.4, 0.6),
        // Subtle warmth, not bright red
        SlideTag::Problem => Color::from_rgb(0.6, 0.3, 0.3),
        // Tech purple
        SlideTag::RelatedWork => Color::from_rgb(0.5, 0.2, 0.6),
        // Teal
        SlideTag::Methodology => Color::from_rgb(0.1, 0.5, 0.6),
        // Clean silver
        SlideTag::Results => Color::from_rgb(0.8, 0.8, 0.9),
        // Neutral grey
        SlideTag::FutureWork => Color::from_rgb(0.5, 0.5, 0.5),
        // Indigo
        SlideTag::Conclusion => Color::from_rgb(0.3, 0.3, 0.7),
        // Accent pink
        SlideTag::References => Color::from_rgb(1.0, 0.2, 0.5),
    }
}

// =============================================================================
// STATE
// =============================================================================

struct Particle {
    radius: f32,
    angle: f32,
    height: f32,
    size: f32,
}

/// Owned animation state of the particle field.
pub struct BackgroundState {
    particles: Vec<Particle>,
    rotation: f32,
    clock: f32,
    tint: Color,
    last_frame: Option<Instant>,
    cache: canvas::Cache,
}

impl BackgroundState {
    /// Field with a deterministic ring scatter and a neutral tint.
    pub fn new() -> Self {
        Self {
            particles: scatter(),
            rotation: 0.0,
            clock: 0.0,
            tint: Color::from_rgb(0.5, 0.5, 0.5),
            last_frame: None,
            cache: canvas::Cache::new(),
        }
    }

    /// Current tint, blended toward the active slide's target.
    pub fn tint(&self) -> Color {
        self.tint
    }

    /// Advance the field to `now`, blending toward `target`.
    ///
    /// The first tick only establishes the frame baseline; large gaps
    /// (window hidden, debugger pauses) are clamped so the field never
    /// jumps.
    pub fn tick(&mut self, now: Instant, target: Color) {
        let dt = match self.last_frame {
            Some(last) => now.duration_since(last).as_secs_f32().min(0.1),
            None => 0.0,
        };
        self.last_frame = Some(now);

        // Very slow, deliberate rotation; subtle breathing.
        self.rotation += dt / 40.0;
        self.clock += dt;
        self.tint = mix(self.tint, target, dt.min(1.0));
        self.cache.clear();
    }

    /// The canvas element filling the window behind all content.
    pub fn view(&self) -> Element<'_, Message> {
        Canvas::new(Field { state: self })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl Default for BackgroundState {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic ring scatter.
///
/// Golden-angle placement with low-discrepancy fractional offsets stands
/// in for randomness: the same cloud every launch, no RNG dependency.
fn scatter() -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|i| {
            let n = i as f32;
            Particle {
                angle: n * GOLDEN_ANGLE,
                radius: 5.0 + 5.0 * fract(n * 0.754_877_7),
                height: (fract(n * 0.618_034) - 0.5) * 2.0,
                size: 1.0 + 1.4 * fract(n * 0.414_213_6),
            }
        })
        .collect()
}

fn fract(x: f32) -> f32 {
    x - x.floor()
}

fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: 1.0,
    }
}

// =============================================================================
// CANVAS PROGRAM
// =============================================================================

struct Field<'a> {
    state: &'a BackgroundState,
}

impl canvas::Program<Message> for Field<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.state.cache.draw(renderer, bounds.size(), |frame| {
            let center = frame.center();
            let unit = frame.size().height / 14.0;
            let (tilt_sin, tilt_cos) = RING_TILT.sin_cos();
            let breathe = (self.state.clock * 0.1).sin() * 0.1;

            for particle in &self.state.particles {
                let swept = particle.angle + self.state.rotation;
                let x = particle.radius * swept.cos();
                let z = particle.radius * swept.sin();
                let y = particle.height + breathe;

                // Tilt the ring plane toward the camera, then project with
                // a mild perspective falloff.
                let ty = y * tilt_cos - z * tilt_sin;
                let tz = y * tilt_sin + z * tilt_cos;
                let scale = 12.0 / (14.0 + tz);

                let screen = Point::new(
                    center.x + x * unit * scale,
                    center.y - ty * unit * scale,
                );
                let depth = ((10.0 - tz) / 20.0).clamp(0.0, 1.0);
                let alpha = 0.08 + 0.35 * depth;

                frame.fill(
                    &Path::circle(screen, particle.size * scale),
                    with_alpha(self.state.tint, alpha),
                );
            }
        });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn scatter_is_deterministic_and_ring_shaped() {
        let a = scatter();
        let b = scatter();
        assert_eq!(a.len(), PARTICLE_COUNT);
        for (p, q) in a.iter().zip(&b) {
            assert_eq!(p.radius, q.radius);
            assert_eq!(p.angle, q.angle);
        }
        for p in &a {
            assert!((5.0..10.0).contains(&p.radius));
            assert!((-1.0..=1.0).contains(&p.height));
        }
    }

    #[test]
    fn tint_blends_toward_target() {
        let mut field = BackgroundState::new();
        let target = tint_for(SlideTag::References);
        let t0 = Instant::now();
        field.tick(t0, target);
        let start_gap = (field.tint().r - target.r).abs();
        for i in 1..=120 {
            field.tick(t0 + Duration::from_millis(16 * i), target);
        }
        let end_gap = (field.tint().r - target.r).abs();
        assert!(end_gap < start_gap);
        assert!(end_gap < 0.1, "two seconds should nearly settle the tint");
    }

    #[test]
    fn frame_gaps_are_clamped() {
        let mut field = BackgroundState::new();
        let t0 = Instant::now();
        field.tick(t0, tint_for(SlideTag::Intro));
        let before = field.rotation;
        // An hour-long stall advances the field by at most one clamped step.
        field.tick(t0 + Duration::from_secs(3600), tint_for(SlideTag::Intro));
        assert!(field.rotation - before <= 0.1 / 40.0 + f32::EPSILON);
    }

    #[test]
    fn every_slide_has_a_tint() {
        for tag in SlideTag::ALL {
            let tint = tint_for(tag);
            assert!(tint.r >= 0.0 && tint.r <= 1.0);
        }
    }
}
