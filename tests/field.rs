use constellation_engine::color::Color;
use constellation_engine::driver::{ForceClock, FrameDriver};
use constellation_engine::render::Surface;
use constellation_engine::{Field, FieldConfig, Particle};
use glam::DVec2;

/// Counts draw calls; contents are covered by the unit tests.
#[derive(Default)]
struct Tally {
    fades: usize,
    discs: usize,
    lines: usize,
}

impl Surface for Tally {
    fn fade(&mut self, _w: f64, _h: f64, _veil: Color) {
        self.fades += 1;
    }

    fn disc(&mut self, _c: DVec2, _r: f64, _fill: Color, _outline: Color, _ow: f64) {
        self.discs += 1;
    }

    fn line(&mut self, _from: DVec2, _to: DVec2, _stroke: Color, _w: f64) {
        self.lines += 1;
    }
}

const W: f64 = 800.0;
const H: f64 = 600.0;

/// Ten hand-placed particles; several start next to an edge and heading out.
fn seeded_ten() -> Vec<Particle> {
    let spots = [
        (799.9, 300.0, 0.20, 0.05),
        (0.05, 120.0, -0.15, 0.10),
        (400.0, 599.95, 0.00, 0.12),
        (250.0, 0.02, 0.07, -0.09),
        (400.0, 300.0, 0.24, -0.24),
        (12.0, 580.0, -0.21, 0.18),
        (790.0, 5.0, 0.11, -0.13),
        (640.0, 480.0, -0.03, 0.02),
        (100.0, 100.0, 0.25, 0.25),
        (555.5, 222.2, -0.19, -0.01),
    ];
    spots
        .iter()
        .enumerate()
        .map(|(i, &(x, y, vx, vy))| {
            let size = 1.0 + i as f64 * 0.5;
            Particle::new(DVec2::new(x, y), DVec2::new(vx, vy), size, Color::purple(i as f64 / 10.0))
        })
        .collect()
}

fn assert_in_bounds(field: &Field) {
    for p in field.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x < field.width(), "x out of range: {}", p.pos.x);
        assert!(p.pos.y >= 0.0 && p.pos.y < field.height(), "y out of range: {}", p.pos.y);
    }
}

fn assert_speed_capped(field: &Field) {
    let max = field.config().max_speed;
    for p in field.particles() {
        assert!(p.speed() <= max * (1.0 + 1e-12), "speed {} over cap", p.speed());
    }
}

#[test]
fn hundred_steps_stay_in_bounds_and_energy_moves_only_on_wrap() {
    let mut field = Field::from_particles(W, H, FieldConfig::default(), seeded_ten(), 0);
    let mut wrap_steps = 0;

    for _ in 0..100 {
        let before = field.total_kinetic_energy();
        let wrapped = field.integrate();
        let after = field.total_kinetic_energy();

        assert_in_bounds(&field);
        assert_speed_capped(&field);

        if wrapped == 0 {
            assert_eq!(after, before, "energy changed without a wrap");
        } else {
            wrap_steps += 1;
            assert!(after >= before * (1.0 - 1e-12), "wrap lost energy: {} -> {}", before, after);
        }
    }

    assert!(wrap_steps > 0, "scenario should exercise at least one wrap");
}

#[test]
fn particle_count_tracks_width() {
    assert_eq!(Field::new(1200.0, 900.0, FieldConfig::default(), 11).particles().len(), 80);
    assert_eq!(Field::new(300.0, 900.0, FieldConfig::default(), 11).particles().len(), 20);
}

#[test]
fn interleaved_clocks_keep_invariants() {
    // 60 Hz frames and 20 Hz force ticks on one thread, in timestamp order
    let cfg = FieldConfig::default();
    let mut field = Field::new(W, H, cfg, 2024);
    let mut driver = FrameDriver::new(false);
    let mut clock = ForceClock::new(cfg.force_period_ms);
    let mut surface = Tally::default();

    let frame_ms = 1000.0 / 60.0;
    let force_ms = clock.period_ms() as f64;
    let (mut next_frame, mut next_force) = (0.0, force_ms);
    let (mut frames, mut forces) = (0, 0);

    while next_frame < 3000.0 || next_force < 3000.0 {
        if next_frame <= next_force {
            // pointer sweeps across the field
            let t = next_frame / 3000.0;
            field.set_pointer(t * W, H / 2.0 + (t * 12.0).sin() * 200.0);
            assert!(driver.frame(&mut field, &mut surface));
            next_frame += frame_ms;
            frames += 1;
        } else {
            assert!(clock.fire(&mut field));
            next_force += force_ms;
            forces += 1;
        }
        assert_in_bounds(&field);
        assert_speed_capped(&field);
    }

    assert_eq!(surface.fades, frames);
    assert_eq!(surface.discs, frames * field.particles().len());
    assert!(surface.lines > 0);
    // ticks at 50, 100, ... 2950 ms
    assert_eq!(forces, 59);
}

#[test]
fn pointer_pushes_nearby_particles_outward() {
    let cfg = FieldConfig { damping: 1.0, ..FieldConfig::default() };
    let ps = vec![
        Particle::new(DVec2::new(350.0, 300.0), DVec2::ZERO, 3.0, Color::purple(0.0)),
        Particle::new(DVec2::new(450.0, 300.0), DVec2::ZERO, 3.0, Color::purple(0.0)),
        Particle::new(DVec2::new(400.0, 250.0), DVec2::ZERO, 3.0, Color::purple(0.0)),
    ];
    let mut field = Field::from_particles(W, H, cfg, ps, 0);
    field.set_pointer(400.0, 300.0);
    field.apply_forces();

    let v: Vec<DVec2> = field.particles().iter().map(|p| p.vel).collect();
    assert!(v[0].x < 0.0);
    assert!(v[1].x > 0.0);
    assert!(v[2].y < 0.0);
}

#[test]
fn resize_recentres_pointer_for_next_force_tick() {
    let mut field = Field::new(W, H, FieldConfig::default(), 3);
    field.set_pointer(10.0, 10.0);
    field.resize(1000.0, 400.0);
    assert_eq!(field.pointer(), DVec2::new(500.0, 200.0));

    field.apply_forces();
    field.integrate();
    assert_in_bounds(&field);
}
