// Integrator tests: regime selection, convergence, modifiers and the
// rotation/scale bookkeeping. Engines built from the same seed are identical,
// which lets the modifier tests compare against an untouched twin.

use glam::Vec3;
use nebula_core::{ControlState, ParticleEngine, Shape};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

const DT: Duration = Duration::from_millis(16);
const N: usize = 128;

fn engine(seed: u64) -> ParticleEngine {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut e = ParticleEngine::new(N, &mut rng);
    e.morph_to(Shape::Cube, &mut rng, false);
    e
}

#[test]
fn default_regime_converges_monotonically_to_scaled_target() {
    let mut e = engine(1);
    let mut state = ControlState::new();
    let target = e.targets()[0] * state.expansion;
    let mut dist = (e.positions()[0] - target).length();
    for _ in 0..100 {
        e.step(&mut state, DT);
        let next = (e.positions()[0] - target).length();
        assert!(next <= dist + 1e-5, "distance increased: {next} > {dist}");
        dist = next;
    }
    // ease = 1 - (1 - 0.12)^2, so 100 ticks shrink the gap far below tolerance
    assert!(dist < 1e-3, "still {dist} from target after 100 ticks");
}

#[test]
fn shape_switch_replaces_targets_and_leaves_positions_alone() {
    let mut e = engine(2);
    let positions_before: Vec<Vec3> = e.positions().to_vec();

    let mut rng = StdRng::seed_from_u64(7);
    e.morph_to(Shape::Galaxy, &mut rng, false);

    assert_eq!(e.positions(), positions_before.as_slice());

    // pinned seed: the target array must equal a fresh generation
    let mut expected_rng = StdRng::seed_from_u64(7);
    for (i, t) in e.targets().iter().enumerate() {
        let (expected, color) = Shape::Galaxy.target(&mut expected_rng, i, N);
        assert_eq!(*t, expected, "target {i} differs");
        assert_eq!(e.colors()[i], color, "color {i} differs");
    }
}

#[test]
fn same_seed_builds_identical_ensembles() {
    let a = engine(9);
    let b = engine(9);
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.targets(), b.targets());
    assert_eq!(a.colors(), b.colors());
}

#[test]
fn explosion_integrates_velocity_then_clears_after_its_duration() {
    let mut e = engine(3);
    let mut state = ControlState::new();
    let mut rng = StdRng::seed_from_u64(11);
    e.explode(&mut state, &mut rng);
    assert!(state.explosion);

    let p0 = e.positions()[0];
    let v0 = e.velocities()[0];
    assert!(v0.length() > 0.0);
    e.step(&mut state, Duration::from_millis(100));
    assert!((e.positions()[0] - (p0 + v0)).length() < 1e-6);
    assert!((e.velocities()[0] - v0 * 0.95).length() < 1e-6);

    // 2.5 seconds of accumulated dt ends the regime on its own
    for _ in 0..25 {
        e.step(&mut state, Duration::from_millis(100));
    }
    assert!(!state.explosion, "explosion must clear after 2.5s");
}

#[test]
fn freeze_suppresses_all_motion() {
    let mut e = engine(4);
    let mut state = ControlState::new();
    state.freeze = true;
    state.hand_count = 1;
    state.pinch_dist = 0.3;
    let positions_before: Vec<Vec3> = e.positions().to_vec();
    for _ in 0..10 {
        e.step(&mut state, DT);
    }
    assert_eq!(e.positions(), positions_before.as_slice());
    assert_eq!(state.scale, 1.0, "scale bookkeeping is frozen too");
}

#[test]
fn mirror_is_a_per_frame_flip_not_a_one_time_reflection() {
    // Documents the non-idempotent behavior: switching mirror off leaves the
    // ensemble on the mirrored trajectory, not back on the original one.
    let mut a = engine(5);
    let mut b = engine(5);
    let mut sa = ControlState::new();
    let mut sb = ControlState::new();

    for _ in 0..5 {
        a.step(&mut sa, DT);
        b.step(&mut sb, DT);
    }
    assert_eq!(a.positions(), b.positions());

    // pick a particle whose target is clearly off the mirror plane
    let i = a
        .targets()
        .iter()
        .position(|t| t.x.abs() > 1.0)
        .expect("cube targets include off-plane particles");

    sa.mirror = true;
    a.step(&mut sa, DT);
    b.step(&mut sb, DT);
    assert!(
        (a.positions()[i].x + b.positions()[i].x).abs() < 1e-5,
        "while mirrored, x is the exact negation of the twin"
    );

    sa.mirror = false;
    a.step(&mut sa, DT);
    b.step(&mut sb, DT);
    let ax = a.positions()[i].x;
    let bx = b.positions()[i].x;
    assert!((ax - bx).abs() > 1e-4, "must not rejoin the unmirrored path");
    assert!(
        (ax + bx).abs() > 1e-4,
        "must not stay a pure reflection either; it eases from the flipped point"
    );
}

#[test]
fn vortex_velocity_is_tangential() {
    let mut e = engine(6);
    let mut state = ControlState::new();
    state.vortex = true;
    let z_before: Vec<f32> = e.positions().iter().map(|p| p.z).collect();
    e.step(&mut state, DT);
    for (i, v) in e.velocities().iter().enumerate() {
        assert!(
            (Vec3::new(v.x, v.y, 0.0).length() - 0.5).abs() < 1e-5,
            "tangential speed should be 0.5, particle {i}"
        );
        assert_eq!(v.z, 0.0);
        assert_eq!(e.positions()[i].z, z_before[i], "z axis untouched");
    }
}

#[test]
fn wave_layers_a_sinusoid_on_top_of_easing() {
    let mut a = engine(7);
    let mut b = engine(7);
    let mut sa = ControlState::new();
    let mut sb = ControlState::new();
    sa.wave = true;
    a.step(&mut sa, DT);
    b.step(&mut sb, DT);
    for i in 0..N {
        let offset = (1.0_f32 * 0.05 + i as f32 * 0.01).sin() * 2.0;
        let expected = b.positions()[i].y + offset;
        assert!(
            (a.positions()[i].y - expected).abs() < 1e-5,
            "wave offset wrong for particle {i}"
        );
        assert_eq!(a.positions()[i].x, b.positions()[i].x);
    }
}

#[test]
fn gravity_pulls_toward_the_hand_in_the_plane_only() {
    let mut e = engine(8);
    let mut state = ControlState::new();
    state.gravity = true;
    state.hand_count = 1;
    state.hand = glam::Vec2::new(0.0, 0.0);
    let before: Vec<Vec3> = e.positions().to_vec();
    e.step(&mut state, DT);
    for (i, v) in e.velocities().iter().enumerate() {
        // velocity after one step is the (decayed) attraction impulse, so it
        // is exactly parallel to the pre-step offset toward the hand
        let toward = glam::Vec2::new(-before[i].x, -before[i].y);
        if toward.length() > 1e-3 {
            assert!(
                glam::Vec2::new(v.x, v.y).dot(toward) > 0.0,
                "velocity must point at the attractor, particle {i}"
            );
        }
        assert_eq!(e.positions()[i].z, before[i].z);
    }
}

#[test]
fn warp_triples_the_morph_speed() {
    let mut e = engine(17);
    let mut state = ControlState::new();
    state.warp = true;
    let before: Vec<Vec3> = e.positions().to_vec();
    let targets: Vec<Vec3> = e.targets().to_vec();
    e.step(&mut state, DT);
    let ease = 1.0 - (1.0 - 3.0 * state.speed).powi(2);
    for i in 0..N {
        let expected = before[i] + (targets[i] * state.expansion - before[i]) * ease;
        assert!(
            (e.positions()[i] - expected).length() < 1e-4,
            "warped ease wrong for particle {i}"
        );
    }

    // a warped tick closes more of the gap than an unwarped twin's tick
    let mut plain = engine(17);
    let mut plain_state = ControlState::new();
    plain.step(&mut plain_state, DT);
    let gap_warped = (e.positions()[0] - targets[0]).length();
    let gap_plain = (plain.positions()[0] - targets[0]).length();
    assert!(gap_warped < gap_plain);
}

#[test]
fn auto_rotate_applies_constant_increments() {
    let mut e = engine(16);
    let mut state = ControlState::new();
    state.auto_rotate = true;
    for _ in 0..10 {
        e.step(&mut state, DT);
    }
    assert!((state.rotation.y - 0.06).abs() < 1e-5);
    assert!((state.rotation.x - 0.02).abs() < 1e-5);
}

#[test]
fn rainbow_overwrites_colors_every_frame() {
    let mut e = engine(10);
    let mut state = ControlState::new();
    state.rainbow = true;
    e.step(&mut state, DT);
    let first = e.colors()[0];
    for c in e.colors() {
        assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
    }
    e.step(&mut state, DT);
    assert_ne!(e.colors()[0], first, "hue advances with the frame counter");
}

#[test]
fn palette_recolor_scales_a_palette_triple() {
    let mut e = engine(12);
    let mut rng = StdRng::seed_from_u64(13);
    e.randomize_colors(1, &mut rng); // crimson
    let palette: [Vec3; 3] = [
        Vec3::new(1.0, 0.2, 0.4),
        Vec3::new(1.0, 0.4, 0.6),
        Vec3::new(0.9, 0.1, 0.3),
    ];
    for (i, c) in e.colors().iter().enumerate() {
        let matches_one = palette.iter().any(|t| {
            let r = c.x / t.x;
            (0.8..=1.0).contains(&r)
                && (c.y / t.y - r).abs() < 1e-4
                && (c.z / t.z - r).abs() < 1e-4
        });
        assert!(matches_one, "color {i} = {c:?} is not a scaled triple");
    }
}

#[test]
fn pulsate_and_pinch_drive_the_scale() {
    let mut e = engine(14);
    let mut state = ControlState::new();
    state.pulsate = true;
    e.step(&mut state, DT);
    let expected = 1.0 + (1.0_f32 * 0.05).sin() * 0.2;
    assert!((state.scale - expected).abs() < 1e-6);

    let mut state = ControlState::new();
    state.hand_count = 1;
    state.pinch_dist = 0.25; // pinch target 2.5, eased by 0.15
    e.step(&mut state, DT);
    assert!((state.scale - 1.225).abs() < 1e-6);
}

#[test]
fn snapshot_exposes_flat_views_and_scalars() {
    let mut e = engine(15);
    let mut state = ControlState::new();
    state.rotation = glam::Vec2::new(0.2, -0.1);
    state.scale = 1.5;
    e.step(&mut state, DT);

    let snap = e.snapshot(&state);
    assert_eq!(snap.positions.len(), N * 3);
    assert_eq!(snap.colors.len(), N * 3);
    let p0 = e.positions()[0];
    assert_eq!(&snap.positions[..3], &[p0.x, p0.y, p0.z]);
    assert_eq!(snap.rotation, state.rotation);
    assert_eq!(snap.scale, state.scale);
    assert_eq!(snap.camera_z, 50.0);
}
