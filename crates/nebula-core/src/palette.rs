use glam::Vec3;

/// Color palettes cycled by the palette-advance action. The first slot is
/// unset: it recolors with a free random hue instead of a fixed triple set.
pub const PALETTES: [Option<&[[f32; 3]]>; 6] = [
    None,
    Some(&[[1.0, 0.2, 0.4], [1.0, 0.4, 0.6], [0.9, 0.1, 0.3]]), // crimson
    Some(&[[0.1, 0.9, 0.8], [0.2, 1.0, 0.6], [0.0, 0.7, 0.9]]), // teal
    Some(&[[0.95, 0.75, 0.2], [1.0, 0.5, 0.1], [0.9, 0.9, 0.3]]), // gold
    Some(&[[0.5, 0.2, 1.0], [0.8, 0.4, 1.0], [0.3, 0.1, 0.9]]), // purple
    Some(&[[0.1, 0.95, 0.1], [0.4, 1.0, 0.2], [0.0, 0.8, 0.5]]), // neo green
];

/// HSL to linear RGB, all components in [0, 1]. Used by the free-hue palette
/// slot and the per-frame rainbow modifier.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    let h = h.rem_euclid(1.0);
    if s <= 0.0 {
        return Vec3::splat(l);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Vec3::new(
        hue_component(p, q, h + 1.0 / 3.0),
        hue_component(p, q, h),
        hue_component(p, q, h - 1.0 / 3.0),
    )
}

fn hue_component(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
