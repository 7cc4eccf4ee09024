//! Layout math shared by the SVG chart adapters.

use std::f64::consts::{PI, TAU};

/// Maps a numeric domain linearly onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }
        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

/// Smallest 1, 2 or 5 × 10^k that is `>= value`; `1.0` for non-positive input.
pub fn nice_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10_f64.powf(value.log10().floor());
    for step in [1.0, 2.0, 5.0, 10.0] {
        let candidate = step * magnitude;
        if candidate >= value {
            return candidate;
        }
    }
    10.0 * magnitude
}

/// `count + 1` evenly spaced ticks from `0` to `max`.
pub fn ticks(max: f64, count: usize) -> Vec<f64> {
    let count = count.max(1);
    (0..=count)
        .map(|step| max * step as f64 / count as f64)
        .collect()
}

/// Ticks from `-max` to `max` for mirrored charts, symmetric around zero.
pub fn symmetric_ticks(max: f64, per_side: usize) -> Vec<f64> {
    let positive = ticks(max, per_side);
    let mut all: Vec<f64> = positive.iter().rev().map(|value| -value).collect();
    all.extend(positive.into_iter().skip(1));
    all
}

/// Start and end angle (radians, clockwise from 12 o'clock) of each slice.
/// Non-positive values get an empty slice.
pub fn donut_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|value| **value > 0.0).sum();
    let mut cursor = 0.0;
    values
        .iter()
        .map(|value| {
            let sweep = if total > 0.0 && *value > 0.0 {
                value / total * TAU
            } else {
                0.0
            };
            let slice = (cursor, cursor + sweep);
            cursor += sweep;
            slice
        })
        .collect()
}

/// SVG path of a ring segment between `inner` and `outer` radius.
pub fn ring_segment_path(
    center: (f64, f64),
    outer: f64,
    inner: f64,
    start: f64,
    end: f64,
) -> String {
    // A full circle cannot be drawn with one arc command.
    let end = if end - start >= TAU {
        start + TAU - 1e-4
    } else {
        end
    };
    let large_arc = if end - start > PI { 1 } else { 0 };
    let (ox1, oy1) = polar(center, outer, start);
    let (ox2, oy2) = polar(center, outer, end);
    let (ix1, iy1) = polar(center, inner, end);
    let (ix2, iy2) = polar(center, inner, start);

    format!(
        "M {ox1:.2} {oy1:.2} A {outer:.2} {outer:.2} 0 {large_arc} 1 {ox2:.2} {oy2:.2} \
         L {ix1:.2} {iy1:.2} A {inner:.2} {inner:.2} 0 {large_arc} 0 {ix2:.2} {iy2:.2} Z"
    )
}

fn polar(center: (f64, f64), radius: f64, angle: f64) -> (f64, f64) {
    (
        center.0 + radius * angle.sin(),
        center.1 - radius * angle.cos(),
    )
}

/// `points` attribute of an SVG polyline, one point per value.
pub fn polyline_points(values: &[f64], x: &LinearScale, y: &LinearScale) -> String {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| format!("{:.2},{:.2}", x.map(index as f64), y.map(*value)))
        .collect::<Vec<_>>()
        .join(" ")
}
