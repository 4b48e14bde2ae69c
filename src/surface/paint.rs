use crate::foundation::core::{Point, Rgba8};

/// One color stop of a gradient; `offset` is in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba8,
}

/// Gradient between two points, padded outside `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<ColorStop>,
}

/// Two-circle conical gradient with canvas `createRadialGradient` semantics.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub c0: Point,
    pub r0: f64,
    pub c1: Point,
    pub r1: f64,
    pub stops: Vec<ColorStop>,
}

/// Fill source for paths, rectangles and text.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba8),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Paint {
    pub fn linear(start: Point, end: Point, stops: &[(f64, Rgba8)]) -> Self {
        Self::Linear(LinearGradient {
            start,
            end,
            stops: to_stops(stops),
        })
    }

    pub fn radial(c0: Point, r0: f64, c1: Point, r1: f64, stops: &[(f64, Rgba8)]) -> Self {
        Self::Radial(RadialGradient {
            c0,
            r0,
            c1,
            r1,
            stops: to_stops(stops),
        })
    }

    /// Concentric radial gradient from the center out to `radius`.
    pub fn radial_centered(center: Point, radius: f64, stops: &[(f64, Rgba8)]) -> Self {
        Self::radial(center, 0.0, center, radius, stops)
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid(_))
    }

    /// Premultiplied color at a point in paint (user) space, channels in `[0, 1]`.
    pub fn sample(&self, p: Point) -> [f32; 4] {
        match self {
            Self::Solid(c) => premul_f32(*c),
            Self::Linear(g) => {
                let d = g.end - g.start;
                let len2 = d.hypot2();
                if len2 <= f64::EPSILON {
                    // Degenerate gradients paint nothing.
                    return [0.0; 4];
                }
                let t = (p - g.start).dot(d) / len2;
                eval_stops(&g.stops, t)
            }
            Self::Radial(g) => match conical_t(g, p) {
                Some(t) => eval_stops(&g.stops, t),
                None => [0.0; 4],
            },
        }
    }
}

impl From<Rgba8> for Paint {
    fn from(c: Rgba8) -> Self {
        Self::Solid(c)
    }
}

fn to_stops(stops: &[(f64, Rgba8)]) -> Vec<ColorStop> {
    stops
        .iter()
        .map(|&(offset, color)| ColorStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        })
        .collect()
}

fn premul_f32(c: Rgba8) -> [f32; 4] {
    let a = f32::from(c.a) / 255.0;
    [
        f32::from(c.r) / 255.0 * a,
        f32::from(c.g) / 255.0 * a,
        f32::from(c.b) / 255.0 * a,
        a,
    ]
}

/// Interpolates in premultiplied space, padding beyond the first and last stop.
fn eval_stops(stops: &[ColorStop], t: f64) -> [f32; 4] {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return [0.0; 4];
    };
    if t <= first.offset {
        return premul_f32(first.color);
    }
    if t >= last.offset {
        return premul_f32(last.color);
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t >= a.offset && t <= b.offset {
            let span = b.offset - a.offset;
            if span <= f64::EPSILON {
                return premul_f32(b.color);
            }
            let u = ((t - a.offset) / span) as f32;
            let ca = premul_f32(a.color);
            let cb = premul_f32(b.color);
            return [
                ca[0] + (cb[0] - ca[0]) * u,
                ca[1] + (cb[1] - ca[1]) * u,
                ca[2] + (cb[2] - ca[2]) * u,
                ca[3] + (cb[3] - ca[3]) * u,
            ];
        }
    }
    premul_f32(last.color)
}

/// Largest `t` with `r(t) >= 0` such that `p` lies on the circle interpolated at `t`.
fn conical_t(g: &RadialGradient, p: Point) -> Option<f64> {
    let cd = g.c1 - g.c0;
    let pd = p - g.c0;
    let dr = g.r1 - g.r0;

    let a = cd.hypot2() - dr * dr;
    let b = pd.dot(cd) + g.r0 * dr;
    let c = pd.hypot2() - g.r0 * g.r0;
    let radius_ok = |t: f64| g.r0 + t * dr >= 0.0;

    if a.abs() < 1e-9 {
        if b.abs() < 1e-12 {
            return None;
        }
        let t = c / (2.0 * b);
        return radius_ok(t).then_some(t);
    }

    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t1 = (b + sq) / a;
    let t2 = (b - sq) / a;
    let (hi, lo) = if t1 >= t2 { (t1, t2) } else { (t2, t1) };
    if radius_ok(hi) {
        Some(hi)
    } else if radius_ok(lo) {
        Some(lo)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/paint.rs"]
mod tests;
