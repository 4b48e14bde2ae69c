use crate::foundation::error::{GraffitiError, GraffitiResult};

pub type PremulRgba8 = [u8; 4];

/// How a source pixel is combined with the destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    SourceOver,
    /// Canvas `multiply`: `src*(1-da) + dst*(1-sa) + src*dst`.
    Multiply,
}

pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

pub fn multiply(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    let sa = u16::from(src[3]);
    let da = u16::from(dst[3]);

    let mut out = [0u8; 4];
    for i in 0..3 {
        let s = u16::from(src[i]);
        let d = u16::from(dst[i]);
        let v = u16::from(mul_div255(s, 255 - da))
            + u16::from(mul_div255(d, 255 - sa))
            + u16::from(mul_div255(s, d));
        out[i] = v.min(255) as u8;
    }
    out[3] = add_sat_u8(src[3], mul_div255(da, 255 - sa));
    out
}

pub fn blend(mode: BlendMode, dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match mode {
        BlendMode::SourceOver => over(dst, src, 1.0),
        BlendMode::Multiply => multiply(dst, src),
    }
}

pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> GraffitiResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(GraffitiError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Scale a premultiplied color by an 8-bit coverage value.
pub fn scale(px: PremulRgba8, coverage: u8) -> PremulRgba8 {
    let c = u16::from(coverage);
    [
        mul_div255(u16::from(px[0]), c),
        mul_div255(u16::from(px[1]), c),
        mul_div255(u16::from(px[2]), c),
        mul_div255(u16::from(px[3]), c),
    ]
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/surface/composite.rs"]
mod tests;
