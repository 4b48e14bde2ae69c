use crate::frame::request::RenderRequest;

/// 128-bit structural hash of a [`RenderRequest`]; the render cache key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestFingerprint {
    pub hi: u64,
    pub lo: u64,
}

/// Hash every field that influences the painted pixels.
///
/// Text is hashed after normalization, so requests that letter the same run share a key.
pub fn fingerprint_request(req: &RenderRequest) -> RequestFingerprint {
    let mut a = Fnv1a64::new(0xcbf29ce484222325);
    let mut b = Fnv1a64::new(0x9ae16a3b2f90404f);

    write_str_pair(&mut a, &mut b, &req.normalized_text());
    for s in [
        &req.style_id,
        &req.fill_color,
        &req.stroke_color,
        &req.background_id,
        &req.custom_background_color,
        &req.backdrop_color,
        &req.effect_id,
    ] {
        write_str_pair(&mut a, &mut b, s);
    }
    for v in [
        req.stroke_width,
        req.size_percent,
        req.rotation_deg,
        req.letter_spacing,
    ] {
        write_f64_pair(&mut a, &mut b, v);
    }
    write_u64_pair(&mut a, &mut b, u64::from(req.surface_width));
    write_u64_pair(&mut a, &mut b, u64::from(req.surface_height));
    write_u8_pair(&mut a, &mut b, u8::from(req.compact));

    RequestFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn write_u8_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_u8(v);
    b.write_u8(v);
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

/// `-0.0` and `0.0` hash alike.
fn write_f64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: f64) {
    let v = if v == 0.0 { 0.0 } else { v };
    write_u64_pair(a, b, v.to_bits());
}

fn write_str_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, s: &str) {
    write_u64_pair(a, b, s.len() as u64);
    a.write_bytes(s.as_bytes());
    b.write_bytes(s.as_bytes());
}

#[derive(Clone, Copy)]
struct Fnv1a64(u64);

impl Fnv1a64 {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        self.0 = h;
    }

    fn finish(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/fingerprint.rs"]
mod tests;
