use rand::Rng;

/// Opaque RGB fill color of a cell. Purely cosmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts hue/saturation/brightness (each in `[0, 1]`) to RGB.
    ///
    /// Hue wraps, so only its fractional part matters.
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        let to_byte = |v: f32| (v * 255.0 + 0.5).clamp(0.0, 255.0) as u8;

        if saturation <= 0.0 {
            let v = to_byte(brightness);
            return Self::rgb(v, v, v);
        }

        let h = (hue - hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));

        let (r, g, b) = match h as u32 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };
        Self::rgb(to_byte(r), to_byte(g), to_byte(b))
    }

    /// Random hue at low-to-medium saturation and full brightness.
    pub fn random_pastel(rng: &mut impl Rng) -> Self {
        let hue = rng.random::<f32>();
        let saturation = rng.random::<f32>() * 0.5 + 0.1;
        Self::from_hsb(hue, saturation, 1.0)
    }
}
