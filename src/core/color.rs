use std::fmt;

use crate::core::model::Color;

const START: Hsl = Hsl::new(222.0, 80.0, 50.0);
const END: Hsl = Hsl::new(142.0, 70.0, 45.0);

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    pub fn to_rgb(self) -> Color {
        let s = self.saturation / 100.0;
        let l = self.lightness / 100.0;
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Color {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Colour of a progress bar, blue at 0% shading into green at 100%.
///
/// Values above 100 are clamped.
pub fn progress_color(progress: u8) -> Hsl {
    let t = f64::from(progress.min(100)) / 100.0;
    let lerp = |from: f64, to: f64| from + (to - from) * t;
    Hsl::new(
        lerp(START.hue, END.hue),
        lerp(START.saturation, END.saturation),
        lerp(START.lightness, END.lightness),
    )
}
