//! Colours: a small RGBA type and the fixed polygon palette.
//!
//! Polygons take their colour from their index, so the same document
//! always renders the same way and the legend order matches draw order.

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Polygon colours, cycled by polygon index.
pub const PALETTE: [Color; 8] = [
    Color::rgb8(0x3B, 0x82, 0xF6),
    Color::rgb8(0xEF, 0x44, 0x44),
    Color::rgb8(0x10, 0xB9, 0x81),
    Color::rgb8(0xF5, 0x9E, 0x0B),
    Color::rgb8(0x8B, 0x5C, 0xF6),
    Color::rgb8(0xEC, 0x48, 0x99),
    Color::rgb8(0x14, 0xB8, 0xA6),
    Color::rgb8(0xF9, 0x73, 0x16),
];

/// Colour of the custom point marker.
pub const CUSTOM_POINT_COLOR: Color = Color::rgb8(0x11, 0x18, 0x27);

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Parse `#RGB` or `#RRGGBB`. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        match bytes.len() {
            3 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                Some(Self::rgba(
                    (r * 17) as f32 / 255.0,
                    (g * 17) as f32 / 255.0,
                    (b * 17) as f32 / 255.0,
                    1.0,
                ))
            }
            6 => {
                let r = hex_val(bytes[0])? << 4 | hex_val(bytes[1])?;
                let g = hex_val(bytes[2])? << 4 | hex_val(bytes[3])?;
                let b = hex_val(bytes[4])? << 4 | hex_val(bytes[5])?;
                Some(Self::rgba(
                    r as f32 / 255.0,
                    g as f32 / 255.0,
                    b as f32 / 255.0,
                    1.0,
                ))
            }
            _ => None,
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    fn channels(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// `#RRGGBB`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.channels();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// CSS colour string usable by Canvas2D and SVG.
    pub fn to_css(&self) -> String {
        if (self.a - 1.0).abs() < f32::EPSILON {
            self.to_hex()
        } else {
            let (r, g, b) = self.channels();
            format!("rgba({r}, {g}, {b}, {})", self.a)
        }
    }
}

/// Stroke colour for the polygon at `index`.
pub fn polygon_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

pub fn custom_point_color() -> Color {
    CUSTOM_POINT_COLOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let c = Color::from_hex("#3B82F6").unwrap();
        assert_eq!(c.to_hex(), "#3B82F6");
        assert_eq!(Color::from_hex("fff").unwrap().to_hex(), "#FFFFFF");
        assert!(Color::from_hex("#12").is_none());
        assert!(Color::from_hex("#GGGGGG").is_none());
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(polygon_color(0), polygon_color(PALETTE.len()));
        assert_ne!(polygon_color(0), polygon_color(1));
    }

    #[test]
    fn palette_matches_hex_table() {
        let hex: Vec<String> = PALETTE.iter().map(Color::to_hex).collect();
        assert_eq!(
            hex,
            [
                "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899", "#14B8A6",
                "#F97316",
            ]
        );
        assert_eq!(custom_point_color().to_hex(), "#111827");
        assert_eq!(Color::from_hex("#3B82F6"), Some(PALETTE[0]));
    }

    #[test]
    fn css_uses_rgba_when_translucent() {
        let c = Color::from_hex("#FF0000").unwrap().with_alpha(0.25);
        assert_eq!(c.to_css(), "rgba(255, 0, 0, 0.25)");
        assert_eq!(c.with_alpha(1.0).to_css(), "#FF0000");
    }
}
