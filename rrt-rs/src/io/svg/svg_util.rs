use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

use crate::geometry::primitives::{Edge, Point, SPolygon};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgSceneTheme,
    ///Draw the grown nodes on top of the edges
    #[serde(default = "default_true")]
    pub draw_nodes: bool,
    ///Draw only the path, leaving out the rest of the tree
    #[serde(default)]
    pub path_only: bool,
    ///Print a label with statistics of the run above the region
    #[serde(default = "default_true")]
    pub label: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgSceneTheme::default(),
            draw_nodes: true,
            path_only: false,
            label: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgSceneTheme {
    pub stroke_width_multiplier: f32,
    pub background_fill: Color,
    pub region_stroke: Color,
    pub obstacle_fill: Color,
    pub obstacle_stroke: Color,
}

impl Default for SvgSceneTheme {
    fn default() -> Self {
        SvgSceneTheme::CLASSIC
    }
}

impl SvgSceneTheme {
    pub const CLASSIC: SvgSceneTheme = SvgSceneTheme {
        stroke_width_multiplier: 2.0,
        background_fill: Color(0xD3, 0xD3, 0xD3), // LIGHT GRAY
        region_stroke: Color(0x00, 0x00, 0x00),   // BLACK
        obstacle_fill: Color(0x00, 0x00, 0x00),   // BLACK
        obstacle_stroke: Color(0x00, 0x00, 0x00), // BLACK
    };
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

/// RGB color, (de)serialized as a `#RRGGBB` hex string
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            bail!("invalid color, expected #RRGGBB: {s}");
        }
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub fn simple_polygon_data(s_poly: &SPolygon) -> Data {
    let mut data = Data::new().move_to::<(f32, f32)>(s_poly.vertex(0).into());
    for i in 1..s_poly.n_vertices() {
        data = data.line_to::<(f32, f32)>(s_poly.vertex(i).into());
    }
    data.close()
}

pub fn edge_data(edge: Edge) -> Data {
    Data::new()
        .move_to((edge.start.0, edge.start.1))
        .line_to((edge.end.0, edge.end.1))
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn point(Point(x, y): Point, fill: Color, rad: f32) -> Circle {
    Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", rad)
        .set("fill", format!("{fill}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parsing() {
        assert_eq!(Color::from_str("#FF8000").unwrap(), Color(0xFF, 0x80, 0x00));
        assert_eq!(Color::from_str("d3d3d3").unwrap(), Color(0xD3, 0xD3, 0xD3));
        assert_eq!(format!("{}", Color(0x08, 0x00, 0xAB)), "#0800AB");
        assert!(Color::from_str("#FFF").is_err());
        assert!(Color::from_str("#GG0000").is_err());
    }

    #[test]
    fn brightness() {
        assert_eq!(
            change_brightness(Color(200, 100, 50), 0.5),
            Color(100, 50, 25)
        );
    }
}
