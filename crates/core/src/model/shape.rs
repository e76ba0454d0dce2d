use std::fmt;

/// Shapes offered by the shape-match puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
    Heart,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Self::Circle, Self::Square, Self::Triangle, Self::Heart];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Square => "Square",
            Self::Triangle => "Triangle",
            Self::Heart => "Heart",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fill color of the rendered shape, as a CSS hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeColor(&'static str);

impl ShapeColor {
    pub const PALETTE: [ShapeColor; 5] = [
        ShapeColor("#a78bfa"),
        ShapeColor("#f472b6"),
        ShapeColor("#34d399"),
        ShapeColor("#fbbf24"),
        ShapeColor("#60a5fa"),
    ];

    #[must_use]
    pub fn hex(self) -> &'static str {
        self.0
    }
}
