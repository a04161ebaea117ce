use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    /// Prefix of piece labels, `w` or `b`.
    pub fn lowercase(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}
impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white")?,
            Color::Black => write!(f, "black")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::color::Color;

    #[test]
    fn label_prefix_and_name() {
        assert_eq!(Color::White.lowercase(), 'w');
        assert_eq!(Color::Black.lowercase(), 'b');
        assert_eq!(Color::Black.to_string(), "black");
    }
}
