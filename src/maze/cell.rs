use crossterm::style::{Color, Stylize};

use std::fmt;

/// The six wormhole kinds a maze can be decorated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Wormhole {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Wormhole {
    fn label(self) -> &'static str {
        match self {
            Wormhole::A => "A ",
            Wormhole::B => "B ",
            Wormhole::C => "C ",
            Wormhole::D => "D ",
            Wormhole::E => "E ",
            Wormhole::F => "F ",
        }
    }

    fn color(self) -> Color {
        match self {
            Wormhole::A => Color::Magenta,
            Wormhole::B => Color::Cyan,
            Wormhole::C => Color::DarkMagenta,
            Wormhole::D => Color::DarkYellow,
            Wormhole::E => Color::DarkRed,
            Wormhole::F => Color::Red,
        }
    }
}

/// The state held by a single grid position.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cell {
    /// Carved, traversable space.
    Passage,
    /// Unexplored rock. The only diggable state.
    #[default]
    Wall,
    /// Boundary rock that carving never crosses.
    HardWall,
    Start,
    End,
    Visited,
    Wormhole(Wormhole),
}

impl Cell {
    /// Every cell kind, in code order.
    pub const ALL: [Cell; 12] = [
        Cell::Passage,
        Cell::Wall,
        Cell::HardWall,
        Cell::Start,
        Cell::End,
        Cell::Visited,
        Cell::Wormhole(Wormhole::A),
        Cell::Wormhole(Wormhole::B),
        Cell::Wormhole(Wormhole::C),
        Cell::Wormhole(Wormhole::D),
        Cell::Wormhole(Wormhole::E),
        Cell::Wormhole(Wormhole::F),
    ];
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    /// Stable integer tag for renderers that consume plain numbers.
    pub fn code(self) -> u8 {
        match self {
            Cell::Passage => 1,
            Cell::Wall => 2,
            Cell::HardWall => 3,
            Cell::Start => 4,
            Cell::End => 5,
            Cell::Visited => 6,
            Cell::Wormhole(w) => 7 + w as u8,
        }
    }

    /// Human readable name, as shown in legends and logs.
    pub fn name(self) -> &'static str {
        match self {
            Cell::Passage => "PASSAGE",
            Cell::Wall => "WALL",
            Cell::HardWall => "HARDWALL",
            Cell::Start => "START",
            Cell::End => "END",
            Cell::Visited => "VISITED",
            Cell::Wormhole(Wormhole::A) => "WORMHOLE_A",
            Cell::Wormhole(Wormhole::B) => "WORMHOLE_B",
            Cell::Wormhole(Wormhole::C) => "WORMHOLE_C",
            Cell::Wormhole(Wormhole::D) => "WORMHOLE_D",
            Cell::Wormhole(Wormhole::E) => "WORMHOLE_E",
            Cell::Wormhole(Wormhole::F) => "WORMHOLE_F",
        }
    }
}

impl From<Wormhole> for Cell {
    fn from(wormhole: Wormhole) -> Self {
        Cell::Wormhole(wormhole)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Cell::Passage => "  ".with(Color::Reset),
            Cell::Wall => "⬜".with(Color::DarkGrey),
            Cell::HardWall => "🟥".with(Color::Red),
            Cell::Start => "🟩".with(Color::Green),
            Cell::End => "🟦".with(Color::Blue),
            Cell::Visited => "* ".with(Color::Yellow),
            Cell::Wormhole(w) => w.label().with(w.color()),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Cell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct_and_ordered() {
        let codes = Cell::ALL.iter().map(|c| c.code()).collect::<Vec<_>>();
        assert_eq!(codes, (1..=12).collect::<Vec<u8>>());
    }

    #[test]
    fn test_default_is_wall() {
        assert_eq!(Cell::default(), Cell::Wall);
    }

    #[test]
    fn test_every_glyph_is_two_columns() {
        // Display asserts the width in debug builds
        for cell in Cell::ALL {
            assert!(!cell.to_string().is_empty());
        }
    }

    #[test]
    fn test_wormhole_conversion() {
        assert_eq!(Cell::from(Wormhole::C), Cell::Wormhole(Wormhole::C));
        assert_eq!(Cell::from(Wormhole::F).code(), 12);
        assert_eq!(Cell::from(Wormhole::A).name(), "WORMHOLE_A");
    }
}
