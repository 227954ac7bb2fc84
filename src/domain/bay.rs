/// Glyph for a pedestrian exit
pub const EXIT_GLYPH: char = '=';
/// Glyph for a free disabled-only bay
pub const FREE_DISABLED_GLYPH: char = '@';
/// Glyph for a free ordinary bay
pub const FREE_ORDINARY_GLYPH: char = 'U';

/// What a bay index is reserved for in the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BayKind {
    PedestrianExit,
    Disabled,
    Ordinary,
}

impl BayKind {
    /// Glyph shown for this kind of bay when nobody is parked in it
    pub fn free_glyph(self) -> char {
        match self {
            BayKind::PedestrianExit => EXIT_GLYPH,
            BayKind::Disabled => FREE_DISABLED_GLYPH,
            BayKind::Ordinary => FREE_ORDINARY_GLYPH,
        }
    }

    pub fn is_parkable(self) -> bool {
        self != BayKind::PedestrianExit
    }
}
