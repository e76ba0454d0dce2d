use rand::Rng;
use rand::seq::IndexedRandom;

/// The four mini-games the shell can switch between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameKind {
    Counting,
    Catching,
    Memory,
    Logic,
}

impl GameKind {
    pub const ALL: [GameKind; 4] = [Self::Counting, Self::Catching, Self::Memory, Self::Logic];

    /// Uniform pick used by the "Mix" button.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&Self::Counting)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Counting => "Magic Counting",
            Self::Catching => "Catch the Dragon",
            Self::Memory => "Magic Pairs",
            Self::Logic => "Magic Logic",
        }
    }
}
