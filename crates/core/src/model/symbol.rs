use std::fmt;

/// A single emoji glyph shown on the play area or a card face.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(&'static str);

impl Symbol {
    #[must_use]
    pub const fn new(glyph: &'static str) -> Self {
        Self(glyph)
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const WITCH: Symbol = Symbol::new("🧙‍♀️");
pub const DRAGON: Symbol = Symbol::new("🐉");
pub const FAIRY: Symbol = Symbol::new("🧚");
pub const UNICORN: Symbol = Symbol::new("🦄");
pub const WIZARD: Symbol = Symbol::new("🧙‍♂️");
pub const DRAGON_FACE: Symbol = Symbol::new("🐲");

pub const CARD_BACK: Symbol = Symbol::new("🂠");

/// Creatures used for memory cards.
pub const CREATURES: [Symbol; 6] = [WITCH, DRAGON, FAIRY, UNICORN, WIZARD, DRAGON_FACE];

/// Everything the counting game may draw: the creatures plus magic props.
pub const MAGIC_SYMBOLS: [Symbol; 12] = [
    WITCH,
    DRAGON,
    FAIRY,
    UNICORN,
    WIZARD,
    DRAGON_FACE,
    Symbol::new("✨"),
    Symbol::new("🔮"),
    Symbol::new("🪄"),
    Symbol::new("🧪"),
    Symbol::new("🌟"),
    Symbol::new("🌈"),
];

/// Decoration scattered around the catch target.
pub const SPARKS: [Symbol; 3] = [Symbol::new("✨"), Symbol::new("🌟"), Symbol::new("🪄")];

/// Categories for the odd-one-out puzzle. No symbol belongs to two groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolGroup {
    MagicFolk,
    Fruit,
    Vehicles,
}

impl SymbolGroup {
    pub const ALL: [SymbolGroup; 3] = [Self::MagicFolk, Self::Fruit, Self::Vehicles];

    #[must_use]
    pub fn members(self) -> &'static [Symbol; 4] {
        const MAGIC_FOLK: [Symbol; 4] = [WITCH, WIZARD, FAIRY, UNICORN];
        const FRUIT: [Symbol; 4] = [
            Symbol::new("🍎"),
            Symbol::new("🍌"),
            Symbol::new("🍓"),
            Symbol::new("🍐"),
        ];
        const VEHICLES: [Symbol; 4] = [
            Symbol::new("🚗"),
            Symbol::new("✈️"),
            Symbol::new("🚲"),
            Symbol::new("🚂"),
        ];
        match self {
            Self::MagicFolk => &MAGIC_FOLK,
            Self::Fruit => &FRUIT,
            Self::Vehicles => &VEHICLES,
        }
    }

    #[must_use]
    pub fn contains(self, symbol: Symbol) -> bool {
        self.members().contains(&symbol)
    }

    /// The group a symbol belongs to, if any.
    #[must_use]
    pub fn of(symbol: Symbol) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.contains(symbol))
    }
}
