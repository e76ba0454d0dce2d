mod kind;
mod point;
mod puzzle;
mod settings;
mod shape;
mod symbol;

pub use kind::GameKind;
pub use point::Point;
pub use puzzle::{Attempt, Puzzle};
pub use settings::{
    DEFAULT_HIT_HALF_WIDTH, DEFAULT_HITS_PER_ROUND, DEFAULT_STICKER_GOAL, Delays, FieldSize,
    GameSettings, GameSettingsDraft, SettingsError,
};
pub use shape::{Shape, ShapeColor};
pub use symbol::{
    CARD_BACK, CREATURES, DRAGON, DRAGON_FACE, FAIRY, MAGIC_SYMBOLS, SPARKS, Symbol, SymbolGroup,
    UNICORN, WITCH, WIZARD,
};
