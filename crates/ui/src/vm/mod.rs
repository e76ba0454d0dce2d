mod game_vm;
mod shell_vm;

pub use game_vm::{
    CatchVm, CountingVm, LogicVm, MarkVm, MemoryCardVm, MemoryVm, map_catch, map_counting,
    map_logic, map_memory,
};
pub use shell_vm::{
    FeedbackVm, StickerBarVm, digit_option, flash_class, map_feedback, map_sticker_bar,
    nav_label, score_label, sound_label, status_text,
};
