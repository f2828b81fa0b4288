mod limited_len_string;
mod message_card;

pub use limited_len_string::LimitedLenString;
pub(crate) use limited_len_string::{
    truncate_on_char_boundary, LimitedLenString1024, LimitedLenString8192,
};
pub(crate) use message_card::THEME_COLOR;
pub use message_card::{Fact, MessageCard, PotentialAction, Section, Target};
