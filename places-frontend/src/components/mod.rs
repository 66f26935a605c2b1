mod notice;
mod place_card;
mod placeholder;
mod result_map;
mod search_input;

pub use self::{
    notice::*, place_card::*, placeholder::*, result_map::*, search_input::*,
};
