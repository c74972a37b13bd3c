mod game;
mod match_record;
mod section;

pub use game::*;
pub use match_record::*;
pub use section::*;
