mod platform;
mod player;
mod rank;
mod search;

pub use platform::*;
pub use player::*;
pub use rank::*;
pub use search::*;
