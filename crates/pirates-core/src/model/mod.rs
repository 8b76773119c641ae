pub mod card;
pub mod round;
pub mod special;
pub mod suit;
pub mod value;
