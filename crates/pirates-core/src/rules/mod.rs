pub mod classify;
pub mod convert;
pub mod evaluator;
pub mod lead;
pub mod locate;
pub mod outcome;
pub mod tie;

pub use classify::is_special;
pub use convert::{Conditions, convert, convert_special};
pub use evaluator::evaluate;
pub use lead::lead_suit;
pub use locate::holder_of;
pub use outcome::Outcome;
pub use tie::is_a_tie;
