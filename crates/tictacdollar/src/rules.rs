//! Game rules for tictacdollar.
//!
//! Pure functions over boards and purses. Kept apart from the state
//! machine so the move advisor can evaluate hypothetical boards with
//! exactly the rules the engine applies.

pub mod connection;
pub mod fill;
pub mod outcome;

pub use connection::{MIN_RUN, find_connection};
pub use fill::is_full;
pub use outcome::evaluate;
