pub mod initialize_election;
pub use initialize_election::*;

pub mod cast_vote;
pub use cast_vote::*;

pub mod tally_results;
pub use tally_results::*;
