pub mod election;
pub use election::*;

pub mod voter_state;
pub use voter_state::*;

pub mod events;
pub use events::*;
