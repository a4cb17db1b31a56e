use anchor_lang::prelude::*;

use crate::constants::VOTER_STATE_SEED;

/// Derives the ballot record address for `voter` in `election`.
///
/// Anyone can locate a voter's record from the two public keys alone, so no
/// index of voters is kept on chain.
pub fn voter_state_address(voter: &Pubkey, election: &Pubkey) -> (Pubkey, u8) {
    voter_state_address_for(&crate::ID, voter, election)
}

/// Same derivation against an arbitrary deployment of the program.
pub fn voter_state_address_for(
    program_id: &Pubkey,
    voter: &Pubkey,
    election: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VOTER_STATE_SEED, voter.as_ref(), election.as_ref()],
        program_id,
    )
}
