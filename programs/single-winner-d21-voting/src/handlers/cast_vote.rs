use anchor_lang::prelude::*;

use crate::{
    state::{ElectionAccount, VoteCasted, VoterStateAccount},
    CastVote,
};

/// Instruction for a voter to cast their D21 votes.
///
/// The voter's ballot record is created on their first vote in this
/// election and binds to `(voter, election)` in the same transaction.
pub fn cast_vote(ctx: Context<CastVote>, candidate_indices: Vec<u8>) -> Result<()> {
    let now = ctx.accounts.clock.unix_timestamp;
    let election_key = ctx.accounts.election_account.key();
    let voter_key = ctx.accounts.voter.key();

    let event = open_and_cast(
        &mut ctx.accounts.election_account,
        &mut ctx.accounts.voter_state_account,
        voter_key,
        election_key,
        ctx.bumps.voter_state_account,
        &candidate_indices,
        now,
    )?;

    msg!(
        "Voter {} cast {} vote(s) in election {}, {} left",
        voter_key,
        candidate_indices.len(),
        election_key,
        ctx.accounts
            .voter_state_account
            .remaining_votes(ctx.accounts.election_account.votes_per_voter())
    );

    emit!(event);

    Ok(())
}

// Binds a ballot that `init_if_needed` just zeroed, then applies the vote.
fn open_and_cast(
    election: &mut ElectionAccount,
    ballot: &mut VoterStateAccount,
    voter: Pubkey,
    election_key: Pubkey,
    bump: u8,
    candidate_indices: &[u8],
    now: i64,
) -> Result<VoteCasted> {
    if ballot.is_new() {
        *ballot = VoterStateAccount::open(voter, election_key, bump);
    }
    election.cast_ballot(ballot, candidate_indices, now)
}
