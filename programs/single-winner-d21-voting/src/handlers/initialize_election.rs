use anchor_lang::prelude::*;

use crate::InitializeElection;

/// Creates an election with a fixed candidate list.
///
/// The election account is sized for exactly `candidate_count` candidates by
/// the `InitializeElection` constraints, so the list can never grow later.
///
/// # Arguments
/// * `start_timestamp` - Unix time when voting opens
/// * `end_timestamp` - Unix time when voting closes (exclusive)
/// * `candidate_names` - One name per candidate, in index order
/// * `candidate_count` - Must equal `candidate_names.len()`
/// * `votes_per_voter` - Per-voter budget, between 1 and `candidate_count`
pub fn initialize_election(
    ctx: Context<InitializeElection>,
    start_timestamp: i64,
    end_timestamp: i64,
    candidate_names: Vec<String>,
    candidate_count: u8,
    votes_per_voter: u8,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();

    ctx.accounts.election_account.initialize(
        authority,
        start_timestamp,
        end_timestamp,
        candidate_names,
        candidate_count,
        votes_per_voter,
    )?;

    msg!(
        "Election {} created by {}: {} candidates, {} votes per voter, open {}..{}",
        ctx.accounts.election_account.key(),
        authority,
        candidate_count,
        votes_per_voter,
        start_timestamp,
        end_timestamp
    );

    Ok(())
}
