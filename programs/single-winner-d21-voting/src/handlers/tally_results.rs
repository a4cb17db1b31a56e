use anchor_lang::prelude::*;

use crate::TallyResults;

/// Instruction (for the authority) to tally the results
/// and declare a winner after the election has ended.
///
/// Ties go to the lowest candidate index.
pub fn tally_results(ctx: Context<TallyResults>) -> Result<()> {
    let now = ctx.accounts.clock.unix_timestamp;
    let election_key = ctx.accounts.election_account.key();
    let caller = ctx.accounts.authority.key();

    let event = ctx
        .accounts
        .election_account
        .finalize(election_key, &caller, now)?;

    msg!(
        "Election {} finalized: candidate {} ({}) wins with {} votes",
        election_key,
        event.winner_index,
        event.winner_name,
        event.winner_vote_count
    );

    emit!(event);

    Ok(())
}
