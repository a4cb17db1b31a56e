// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]
// Fix warning: use of deprecated method `anchor_lang::prelude::AccountInfo::<'a>::realloc`: Use AccountInfo::resize() instead
// See https://solana.stackexchange.com/questions/22979
#![allow(deprecated)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod handlers;
pub mod pda;
pub mod state;

use constants::*;
pub use error::ErrorCode;
pub use state::{Candidate, ElectionAccount, ElectionFinalized, VoteCasted, VoterStateAccount};

declare_id!("EkhBeXScKHxKRbBud3mqCpK4aE7dnpNfCFKoPCDeCBDH");

#[program]
pub mod single_winner_d21_voting {
    use super::*;

    pub fn initialize_election(
        ctx: Context<InitializeElection>,
        start_timestamp: i64,
        end_timestamp: i64,
        candidate_names: Vec<String>,
        candidate_count: u8,
        votes_per_voter: u8,
    ) -> Result<()> {
        handlers::initialize_election::initialize_election(
            ctx,
            start_timestamp,
            end_timestamp,
            candidate_names,
            candidate_count,
            votes_per_voter,
        )
    }

    /// Instruction for a voter to cast their D21 votes.
    pub fn cast_vote(ctx: Context<CastVote>, candidate_indices: Vec<u8>) -> Result<()> {
        handlers::cast_vote::cast_vote(ctx, candidate_indices)
    }

    /// Instruction (for the authority) to tally the results
    /// and declare a winner after the election has ended.
    pub fn tally_results(ctx: Context<TallyResults>) -> Result<()> {
        handlers::tally_results::tally_results(ctx)
    }
}

#[derive(Accounts)]
#[instruction(start_timestamp: i64, end_timestamp: i64, candidate_names: Vec<String>, candidate_count: u8)]
pub struct InitializeElection<'info> {
    #[account(
        init,
        payer = authority,
        space = ElectionAccount::space(candidate_count),
    )]
    pub election_account: Account<'info, ElectionAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct CastVote<'info> {
    #[account(mut)]
    pub election_account: Account<'info, ElectionAccount>,

    #[account(
        init_if_needed,
        payer = voter,
        space = VoterStateAccount::space(election_account.votes_per_voter),
        seeds = [VOTER_STATE_SEED, voter.key().as_ref(), election_account.key().as_ref()],
        bump,
    )]
    pub voter_state_account: Account<'info, VoterStateAccount>,

    #[account(mut)]
    pub voter: Signer<'info>,

    pub system_program: Program<'info, System>,

    pub clock: Sysvar<'info, Clock>,
}

#[derive(Accounts)]
pub struct TallyResults<'info> {
    // ElectionAccount::finalize checks the caller against the authority too
    #[account(
        mut,
        has_one = authority @ ErrorCode::Unauthorized,
    )]
    pub election_account: Account<'info, ElectionAccount>,

    pub authority: Signer<'info>,

    pub clock: Sysvar<'info, Clock>,
}
