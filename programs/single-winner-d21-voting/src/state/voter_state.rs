use anchor_lang::prelude::*;

/// A voter's ballot record for one election.
///
/// Lives at the PDA `[b"voter", voter, election]` and is created on the
/// voter's first accepted vote. `voted_for_indices` only ever grows, and its
/// length always equals `votes_cast_count`.
#[account]
#[derive(Default, Debug)]
pub struct VoterStateAccount {
    /// The wallet of the person who voted.
    pub(crate) voter_pubkey: Pubkey,
    /// Which election this ballot is for.
    pub(crate) election_pubkey: Pubkey,
    /// How many votes this person has used so far.
    pub(crate) votes_cast_count: u8,
    /// Candidate indices this voter has already voted for.
    pub(crate) voted_for_indices: Vec<u8>,
    /// PDA bump seed
    pub(crate) bump: u8,
}

impl VoterStateAccount {
    /// Account size, discriminator included, for an election granting
    /// `votes_per_voter` votes.
    pub fn space(votes_per_voter: u8) -> usize {
        8 + 32 + 32 + 1 + 4 + votes_per_voter as usize + 1
    }

    /// A fresh ballot bound to `(voter, election)` with nothing cast yet.
    pub fn open(voter: Pubkey, election: Pubkey, bump: u8) -> Self {
        Self {
            voter_pubkey: voter,
            election_pubkey: election,
            votes_cast_count: 0,
            voted_for_indices: Vec::new(),
            bump,
        }
    }

    /// True for a zeroed account that `init_if_needed` has just allocated.
    pub fn is_new(&self) -> bool {
        self.voter_pubkey == Pubkey::default() && self.votes_cast_count == 0
    }

    pub fn voter(&self) -> Pubkey {
        self.voter_pubkey
    }

    pub fn election(&self) -> Pubkey {
        self.election_pubkey
    }

    pub fn votes_cast_count(&self) -> u8 {
        self.votes_cast_count
    }

    pub fn voted_for_indices(&self) -> &[u8] {
        &self.voted_for_indices
    }

    pub fn has_voted_for(&self, candidate_index: u8) -> bool {
        self.voted_for_indices.contains(&candidate_index)
    }

    /// Votes still available under a budget of `votes_per_voter`.
    pub fn remaining_votes(&self, votes_per_voter: u8) -> u8 {
        votes_per_voter.saturating_sub(self.votes_cast_count)
    }

    // Callers validate the indices first; see ElectionAccount::cast_ballot.
    pub(crate) fn record(&mut self, candidate_indices: &[u8]) {
        self.voted_for_indices.extend_from_slice(candidate_indices);
        self.votes_cast_count = self.voted_for_indices.len() as u8;
    }
}
