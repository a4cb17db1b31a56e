use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_CANDIDATE_NAME_LEN, MIN_CANDIDATES},
    error::ErrorCode,
    state::{ElectionFinalized, VoteCasted, VoterStateAccount},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Candidate {
    /// Display name (max 27 bytes)
    #[max_len(27)]
    pub(crate) name: String,
    pub(crate) vote_count: u64,
}

impl Candidate {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vote_count(&self) -> u64 {
        self.vote_count
    }
}

/// An election with a fixed candidate list and live tallies.
///
/// The account is sized once for its candidate count and never reallocated.
/// Tallies only change through [`ElectionAccount::cast_ballot`] and freeze
/// for good at [`ElectionAccount::finalize`].
#[account]
#[derive(Default, Debug)]
pub struct ElectionAccount {
    /// The authority (admin) who created and can end the election.
    pub(crate) authority: Pubkey,
    /// Unix timestamp when voting can begin.
    pub(crate) start_timestamp: i64,
    /// Unix timestamp when voting must end.
    pub(crate) end_timestamp: i64,
    /// The number of votes each person gets (e.g., 2).
    pub(crate) votes_per_voter: u8,
    /// Has the winner been declared?
    pub(crate) is_finalized: bool,
    /// The index of the winning candidate, if finalized.
    pub(crate) winner_index: Option<u8>,
    /// A list of all candidates.
    pub(crate) candidates: Vec<Candidate>,
}

impl ElectionAccount {
    /// Account size, discriminator included, for `candidate_count` candidates.
    pub fn space(candidate_count: u8) -> usize {
        8 + 32 + 8 + 8 + 1 + 1 + (1 + 1) + 4 + candidate_count as usize * Candidate::INIT_SPACE
    }

    /// Checks an election configuration without touching any account.
    pub fn validate_config(
        start_timestamp: i64,
        end_timestamp: i64,
        candidate_names: &[String],
        candidate_count: u8,
        votes_per_voter: u8,
    ) -> Result<()> {
        require!(
            candidate_names.len() == candidate_count as usize,
            ErrorCode::CandidateCountMismatch
        );
        require!(candidate_count >= MIN_CANDIDATES, ErrorCode::TooFewCandidates);
        require!(
            candidate_names
                .iter()
                .all(|name| name.len() <= MAX_CANDIDATE_NAME_LEN),
            ErrorCode::CandidateNameTooLong
        );
        require!(
            start_timestamp < end_timestamp,
            ErrorCode::InvalidElectionWindow
        );
        require!(
            votes_per_voter >= 1 && votes_per_voter <= candidate_count,
            ErrorCode::InvalidVotesPerVoter
        );
        Ok(())
    }

    /// Fills a freshly allocated election. Nothing is written on error.
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        start_timestamp: i64,
        end_timestamp: i64,
        candidate_names: Vec<String>,
        candidate_count: u8,
        votes_per_voter: u8,
    ) -> Result<()> {
        Self::validate_config(
            start_timestamp,
            end_timestamp,
            &candidate_names,
            candidate_count,
            votes_per_voter,
        )?;

        self.authority = authority;
        self.start_timestamp = start_timestamp;
        self.end_timestamp = end_timestamp;
        self.votes_per_voter = votes_per_voter;
        self.is_finalized = false;
        self.winner_index = None;
        self.candidates = candidate_names
            .into_iter()
            .map(|name| Candidate {
                name,
                vote_count: 0,
            })
            .collect();

        Ok(())
    }

    /// Applies one CastVote call from the owner of `ballot`.
    ///
    /// Every precondition is checked before anything is written, so a
    /// rejected call leaves both the election and the ballot untouched.
    pub fn cast_ballot(
        &mut self,
        ballot: &mut VoterStateAccount,
        candidate_indices: &[u8],
        now: i64,
    ) -> Result<VoteCasted> {
        require!(now >= self.start_timestamp, ErrorCode::ElectionNotStarted);
        require!(now < self.end_timestamp, ErrorCode::ElectionAlreadyEnded);
        require!(!self.is_finalized, ErrorCode::ElectionAlreadyFinalized);
        require!(!candidate_indices.is_empty(), ErrorCode::EmptyBallot);

        let candidate_count = self.candidates.len();
        require!(
            candidate_indices
                .iter()
                .all(|&index| (index as usize) < candidate_count),
            ErrorCode::InvalidCandidateIndex
        );

        let mut seen = [false; 256];
        for &index in candidate_indices {
            require!(!seen[index as usize], ErrorCode::DuplicateVoteInSingleTx);
            seen[index as usize] = true;
        }

        require!(
            !candidate_indices
                .iter()
                .any(|&index| ballot.has_voted_for(index)),
            ErrorCode::AlreadyVotedForCandidate
        );
        require!(
            ballot.votes_cast_count as usize + candidate_indices.len()
                <= self.votes_per_voter as usize,
            ErrorCode::VotesExhausted
        );

        let mut new_counts = Vec::with_capacity(candidate_indices.len());
        for &index in candidate_indices {
            let count = self.candidates[index as usize]
                .vote_count
                .checked_add(1)
                .ok_or_else(|| error!(ErrorCode::VoteCountOverflow))?;
            new_counts.push(count);
        }

        for (&index, count) in candidate_indices.iter().zip(new_counts) {
            self.candidates[index as usize].vote_count = count;
        }
        ballot.record(candidate_indices);

        Ok(VoteCasted {
            voter: ballot.voter_pubkey,
            election: ballot.election_pubkey,
            candidates_voted_for: candidate_indices.to_vec(),
            timestamp: now,
        })
    }

    /// Freezes the tallies and declares the winner. Only the authority may
    /// call it, only once, and only after the election has ended.
    pub fn finalize(
        &mut self,
        election: Pubkey,
        caller: &Pubkey,
        now: i64,
    ) -> Result<ElectionFinalized> {
        require_keys_eq!(*caller, self.authority, ErrorCode::Unauthorized);
        require!(now >= self.end_timestamp, ErrorCode::TallyNotAllowedYet);
        require!(!self.is_finalized, ErrorCode::ElectionAlreadyFinalized);

        let (winner_index, winner) = self
            .leading_candidate()
            .ok_or_else(|| error!(ErrorCode::TooFewCandidates))?;
        let winner_name = winner.name.clone();
        let winner_vote_count = winner.vote_count;

        self.is_finalized = true;
        self.winner_index = Some(winner_index);

        Ok(ElectionFinalized {
            election,
            winner_index,
            winner_name,
            winner_vote_count,
            timestamp: now,
        })
    }

    /// The candidate currently holding the most votes.
    ///
    /// Ties go to the lowest index, so any verifier replaying the same
    /// counts reaches the same winner.
    pub fn leading_candidate(&self) -> Option<(u8, &Candidate)> {
        let mut leader: Option<(u8, &Candidate)> = None;
        for (index, candidate) in self.candidates.iter().enumerate() {
            match leader {
                Some((_, best)) if candidate.vote_count <= best.vote_count => {}
                _ => leader = Some((index as u8, candidate)),
            }
        }
        leader
    }

    pub fn total_votes(&self) -> u64 {
        self.candidates.iter().map(|c| c.vote_count).sum()
    }

    pub fn authority(&self) -> Pubkey {
        self.authority
    }

    pub fn start_timestamp(&self) -> i64 {
        self.start_timestamp
    }

    pub fn end_timestamp(&self) -> i64 {
        self.end_timestamp
    }

    pub fn votes_per_voter(&self) -> u8 {
        self.votes_per_voter
    }

    pub fn is_finalized(&self) -> bool {
        self.is_finalized
    }

    pub fn winner_index(&self) -> Option<u8> {
        self.winner_index
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }
}
