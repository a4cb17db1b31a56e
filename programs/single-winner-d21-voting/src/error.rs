use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("The election has not started yet.")]
    ElectionNotStarted,
    #[msg("The election has already ended.")]
    ElectionAlreadyEnded,
    #[msg("The election has already been finalized and a winner declared.")]
    ElectionAlreadyFinalized,
    #[msg("Cannot tally results until the election has ended.")]
    TallyNotAllowedYet,
    #[msg("You have already used all your available votes.")]
    VotesExhausted,
    #[msg("You cannot vote for the same candidate more than once.")]
    AlreadyVotedForCandidate,
    #[msg("Your vote request contains duplicate candidates in the same transaction.")]
    DuplicateVoteInSingleTx,
    #[msg("The provided candidate index is invalid.")]
    InvalidCandidateIndex,
    #[msg("The provided candidate count does not match the candidate list length.")]
    CandidateCountMismatch,
    #[msg("A candidate name is too long.")]
    CandidateNameTooLong,
    // Codes below extend the published table; keep the ones above stable
    #[msg("An election needs at least two candidates.")]
    TooFewCandidates,
    #[msg("The election must start before it ends.")]
    InvalidElectionWindow,
    #[msg("Votes per voter must be between one and the number of candidates.")]
    InvalidVotesPerVoter,
    #[msg("Only the election authority can tally the results.")]
    Unauthorized,
    #[msg("A vote must name at least one candidate.")]
    EmptyBallot,
    #[msg("A candidate vote counter overflowed.")]
    VoteCountOverflow,
}
