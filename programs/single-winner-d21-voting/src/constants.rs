// Seed prefix for a voter's ballot record: [VOTER_STATE_SEED, voter, election]
pub const VOTER_STATE_SEED: &[u8] = b"voter";

// Candidate names are stored in fixed-size slots of this many bytes.
// 255 full slots must still fit in MAX_ELECTION_ACCOUNT_SPACE.
pub const MAX_CANDIDATE_NAME_LEN: usize = 27;

// Largest account the runtime lets `init` allocate through a CPI
pub const MAX_ELECTION_ACCOUNT_SPACE: usize = 10_240;

// Candidate indices are u8, which caps an election at 255 candidates
pub const MIN_CANDIDATES: u8 = 2;
