//! Property tests for the tallying invariants.

use anchor_lang::prelude::*;
use proptest::prelude::*;
use single_winner_d21_voting::{ElectionAccount, VoterStateAccount};

const START: i64 = 1_000;
const END: i64 = 2_000;

fn election(candidate_count: u8, votes_per_voter: u8) -> ElectionAccount {
    let mut election = ElectionAccount::default();
    election
        .initialize(
            Pubkey::new_unique(),
            START,
            END,
            (0..candidate_count).map(|i| format!("candidate-{i}")).collect(),
            candidate_count,
            votes_per_voter,
        )
        .unwrap();
    election
}

/// (candidate_count, votes_per_voter, calls as (voter slot, raw indices))
fn scenario() -> impl Strategy<Value = (u8, u8, Vec<(usize, Vec<u8>)>)> {
    (2u8..8).prop_flat_map(|candidate_count| {
        (
            Just(candidate_count),
            1..=candidate_count,
            prop::collection::vec(
                (0usize..4, prop::collection::vec(0u8..candidate_count + 1, 0..4)),
                0..40,
            ),
        )
    })
}

proptest! {
    // Property: accepted (voter, candidate) pairs add up to the tallies, and
    // every ballot stays consistent with its budget
    #[test]
    fn tallies_match_accepted_pairs((candidate_count, votes_per_voter, calls) in scenario()) {
        let election_key = Pubkey::new_unique();
        let mut election = election(candidate_count, votes_per_voter);
        let mut ballots: Vec<VoterStateAccount> = (0..4)
            .map(|_| VoterStateAccount::open(Pubkey::new_unique(), election_key, 255))
            .collect();

        let mut accepted_pairs = 0u64;
        for (slot, indices) in calls {
            let before = election.total_votes();
            match election.cast_ballot(&mut ballots[slot], &indices, START) {
                Ok(event) => {
                    prop_assert_eq!(&event.candidates_voted_for, &indices);
                    accepted_pairs += indices.len() as u64;
                }
                Err(_) => {
                    prop_assert_eq!(election.total_votes(), before);
                }
            }
        }

        prop_assert_eq!(election.total_votes(), accepted_pairs);
        for ballot in &ballots {
            let indices = ballot.voted_for_indices();
            prop_assert_eq!(ballot.votes_cast_count() as usize, indices.len());
            prop_assert!(ballot.votes_cast_count() <= votes_per_voter);
            let mut sorted = indices.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), indices.len());
        }
    }

    // Property: the winner depends only on the final counts, not on the order
    // in which voters arrived
    #[test]
    fn winner_is_independent_of_vote_order(
        ballots in prop::collection::vec(prop::sample::subsequence(vec![0u8, 1, 2, 3], 1..=2), 1..12)
    ) {
        let authority = Pubkey::new_unique();
        let election_key = Pubkey::new_unique();
        let mut forward = ElectionAccount::default();
        forward
            .initialize(authority, START, END, vec!["a".into(), "b".into(), "c".into(), "d".into()], 4, 2)
            .unwrap();
        let mut backward = forward.clone();

        for indices in &ballots {
            let mut ballot = VoterStateAccount::open(Pubkey::new_unique(), election_key, 255);
            forward.cast_ballot(&mut ballot, indices, START).unwrap();
        }
        for indices in ballots.iter().rev() {
            let mut ballot = VoterStateAccount::open(Pubkey::new_unique(), election_key, 255);
            backward.cast_ballot(&mut ballot, indices, START).unwrap();
        }

        let forward_result = forward.finalize(election_key, &authority, END).unwrap();
        let backward_result = backward.finalize(election_key, &authority, END).unwrap();
        prop_assert_eq!(&forward_result, &backward_result);

        let max = forward.candidates().iter().map(|c| c.vote_count()).max().unwrap();
        let lowest_leader = forward
            .candidates()
            .iter()
            .position(|c| c.vote_count() == max)
            .unwrap();
        prop_assert_eq!(forward_result.winner_index as usize, lowest_leader);
    }
}
