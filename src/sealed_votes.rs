multiversx_sc::imports!();

use crate::types::{Hash32, SealedVote};

/// Commitments keyed by (voter, poll). Written once per commit, read back
/// at reveal time and when ordering the voter's lock list.
#[multiversx_sc::module]
pub trait SealedVotesModule {
    fn store_sealed_vote(
        &self,
        voter: &ManagedAddress,
        poll_id: u64,
        commit_hash: Hash32<Self::Api>,
        num_tokens: BigUint,
    ) {
        self.sealed_votes(voter, poll_id).set(SealedVote {
            commit_hash,
            num_tokens,
        });
    }

    /// Tokens committed by `voter` to `poll_id`; 0 for the list sentinel and
    /// for polls the voter never committed to.
    #[view(getNumTokens)]
    fn get_num_tokens(&self, voter: &ManagedAddress, poll_id: u64) -> BigUint {
        let mapper = self.sealed_votes(voter, poll_id);
        if mapper.is_empty() {
            return BigUint::zero();
        }
        mapper.get().num_tokens
    }

    #[view(getCommitHash)]
    fn get_commit_hash(&self, voter: &ManagedAddress, poll_id: u64) -> OptionalValue<Hash32<Self::Api>> {
        let mapper = self.sealed_votes(voter, poll_id);
        if mapper.is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(mapper.get().commit_hash)
    }

    #[storage_mapper("sealedVotes")]
    fn sealed_votes(
        &self,
        voter: &ManagedAddress,
        poll_id: u64,
    ) -> SingleValueMapper<SealedVote<Self::Api>>;
}
