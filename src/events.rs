multiversx_sc::imports!();

use crate::types::{GovernanceParam, Hash32};

#[multiversx_sc::module]
pub trait EventsModule {
    // ========================================================
    // Voting
    // ========================================================

    #[event("pollCreated")]
    fn poll_created_event(
        &self,
        #[indexed] poll_id: u64,
        #[indexed] vote_quorum: u64,
        #[indexed] commit_end_date: u64,
        #[indexed] reveal_end_date: u64,
        creator: &ManagedAddress,
    );

    #[event("votingRightsGranted")]
    fn voting_rights_granted_event(&self, #[indexed] voter: &ManagedAddress, amount: &BigUint);

    #[event("votingRightsWithdrawn")]
    fn voting_rights_withdrawn_event(&self, #[indexed] voter: &ManagedAddress, amount: &BigUint);

    #[event("voteCommitted")]
    fn vote_committed_event(
        &self,
        #[indexed] poll_id: u64,
        #[indexed] voter: &ManagedAddress,
        num_tokens: &BigUint,
    );

    #[event("voteRevealed")]
    fn vote_revealed_event(
        &self,
        #[indexed] poll_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] choice: u64,
        num_tokens: &BigUint,
    );

    #[event("tokensRescued")]
    fn tokens_rescued_event(&self, #[indexed] poll_id: u64, #[indexed] voter: &ManagedAddress);

    // ========================================================
    // Registry
    // ========================================================

    #[event("application")]
    fn application_event(
        &self,
        #[indexed] listing_hash: &Hash32<Self::Api>,
        #[indexed] applicant: &ManagedAddress,
        #[indexed] deposit: &BigUint,
        #[indexed] application_expiry: u64,
        data: &ManagedBuffer,
    );

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] listing_hash: &Hash32<Self::Api>,
        #[indexed] owner: &ManagedAddress,
        #[indexed] added: &BigUint,
        new_total: &BigUint,
    );

    #[event("withdrawal")]
    fn withdrawal_event(
        &self,
        #[indexed] listing_hash: &Hash32<Self::Api>,
        #[indexed] owner: &ManagedAddress,
        #[indexed] withdrew: &BigUint,
        new_total: &BigUint,
    );

    #[event("applicationWhitelisted")]
    fn application_whitelisted_event(&self, #[indexed] listing_hash: &Hash32<Self::Api>);

    #[event("applicationRemoved")]
    fn application_removed_event(&self, #[indexed] listing_hash: &Hash32<Self::Api>);

    #[event("listingRemoved")]
    fn listing_removed_event(&self, #[indexed] listing_hash: &Hash32<Self::Api>);

    #[event("listingWithdrawn")]
    fn listing_withdrawn_event(
        &self,
        #[indexed] listing_hash: &Hash32<Self::Api>,
        #[indexed] owner: &ManagedAddress,
    );

    #[event("touchAndRemoved")]
    fn touch_and_removed_event(&self, #[indexed] listing_hash: &Hash32<Self::Api>);

    #[event("exitInitialized")]
    fn exit_initialized_event(
        &self,
        #[indexed] listing_hash: &Hash32<Self::Api>,
        #[indexed] exit_time: u64,
        #[indexed] exit_time_expiry: u64,
        owner: &ManagedAddress,
    );

    #[event("challenge")]
    fn challenge_event(
        &self,
        #[indexed] listing_hash: &Hash32<Self::Api>,
        #[indexed] poll_id: u64,
        #[indexed] challenger: &ManagedAddress,
        #[indexed] commit_end_date: u64,
        #[indexed] reveal_end_date: u64,
        data: &ManagedBuffer,
    );

    #[event("challengeFailed")]
    fn challenge_failed_event(
        &self,
        #[indexed] listing_hash: &Hash32<Self::Api>,
        #[indexed] poll_id: u64,
        #[indexed] reward_pool: &BigUint,
        total_tokens: &BigUint,
    );

    #[event("challengeSucceeded")]
    fn challenge_succeeded_event(
        &self,
        #[indexed] listing_hash: &Hash32<Self::Api>,
        #[indexed] poll_id: u64,
        #[indexed] reward_pool: &BigUint,
        total_tokens: &BigUint,
    );

    // ========================================================
    // Rewards
    // ========================================================

    #[event("rewardClaimed")]
    fn reward_claimed_event(
        &self,
        #[indexed] poll_id: u64,
        #[indexed] voter: &ManagedAddress,
        reward: &BigUint,
    );

    // ========================================================
    // Parameterizer
    // ========================================================

    #[event("reparameterizationProposal")]
    fn reparameterization_proposal_event(
        &self,
        #[indexed] name: GovernanceParam,
        #[indexed] value: &BigUint,
        #[indexed] proposal_id: &Hash32<Self::Api>,
        #[indexed] deposit: &BigUint,
        #[indexed] app_expiry: u64,
        proposer: &ManagedAddress,
    );

    #[event("newChallenge")]
    fn new_challenge_event(
        &self,
        #[indexed] proposal_id: &Hash32<Self::Api>,
        #[indexed] poll_id: u64,
        #[indexed] commit_end_date: u64,
        #[indexed] reveal_end_date: u64,
        challenger: &ManagedAddress,
    );

    #[event("proposalAccepted")]
    fn proposal_accepted_event(
        &self,
        #[indexed] proposal_id: &Hash32<Self::Api>,
        #[indexed] name: GovernanceParam,
        value: &BigUint,
    );

    #[event("proposalExpired")]
    fn proposal_expired_event(&self, #[indexed] proposal_id: &Hash32<Self::Api>);

    #[event("proposalChallengeFailed")]
    fn proposal_challenge_failed_event(
        &self,
        #[indexed] proposal_id: &Hash32<Self::Api>,
        #[indexed] poll_id: u64,
        #[indexed] reward_pool: &BigUint,
        total_tokens: &BigUint,
    );

    #[event("proposalChallengeSucceeded")]
    fn proposal_challenge_succeeded_event(
        &self,
        #[indexed] proposal_id: &Hash32<Self::Api>,
        #[indexed] poll_id: u64,
        #[indexed] reward_pool: &BigUint,
        total_tokens: &BigUint,
    );
}
