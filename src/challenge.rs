multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{Challenge, ChallengeKind};

/// How the voter reward pool is carved out of the loser's stake.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RewardPoolRule {
    /// `(100 - pct) * stake / 100`
    ShareOfStake,
    /// `100 - pct * stake / 100`, the grouping the parameterizer has
    /// always used. Undefined when the subtrahend exceeds 100 or the pool
    /// would exceed the doubled stake it is paid from.
    HundredLessDispensed,
}

impl RewardPoolRule {
    /// `None` when the rule cannot be funded from `stake`.
    pub fn reward_pool<M: ManagedTypeApi>(
        self,
        stake: &BigUint<M>,
        dispensation_pct: u64,
    ) -> Option<BigUint<M>> {
        match self {
            RewardPoolRule::ShareOfStake => {
                Some((stake * (100 - dispensation_pct)) / 100u64)
            },
            RewardPoolRule::HundredLessDispensed => {
                let dispensed = (stake * dispensation_pct) / 100u64;
                if dispensed > 100u64 {
                    return None;
                }
                let pool = BigUint::from(100u64) - dispensed;
                if pool > stake * 2u64 {
                    return None;
                }
                Some(pool)
            },
        }
    }
}

/// Result of settling a challenge, handed back to the engine that opened it.
pub struct ChallengeVerdict<M: ManagedTypeApi> {
    /// The poll passed: the challenged listing or proposal survives.
    pub passed: bool,
    /// Paid to whichever side won.
    pub reward: BigUint<M>,
    pub challenger: ManagedAddress<M>,
    pub reward_pool: BigUint<M>,
    pub total_tokens: BigUint<M>,
}

// ============================================================
// Staked challenge — shared by listings and parameter proposals
// ============================================================

#[multiversx_sc::module]
pub trait ChallengeModule:
    crate::token::TokenModule
    + crate::events::EventsModule
    + crate::sealed_votes::SealedVotesModule
    + crate::lock_list::LockListModule
    + crate::voting::VotingModule
{
    /// Opens the poll and records the challenge under its id. The caller
    /// collects the challenger's stake.
    #[allow(clippy::too_many_arguments)]
    fn open_challenge(
        &self,
        kind: ChallengeKind,
        challenger: &ManagedAddress,
        stake: &BigUint,
        dispensation_pct: u64,
        rule: RewardPoolRule,
        vote_quorum: u64,
        commit_duration: u64,
        reveal_duration: u64,
    ) -> u64 {
        let reward_pool = match rule.reward_pool(stake, dispensation_pct) {
            Some(pool) => pool,
            None => sc_panic!(ERR_REWARD_POOL_UNDERFLOW),
        };
        let poll_id = self.start_poll(vote_quorum, commit_duration, reveal_duration);

        self.challenges(poll_id).set(Challenge {
            kind,
            challenger: challenger.clone(),
            reward_pool,
            stake: stake.clone(),
            resolved: false,
            total_tokens: BigUint::zero(),
        });

        poll_id
    }

    /// Tokens owed to the winner of an unresolved, ended challenge: the
    /// doubled stake when nobody can claim the pool, otherwise the doubled
    /// stake less the pool.
    fn winner_reward(&self, poll_id: u64) -> BigUint {
        let challenge = self.existing_challenge(poll_id);
        require!(!challenge.resolved, ERR_CHALLENGE_RESOLVED);
        require!(self.poll_ended(poll_id), ERR_POLL_NOT_ENDED);

        let doubled = &challenge.stake * 2u64;
        if self.get_total_number_of_tokens_for_winning_option(poll_id) == 0u64 {
            return doubled;
        }
        doubled - challenge.reward_pool
    }

    fn settle_challenge(&self, poll_id: u64) -> ChallengeVerdict<Self::Api> {
        let reward = self.winner_reward(poll_id);
        let passed = self.is_passed(poll_id);
        let total_tokens = self.get_total_number_of_tokens_for_winning_option(poll_id);

        let mut challenge = self.challenges(poll_id).get();
        challenge.resolved = true;
        challenge.total_tokens = total_tokens.clone();
        self.challenges(poll_id).set(&challenge);

        ChallengeVerdict {
            passed,
            reward,
            challenger: challenge.challenger,
            reward_pool: challenge.reward_pool,
            total_tokens,
        }
    }

    fn existing_challenge(&self, poll_id: u64) -> Challenge<Self::Api> {
        let mapper = self.challenges(poll_id);
        require!(!mapper.is_empty(), ERR_CHALLENGE_NOT_FOUND);
        mapper.get()
    }

    fn challenge_is_unresolved(&self, poll_id: u64) -> bool {
        let mapper = self.challenges(poll_id);
        !mapper.is_empty() && !mapper.get().resolved
    }

    // ========================================================
    // Voter rewards
    // ========================================================

    #[endpoint(claimReward)]
    fn claim_reward(&self, poll_id: u64) {
        let voter = self.blockchain().get_caller();
        let reward = self.claim_reward_for(&voter, poll_id);
        self.send_tokens(&voter, &reward);
    }

    #[endpoint(claimRewards)]
    fn claim_rewards(&self, poll_ids: MultiValueEncoded<u64>) {
        let voter = self.blockchain().get_caller();
        let mut total_reward = BigUint::zero();
        for poll_id in poll_ids {
            let reward = self.claim_reward_for(&voter, poll_id);
            total_reward += &reward;
        }
        self.send_tokens(&voter, &total_reward);
    }

    /// Books the claim and returns the amount owed; the transfer is left to
    /// the caller.
    fn claim_reward_for(&self, voter: &ManagedAddress, poll_id: u64) -> BigUint {
        let mut challenge = self.existing_challenge(poll_id);
        require!(!self.token_claims(poll_id, voter).get(), ERR_ALREADY_CLAIMED);
        require!(challenge.resolved, ERR_CHALLENGE_NOT_RESOLVED);

        let voter_tokens = self.get_num_passing_tokens(voter, poll_id);
        let reward = self.pool_share(&voter_tokens, &challenge);

        challenge.total_tokens -= &voter_tokens;
        challenge.reward_pool -= &reward;
        self.challenges(poll_id).set(&challenge);
        self.token_claims(poll_id, voter).set(true);

        self.reward_claimed_event(poll_id, voter, &reward);
        reward
    }

    /// Share of the remaining pool `voter` would receive if they claimed now.
    #[view(voterReward)]
    fn voter_reward(&self, voter: &ManagedAddress, poll_id: u64) -> BigUint {
        let challenge = self.existing_challenge(poll_id);
        require!(challenge.resolved, ERR_CHALLENGE_NOT_RESOLVED);

        let voter_tokens = self.get_num_passing_tokens(voter, poll_id);
        self.pool_share(&voter_tokens, &challenge)
    }

    /// Winning sides that revealed only zero-token votes share nothing.
    fn pool_share(&self, voter_tokens: &BigUint, challenge: &Challenge<Self::Api>) -> BigUint {
        if challenge.total_tokens == 0u64 {
            return BigUint::zero();
        }
        (voter_tokens * &challenge.reward_pool) / &challenge.total_tokens
    }

    #[view(getChallenge)]
    fn get_challenge(&self, poll_id: u64) -> Challenge<Self::Api> {
        self.existing_challenge(poll_id)
    }

    #[view(tokenClaims)]
    #[storage_mapper("tokenClaims")]
    fn token_claims(&self, poll_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("challenges")]
    fn challenges(&self, poll_id: u64) -> SingleValueMapper<Challenge<Self::Api>>;
}
