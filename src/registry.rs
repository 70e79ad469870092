multiversx_sc::imports!();

use crate::challenge::RewardPoolRule;
use crate::errors::*;
use crate::types::{ChallengeKind, GovernanceParam, Hash32, Listing};

// ============================================================
// Registry — listing applications, challenges and exits
//
// Unapplied → Applied → Whitelisted, with a challenge possible from
// Applied or Whitelisted. A challenged listing is not whitelisted until
// the challenge resolves in its favour; losing resets it to Unapplied.
// ============================================================

#[multiversx_sc::module]
pub trait RegistryModule:
    crate::token::TokenModule
    + crate::events::EventsModule
    + crate::parameters::ParametersModule
    + crate::sealed_votes::SealedVotesModule
    + crate::lock_list::LockListModule
    + crate::voting::VotingModule
    + crate::challenge::ChallengeModule
{
    // ========================================================
    // ENDPOINT: list
    // Applies `listing_hash` with the attached tokens as deposit.
    // ========================================================

    #[payable("*")]
    #[endpoint(list)]
    fn list(&self, listing_hash: Hash32<Self::Api>, data: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        let amount = self.received_tokens();

        require!(!self.is_whitelisted(&listing_hash), ERR_ALREADY_LISTED);
        require!(!self.app_was_made(&listing_hash), ERR_ALREADY_APPLIED);
        require!(
            amount >= self.param_amount(GovernanceParam::MinDeposit),
            ERR_BELOW_MIN_DEPOSIT
        );

        let application_expiry = self.blockchain().get_block_timestamp()
            + self.param_u64(GovernanceParam::ApplyStageLen);

        self.listings(&listing_hash).set(Listing {
            application_expiry,
            whitelisted: false,
            owner: caller.clone(),
            unstaked_deposit: amount.clone(),
            challenge_id: 0,
            exit_time: 0,
            exit_time_expiry: 0,
        });

        self.application_event(&listing_hash, &caller, &amount, application_expiry, &data);
    }

    // ========================================================
    // ENDPOINTS: deposit / withdraw
    // ========================================================

    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self, listing_hash: Hash32<Self::Api>) {
        let caller = self.blockchain().get_caller();
        let amount = self.received_tokens();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        let mut listing = self.owned_listing(&listing_hash, &caller);
        listing.unstaked_deposit += &amount;
        self.listings(&listing_hash).set(&listing);

        self.deposit_event(&listing_hash, &caller, &amount, &listing.unstaked_deposit);
    }

    #[endpoint(withdraw)]
    fn withdraw(&self, listing_hash: Hash32<Self::Api>, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        let mut listing = self.owned_listing(&listing_hash, &caller);

        require!(amount <= listing.unstaked_deposit, ERR_INSUFFICIENT_DEPOSIT);
        require!(
            &listing.unstaked_deposit - &amount >= self.param_amount(GovernanceParam::MinDeposit),
            ERR_BELOW_MIN_DEPOSIT
        );

        listing.unstaked_deposit -= &amount;
        self.listings(&listing_hash).set(&listing);
        self.withdrawal_event(&listing_hash, &caller, &amount, &listing.unstaked_deposit);

        self.send_tokens(&caller, &amount);
    }

    // ========================================================
    // ENDPOINTS: initExit / finalizeExit
    // ========================================================

    #[endpoint(initExit)]
    fn init_exit(&self, listing_hash: Hash32<Self::Api>) {
        let caller = self.blockchain().get_caller();
        let mut listing = self.owned_listing(&listing_hash, &caller);

        require!(listing.whitelisted, ERR_NOT_WHITELISTED);
        require!(!self.challenge_is_unresolved(listing.challenge_id), ERR_CHALLENGE_OPEN);

        let now = self.blockchain().get_block_timestamp();
        require!(
            listing.exit_time == 0 || now > listing.exit_time_expiry,
            ERR_EXIT_PENDING
        );

        listing.exit_time = now + self.param_u64(GovernanceParam::ExitTimeDelay);
        listing.exit_time_expiry =
            listing.exit_time + self.param_u64(GovernanceParam::ExitPeriodLen);
        self.listings(&listing_hash).set(&listing);

        self.exit_initialized_event(
            &listing_hash,
            listing.exit_time,
            listing.exit_time_expiry,
            &caller,
        );
    }

    #[endpoint(finalizeExit)]
    fn finalize_exit(&self, listing_hash: Hash32<Self::Api>) {
        let caller = self.blockchain().get_caller();
        let listing = self.owned_listing(&listing_hash, &caller);

        require!(listing.whitelisted, ERR_NOT_WHITELISTED);
        require!(!self.challenge_is_unresolved(listing.challenge_id), ERR_CHALLENGE_OPEN);
        require!(listing.exit_time > 0, ERR_EXIT_NOT_INITIALIZED);

        let now = self.blockchain().get_block_timestamp();
        require!(
            listing.exit_time < now && now < listing.exit_time_expiry,
            ERR_EXIT_WINDOW
        );

        let (owner, refund) = self.reset_listing(&listing_hash);
        self.listing_withdrawn_event(&listing_hash, &owner);

        self.send_tokens(&owner, &refund);
    }

    // ========================================================
    // ENDPOINT: challenge
    // Stakes `minDeposit` against the listing and opens a poll.
    // Returns the poll id, or 0 when the listing could no longer
    // cover the stake and was removed instead.
    // ========================================================

    #[payable("*")]
    #[endpoint(challenge)]
    fn challenge(&self, listing_hash: Hash32<Self::Api>, data: ManagedBuffer) -> u64 {
        let challenger = self.blockchain().get_caller();
        let min_deposit = self.param_amount(GovernanceParam::MinDeposit);

        require!(self.app_was_made(&listing_hash), ERR_LISTING_NOT_FOUND);
        let mut listing = self.listings(&listing_hash).get();
        require!(!self.challenge_is_unresolved(listing.challenge_id), ERR_CHALLENGE_OPEN);

        if listing.unstaked_deposit < min_deposit {
            let attached = self.received_tokens();
            let (owner, refund) = self.reset_listing(&listing_hash);
            self.touch_and_removed_event(&listing_hash);

            self.send_tokens(&owner, &refund);
            self.send_tokens(&challenger, &attached);
            return 0;
        }

        self.receive_exact(&min_deposit);

        let poll_id = self.open_challenge(
            ChallengeKind::Listing,
            &challenger,
            &min_deposit,
            self.param_u64(GovernanceParam::DispensationPct),
            RewardPoolRule::ShareOfStake,
            self.param_u64(GovernanceParam::VoteQuorum),
            self.param_u64(GovernanceParam::CommitStageLen),
            self.param_u64(GovernanceParam::RevealStageLen),
        );

        listing.challenge_id = poll_id;
        listing.unstaked_deposit -= &min_deposit;
        listing.whitelisted = false;
        self.listings(&listing_hash).set(&listing);

        let poll = self.polls(poll_id).get();
        self.challenge_event(
            &listing_hash,
            poll_id,
            &challenger,
            poll.commit_end_date,
            poll.reveal_end_date,
            &data,
        );

        poll_id
    }

    // ========================================================
    // ENDPOINTS: updateStatus / updateStatuses
    // ========================================================

    #[endpoint(updateStatus)]
    fn update_status(&self, listing_hash: Hash32<Self::Api>) {
        if self.can_be_whitelisted(&listing_hash) {
            let mut listing = self.listings(&listing_hash).get();
            self.whitelist_application(&listing_hash, &mut listing);
            self.listings(&listing_hash).set(&listing);
        } else if self.challenge_can_be_resolved(&listing_hash) {
            self.resolve_challenge(&listing_hash);
        } else {
            sc_panic!(ERR_CANNOT_UPDATE);
        }
    }

    #[endpoint(updateStatuses)]
    fn update_statuses(&self, listing_hashes: MultiValueEncoded<Hash32<Self::Api>>) {
        for listing_hash in listing_hashes {
            self.update_status(listing_hash);
        }
    }

    fn resolve_challenge(&self, listing_hash: &Hash32<Self::Api>) {
        let poll_id = self.listings(listing_hash).get().challenge_id;
        let verdict = self.settle_challenge(poll_id);

        if verdict.passed {
            let mut listing = self.listings(listing_hash).get();
            self.whitelist_application(listing_hash, &mut listing);
            listing.unstaked_deposit += &verdict.reward;
            self.listings(listing_hash).set(&listing);

            self.challenge_failed_event(
                listing_hash,
                poll_id,
                &verdict.reward_pool,
                &verdict.total_tokens,
            );
        } else {
            let (owner, refund) = self.reset_listing(listing_hash);
            self.challenge_succeeded_event(
                listing_hash,
                poll_id,
                &verdict.reward_pool,
                &verdict.total_tokens,
            );

            self.send_tokens(&verdict.challenger, &verdict.reward);
            self.send_tokens(&owner, &refund);
        }
    }

    fn whitelist_application(&self, listing_hash: &Hash32<Self::Api>, listing: &mut Listing<Self::Api>) {
        if !listing.whitelisted {
            self.application_whitelisted_event(listing_hash);
        }
        listing.whitelisted = true;
    }

    /// Deletes the listing and returns the owner with the deposit they are
    /// owed. The caller sends the refund once its own bookkeeping is done.
    fn reset_listing(&self, listing_hash: &Hash32<Self::Api>) -> (ManagedAddress, BigUint) {
        let listing = self.listings(listing_hash).take();
        if listing.whitelisted {
            self.listing_removed_event(listing_hash);
        } else {
            self.application_removed_event(listing_hash);
        }
        (listing.owner, listing.unstaked_deposit)
    }

    fn owned_listing(&self, listing_hash: &Hash32<Self::Api>, caller: &ManagedAddress) -> Listing<Self::Api> {
        require!(self.app_was_made(listing_hash), ERR_LISTING_NOT_FOUND);
        let listing = self.listings(listing_hash).get();
        require!(&listing.owner == caller, ERR_NOT_OWNER);
        listing
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isWhitelisted)]
    fn is_whitelisted(&self, listing_hash: &Hash32<Self::Api>) -> bool {
        let mapper = self.listings(listing_hash);
        !mapper.is_empty() && mapper.get().whitelisted
    }

    #[view(appWasMade)]
    fn app_was_made(&self, listing_hash: &Hash32<Self::Api>) -> bool {
        !self.listings(listing_hash).is_empty()
    }

    #[view(challengeExists)]
    fn challenge_exists(&self, listing_hash: &Hash32<Self::Api>) -> bool {
        let mapper = self.listings(listing_hash);
        if mapper.is_empty() {
            return false;
        }
        let challenge_id = mapper.get().challenge_id;
        challenge_id > 0 && self.challenge_is_unresolved(challenge_id)
    }

    #[view(canBeWhitelisted)]
    fn can_be_whitelisted(&self, listing_hash: &Hash32<Self::Api>) -> bool {
        let mapper = self.listings(listing_hash);
        if mapper.is_empty() {
            return false;
        }
        let listing = mapper.get();
        let now = self.blockchain().get_block_timestamp();
        listing.application_expiry < now
            && !listing.whitelisted
            && !self.challenge_is_unresolved(listing.challenge_id)
    }

    #[view(challengeCanBeResolved)]
    fn challenge_can_be_resolved(&self, listing_hash: &Hash32<Self::Api>) -> bool {
        if !self.challenge_exists(listing_hash) {
            return false;
        }
        let challenge_id = self.listings(listing_hash).get().challenge_id;
        self.poll_ended(challenge_id)
    }

    #[view(determineReward)]
    fn determine_reward(&self, poll_id: u64) -> BigUint {
        self.winner_reward(poll_id)
    }

    #[view(getListing)]
    fn get_listing(&self, listing_hash: &Hash32<Self::Api>) -> Listing<Self::Api> {
        require!(self.app_was_made(listing_hash), ERR_LISTING_NOT_FOUND);
        self.listings(listing_hash).get()
    }

    #[storage_mapper("listings")]
    fn listings(&self, listing_hash: &Hash32<Self::Api>) -> SingleValueMapper<Listing<Self::Api>>;
}
