multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{Hash32, Poll};

/// Reveal option counted towards `votes_for`; any other value votes against.
pub const VOTE_FOR: u64 = 1;

// ============================================================
// Commit-reveal voting with per-voter token locking
// ============================================================

#[multiversx_sc::module]
pub trait VotingModule:
    crate::token::TokenModule
    + crate::events::EventsModule
    + crate::sealed_votes::SealedVotesModule
    + crate::lock_list::LockListModule
{
    // ========================================================
    // Voting rights
    // ========================================================

    #[payable("*")]
    #[endpoint(requestVotingRights)]
    fn request_voting_rights(&self) {
        let amount = self.received_tokens();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        let voter = self.blockchain().get_caller();
        self.grant_voting_rights(&voter, &amount);
    }

    #[endpoint(withdrawVotingRights)]
    fn withdraw_voting_rights(&self, amount: BigUint) {
        let voter = self.blockchain().get_caller();
        let balance = self.vote_token_balance(&voter).get();
        let locked = self.get_locked_tokens(&voter);
        require!(balance >= locked, ERR_TOKENS_LOCKED);
        require!(&balance - &locked >= amount, ERR_TOKENS_LOCKED);

        self.vote_token_balance(&voter).set(&balance - &amount);
        self.voting_rights_withdrawn_event(&voter, &amount);

        self.send_tokens(&voter, &amount);
    }

    fn grant_voting_rights(&self, voter: &ManagedAddress, amount: &BigUint) {
        self.vote_token_balance(voter).update(|balance| *balance += amount);
        self.voting_rights_granted_event(voter, amount);
    }

    // ========================================================
    // Rescue: unlock commitments that were never revealed
    // ========================================================

    #[endpoint(rescueTokens)]
    fn rescue_tokens(&self, poll_id: u64) {
        let voter = self.blockchain().get_caller();
        self.rescue_tokens_for(&voter, poll_id);
    }

    #[endpoint(rescueTokensInMultiplePolls)]
    fn rescue_tokens_in_multiple_polls(&self, poll_ids: MultiValueEncoded<u64>) {
        let voter = self.blockchain().get_caller();
        for poll_id in poll_ids {
            self.rescue_tokens_for(&voter, poll_id);
        }
    }

    fn rescue_tokens_for(&self, voter: &ManagedAddress, poll_id: u64) {
        require!(self.poll_exists(poll_id), ERR_POLL_NOT_FOUND);
        let poll = self.polls(poll_id).get();
        require!(self.is_expired(poll.reveal_end_date), ERR_POLL_NOT_ENDED);
        require!(self.lock_list_contains(voter, poll_id), ERR_NOT_LOCKED);

        self.lock_list_remove(voter, poll_id);
        self.tokens_rescued_event(poll_id, voter);
    }

    // ========================================================
    // Commit
    // ========================================================

    /// Commits a sealed vote of `num_tokens`, inserted into the caller's
    /// lock list right after `prev_poll_id`. Voting token attached to the
    /// call is credited as voting rights first.
    #[payable("*")]
    #[endpoint(commitVote)]
    fn commit_vote(
        &self,
        poll_id: u64,
        secret_hash: Hash32<Self::Api>,
        num_tokens: BigUint,
        prev_poll_id: u64,
    ) {
        let voter = self.blockchain().get_caller();
        self.credit_attached_rights(&voter);
        self.commit_vote_for(&voter, poll_id, secret_hash, num_tokens, prev_poll_id);
    }

    #[payable("*")]
    #[endpoint(commitVotes)]
    fn commit_votes(
        &self,
        votes: MultiValueEncoded<MultiValue4<u64, Hash32<Self::Api>, BigUint, u64>>,
    ) {
        let voter = self.blockchain().get_caller();
        self.credit_attached_rights(&voter);
        for vote in votes {
            let (poll_id, secret_hash, num_tokens, prev_poll_id) = vote.into_tuple();
            self.commit_vote_for(&voter, poll_id, secret_hash, num_tokens, prev_poll_id);
        }
    }

    fn credit_attached_rights(&self, voter: &ManagedAddress) {
        let attached = self.received_tokens();
        if attached > 0u64 {
            self.grant_voting_rights(voter, &attached);
        }
    }

    fn commit_vote_for(
        &self,
        voter: &ManagedAddress,
        poll_id: u64,
        secret_hash: Hash32<Self::Api>,
        num_tokens: BigUint,
        prev_poll_id: u64,
    ) {
        require!(poll_id != 0, ERR_ZERO_POLL_ID);
        require!(self.commit_period_active(poll_id), ERR_COMMIT_CLOSED);
        require!(
            self.vote_token_balance(voter).get() >= num_tokens,
            ERR_INSUFFICIENT_VOTING_RIGHTS
        );
        require!(
            secret_hash.to_byte_array() != [0u8; 32],
            ERR_EMPTY_SECRET
        );

        self.store_sealed_vote(voter, poll_id, secret_hash, num_tokens.clone());
        self.lock_list_insert(voter, prev_poll_id, poll_id);
        self.did_commit(poll_id, voter).set(true);

        self.vote_committed_event(poll_id, voter, &num_tokens);
    }

    // ========================================================
    // Reveal
    // ========================================================

    #[endpoint(revealVote)]
    fn reveal_vote(&self, poll_id: u64, vote_option: u64, salt: u64) {
        let voter = self.blockchain().get_caller();
        self.reveal_vote_for(&voter, poll_id, vote_option, salt);
    }

    #[endpoint(revealVotes)]
    fn reveal_votes(&self, votes: MultiValueEncoded<MultiValue3<u64, u64, u64>>) {
        let voter = self.blockchain().get_caller();
        for vote in votes {
            let (poll_id, vote_option, salt) = vote.into_tuple();
            self.reveal_vote_for(&voter, poll_id, vote_option, salt);
        }
    }

    fn reveal_vote_for(&self, voter: &ManagedAddress, poll_id: u64, vote_option: u64, salt: u64) {
        require!(self.reveal_period_active(poll_id), ERR_REVEAL_CLOSED);
        require!(self.did_commit(poll_id, voter).get(), ERR_NOT_COMMITTED);
        require!(!self.did_reveal(poll_id, voter).get(), ERR_ALREADY_REVEALED);

        let sealed = self.sealed_votes(voter, poll_id).get();
        require!(
            self.compute_secret_hash(vote_option, salt) == sealed.commit_hash,
            ERR_HASH_MISMATCH
        );

        let num_tokens = sealed.num_tokens;
        let mut poll = self.polls(poll_id).get();
        if vote_option == VOTE_FOR {
            poll.votes_for += &num_tokens;
        } else {
            poll.votes_against += &num_tokens;
        }
        self.polls(poll_id).set(&poll);

        self.lock_list_remove(voter, poll_id);
        self.did_reveal(poll_id, voter).set(true);
        self.vote_options(poll_id, voter).set(vote_option);

        self.vote_revealed_event(poll_id, voter, vote_option, &num_tokens);
    }

    /// keccak256 of the big-endian option followed by the big-endian salt.
    #[view(computeSecretHash)]
    fn compute_secret_hash(&self, vote_option: u64, salt: u64) -> Hash32<Self::Api> {
        let mut preimage = ManagedBuffer::new_from_bytes(&vote_option.to_be_bytes());
        preimage.append_bytes(&salt.to_be_bytes());
        self.crypto().keccak256(&preimage)
    }

    // ========================================================
    // Polls
    // ========================================================

    #[endpoint(startPoll)]
    fn start_poll(&self, vote_quorum: u64, commit_duration: u64, reveal_duration: u64) -> u64 {
        let poll_id = self.poll_nonce().get() + 1;
        let commit_end_date = self.blockchain().get_block_timestamp() + commit_duration;
        let reveal_end_date = commit_end_date + reveal_duration;

        self.polls(poll_id).set(Poll {
            commit_end_date,
            reveal_end_date,
            vote_quorum,
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
        });
        self.poll_nonce().set(poll_id);

        let creator = self.blockchain().get_caller();
        self.poll_created_event(poll_id, vote_quorum, commit_end_date, reveal_end_date, &creator);

        poll_id
    }

    fn is_expired(&self, deadline: u64) -> bool {
        self.blockchain().get_block_timestamp() > deadline
    }

    #[view(pollExists)]
    fn poll_exists(&self, poll_id: u64) -> bool {
        poll_id != 0 && poll_id <= self.poll_nonce().get()
    }

    #[view(commitPeriodActive)]
    fn commit_period_active(&self, poll_id: u64) -> bool {
        require!(self.poll_exists(poll_id), ERR_POLL_NOT_FOUND);
        !self.is_expired(self.polls(poll_id).get().commit_end_date)
    }

    #[view(revealPeriodActive)]
    fn reveal_period_active(&self, poll_id: u64) -> bool {
        require!(self.poll_exists(poll_id), ERR_POLL_NOT_FOUND);
        let poll = self.polls(poll_id).get();
        !self.is_expired(poll.reveal_end_date) && self.is_expired(poll.commit_end_date)
    }

    #[view(pollEnded)]
    fn poll_ended(&self, poll_id: u64) -> bool {
        require!(self.poll_exists(poll_id), ERR_POLL_NOT_FOUND);
        self.is_expired(self.polls(poll_id).get().reveal_end_date)
    }

    /// Strictly more than `vote_quorum` percent of revealed tokens voted for.
    #[view(isPassed)]
    fn is_passed(&self, poll_id: u64) -> bool {
        require!(self.poll_ended(poll_id), ERR_POLL_NOT_ENDED);
        let poll = self.polls(poll_id).get();
        let total = &poll.votes_for + &poll.votes_against;
        &poll.votes_for * 100u64 > &total * poll.vote_quorum
    }

    #[view(getTotalNumberOfTokensForWinningOption)]
    fn get_total_number_of_tokens_for_winning_option(&self, poll_id: u64) -> BigUint {
        let passed = self.is_passed(poll_id);
        let poll = self.polls(poll_id).get();
        if passed {
            poll.votes_for
        } else {
            poll.votes_against
        }
    }

    /// Tokens `voter` revealed on the winning side of an ended poll.
    #[view(getNumPassingTokens)]
    fn get_num_passing_tokens(&self, voter: &ManagedAddress, poll_id: u64) -> BigUint {
        require!(self.poll_ended(poll_id), ERR_POLL_NOT_ENDED);
        require!(self.did_reveal(poll_id, voter).get(), ERR_NOT_REVEALED);

        let winning_choice = if self.is_passed(poll_id) { VOTE_FOR } else { 0 };
        let choice = self.vote_options(poll_id, voter).get();
        let on_winning_side = if winning_choice == VOTE_FOR {
            choice == VOTE_FOR
        } else {
            choice != VOTE_FOR
        };
        require!(on_winning_side, ERR_NOT_IN_MAJORITY);

        self.get_num_tokens(voter, poll_id)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getPoll)]
    fn get_poll(&self, poll_id: u64) -> Poll<Self::Api> {
        require!(self.poll_exists(poll_id), ERR_POLL_NOT_FOUND);
        self.polls(poll_id).get()
    }

    #[view(didCommit)]
    fn has_committed(&self, voter: &ManagedAddress, poll_id: u64) -> bool {
        require!(self.poll_exists(poll_id), ERR_POLL_NOT_FOUND);
        self.did_commit(poll_id, voter).get()
    }

    #[view(didReveal)]
    fn has_revealed(&self, voter: &ManagedAddress, poll_id: u64) -> bool {
        require!(self.poll_exists(poll_id), ERR_POLL_NOT_FOUND);
        self.did_reveal(poll_id, voter).get()
    }

    #[view(getVoteTokenBalance)]
    fn get_vote_token_balance(&self, voter: &ManagedAddress) -> BigUint {
        self.vote_token_balance(voter).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getPollNonce)]
    #[storage_mapper("pollNonce")]
    fn poll_nonce(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("polls")]
    fn polls(&self, poll_id: u64) -> SingleValueMapper<Poll<Self::Api>>;

    #[storage_mapper("didCommit")]
    fn did_commit(&self, poll_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("didReveal")]
    fn did_reveal(&self, poll_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("voteOptions")]
    fn vote_options(&self, poll_id: u64, voter: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("voteTokenBalance")]
    fn vote_token_balance(&self, voter: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
