multiversx_sc::imports!();

use crate::challenge::RewardPoolRule;
use crate::errors::*;
use crate::types::{ChallengeKind, GovernanceParam, Hash32, ParamProposal};

/// Grace period after a proposal's challenge window during which it can
/// still be processed: one week.
pub const PROCESS_BY: u64 = 604_800;

// ============================================================
// Parameterizer — staked proposals to change governance parameters
// ============================================================

#[multiversx_sc::module]
pub trait ParameterizerModule:
    crate::token::TokenModule
    + crate::events::EventsModule
    + crate::parameters::ParametersModule
    + crate::sealed_votes::SealedVotesModule
    + crate::lock_list::LockListModule
    + crate::voting::VotingModule
    + crate::challenge::ChallengeModule
{
    // ========================================================
    // ENDPOINT: proposeReparameterization
    // Stakes `pMinDeposit` behind a new value for `name`.
    // ========================================================

    #[payable("*")]
    #[endpoint(proposeReparameterization)]
    fn propose_reparameterization(&self, name: GovernanceParam, value: BigUint) -> Hash32<Self::Api> {
        let proposer = self.blockchain().get_caller();
        let deposit = self.param_amount(GovernanceParam::PMinDeposit);
        let proposal_id = self.get_proposal_id(name, &value);

        if name.is_percentage() {
            require!(value <= 100u64, ERR_PERCENTAGE_OVER_100);
        }
        require!(name.is_amount() || value.to_u64().is_some(), ERR_PARAM_NOT_U64);
        require!(!self.prop_exists(&proposal_id), ERR_PROPOSAL_EXISTS);
        require!(self.get_parameter(name) != value, ERR_NO_CHANGE);
        self.receive_exact(&deposit);

        let now = self.blockchain().get_block_timestamp();
        let app_expiry = now + self.param_u64(GovernanceParam::PApplyStageLen);
        let process_by = app_expiry
            + self.param_u64(GovernanceParam::PCommitStageLen)
            + self.param_u64(GovernanceParam::PRevealStageLen)
            + PROCESS_BY;

        self.proposals(&proposal_id).set(ParamProposal {
            app_expiry,
            challenge_id: 0,
            deposit: deposit.clone(),
            name,
            owner: proposer.clone(),
            process_by,
            value: value.clone(),
        });

        self.reparameterization_proposal_event(
            name,
            &value,
            &proposal_id,
            &deposit,
            app_expiry,
            &proposer,
        );

        proposal_id
    }

    // ========================================================
    // ENDPOINT: challengeReparameterization
    // Matches the proposal deposit and opens a poll.
    // ========================================================

    #[payable("*")]
    #[endpoint(challengeReparameterization)]
    fn challenge_reparameterization(&self, proposal_id: Hash32<Self::Api>) -> u64 {
        let challenger = self.blockchain().get_caller();

        require!(self.prop_exists(&proposal_id), ERR_PROPOSAL_NOT_FOUND);
        let mut proposal = self.proposals(&proposal_id).get();
        require!(proposal.challenge_id == 0, ERR_PROPOSAL_CHALLENGED);
        self.receive_exact(&proposal.deposit);

        let poll_id = self.open_challenge(
            ChallengeKind::Parameter,
            &challenger,
            &proposal.deposit,
            self.param_u64(GovernanceParam::PDispensationPct),
            RewardPoolRule::HundredLessDispensed,
            self.param_u64(GovernanceParam::PVoteQuorum),
            self.param_u64(GovernanceParam::PCommitStageLen),
            self.param_u64(GovernanceParam::PRevealStageLen),
        );

        proposal.challenge_id = poll_id;
        self.proposals(&proposal_id).set(&proposal);

        let poll = self.polls(poll_id).get();
        self.new_challenge_event(
            &proposal_id,
            poll_id,
            poll.commit_end_date,
            poll.reveal_end_date,
            &challenger,
        );

        poll_id
    }

    // ========================================================
    // ENDPOINT: processProposal
    // Applies an unchallenged proposal, resolves an ended challenge,
    // or discards a proposal left unprocessed past its deadline.
    // ========================================================

    #[endpoint(processProposal)]
    fn process_proposal(&self, proposal_id: Hash32<Self::Api>) {
        require!(self.prop_exists(&proposal_id), ERR_PROPOSAL_NOT_FOUND);
        let proposal = self.proposals(&proposal_id).get();

        if self.can_be_set(&proposal_id) {
            self.proposals(&proposal_id).clear();
            self.set_parameter(proposal.name, &proposal.value);
            self.proposal_accepted_event(&proposal_id, proposal.name, &proposal.value);

            self.send_tokens(&proposal.owner, &proposal.deposit);
        } else if self.proposal_challenge_can_be_resolved(&proposal_id) {
            self.resolve_proposal_challenge(&proposal_id, proposal);
        } else if self.blockchain().get_block_timestamp() > proposal.process_by {
            self.proposals(&proposal_id).clear();
            self.proposal_expired_event(&proposal_id);

            self.send_tokens(&proposal.owner, &proposal.deposit);
        } else {
            sc_panic!(ERR_CANNOT_PROCESS);
        }
    }

    fn resolve_proposal_challenge(
        &self,
        proposal_id: &Hash32<Self::Api>,
        proposal: ParamProposal<Self::Api>,
    ) {
        let poll_id = proposal.challenge_id;
        let verdict = self.settle_challenge(poll_id);
        self.proposals(proposal_id).clear();

        if verdict.passed {
            if proposal.process_by > self.blockchain().get_block_timestamp() {
                self.set_parameter(proposal.name, &proposal.value);
                self.proposal_accepted_event(proposal_id, proposal.name, &proposal.value);
            }
            self.proposal_challenge_failed_event(
                proposal_id,
                poll_id,
                &verdict.reward_pool,
                &verdict.total_tokens,
            );

            self.send_tokens(&proposal.owner, &verdict.reward);
        } else {
            self.proposal_challenge_succeeded_event(
                proposal_id,
                poll_id,
                &verdict.reward_pool,
                &verdict.total_tokens,
            );

            self.send_tokens(&verdict.challenger, &verdict.reward);
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// keccak256 of the parameter's discriminant byte followed by the
    /// big-endian value.
    #[view(getProposalId)]
    fn get_proposal_id(&self, name: GovernanceParam, value: &BigUint) -> Hash32<Self::Api> {
        let mut preimage = ManagedBuffer::new_from_bytes(&[name.as_byte()]);
        preimage.append(&value.to_bytes_be_buffer());
        self.crypto().keccak256(&preimage)
    }

    #[view(propExists)]
    fn prop_exists(&self, proposal_id: &Hash32<Self::Api>) -> bool {
        !self.proposals(proposal_id).is_empty()
    }

    #[view(canBeSet)]
    fn can_be_set(&self, proposal_id: &Hash32<Self::Api>) -> bool {
        if !self.prop_exists(proposal_id) {
            return false;
        }
        let proposal = self.proposals(proposal_id).get();
        let now = self.blockchain().get_block_timestamp();
        now > proposal.app_expiry && now < proposal.process_by && proposal.challenge_id == 0
    }

    #[view(proposalChallengeCanBeResolved)]
    fn proposal_challenge_can_be_resolved(&self, proposal_id: &Hash32<Self::Api>) -> bool {
        if !self.prop_exists(proposal_id) {
            return false;
        }
        let challenge_id = self.proposals(proposal_id).get().challenge_id;
        challenge_id > 0
            && self.challenge_is_unresolved(challenge_id)
            && self.poll_ended(challenge_id)
    }

    #[view(challengeWinnerReward)]
    fn challenge_winner_reward(&self, poll_id: u64) -> BigUint {
        self.winner_reward(poll_id)
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: &Hash32<Self::Api>) -> ParamProposal<Self::Api> {
        require!(self.prop_exists(proposal_id), ERR_PROPOSAL_NOT_FOUND);
        self.proposals(proposal_id).get()
    }

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: &Hash32<Self::Api>) -> SingleValueMapper<ParamProposal<Self::Api>>;
}
