#![no_std]

multiversx_sc::imports!();

pub mod challenge;
pub mod errors;
pub mod events;
pub mod lock_list;
pub mod parameterizer;
pub mod parameters;
pub mod registry;
pub mod sealed_votes;
pub mod token;
pub mod types;
pub mod voting;

use errors::ERR_INVALID_TOKEN;
use types::InitialParameters;

// ============================================================
// Contract
//
// Token curated registry: listings enter by stake, are challenged by
// counter-stake and kept or removed by a commit-reveal token vote. The
// registry's own parameters change through the same mechanism.
// ============================================================

#[multiversx_sc::contract]
pub trait TokenCuratedRegistry:
    token::TokenModule
    + events::EventsModule
    + parameters::ParametersModule
    + sealed_votes::SealedVotesModule
    + lock_list::LockListModule
    + voting::VotingModule
    + challenge::ChallengeModule
    + registry::RegistryModule
    + parameterizer::ParameterizerModule
{
    #[init]
    fn init(&self, voting_token: TokenIdentifier, parameters: InitialParameters<Self::Api>) {
        require!(voting_token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        self.voting_token().set(&voting_token);
        self.init_parameters(parameters);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
