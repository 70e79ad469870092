multiversx_sc::imports!();

use crate::errors::{ERR_PARAM_NOT_U64, ERR_PERCENTAGE_OVER_100};
use crate::types::{GovernanceParam, InitialParameters};

/// Table of governance-tunable constants, read by the registry and the
/// parameterizer and written only by accepted proposals.
#[multiversx_sc::module]
pub trait ParametersModule {
    fn init_parameters(&self, params: InitialParameters<Self::Api>) {
        self.set_parameter(GovernanceParam::MinDeposit, &params.min_deposit);
        self.set_parameter(GovernanceParam::PMinDeposit, &params.p_min_deposit);

        let durations_and_pcts = [
            (GovernanceParam::ApplyStageLen, params.apply_stage_len),
            (GovernanceParam::PApplyStageLen, params.p_apply_stage_len),
            (GovernanceParam::CommitStageLen, params.commit_stage_len),
            (GovernanceParam::PCommitStageLen, params.p_commit_stage_len),
            (GovernanceParam::RevealStageLen, params.reveal_stage_len),
            (GovernanceParam::PRevealStageLen, params.p_reveal_stage_len),
            (GovernanceParam::DispensationPct, params.dispensation_pct),
            (GovernanceParam::PDispensationPct, params.p_dispensation_pct),
            (GovernanceParam::VoteQuorum, params.vote_quorum),
            (GovernanceParam::PVoteQuorum, params.p_vote_quorum),
            (GovernanceParam::ExitTimeDelay, params.exit_time_delay),
            (GovernanceParam::ExitPeriodLen, params.exit_period_len),
        ];
        for (name, value) in durations_and_pcts {
            self.set_parameter(name, &BigUint::from(value));
        }
    }

    fn set_parameter(&self, name: GovernanceParam, value: &BigUint) {
        if name.is_percentage() {
            require!(*value <= 100u64, ERR_PERCENTAGE_OVER_100);
        }
        self.parameter(name).set(value);
    }

    fn param_amount(&self, name: GovernanceParam) -> BigUint {
        self.parameter(name).get()
    }

    /// Durations and percentages.
    fn param_u64(&self, name: GovernanceParam) -> u64 {
        match self.parameter(name).get().to_u64() {
            Some(value) => value,
            None => sc_panic!(ERR_PARAM_NOT_U64),
        }
    }

    #[view(get)]
    fn get_parameter(&self, name: GovernanceParam) -> BigUint {
        self.parameter(name).get()
    }

    #[storage_mapper("parameter")]
    fn parameter(&self, name: GovernanceParam) -> SingleValueMapper<BigUint>;
}
