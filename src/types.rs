multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// 32-byte identifier used for listing hashes, proposal ids and sealed votes.
pub type Hash32<M> = ManagedByteArray<M, 32>;

// ============================================================
// Governance parameters
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GovernanceParam {
    MinDeposit,
    PMinDeposit,
    ApplyStageLen,
    PApplyStageLen,
    CommitStageLen,
    PCommitStageLen,
    RevealStageLen,
    PRevealStageLen,
    DispensationPct,
    PDispensationPct,
    VoteQuorum,
    PVoteQuorum,
    ExitTimeDelay,
    ExitPeriodLen,
}

impl GovernanceParam {
    /// Parameters whose value is a percentage and may never exceed 100.
    pub fn is_percentage(self) -> bool {
        matches!(
            self,
            GovernanceParam::DispensationPct
                | GovernanceParam::PDispensationPct
                | GovernanceParam::VoteQuorum
                | GovernanceParam::PVoteQuorum
        )
    }

    /// Token amounts; every other parameter is read back as a `u64`.
    pub fn is_amount(self) -> bool {
        matches!(self, GovernanceParam::MinDeposit | GovernanceParam::PMinDeposit)
    }

    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

/// Deploy-time values for every governance parameter.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct InitialParameters<M: ManagedTypeApi> {
    pub min_deposit: BigUint<M>,
    pub p_min_deposit: BigUint<M>,
    pub apply_stage_len: u64,
    pub p_apply_stage_len: u64,
    pub commit_stage_len: u64,
    pub p_commit_stage_len: u64,
    pub reveal_stage_len: u64,
    pub p_reveal_stage_len: u64,
    pub dispensation_pct: u64,
    pub p_dispensation_pct: u64,
    pub vote_quorum: u64,
    pub p_vote_quorum: u64,
    pub exit_time_delay: u64,
    pub exit_period_len: u64,
}

// ============================================================
// Voting engine records
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Poll<M: ManagedTypeApi> {
    pub commit_end_date: u64,
    pub reveal_end_date: u64,
    /// Percentage of revealed tokens that must vote "for".
    pub vote_quorum: u64,
    pub votes_for: BigUint<M>,
    pub votes_against: BigUint<M>,
}

/// Sealed ballot for one (voter, poll): written at commit, read at reveal.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct SealedVote<M: ManagedTypeApi> {
    pub commit_hash: Hash32<M>,
    pub num_tokens: BigUint<M>,
}

/// Link record in a voter's lock list. Poll id 0 is the list sentinel:
/// its `next` is the head and its `prev` is the tail.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug, Default)]
pub struct LockNode {
    pub prev: u64,
    pub next: u64,
}

// ============================================================
// Registry records
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Listing<M: ManagedTypeApi> {
    pub application_expiry: u64,
    pub whitelisted: bool,
    pub owner: ManagedAddress<M>,
    pub unstaked_deposit: BigUint<M>,
    /// Poll id of the latest challenge, 0 if never challenged.
    pub challenge_id: u64,
    pub exit_time: u64,
    pub exit_time_expiry: u64,
}

// ============================================================
// Challenges
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ChallengeKind {
    Listing,
    Parameter,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Challenge<M: ManagedTypeApi> {
    pub kind: ChallengeKind,
    pub challenger: ManagedAddress<M>,
    /// Tokens left to pay out to voters on the winning side.
    pub reward_pool: BigUint<M>,
    pub stake: BigUint<M>,
    pub resolved: bool,
    /// Winning-side tokens that have not claimed yet.
    pub total_tokens: BigUint<M>,
}

// ============================================================
// Parameterizer records
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ParamProposal<M: ManagedTypeApi> {
    pub app_expiry: u64,
    pub challenge_id: u64,
    pub deposit: BigUint<M>,
    pub name: GovernanceParam,
    pub owner: ManagedAddress<M>,
    pub process_by: u64,
    pub value: BigUint<M>,
}
