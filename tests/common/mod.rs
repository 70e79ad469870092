#![allow(dead_code)]

use multiversx_sc::types::{Address, ManagedByteArray};
use multiversx_sc_scenario::{
    api::DebugApi,
    managed_address, managed_biguint, managed_buffer, managed_token_id, rust_biguint,
    whitebox_legacy::{BlockchainStateWrapper, ContractObjWrapper, TxResult},
};
use token_curated_registry::{
    challenge::ChallengeModule,
    lock_list::LockListModule,
    parameterizer::ParameterizerModule,
    parameters::ParametersModule,
    registry::RegistryModule,
    types::{GovernanceParam, InitialParameters},
    voting::VotingModule,
    TokenCuratedRegistry,
};

pub const WASM_PATH: &str = "output/token-curated-registry.wasm";
pub const TOKEN_ID: &[u8] = b"TCR-123456";
pub const START: u64 = 1_000;
pub const INITIAL_BALANCE: u64 = 10_000;

pub const MIN_DEPOSIT: u64 = 500;
pub const P_MIN_DEPOSIT: u64 = 100;
pub const APPLY_STAGE_LEN: u64 = 600;
pub const P_APPLY_STAGE_LEN: u64 = 1_200;
pub const COMMIT_STAGE_LEN: u64 = 300;
pub const P_COMMIT_STAGE_LEN: u64 = 300;
pub const REVEAL_STAGE_LEN: u64 = 300;
pub const P_REVEAL_STAGE_LEN: u64 = 300;
pub const DISPENSATION_PCT: u64 = 50;
pub const P_DISPENSATION_PCT: u64 = 50;
pub const VOTE_QUORUM: u64 = 50;
pub const P_VOTE_QUORUM: u64 = 50;
pub const EXIT_TIME_DELAY: u64 = 100;
pub const EXIT_PERIOD_LEN: u64 = 200;

pub const FOR: u64 = 1;
pub const AGAINST: u64 = 0;

pub type RegistryObj = token_curated_registry::ContractObj<DebugApi>;

pub fn listing_hash(tag: u8) -> [u8; 32] {
    [tag; 32]
}

pub struct RegistrySetup<Builder>
where
    Builder: 'static + Copy + Fn() -> RegistryObj,
{
    pub b_mock: BlockchainStateWrapper,
    pub owner: Address,
    pub applicant: Address,
    pub challenger: Address,
    pub alice: Address,
    pub bob: Address,
    pub sc: ContractObjWrapper<RegistryObj, Builder>,
}

impl<Builder> RegistrySetup<Builder>
where
    Builder: 'static + Copy + Fn() -> RegistryObj,
{
    pub fn new(builder: Builder) -> Self {
        Self::with_quorum(builder, VOTE_QUORUM)
    }

    pub fn with_quorum(builder: Builder, vote_quorum: u64) -> Self {
        let rust_zero = rust_biguint!(0);
        let mut b_mock = BlockchainStateWrapper::new();
        let owner = b_mock.create_user_account(&rust_zero);
        let applicant = b_mock.create_user_account(&rust_zero);
        let challenger = b_mock.create_user_account(&rust_zero);
        let alice = b_mock.create_user_account(&rust_zero);
        let bob = b_mock.create_user_account(&rust_zero);
        let sc = b_mock.create_sc_account(&rust_zero, Some(&owner), builder, WASM_PATH);

        for user in [&applicant, &challenger, &alice, &bob] {
            b_mock.set_esdt_balance(user, TOKEN_ID, &rust_biguint!(INITIAL_BALANCE));
        }
        b_mock.set_block_timestamp(START);

        b_mock
            .execute_tx(&owner, &sc, &rust_zero, |sc| {
                sc.init(
                    managed_token_id!(TOKEN_ID),
                    InitialParameters {
                        min_deposit: managed_biguint!(MIN_DEPOSIT),
                        p_min_deposit: managed_biguint!(P_MIN_DEPOSIT),
                        apply_stage_len: APPLY_STAGE_LEN,
                        p_apply_stage_len: P_APPLY_STAGE_LEN,
                        commit_stage_len: COMMIT_STAGE_LEN,
                        p_commit_stage_len: P_COMMIT_STAGE_LEN,
                        reveal_stage_len: REVEAL_STAGE_LEN,
                        p_reveal_stage_len: P_REVEAL_STAGE_LEN,
                        dispensation_pct: DISPENSATION_PCT,
                        p_dispensation_pct: P_DISPENSATION_PCT,
                        vote_quorum,
                        p_vote_quorum: P_VOTE_QUORUM,
                        exit_time_delay: EXIT_TIME_DELAY,
                        exit_period_len: EXIT_PERIOD_LEN,
                    },
                );
            })
            .assert_ok();

        RegistrySetup {
            b_mock,
            owner,
            applicant,
            challenger,
            alice,
            bob,
            sc,
        }
    }

    pub fn set_time(&mut self, timestamp: u64) {
        self.b_mock.set_block_timestamp(timestamp);
    }

    pub fn check_balance(&self, address: &Address, amount: u64) {
        self.b_mock
            .check_esdt_balance(address, TOKEN_ID, &rust_biguint!(amount));
    }

    /// Tokens held by the contract itself.
    pub fn check_held(&self, amount: u64) {
        self.b_mock
            .check_esdt_balance(self.sc.address_ref(), TOKEN_ID, &rust_biguint!(amount));
    }

    // ── Registry ──

    pub fn apply(&mut self, applicant: &Address, tag: u8, amount: u64) -> TxResult {
        let hash = listing_hash(tag);
        self.b_mock.execute_esdt_transfer(
            applicant,
            &self.sc,
            TOKEN_ID,
            0,
            &rust_biguint!(amount),
            |sc| {
                sc.list(
                    ManagedByteArray::new_from_bytes(&hash),
                    managed_buffer!(b"ipfs://listing"),
                );
            },
        )
    }

    /// Challenges with exactly `minDeposit` attached, returns the poll id.
    pub fn challenge(&mut self, challenger: &Address, tag: u8) -> u64 {
        let (result, poll_id) = self.try_challenge(challenger, tag, MIN_DEPOSIT);
        result.assert_ok();
        poll_id
    }

    pub fn try_challenge(&mut self, challenger: &Address, tag: u8, stake: u64) -> (TxResult, u64) {
        let hash = listing_hash(tag);
        let mut poll_id = 0u64;
        let result = self.b_mock.execute_esdt_transfer(
            challenger,
            &self.sc,
            TOKEN_ID,
            0,
            &rust_biguint!(stake),
            |sc| {
                poll_id = sc.challenge(
                    ManagedByteArray::new_from_bytes(&hash),
                    managed_buffer!(b"evidence"),
                );
            },
        );
        (result, poll_id)
    }

    pub fn init_exit(&mut self, caller: &Address, tag: u8) -> TxResult {
        let hash = listing_hash(tag);
        self.b_mock
            .execute_tx(caller, &self.sc, &rust_biguint!(0), |sc| {
                sc.init_exit(ManagedByteArray::new_from_bytes(&hash));
            })
    }

    pub fn finalize_exit(&mut self, caller: &Address, tag: u8) -> TxResult {
        let hash = listing_hash(tag);
        self.b_mock
            .execute_tx(caller, &self.sc, &rust_biguint!(0), |sc| {
                sc.finalize_exit(ManagedByteArray::new_from_bytes(&hash));
            })
    }

    pub fn update_status(&mut self, tag: u8) -> TxResult {
        let hash = listing_hash(tag);
        let caller = self.owner.clone();
        self.b_mock
            .execute_tx(&caller, &self.sc, &rust_biguint!(0), |sc| {
                sc.update_status(ManagedByteArray::new_from_bytes(&hash));
            })
    }

    pub fn is_whitelisted(&mut self, tag: u8) -> bool {
        let hash = listing_hash(tag);
        let mut whitelisted = false;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                whitelisted = sc.is_whitelisted(&ManagedByteArray::new_from_bytes(&hash));
            })
            .assert_ok();
        whitelisted
    }

    pub fn app_was_made(&mut self, tag: u8) -> bool {
        let hash = listing_hash(tag);
        let mut exists = false;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                exists = sc.app_was_made(&ManagedByteArray::new_from_bytes(&hash));
            })
            .assert_ok();
        exists
    }

    pub fn challenge_exists(&mut self, tag: u8) -> bool {
        let hash = listing_hash(tag);
        let mut exists = false;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                exists = sc.challenge_exists(&ManagedByteArray::new_from_bytes(&hash));
            })
            .assert_ok();
        exists
    }

    pub fn unstaked_deposit(&mut self, tag: u8) -> u64 {
        let hash = listing_hash(tag);
        let mut deposit = 0u64;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                let listing = sc.get_listing(&ManagedByteArray::new_from_bytes(&hash));
                deposit = listing.unstaked_deposit.to_u64().unwrap();
            })
            .assert_ok();
        deposit
    }

    // ── Voting ──

    pub fn start_poll(&mut self, vote_quorum: u64) -> u64 {
        let caller = self.owner.clone();
        let mut poll_id = 0u64;
        self.b_mock
            .execute_tx(&caller, &self.sc, &rust_biguint!(0), |sc| {
                poll_id = sc.start_poll(vote_quorum, COMMIT_STAGE_LEN, REVEAL_STAGE_LEN);
            })
            .assert_ok();
        poll_id
    }

    pub fn request_voting_rights(&mut self, voter: &Address, amount: u64) -> TxResult {
        self.b_mock.execute_esdt_transfer(
            voter,
            &self.sc,
            TOKEN_ID,
            0,
            &rust_biguint!(amount),
            |sc| {
                sc.request_voting_rights();
            },
        )
    }

    /// Commits from existing voting rights, claiming `prev` as the node to
    /// insert after.
    pub fn commit_after(
        &mut self,
        voter: &Address,
        poll_id: u64,
        option: u64,
        salt: u64,
        amount: u64,
        prev: u64,
    ) -> TxResult {
        self.b_mock
            .execute_tx(voter, &self.sc, &rust_biguint!(0), |sc| {
                let secret = sc.compute_secret_hash(option, salt);
                sc.commit_vote(poll_id, secret, managed_biguint!(amount), prev);
            })
    }

    pub fn insert_point(&mut self, voter: &Address, amount: u64, poll_id: u64) -> u64 {
        let voter_address = voter.clone();
        let mut prev = 0u64;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                prev = sc.get_insert_point_for_num_tokens(
                    &managed_address!(&voter_address),
                    managed_biguint!(amount),
                    poll_id,
                );
            })
            .assert_ok();
        prev
    }

    pub fn locked_tokens(&mut self, voter: &Address) -> u64 {
        let voter_address = voter.clone();
        let mut locked = 0u64;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                locked = sc
                    .get_locked_tokens(&managed_address!(&voter_address))
                    .to_u64()
                    .unwrap();
            })
            .assert_ok();
        locked
    }

    /// Poll ids in the voter's lock list, smallest lock first.
    pub fn lock_list(&mut self, voter: &Address) -> Vec<u64> {
        let voter_address = voter.clone();
        let mut ids = Vec::new();
        self.b_mock
            .execute_query(&self.sc, |sc| {
                ids = sc
                    .get_lock_list(&managed_address!(&voter_address))
                    .into_iter()
                    .collect();
            })
            .assert_ok();
        ids
    }

    /// Commits `amount` tokens, attaching them as fresh voting rights, at
    /// the insert point the contract suggests.
    pub fn commit(&mut self, voter: &Address, poll_id: u64, option: u64, salt: u64, amount: u64) -> TxResult {
        let voter_address = voter.clone();
        self.b_mock.execute_esdt_transfer(
            voter,
            &self.sc,
            TOKEN_ID,
            0,
            &rust_biguint!(amount),
            |sc| {
                let secret = sc.compute_secret_hash(option, salt);
                let prev = sc.get_insert_point_for_num_tokens(
                    &managed_address!(&voter_address),
                    managed_biguint!(amount),
                    poll_id,
                );
                sc.commit_vote(poll_id, secret, managed_biguint!(amount), prev);
            },
        )
    }

    pub fn reveal(&mut self, voter: &Address, poll_id: u64, option: u64, salt: u64) -> TxResult {
        self.b_mock
            .execute_tx(voter, &self.sc, &rust_biguint!(0), |sc| {
                sc.reveal_vote(poll_id, option, salt);
            })
    }

    pub fn claim_reward(&mut self, voter: &Address, poll_id: u64) -> TxResult {
        self.b_mock
            .execute_tx(voter, &self.sc, &rust_biguint!(0), |sc| {
                sc.claim_reward(poll_id);
            })
    }

    pub fn rescue_tokens(&mut self, voter: &Address, poll_id: u64) -> TxResult {
        self.b_mock
            .execute_tx(voter, &self.sc, &rust_biguint!(0), |sc| {
                sc.rescue_tokens(poll_id);
            })
    }

    pub fn withdraw_voting_rights(&mut self, voter: &Address, amount: u64) -> TxResult {
        self.b_mock
            .execute_tx(voter, &self.sc, &rust_biguint!(0), |sc| {
                sc.withdraw_voting_rights(managed_biguint!(amount));
            })
    }

    // ── Parameterizer ──

    pub fn propose(
        &mut self,
        proposer: &Address,
        name: GovernanceParam,
        value: u64,
        deposit: u64,
    ) -> (TxResult, [u8; 32]) {
        let mut proposal_id = [0u8; 32];
        let result = self.b_mock.execute_esdt_transfer(
            proposer,
            &self.sc,
            TOKEN_ID,
            0,
            &rust_biguint!(deposit),
            |sc| {
                proposal_id = sc
                    .propose_reparameterization(name, managed_biguint!(value))
                    .to_byte_array();
            },
        );
        (result, proposal_id)
    }

    pub fn challenge_proposal(
        &mut self,
        challenger: &Address,
        proposal_id: &[u8; 32],
        stake: u64,
    ) -> (TxResult, u64) {
        let mut poll_id = 0u64;
        let result = self.b_mock.execute_esdt_transfer(
            challenger,
            &self.sc,
            TOKEN_ID,
            0,
            &rust_biguint!(stake),
            |sc| {
                poll_id = sc.challenge_reparameterization(ManagedByteArray::new_from_bytes(proposal_id));
            },
        );
        (result, poll_id)
    }

    pub fn process_proposal(&mut self, proposal_id: &[u8; 32]) -> TxResult {
        let caller = self.owner.clone();
        self.b_mock
            .execute_tx(&caller, &self.sc, &rust_biguint!(0), |sc| {
                sc.process_proposal(ManagedByteArray::new_from_bytes(proposal_id));
            })
    }

    pub fn param(&mut self, name: GovernanceParam) -> u64 {
        let mut value = 0u64;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                value = sc.get_parameter(name).to_u64().unwrap();
            })
            .assert_ok();
        value
    }

    pub fn prop_exists(&mut self, proposal_id: &[u8; 32]) -> bool {
        let mut exists = false;
        self.b_mock
            .execute_query(&self.sc, |sc| {
                exists = sc.prop_exists(&ManagedByteArray::new_from_bytes(proposal_id));
            })
            .assert_ok();
        exists
    }
}
