multiversx_sc::imports!();

use crate::errors::{ERR_WRONG_STAKE, ERR_WRONG_TOKEN};

/// Bridge to the token ledger: the configured ESDT is the only token the
/// contract accepts as stake and pays out as rewards.
#[multiversx_sc::module]
pub trait TokenModule {
    /// Amount of voting token attached to the current call, 0 when nothing
    /// was sent. Any other token aborts the call.
    fn received_tokens(&self) -> BigUint {
        let (token_id, amount) = self.call_value().egld_or_single_fungible_esdt();
        if amount == 0u64 {
            return amount;
        }
        require!(
            token_id == EgldOrEsdtTokenIdentifier::esdt(self.voting_token().get()),
            ERR_WRONG_TOKEN
        );
        amount
    }

    /// Pulls exactly `expected` tokens from the caller.
    fn receive_exact(&self, expected: &BigUint) {
        let amount = self.received_tokens();
        require!(&amount == expected, ERR_WRONG_STAKE);
    }

    /// Pays out `amount` tokens. Must be the last step of an endpoint.
    fn send_tokens(&self, to: &ManagedAddress, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }
        let token_id = self.voting_token().get();
        self.send().direct_esdt(to, &token_id, 0, amount);
    }

    #[view(getVotingToken)]
    #[storage_mapper("votingToken")]
    fn voting_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// Contract's own balance on the ledger: every stake, deposit, pool and
    /// voting right it currently holds.
    #[view(getHeldTokens)]
    fn get_held_tokens(&self) -> BigUint {
        let token_id = self.voting_token().get();
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token_id), 0)
    }
}
