multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_POSITION, ERR_PREV_NOT_FOUND, ERR_ZERO_POLL_ID};
use crate::types::LockNode;

/// Node id of the sentinel that closes every voter's list into a ring.
pub const SENTINEL: u64 = 0;

// ============================================================
// Per-voter lock list
//
// One node per poll the voter has an unrevealed commitment in, kept
// in ascending order of committed tokens. The tail therefore holds the
// largest amount locked at any one time.
// ============================================================

#[multiversx_sc::module]
pub trait LockListModule: crate::sealed_votes::SealedVotesModule {
    fn lock_node(&self, voter: &ManagedAddress, node_id: u64) -> LockNode {
        let mapper = self.lock_nodes(voter, node_id);
        if mapper.is_empty() {
            LockNode::default()
        } else {
            mapper.get()
        }
    }

    fn lock_list_contains(&self, voter: &ManagedAddress, node_id: u64) -> bool {
        node_id != SENTINEL && !self.lock_nodes(voter, node_id).is_empty()
    }

    fn lock_list_next(&self, voter: &ManagedAddress, node_id: u64) -> u64 {
        self.lock_node(voter, node_id).next
    }

    fn lock_list_prev(&self, voter: &ManagedAddress, node_id: u64) -> u64 {
        self.lock_node(voter, node_id).prev
    }

    /// True when a node holding `num_tokens` fits between `prev_id` and
    /// `next_id` without breaking the ordering.
    fn lock_position_is_valid(
        &self,
        voter: &ManagedAddress,
        prev_id: u64,
        next_id: u64,
        num_tokens: &BigUint,
    ) -> bool {
        let prev_valid = *num_tokens >= self.get_num_tokens(voter, prev_id);
        let next_valid = next_id == SENTINEL || *num_tokens <= self.get_num_tokens(voter, next_id);
        prev_valid && next_valid
    }

    /// Links `node_id` right after the voter-supplied `prev_id`. The amount
    /// for `node_id` must already be stored in the sealed vote record.
    fn lock_list_insert(&self, voter: &ManagedAddress, prev_id: u64, node_id: u64) {
        require!(node_id != SENTINEL, ERR_ZERO_POLL_ID);
        require!(prev_id != node_id, ERR_INVALID_POSITION);
        require!(
            prev_id == SENTINEL || self.lock_list_contains(voter, prev_id),
            ERR_PREV_NOT_FOUND
        );

        let mut next_id = self.lock_list_next(voter, prev_id);
        if next_id == node_id {
            // re-commit: the node is about to be unlinked and re-inserted
            next_id = self.lock_list_next(voter, node_id);
        }

        let num_tokens = self.get_num_tokens(voter, node_id);
        require!(
            self.lock_position_is_valid(voter, prev_id, next_id, &num_tokens),
            ERR_INVALID_POSITION
        );

        self.lock_list_remove(voter, node_id);
        require!(
            self.lock_list_next(voter, prev_id) == next_id
                && self.lock_list_prev(voter, next_id) == prev_id,
            ERR_INVALID_POSITION
        );

        self.lock_nodes(voter, node_id).set(LockNode {
            prev: prev_id,
            next: next_id,
        });
        let mut prev_node = self.lock_node(voter, prev_id);
        prev_node.next = node_id;
        self.lock_nodes(voter, prev_id).set(prev_node);
        let mut next_node = self.lock_node(voter, next_id);
        next_node.prev = node_id;
        self.lock_nodes(voter, next_id).set(next_node);
    }

    fn lock_list_remove(&self, voter: &ManagedAddress, node_id: u64) {
        if !self.lock_list_contains(voter, node_id) {
            return;
        }
        let node = self.lock_nodes(voter, node_id).take();

        let mut prev_node = self.lock_node(voter, node.prev);
        prev_node.next = node.next;
        self.lock_nodes(voter, node.prev).set(prev_node);

        let mut next_node = self.lock_node(voter, node.next);
        next_node.prev = node.prev;
        self.lock_nodes(voter, node.next).set(next_node);

        if node.prev == SENTINEL && node.next == SENTINEL {
            self.lock_nodes(voter, SENTINEL).clear();
        }
    }

    /// Poll id of the tail node, the one holding the largest amount.
    #[view(getLastNode)]
    fn get_last_node(&self, voter: &ManagedAddress) -> u64 {
        self.lock_list_prev(voter, SENTINEL)
    }

    #[view(getLockedTokens)]
    fn get_locked_tokens(&self, voter: &ManagedAddress) -> BigUint {
        let tail = self.get_last_node(voter);
        self.get_num_tokens(voter, tail)
    }

    /// Node a commitment of `num_tokens` to `poll_id` should be inserted
    /// after. Walks from the tail towards the head.
    #[view(getInsertPointForNumTokens)]
    fn get_insert_point_for_num_tokens(
        &self,
        voter: &ManagedAddress,
        num_tokens: BigUint,
        poll_id: u64,
    ) -> u64 {
        let mut node_id = self.get_last_node(voter);
        while node_id != SENTINEL {
            if self.get_num_tokens(voter, node_id) <= num_tokens {
                if node_id == poll_id {
                    node_id = self.lock_list_prev(voter, node_id);
                }
                return node_id;
            }
            node_id = self.lock_list_prev(voter, node_id);
        }
        node_id
    }

    /// Poll ids from head (smallest lock) to tail (largest lock).
    #[view(getLockList)]
    fn get_lock_list(&self, voter: &ManagedAddress) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        let mut node_id = self.lock_list_next(voter, SENTINEL);
        while node_id != SENTINEL {
            result.push(node_id);
            node_id = self.lock_list_next(voter, node_id);
        }
        result
    }

    #[storage_mapper("lockNodes")]
    fn lock_nodes(&self, voter: &ManagedAddress, node_id: u64) -> SingleValueMapper<LockNode>;
}
