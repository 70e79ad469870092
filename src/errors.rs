// ── Validation ──

pub const ERR_WRONG_TOKEN: &str = "Payment must be in the voting token";
pub const ERR_WRONG_STAKE: &str = "Payment must equal the required stake";
pub const ERR_ZERO_AMOUNT: &str = "Amount must be greater than zero";
pub const ERR_BELOW_MIN_DEPOSIT: &str = "Deposit below minimum";
pub const ERR_PERCENTAGE_OVER_100: &str = "Percentage cannot exceed 100";
pub const ERR_PARAM_NOT_U64: &str = "Parameter does not fit in u64";
pub const ERR_NO_CHANGE: &str = "Proposed value equals current value";
pub const ERR_ZERO_POLL_ID: &str = "Poll id cannot be zero";
pub const ERR_EMPTY_SECRET: &str = "Secret hash cannot be zero";
pub const ERR_INVALID_POSITION: &str = "Invalid lock list position";
pub const ERR_PREV_NOT_FOUND: &str = "Previous poll is not in the lock list";
pub const ERR_HASH_MISMATCH: &str = "Vote does not match commitment";
pub const ERR_NOT_OWNER: &str = "Only the listing owner can do this";
pub const ERR_REWARD_POOL_UNDERFLOW: &str = "Reward pool cannot be funded from the stake";
pub const ERR_INVALID_TOKEN: &str = "Invalid voting token identifier";

// ── State / ordering ──

pub const ERR_POLL_NOT_FOUND: &str = "Poll does not exist";
pub const ERR_COMMIT_CLOSED: &str = "Commit period is not active";
pub const ERR_REVEAL_CLOSED: &str = "Reveal period is not active";
pub const ERR_POLL_NOT_ENDED: &str = "Poll has not ended";
pub const ERR_NOT_COMMITTED: &str = "No vote committed for this poll";
pub const ERR_ALREADY_REVEALED: &str = "Vote already revealed";
pub const ERR_NOT_REVEALED: &str = "Vote was not revealed";
pub const ERR_NOT_IN_MAJORITY: &str = "Voter revealed, but not in the majority";
pub const ERR_INSUFFICIENT_VOTING_RIGHTS: &str = "Insufficient voting rights";
pub const ERR_TOKENS_LOCKED: &str = "Tokens are locked in open polls";
pub const ERR_NOT_LOCKED: &str = "No locked tokens for this poll";
pub const ERR_ALREADY_LISTED: &str = "Listing is already whitelisted";
pub const ERR_ALREADY_APPLIED: &str = "Application already made";
pub const ERR_LISTING_NOT_FOUND: &str = "Listing does not exist";
pub const ERR_NOT_WHITELISTED: &str = "Listing is not whitelisted";
pub const ERR_CHALLENGE_OPEN: &str = "Listing has an unresolved challenge";
pub const ERR_CHALLENGE_NOT_FOUND: &str = "Challenge does not exist";
pub const ERR_CHALLENGE_RESOLVED: &str = "Challenge already resolved";
pub const ERR_CHALLENGE_NOT_RESOLVED: &str = "Challenge is not resolved";
pub const ERR_ALREADY_CLAIMED: &str = "Reward already claimed";
pub const ERR_INSUFFICIENT_DEPOSIT: &str = "Withdrawal exceeds unstaked deposit";
pub const ERR_CANNOT_UPDATE: &str = "Listing status cannot be updated";
pub const ERR_EXIT_PENDING: &str = "Exit already initialized";
pub const ERR_EXIT_NOT_INITIALIZED: &str = "Exit was not initialized";
pub const ERR_EXIT_WINDOW: &str = "Outside of the exit window";
pub const ERR_PROPOSAL_EXISTS: &str = "Proposal already exists";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";
pub const ERR_PROPOSAL_CHALLENGED: &str = "Proposal already challenged";
pub const ERR_CANNOT_PROCESS: &str = "Proposal cannot be processed yet";
