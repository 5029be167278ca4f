use soroban_sdk::contracterror;

/// Error codes returned by both staking pools.
///
/// # Code ranges
/// | Range   | Purpose                         |
/// |---------|---------------------------------|
/// | 1 – 9   | Lifecycle / initialisation      |
/// | 10 – 19 | Access control                  |
/// | 20 – 29 | Input validation                |
/// | 30 – 39 | Stake lookup                    |
/// | 40 – 49 | Stake state conflicts           |
/// | 50 – 59 | Pool funding / arithmetic       |
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum StakeError {
    // ── Lifecycle (1–9) ──────────────────────────────────────
    NotInitialized = 1,
    AlreadyInitialized = 2,

    // ── Access control (10–19) ───────────────────────────────
    /// Funding operations are reserved for the pool owner.
    YouAreNotTheOwner = 10,
    /// The owner funds the pool and may never hold a stake in it.
    OwnerCannotStakeInContract = 11,

    // ── Validation (20–29) ───────────────────────────────────
    /// Amounts must be strictly positive.
    ZeroAmountNotAllowed = 20,
    MaximumStakingDurationExceeded = 21,
    MaximumNumberOfStakesForUserReached = 22,
    ZeroDurationNotAllowed = 23,
    InvalidRewardRate = 24,

    // ── Lookup (30–39) ───────────────────────────────────────
    /// Token pool: the index does not address one of the caller's stakes.
    UserHasNoStakes = 30,
    /// Native pool: the index does not address one of the caller's stakes.
    UserStakeDoesNotExist = 31,

    // ── Stake state (40–49) ──────────────────────────────────
    StakeAlreadyWithdrawn = 40,
    StakeTimeHasNotEnded = 41,

    // ── Funding / arithmetic (50–59) ─────────────────────────
    /// The pool cannot cover the payout of a matured stake.
    InsufficientPoolFunds = 50,
    ArithmeticOverflow = 51,
}
