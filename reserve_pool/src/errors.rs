use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    AlreadyInitialized = 201,
    AlreadyConfigured = 202,
    InvariantViolation = 204,
    Reentrancy = 205,
}
