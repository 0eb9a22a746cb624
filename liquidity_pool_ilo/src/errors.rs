use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum IloError {
    RoundClosed = 301,
    FundRaisingNotOver = 302,
}

impl IloError {
    pub const fn message(&self) -> &'static str {
        match self {
            IloError::RoundClosed => "fund raising round is already finalized",
            IloError::FundRaisingNotOver => "fund raising time is not over or no deposit",
        }
    }
}
