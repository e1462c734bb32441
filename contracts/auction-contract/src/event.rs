use soroban_sdk::{contracttype, symbol_short, Address, String, Symbol};

// Symbol representing AUCTION events.
pub const AUCTION: Symbol = symbol_short!("auction");

// Symbol representing CREATE events.
pub const CREATE: Symbol = symbol_short!("create");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    pub owner: Address,
    pub token: Address,
    pub item: String,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HighestBidIncreased {
    pub bidder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub bidder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEnded {
    pub winner: Option<Address>,
    pub amount: i128,
    pub timestamp: u64,
}
