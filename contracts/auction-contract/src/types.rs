use soroban_sdk::{contracttype, Address, String};

/// The single auction held by a deployed contract.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Auction {
    pub owner: Address,
    pub token: Address,
    pub item: String,
    pub start_time: u64,
    pub end_time: u64,
    pub highest_bidder: Option<Address>,
    pub highest_bid: i128,
    pub total_pending: i128, // Sum of every pending return entry
    pub no_of_bids: u32,
    pub ended: bool,
}

#[contracttype]
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum AuctionPhase {
    Open,      // Accepting bids
    Expired,   // Deadline passed, waiting for end_auction
    Finalized, // Winning bid released to the owner
}
