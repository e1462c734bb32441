use crate::{errors::AuctionError, types::*};
use soroban_sdk::{Address, Env, String};

/// Interface for the Auction contract.
pub trait AuctionTrait {
    /// Place a bid, escrowing `amount` of the auction token from `bidder`.
    fn bid(env: Env, bidder: Address, amount: i128) -> Result<(), AuctionError>;

    /// Pay out everything owed to `caller` from being outbid.
    ///
    /// Returns `true` only when funds actually left the contract.
    fn withdraw(env: Env, caller: Address) -> Result<bool, AuctionError>;

    /// Close the auction after its deadline and release the winning bid to the owner.
    fn end_auction(env: Env) -> Result<(), AuctionError>;

    fn owner(env: Env) -> Result<Address, AuctionError>;

    fn auction_item(env: Env) -> Result<String, AuctionError>;

    fn auction_end_time(env: Env) -> Result<u64, AuctionError>;

    fn highest_bidder(env: Env) -> Result<Option<Address>, AuctionError>;

    fn highest_bid(env: Env) -> Result<i128, AuctionError>;

    fn ended(env: Env) -> Result<bool, AuctionError>;

    fn token(env: Env) -> Result<Address, AuctionError>;

    fn pending_return(env: Env, bidder: Address) -> i128;

    fn phase(env: Env) -> Result<AuctionPhase, AuctionError>;

    /// Amount of the auction token the contract is expected to hold right now.
    fn escrow_balance(env: Env) -> Result<i128, AuctionError>;

    fn get_auction(env: Env) -> Option<Auction>;
}
