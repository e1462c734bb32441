use crate::bid::record_bid;
use crate::checks::validate_auction_params;
use crate::errors::AuctionError;
use crate::event::{AuctionCreated, AuctionEnded, HighestBidIncreased, Withdrawn, AUCTION, CREATE};
use crate::guard::ReentrancyGuard;
use crate::traits::AuctionTrait;
use crate::{distribution, types::*};
use soroban_sdk::{contract, contractimpl, contracttype, log, Address, Env, String, Symbol};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 60 * DAY_IN_LEDGERS;
pub(crate) const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contract]
pub struct AuctionContract;

/// Enum representing keys used to store contract data in Soroban storage.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Auction,                // Key for the auction record
    PendingReturn(Address), // Key for the amount owed back to an outbid bidder
    Locked,                 // Key for the reentrancy flag
}

#[contractimpl]
impl AuctionContract {
    /// Opens the auction for `duration` seconds starting at the current ledger time.
    pub fn __constructor(env: Env, duration: u64, item: String, owner: Address, token: Address) {
        let end_time = validate_auction_params(&env, duration, &item);

        let auction = Auction {
            owner: owner.clone(),
            token: token.clone(),
            item: item.clone(),
            start_time: env.ledger().timestamp(),
            end_time,
            highest_bidder: None,
            highest_bid: 0,
            total_pending: 0,
            no_of_bids: 0,
            ended: false,
        };

        Self::_save_auction(&env, &auction);

        env.events().publish(
            (AUCTION, CREATE),
            AuctionCreated {
                owner,
                token,
                item,
                end_time,
            },
        );
    }
}

#[contractimpl]
impl AuctionTrait for AuctionContract {
    /// Places a bid, displacing the current leader into pending returns.
    fn bid(env: Env, bidder: Address, amount: i128) -> Result<(), AuctionError> {
        bidder.require_auth(); // Ensure bidder is authenticated

        let _guard = ReentrancyGuard::enter(&env)?;

        let mut auction_data = Self::_get_auction(&env)?;
        let now = env.ledger().timestamp();

        // Validate and apply the bid to the record
        let displaced = record_bid(&mut auction_data, now, bidder.clone(), amount)?;

        // The previous leader keeps a claim on the superseded escrow
        if let Some(prev) = displaced {
            let owed = Self::_get_pending_return(&env, &prev.bidder)
                .checked_add(prev.amount)
                .ok_or(AuctionError::AmountOverflow)?;
            Self::_set_pending_return(&env, &prev.bidder, owed);
        }

        Self::_save_auction(&env, &auction_data);

        // Pull the bid into escrow
        distribution::transfer_to_contract(&env, &auction_data.token, &bidder, &amount);

        log!(&env, "bid accepted: bidder={}, amount={}", bidder, amount);

        env.events().publish(
            (Symbol::new(&env, "highest_bid_increased"), bidder.clone()),
            HighestBidIncreased { bidder, amount },
        );

        Ok(())
    }

    /// Pays out the caller's pending return, if any.
    fn withdraw(env: Env, caller: Address) -> Result<bool, AuctionError> {
        caller.require_auth();

        let _guard = ReentrancyGuard::enter(&env)?;

        let amount = Self::_get_pending_return(&env, &caller);
        if amount == 0 {
            return Ok(false);
        }

        let mut auction_data = Self::_get_auction(&env)?;

        // Accounting is committed before the funds move
        auction_data.total_pending = auction_data
            .total_pending
            .checked_sub(amount)
            .ok_or(AuctionError::AmountOverflow)?;
        Self::_remove_pending_return(&env, &caller);
        Self::_save_auction(&env, &auction_data);

        if distribution::try_transfer_from_contract(&env, &auction_data.token, &caller, &amount) {
            log!(&env, "withdrawn: bidder={}, amount={}", caller, amount);

            env.events().publish(
                (Symbol::new(&env, "withdrawn"), caller.clone()),
                Withdrawn {
                    bidder: caller,
                    amount,
                },
            );

            return Ok(true);
        }

        // Transfer refused, the claim stays open
        auction_data.total_pending += amount;
        Self::_set_pending_return(&env, &caller, amount);
        Self::_save_auction(&env, &auction_data);

        log!(&env, "withdrawal failed: bidder={}, amount={}", caller, amount);

        env.events().publish(
            (Symbol::new(&env, "withdrawal_failed"), caller),
            amount,
        );

        Ok(false)
    }

    /// Finalizes the auction once its deadline has passed. Anyone may call it.
    fn end_auction(env: Env) -> Result<(), AuctionError> {
        let _guard = ReentrancyGuard::enter(&env)?;

        let mut auction_data = Self::_get_auction(&env)?;
        let now = env.ledger().timestamp();

        auction_data.check_can_end(now)?;

        // Flip the flag first so no path can pay out twice
        auction_data.ended = true;
        Self::_save_auction(&env, &auction_data);

        let amount = auction_data.highest_bid;
        if amount > 0
            && !distribution::try_transfer_from_contract(
                &env,
                &auction_data.token,
                &auction_data.owner,
                &amount,
            )
        {
            // Owner could not receive, leave the proceeds claimable through withdraw
            let owed = Self::_get_pending_return(&env, &auction_data.owner)
                .checked_add(amount)
                .ok_or(AuctionError::AmountOverflow)?;
            auction_data.total_pending = auction_data
                .total_pending
                .checked_add(amount)
                .ok_or(AuctionError::AmountOverflow)?;
            Self::_set_pending_return(&env, &auction_data.owner, owed);
            Self::_save_auction(&env, &auction_data);

            log!(&env, "payout deferred: owner={}, amount={}", auction_data.owner, amount);

            env.events().publish(
                (
                    Symbol::new(&env, "payout_deferred"),
                    auction_data.owner.clone(),
                ),
                amount,
            );
        }

        log!(&env, "auction ended: amount={}", amount);

        env.events().publish(
            (
                Symbol::new(&env, "auction_ended"),
                auction_data.highest_bidder.clone(),
            ),
            AuctionEnded {
                winner: auction_data.highest_bidder,
                amount,
                timestamp: now,
            },
        );

        Ok(())
    }

    fn owner(env: Env) -> Result<Address, AuctionError> {
        Ok(Self::_get_auction(&env)?.owner)
    }

    fn auction_item(env: Env) -> Result<String, AuctionError> {
        Ok(Self::_get_auction(&env)?.item)
    }

    fn auction_end_time(env: Env) -> Result<u64, AuctionError> {
        Ok(Self::_get_auction(&env)?.end_time)
    }

    fn highest_bidder(env: Env) -> Result<Option<Address>, AuctionError> {
        Ok(Self::_get_auction(&env)?.highest_bidder)
    }

    fn highest_bid(env: Env) -> Result<i128, AuctionError> {
        Ok(Self::_get_auction(&env)?.highest_bid)
    }

    fn ended(env: Env) -> Result<bool, AuctionError> {
        Ok(Self::_get_auction(&env)?.is_ended())
    }

    fn token(env: Env) -> Result<Address, AuctionError> {
        Ok(Self::_get_auction(&env)?.token)
    }

    fn pending_return(env: Env, bidder: Address) -> i128 {
        Self::_get_pending_return(&env, &bidder)
    }

    fn phase(env: Env) -> Result<AuctionPhase, AuctionError> {
        Ok(Self::_get_auction(&env)?.phase(env.ledger().timestamp()))
    }

    fn escrow_balance(env: Env) -> Result<i128, AuctionError> {
        Ok(Self::_get_auction(&env)?.escrow_balance())
    }

    fn get_auction(env: Env) -> Option<Auction> {
        env.storage().instance().get(&DataKey::Auction)
    }
}

impl AuctionContract {
    /// Internal helper to fetch the auction from storage.
    fn _get_auction(env: &Env) -> Result<Auction, AuctionError> {
        env.storage()
            .instance()
            .get(&DataKey::Auction)
            .ok_or(AuctionError::AuctionNotFound)
    }

    /// Internal helper to save the auction to storage.
    fn _save_auction(env: &Env, auction: &Auction) {
        env.storage().instance().set(&DataKey::Auction, auction);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    /// Internal helper to read what is owed to a bidder.
    fn _get_pending_return(env: &Env, bidder: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::PendingReturn(bidder.clone()))
            .unwrap_or(0) // Nothing owed if no entry exists
    }

    fn _set_pending_return(env: &Env, bidder: &Address, amount: i128) {
        let key = DataKey::PendingReturn(bidder.clone());
        env.storage().persistent().set(&key, &amount);
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    }

    fn _remove_pending_return(env: &Env, bidder: &Address) {
        env.storage()
            .persistent()
            .remove(&DataKey::PendingReturn(bidder.clone()));
    }
}
