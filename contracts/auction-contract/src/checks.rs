use soroban_sdk::{panic_with_error, Env, String};

use crate::{
    errors::{AuctionError, ValidationError},
    types::*,
};

/// Validates constructor input and returns the absolute end time.
pub fn validate_auction_params(env: &Env, duration: u64, item: &String) -> u64 {
    // Ensure the auction runs for some amount of time
    if duration == 0 {
        panic_with_error!(&env, ValidationError::DurationMustBeGreaterThanZero)
    }

    // Ensure the auction item is described
    if item.is_empty() {
        panic_with_error!(&env, ValidationError::AuctionItemCannotBeEmpty)
    }

    match env.ledger().timestamp().checked_add(duration) {
        Some(end_time) => end_time,
        None => panic_with_error!(&env, ValidationError::EndTimeOverflow),
    }
}

impl Auction {
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn phase(&self, now: u64) -> AuctionPhase {
        if self.ended {
            AuctionPhase::Finalized
        } else if now >= self.end_time {
            AuctionPhase::Expired
        } else {
            AuctionPhase::Open
        }
    }

    pub fn check_can_bid(&self, now: u64, amount: i128) -> Result<(), AuctionError> {
        // Finalization wins over the deadline check
        if self.ended {
            return Err(AuctionError::AuctionAlreadyEnded);
        }

        if now >= self.end_time {
            return Err(AuctionError::AuctionDeadlinePassed);
        }

        if amount <= 0 {
            return Err(AuctionError::BidMustBeGreaterThanZero);
        }

        // Ties never take the lead
        if amount <= self.highest_bid {
            return Err(AuctionError::BidNotHighEnough);
        }

        Ok(())
    }

    pub fn check_can_end(&self, now: u64) -> Result<(), AuctionError> {
        if self.ended {
            return Err(AuctionError::AuctionAlreadyEnded);
        }

        if now < self.end_time {
            return Err(AuctionError::AuctionNotYetEnded);
        }

        Ok(())
    }

    /// Amount the contract must hold to cover every claim on it.
    pub fn escrow_balance(&self) -> i128 {
        if self.ended {
            self.total_pending
        } else {
            self.highest_bid + self.total_pending
        }
    }
}
