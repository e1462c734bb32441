use soroban_sdk::Address;

use crate::{errors::AuctionError, types::*};

/// Escrow displaced by a new leading bid, owed back to its bidder.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Displaced {
    pub bidder: Address,
    pub amount: i128,
}

/// Applies an accepted bid to the auction record.
///
/// No storage or token access happens here: the caller credits the returned
/// [`Displaced`] leader and moves the funds.
pub fn record_bid(
    auction_data: &mut Auction,
    now: u64,
    new_bidder: Address,
    new_bid_amount: i128,
) -> Result<Option<Displaced>, AuctionError> {
    auction_data.check_can_bid(now, new_bid_amount)?;

    let displaced = auction_data
        .highest_bidder
        .as_ref()
        .map(|prev_bidder| Displaced {
            bidder: prev_bidder.clone(),
            amount: auction_data.highest_bid,
        });

    if let Some(prev) = &displaced {
        auction_data.total_pending = auction_data
            .total_pending
            .checked_add(prev.amount)
            .ok_or(AuctionError::AmountOverflow)?;
    }

    auction_data.highest_bidder = Some(new_bidder);
    auction_data.highest_bid = new_bid_amount;
    auction_data.no_of_bids += 1;

    Ok(displaced)
}
