use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ValidationError {
    DurationMustBeGreaterThanZero = 101,
    AuctionItemCannotBeEmpty = 102,
    EndTimeOverflow = 103,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionError {
    AuctionNotFound = 201,
    AuctionAlreadyEnded = 202,
    AuctionDeadlinePassed = 203,
    AuctionNotYetEnded = 204,
    BidMustBeGreaterThanZero = 205,
    BidNotHighEnough = 206,
    ReentrantCall = 207,
    AmountOverflow = 208,
}
