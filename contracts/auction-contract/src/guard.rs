use soroban_sdk::Env;

use crate::{auction::DataKey, errors::AuctionError};

/// Holds the contract-wide lock for the duration of one mutating call.
///
/// The flag lives in instance storage and is cleared when the guard drops, so
/// every early return releases it as well.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn enter(env: &'a Env) -> Result<Self, AuctionError> {
        let locked: bool = env
            .storage()
            .instance()
            .get(&DataKey::Locked)
            .unwrap_or(false);

        if locked {
            return Err(AuctionError::ReentrantCall);
        }

        env.storage().instance().set(&DataKey::Locked, &true);

        Ok(ReentrancyGuard { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&DataKey::Locked);
    }
}
