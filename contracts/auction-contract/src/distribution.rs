use soroban_sdk::{token, Address, Env};

// Transfer tokens to contract
pub fn transfer_to_contract(env: &Env, token: &Address, from: &Address, amount: &i128) {
    token::Client::new(env, token).transfer(from, &env.current_contract_address(), amount);
}

/// Transfer tokens out of the contract without aborting the invocation.
///
/// A failing token call is rolled back by the host on its own; the caller
/// decides what to do with the amount that stayed behind.
pub fn try_transfer_from_contract(env: &Env, token: &Address, to: &Address, amount: &i128) -> bool {
    matches!(
        token::Client::new(env, token).try_transfer(&env.current_contract_address(), to, amount),
        Ok(Ok(()))
    )
}
