//! Token transfer adapter used by every escrow variant.
//!
//! Every asset on Soroban, the native lumen included, sits behind the token
//! interface, so a single client covers what the original platform split
//! into native-value sends and token transfer-from calls. A failed transfer
//! panics in the host and rolls the invocation back, which keeps escrow
//! atomic: either funds move and the record is written, or neither happens.

use soroban_sdk::{token, Address, Env};

/// Pull `amount` from `from` into the contract's custody.
pub fn deposit(env: &Env, token_addr: &Address, from: &Address, amount: i128) {
    let client = token::Client::new(env, token_addr);
    client.transfer(from, &env.current_contract_address(), &amount);
}

/// Release `amount` from the contract's custody to `to`.
pub fn payout(env: &Env, token_addr: &Address, to: &Address, amount: i128) {
    let client = token::Client::new(env, token_addr);
    client.transfer(&env.current_contract_address(), to, &amount);
}

/// The contract's current balance of the asset.
pub fn balance(env: &Env, token_addr: &Address) -> i128 {
    let client = token::Client::new(env, token_addr);
    client.balance(&env.current_contract_address())
}
