//! Reentrancy guard shared by the escrow entry points that move funds.
//!
//! A boolean flag in instance storage detects re-entry through an external
//! call (a token transfer callback) before the first invocation completes.
//! On `panic!` or an `Err` return Soroban rolls back all state changes, so
//! the guard cannot get stuck in the locked position.

use soroban_sdk::{symbol_short, Env, Symbol};

const GUARD: Symbol = symbol_short!("reentry");

/// Acquire the reentrancy lock.
///
/// # Panics
/// Panics if the lock is already held.
pub fn acquire(env: &Env) {
    if env.storage().instance().has(&GUARD) {
        panic!("reentrancy detected");
    }
    env.storage().instance().set(&GUARD, &true);
}

/// Release the lock. Must run before returning from every protected
/// function on the success path.
pub fn release(env: &Env) {
    env.storage().instance().remove(&GUARD);
}
