#![no_std]
//! # Bounty Escrow v2 (native asset only)
//!
//! Second-generation escrow. Same bounty state machine as v1
//! (`NonExistent -> Created -> Paid`, terminal) with the asset dimension
//! removed: every bounty is denominated in the native asset configured at
//! init. The v1 -> v2 migrator funds recreated bounties through the regular
//! `create_bounty` path, so migrated records are indistinguishable from
//! fresh ones apart from their creator being the migrator.
//!
//! Security model is unchanged from v1: creator-gated payout, owner-gated
//! withdrawal against the aggregate balance, state written before outbound
//! transfers, reentrancy guard on every fund-moving entry point.

mod events;

use bounty_common::{bounty_id, ownable, reentrancy_guard, transfer};
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, BytesN, Env};

use events::{emit_bounty_created, emit_bounty_paid, BountyCreated, BountyPaid};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    BountyAmountZero = 3,
    BountyNotFound = 4,
    BountyAlreadyPaid = 5,
    NotCreator = 6,
    NotOwner = 7,
    InsufficientBalance = 8,
    InvalidAmount = 9,
}

/// A single escrowed bounty. Never deleted; `is_paid` flips exactly once.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bounty {
    pub creator: Address,
    pub amount: i128,
    pub is_paid: bool,
}

#[contracttype]
pub enum DataKey {
    /// Native asset contract address. Presence doubles as the init marker.
    NativeToken,
    Bounty(BytesN<32>),
}

#[contract]
pub struct BountyV2Contract;

#[contractimpl]
impl BountyV2Contract {
    /// Initialize with the owner and the native asset contract. Call once.
    pub fn init(env: Env, owner: Address, native_token: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::NativeToken) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage()
            .instance()
            .set(&DataKey::NativeToken, &native_token);
        ownable::write(&env, &owner);
        Ok(())
    }

    /// Escrow `amount` and record a new bounty keyed by a keccak-derived
    /// 32-byte identifier. Distinct even for identical back-to-back calls.
    pub fn create_bounty(env: Env, creator: Address, amount: i128) -> Result<BytesN<32>, Error> {
        reentrancy_guard::acquire(&env);
        creator.require_auth();

        if !env.storage().instance().has(&DataKey::NativeToken) {
            return Err(Error::NotInitialized);
        }
        if amount <= 0 {
            return Err(Error::BountyAmountZero);
        }

        let nonce = bounty_id::next_nonce(&env);
        let id = bounty_id::derive(&env, &creator, amount, nonce);

        // EFFECTS before the inbound transfer (CEI).
        let bounty = Bounty {
            creator: creator.clone(),
            amount,
            is_paid: false,
        };
        env.storage()
            .persistent()
            .set(&DataKey::Bounty(id.clone()), &bounty);

        let token = native_token(&env);
        transfer::deposit(&env, &token, &creator, amount);

        emit_bounty_created(
            &env,
            BountyCreated {
                bounty_id: id.clone(),
                creator,
                amount,
            },
        );

        reentrancy_guard::release(&env);
        Ok(id)
    }

    /// Read a bounty record. `BountyNotFound` for unknown identifiers.
    pub fn get_bounty_info(env: Env, bounty_id: BytesN<32>) -> Result<Bounty, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Bounty(bounty_id))
            .ok_or(Error::BountyNotFound)
    }

    /// Pay a bounty out to `winner`. Creator-only, exactly once.
    pub fn pay_bounty(
        env: Env,
        caller: Address,
        bounty_id: BytesN<32>,
        winner: Address,
    ) -> Result<(), Error> {
        reentrancy_guard::acquire(&env);
        caller.require_auth();

        let key = DataKey::Bounty(bounty_id.clone());
        let mut bounty: Bounty = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(Error::BountyNotFound)?;
        if bounty.creator != caller {
            return Err(Error::NotCreator);
        }
        if bounty.is_paid {
            return Err(Error::BountyAlreadyPaid);
        }

        // EFFECTS before the outbound transfer (CEI).
        bounty.is_paid = true;
        env.storage().persistent().set(&key, &bounty);

        let token = native_token(&env);
        transfer::payout(&env, &token, &winner, bounty.amount);

        emit_bounty_paid(
            &env,
            BountyPaid {
                bounty_id,
                winner,
                amount: bounty.amount,
            },
        );

        reentrancy_guard::release(&env);
        Ok(())
    }

    /// Owner-only withdrawal, bounded only by the contract's balance.
    pub fn withdraw(
        env: Env,
        caller: Address,
        amount: i128,
        recipient: Address,
    ) -> Result<(), Error> {
        reentrancy_guard::acquire(&env);
        caller.require_auth();

        if !ownable::is_owner(&env, &caller) {
            return Err(Error::NotOwner);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let token = native_token(&env);
        if transfer::balance(&env, &token) < amount {
            return Err(Error::InsufficientBalance);
        }
        transfer::payout(&env, &token, &recipient, amount);

        reentrancy_guard::release(&env);
        Ok(())
    }

    /// The current owner, or `None` after renouncement.
    pub fn owner(env: Env) -> Option<Address> {
        ownable::read(&env)
    }

    /// Hand the owner role to `new_owner`. Emits `OwnershipTransferred`.
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        caller.require_auth();
        if !ownable::is_owner(&env, &caller) {
            return Err(Error::NotOwner);
        }
        ownable::write(&env, &new_owner);
        Ok(())
    }

    /// Give the owner role up for good.
    pub fn renounce_ownership(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        if !ownable::is_owner(&env, &caller) {
            return Err(Error::NotOwner);
        }
        ownable::renounce(&env);
        Ok(())
    }
}

fn native_token(env: &Env) -> Address {
    // Callers pass an init check (or an owner check, which implies init)
    // before reaching this read.
    env.storage().instance().get(&DataKey::NativeToken).unwrap()
}
