#![no_std]
//! # Bounty Escrow v1 (dual asset)
//!
//! First-generation bounty escrow: a creator locks either the native asset
//! or the configured USDC token against a new bounty, later names a winner,
//! and the contract releases the escrowed amount to them. Paid bounties stay
//! on record with `is_paid = true`; records are never deleted.
//!
//! ## Overview
//!
//! 1. **Init**: set the owner and the two asset contract addresses (one-time).
//! 2. **Create**: `create_bounty` pulls the funds and stores the record under
//!    a keccak-derived 32-byte identifier.
//! 3. **Pay**: the bounty's creator names a winner; the contract marks the
//!    record paid and releases the funds.
//! 4. **Withdraw**: the owner may draw down the contract's balance of either
//!    asset, up to the current balance.
//!
//! ## Security Model
//!
//! - **Authorization**: creating requires the creator's signature; paying
//!   requires the recorded creator; withdrawing requires the owner.
//! - **Reentrancy**: checks-effects-interactions ordering (`is_paid` flips
//!   before the outbound transfer) plus an instance-storage guard.
//! - **No per-bounty reservation**: owner withdrawal is bounded only by the
//!   contract's aggregate balance, so it can draw down funds escrowed for a
//!   still-unpaid bounty. Deliberately kept from the original platform.

mod events;

use bounty_common::{bounty_id, ownable, reentrancy_guard, transfer};
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, BytesN, Env};

pub use bounty_interfaces::{DualAssetBounty as Bounty, TokenType};
use events::{emit_bounty_created, emit_bounty_paid, BountyCreated, BountyPaid};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized.
    AlreadyInitialized = 1,
    /// Contract has not been initialized yet. Call `init` first.
    NotInitialized = 2,
    /// Bounty amount must be greater than zero.
    InvalidBountyAmount = 3,
    /// No bounty recorded under this identifier.
    BountyNotFound = 4,
    /// The bounty has already been paid out.
    BountyAlreadyPaid = 5,
    /// Only the bounty's creator may pay it out.
    NotBountyCreator = 6,
    /// Only the owner may perform this operation.
    NotOwner = 7,
    /// Withdrawal exceeds the contract's native balance.
    InsufficientNativeBalance = 8,
    /// Withdrawal exceeds the contract's USDC balance.
    InsufficientTokenBalance = 9,
    /// Withdrawal amount must be greater than zero.
    InvalidAmount = 10,
}

#[contracttype]
pub enum DataKey {
    /// Native asset contract address. Presence doubles as the init marker.
    NativeToken,
    /// USDC token contract address.
    UsdcToken,
    /// Bounty record keyed by its 32-byte identifier.
    Bounty(BytesN<32>),
}

#[contract]
pub struct BountyV1Contract;

#[contractimpl]
impl BountyV1Contract {
    /// Initialize with the owner and the two asset contracts. Call once.
    pub fn init(
        env: Env,
        owner: Address,
        native_token: Address,
        usdc_token: Address,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::NativeToken) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage()
            .instance()
            .set(&DataKey::NativeToken, &native_token);
        env.storage().instance().set(&DataKey::UsdcToken, &usdc_token);
        ownable::write(&env, &owner);
        Ok(())
    }

    /// Escrow `amount` of the selected asset and record a new bounty.
    ///
    /// Returns the bounty's 32-byte identifier, derived from the creator,
    /// the amount, and a per-contract nonce. The authorized transfer pulls
    /// exactly `amount` from the creator, so over- and under-payment cannot
    /// occur.
    pub fn create_bounty(
        env: Env,
        creator: Address,
        token_type: TokenType,
        amount: i128,
    ) -> Result<BytesN<32>, Error> {
        reentrancy_guard::acquire(&env);
        creator.require_auth();

        if !env.storage().instance().has(&DataKey::NativeToken) {
            return Err(Error::NotInitialized);
        }
        if amount <= 0 {
            return Err(Error::InvalidBountyAmount);
        }

        let nonce = bounty_id::next_nonce(&env);
        let id = bounty_id::derive(&env, &creator, amount, nonce);

        // EFFECTS: write the record before the inbound transfer (CEI).
        let bounty = Bounty {
            creator: creator.clone(),
            amount,
            token_type,
            is_paid: false,
        };
        env.storage()
            .persistent()
            .set(&DataKey::Bounty(id.clone()), &bounty);

        // INTERACTION: pull the funds last.
        let token = token_for(&env, token_type);
        transfer::deposit(&env, &token, &creator, amount);

        emit_bounty_created(
            &env,
            BountyCreated {
                bounty_id: id.clone(),
                creator,
                amount,
                token_type,
            },
        );

        reentrancy_guard::release(&env);
        Ok(id)
    }

    /// Read a bounty record. Fails with `BountyNotFound` for an identifier
    /// that was never created.
    pub fn get_bounty_info(env: Env, bounty_id: BytesN<32>) -> Result<Bounty, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Bounty(bounty_id))
            .ok_or(Error::BountyNotFound)
    }

    /// Pay a bounty out to `winner`. Callable exactly once per bounty, and
    /// only by the bounty's creator.
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
            return Err(Error::NotBountyCreator);
        }
        if bounty.is_paid {
            return Err(Error::BountyAlreadyPaid);
        }

        // EFFECTS: mark paid before the outbound transfer (CEI).
        bounty.is_paid = true;
        env.storage().persistent().set(&key, &bounty);

        // INTERACTION: release the funds last.
        let token = token_for(&env, bounty.token_type);
        transfer::payout(&env, &token, &winner, bounty.amount);

        emit_bounty_paid(
            &env,
            BountyPaid {
                bounty_id,
                winner,
                amount: bounty.amount,
                token_type: bounty.token_type,
            },
        );

        reentrancy_guard::release(&env);
        Ok(())
    }

    /// Owner-only withdrawal of up to the contract's current balance of the
    /// selected asset. Not scoped to any bounty.
    pub fn withdraw(
        env: Env,
        caller: Address,
        amount: i128,
        token_type: TokenType,
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

        let token = token_for(&env, token_type);
        if transfer::balance(&env, &token) < amount {
            return Err(match token_type {
                TokenType::Native => Error::InsufficientNativeBalance,
                TokenType::Usdc => Error::InsufficientTokenBalance,
            });
        }
        transfer::payout(&env, &token, &recipient, amount);

        reentrancy_guard::release(&env);
        Ok(())
    }

    /// The current owner, or `None` after renouncement.
    pub fn owner(env: Env) -> Option<Address> {
        ownable::read(&env)
    }

    /// The configured USDC token contract.
    pub fn usdc_token(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::UsdcToken)
            .ok_or(Error::NotInitialized)
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

    /// Give the owner role up for good. Withdrawals are impossible after.
    pub fn renounce_ownership(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        if !ownable::is_owner(&env, &caller) {
            return Err(Error::NotOwner);
        }
        ownable::renounce(&env);
        Ok(())
    }
}

fn token_for(env: &Env, token_type: TokenType) -> Address {
    let key = match token_type {
        TokenType::Native => DataKey::NativeToken,
        TokenType::Usdc => DataKey::UsdcToken,
    };
    // Init writes both keys; callers check the init marker first.
    env.storage().instance().get(&key).unwrap()
}
