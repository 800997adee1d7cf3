#![no_std]
//! # Bounty Migrator (v1 -> v2)
//!
//! One-shot helper for carrying unpaid native-asset bounties from the
//! dual-asset v1 escrow into the native-only v2 escrow. The migrator never
//! touches v1 state: it is funded out of band with enough native asset to
//! cover the bounties being moved, then recreates each one in v2 through the
//! regular `create_bounty` path, spending its own balance. Recreated bounties
//! therefore list the migrator as their creator.
//!
//! ## Security model
//! - `migrate_bounties` and `withdraw` are owner-only.
//! - USDC-denominated and already-paid v1 bounties are skipped, not errors;
//!   an unknown identifier aborts the whole batch.
//! - Migration is idempotent only at the caller's discretion: passing the
//!   same identifier twice recreates the bounty twice. The owner is expected
//!   to derive the batch from v1 `created`/`paid` events exactly once.

mod events;
#[cfg(test)]
mod test;

use bounty_common::{ownable, transfer};
use bounty_interfaces::{DualAssetEscrowClient, SingleAssetEscrowClient, TokenType};
use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    contract, contracterror, contractimpl, contracttype, symbol_short, vec, Address, BytesN, Env,
    IntoVal, Vec,
};

use events::{emit_funded, emit_migrated};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    InvalidAmount = 4,
}

#[contracttype]
pub enum DataKey {
    /// v1 escrow address. Presence doubles as the init marker.
    SourceEscrow,
    /// v2 escrow address.
    TargetEscrow,
    /// Native asset contract address, shared with both escrows.
    NativeToken,
}

#[contract]
pub struct BountyMigratorContract;

#[contractimpl]
impl BountyMigratorContract {
    /// Initialize with the owner, both escrow addresses and the native
    /// asset they settle in. Call once.
    pub fn init(
        env: Env,
        owner: Address,
        source: Address,
        target: Address,
        native_token: Address,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::SourceEscrow) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::SourceEscrow, &source);
        env.storage().instance().set(&DataKey::TargetEscrow, &target);
        env.storage()
            .instance()
            .set(&DataKey::NativeToken, &native_token);
        ownable::write(&env, &owner);
        Ok(())
    }

    /// Deposit native asset to pay for upcoming migrations. Anyone may fund.
    pub fn fund(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        if !env.storage().instance().has(&DataKey::SourceEscrow) {
            return Err(Error::NotInitialized);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let token = native_token(&env);
        transfer::deposit(&env, &token, &from, amount);
        emit_funded(&env, from, amount);
        Ok(())
    }

    /// Recreate each unpaid native v1 bounty in the v2 escrow, paying out of
    /// the migrator's own balance. Returns the number actually migrated;
    /// paid and USDC bounties are skipped. Owner-only.
    pub fn migrate_bounties(
        env: Env,
        caller: Address,
        bounty_ids: Vec<BytesN<32>>,
    ) -> Result<u32, Error> {
        caller.require_auth();
        if !env.storage().instance().has(&DataKey::SourceEscrow) {
            return Err(Error::NotInitialized);
        }
        if !ownable::is_owner(&env, &caller) {
            return Err(Error::NotOwner);
        }

        let this = env.current_contract_address();
        let source: Address = env
            .storage()
            .instance()
            .get(&DataKey::SourceEscrow)
            .ok_or(Error::NotInitialized)?;
        let target: Address = env
            .storage()
            .instance()
            .get(&DataKey::TargetEscrow)
            .ok_or(Error::NotInitialized)?;
        let token = native_token(&env);

        let v1 = DualAssetEscrowClient::new(&env, &source);
        let v2 = SingleAssetEscrowClient::new(&env, &target);

        let mut migrated: u32 = 0;
        for source_id in bounty_ids.iter() {
            // Traps if the identifier is unknown to v1, aborting the batch.
            let bounty = v1.get_bounty_info(&source_id);
            if bounty.is_paid || bounty.token_type != TokenType::Native {
                continue;
            }

            // v2's `create_bounty` pulls the deposit from its caller; as a
            // contract we have to pre-authorize that nested token transfer
            // out of our own balance.
            env.authorize_as_current_contract(vec![
                &env,
                InvokerContractAuthEntry::Contract(SubContractInvocation {
                    context: ContractContext {
                        contract: token.clone(),
                        fn_name: symbol_short!("transfer"),
                        args: (this.clone(), target.clone(), bounty.amount).into_val(&env),
                    },
                    sub_invocations: vec![&env],
                }),
            ]);
            let new_id = v2.create_bounty(&this, &bounty.amount);

            emit_migrated(&env, source_id, new_id, bounty.amount);
            migrated += 1;
        }
        Ok(migrated)
    }

    /// Sweep whatever native balance is left back to the caller. Owner-only.
    pub fn withdraw(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        if !env.storage().instance().has(&DataKey::SourceEscrow) {
            return Err(Error::NotInitialized);
        }
        if !ownable::is_owner(&env, &caller) {
            return Err(Error::NotOwner);
        }
        let token = native_token(&env);
        let remaining = transfer::balance(&env, &token);
        if remaining > 0 {
            transfer::payout(&env, &token, &caller, remaining);
        }
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
}

fn native_token(env: &Env) -> Address {
    // All callers pass the init check before reaching this read.
    env.storage().instance().get(&DataKey::NativeToken).unwrap()
}
