#![no_std]
//! Wire types and cross-contract clients shared by the bounty escrow family.
//!
//! The migrator drives the v1 and v2 escrows through the clients defined
//! here instead of linking the contract crates themselves, so each escrow
//! wasm only ever exports its own entry points. Field names and order are
//! frozen: off-chain indexers and the migrator decode these shapes.

use soroban_sdk::{contractclient, contracttype, Address, BytesN, Env};

/// Asset discriminator for the dual-asset (v1) escrow.
///
/// Wire values mirror the original uint8 encoding: 0 = native, 1 = USDC.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TokenType {
    Native = 0,
    Usdc = 1,
}

/// Bounty record exposed by the dual-asset (v1) escrow.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DualAssetBounty {
    pub creator: Address,
    pub amount: i128,
    pub token_type: TokenType,
    pub is_paid: bool,
}

/// The slice of the v1 surface the migrator reads. v1 state is never
/// mutated through this client.
#[contractclient(name = "DualAssetEscrowClient")]
pub trait DualAssetEscrow {
    fn get_bounty_info(env: Env, bounty_id: BytesN<32>) -> DualAssetBounty;
}

/// The slice of the v2 surface the migrator writes through.
#[contractclient(name = "SingleAssetEscrowClient")]
pub trait SingleAssetEscrow {
    fn create_bounty(env: Env, creator: Address, amount: i128) -> BytesN<32>;
}
