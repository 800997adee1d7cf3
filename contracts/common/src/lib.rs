#![no_std]
//! Shared building blocks for the bounty escrow contracts: the single-owner
//! guard, bounty identifier derivation, the token transfer adapter, and the
//! reentrancy guard. Each escrow variant composes these against its own
//! storage and error taxonomy.

pub mod bounty_id;
pub mod ownable;
pub mod reentrancy_guard;
pub mod transfer;
