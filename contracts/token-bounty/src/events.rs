//! Event shapes for off-chain indexing; same layout as the v2 escrow.

use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env};

#[contracttype]
#[derive(Clone, Debug)]
pub struct BountyCreated {
    pub bounty_id: BytesN<32>,
    pub creator: Address,
    pub amount: i128,
}

pub fn emit_bounty_created(env: &Env, event: BountyCreated) {
    let topics = (symbol_short!("created"), event.bounty_id.clone());
    env.events().publish(topics, event);
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct BountyPaid {
    pub bounty_id: BytesN<32>,
    pub winner: Address,
    pub amount: i128,
}

pub fn emit_bounty_paid(env: &Env, event: BountyPaid) {
    let topics = (symbol_short!("paid"), event.bounty_id.clone());
    env.events().publish(topics, event);
}
