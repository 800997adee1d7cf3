//! Event emission for the bounty migrator.

use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env};

/// Emitted when native funds are deposited into the migrator.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MigratorFunded {
    pub from: Address,
    pub amount: i128,
}

/// Emitted once per bounty carried over to the target escrow.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BountyMigrated {
    pub source_id: BytesN<32>,
    pub new_id: BytesN<32>,
    pub amount: i128,
}

pub fn emit_funded(env: &Env, from: Address, amount: i128) {
    let event = MigratorFunded { from, amount };
    env.events().publish((symbol_short!("funded"),), event);
}

pub fn emit_migrated(env: &Env, source_id: BytesN<32>, new_id: BytesN<32>, amount: i128) {
    let topics = (symbol_short!("migrated"), source_id.clone());
    let event = BountyMigrated {
        source_id,
        new_id,
        amount,
    };
    env.events().publish(topics, event);
}
