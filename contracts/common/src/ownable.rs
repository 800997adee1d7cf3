//! Single-owner access control.
//!
//! One administrative address per contract instance, held in instance
//! storage. The role gates `withdraw` on the escrows and the whole migrator
//! surface, and can be transferred or renounced. Every change of hands is
//! announced with an `OwnershipTransferred` event so off-chain tooling can
//! track the administrative key.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
pub enum OwnerKey {
    Owner,
}

/// Emitted on every ownership change, initial assignment included.
/// `new_owner` is `None` after renouncement.
#[contracttype]
#[derive(Clone, Debug)]
pub struct OwnershipTransferred {
    pub previous_owner: Option<Address>,
    pub new_owner: Option<Address>,
}

/// Read the current owner, if one is set.
pub fn read(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OwnerKey::Owner)
}

/// True when `who` holds the owner role. Always false once renounced.
pub fn is_owner(env: &Env, who: &Address) -> bool {
    match read(env) {
        Some(owner) => owner == *who,
        None => false,
    }
}

/// Hand the role to `new_owner` and emit `OwnershipTransferred`.
pub fn write(env: &Env, new_owner: &Address) {
    let previous_owner = read(env);
    env.storage().instance().set(&OwnerKey::Owner, new_owner);
    emit_transferred(env, previous_owner, Some(new_owner.clone()));
}

/// Clear the owner slot. Owner-gated entry points fail from here on; the
/// role cannot be reclaimed.
pub fn renounce(env: &Env) {
    let previous_owner = read(env);
    env.storage().instance().remove(&OwnerKey::Owner);
    emit_transferred(env, previous_owner, None);
}

fn emit_transferred(env: &Env, previous_owner: Option<Address>, new_owner: Option<Address>) {
    let topics = (symbol_short!("ownership"),);
    env.events().publish(
        topics,
        OwnershipTransferred {
            previous_owner,
            new_owner,
        },
    );
}
