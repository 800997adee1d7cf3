use super::*;
use bounty_common::bounty_id;
use bounty_v1::{BountyV1Contract, BountyV1ContractClient};
use bounty_v2::{BountyV2Contract, BountyV2ContractClient};
use crate::events::{BountyMigrated, MigratorFunded};
use soroban_sdk::{
    testutils::{Address as _, Events as _},
    token, vec, Address, BytesN, Env,
};

struct Setup<'a> {
    env: Env,
    owner: Address,
    creator: Address,
    native: token::Client<'a>,
    native_sac: token::StellarAssetClient<'a>,
    v1: BountyV1ContractClient<'a>,
    v2: BountyV2ContractClient<'a>,
    migrator: BountyMigratorContractClient<'a>,
}

fn setup<'a>() -> Setup<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let owner = Address::generate(&env);
    let creator = Address::generate(&env);

    let native_contract = env.register_stellar_asset_contract_v2(admin.clone());
    let native = token::Client::new(&env, &native_contract.address());
    let native_sac = token::StellarAssetClient::new(&env, &native_contract.address());
    let usdc_contract = env.register_stellar_asset_contract_v2(admin.clone());
    let usdc_sac = token::StellarAssetClient::new(&env, &usdc_contract.address());

    let v1_id = env.register_contract(None, BountyV1Contract);
    let v1 = BountyV1ContractClient::new(&env, &v1_id);
    v1.init(&owner, &native.address, &usdc_contract.address());

    let v2_id = env.register_contract(None, BountyV2Contract);
    let v2 = BountyV2ContractClient::new(&env, &v2_id);
    v2.init(&owner, &native.address);

    let migrator_id = env.register_contract(None, BountyMigratorContract);
    let migrator = BountyMigratorContractClient::new(&env, &migrator_id);
    migrator.init(&owner, &v1_id, &v2_id, &native.address);

    native_sac.mint(&creator, &10_000);
    usdc_sac.mint(&creator, &10_000);

    Setup {
        env,
        owner,
        creator,
        native,
        native_sac,
        v1,
        v2,
        migrator,
    }
}

#[test]
fn migrate_moves_unpaid_native_bounties_only() {
    let s = setup();

    // Two unpaid native bounties, one paid native, one USDC.
    let a = s
        .v1
        .create_bounty(&s.creator, &bounty_v1::TokenType::Native, &100);
    let b = s
        .v1
        .create_bounty(&s.creator, &bounty_v1::TokenType::Native, &250);
    let paid = s
        .v1
        .create_bounty(&s.creator, &bounty_v1::TokenType::Native, &50);
    s.v1.pay_bounty(&s.creator, &paid, &s.creator);
    let usdc = s
        .v1
        .create_bounty(&s.creator, &bounty_v1::TokenType::Usdc, &300);

    s.native_sac.mint(&s.owner, &350);
    s.migrator.fund(&s.owner, &350);

    let ids = vec![&s.env, a.clone(), b.clone(), paid, usdc];
    let migrated = s.migrator.migrate_bounties(&s.owner, &ids);
    assert_eq!(migrated, 2);

    // The migrator's stake moved into v2; v1 holdings are untouched.
    assert_eq!(s.native.balance(&s.migrator.address), 0);
    assert_eq!(s.native.balance(&s.v2.address), 350);
    assert_eq!(s.native.balance(&s.v1.address), 350);

    // Recreated bounties are owned by the migrator and unpaid. Their ids
    // follow v2's derivation with the migrator as creator, nonces 0 and 1.
    let first = bounty_id::derive(&s.env, &s.migrator.address, 100, 0);
    let second = bounty_id::derive(&s.env, &s.migrator.address, 250, 1);

    let info = s.v2.get_bounty_info(&first);
    assert_eq!(info.creator, s.migrator.address);
    assert_eq!(info.amount, 100);
    assert!(!info.is_paid);
    assert_eq!(s.v2.get_bounty_info(&second).amount, 250);
}

#[test]
#[should_panic]
fn migrating_beyond_funding_fails() {
    let s = setup();

    let a = s
        .v1
        .create_bounty(&s.creator, &bounty_v1::TokenType::Native, &100);
    let b = s
        .v1
        .create_bounty(&s.creator, &bounty_v1::TokenType::Native, &250);

    // Enough for the first bounty but not the second.
    s.native_sac.mint(&s.owner, &200);
    s.migrator.fund(&s.owner, &200);

    s.migrator
        .migrate_bounties(&s.owner, &vec![&s.env, a, b]);
}

#[test]
#[should_panic]
fn unknown_bounty_aborts_the_batch() {
    let s = setup();

    s.native_sac.mint(&s.owner, &100);
    s.migrator.fund(&s.owner, &100);

    let bogus = BytesN::from_array(&s.env, &[7u8; 32]);
    s.migrator
        .migrate_bounties(&s.owner, &vec![&s.env, bogus]);
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn non_owner_cannot_migrate() {
    let s = setup();
    let intruder = Address::generate(&s.env);

    let a = s
        .v1
        .create_bounty(&s.creator, &bounty_v1::TokenType::Native, &100);
    s.migrator
        .migrate_bounties(&intruder, &vec![&s.env, a]);
}

#[test]
fn withdraw_sweeps_the_residual_balance() {
    let s = setup();

    let a = s
        .v1
        .create_bounty(&s.creator, &bounty_v1::TokenType::Native, &100);

    // Over-funded on purpose; the excess comes back on withdraw.
    s.native_sac.mint(&s.owner, &500);
    s.migrator.fund(&s.owner, &500);
    s.migrator.migrate_bounties(&s.owner, &vec![&s.env, a]);

    s.migrator.withdraw(&s.owner);
    assert_eq!(s.native.balance(&s.owner), 400);
    assert_eq!(s.native.balance(&s.migrator.address), 0);
}

#[test]
fn funding_and_migration_emit_indexable_events() {
    let s = setup();

    let a = s
        .v1
        .create_bounty(&s.creator, &bounty_v1::TokenType::Native, &100);
    s.native_sac.mint(&s.owner, &100);

    // Topics and field order are what off-chain indexers decode.
    s.migrator.fund(&s.owner, &100);
    let events = s.env.events().all();
    assert_eq!(
        vec![&s.env, events.last().unwrap()],
        vec![
            &s.env,
            (
                s.migrator.address.clone(),
                (symbol_short!("funded"),).into_val(&s.env),
                MigratorFunded {
                    from: s.owner.clone(),
                    amount: 100,
                }
                .into_val(&s.env),
            ),
        ]
    );

    s.migrator.migrate_bounties(&s.owner, &vec![&s.env, a.clone()]);
    let new_id = bounty_id::derive(&s.env, &s.migrator.address, 100, 0);
    let events = s.env.events().all();
    assert_eq!(
        vec![&s.env, events.last().unwrap()],
        vec![
            &s.env,
            (
                s.migrator.address.clone(),
                (symbol_short!("migrated"), a.clone()).into_val(&s.env),
                BountyMigrated {
                    source_id: a,
                    new_id,
                    amount: 100,
                }
                .into_val(&s.env),
            ),
        ]
    );
}

#[test]
fn withdraw_with_empty_balance_is_a_no_op() {
    let s = setup();
    s.migrator.withdraw(&s.owner);
    assert_eq!(s.native.balance(&s.owner), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn non_owner_cannot_withdraw() {
    let s = setup();
    let intruder = Address::generate(&s.env);
    s.migrator.withdraw(&intruder);
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")]
fn funding_zero_fails() {
    let s = setup();
    s.migrator.fund(&s.owner, &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn cannot_reinitialize() {
    let s = setup();
    s.migrator
        .init(&s.owner, &s.v1.address, &s.v2.address, &s.native.address);
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn fund_before_init_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let from = Address::generate(&env);
    let contract_id = env.register_contract(None, BountyMigratorContract);
    let client = BountyMigratorContractClient::new(&env, &contract_id);
    client.fund(&from, &100);
}

#[test]
fn ownership_transfer_moves_the_migrate_right() {
    let s = setup();
    let next_owner = Address::generate(&s.env);

    let a = s
        .v1
        .create_bounty(&s.creator, &bounty_v1::TokenType::Native, &100);
    s.native_sac.mint(&next_owner, &100);
    s.migrator.fund(&next_owner, &100);

    s.migrator.transfer_ownership(&s.owner, &next_owner);
    assert_eq!(s.migrator.owner(), Some(next_owner.clone()));

    let migrated = s
        .migrator
        .migrate_bounties(&next_owner, &vec![&s.env, a]);
    assert_eq!(migrated, 1);
}
