use host::{Config, HostContext, InMemoryHost, LogEntry, SelfDestructRecord};
use state::{Account, State};
use types::{
    Address, Bytes32, CallKind, CallResult, Message, StatusCode, StorageStatus, TxContext,
    FLAG_STATIC, TX_CONTEXT_LEN,
};

fn addr(byte: u8) -> Address {
    Address([byte; 20])
}

fn funded_host() -> InMemoryHost {
    let mut state = State::new();
    state.insert_account(addr(1), Account::with_balance(Bytes32::from_u64(1_000)));
    let mut contract = Account::default();
    contract.code = vec![0x60, 0x01, 0x60, 0x02, 0x01];
    state.insert_account(addr(2), contract);
    InMemoryHost::with_state(state)
}

fn call(host: &mut InMemoryHost, msg: &Message) -> CallResult {
    let encoded = msg.encode().expect("encode message");
    CallResult::decode(&host.call(&encoded)).expect("host returns an encoded call result")
}

#[test]
fn existence_follows_state() {
    let host = funded_host();
    assert!(host.account_exists(&addr(1).0));
    assert!(!host.account_exists(&addr(3).0));
    assert!(!host.account_exists(&[1; 19]));
}

#[test]
fn code_queries_use_deployed_code() {
    let host = funded_host();
    assert_eq!(host.get_code_size(&addr(2).0), 5);
    assert_eq!(host.get_code(&addr(2).0).as_bytes(), &[0x60, 0x01, 0x60, 0x02, 0x01]);
    assert_eq!(host.get_code_hash(&addr(2).0).len(), 32);
    assert!(!host.get_code_hash(&addr(2).0).is_zeroed());

    assert_eq!(host.get_code_size(&addr(1).0), 0);
    assert!(host.get_code_hash(&addr(1).0).is_zeroed());
    assert!(host.get_code(&addr(9).0).is_empty());
}

#[test]
fn storage_status_transitions() {
    let mut host = funded_host();
    let a = addr(2).0;
    let key = Bytes32::from_u64(1).0;
    let one = Bytes32::from_u64(1).0;
    let two = Bytes32::from_u64(2).0;
    let zero = Bytes32::ZERO.0;

    assert_eq!(host.set_storage(&a, &key, &zero), StorageStatus::Unchanged);
    assert_eq!(host.set_storage(&a, &key, &one), StorageStatus::Added);
    assert_eq!(host.get_storage(&a, &key).as_bytes(), &one);
    assert_eq!(host.set_storage(&a, &key, &one), StorageStatus::Unchanged);
    assert_eq!(host.set_storage(&a, &key, &two), StorageStatus::Modified);

    let other = Bytes32::from_u64(7).0;
    host.state_mut().set_storage(&addr(2), Bytes32(other), Bytes32(one));
    assert_eq!(host.set_storage(&a, &other, &two), StorageStatus::Modified);

    let third = Bytes32::from_u64(8).0;
    host.state_mut().set_storage(&addr(2), Bytes32(third), Bytes32(one));
    assert_eq!(host.set_storage(&a, &third, &zero), StorageStatus::Deleted);
    assert!(host.get_storage(&a, &third).is_zeroed());
}

#[test]
fn rewritten_slot_reports_plain_transitions() {
    let mut host = funded_host();
    let a = addr(2).0;
    let key = Bytes32::from_u64(3).0;
    let one = Bytes32::from_u64(1).0;
    let two = Bytes32::from_u64(2).0;
    let zero = Bytes32::ZERO.0;

    assert_eq!(host.set_storage(&a, &key, &one), StorageStatus::Added);
    assert_eq!(host.set_storage(&a, &key, &two), StorageStatus::Modified);
    assert_eq!(host.set_storage(&a, &key, &zero), StorageStatus::Deleted);
    assert!(host.get_storage(&a, &key).is_zeroed());
    assert_eq!(host.set_storage(&a, &key, &one), StorageStatus::Added);
    assert_eq!(host.set_storage(&a, &key, &zero), StorageStatus::Deleted);
}

#[test]
fn malformed_storage_arguments_are_ignored() {
    let mut host = funded_host();
    assert_eq!(host.set_storage(&[1; 3], &[0; 32], &[1; 32]), StorageStatus::Unchanged);
    assert_eq!(host.set_storage(&addr(2).0, &[0; 31], &[1; 32]), StorageStatus::Unchanged);
    assert!(host.get_storage(&addr(2).0, &[0; 5]).is_zeroed());
}

#[test]
fn balance_is_big_endian_word() {
    let host = funded_host();
    let balance = host.get_balance(&addr(1).0);
    assert_eq!(Bytes32::from_slice(&balance), Ok(Bytes32::from_u64(1_000)));
    assert!(host.get_balance(&addr(5).0).is_zeroed());
}

#[test]
fn selfdestruct_moves_balance_and_journals() {
    let mut host = funded_host();
    host.selfdestruct(&addr(1).0, &addr(4).0);
    assert!(!host.account_exists(&addr(1).0));
    assert_eq!(host.state().balance(&addr(4)), Bytes32::from_u64(1_000));
    assert_eq!(
        host.selfdestructs(),
        &[SelfDestructRecord {
            address: addr(1),
            beneficiary: addr(4),
            balance: Bytes32::from_u64(1_000),
        }]
    );

    host.selfdestruct(&addr(9).0, &addr(4).0);
    host.selfdestruct(&[], &[]);
    assert_eq!(host.selfdestructs().len(), 1);
}

#[test]
fn selfdestruct_to_self_burns_balance() {
    let mut host = funded_host();
    host.selfdestruct(&addr(1).0, &addr(1).0);
    assert!(!host.account_exists(&addr(1).0));
    assert!(host.get_balance(&addr(1).0).is_zeroed());
    assert_eq!(
        host.selfdestructs(),
        &[SelfDestructRecord {
            address: addr(1),
            beneficiary: addr(1),
            balance: Bytes32::from_u64(1_000),
        }]
    );
}

#[test]
fn call_transfers_value_and_records_message() {
    let mut host = funded_host();
    let msg = Message::call(addr(1), addr(2), 21_000).with_value(Bytes32::from_u64(400));
    let result = call(&mut host, &msg);
    assert_eq!(result, CallResult::success(21_000, Vec::new()));
    assert_eq!(host.state().balance(&addr(1)), Bytes32::from_u64(600));
    assert_eq!(host.state().balance(&addr(2)), Bytes32::from_u64(400));
    assert_eq!(host.calls(), &[msg]);
}

#[test]
fn call_failures() {
    let mut host = funded_host();

    let broke = Message::call(addr(1), addr(2), 10).with_value(Bytes32::from_u64(5_000));
    assert_eq!(call(&mut host, &broke).status, StatusCode::Failure);

    let too_deep = Message::call(addr(1), addr(2), 10).with_depth(Config::MAX_CALL_DEPTH + 1);
    assert_eq!(call(&mut host, &too_deep).status, StatusCode::CallDepthExceeded);

    let static_value = Message::call(addr(1), addr(2), 10)
        .with_value(Bytes32::from_u64(1))
        .with_flags(FLAG_STATIC);
    assert_eq!(call(&mut host, &static_value).status, StatusCode::StaticModeViolation);

    let static_create = Message::call(addr(1), addr(7), 10)
        .with_kind(CallKind::Create)
        .with_input(vec![0x00])
        .with_flags(FLAG_STATIC);
    assert_eq!(call(&mut host, &static_create).status, StatusCode::StaticModeViolation);
    assert!(!host.account_exists(&addr(7).0));

    let broke_self = Message::call(addr(1), addr(1), 10).with_value(Bytes32::from_u64(5_000));
    assert_eq!(call(&mut host, &broke_self).status, StatusCode::Failure);

    let garbage = CallResult::decode(&host.call(&[1, 2, 3])).expect("encoded result");
    assert_eq!(garbage.status, StatusCode::Failure);

    assert!(host.calls().is_empty());
    assert_eq!(host.state().balance(&addr(1)), Bytes32::from_u64(1_000));
}

#[test]
fn create_deploys_input_as_code() {
    let mut host = funded_host();
    let init = vec![0x60, 0x00, 0xf3];
    let msg = Message::call(addr(1), addr(7), 100)
        .with_kind(CallKind::Create)
        .with_input(init.clone())
        .with_value(Bytes32::from_u64(10));

    let result = call(&mut host, &msg);
    assert!(result.status.is_success());
    assert_eq!(result.output, addr(7).0.to_vec());
    assert_eq!(host.get_code_size(&addr(7).0), init.len());
    assert_eq!(host.state().balance(&addr(7)), Bytes32::from_u64(10));

    // deploying twice at the same address collides
    assert_eq!(call(&mut host, &msg).status, StatusCode::Failure);
}

#[test]
fn delegate_call_moves_no_value() {
    let mut host = funded_host();
    let msg = Message::call(addr(1), addr(2), 5)
        .with_kind(CallKind::DelegateCall)
        .with_value(Bytes32::from_u64(999));
    assert!(call(&mut host, &msg).status.is_success());
    assert_eq!(host.state().balance(&addr(1)), Bytes32::from_u64(1_000));
}

#[test]
fn call_code_checks_sender_balance() {
    let mut host = funded_host();
    let short = Message::call(addr(1), addr(2), 5)
        .with_kind(CallKind::CallCode)
        .with_value(Bytes32::from_u64(1_001));
    assert_eq!(call(&mut host, &short).status, StatusCode::Failure);
    assert!(host.calls().is_empty());

    let covered = Message::call(addr(1), addr(2), 5)
        .with_kind(CallKind::CallCode)
        .with_value(Bytes32::from_u64(1_000));
    assert_eq!(call(&mut host, &covered), CallResult::success(5, Vec::new()));
    assert_eq!(host.state().balance(&addr(1)), Bytes32::from_u64(1_000));
    assert!(host.state().balance(&addr(2)).is_zero());
    assert_eq!(host.calls(), &[covered]);
}

#[test]
fn tx_context_is_encoded() {
    let ctx = TxContext {
        gas_price: Bytes32::from_u64(1),
        origin: addr(1),
        coinbase: addr(8),
        block_number: 10,
        block_timestamp: 1_600_000_000,
        block_gas_limit: 3_000_000,
        block_difficulty: Bytes32::from_u64(2),
    };
    let host = InMemoryHost::new().with_tx_context(ctx);
    let buf = host.get_tx_context();
    assert_eq!(buf.len(), TX_CONTEXT_LEN);
    assert_eq!(TxContext::decode(&buf), Ok(ctx));
}

#[test]
fn block_hash_window() {
    let ctx = TxContext { block_number: 300, ..TxContext::default() };
    let mut host = InMemoryHost::new().with_tx_context(ctx);
    let hash = Bytes32([0xab; 32]);
    host.set_block_hash(299, hash);
    host.set_block_hash(44, hash);
    host.set_block_hash(43, hash);
    host.set_block_hash(300, hash);

    assert_eq!(host.get_block_hash(299).as_bytes(), &hash.0);
    assert_eq!(host.get_block_hash(44).as_bytes(), &hash.0);
    assert!(host.get_block_hash(43).is_zeroed());
    assert!(host.get_block_hash(300).is_zeroed());
    assert!(host.get_block_hash(100).is_zeroed());
    assert!(host.get_block_hash(-1).is_zeroed());
    assert_eq!(host.get_block_hash(100).len(), 32);
}

#[test]
fn emit_log_clamps_to_declared_sizes() {
    let mut host = InMemoryHost::new();
    let t1 = [0x11u8; 32];
    let t2 = [0x22u8; 32];
    host.emit_log(&addr(3).0, &[1, 2, 3, 4], 2, &[&t1[..], &t2[..]], 1);
    host.emit_log(&addr(3).0, &[5], 8, &[&t1[..]], 3);
    host.emit_log(&[], &[9], 1, &[], 0);

    assert_eq!(
        host.logs(),
        &[
            LogEntry { address: addr(3), data: vec![1, 2], topics: vec![t1.to_vec()] },
            LogEntry { address: addr(3), data: vec![5], topics: vec![t1.to_vec()] },
        ]
    );
}
