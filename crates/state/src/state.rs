use std::collections::HashMap;
use std::fmt;

use hex::encode as hex_encode;
use thiserror::Error;
use types::{Address, Bytes32};

use crate::Account;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("account {address} holds {available}, cannot move {requested}")]
    InsufficientBalance {
        address: Address,
        available: Bytes32,
        requested: Bytes32,
    },

    #[error("balance of {0} would overflow 256 bits")]
    BalanceOverflow(Address),
}

/// Account state of the host.
///
/// Accounts only exist once something creates them: a deployment, a balance
/// credit or an explicit insert. Reads of absent accounts yield zero values.
#[derive(Clone, Debug, Default)]
pub struct State {
    pub accounts: HashMap<Address, Account>,
}

impl State {
    pub fn new() -> Self {
        Self { accounts: HashMap::new() }
    }

    pub fn contains(&self, addr: &Address) -> bool {
        self.accounts.contains_key(addr)
    }

    pub fn get_account(&self, addr: &Address) -> Option<&Account> {
        self.accounts.get(addr)
    }

    /// Returns the account at `addr`, creating an empty one if needed.
    pub fn get_account_mut(&mut self, addr: &Address) -> &mut Account {
        self.accounts.entry(*addr).or_default()
    }

    pub fn insert_account(&mut self, addr: Address, account: Account) {
        self.accounts.insert(addr, account);
    }

    pub fn remove_account(&mut self, addr: &Address) -> Option<Account> {
        self.accounts.remove(addr)
    }

    pub fn deploy_contract(&mut self, addr: Address, code: Vec<u8>) {
        self.get_account_mut(&addr).code = code;
    }

    pub fn balance(&self, addr: &Address) -> Bytes32 {
        self.accounts.get(addr).map(|a| a.balance).unwrap_or(Bytes32::ZERO)
    }

    pub fn code(&self, addr: &Address) -> &[u8] {
        self.accounts.get(addr).map(|a| a.code.as_slice()).unwrap_or(&[])
    }

    pub fn code_hash(&self, addr: &Address) -> Bytes32 {
        self.accounts.get(addr).map(Account::code_hash).unwrap_or(Bytes32::ZERO)
    }

    pub fn storage(&self, addr: &Address, key: &Bytes32) -> Bytes32 {
        self.accounts
            .get(addr)
            .map(|a| a.storage_value(key))
            .unwrap_or(Bytes32::ZERO)
    }

    /// Writes a storage slot and returns the previous value.
    /// A zero value clears the slot.
    pub fn set_storage(&mut self, addr: &Address, key: Bytes32, value: Bytes32) -> Bytes32 {
        let account = self.get_account_mut(addr);
        let previous = if value.is_zero() {
            account.storage.remove(&key)
        } else {
            account.storage.insert(key, value)
        };
        previous.unwrap_or(Bytes32::ZERO)
    }

    pub fn credit(&mut self, addr: &Address, amount: &Bytes32) -> Result<(), StateError> {
        let account = self.get_account_mut(addr);
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or(StateError::BalanceOverflow(*addr))?;
        Ok(())
    }

    /// Moves `amount` from `from` to `to`. Nothing changes on failure.
    /// The sender must cover `amount` even when `from == to`.
    pub fn transfer(&mut self, from: &Address, to: &Address, amount: &Bytes32) -> Result<(), StateError> {
        let available = self.balance(from);
        let remaining = available
            .checked_sub(amount)
            .ok_or(StateError::InsufficientBalance {
                address: *from,
                available,
                requested: *amount,
            })?;
        if amount.is_zero() || from == to {
            return Ok(());
        }
        self.balance(to)
            .checked_add(amount)
            .ok_or(StateError::BalanceOverflow(*to))?;

        self.get_account_mut(from).balance = remaining;
        self.credit(to, amount)
    }

    /// Removes `addr` and credits its balance to `beneficiary`.
    /// Returns the moved balance, or `None` if `addr` did not exist.
    /// With `addr` as its own beneficiary the balance is burned.
    pub fn selfdestruct(&mut self, addr: &Address, beneficiary: &Address) -> Result<Option<Bytes32>, StateError> {
        let Some(account) = self.accounts.get(addr) else {
            return Ok(None);
        };
        let balance = account.balance;
        if addr != beneficiary {
            self.credit(beneficiary, &balance)?;
        }
        self.accounts.remove(addr);
        Ok(Some(balance))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- State Dump ---")?;
        let mut addrs: Vec<&Address> = self.accounts.keys().collect();
        addrs.sort();
        for addr in addrs {
            let acc = &self.accounts[addr];
            writeln!(f, "  Address: 0x{}", hex_encode(addr.0))?;
            writeln!(f, "      - Balance: {}", acc.balance)?;
            writeln!(f, "      - Nonce: {}", acc.nonce)?;
            writeln!(f, "      - Code size: {} bytes", acc.code.len())?;
            writeln!(f, "      - Storage:")?;
            for (key, value) in &acc.storage {
                writeln!(f, "          Key: {} | Value: {}", key, value)?;
            }
        }
        write!(f, "--------------------")
    }
}
