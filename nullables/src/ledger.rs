//! Nullable ledger node — scripted answers, recorded queries.

use async_trait::async_trait;
use solana_sdk::hash::Hash;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use std::sync::Mutex;
use sweep_wallet_core::{ClientError, ClientResult, LedgerClient, LedgerQuery};

/// Scripted answer for one query.
#[derive(Clone, Debug)]
pub enum Scripted<T> {
    Value(T),
    /// The node answered with an empty result.
    Absent,
    /// The call failed before a result came back.
    Fault(ClientError),
}

impl<T: Clone> Scripted<T> {
    fn answer(&self) -> ClientResult<T> {
        match self {
            Self::Value(v) => Ok(Some(v.clone())),
            Self::Absent => Ok(None),
            Self::Fault(e) => Err(e.clone()),
        }
    }
}

/// A ledger node for tests.
///
/// Defaults to the worked example: balance 5,000,000, fee 5,000 and rent
/// minimum 890,880 lamports.
pub struct NullLedgerClient {
    balance: Mutex<Scripted<u64>>,
    blockhash: Mutex<Scripted<Hash>>,
    fee: Mutex<Scripted<u64>>,
    rent: Mutex<Scripted<u64>>,
    calls: Mutex<Vec<LedgerQuery>>,
    balance_addresses: Mutex<Vec<Pubkey>>,
    fee_messages: Mutex<Vec<Message>>,
    rent_data_lens: Mutex<Vec<usize>>,
}

impl NullLedgerClient {
    pub fn new() -> Self {
        Self {
            balance: Mutex::new(Scripted::Value(5_000_000)),
            blockhash: Mutex::new(Scripted::Value(Hash::new_from_array([7u8; 32]))),
            fee: Mutex::new(Scripted::Value(5_000)),
            rent: Mutex::new(Scripted::Value(890_880)),
            calls: Mutex::new(Vec::new()),
            balance_addresses: Mutex::new(Vec::new()),
            fee_messages: Mutex::new(Vec::new()),
            rent_data_lens: Mutex::new(Vec::new()),
        }
    }

    pub fn with_balance(self, lamports: u64) -> Self {
        self.set_balance(lamports);
        self
    }

    pub fn with_fee(self, lamports: u64) -> Self {
        *self.fee.lock().unwrap() = Scripted::Value(lamports);
        self
    }

    pub fn with_rent_exempt_minimum(self, lamports: u64) -> Self {
        *self.rent.lock().unwrap() = Scripted::Value(lamports);
        self
    }

    /// Make `query` come back empty.
    pub fn with_absent(self, query: LedgerQuery) -> Self {
        self.set_script(query, Scripted::Absent, Scripted::Absent);
        self
    }

    /// Make `query` fail with `error`.
    pub fn with_fault(self, query: LedgerQuery, error: ClientError) -> Self {
        self.set_script(query, Scripted::Fault(error.clone()), Scripted::Fault(error));
        self
    }

    pub fn set_balance(&self, lamports: u64) {
        *self.balance.lock().unwrap() = Scripted::Value(lamports);
    }

    pub fn set_blockhash(&self, hash: Hash) {
        *self.blockhash.lock().unwrap() = Scripted::Value(hash);
    }

    /// Every query received so far, in order.
    pub fn calls(&self) -> Vec<LedgerQuery> {
        self.calls.lock().unwrap().clone()
    }

    /// Addresses passed to `get_balance`.
    pub fn balance_addresses(&self) -> Vec<Pubkey> {
        self.balance_addresses.lock().unwrap().clone()
    }

    /// Messages passed to `get_fee_for_message`.
    pub fn fee_messages(&self) -> Vec<Message> {
        self.fee_messages.lock().unwrap().clone()
    }

    /// Data lengths passed to `get_minimum_balance_for_rent_exemption`.
    pub fn rent_data_lens(&self) -> Vec<usize> {
        self.rent_data_lens.lock().unwrap().clone()
    }

    /// Clear recorded calls, keeping the script.
    pub fn reset(&self) {
        self.calls.lock().unwrap().clear();
        self.balance_addresses.lock().unwrap().clear();
        self.fee_messages.lock().unwrap().clear();
        self.rent_data_lens.lock().unwrap().clear();
    }

    /// Replace the script for `query`; only the slot matching its type is used.
    fn set_script(&self, query: LedgerQuery, amount: Scripted<u64>, hash: Scripted<Hash>) {
        match query {
            LedgerQuery::Balance => *self.balance.lock().unwrap() = amount,
            LedgerQuery::LatestBlockhash => *self.blockhash.lock().unwrap() = hash,
            LedgerQuery::FeeForMessage => *self.fee.lock().unwrap() = amount,
            LedgerQuery::RentExemption => *self.rent.lock().unwrap() = amount,
        }
    }

    fn record(&self, query: LedgerQuery) {
        self.calls.lock().unwrap().push(query);
    }
}

impl Default for NullLedgerClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerClient for NullLedgerClient {
    async fn get_balance(&self, address: &Pubkey) -> ClientResult<u64> {
        self.record(LedgerQuery::Balance);
        self.balance_addresses.lock().unwrap().push(*address);
        self.balance.lock().unwrap().answer()
    }

    async fn get_latest_blockhash(&self) -> ClientResult<Hash> {
        self.record(LedgerQuery::LatestBlockhash);
        self.blockhash.lock().unwrap().answer()
    }

    async fn get_fee_for_message(&self, message: &Message) -> ClientResult<u64> {
        self.record(LedgerQuery::FeeForMessage);
        self.fee_messages.lock().unwrap().push(message.clone());
        self.fee.lock().unwrap().answer()
    }

    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> ClientResult<u64> {
        self.record(LedgerQuery::RentExemption);
        self.rent_data_lens.lock().unwrap().push(data_len);
        self.rent.lock().unwrap().answer()
    }
}
