// src/wallet/mod.rs - simulated chain wallet; no real signing or network
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use crate::config::{simulate_delay, Latency};
use crate::types::WalletConnection;

pub const MOCK_WALLET_ADDRESS: &str = "0x742d35cc6bf8532c4ea4b23e5dd6b6b50c00e9cd";
/// Posting fees go to the platform treasury.
pub const TREASURY_ADDRESS: &str = MOCK_WALLET_ADDRESS;
pub const MOCK_NETWORK: &str = "Ethereum Mainnet";
pub const INITIAL_BALANCE_ETH: f64 = 0.5;
/// Platform fee charged per job posting.
pub const JOB_POSTING_FEE_ETH: f64 = 0.001;

/// Mocked wallet connection and payment flow.
///
/// Connect always succeeds after the configured delay; payments mint a
/// random transaction id and decrement the tracked balance. The failure
/// path is reachable only through [`PaymentGateway::set_fail_payments`].
pub struct PaymentGateway {
    state: RwLock<WalletConnection>,
    rng: Mutex<StdRng>,
    latency: Latency,
    fail_payments: AtomicBool,
}

impl PaymentGateway {
    pub fn new(latency: Latency) -> Self {
        Self {
            state: RwLock::new(WalletConnection::default()),
            rng: Mutex::new(StdRng::from_os_rng()),
            latency,
            fail_payments: AtomicBool::new(false),
        }
    }

    pub fn with_seed(latency: Latency, seed: u64) -> Self {
        Self {
            state: RwLock::new(WalletConnection::default()),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            latency,
            fail_payments: AtomicBool::new(false),
        }
    }

    /// Forces subsequent payments onto the failure path.
    pub fn set_fail_payments(&self, fail: bool) {
        self.fail_payments.store(fail, Ordering::SeqCst);
    }

    pub async fn wallet(&self) -> WalletConnection {
        self.state.read().await.clone()
    }

    pub async fn is_connected(&self) -> bool {
        self.state.read().await.is_connected
    }

    /// Simulated wallet connection; always succeeds after the delay.
    pub async fn connect(&self) -> bool {
        simulate_delay(self.latency.connect).await;

        let mut state = self.state.write().await;
        *state = WalletConnection {
            is_connected: true,
            address: Some(MOCK_WALLET_ADDRESS.to_string()),
            balance: Some(INITIAL_BALANCE_ETH),
            network: Some(MOCK_NETWORK.to_string()),
        };
        info!("Wallet connected: {}", MOCK_WALLET_ADDRESS);
        true
    }

    /// Drops the connection and every cached attribute with it.
    pub async fn disconnect(&self) {
        let mut state = self.state.write().await;
        *state = WalletConnection::default();
        info!("Wallet disconnected");
    }

    /// Simulated payment. Errors when the wallet is not connected;
    /// otherwise returns the minted transaction id.
    pub async fn pay(&self, amount: f64, recipient: &str) -> Result<String> {
        if !self.is_connected().await {
            bail!("Wallet not connected");
        }

        simulate_delay(self.latency.payment).await;

        if self.fail_payments.load(Ordering::SeqCst) {
            warn!("Payment of {} ETH to {} rejected", amount, recipient);
            bail!("Transaction rejected by network");
        }

        let tx_hash = self.random_tx_hash().await;

        let mut state = self.state.write().await;
        // The connection may have been dropped while the transfer was
        // in flight; the suspension point above makes that reachable.
        if !state.is_connected {
            bail!("Wallet disconnected during payment");
        }
        if let Some(balance) = state.balance {
            // No sufficiency check: the tracked balance may go negative.
            state.balance = Some(balance - amount);
        }

        info!(
            "Paid {} ETH to {} in tx {} (balance now {:?})",
            amount, recipient, tx_hash, state.balance
        );
        Ok(tx_hash)
    }

    async fn random_tx_hash(&self) -> String {
        const HEX: &[u8] = b"0123456789abcdef";
        let mut rng = self.rng.lock().await;
        let digits: String = (0..64)
            .map(|_| HEX[rng.random_range(0..HEX.len())] as char)
            .collect();
        format!("0x{}", digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> PaymentGateway {
        PaymentGateway::with_seed(Latency::none(), 7)
    }

    #[tokio::test]
    async fn pay_before_connect_fails() {
        let gateway = gateway();

        let result = gateway.pay(JOB_POSTING_FEE_ETH, TREASURY_ADDRESS).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not connected"));
    }

    #[tokio::test]
    async fn connect_populates_mock_wallet() {
        let gateway = gateway();

        assert!(gateway.connect().await);
        let wallet = gateway.wallet().await;
        assert!(wallet.is_connected);
        assert_eq!(wallet.address.as_deref(), Some(MOCK_WALLET_ADDRESS));
        assert_eq!(wallet.balance, Some(INITIAL_BALANCE_ETH));
        assert_eq!(wallet.network.as_deref(), Some(MOCK_NETWORK));
    }

    #[tokio::test]
    async fn pay_returns_tx_id_and_decrements_balance() {
        let gateway = gateway();
        gateway.connect().await;

        let tx = gateway
            .pay(JOB_POSTING_FEE_ETH, TREASURY_ADDRESS)
            .await
            .expect("payment succeeds when connected");

        assert!(tx.starts_with("0x"));
        assert_eq!(tx.len(), 66);

        let balance = gateway.wallet().await.balance.expect("balance tracked");
        assert!((balance - (INITIAL_BALANCE_ETH - JOB_POSTING_FEE_ETH)).abs() < 1e-9);
    }

    #[tokio::test]
    async fn balance_may_go_negative() {
        let gateway = gateway();
        gateway.connect().await;

        gateway.pay(0.4, TREASURY_ADDRESS).await.expect("first payment");
        gateway.pay(0.4, TREASURY_ADDRESS).await.expect("second payment");

        let balance = gateway.wallet().await.balance.expect("balance tracked");
        assert!(balance < 0.0);
    }

    #[tokio::test]
    async fn disconnect_clears_every_attribute() {
        let gateway = gateway();
        gateway.connect().await;
        gateway.disconnect().await;

        let wallet = gateway.wallet().await;
        assert!(!wallet.is_connected);
        assert!(wallet.address.is_none());
        assert!(wallet.balance.is_none());
        assert!(wallet.network.is_none());
    }

    #[tokio::test]
    async fn failure_injection_rejects_payments() {
        let gateway = gateway();
        gateway.connect().await;
        gateway.set_fail_payments(true);

        assert!(gateway.pay(JOB_POSTING_FEE_ETH, TREASURY_ADDRESS).await.is_err());

        gateway.set_fail_payments(false);
        assert!(gateway.pay(JOB_POSTING_FEE_ETH, TREASURY_ADDRESS).await.is_ok());
    }
}
