// src/web/handlers/wallet_handlers.rs
use rocket::serde::json::Json;
use rocket::State;

use crate::types::{ActionResponse, DataResponse, WalletConnection};
use crate::wallet::PaymentGateway;

pub async fn connect_wallet_handler(
    gateway: &State<PaymentGateway>,
) -> Json<DataResponse<WalletConnection>> {
    gateway.connect().await;
    Json(DataResponse::success(
        "Wallet connected".to_string(),
        gateway.wallet().await,
    ))
}

pub async fn disconnect_wallet_handler(gateway: &State<PaymentGateway>) -> Json<ActionResponse> {
    gateway.disconnect().await;
    Json(ActionResponse::success(
        "Wallet disconnected".to_string(),
        "disconnected".to_string(),
    ))
}

pub async fn wallet_status_handler(
    gateway: &State<PaymentGateway>,
) -> Json<DataResponse<WalletConnection>> {
    Json(DataResponse::success(
        "Current wallet state".to_string(),
        gateway.wallet().await,
    ))
}
