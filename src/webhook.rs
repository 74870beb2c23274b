//! Webhook payload shapes.
//!
//! LNPay pushes these envelopes to an integrator's endpoint when wallet or
//! paywall events fire. This crate only defines the shapes for decoding; it
//! does not receive or dispatch webhooks.

use serde::{Deserialize, Serialize};

use crate::types::{Pywl, Wal, Wtx};

/// Event name for [`WalletCreatedEvent`].
pub const EVENT_WALLET_CREATED: &str = "wallet_created";
/// Event name for [`WalletSendEvent`].
pub const EVENT_WALLET_SEND: &str = "wallet_send";
/// Event name for [`WalletReceiveEvent`].
pub const EVENT_WALLET_RECEIVE: &str = "wallet_receive";
/// Event names for [`WalletTransferEvent`].
pub const EVENT_WALLET_TRANSFER_IN: &str = "wallet_transfer_in";
pub const EVENT_WALLET_TRANSFER_OUT: &str = "wallet_transfer_out";
/// Event name for [`PaywallCreatedEvent`].
pub const EVENT_PAYWALL_CREATED: &str = "paywall_created";
/// Event name for [`PaywallConversionEvent`].
pub const EVENT_PAYWALL_CONVERSION: &str = "paywall_conversion";

/// Descriptor identifying which event an envelope carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub r#type: String,
    pub name: String,
    pub display_name: String,
}

/// `wallet_created` envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletCreatedEvent {
    pub created_at: i64,
    pub id: String,
    pub event: Event,
    pub data: WalData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalData {
    pub wal: Wal,
}

/// `wallet_send` envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletSendEvent {
    pub created_at: i64,
    pub id: String,
    pub event: Event,
    pub data: WtxData,
}

/// `wallet_receive` envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletReceiveEvent {
    pub created_at: i64,
    pub id: String,
    pub event: Event,
    pub data: WtxData,
}

/// `wallet_transfer_in` / `wallet_transfer_out` envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletTransferEvent {
    pub created_at: i64,
    pub id: String,
    pub event: Event,
    pub data: WtxData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WtxData {
    pub wtx: Wtx,
}

/// `paywall_created` envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaywallCreatedEvent {
    pub created_at: i64,
    pub id: String,
    pub event: Event,
    pub data: PywlData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PywlData {
    pub pywl: Pywl,
}

/// `paywall_conversion` envelope. Carries both the paywall and the wallet
/// transaction that paid it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaywallConversionEvent {
    pub created_at: i64,
    pub id: String,
    pub event: Event,
    pub data: PaywallConversionData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaywallConversionData {
    pub pywl: Pywl,
    pub wtx: Wtx,
}
