//! Typed client for the [LNPay.co](https://lnpay.co) Lightning Network
//! wallet API.
//!
//! Every operation is one HTTP round trip: the request is sent with the
//! caller's API key, the status is checked, and the JSON body is decoded
//! into a typed value. Status 300 and above decodes into [`ApiError`]
//! instead. No retries, no timeouts, no caching — layer those externally if
//! you need them.
//!
//! # Quick example
//!
//! ```no_run
//! use lnpay::{Client, InvoiceParams};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), lnpay::LnPayError> {
//! let client = Client::new("sak_YOUR_KEY");
//!
//! let created = client.create_wallet("shop").await?;
//! let admin_key = &created.access_keys.as_ref().unwrap().wallet_admin[0];
//!
//! let wallet = client.wallet(admin_key);
//! let invoice = wallet
//!     .invoice(&InvoiceParams {
//!         memo: "coffee".into(),
//!         num_satoshis: 1000,
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("pay this: {}", invoice.payment_request);
//! # Ok(())
//! # }
//! ```
//!
//! Webhook payload shapes LNPay may push to your endpoint live in
//! [`webhook`]; this crate only defines them for decoding.

pub mod client;
pub mod error;
mod lntx;
pub mod types;
pub mod wallet;
pub mod webhook;

pub use client::{Client, DEFAULT_BASE_URL};
pub use error::{ApiError, LnPayError};
pub use types::{
    AccessKeys, CustyDomain, LinkExpRule, LnTx, PassThru, PaywallType, Pywl, StatusType, Template,
    Wal, Wtx, WtxType,
};
pub use wallet::{InvoiceParams, PayParams, TransferParams, Wallet};
pub use webhook::Event;
