use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::LnPayError;
use crate::types::{LnTx, PassThru, Wal, Wtx};

/// Handle on one LNPay wallet: a [`Client`] plus the wallet key and the
/// resource URL derived from it.
///
/// Obtained from [`Client::wallet`] (no network call). Whether an operation
/// is permitted depends on the key's privilege level (admin, invoice or
/// read-only), which is opaque to this client and enforced remotely.
#[derive(Debug, Clone)]
pub struct Wallet {
    client: Client,
    key: String,
    url: String,
}

impl Wallet {
    pub(crate) fn new(client: Client, key: &str) -> Self {
        let url = format!("{}/wallet/{}", client.base_url(), key);
        Self {
            client,
            key: key.to_string(),
            url,
        }
    }

    /// The wallet key this handle was built from.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Basic wallet information: id, label, balance, status.
    ///
    /// `GET /wallet/{key}`
    pub async fn details(&self) -> Result<Wal, LnPayError> {
        self.client
            .request(Method::GET, &self.url, None::<&()>)
            .await
    }

    /// The wallet's ledger transactions, in the order the server returns
    /// them.
    ///
    /// `GET /wallet/{key}/transactions`
    pub async fn transactions(&self) -> Result<Vec<Wtx>, LnPayError> {
        let url = format!("{}/transactions", self.url);
        self.client.request(Method::GET, &url, None::<&()>).await
    }

    /// Generate an invoice against this wallet.
    ///
    /// `POST /wallet/{key}/invoice`
    pub async fn invoice(&self, params: &InvoiceParams) -> Result<LnTx, LnPayError> {
        let url = format!("{}/invoice", self.url);
        self.client.request(Method::POST, &url, Some(params)).await
    }

    /// Pay a BOLT11 invoice with funds from this wallet.
    ///
    /// `POST /wallet/{key}/withdraw`
    pub async fn pay(&self, params: &PayParams) -> Result<Wtx, LnPayError> {
        let url = format!("{}/withdraw", self.url);
        self.client.request(Method::POST, &url, Some(params)).await
    }

    /// Transfer satoshis to another LNPay wallet.
    ///
    /// `POST /wallet/{key}/transfer`
    pub async fn transfer(&self, params: &TransferParams) -> Result<Wtx, LnPayError> {
        let url = format!("{}/transfer", self.url);
        self.client.request(Method::POST, &url, Some(params)).await
    }
}

/// Body for [`Wallet::invoice`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceParams {
    /// Invoice description. Ignored by the server when `description_hash`
    /// is set.
    pub memo: String,
    /// Invoice amount in satoshis.
    pub num_satoshis: i64,
    /// Invoice lifetime in seconds. Server default is 86400 (one day) when
    /// omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<i64>,
    /// Custom data to associate with the invoice; echoed back on related
    /// events.
    #[serde(rename = "passThru", skip_serializing_if = "Option::is_none")]
    pub pass_thru: Option<PassThru>,
    /// Base64-encoded description hash. Leave unset unless you know you
    /// need it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_hash: Option<String>,
}

/// Body for [`Wallet::pay`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayParams {
    /// The BOLT11 payment request to pay.
    pub payment_request: String,
    #[serde(rename = "passThru", skip_serializing_if = "Option::is_none")]
    pub pass_thru: Option<PassThru>,
}

/// Body for [`Wallet::transfer`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferParams {
    /// Transfer description.
    pub memo: String,
    /// Transfer amount in satoshis.
    pub num_satoshis: i64,
    /// Key or id of the destination wallet.
    pub dest_wallet_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invoice_params_omit_unset_optionals() {
        let params = InvoiceParams {
            memo: "coffee".into(),
            num_satoshis: 1000,
            ..Default::default()
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body, json!({ "memo": "coffee", "num_satoshis": 1000 }));
    }

    #[test]
    fn invoice_params_keep_wire_keys() {
        let mut pass = PassThru::new();
        pass.insert("order_id".into(), json!(7));
        let params = InvoiceParams {
            memo: "ignored".into(),
            num_satoshis: 21,
            expiry: Some(3600),
            pass_thru: Some(pass),
            description_hash: Some("aGVsbG8=".into()),
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["expiry"], json!(3600));
        assert_eq!(body["passThru"]["order_id"], json!(7));
        assert_eq!(body["description_hash"], json!("aGVsbG8="));
    }

    #[test]
    fn transfer_params_wire_shape() {
        let params = TransferParams {
            memo: "rent".into(),
            num_satoshis: 50_000,
            dest_wallet_id: "w_Eexpi6bSLY9zBz".into(),
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "memo": "rent",
                "num_satoshis": 50_000,
                "dest_wallet_id": "w_Eexpi6bSLY9zBz"
            })
        );
    }
}
