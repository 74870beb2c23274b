use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-supplied metadata echoed back unmodified by the API on related
/// events. Arbitrary JSON object.
pub type PassThru = Map<String, Value>;

/// Wallet metadata snapshot: id, label, balance, status and (on creation or
/// admin-key reads) the wallet's access keys.
///
/// Snapshots are immutable; fetch again for current state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wal {
    pub id: String,
    pub user_label: String,
    pub created_at: i64,
    pub updated_at: i64,
    /// Balance in satoshis.
    pub balance: i64,
    #[serde(rename = "statusType")]
    pub status_type: StatusType,
    #[serde(rename = "accessKeys", skip_serializing_if = "Option::is_none")]
    pub access_keys: Option<AccessKeys>,
}

/// A wallet-ledger transaction: the wallet-side record of a payment,
/// invoice settlement, or internal transfer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wtx {
    pub num_satoshis: i64,
    pub user_label: String,
    pub created_at: i64,
    pub id: String,
    pub wal: Wal,
    #[serde(rename = "wtxType")]
    pub wtx_type: WtxType,
    /// The Lightning transaction backing this ledger entry.
    #[serde(rename = "lnTx")]
    pub ln_tx: LnTx,
    #[serde(rename = "passThru", skip_serializing_if = "Option::is_none")]
    pub pass_thru: Option<PassThru>,
}

/// A Lightning invoice/payment snapshot.
///
/// This is the unit the freshness and settlement helpers operate on; see
/// [`LnTx::update`](crate::LnTx::update).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LnTx {
    pub id: String,
    pub created_at: i64,
    pub dest_pubkey: String,
    /// BOLT11 payment request string.
    pub payment_request: String,
    pub r_hash_decoded: String,
    pub memo: String,
    pub description_hash: String,
    pub num_satoshis: i64,
    /// Invoice lifetime in seconds.
    pub expiry: i64,
    /// Unix timestamp after which the invoice can no longer be paid.
    pub expires_at: i64,
    pub payment_preimage: String,
    /// 1 once the payment is settled, 0 before.
    pub settled: i64,
    pub settled_at: i64,
    pub is_keysend: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_records: Option<PassThru>,
}

/// A paywall resource snapshot (a monetized short link).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pywl {
    pub destination_url: String,
    pub memo: String,
    pub short_url: String,
    /// Price in satoshis.
    #[serde(rename = "lnd_value")]
    pub num_satoshis: i64,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PassThru>,
    pub id: String,
    pub paywall_link: String,
    #[serde(rename = "custyDomain")]
    pub custy_domain: CustyDomain,
    #[serde(rename = "statusType")]
    pub status_type: StatusType,
    #[serde(rename = "paywallType")]
    pub paywall_type: PaywallType,
    pub template: Template,
    #[serde(rename = "linkExpRule")]
    pub link_exp_rule: LinkExpRule,
}

/// Resource status descriptor (e.g. `wallet` / `active`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusType {
    pub r#type: String,
    pub name: String,
    pub display_name: String,
}

/// Transaction type descriptor (e.g. `ln` / `ln_deposit`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WtxType {
    pub layer: String,
    pub name: String,
    pub display_name: String,
}

/// The per-privilege key sets issued for a wallet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessKeys {
    #[serde(rename = "Wallet Admin")]
    pub wallet_admin: Vec<String>,
    #[serde(rename = "Wallet Invoice")]
    pub wallet_invoice: Vec<String>,
    #[serde(rename = "Wallet Read")]
    pub wallet_read: Vec<String>,
}

/// Custom domain attached to a paywall.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustyDomain {
    pub domain_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaywallType {
    pub name: String,
    pub display_name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    pub layout: String,
}

/// Link expiration rule attached to a paywall.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkExpRule {
    pub r#type: String,
    pub name: String,
    pub display_name: String,
    pub time_minutes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wal_round_trips_field_for_field() {
        let wire = json!({
            "id": "w_hkjS9r6mTYeABc",
            "user_label": "test",
            "created_at": 1577594957,
            "updated_at": 1577595001,
            "balance": 1000,
            "statusType": {
                "type": "wallet",
                "name": "active",
                "display_name": "Active"
            },
            "accessKeys": {
                "Wallet Admin": ["waka_kqvmiPpCHRSK4"],
                "Wallet Invoice": ["waki_ePLAmyLeBQDw6"],
                "Wallet Read": ["wakr_zesUkDZAEjVq4"]
            }
        });

        let wal: Wal = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(wal.id, "w_hkjS9r6mTYeABc");
        assert_eq!(wal.balance, 1000);
        assert_eq!(wal.status_type.name, "active");
        assert_eq!(
            wal.access_keys.as_ref().unwrap().wallet_admin,
            vec!["waka_kqvmiPpCHRSK4"]
        );

        assert_eq!(serde_json::to_value(&wal).unwrap(), wire);
    }

    #[test]
    fn partial_wal_decodes_to_defaults() {
        let wal: Wal = serde_json::from_str(r#"{"id":"w_1","balance":5}"#).unwrap();
        assert_eq!(wal.id, "w_1");
        assert_eq!(wal.user_label, "");
        assert!(wal.access_keys.is_none());
    }

    #[test]
    fn wtx_decodes_nested_lntx_and_passthru() {
        let wire = json!({
            "num_satoshis": 1000,
            "user_label": "coffee",
            "created_at": 1577595000,
            "id": "wtx_SAkz4CHEzz6m7",
            "wal": { "id": "w_hkjS9r6mTYeABc", "balance": 0 },
            "wtxType": { "layer": "ln", "name": "ln_deposit", "display_name": "Lightning deposit" },
            "lnTx": { "id": "lntx_82yveCX2Wn", "num_satoshis": 1000, "memo": "coffee", "settled": 1 },
            "passThru": { "order_id": 42, "tags": ["a", "b"], "gift": true, "note": null }
        });

        let wtx: Wtx = serde_json::from_value(wire).unwrap();
        assert_eq!(wtx.ln_tx.id, "lntx_82yveCX2Wn");
        assert_eq!(wtx.ln_tx.settled, 1);
        assert_eq!(wtx.wtx_type.layer, "ln");

        let pass = wtx.pass_thru.unwrap();
        assert_eq!(pass["order_id"], json!(42));
        assert_eq!(pass["tags"], json!(["a", "b"]));
        assert_eq!(pass["gift"], json!(true));
        assert_eq!(pass["note"], Value::Null);
    }

    #[test]
    fn pywl_amount_uses_lnd_value_key() {
        let wire = json!({
            "destination_url": "https://example.com/article",
            "short_url": "hiya",
            "lnd_value": 500,
            "id": "pywl_gAEvbK3NGVGpT",
            "paywall_link": "https://wl.lnpay.co/hiya",
            "custyDomain": { "domain_name": "wl.lnpay.co" },
            "paywallType": { "name": "standard", "display_name": "Standard", "description": "" },
            "template": { "layout": "default" },
            "linkExpRule": { "type": "exp", "name": "time", "display_name": "Time", "time_minutes": 60 }
        });

        let pywl: Pywl = serde_json::from_value(wire).unwrap();
        assert_eq!(pywl.num_satoshis, 500);
        assert_eq!(pywl.link_exp_rule.time_minutes, 60);
        assert_eq!(pywl.custy_domain.domain_name, "wl.lnpay.co");

        let back = serde_json::to_value(&pywl).unwrap();
        assert_eq!(back["lnd_value"], json!(500));
        assert!(back.get("num_satoshis").is_none());
    }
}
