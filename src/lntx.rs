use std::time::{SystemTime, UNIX_EPOCH};

use crate::client::Client;
use crate::error::LnPayError;
use crate::types::LnTx;

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

impl LnTx {
    /// Re-fetch this transaction by id and replace the snapshot if anything
    /// changed.
    ///
    /// Compares the fetched snapshot field-for-field against `self`; on any
    /// difference the receiver is replaced wholesale and `true` is returned.
    /// An identical snapshot leaves the receiver untouched and returns
    /// `false`. Fails only if the re-fetch fails.
    pub async fn update(&mut self, client: &Client) -> Result<bool, LnPayError> {
        let fresh = client.transaction(&self.id).await?;
        if *self != fresh {
            *self = fresh;
            return Ok(true);
        }
        Ok(false)
    }

    /// Whether the invoice's expiry timestamp has passed. A timestamp equal
    /// to the current second is not yet expired.
    pub fn expired(&self) -> bool {
        self.expires_at < unix_now()
    }

    /// Best-effort settlement check. Only re-fetches when the current
    /// snapshot is unsettled; after a re-fetch that changed the snapshot,
    /// reports whether it now shows settled.
    ///
    /// Two caveats: a re-fetch
    /// failure is absorbed and reported as `false` (indistinguishable from a
    /// genuinely unsettled payment), and a snapshot already marked settled
    /// also returns `false` because only unsettled transactions are
    /// re-checked. Call [`LnTx::update`] directly when you need to tell a
    /// failed check apart from an unsettled one.
    pub async fn is_settled(&mut self, client: &Client) -> bool {
        if self.settled == 0 {
            match self.update(client).await {
                Ok(true) => return self.settled == 1,
                Ok(false) | Err(_) => return false,
            }
        }
        false
    }
}
