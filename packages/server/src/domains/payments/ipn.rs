//! IPN processing - gateway verification and charge dispatch
//!
//! Runs after the webhook has already answered 200. Every exit path from
//! here is a log line: the sender got its acknowledgement long ago.

use std::collections::HashMap;

use tracing::{error, info, warn};

use crate::kernel::ServerDeps;

/// Fields of interest parsed from a form-encoded IPN body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IpnFields {
    /// Payment lifecycle state; only "Completed" triggers a charge
    pub payment_status: Option<String>,
    /// Correlation token we attached when the payment was initiated
    pub custom: Option<String>,
    /// PayPal's transaction id
    pub txn_id: Option<String>,
    /// Gross amount, as formatted by PayPal
    pub mc_gross: Option<String>,
}

/// Pull the interesting fields out of a raw IPN body.
///
/// Unknown fields are ignored; repeated fields keep the last value, which
/// is how the form itself would decode.
pub fn parse_ipn_fields(raw_body: &str) -> IpnFields {
    let mut pairs: HashMap<String, String> = url::form_urlencoded::parse(raw_body.as_bytes())
        .into_owned()
        .collect();

    IpnFields {
        payment_status: pairs.remove("payment_status"),
        custom: pairs.remove("custom"),
        txn_id: pairs.remove("txn_id"),
        mc_gross: pairs.remove("mc_gross"),
    }
}

/// Verify a notification with the gateway and hand completed charges to the
/// charge notifier.
///
/// Order matters: the raw body goes back to the gateway for authentication
/// BEFORE any field of it is trusted. Unverified or non-Completed messages
/// are dropped with a log line.
pub async fn process_notification(raw_body: String, deps: &ServerDeps) {
    let verified = match deps.payment_gateway.verify_ipn(&raw_body).await {
        Ok(verified) => verified,
        Err(e) => {
            error!(error = %e, "IPN verification request failed");
            return;
        }
    };

    if !verified {
        warn!("discarding IPN the gateway would not verify");
        return;
    }

    let fields = parse_ipn_fields(&raw_body);

    match fields.payment_status.as_deref() {
        Some("Completed") => {}
        other => {
            info!(payment_status = ?other, "ignoring IPN with non-completed status");
            return;
        }
    }

    let (Some(custom), Some(txn_id)) = (fields.custom.as_deref(), fields.txn_id.as_deref()) else {
        warn!("completed IPN missing custom reference or txn_id");
        return;
    };

    info!(
        reference = custom,
        transaction_id = txn_id,
        amount = ?fields.mc_gross,
        "verified completed payment"
    );

    if let Err(e) = deps.charge_notifier.charge_succeeded(custom, txn_id).await {
        error!(error = %e, reference = custom, "charge notifier failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_extracts_known_fields() {
        let fields = parse_ipn_fields(
            "payment_status=Completed&custom=ref-42&txn_id=9XY12345AB&mc_gross=50.00&other=x",
        );

        assert_eq!(fields.payment_status.as_deref(), Some("Completed"));
        assert_eq!(fields.custom.as_deref(), Some("ref-42"));
        assert_eq!(fields.txn_id.as_deref(), Some("9XY12345AB"));
        assert_eq!(fields.mc_gross.as_deref(), Some("50.00"));
    }

    #[test]
    fn parse_decodes_url_escapes() {
        let fields = parse_ipn_fields("payment_status=Completed&custom=order%2042");
        assert_eq!(fields.custom.as_deref(), Some("order 42"));
    }

    #[test]
    fn parse_tolerates_missing_fields() {
        let fields = parse_ipn_fields("mc_currency=AUD");
        assert_eq!(fields, IpnFields::default());
    }
}
