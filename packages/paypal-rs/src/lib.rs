// https://developer.paypal.com/api/nvp-soap/ipn/IPNImplementation/

use reqwest::{header, Client};

pub const LIVE_VERIFY_URL: &str = "https://ipnpb.paypal.com/cgi-bin/webscr";
pub const SANDBOX_VERIFY_URL: &str = "https://ipnpb.sandbox.paypal.com/cgi-bin/webscr";

#[derive(Debug, Clone)]
pub struct PaypalOptions {
    pub verify_url: String,
}

impl PaypalOptions {
    pub fn live() -> Self {
        Self {
            verify_url: LIVE_VERIFY_URL.to_string(),
        }
    }

    pub fn sandbox() -> Self {
        Self {
            verify_url: SANDBOX_VERIFY_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpnVerification {
    Verified,
    Invalid,
}

#[derive(Debug, Clone)]
pub struct PaypalService {
    options: PaypalOptions,
}

impl PaypalService {
    pub fn new(options: PaypalOptions) -> Self {
        Self { options }
    }

    /// Plays back a received IPN message to PayPal, prefixed with
    /// `cmd=_notify-validate`. PayPal answers with the literal body
    /// `VERIFIED` when the message is authentic and `INVALID` otherwise.
    pub async fn verify_ipn(&self, raw_body: &str) -> Result<IpnVerification, &'static str> {
        let url = self.options.verify_url.clone();

        let mut headers = header::HeaderMap::new();
        headers.insert(
            "Content-Type",
            "application/x-www-form-urlencoded"
                .parse()
                .expect("Header value should parse correctly"),
        );

        let playback = format!("cmd=_notify-validate&{}", raw_body);

        let client = Client::new();
        let res = client
            .post(url)
            .headers(headers)
            .body(playback)
            .send()
            .await;

        match res {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    // Log the error response from PayPal
                    let error_body = response.text().await.unwrap_or_default();
                    eprintln!("PayPal error ({}): {}", status, error_body);
                    return Err("PayPal returned an error");
                }

                match response.text().await {
                    Ok(body) => match body.trim() {
                        "VERIFIED" => Ok(IpnVerification::Verified),
                        "INVALID" => Ok(IpnVerification::Invalid),
                        other => {
                            eprintln!("Unexpected PayPal verification response: {}", other);
                            Err("Unexpected verification response")
                        }
                    },
                    Err(e) => {
                        eprintln!("Failed to read PayPal response: {}", e);
                        Err("Error reading verification response")
                    }
                }
            }
            Err(e) => {
                eprintln!("Request to PayPal failed: {}", e);
                Err("Error verifying IPN")
            }
        }
    }
}
