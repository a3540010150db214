/*
[INPUT]:  Ordered request parameters, timestamp, receive window and API secret
[OUTPUT]: Canonical query string with HMAC-SHA256 signature appended
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or parameter encoding
*/

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use std::fmt;
use url::form_urlencoded;

type HmacSha256 = Hmac<Sha256>;

/// Signs query strings with the account secret
pub struct RequestSigner<'a> {
    secret: &'a SecretString,
}

impl<'a> RequestSigner<'a> {
    pub fn new(secret: &'a SecretString) -> Self {
        Self { secret }
    }

    /// Lowercase hex HMAC-SHA256 of `query`
    pub fn sign(&self, query: &str) -> String {
        sign_query(self.secret.expose_secret(), query)
    }

    /// Append `timestamp` and `recvWindow` to `params`, then sign the result.
    pub fn sign_params(
        &self,
        params: &[(&str, String)],
        timestamp: i64,
        recv_window: u64,
    ) -> SignedQuery {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
            .append_pair("timestamp", &timestamp.to_string())
            .append_pair("recvWindow", &recv_window.to_string())
            .finish();
        let signature = self.sign(&query);
        SignedQuery { query, signature }
    }
}

impl fmt::Debug for RequestSigner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner").finish_non_exhaustive()
    }
}

fn sign_query(secret: &str, query: &str) -> String {
    // HMAC accepts keys of any length
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .unwrap_or_else(|_| unreachable!("HMAC key length is unrestricted"));
    mac.update(query.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// A canonical query and the signature computed over it
#[derive(Clone, PartialEq, Eq)]
pub struct SignedQuery {
    query: String,
    signature: String,
}

impl SignedQuery {
    /// The signed bytes, without the signature; safe to log.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Wire form: `<query>&signature=<hex>`
    pub fn to_body(&self) -> String {
        format!("{}&signature={}", self.query, self.signature)
    }
}

impl fmt::Debug for SignedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedQuery")
            .field("query", &self.query)
            .field("signature", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Example key and request from the Binance API documentation
    const DOC_SECRET: &str = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";

    fn make_secret(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    fn order_params() -> Vec<(&'static str, String)> {
        vec![
            ("symbol", "BTCUSDT".to_string()),
            ("side", "BUY".to_string()),
            ("type", "MARKET".to_string()),
            ("quantity", "0.01".to_string()),
        ]
    }

    #[test]
    fn test_documentation_vector() {
        let secret = make_secret(DOC_SECRET);
        let signer = RequestSigner::new(&secret);
        let query = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";

        assert_eq!(
            signer.sign(query),
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[test]
    fn test_canonical_query_order() {
        let secret = make_secret("s3cr3t");
        let signed = RequestSigner::new(&secret).sign_params(&order_params(), 1_700_000_000_000, 10_000);

        assert_eq!(
            signed.query(),
            "symbol=BTCUSDT&side=BUY&type=MARKET&quantity=0.01&timestamp=1700000000000&recvWindow=10000"
        );
        assert_eq!(signed.signature().len(), 64);
        assert_eq!(
            signed.to_body(),
            format!("{}&signature={}", signed.query(), signed.signature())
        );
    }

    #[test]
    fn test_signing_is_deterministic() {
        let secret = make_secret("s3cr3t");
        let signer = RequestSigner::new(&secret);
        let first = signer.sign_params(&order_params(), 1_700_000_000_000, 10_000);
        let second = signer.sign_params(&order_params(), 1_700_000_000_000, 10_000);
        assert_eq!(first, second);
    }

    #[test]
    fn test_any_field_change_changes_signature() {
        let secret = make_secret("s3cr3t");
        let signer = RequestSigner::new(&secret);
        let base = signer.sign_params(&order_params(), 1_700_000_000_000, 10_000);

        for index in 0..order_params().len() {
            let mut params = order_params();
            params[index].1.push('X');
            let changed = signer.sign_params(&params, 1_700_000_000_000, 10_000);
            assert_ne!(changed.signature(), base.signature(), "field {index}");
        }

        let later = signer.sign_params(&order_params(), 1_700_000_000_001, 10_000);
        assert_ne!(later.signature(), base.signature());

        let wider = signer.sign_params(&order_params(), 1_700_000_000_000, 5_000);
        assert_ne!(wider.signature(), base.signature());

        let other_secret = make_secret("other");
        let other = RequestSigner::new(&other_secret).sign_params(&order_params(), 1_700_000_000_000, 10_000);
        assert_ne!(other.signature(), base.signature());
    }

    #[test]
    fn test_values_are_form_encoded() {
        let secret = make_secret("s3cr3t");
        let params = vec![("note", "a b&c".to_string())];
        let signed = RequestSigner::new(&secret).sign_params(&params, 1, 1);
        assert_eq!(signed.query(), "note=a+b%26c&timestamp=1&recvWindow=1");
    }

    #[test]
    fn test_debug_redacts_signature() {
        let secret = make_secret("s3cr3t");
        let signed = RequestSigner::new(&secret).sign_params(&order_params(), 1, 1);
        let rendered = format!("{signed:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains(signed.signature()));
    }
}
