//! Outcome Redirect URLs
//!
//! Builders for the success/cancel URLs handed to the payment provider so
//! the payer lands back on our own pages after checkout.

use rust_decimal::Decimal;
use url::Url;

use crate::error::{PaymentError, Result};

/// Success URL carrying the receipt parameters.
pub fn success_url(
    base: &str,
    reservation_id: Option<&str>,
    net: Decimal,
    gross: Decimal,
    provider: &str,
) -> Result<String> {
    let mut url = join(base, "success")?;
    url.query_pairs_mut()
        .append_pair("res", reservation_id.unwrap_or(""))
        .append_pair("net", &format!("{net:.2}"))
        .append_pair("gross", &format!("{gross:.2}"))
        .append_pair("provider", provider);
    Ok(url.into())
}

/// Cancel URL carrying the booking reference.
pub fn cancel_url(base: &str, reservation_id: Option<&str>) -> Result<String> {
    let mut url = join(base, "cancel")?;
    url.query_pairs_mut()
        .append_pair("res", reservation_id.unwrap_or(""));
    Ok(url.into())
}

fn join(base: &str, path: &str) -> Result<Url> {
    let joined = format!("{}/{}", base.trim_end_matches('/'), path);
    Url::parse(&joined).map_err(|e| PaymentError::BadUrl(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_success_url() {
        let url = success_url(
            "http://localhost:10000",
            Some("TEST123"),
            dec!(30),
            dec!(30.68),
            "stripe",
        )
        .unwrap();
        assert_eq!(
            url,
            "http://localhost:10000/success?res=TEST123&net=30.00&gross=30.68&provider=stripe"
        );
    }

    #[test]
    fn test_reservation_id_is_percent_encoded() {
        let url = success_url(
            "http://localhost:10000",
            Some("A&B #7"),
            dec!(10),
            dec!(10.50),
            "stripe",
        )
        .unwrap();
        assert!(url.contains("res=A%26B+%237"));
    }

    #[test]
    fn test_cancel_url_without_reservation() {
        let url = cancel_url("http://localhost:10000", None).unwrap();
        assert_eq!(url, "http://localhost:10000/cancel?res=");
    }

    #[test]
    fn test_trailing_slash_on_base() {
        let url = cancel_url("https://tax.example.com/", Some("X")).unwrap();
        assert_eq!(url, "https://tax.example.com/cancel?res=X");
    }

    #[test]
    fn test_bad_base_url() {
        assert!(cancel_url("not a url", None).is_err());
    }
}
