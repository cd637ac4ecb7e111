//! Provisioning descriptor builder - the `otpauth://` enrollment URI
//! consumed by authenticator apps:
//! <https://github.com/google/google-authenticator/wiki/Key-Uri-Format>

use url::Url;

use super::OTPAUTH_BASE_URL;
use crate::error::Result;
use crate::hash::HashAlgorithm;

/// Reusable descriptor configuration. One value serves any number of
/// (secret, account) pairs via [`ProvisioningUri::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningUri {
    base_url: String,
    issuer: String,
    algorithm: HashAlgorithm,
    digits: u32,
    period: u64,
}

impl ProvisioningUri {
    pub fn new(
        issuer: impl Into<String>,
        algorithm: HashAlgorithm,
        digits: u32,
        period: u64,
    ) -> Self {
        Self {
            base_url: OTPAUTH_BASE_URL.to_string(),
            issuer: issuer.into(),
            algorithm,
            digits,
            period,
        }
    }

    /// Overrides the `otpauth://totp` base - the only way a
    /// [`CryptoError::DescriptorParse`](crate::CryptoError::DescriptorParse)
    /// can become reachable
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builds the enrollment URI for one secret and account.
    ///
    /// Path is `{issuer}:{account_name}`; query parameters are emitted
    /// in fixed order (secret, issuer, algorithm, digits, period) with
    /// percent-encoded values and the algorithm upper-cased.
    pub fn generate(&self, secret: &str, account_name: &str) -> Result<String> {
        let mut url = Url::parse(&self.base_url)?;

        let label = format!("{}:{}", self.issuer, account_name);
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithoutBase)?
            .push(&label);

        url.query_pairs_mut()
            .append_pair("secret", secret)
            .append_pair("issuer", &self.issuer)
            .append_pair("algorithm", self.algorithm.name())
            .append_pair("digits", &self.digits.to_string())
            .append_pair("period", &self.period.to_string());

        Ok(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_format() {
        let uri = ProvisioningUri::new("Acme", HashAlgorithm::Sha1, 6, 30);
        let generated = uri.generate("ABC123", "alice").unwrap();
        assert_eq!(
            generated,
            "otpauth://totp/Acme:alice?secret=ABC123&issuer=Acme&algorithm=SHA1&digits=6&period=30"
        );
    }

    #[test]
    fn test_label_decodes_to_issuer_and_account() {
        let uri = ProvisioningUri::new("Acme Corp", HashAlgorithm::Sha1, 6, 30);
        let generated = uri.generate("ABC123", "alice").unwrap();

        let parsed = Url::parse(&generated).unwrap();
        assert_eq!(parsed.scheme(), "otpauth");
        assert_eq!(parsed.host_str(), Some("totp"));
        let segment = parsed.path_segments().unwrap().next().unwrap();
        let decoded = percent_decode(segment);
        assert_eq!(decoded, "Acme Corp:alice");
    }

    #[test]
    fn test_query_parameters_and_order() {
        let uri = ProvisioningUri::new("Acme", HashAlgorithm::Sha256, 8, 60);
        let generated = uri.generate("GEZDGNBV", "bob@example.com").unwrap();

        let parsed = Url::parse(&generated).unwrap();
        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("secret".into(), "GEZDGNBV".into()),
                ("issuer".into(), "Acme".into()),
                ("algorithm".into(), "SHA256".into()),
                ("digits".into(), "8".into()),
                ("period".into(), "60".into()),
            ]
        );
    }

    #[test]
    fn test_reusable_across_accounts() {
        let uri = ProvisioningUri::new("Acme", HashAlgorithm::Sha1, 6, 30);
        let a = uri.generate("SECRETA", "alice").unwrap();
        let b = uri.generate("SECRETB", "bob").unwrap();
        assert!(a.contains("Acme:alice"));
        assert!(b.contains("Acme:bob"));
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let uri = ProvisioningUri::new("Acme", HashAlgorithm::Sha1, 6, 30)
            .with_base_url("not a url");
        assert!(uri.generate("ABC", "alice").is_err());
    }

    fn percent_decode(s: &str) -> String {
        let bytes = s.as_bytes();
        let mut out = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'%' && i + 2 < bytes.len() {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).unwrap();
                out.push(u8::from_str_radix(hex, 16).unwrap());
                i += 3;
            } else {
                out.push(bytes[i]);
                i += 1;
            }
        }
        String::from_utf8(out).unwrap()
    }
}
