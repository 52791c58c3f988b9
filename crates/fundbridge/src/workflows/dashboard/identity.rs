use axum::http::{HeaderMap, HeaderName};
use serde::{Deserialize, Serialize};

/// Identity claims handed over by the auth gateway. Read only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedIdentity {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
}

impl DecodedIdentity {
    pub fn new(name: Option<&str>, user_type: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            user_type: user_type.map(str::to_string),
        }
    }

    /// Parse the JSON claims document produced by the gateway. Only a JSON
    /// object is a claims record; arrays and scalars are rejected.
    pub fn from_json(raw: &str) -> Result<Self, IdentityError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(IdentityError::Malformed)?;
        if !value.is_object() {
            return Err(IdentityError::NotAnObject);
        }
        serde_json::from_value(value).map_err(IdentityError::Malformed)
    }
}

/// Source of the current user's decoded identity.
pub trait IdentityProvider: Send + Sync {
    /// `Ok(None)` means nobody is signed in.
    fn current_identity(&self) -> Result<Option<DecodedIdentity>, IdentityError>;
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity header `{0}` is not valid visible ASCII")]
    Encoding(HeaderName),
    #[error("identity claims are malformed: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("identity claims must be a JSON object")]
    NotAnObject,
}

/// Provider returning a fixed identity; used by the CLI and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(pub Option<DecodedIdentity>);

impl IdentityProvider for StaticIdentity {
    fn current_identity(&self) -> Result<Option<DecodedIdentity>, IdentityError> {
        Ok(self.0.clone())
    }
}

/// Provider over a raw JSON claims document, e.g. one passed on the command line.
#[derive(Debug, Clone, Default)]
pub struct ClaimsJson(pub Option<String>);

impl IdentityProvider for ClaimsJson {
    fn current_identity(&self) -> Result<Option<DecodedIdentity>, IdentityError> {
        self.0
            .as_deref()
            .map(DecodedIdentity::from_json)
            .transpose()
    }
}

/// Reads the gateway's claims header from an incoming request.
#[derive(Debug)]
pub struct HeaderIdentity<'a> {
    headers: &'a HeaderMap,
    header: &'a HeaderName,
}

impl<'a> HeaderIdentity<'a> {
    pub fn new(headers: &'a HeaderMap, header: &'a HeaderName) -> Self {
        Self { headers, header }
    }
}

impl IdentityProvider for HeaderIdentity<'_> {
    fn current_identity(&self) -> Result<Option<DecodedIdentity>, IdentityError> {
        let Some(value) = self.headers.get(self.header) else {
            return Ok(None);
        };
        let raw = value
            .to_str()
            .map_err(|_| IdentityError::Encoding(self.header.clone()))?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        DecodedIdentity::from_json(raw).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn header() -> HeaderName {
        HeaderName::from_static("x-decoded-identity")
    }

    #[test]
    fn raw_claims_provider_parses_lazily() {
        assert!(ClaimsJson(None).current_identity().expect("no claims").is_none());
        assert!(ClaimsJson(Some("[]".to_string())).current_identity().is_err());
    }

    #[test]
    fn array_claims_are_not_an_identity() {
        let err = DecodedIdentity::from_json(r#"["Mallory","startup"]"#)
            .expect_err("positional claims are not a record");
        assert!(matches!(err, IdentityError::NotAnObject));
        assert!(matches!(
            DecodedIdentity::from_json("\"startup\""),
            Err(IdentityError::NotAnObject)
        ));
    }

    #[test]
    fn missing_header_means_anonymous() {
        let headers = HeaderMap::new();
        let name = header();
        let provider = HeaderIdentity::new(&headers, &name);
        assert!(provider.current_identity().expect("no error").is_none());
    }

    #[test]
    fn parses_claims_and_ignores_extra_fields() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header(),
            HeaderValue::from_static(r#"{"name":"Asha","userType":"startup","exp":1700000000}"#),
        );
        let name = header();

        let identity = HeaderIdentity::new(&headers, &name)
            .current_identity()
            .expect("valid claims")
            .expect("identity present");

        assert_eq!(identity, DecodedIdentity::new(Some("Asha"), Some("startup")));
    }

    #[test]
    fn malformed_claims_are_errors() {
        let mut headers = HeaderMap::new();
        headers.insert(header(), HeaderValue::from_static("eyJhbGciOi.not-json"));
        let name = header();

        let err = HeaderIdentity::new(&headers, &name)
            .current_identity()
            .expect_err("not json");
        assert!(matches!(err, IdentityError::Malformed(_)));
    }

    #[test]
    fn non_ascii_header_is_an_encoding_error() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header(),
            HeaderValue::from_bytes(b"{\"name\":\"\xe0\xa4\x85\"}").expect("opaque bytes allowed"),
        );
        let name = header();

        let err = HeaderIdentity::new(&headers, &name)
            .current_identity()
            .expect_err("not visible ascii");
        assert!(matches!(err, IdentityError::Encoding(_)));
    }
}
