//! User-management operations built on the transport client.

use rand::Rng;
use tracing::instrument;

use um_client::{ApiResponse, ClientConfig, EndpointConfig, HttpApiClient, ParamSet};

use crate::error::{Error, ErrorKind, Result};
use crate::types::{NewUser, UserRecord};

/// Client for user-management domain operations.
///
/// Wraps a single long-lived [`HttpApiClient`]; the underlying connection
/// pool is shared across all operations and across clones.
///
/// # Example
///
/// ```rust,ignore
/// use um_users::{NewUser, UserClient};
///
/// let client = UserClient::new(endpoint)?;
/// client.create_user(&new_user).await?;
/// let record = client.user_by_id(42).await?;
/// ```
#[derive(Debug, Clone)]
pub struct UserClient {
    client: HttpApiClient,
}

impl UserClient {
    /// Create a new user client with default HTTP configuration.
    pub fn new(endpoint: EndpointConfig) -> Result<Self> {
        let client = HttpApiClient::new(endpoint)?;
        Ok(Self { client })
    }

    /// Create a new user client with custom HTTP configuration.
    pub fn with_config(endpoint: EndpointConfig, config: ClientConfig) -> Result<Self> {
        let client = HttpApiClient::with_config(endpoint, config)?;
        Ok(Self { client })
    }

    /// Create a user client from an existing transport client.
    pub fn from_client(client: HttpApiClient) -> Self {
        Self { client }
    }

    /// Get the underlying transport client.
    pub fn inner(&self) -> &HttpApiClient {
        &self.client
    }

    /// Create a new user.
    ///
    /// Derives the email from the first and last name, generates a random
    /// 8-digit SSN, reformats the birth date, and submits everything as an
    /// authenticated form POST to `createUser`. Succeeds only on a 201
    /// response; any other status carries the observed status and raw body.
    #[instrument(skip(self, user), fields(first_name = %user.first_name, last_name = %user.last_name))]
    pub async fn create_user(&self, user: &NewUser) -> Result<()> {
        let mut params = ParamSet::new();
        params.insert("firstName", user.first_name.as_str());
        params.insert("lastName", user.last_name.as_str());
        params.insert("email", derive_email(&user.first_name, &user.last_name));
        params.insert("ssn", random_ssn());
        params.insert("address", user.address.as_str());
        params.insert("dateOfBirth", format_birth_date(user.date_of_birth)?);
        params.insert("customerType", user.customer_type);
        params.insert("relationshipEnum", user.relationship);

        let response = self.client.post_authenticated("createUser", params).await?;
        if response.is_created() {
            Ok(())
        } else {
            Err(Error::new(ErrorKind::UserCreation {
                status: response.status(),
                body: response.into_body(),
            }))
        }
    }

    /// Fetch a user record by database id via `GET user/{id}`.
    #[instrument(skip(self))]
    pub async fn user_by_id(&self, user_id: u64) -> Result<UserRecord> {
        let response = self.client.get(&format!("user/{}", user_id)).await?;
        parse_record(response)
    }

    /// Fetch a user record by first and last name via
    /// `GET user?firstName=...&lastName=...`.
    ///
    /// Both values are percent-encoded before being placed in the query
    /// string.
    #[instrument(skip(self))]
    pub async fn user_by_name(&self, first_name: &str, last_name: &str) -> Result<UserRecord> {
        let path = format!(
            "user?firstName={}&lastName={}",
            urlencoding::encode(first_name),
            urlencoding::encode(last_name)
        );
        let response = self.client.get(&path).await?;
        parse_record(response)
    }
}

/// Derive a user email from the first and last name. The parts are joined
/// verbatim, without sanitization of special characters.
fn derive_email(first_name: &str, last_name: &str) -> String {
    format!("{}{}@example.com", first_name, last_name)
}

/// Generate a uniformly random 8-digit SSN in [10000000, 99999999].
pub fn random_ssn() -> i64 {
    rand::rng().random_range(10_000_000..=99_999_999)
}

/// Reformat an 8-digit `YYYYMMDD` integer as `MM/DD/YYYY` with leading
/// zeros.
///
/// Fails when the value is not exactly 8 digits or does not name a real
/// calendar date (month out of 1-12, day out of range for the month).
pub fn format_birth_date(date: u32) -> Result<String> {
    if !(10_000_000..=99_999_999).contains(&date) {
        return Err(Error::new(ErrorKind::InvalidDate(format!(
            "{} is not an 8-digit YYYYMMDD value",
            date
        ))));
    }

    let year = date / 10_000;
    let month = (date / 100) % 100;
    let day = date % 100;

    chrono::NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| {
        Error::new(ErrorKind::InvalidDate(format!(
            "{} is not a calendar date",
            date
        )))
    })?;

    Ok(format!("{:02}/{:02}/{:04}", month, day, year))
}

/// Interpret a fetch response as a user record.
///
/// The record schema is a generic field mapping: an empty success body is
/// an empty record, a JSON object maps field names to values, and anything
/// else is a decode error.
fn parse_record(response: ApiResponse) -> Result<UserRecord> {
    if !response.is_success() {
        return Err(Error::new(ErrorKind::Api {
            status: response.status(),
            body: response.into_body(),
        }));
    }

    let body = response.into_body();
    if body.trim().is_empty() {
        return Ok(UserRecord::new());
    }

    match serde_json::from_str(&body)? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(Error::new(ErrorKind::Decode(format!(
            "expected a JSON object, got {}",
            value_kind(&other)
        )))),
    }
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> UserClient {
        let endpoint = EndpointConfig::new(server.uri(), "admin", "pw").unwrap();
        UserClient::new(endpoint).unwrap()
    }

    fn sample_user() -> NewUser {
        NewUser {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            address: "1 Main St".to_string(),
            date_of_birth: 19900115,
            customer_type: crate::CUSTOMER_TYPE_SPONSOR,
            relationship: crate::RELATIONSHIP_PARENT,
        }
    }

    async fn mount_auth(server: &MockServer, key: &str) {
        Mock::given(method("POST"))
            .and(path("/auth"))
            .respond_with(ResponseTemplate::new(200).set_body_string(key))
            .mount(server)
            .await;
    }

    #[test]
    fn test_format_birth_date_valid() {
        assert_eq!(format_birth_date(19900115).unwrap(), "01/15/1990");
        assert_eq!(format_birth_date(20001231).unwrap(), "12/31/2000");
        assert_eq!(format_birth_date(20050203).unwrap(), "02/03/2005");
        // Leap day
        assert_eq!(format_birth_date(20240229).unwrap(), "02/29/2024");
    }

    #[test]
    fn test_format_birth_date_rejects_calendar_violations() {
        // Month 13
        let err = format_birth_date(20231332).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidDate(_)));

        // Feb 30
        let err = format_birth_date(20230230).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidDate(_)));

        // Feb 29 outside a leap year
        let err = format_birth_date(20230229).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidDate(_)));

        // Day 0
        let err = format_birth_date(20230100).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidDate(_)));
    }

    #[test]
    fn test_format_birth_date_rejects_wrong_digit_count() {
        assert!(matches!(
            format_birth_date(1234567).unwrap_err().kind,
            ErrorKind::InvalidDate(_)
        ));
        assert!(matches!(
            format_birth_date(123456789).unwrap_err().kind,
            ErrorKind::InvalidDate(_)
        ));
        assert!(matches!(
            format_birth_date(0).unwrap_err().kind,
            ErrorKind::InvalidDate(_)
        ));
    }

    #[test]
    fn test_random_ssn_stays_in_range() {
        for _ in 0..10_000 {
            let ssn = random_ssn();
            assert!((10_000_000..=99_999_999).contains(&ssn), "ssn={}", ssn);
        }
    }

    #[test]
    fn test_derive_email() {
        assert_eq!(derive_email("Ann", "Lee"), "AnnLee@example.com");
        // No sanitization of special characters
        assert_eq!(derive_email("ann+x", "o'brien"), "ann+xo'brien@example.com");
    }

    #[tokio::test]
    async fn test_create_user_sends_derived_fields() {
        let mock_server = MockServer::start().await;
        mount_auth(&mock_server, "abc123").await;

        Mock::given(method("POST"))
            .and(path("/createUser"))
            .and(body_string_contains("firstName=Ann"))
            .and(body_string_contains("lastName=Lee"))
            .and(body_string_contains("email=AnnLee%40example.com"))
            .and(body_string_contains("ssn="))
            .and(body_string_contains("address=1+Main+St"))
            .and(body_string_contains("dateOfBirth=01%2F15%2F1990"))
            .and(body_string_contains("customerType=1"))
            .and(body_string_contains("relationshipEnum=1"))
            .and(body_string_contains("secretKey=abc123"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&mock_server)
            .await;

        client_for(&mock_server)
            .create_user(&sample_user())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_user_non_created_status() {
        let mock_server = MockServer::start().await;
        mount_auth(&mock_server, "abc123").await;

        Mock::given(method("POST"))
            .and(path("/createUser"))
            .respond_with(ResponseTemplate::new(400).set_body_string("duplicate ssn"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .create_user(&sample_user())
            .await
            .unwrap_err();

        match err.kind {
            ErrorKind::UserCreation { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "duplicate ssn");
            }
            other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_user_server_error_status() {
        let mock_server = MockServer::start().await;
        mount_auth(&mock_server, "abc123").await;

        Mock::given(method("POST"))
            .and(path("/createUser"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .create_user(&sample_user())
            .await
            .unwrap_err();

        assert!(matches!(
            err.kind,
            ErrorKind::UserCreation { status: 500, .. }
        ));
    }

    #[tokio::test]
    async fn test_create_user_rejects_bad_date_before_any_request() {
        // No mocks mounted: a malformed date must fail before dispatch.
        let mock_server = MockServer::start().await;
        let mut user = sample_user();
        user.date_of_birth = 20231332;

        let err = client_for(&mock_server)
            .create_user(&user)
            .await
            .unwrap_err();

        assert!(matches!(err.kind, ErrorKind::InvalidDate(_)));
    }

    #[tokio::test]
    async fn test_user_by_id_parses_field_mapping() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user/7"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"id":7,"firstName":"Ann","lastName":"Lee"}"#,
            ))
            .mount(&mock_server)
            .await;

        let record = client_for(&mock_server).user_by_id(7).await.unwrap();

        assert_eq!(record["id"], 7);
        assert_eq!(record["firstName"], "Ann");
        assert_eq!(record["lastName"], "Lee");
    }

    #[tokio::test]
    async fn test_user_by_id_empty_body_is_empty_record() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user/7"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let record = client_for(&mock_server).user_by_id(7).await.unwrap();
        assert!(record.is_empty());
    }

    #[tokio::test]
    async fn test_user_by_id_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user/9999"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such user"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).user_by_id(9999).await.unwrap_err();

        match err.kind {
            ErrorKind::Api { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "no such user");
            }
            other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_user_by_name_encodes_query_values() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user"))
            .and(query_param("firstName", "Ann Mary"))
            .and(query_param("lastName", "O'Neil & Co"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"firstName":"Ann Mary"}"#),
            )
            .mount(&mock_server)
            .await;

        let record = client_for(&mock_server)
            .user_by_name("Ann Mary", "O'Neil & Co")
            .await
            .unwrap();

        assert_eq!(record["firstName"], "Ann Mary");
    }

    #[tokio::test]
    async fn test_user_by_name_rejects_non_object_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[1,2,3]"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .user_by_name("Ann", "Lee")
            .await
            .unwrap_err();

        assert!(matches!(err.kind, ErrorKind::Decode(_)));
    }
}
