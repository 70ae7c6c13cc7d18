//! Domain types for user operations.

/// Customer type: sponsor. Documentation only; the remote API validates
/// the range.
pub const CUSTOMER_TYPE_SPONSOR: i64 = 1;
/// Customer type: minor.
pub const CUSTOMER_TYPE_MINOR: i64 = 2;

/// Relationship: parent.
pub const RELATIONSHIP_PARENT: i64 = 1;
/// Relationship: child.
pub const RELATIONSHIP_CHILD: i64 = 2;
/// Relationship: other.
pub const RELATIONSHIP_OTHER: i64 = 3;

/// Caller-supplied fields of a user creation request.
///
/// The email, SSN, and formatted birth date are derived by the client
/// before dispatch and are never supplied directly.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    /// Birth date as an 8-digit `YYYYMMDD` integer, e.g. `19900115`.
    pub date_of_birth: u32,
    /// One of the `CUSTOMER_TYPE_*` constants; any integer is forwarded.
    pub customer_type: i64,
    /// One of the `RELATIONSHIP_*` constants; any integer is forwarded.
    pub relationship: i64,
}

/// A fetched user record: a generic mapping from field name to value.
///
/// The remote API's record schema is not pinned down by this client, so
/// fields are surfaced as-is without interpretation.
pub type UserRecord = serde_json::Map<String, serde_json::Value>;
