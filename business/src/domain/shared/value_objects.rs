/// Opaque identifier of the caller of an RPC.
/// Only used for logging, never for selection logic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier of a product in the storefront catalog.
///
/// Always non-empty. Two ids are the same product only if their strings are
/// byte-for-byte equal (no trimming or case folding).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(String);

impl ProductId {
    /// Returns `None` when the identifier is empty or whitespace only.
    pub fn parse(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return None;
        }
        Some(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_user_id_from_str() {
        let user_id = UserId::new("user-456");
        assert_eq!(user_id.as_str(), "user-456");
    }

    #[test]
    fn should_display_user_id() {
        let user_id = UserId::new("test-user");
        assert_eq!(format!("{}", user_id), "test-user");
    }

    #[test]
    fn should_convert_user_id_from_string() {
        let user_id: UserId = "from-string".to_string().into();
        assert_eq!(user_id.as_str(), "from-string");
    }

    #[test]
    fn should_parse_product_id() {
        let id = ProductId::parse("OLJCESPC7Z").unwrap();
        assert_eq!(id.as_str(), "OLJCESPC7Z");
        assert_eq!(id.to_string(), "OLJCESPC7Z");
    }

    #[test]
    fn should_reject_blank_product_id() {
        assert!(ProductId::parse("").is_none());
        assert!(ProductId::parse("   ").is_none());
    }

    #[test]
    fn should_compare_product_ids_exactly() {
        let upper = ProductId::parse("ABC").unwrap();
        let lower = ProductId::parse("abc").unwrap();
        let padded = ProductId::parse(" ABC").unwrap();

        assert_ne!(upper, lower);
        assert_ne!(upper, padded);
        assert_eq!(upper, ProductId::parse("ABC").unwrap());
    }

    #[test]
    fn should_convert_product_id_into_wire_string() {
        let id = ProductId::parse("6E92ZMYYFZ").unwrap();
        assert_eq!(String::from(id), "6E92ZMYYFZ");
    }
}
