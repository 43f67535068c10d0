//! Request Metadata Port
//!
//! Read-only view over the headers of an incoming request.

use std::collections::{BTreeMap, HashMap};

/// Lookup-by-key access to request metadata.
///
/// This is an inbound port: the request layer hands the core something
/// implementing it, and the core only ever reads single keys. Key case
/// sensitivity is whatever the underlying collection does.
pub trait RequestMetadata {
    fn get(&self, key: &str) -> Option<&str>;
}

impl RequestMetadata for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

impl RequestMetadata for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(String::as_str)
    }
}

impl RequestMetadata for HashMap<&str, &str> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_lookup() {
        let mut headers = HashMap::new();
        headers.insert("x-real-ip".to_string(), "96.4.23.74".to_string());

        assert_eq!(RequestMetadata::get(&headers, "x-real-ip"), Some("96.4.23.74"));
        assert_eq!(RequestMetadata::get(&headers, "host"), None);
    }

    #[test]
    fn test_hashmap_lookup_is_case_sensitive() {
        let mut headers = HashMap::new();
        headers.insert("X-Real-IP".to_string(), "96.4.23.74".to_string());

        assert_eq!(RequestMetadata::get(&headers, "x-real-ip"), None);
    }

    #[test]
    fn test_btreemap_lookup() {
        let mut headers = BTreeMap::new();
        headers.insert("x-real-ip".to_string(), "172.0.0.1".to_string());

        assert_eq!(RequestMetadata::get(&headers, "x-real-ip"), Some("172.0.0.1"));
    }

    #[test]
    fn test_borrowed_hashmap_lookup() {
        let headers = HashMap::from([("x-real-ip", "127.0.0.1")]);
        let metadata: &dyn RequestMetadata = &headers;

        assert_eq!(metadata.get("x-real-ip"), Some("127.0.0.1"));
    }
}
