//! Institution model (collaborator-owned shape).

use serde::{Deserialize, Serialize};

use super::Id;

/// A research institution an author is affiliated with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Institution {
    /// Institution id.
    pub id: Id,

    /// Display name.
    pub display_name: String,

    /// ISO country code.
    #[serde(default)]
    pub country_code: Option<String>,

    /// City.
    #[serde(default)]
    pub city: Option<String>,

    /// Logo or thumbnail URL.
    #[serde(default)]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_institution_deserialize() {
        let json = r#"{"id": "I27837315", "display_name": "University of Michigan", "country_code": "US"}"#;
        let inst: Institution = serde_json::from_str(json).unwrap();
        assert_eq!(inst.id, Id::Text("I27837315".to_owned()));
        assert_eq!(inst.display_name, "University of Michigan");
        assert!(inst.city.is_none());
    }
}
