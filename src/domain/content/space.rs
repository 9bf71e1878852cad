use serde::Serialize;

/// A top-level content collection in the wiki, identified by its short key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Space {
    pub id: String,
    /// Human-readable slug, unique within one wiki instance
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub space_type: String,
    pub link: String,
    /// Rendered (view) description markup
    pub description: String,
    /// Content id of the space homepage, resolved lazily when the page is requested
    pub homepage_id: String,
}

impl Space {
    /// Finds a space by key in a listing
    pub fn find_by_key<'a>(spaces: &'a [Space], key: &str) -> Option<&'a Space> {
        spaces.iter().find(|space| space.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space(key: &str) -> Space {
        Space {
            id: format!("id-{}", key),
            key: key.to_string(),
            name: key.to_lowercase(),
            space_type: "global".to_string(),
            link: format!("https://wiki.example.com/rest/api/space/{}", key),
            description: String::new(),
            homepage_id: "1".to_string(),
        }
    }

    #[test]
    fn test_find_by_key() {
        let spaces = vec![space("DEV"), space("OPS")];

        let found = Space::find_by_key(&spaces, "OPS").unwrap();
        assert_eq!(found.id, "id-OPS");
        assert!(Space::find_by_key(&spaces, "dev").is_none());
    }

    #[test]
    fn test_serializes_type_field() {
        let json = serde_json::to_value(space("DEV")).unwrap();
        assert_eq!(json["type"], "global");
        assert_eq!(json["homepage_id"], "1");
    }
}
