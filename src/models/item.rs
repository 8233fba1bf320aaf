use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when an enum column read back from storage (or off the wire)
/// holds a value outside the closed set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown value for {field}: {value}")]
pub struct ParseFieldError {
    pub field: &'static str,
    pub value: String,
}

/// Whether the report is about a lost item or a found one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    #[default]
    Lost,
    Found,
}

impl ItemType {
    /// Wire/storage spelling ("lost" / "found").
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Lost => "lost",
            ItemType::Found => "found",
        }
    }

    /// Capitalized label for badges.
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Lost => "Lost",
            ItemType::Found => "Found",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lost" => Ok(ItemType::Lost),
            "found" => Ok(ItemType::Found),
            other => Err(ParseFieldError {
                field: "type",
                value: other.to_string(),
            }),
        }
    }
}

/// Closed category set for reports.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Bags,
    Electronics,
    Clothing,
    Documents,
    Keys,
    Jewelry,
    Books,
    Sports,
    Other,
}

impl Category {
    /// Every category, in the order the form offers them.
    pub const ALL: [Category; 9] = [
        Category::Bags,
        Category::Electronics,
        Category::Clothing,
        Category::Documents,
        Category::Keys,
        Category::Jewelry,
        Category::Books,
        Category::Sports,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Bags => "Bags",
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Documents => "Documents",
            Category::Keys => "Keys",
            Category::Jewelry => "Jewelry",
            Category::Books => "Books",
            Category::Sports => "Sports",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|cat| cat.as_str() == s)
            .copied()
            .ok_or_else(|| ParseFieldError {
                field: "category",
                value: s.to_string(),
            })
    }
}

/// A single lost/found report. Immutable once persisted; `created_at`
/// drives the newest-first sort order of the list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,                  // Unique ID, assigned at creation
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub name: String,                // Short label, e.g. "Black leather wallet"
    pub description: String,
    pub category: Category,
    pub location: String,            // Where the item was lost/found
    pub reporter_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub date: NaiveDate,             // The day the item was lost/found, not the report time
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_item() -> Item {
        Item {
            id: "b2e8e3a0-0000-0000-0000-000000000001".into(),
            item_type: ItemType::Lost,
            name: "Wallet".into(),
            description: "Black leather".into(),
            category: Category::Bags,
            location: "Library".into(),
            reporter_name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: None,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            image_url: None,
        }
    }

    #[test]
    fn item_serializes_with_wire_field_names() {
        let json = serde_json::to_value(sample_item()).unwrap();
        assert_eq!(json["type"], "lost");
        assert_eq!(json["reporter_name"], "Jane Doe");
        assert_eq!(json["date"], "2024-03-01");
        // Absent optionals stay off the wire entirely
        assert!(json.get("phone").is_none());
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn item_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "abc",
            "type": "found",
            "name": "Keys",
            "description": "Ring of three keys",
            "category": "Keys",
            "location": "Cafeteria",
            "reporter_name": "Sam",
            "email": "sam@x.com",
            "date": "2024-05-20",
            "created_at": "2024-05-20T09:30:00Z"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type, ItemType::Found);
        assert_eq!(item.phone, None);
        assert_eq!(item.image_url, None);
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(serde_json::from_str::<Category>("\"Food\"").is_err());
        assert!("Food".parse::<Category>().is_err());
    }

    #[test]
    fn unknown_item_type_is_rejected() {
        assert!(serde_json::from_str::<ItemType>("\"stolen\"").is_err());
        let err = "stolen".parse::<ItemType>().unwrap_err();
        assert_eq!(err.value, "stolen");
    }

    #[test]
    fn category_display_and_parse_round_trip() {
        assert_eq!(Category::ALL.len(), 9);
        for cat in Category::ALL {
            assert_eq!(cat.as_str().parse::<Category>().unwrap(), cat);
        }
    }
}
