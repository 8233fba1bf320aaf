use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::models::item::{Category, Item, ItemType};

/// Transient form state for a report that has not been submitted yet.
/// The form owns one of these until the store confirms the write.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportDraft {
    pub item_type: ItemType,
    pub name: String,
    pub description: String,
    pub category: Option<Category>,
    pub location: String,
    pub reporter_name: String,
    pub email: String,
    pub phone: String,
    /// Raw value of the date input, "YYYY-MM-DD".
    pub date: String,
}

impl ReportDraft {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    /// Names of required fields that are still empty. Phone and image are
    /// deliberately not required.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("item name");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.category.is_none() {
            missing.push("category");
        }
        if self.location.trim().is_empty() {
            missing.push("location");
        }
        if self.reporter_name.trim().is_empty() {
            missing.push("your name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.parsed_date().is_none() {
            missing.push("date");
        }
        missing
    }

    /// Finalizes the draft into a complete `Item`, assigning a fresh unique
    /// id and the current time as `created_at`. The whole submission is
    /// blocked if anything required is missing; no partial item is built.
    pub fn into_item(self, image_url: Option<String>) -> Result<Item, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        let category = self
            .category
            .ok_or_else(|| ValidationError::MissingFields(vec!["category"]))?;
        let date = self
            .parsed_date()
            .ok_or_else(|| ValidationError::MissingFields(vec!["date"]))?;
        let phone = self.phone.trim();
        let phone = (!phone.is_empty()).then(|| phone.to_string());

        Ok(Item {
            id: Uuid::new_v4().to_string(),
            item_type: self.item_type,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category,
            location: self.location.trim().to_string(),
            reporter_name: self.reporter_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone,
            date,
            created_at: Utc::now(),
            image_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> ReportDraft {
        ReportDraft {
            item_type: ItemType::Lost,
            name: "Wallet".into(),
            description: "Black leather".into(),
            category: Some(Category::Bags),
            location: "Library".into(),
            reporter_name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: String::new(),
            date: "2024-03-01".into(),
        }
    }

    #[test]
    fn complete_draft_builds_an_item() {
        let item = full_draft().into_item(None).unwrap();
        assert_eq!(item.name, "Wallet");
        assert_eq!(item.category, Category::Bags);
        assert_eq!(item.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(item.phone, None);
        assert_eq!(item.image_url, None);
        assert!(!item.id.is_empty());
    }

    #[test]
    fn each_conversion_gets_a_fresh_id() {
        let a = full_draft().into_item(None).unwrap();
        let b = full_draft().into_item(None).unwrap();
        assert_ne!(a.id, b.id);
        assert!(b.created_at >= a.created_at);
    }

    #[test]
    fn missing_category_blocks_the_whole_submission() {
        let mut draft = full_draft();
        draft.category = None;
        assert_eq!(draft.missing_fields(), vec!["category"]);
        let err = draft.clone().into_item(None).unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(vec!["category"]));
        // Nothing else was touched; the user keeps what they typed
        assert_eq!(draft.name, "Wallet");
        assert_eq!(draft.location, "Library");
    }

    #[test]
    fn every_required_field_is_checked() {
        let mut draft = full_draft();
        draft.name.clear();
        draft.description.clear();
        draft.category = None;
        draft.location.clear();
        draft.reporter_name.clear();
        draft.email.clear();
        draft.date.clear();
        let missing = draft.missing_fields();
        assert_eq!(
            missing,
            vec![
                "item name",
                "description",
                "category",
                "location",
                "your name",
                "email",
                "date"
            ]
        );
    }

    #[test]
    fn unparseable_date_counts_as_missing() {
        let mut draft = full_draft();
        draft.date = "yesterday".into();
        assert_eq!(draft.missing_fields(), vec!["date"]);
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let mut draft = full_draft();
        draft.name = "   ".into();
        assert_eq!(draft.missing_fields(), vec!["item name"]);
    }

    #[test]
    fn optional_phone_is_kept_when_supplied() {
        let mut draft = full_draft();
        draft.phone = " +1 555 000 0000 ".into();
        let item = draft.into_item(Some("/uploads/x.png".into())).unwrap();
        assert_eq!(item.phone.as_deref(), Some("+1 555 000 0000"));
        assert_eq!(item.image_url.as_deref(), Some("/uploads/x.png"));
    }
}
