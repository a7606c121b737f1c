//! Contact form draft kept in storage between visits to the contact page

use crate::domain::a002_inquiry::InquiryDto;
use crate::shared::inquiry_cart::KeyValueStorage;

pub const CONTACT_DRAFT_STORAGE_KEY: &str = "contactFormData";

/// Stored draft, or an empty one when missing or unreadable
pub fn load_draft<S: KeyValueStorage>(storage: &S) -> InquiryDto {
    storage
        .get_item(CONTACT_DRAFT_STORAGE_KEY)
        .and_then(|raw| serde_json::from_str::<InquiryDto>(&raw).ok())
        .unwrap_or_default()
}

pub fn save_draft<S: KeyValueStorage>(storage: &S, draft: &InquiryDto) {
    let Ok(raw) = serde_json::to_string(draft) else { return };
    if let Err(e) = storage.set_item(CONTACT_DRAFT_STORAGE_KEY, &raw) {
        log::warn!("contact draft: save failed: {}", e);
    }
}

pub fn clear_draft<S: KeyValueStorage>(storage: &S) {
    let _ = storage.remove_item(CONTACT_DRAFT_STORAGE_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::inquiry_cart::MemoryStorage;

    #[test]
    fn test_draft_round_trip_and_clear() {
        let storage = MemoryStorage::new();
        let draft = InquiryDto {
            name: "Ahmad".into(),
            email: "a@b.co".into(),
            message: "Hi".into(),
        };
        save_draft(&storage, &draft);
        assert_eq!(load_draft(&storage), draft);

        clear_draft(&storage);
        assert!(load_draft(&storage).is_empty());
    }

    #[test]
    fn test_corrupt_draft_is_empty() {
        let storage = MemoryStorage::new();
        storage
            .set_item(CONTACT_DRAFT_STORAGE_KEY, "{broken")
            .unwrap();
        assert!(load_draft(&storage).is_empty());
    }
}
