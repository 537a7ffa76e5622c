//! Item Form Validation
//!
//! Runs before submission; failures populate per-field messages and block
//! the request entirely.

use crate::models::ItemFormData;

pub const NAME_MAX: usize = 100;
pub const DESCRIPTION_MAX: usize = 100;
pub const QUANTITY_MIN: i32 = 1;
pub const QUANTITY_MAX: i32 = 10;

/// Per-field validation messages; `None` means the field is valid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub item_name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.item_name.is_none() && self.description.is_none() && self.quantity.is_none()
    }
}

/// Validate the form, returning the payload to submit or the field errors
pub fn validate_item_form(data: &ItemFormData) -> Result<ItemFormData, FormErrors> {
    let mut errors = FormErrors::default();

    if data.item_name.is_empty() {
        errors.item_name = Some("Item name is required".to_string());
    } else if data.item_name.chars().count() > NAME_MAX {
        errors.item_name = Some("Item name must be 100 characters or less".to_string());
    }

    if data.description.chars().count() > DESCRIPTION_MAX {
        errors.description = Some("Description must be 100 characters or less".to_string());
    }

    if data.quantity.is_empty() {
        errors.quantity = Some("Quantity is required".to_string());
    } else {
        match data.quantity.trim().parse::<i32>() {
            Ok(n) if (QUANTITY_MIN..=QUANTITY_MAX).contains(&n) => {}
            _ => {
                errors.quantity = Some("Quantity must be between 1 and 10".to_string());
            }
        }
    }

    if errors.is_empty() {
        Ok(data.clone())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, description: &str, quantity: &str) -> ItemFormData {
        ItemFormData {
            item_name: name.to_string(),
            description: description.to_string(),
            quantity: quantity.to_string(),
            purchased: false,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let result = validate_item_form(&form("Milk", "Whole", "2"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let errors = validate_item_form(&form("", "", "1")).unwrap_err();
        assert_eq!(errors.item_name.as_deref(), Some("Item name is required"));
        assert!(errors.quantity.is_none());
    }

    #[test]
    fn test_overlong_name_rejected() {
        let errors = validate_item_form(&form(&"x".repeat(101), "", "1")).unwrap_err();
        assert_eq!(
            errors.item_name.as_deref(),
            Some("Item name must be 100 characters or less")
        );
    }

    #[test]
    fn test_name_at_limit_passes() {
        assert!(validate_item_form(&form(&"x".repeat(100), "", "1")).is_ok());
    }

    #[test]
    fn test_overlong_description_rejected() {
        let errors = validate_item_form(&form("Milk", &"d".repeat(101), "1")).unwrap_err();
        assert_eq!(
            errors.description.as_deref(),
            Some("Description must be 100 characters or less")
        );
    }

    #[test]
    fn test_empty_description_passes() {
        assert!(validate_item_form(&form("Milk", "", "1")).is_ok());
    }

    #[test]
    fn test_quantity_required() {
        let errors = validate_item_form(&form("Milk", "", "")).unwrap_err();
        assert_eq!(errors.quantity.as_deref(), Some("Quantity is required"));
    }

    #[test]
    fn test_quantity_bounds() {
        for bad in ["0", "11", "-1", "abc"] {
            let errors = validate_item_form(&form("Milk", "", bad)).unwrap_err();
            assert_eq!(
                errors.quantity.as_deref(),
                Some("Quantity must be between 1 and 10"),
                "expected rejection for {bad:?}"
            );
        }
        for good in ["1", "5", "10"] {
            assert!(validate_item_form(&form("Milk", "", good)).is_ok());
        }
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let errors = validate_item_form(&form("", "", "99")).unwrap_err();
        assert!(errors.item_name.is_some());
        assert!(errors.quantity.is_some());
    }
}
