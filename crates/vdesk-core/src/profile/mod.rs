//! Profile record and shallow merging.

pub mod model;

use model::{Profile, ProfileUpdate};

impl Profile {
    /// Shallow-merge `update` into this profile, keeping every field it leaves unset.
    pub fn merge(&mut self, update: ProfileUpdate) {
        let ProfileUpdate {
            name,
            email,
            phone,
            national_id,
            business_id,
            address,
            company_verified,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
        if let Some(national_id) = national_id {
            self.national_id = national_id;
        }
        if let Some(business_id) = business_id {
            self.business_id = business_id;
        }
        if let Some(address) = address {
            self.address = address;
        }
        if let Some(company_verified) = company_verified {
            self.company_verified = company_verified;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            name: "Your Name".to_string(),
            email: "you@example.com".to_string(),
            phone: "+91 90000 00000".to_string(),
            national_id: "XXXX-XXXX-XXXX".to_string(),
            business_id: "BIZ-123456".to_string(),
            address: "Address line, City, State".to_string(),
            company_verified: true,
        }
    }

    #[test]
    fn test_merge_single_field() {
        let mut p = profile();
        p.merge(ProfileUpdate {
            email: Some("new@x.com".to_string()),
            ..Default::default()
        });

        let expected = Profile {
            email: "new@x.com".to_string(),
            ..profile()
        };
        assert_eq!(p, expected);
    }

    #[test]
    fn test_merge_empty_update_is_noop() {
        let mut p = profile();
        let update = ProfileUpdate::default();
        assert!(update.is_empty());
        p.merge(update);
        assert_eq!(p, profile());
    }

    #[test]
    fn test_merge_empty_string_is_written() {
        let mut p = profile();
        p.merge(ProfileUpdate {
            address: Some(String::new()),
            company_verified: Some(false),
            ..Default::default()
        });
        assert_eq!(p.address, "");
        assert!(!p.company_verified);
        assert_eq!(p.name, "Your Name");
    }

    #[test]
    fn test_partial_update_from_json() {
        let update: ProfileUpdate = serde_json::from_str(r#"{"phone":"+91 11111 22222"}"#).unwrap();
        assert_eq!(update.phone.as_deref(), Some("+91 11111 22222"));
        assert_eq!(update.email, None);
    }
}
