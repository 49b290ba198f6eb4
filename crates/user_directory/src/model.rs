use serde::Deserialize;

/// A user record as returned by the users endpoint.
///
/// Only the fields the dashboard consumes are modeled; anything else in the
/// payload (address, phone, geo) is ignored during deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub company: Company,
    #[serde(default)]
    pub website: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Company {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialization_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light", "city": "Gwenborough" },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": { "name": "Romaguera-Crona", "catchPhrase": "Multi-layered" }
        }"#;

        let user: User = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.username, "Bret");
        assert_eq!(user.company.name, "Romaguera-Crona");
        assert_eq!(user.website, "hildegard.org");
    }

    #[test]
    fn test_user_missing_website_defaults_to_empty() {
        let json = r#"{
            "id": 7,
            "name": "Kurtis Weissnat",
            "username": "Elwyn.Skiles",
            "email": "Telly.Hoeger@billy.biz",
            "company": { "name": "Johns Group" }
        }"#;

        let user: User = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(user.website, "");
    }

    #[test]
    fn test_user_missing_company_is_rejected() {
        let json = r#"{ "id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "Shanna@melissa.tv" }"#;

        assert!(serde_json::from_str::<User>(json).is_err());
    }
}
