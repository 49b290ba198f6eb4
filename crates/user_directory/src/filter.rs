//! Live search over the fetched user list.
//!
//! The filtered set is always recomputed from the full set; there is no
//! incremental patching. A record matches when its name or email contains the
//! search term, compared case-insensitively. The term is used verbatim: no
//! trimming, no minimum length, no diacritic folding.

use crate::model::User;
use tracing::debug;

/// Returns the users whose name or email contains `term`, preserving order.
/// An empty term returns the full set.
#[must_use]
pub fn filter_users(users: &[User], term: &str) -> Vec<User> {
    let needle = term.to_lowercase();
    let matched: Vec<User> = users
        .iter()
        .filter(|user| matches_folded(user, &needle))
        .cloned()
        .collect();

    debug!(
        term,
        total = users.len(),
        matched = matched.len(),
        "filtered users"
    );

    matched
}

/// Reports whether a single user matches `term`.
#[must_use]
pub fn matches_term(user: &User, term: &str) -> bool {
    matches_folded(user, &term.to_lowercase())
}

// `needle` must already be lowercased.
fn matches_folded(user: &User, needle: &str) -> bool {
    user.name.to_lowercase().contains(needle) || user.email.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::{filter_users, matches_term};
    use crate::model::{Company, User};

    fn user(id: u64, name: &str, email: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: format!("user{id}"),
            email: email.to_string(),
            company: Company {
                name: "Acme".to_string(),
            },
            website: String::new(),
        }
    }

    fn sample() -> Vec<User> {
        vec![
            user(1, "Leanne Graham", "Sincere@april.biz"),
            user(2, "Ervin Howell", "Shanna@melissa.tv"),
            user(3, "Clementine Bauch", "Nathan@yesenia.net"),
        ]
    }

    #[test]
    fn empty_term_returns_full_set() {
        let users = sample();
        assert_eq!(filter_users(&users, ""), users);
    }

    #[test]
    fn matches_name_case_insensitively() {
        let users = sample();
        let result = filter_users(&users, "HOWELL");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn matches_email_substring() {
        let users = sample();
        let result = filter_users(&users, "yesenia");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 3);
    }

    #[test]
    fn preserves_source_order() {
        let users = sample();
        let ids: Vec<u64> = filter_users(&users, "e").iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn term_is_not_trimmed() {
        let users = sample();
        assert!(filter_users(&users, " leanne").is_empty());
        assert_eq!(filter_users(&users, "leanne ").len(), 1);
    }

    #[test]
    fn username_and_company_do_not_match() {
        let users = sample();
        assert!(filter_users(&users, "user1").is_empty());
        assert!(filter_users(&users, "acme").is_empty());
    }

    #[test]
    fn matches_term_agrees_with_filter() {
        let leanne = user(1, "Leanne Graham", "Sincere@april.biz");
        assert!(matches_term(&leanne, "APRIL"));
        assert!(matches_term(&leanne, "graham"));
        assert!(!matches_term(&leanne, "zzz"));
    }
}
