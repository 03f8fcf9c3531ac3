//! Response envelopes returned by the users API.

use serde::Deserialize;

use crate::types::User;

/// `GET /api/users` body. A missing `users` key reads as an empty list.
#[derive(Deserialize, Debug, Default)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_users_key_is_empty() {
        let response: UsersResponse = serde_json::from_str("{}").unwrap();
        assert!(response.users.is_empty());
    }

    #[test]
    fn users_are_kept_in_server_order() {
        let response: UsersResponse = serde_json::from_str(
            r#"{"users": [
                {"id": 2, "name": "Grace", "email": "grace@example.com"},
                {"id": 1, "name": "Ada", "email": "ada@example.com"}
            ]}"#,
        )
        .unwrap();
        let ids: Vec<i64> = response.users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
