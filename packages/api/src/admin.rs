//! Admin user management (`/admin/users`).
//!
//! Each operation issues exactly one request. Callers refresh their list
//! after a successful edit or delete.

use store::TokenStore;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{Paginated, UserInfo, UserQuery, UserUpdate};
use crate::transport::Transport;

/// `GET /admin/users` may wrap the paginator in `{ "users": ... }`.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum UsersResponse {
    Wrapped { users: Paginated<UserInfo> },
    Bare(Paginated<UserInfo>),
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub async fn list_users(&self, query: &UserQuery) -> ApiResult<Paginated<UserInfo>> {
        let mut req = self
            .get("/admin/users")
            .query("page", query.page)
            .query("per_page", query.per_page);
        let search = query.search.trim();
        if !search.is_empty() {
            req = req.query("search", search);
        }
        if let Some(status) = query.status.as_param() {
            req = req.query("status", status);
        }

        let resp: UsersResponse = req.send().await?;
        Ok(match resp {
            UsersResponse::Wrapped { users } | UsersResponse::Bare(users) => users,
        })
    }

    pub async fn update_user(&self, id: u64, update: &UserUpdate) -> ApiResult<()> {
        self.put(format!("/admin/users/{id}"))
            .json(update)
            .send_unit()
            .await
    }

    pub async fn delete_user(&self, id: u64) -> ApiResult<()> {
        self.delete(format!("/admin/users/{id}")).send_unit().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserStatus;
    use crate::testing::{client, MockTransport, USER_JSON};
    use crate::transport::Method;
    use store::{CredentialScope, MemoryStore};

    fn admin(transport: &MockTransport) -> ApiClient<MockTransport, MemoryStore> {
        client(
            CredentialScope::Admin,
            transport.clone(),
            MemoryStore::with("admin_token", "adm"),
        )
    }

    #[tokio::test]
    async fn test_list_users_query_parameters() {
        let transport = MockTransport::new();
        transport.respond(
            200,
            &format!(r#"{{"data":[{USER_JSON}],"current_page":2,"last_page":4,"per_page":10,"total":31}}"#),
        );

        let query = UserQuery {
            page: 2,
            per_page: 10,
            search: "  ada ".into(),
            status: UserStatus::Verified,
        };
        let page = admin(&transport).list_users(&query).await.unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.total, 31);

        let call = &transport.calls()[0];
        assert_eq!(call.method, Method::Get);
        assert_eq!(call.path, "/admin/users");
        assert_eq!(
            call.query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("per_page".to_string(), "10".to_string()),
                ("search".to_string(), "ada".to_string()),
                ("status".to_string(), "verified".to_string()),
            ]
        );
        assert_eq!(call.header("Authorization"), Some("Bearer adm"));
    }

    #[tokio::test]
    async fn test_list_users_omits_empty_filters_and_unwraps() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"users":{"data":[],"current_page":1,"last_page":1,"total":0}}"#);

        let page = admin(&transport).list_users(&UserQuery::default()).await.unwrap();
        assert!(page.data.is_empty());
        let keys: Vec<String> = transport.calls()[0].query.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec!["page", "per_page"]);
    }

    #[tokio::test]
    async fn test_update_user_issues_one_put() {
        let transport = MockTransport::new();
        transport.respond(200, "{}");

        let update = UserUpdate {
            name: "Grace Hopper".into(),
            email: "grace@example.com".into(),
        };
        admin(&transport).update_user(42, &update).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, Method::Put);
        assert_eq!(calls[0].path, "/admin/users/42");
        assert_eq!(
            calls[0].body,
            Some(serde_json::json!({"name": "Grace Hopper", "email": "grace@example.com"}))
        );
    }

    #[tokio::test]
    async fn test_delete_user_issues_one_delete() {
        let transport = MockTransport::new();
        transport.respond(204, "");

        admin(&transport).delete_user(9).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, Method::Delete);
        assert_eq!(calls[0].path, "/admin/users/9");
        assert!(calls[0].body.is_none());
    }

    #[tokio::test]
    async fn test_delete_failure_surfaces_message() {
        let transport = MockTransport::new();
        transport.respond(403, r#"{"error":"Cannot delete yourself"}"#);

        let err = admin(&transport).delete_user(1).await.unwrap_err();
        assert_eq!(err.user_message(), "Cannot delete yourself");
        assert_eq!(transport.calls().len(), 1);
    }
}
