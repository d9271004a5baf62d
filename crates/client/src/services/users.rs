//! Admin user management operations.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use velasona_core::{Page, PageInfo, Role, User, UserId};

use crate::error::ApiResult;
use crate::http::{QueryPairs, StoreClient};
use crate::services::check_pagination;

/// Admin filters for the user listing.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl UserFilter {
    fn to_query(&self) -> String {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("role", self.role.map(Role::as_wire));
        pairs.push_opt("search", self.search.as_deref());
        pairs.push_opt("page", self.page);
        pairs.push_opt("limit", self.limit);
        pairs.to_query_string()
    }
}

#[derive(Serialize)]
struct RoleBody {
    role: Role,
}

/// Wire shape of user listings (resource-specific plural key).
#[derive(Deserialize)]
struct UserListWire {
    users: Vec<User>,
    pagination: PageInfo,
}

impl StoreClient {
    /// List users (admin). `GET /users/admin/users`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller lacks the
    /// admin role.
    #[instrument(skip(self))]
    pub async fn admin_users(&self, filter: &UserFilter) -> ApiResult<Page<User>> {
        let wire: UserListWire = self
            .get(&format!("/users/admin/users{}", filter.to_query()))
            .await
            .map_err(|e| e.with_fallback("Failed to load users"))?;
        check_pagination(&wire.pagination, "users");
        Ok(Page::new(wire.users, wire.pagination))
    }

    /// Fetch one user (admin). `GET /users/admin/users/:id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the user is unknown.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn admin_user(&self, id: &UserId) -> ApiResult<User> {
        self.get(&format!("/users/admin/users/{id}"))
            .await
            .map_err(|e| e.with_fallback("Failed to load user"))
    }

    /// Change a user's role (admin). `PUT /users/admin/users/:id/role`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn set_user_role(&self, id: &UserId, role: Role) -> ApiResult<User> {
        self.put(&format!("/users/admin/users/{id}/role"), &RoleBody { role })
            .await
            .map_err(|e| e.with_fallback("Failed to update user role"))
    }

    /// Delete a user (admin). `DELETE /users/admin/users/:id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn delete_user(&self, id: &UserId) -> ApiResult<()> {
        self.delete_unit(&format!("/users/admin/users/{id}"))
            .await
            .map_err(|e| e.with_fallback("Failed to delete user"))
    }
}
