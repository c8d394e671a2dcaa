#[cfg(test)]
mod tests {
    use crate::db::{
        create_role, find_role_by_name, find_user_by_username, insert_user, list_users,
    };
    use crate::error::AppError;
    use crate::test::utils::test_utils::{setup_test_db, user_count};

    use rocket::tokio;

    #[tokio::test]
    async fn insert_and_find_user() {
        let pool = setup_test_db().await;

        let inserted = insert_user(&pool, "alice").await.expect("Insert failed");
        assert_eq!(inserted.username, "alice");
        assert!(inserted.role_id.is_none());

        let found = find_user_by_username(&pool, "alice")
            .await
            .expect("Lookup failed");

        match found {
            Some(user) => {
                assert_eq!(user.id, inserted.id);
                assert_eq!(user.username, "alice");
            }
            _ => panic!("User wasn't found after insert"),
        }
    }

    #[tokio::test]
    async fn lookup_is_exact_match() {
        let pool = setup_test_db().await;

        insert_user(&pool, "alice").await.expect("Insert failed");

        let found = find_user_by_username(&pool, "Alice ")
            .await
            .expect("Lookup failed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn duplicate_username_rejected_by_unique_index() {
        let pool = setup_test_db().await;

        insert_user(&pool, "alice").await.expect("Insert failed");
        let second = insert_user(&pool, "alice").await;

        assert!(matches!(second, Err(AppError::Database(_))));
        assert_eq!(user_count(&pool).await, 1);
    }

    #[tokio::test]
    async fn list_users_returns_rows_in_insertion_order() {
        let pool = setup_test_db().await;

        for name in ["alice", "bob", "carol"] {
            insert_user(&pool, name).await.expect("Insert failed");
        }

        let users = list_users(&pool).await.expect("List failed");
        let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, ["alice", "bob", "carol"]);
    }

    #[tokio::test]
    async fn roles_are_stored_and_found_by_name() {
        let pool = setup_test_db().await;

        let role = create_role(&pool, "admin").await.expect("Create failed");
        assert_eq!(role.name, "admin");

        let found = find_role_by_name(&pool, "admin")
            .await
            .expect("Lookup failed");
        assert_eq!(found.map(|r| r.id), Some(role.id));

        let missing = find_role_by_name(&pool, "moderator")
            .await
            .expect("Lookup failed");
        assert!(missing.is_none());
    }
}
