mod utils;

use utils::prelude::*;

mod add {
    use super::*;

    #[tokio::test]
    async fn success() {
        let app = App::new().await;

        let res = app
            .post("/team/add")
            .json(&json!({
                "team_name": "backend",
                "members": [
                    { "user_id": "u2", "username": "Bob", "is_active": true },
                    { "user_id": "u1", "username": "Alice", "is_active": false },
                ],
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;

        assert_json_eq!(
            body,
            json!({
                "team": {
                    "team_name": "backend",
                    "members": [
                        { "user_id": "u1", "username": "Alice", "is_active": false },
                        { "user_id": "u2", "username": "Bob", "is_active": true },
                    ],
                },
            })
        );
    }

    #[tokio::test]
    async fn empty_members() {
        let app = App::new().await;

        let body = app.create_team("lonely", &[]).await;

        assert_json_eq!(
            body,
            json!({ "team": { "team_name": "lonely", "members": [] } })
        );
    }

    #[tokio::test]
    async fn already_exists() {
        let app = App::new().await;
        app.create_team("backend", &[("u1", true)]).await;

        let res = app
            .post("/team/add")
            .json(&json!({
                "team_name": "backend",
                "members": [],
            }))
            .send()
            .await;

        assert_error!(res, error::TEAM_EXISTS);
    }

    #[tokio::test]
    async fn moves_existing_member() {
        let app = App::new().await;
        app.create_team("backend", &[("u1", true), ("u2", true)]).await;

        let res = app
            .post("/team/add")
            .json(&json!({
                "team_name": "frontend",
                "members": [
                    { "user_id": "u1", "username": "Alice Smith", "is_active": false },
                ],
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let res = app
            .get("/team/get")
            .query(&[("team_name", "backend")])
            .send()
            .await;
        let body: Value = res.json().await;

        assert_json_eq!(
            body,
            json!({
                "team_name": "backend",
                "members": [{ "user_id": "u2", "username": "u2", "is_active": true }],
            })
        );

        let res = app
            .get("/team/get")
            .query(&[("team_name", "frontend")])
            .send()
            .await;
        let body: Value = res.json().await;

        assert_json_eq!(
            body,
            json!({
                "team_name": "frontend",
                "members": [{ "user_id": "u1", "username": "Alice Smith", "is_active": false }],
            })
        );
    }

    #[tokio::test]
    async fn empty_team_name() {
        let app = App::new().await;

        let res = app
            .post("/team/add")
            .json(&json!({
                "team_name": "",
                "members": [],
            }))
            .send()
            .await;

        assert_error!(res, error::JSON_VALIDATE_INVALID);
    }

    #[tokio::test]
    async fn empty_member_id() {
        let app = App::new().await;

        let res = app
            .post("/team/add")
            .json(&json!({
                "team_name": "backend",
                "members": [{ "user_id": "", "username": "Alice", "is_active": true }],
            }))
            .send()
            .await;

        assert_error!(res, error::JSON_VALIDATE_INVALID);
    }

    #[tokio::test]
    async fn missing_fields() {
        let app = App::new().await;

        let res = app
            .post("/team/add")
            .json(&json!({ "team_name": "backend" }))
            .send()
            .await;

        assert_error!(res, error::JSON_MISSING_FIELDS);
    }

    #[tokio::test]
    async fn syntax_error() {
        let app = App::new().await;

        let res = app
            .post("/team/add")
            .header("content-type", "application/json")
            .body("{\"team_name\":")
            .send()
            .await;

        assert_error!(res, error::JSON_SYNTAX_ERROR);
    }

    #[tokio::test]
    async fn wrong_content_type() {
        let app = App::new().await;

        let res = app
            .post("/team/add")
            .body("team_name=backend")
            .send()
            .await;

        assert_error!(res, error::JSON_CONTENT_TYPE);
    }
}

mod get {
    use super::*;

    #[tokio::test]
    async fn success() {
        let app = App::new().await;
        app.create_team("backend", &[("u1", true), ("u2", false)]).await;

        let res = app
            .get("/team/get")
            .query(&[("team_name", "backend")])
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;

        assert_json_eq!(
            body,
            json!({
                "team_name": "backend",
                "members": [
                    { "user_id": "u1", "username": "u1", "is_active": true },
                    { "user_id": "u2", "username": "u2", "is_active": false },
                ],
            })
        );
    }

    #[tokio::test]
    async fn not_found() {
        let app = App::new().await;

        let res = app
            .get("/team/get")
            .query(&[("team_name", "ghosts")])
            .send()
            .await;

        assert_error!(res, error::TEAM_NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_query() {
        let app = App::new().await;

        let res = app.get("/team/get").send().await;

        assert_error!(res, error::QUERY_INVALID);
    }
}

mod insert {
    use super::*;
    use pr_reviewer::assignment::{self, txn};
    use sea_orm::TransactionTrait;

    #[tokio::test]
    async fn row_committed_after_existence_check() {
        let db = connect().await;
        let tx = db.begin().await.unwrap();

        // a concurrent request inserts the team between the check and the insert
        txn::insert_team(&tx, "backend").await.unwrap();

        let err = txn::insert_team(&tx, "backend").await.unwrap_err();

        assert_eq!(err, error::TEAM_EXISTS);

        tx.rollback().await.unwrap();

        let err = assignment::get_team(&db, "backend").await.unwrap_err();
        assert_eq!(err, error::TEAM_NOT_FOUND);
    }
}
