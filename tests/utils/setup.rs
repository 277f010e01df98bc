use super::{request::RequestBuilder, response::TestResponse};
use http::StatusCode;
use migration::MigratorTrait;
use pr_reviewer::StateTrait;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use reqwest::Client;
use sea_orm::{ConnectOptions, Database, DbConn};
use serde_json::{json, Value};
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::net::TcpListener;
use tracing::log::LevelFilter;

const SEED: u64 = 0x5eed;

/// State backed by an in-memory database and a seeded generator, so every
/// run draws the same reviewers.
#[derive(Clone)]
pub struct TestState {
    database: DbConn,
    rng: Arc<Mutex<ChaCha8Rng>>,
}

impl StateTrait for TestState {
    type Db = DbConn;
    type Rand = ChaCha8Rng;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn rng(&self) -> Self::Rand {
        let mut rng = self.rng.lock().expect("rng mutex poisoned");
        ChaCha8Rng::seed_from_u64(rng.next_u64())
    }
}

/// Fresh, migrated in-memory database. The pool holds exactly one
/// connection, every connection would otherwise see its own empty database.
#[allow(unused)]
pub async fn connect() -> DbConn {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging_level(LevelFilter::Debug);

    let db = Database::connect(opts)
        .await
        .expect("failed to connect to database");

    migration::Migrator::up(&db, None)
        .await
        .expect("failed to apply migrations");

    db
}

async fn setup_backend(db: DbConn) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let state = TestState {
        database: db,
        rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(SEED))),
    };

    tokio::spawn(async move {
        pr_reviewer::run(listener, state, Duration::from_secs(5))
            .await
            .unwrap();
    });

    addr
}

#[derive(Clone)]
pub struct App {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DbConn,
}

impl App {
    #[allow(unused)]
    pub async fn new() -> Self {
        let db = connect().await;
        let addr = setup_backend(db.clone()).await;

        App {
            addr,
            client: Client::new(),
            db,
        }
    }

    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    #[allow(unused)]
    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.get_url(url)))
    }

    #[allow(unused)]
    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.get_url(url)))
    }
}

impl App {
    /// Creates a team from `(user_id, is_active)` pairs, using the id as the
    /// username.
    #[allow(unused)]
    pub async fn create_team(&self, name: &str, members: &[(&str, bool)]) -> Value {
        let members: Vec<Value> = members
            .iter()
            .map(|(id, active)| {
                json!({
                    "user_id": id,
                    "username": id,
                    "is_active": active,
                })
            })
            .collect();

        let res = self
            .post("/team/add")
            .json(&json!({
                "team_name": name,
                "members": members,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        res.json().await
    }

    /// Opens a pull request and returns the `pr` object of the response.
    #[allow(unused)]
    pub async fn create_pr(&self, id: &str, author: &str) -> Value {
        let res = self.create_pr_request(id, author).await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;
        body["pr"].clone()
    }

    #[allow(unused)]
    pub async fn create_pr_request(&self, id: &str, author: &str) -> TestResponse {
        self.post("/pullRequest/create")
            .json(&json!({
                "pull_request_id": id,
                "pull_request_name": format!("Change {id}"),
                "author_id": author,
            }))
            .send()
            .await
    }

    #[allow(unused)]
    pub async fn merge_pr(&self, id: &str) -> Value {
        let res = self
            .post("/pullRequest/merge")
            .json(&json!({ "pull_request_id": id }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        body["pr"].clone()
    }

    /// Pull request ids the user currently reviews.
    #[allow(unused)]
    pub async fn reviews_of(&self, user_id: &str) -> Vec<String> {
        let res = self
            .get("/users/getReview")
            .query(&[("user_id", user_id)])
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        body["pull_requests"]
            .as_array()
            .expect("pull_requests is not an array")
            .iter()
            .map(|pr| pr["pull_request_id"].as_str().unwrap().to_owned())
            .collect()
    }
}

/// Reviewer ids of a pull request object, as returned by the API.
#[allow(unused)]
pub fn reviewers(pr: &Value) -> Vec<String> {
    pr["assigned_reviewers"]
        .as_array()
        .expect("assigned_reviewers is not an array")
        .iter()
        .map(|id| id.as_str().unwrap().to_owned())
        .collect()
}
