mod utils;

use pr_reviewer::assignment::{self, txn, NewPullRequest, TeamMember};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sea_orm::TransactionTrait;
use utils::prelude::*;

async fn deactivate(app: &App, team: &str) -> TestResponse {
    app.post("/team/deactivate")
        .json(&json!({ "team_name": team }))
        .send()
        .await
}

#[tokio::test]
async fn drops_reviewers_without_replacement() {
    let app = App::new().await;
    app.create_team(
        "team1",
        &[("alice", true), ("bob", true), ("carol", true), ("dan", true)],
    )
    .await;

    let pr = app.create_pr("pr-1", "alice").await;
    let before = reviewers(&pr);
    assert_eq!(before.len(), 2);

    let res = deactivate(&app, "team1").await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;

    assert_json_eq!(
        body,
        json!({
            "deactivated_users": ["alice", "bob", "carol", "dan"],
            "reassignments": [
                { "pr_id": "pr-1", "old": before[0], "new": "" },
                { "pr_id": "pr-1", "old": before[1], "new": "" },
            ],
        })
    );

    for user in &before {
        assert!(app.reviews_of(user).await.is_empty());
    }

    let res = app
        .get("/team/get")
        .query(&[("team_name", "team1")])
        .send()
        .await;
    let team: Value = res.json().await;

    assert!(team["members"]
        .as_array()
        .unwrap()
        .iter()
        .all(|member| member["is_active"] == false));
}

#[tokio::test]
async fn skips_inactive_and_merged() {
    let app = App::new().await;
    app.create_team("ops", &[("dan", true), ("erin", true), ("frank", true)])
        .await;
    app.create_pr("pr-old", "dan").await;
    app.merge_pr("pr-old").await;
    app.create_pr("pr-ops", "dan").await;

    // erin moves to core, grace was already inactive
    app.create_team("core", &[("alice", true), ("erin", true), ("grace", false)])
        .await;
    app.create_pr("pr-core", "alice").await;

    let res = deactivate(&app, "core").await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;

    assert_json_eq!(
        body,
        json!({
            "deactivated_users": ["alice", "erin"],
            "reassignments": [
                { "pr_id": "pr-core", "old": "erin", "new": "" },
                { "pr_id": "pr-ops", "old": "erin", "new": "" },
            ],
        })
    );

    assert_eq!(app.reviews_of("erin").await, vec!["pr-old"]);
    assert_eq!(app.reviews_of("frank").await.len(), 2);
}

#[tokio::test]
async fn second_call_is_empty() {
    let app = App::new().await;
    app.create_team("team1", &[("alice", true), ("bob", true)]).await;
    app.create_pr("pr-1", "alice").await;

    let res = deactivate(&app, "team1").await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = deactivate(&app, "team1").await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_json_eq!(body, json!({ "deactivated_users": [], "reassignments": [] }));
}

#[tokio::test]
async fn not_found() {
    let app = App::new().await;

    let res = deactivate(&app, "ghosts").await;

    assert_error!(res, error::TEAM_NOT_FOUND);
}

fn member(id: &str) -> TeamMember {
    TeamMember {
        user_id: id.to_owned(),
        username: id.to_owned(),
        is_active: true,
    }
}

#[tokio::test]
async fn rollback_leaves_no_trace() {
    let db = connect().await;
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    assignment::create_team(
        &db,
        "team1",
        vec![member("alice"), member("bob"), member("carol")],
    )
    .await
    .unwrap();

    for (id, author) in [("pr-1", "alice"), ("pr-2", "bob")] {
        assignment::create_pull_request(
            &db,
            &mut rng,
            NewPullRequest {
                id: id.to_owned(),
                name: id.to_owned(),
                author_id: author.to_owned(),
            },
        )
        .await
        .unwrap();
    }

    let before_1 = txn::reviewers_of(&db, "pr-1").await.unwrap();
    let before_2 = txn::reviewers_of(&db, "pr-2").await.unwrap();

    let tx = db.begin().await.unwrap();
    let report = assignment::deactivate_team_in(&tx, &mut rng, "team1")
        .await
        .unwrap();

    assert_eq!(report.deactivated_users, vec!["alice", "bob", "carol"]);
    assert_eq!(report.reassignments.len(), 4);
    assert!(txn::reviewers_of(&tx, "pr-1").await.unwrap().is_empty());

    tx.rollback().await.unwrap();

    let team = assignment::get_team(&db, "team1").await.unwrap();
    assert!(team.members.iter().all(|member| member.is_active));

    assert_eq!(txn::reviewers_of(&db, "pr-1").await.unwrap(), before_1);
    assert_eq!(txn::reviewers_of(&db, "pr-2").await.unwrap(), before_2);
}
