use actix_web::{App, http::StatusCode, test};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use serial_test::serial;

use soccer_api::database::models::{Player, Team};
use soccer_api::routes;

mod common;

use common::{TestAssertions, TestContext, TestFixtures};

async fn seeded_team(ctx: &TestContext) -> Team {
    ctx.insert_team(TestFixtures::team("FC Barcelona", "Spain", "La Liga"))
        .await
        .unwrap()
}

#[actix_web::test]
#[serial]
async fn test_create_player_success() {
    common::setup_test_env();
    let ctx = TestContext::new().await.unwrap();
    let team = seeded_team(&ctx).await;
    let app = test::init_service(App::new().app_data(ctx.state()).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({
            "full_name": "Lionel Messi",
            "date_of_birth": "1987-06-24",
            "nationality": "Argentina",
            "position": "Forward",
            "jersey_number": 10,
            "height": 170.18,
            "contract_start": "2021-07-01T00:00:00",
            "contract_end": "2025-06-30",
            "player_value": 100000000.0,
            "team_id": team.id,
            "rating": 10
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = test::read_body(resp).await;
    let player: Player = TestAssertions::assert_success_response(&body);
    assert!(player.id > 0);
    assert_eq!(player.full_name, "Lionel Messi");
    assert_eq!(player.team_id, Some(team.id));
    assert_eq!(player.date_of_birth, NaiveDate::from_ymd_opt(1987, 6, 24));
    assert_eq!(player.contract_start, NaiveDate::from_ymd_opt(2021, 7, 1));
    assert!(!player.is_injured);
    assert_eq!(player.injury_details, None);
    assert_eq!(player.rating, Some(10));

    TestAssertions::assert_record_count(&ctx.pool, "players", 1).await;
}

#[actix_web::test]
#[serial]
async fn test_create_player_rejects_invalid_payloads() {
    common::setup_test_env();
    let ctx = TestContext::new().await.unwrap();
    let team = seeded_team(&ctx).await;
    let app = test::init_service(App::new().app_data(ctx.state()).configure(routes::configure)).await;

    let cases = [
        (json!({ "position": "Forward" }), "Player full name is required"),
        (
            json!({ "full_name": "Nobody", "team_id": 9999 }),
            "Team 9999 does not exist",
        ),
        (
            json!({ "full_name": "Too Good", "team_id": team.id, "rating": 11 }),
            "Rating must be between 1 and 10, got 11",
        ),
        (
            json!({ "full_name": "Too Bad", "rating": 0 }),
            "Rating must be between 1 and 10, got 0",
        ),
        (
            json!({
                "full_name": "Backwards",
                "contract_start": "2024-01-01",
                "contract_end": "2023-01-01"
            }),
            "Contract end must not be before contract start",
        ),
    ];

    for (payload, expected) in cases {
        let req = test::TestRequest::post()
            .uri("/api/players")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", payload);

        let body = test::read_body(resp).await;
        assert_eq!(TestAssertions::assert_error_response(&body), expected);
    }

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({ "full_name": "Bad Date", "date_of_birth": "24/06/1987" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(resp).await;
    assert!(TestAssertions::assert_error_response(&body).contains("date_of_birth"));

    TestAssertions::assert_record_count(&ctx.pool, "players", 0).await;
}

#[actix_web::test]
#[serial]
async fn test_player_without_team_is_allowed() {
    common::setup_test_env();
    let ctx = TestContext::new().await.unwrap();
    let app = test::init_service(App::new().app_data(ctx.state()).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({ "full_name": "Free Agent" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = test::read_body(resp).await;
    let player: Player = TestAssertions::assert_success_response(&body);
    assert_eq!(player.team_id, None);
    assert_eq!(player.rating, None);
}

#[actix_web::test]
#[serial]
async fn test_injury_details_cleared_for_fit_players() {
    common::setup_test_env();
    let ctx = TestContext::new().await.unwrap();
    let team = seeded_team(&ctx).await;
    let app = test::init_service(App::new().app_data(ctx.state()).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({
            "full_name": "Sergio Busquets",
            "team_id": team.id,
            "is_injured": false,
            "injury_details": "Ankle sprain"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body = test::read_body(resp).await;
    let player: Player = TestAssertions::assert_success_response(&body);
    assert_eq!(player.injury_details, None);

    let req = test::TestRequest::put()
        .uri(&format!("/api/players/{}", player.id))
        .set_json(json!({ "is_injured": true, "injury_details": "Ankle sprain" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let player: Player = TestAssertions::assert_success_response(&body);
    assert!(player.is_injured);
    assert_eq!(player.injury_details.as_deref(), Some("Ankle sprain"));

    let req = test::TestRequest::put()
        .uri(&format!("/api/players/{}", player.id))
        .set_json(json!({ "is_injured": false }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body = test::read_body(resp).await;
    let player: Player = TestAssertions::assert_success_response(&body);
    assert!(!player.is_injured);
    assert_eq!(player.injury_details, None);
}

#[actix_web::test]
#[serial]
async fn test_list_players_with_filters() {
    common::setup_test_env();
    let ctx = TestContext::new().await.unwrap();
    let barca = seeded_team(&ctx).await;
    let united = ctx
        .insert_team(TestFixtures::team("Manchester United", "England", "Premier League"))
        .await
        .unwrap();

    ctx.insert_player(TestFixtures::player("Lionel Messi", barca.id, "Forward", 10, 1.0))
        .await
        .unwrap();
    ctx.insert_player(TestFixtures::injured(
        TestFixtures::player("Sergio Busquets", barca.id, "Midfielder", 8, 1.0),
        "Ankle sprain",
    ))
    .await
    .unwrap();
    ctx.insert_player(TestFixtures::player("Marcus Rashford", united.id, "Forward", 8, 1.0))
        .await
        .unwrap();
    ctx.insert_player(TestFixtures::injured(
        TestFixtures::player("Harry Maguire", united.id, "Defender", 7, 1.0),
        "Hamstring",
    ))
    .await
    .unwrap();
    let app = test::init_service(App::new().app_data(ctx.state()).configure(routes::configure)).await;

    let cases = [
        (
            "/api/players".to_string(),
            vec!["Lionel Messi", "Sergio Busquets", "Marcus Rashford", "Harry Maguire"],
        ),
        (
            format!("/api/players?team_id={}", barca.id),
            vec!["Lionel Messi", "Sergio Busquets"],
        ),
        (
            "/api/players?position=Forward".to_string(),
            vec!["Lionel Messi", "Marcus Rashford"],
        ),
        (
            "/api/players?injured=true".to_string(),
            vec!["Sergio Busquets", "Harry Maguire"],
        ),
        (
            "/api/players?injured=TRUE".to_string(),
            vec!["Sergio Busquets", "Harry Maguire"],
        ),
        (
            "/api/players?injured=false".to_string(),
            vec!["Lionel Messi", "Marcus Rashford"],
        ),
        (
            format!("/api/players?team_id={}&injured=true", united.id),
            vec!["Harry Maguire"],
        ),
        ("/api/players?team_id=".to_string(), vec![
            "Lionel Messi",
            "Sergio Busquets",
            "Marcus Rashford",
            "Harry Maguire",
        ]),
    ];

    for (uri, expected) in cases {
        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);

        let body = test::read_body(resp).await;
        let players: Vec<Player> = TestAssertions::assert_success_response(&body);
        let names: Vec<&str> = players.iter().map(|p| p.full_name.as_str()).collect();
        assert_eq!(names, expected, "{}", uri);
    }

    let req = test::TestRequest::get()
        .uri("/api/players?team_id=barca")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
#[serial]
async fn test_update_player_partial_and_team_checks() {
    common::setup_test_env();
    let ctx = TestContext::new().await.unwrap();
    let barca = seeded_team(&ctx).await;
    let juve = ctx
        .insert_team(TestFixtures::team("Juventus", "Italy", "Serie A"))
        .await
        .unwrap();
    let player = ctx
        .insert_player(TestFixtures::player("Jordi Alba", barca.id, "Defender", 7, 25_000_000.0))
        .await
        .unwrap();
    let app = test::init_service(App::new().app_data(ctx.state()).configure(routes::configure)).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/players/{}", player.id))
        .set_json(json!({ "jersey_number": 18, "team_id": juve.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let updated: Player = TestAssertions::assert_success_response(&body);
    assert_eq!(updated.jersey_number, Some(18));
    assert_eq!(updated.team_id, Some(juve.id));
    assert_eq!(updated.full_name, "Jordi Alba");
    assert_eq!(updated.rating, Some(7));
    assert_eq!(updated.player_value, Some(25_000_000.0));

    let req = test::TestRequest::put()
        .uri(&format!("/api/players/{}", player.id))
        .set_json(json!({ "team_id": 9999 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri(&format!("/api/players/{}", player.id))
        .set_json(json!({ "rating": 42 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri(&format!("/api/players/{}", player.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body = test::read_body(resp).await;
    let stored: Player = TestAssertions::assert_success_response(&body);
    assert_eq!(stored, updated);

    let req = test::TestRequest::put()
        .uri("/api/players/9999")
        .set_json(json!({ "rating": 5 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = test::read_body(resp).await;
    assert_eq!(TestAssertions::assert_error_response(&body), "Player not found");
}

#[actix_web::test]
#[serial]
async fn test_blank_dates_are_ignored_on_create_and_update() {
    common::setup_test_env();
    let ctx = TestContext::new().await.unwrap();
    let team = seeded_team(&ctx).await;
    let app = test::init_service(App::new().app_data(ctx.state()).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({
            "full_name": "Pedri",
            "date_of_birth": "",
            "contract_start": "",
            "contract_end": "",
            "position": "Midfielder",
            "team_id": team.id
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = test::read_body(resp).await;
    let player: Player = TestAssertions::assert_success_response(&body);
    assert_eq!(player.date_of_birth, None);
    assert_eq!(player.contract_start, None);
    assert_eq!(player.contract_end, None);

    let req = test::TestRequest::put()
        .uri(&format!("/api/players/{}", player.id))
        .set_json(json!({ "date_of_birth": "2002-11-25", "contract_end": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let player: Player = TestAssertions::assert_success_response(&body);
    assert_eq!(player.date_of_birth, NaiveDate::from_ymd_opt(2002, 11, 25));

    let req = test::TestRequest::put()
        .uri(&format!("/api/players/{}", player.id))
        .set_json(json!({ "date_of_birth": "", "jersey_number": 8 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let player: Player = TestAssertions::assert_success_response(&body);
    assert_eq!(player.date_of_birth, NaiveDate::from_ymd_opt(2002, 11, 25));
    assert_eq!(player.jersey_number, Some(8));
}

#[actix_web::test]
#[serial]
async fn test_update_player_null_clears_rating_and_team() {
    common::setup_test_env();
    let ctx = TestContext::new().await.unwrap();
    let team = seeded_team(&ctx).await;
    let player = ctx
        .insert_player(TestFixtures::player("Sergi Roberto", team.id, "Defender", 8, 1.0))
        .await
        .unwrap();
    let app = test::init_service(App::new().app_data(ctx.state()).configure(routes::configure)).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/players/{}", player.id))
        .set_json(json!({ "team_id": null, "rating": null }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let updated: Player = TestAssertions::assert_success_response(&body);
    assert_eq!(updated.team_id, None);
    assert_eq!(updated.rating, None);
    assert_eq!(updated.position.as_deref(), Some("Defender"));
    assert_eq!(updated.nationality.as_deref(), Some("Spain"));

    let req = test::TestRequest::get()
        .uri(&format!("/api/players?team_id={}", team.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body = test::read_body(resp).await;
    let roster: Vec<Player> = TestAssertions::assert_success_response(&body);
    assert!(roster.is_empty());

    let req = test::TestRequest::put()
        .uri(&format!("/api/players/{}", player.id))
        .set_json(json!({ "team_id": team.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let reassigned: Player = TestAssertions::assert_success_response(&body);
    assert_eq!(reassigned.team_id, Some(team.id));
    assert_eq!(reassigned.rating, None);
}

#[actix_web::test]
#[serial]
async fn test_delete_player_keeps_team() {
    common::setup_test_env();
    let ctx = TestContext::new().await.unwrap();
    let team = seeded_team(&ctx).await;
    let player = ctx
        .insert_player(TestFixtures::player("Gerard Piqué", team.id, "Defender", 8, 1.0))
        .await
        .unwrap();
    let app = test::init_service(App::new().app_data(ctx.state()).configure(routes::configure)).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/players/{}", player.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Player deleted successfully");

    TestAssertions::assert_record_count(&ctx.pool, "players", 0).await;
    TestAssertions::assert_record_count(&ctx.pool, "teams", 1).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/players/{}", player.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/players/{}", player.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let log = std::fs::read_to_string(ctx.activity_log()).unwrap();
    assert!(log.contains(&format!("player {} deleted", player.id)));
}
