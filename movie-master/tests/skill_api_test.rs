use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use movie_master::{OmdbClient, build_router, create_app_state};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const APP_ID: &str = "amzn1.ask.skill.test";

// Helper to build the router against a mock movie service
fn setup_app(server: &MockServer) -> Router {
    let client = OmdbClient::new(format!("{}/", server.uri()), "test-key").expect("client");
    build_router(create_app_state(Arc::new(client), &[APP_ID.to_string()]))
}

fn intent_envelope(app_id: &str, intent: &str, title: Option<&str>) -> Value {
    let slots = match title {
        Some(t) => json!({ "name": { "name": "name", "value": t } }),
        None => json!({}),
    };
    json!({
        "version": "1.0",
        "session": {
            "new": false,
            "sessionId": "amzn1.echo-api.session.1",
            "application": { "applicationId": app_id },
            "attributes": {},
            "user": { "userId": "amzn1.ask.account.1" }
        },
        "request": {
            "type": "IntentRequest",
            "requestId": "amzn1.echo-api.request.1",
            "timestamp": "2016-10-27T18:21:44Z",
            "locale": "en-US",
            "intent": { "name": intent, "slots": slots }
        }
    })
}

async fn post(app: Router, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri("/")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_movie_info_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("t", "The Godfather"))
        .and(query_param("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Title": "The Godfather",
            "Plot": "N/A",
            "Actors": "Marlon Brando, Al Pacino",
            "Director": "Francis Ford Coppola",
            "imdbRating": "9.2",
            "Response": "True"
        })))
        .mount(&server)
        .await;

    let (status, body) = post(
        setup_app(&server),
        intent_envelope(APP_ID, "GetMovieInfoIntent", Some("The Godfather.")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], "1.0");
    assert_eq!(body["response"]["shouldEndSession"], false);
    assert_eq!(body["response"]["outputSpeech"]["type"], "SSML");
    assert_eq!(
        body["response"]["outputSpeech"]["ssml"],
        "<speak><p>For movie The Godfather, </p> \
         <p>Marlon Brando, Al Pacino acted in this movie.</p> \
         <p>Francis Ford Coppola directed this movie.</p> \
         <p>This movie is rated 9.2 on IMDB.</p> </speak>"
    );
    assert_eq!(
        body["response"]["card"]["title"],
        "Information for movie The Godfather"
    );
    assert_eq!(body["response"]["reprompt"]["outputSpeech"]["type"], "PlainText");
}

#[tokio::test]
async fn test_unknown_title_is_a_terminating_answer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": "False",
            "Error": "Movie not found!"
        })))
        .mount(&server)
        .await;

    let (status, body) = post(
        setup_app(&server),
        intent_envelope(APP_ID, "GetMovieRatingIntent", Some("Asdfgh")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"]["shouldEndSession"], true);
    assert_eq!(
        body["response"]["outputSpeech"]["ssml"],
        "<speak><p>No movies were found under the title Asdfgh. Try again with a different name.</p></speak>"
    );
    assert!(body["response"].get("card").is_none());
}

#[tokio::test]
async fn test_listings_use_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("s", "star wars"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Search": [],
            "totalResults": "87",
            "Response": "True"
        })))
        .mount(&server)
        .await;

    let (status, body) = post(
        setup_app(&server),
        intent_envelope(APP_ID, "GetMovieListingsIntent", Some("star wars")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["response"]["card"]["content"],
        "Found 87 movie listings with title star wars in it. "
    );
}

#[tokio::test]
async fn test_invalid_intent_is_a_server_error() {
    let server = MockServer::start().await;

    let (status, body) = post(
        setup_app(&server),
        intent_envelope(APP_ID, "GetMovieTrailerIntent", Some("Heat")),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("Invalid Intent"));
}

#[tokio::test]
async fn test_foreign_application_is_forbidden() {
    let server = MockServer::start().await;

    let (status, _) = post(
        setup_app(&server),
        intent_envelope("amzn1.ask.skill.other", "AMAZON.HelpIntent", None),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_launch_and_stop() {
    let server = MockServer::start().await;
    let app = setup_app(&server);

    let launch = json!({
        "version": "1.0",
        "session": {
            "new": true,
            "sessionId": "amzn1.echo-api.session.2",
            "application": { "applicationId": APP_ID }
        },
        "request": { "type": "LaunchRequest", "requestId": "amzn1.echo-api.request.2" }
    });
    let (status, body) = post(app.clone(), launch).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["response"]["outputSpeech"]["text"],
        "Welcome to Movie Master. What would you like to know about?"
    );
    assert_eq!(body["response"]["shouldEndSession"], false);

    let (status, body) = post(app, intent_envelope(APP_ID, "AMAZON.StopIntent", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"]["outputSpeech"]["text"], "Goodbye");
    assert_eq!(body["response"]["shouldEndSession"], true);
}

#[tokio::test]
async fn test_malformed_body_is_a_bad_request() {
    let server = MockServer::start().await;

    let (status, _) = post(setup_app(&server), json!({ "request": "nope" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;
    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = setup_app(&server).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
