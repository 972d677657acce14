//! Round-trip every verb against the live mock server.
//!
//! # Design
//! Starts the server on a random port, then executes each request built by
//! `PetClient` over real HTTP using ureq. Catches schema drift between the
//! server's envelope and the core's `Envelope`.

use pet_core::{ApiError, EnvelopeStatus, HttpRequest, HttpResponse, PetClient, Verb};
use serde_json::json;

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Same executor the playground uses for `--server`. Disables ureq's
/// status-code-as-error behavior so 4xx/5xx responses come back as data and
/// the core client interprets them.
fn execute(agent: &ureq::Agent, req: HttpRequest) -> Result<HttpResponse, ureq::Error> {
    let mut response = match (req.method, req.body) {
        (Verb::Get, _) => agent.get(&req.path).call(),
        (Verb::Delete, _) => agent.delete(&req.path).call(),
        (Verb::Post, Some(body)) => agent.post(&req.path).content_type("application/json").send(body.as_bytes()),
        (Verb::Post, None) => agent.post(&req.path).send_empty(),
        (Verb::Put, Some(body)) => agent.put(&req.path).content_type("application/json").send(body.as_bytes()),
        (Verb::Put, None) => agent.put(&req.path).send_empty(),
        (Verb::Patch, Some(body)) => agent.patch(&req.path).content_type("application/json").send(body.as_bytes()),
        (Verb::Patch, None) => agent.patch(&req.path).send_empty(),
    }?;

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string()?;
    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}

fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

/// Round-trip `req` against the live server; transport failures fail the test.
fn round_trip(req: HttpRequest) -> HttpResponse {
    execute(&agent(), req).expect("HTTP transport error")
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            pet_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn every_verb_round_trips() {
    let client = PetClient::new(&start_server());
    let body = json!({"name": "Pando", "mood": "changed"});

    // GET: canned pet.
    let envelope = client.parse_envelope(Verb::Get, round_trip(client.build_get())).unwrap();
    assert_eq!(envelope.status, EnvelopeStatus::Success);
    assert_eq!(envelope.data.as_ref().unwrap()["name"], "Happy Pet");

    // POST: body spliced in, 201.
    let req = client.build_create(&body).unwrap();
    let envelope = client.parse_envelope(Verb::Post, round_trip(req)).unwrap();
    assert_eq!(envelope.status, EnvelopeStatus::Created);
    let data = envelope.data.unwrap();
    assert_eq!(data["name"], "Pando");
    assert!(data["createdAt"].is_string());

    // PUT: body spliced in, marked replaced.
    let req = client.build_replace(&body).unwrap();
    let envelope = client.parse_envelope(Verb::Put, round_trip(req)).unwrap();
    assert_eq!(envelope.status, EnvelopeStatus::Updated);
    assert_eq!(envelope.data.unwrap()["replaced"], true);

    // PATCH: body nested under changes.
    let req = client.build_patch(&body).unwrap();
    let envelope = client.parse_envelope(Verb::Patch, round_trip(req)).unwrap();
    assert_eq!(envelope.status, EnvelopeStatus::PartiallyUpdated);
    assert_eq!(envelope.data.unwrap()["changes"], body);

    // DELETE: null data.
    let envelope = client.parse_envelope(Verb::Delete, round_trip(client.build_delete())).unwrap();
    assert_eq!(envelope.status, EnvelopeStatus::Deleted);
    assert!(envelope.data.is_none());
}

#[test]
fn build_dispatch_matches_server_for_all_verbs() {
    let client = PetClient::new(&start_server());
    for verb in Verb::ALL {
        let req = client.build(verb, &json!({"verb": verb.as_str()})).unwrap();
        let envelope = client.parse_envelope(verb, round_trip(req)).unwrap();
        assert_eq!(envelope.method, verb.as_str());
        assert_eq!(envelope.message, format!("{verb} request received"));
    }
}

#[test]
fn non_object_put_spreads_index_keys() {
    let client = PetClient::new(&start_server());
    let req = client.build_replace(&json!(["not", "an", "object"])).unwrap();
    let envelope = client.parse_envelope(Verb::Put, round_trip(req)).unwrap();
    let data = envelope.data.unwrap();
    assert_eq!(data["0"], "not");
    assert_eq!(data["2"], "object");
    assert_eq!(data["replaced"], true);
}

#[test]
fn scalar_post_is_created() {
    let client = PetClient::new(&start_server());
    let req = client.build_create(&json!(42)).unwrap();
    let envelope = client.parse_envelope(Verb::Post, round_trip(req)).unwrap();
    let data = envelope.data.unwrap();
    assert_eq!(data.as_object().unwrap().len(), 2);
}

#[test]
fn malformed_body_surfaces_as_unexpected_status() {
    let client = PetClient::new(&start_server());
    let mut req = client.build_patch(&json!({})).unwrap();
    req.body = Some("{not json".to_string());
    let err = client.parse_envelope(Verb::Patch, round_trip(req)).unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedStatus { status: 400, .. }));
}
