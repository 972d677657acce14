//! Optional real round-trip to a running `pet-server`.

use std::time::Duration;

use pet_core::{Envelope, HttpRequest, HttpResponse, PetClient, Verb};
use serde_json::{json, Value};

/// Executes requests built by `PetClient` with ureq on the blocking pool.
#[derive(Clone)]
pub struct Remote {
    client: PetClient,
    agent: ureq::Agent,
}

/// Body sent with write verbs: the pet's name and the mood it is about to
/// show.
pub fn payload(verb: Verb) -> Value {
    json!({
        "name": verb.profile().name,
        "mood": verb.mood().as_str(),
    })
}

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

impl Remote {
    /// `timeout` bounds each whole round-trip, connect through body read.
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self {
            client: PetClient::new(base_url),
            agent,
        }
    }

    pub async fn send(&self, verb: Verb) -> anyhow::Result<Envelope> {
        let req = self.client.build(verb, &payload(verb))?;
        let agent = self.agent.clone();
        tracing::debug!(%verb, path = %req.path, "sending request");
        let response = tokio::task::spawn_blocking(move || execute(&agent, req)).await??;
        Ok(self.client.parse_envelope(verb, response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_names_the_pet() {
        let body = payload(Verb::Put);
        assert_eq!(body["name"], "Foxxy");
        assert_eq!(body["mood"], "transformed");
    }

    #[tokio::test]
    async fn unreachable_server_is_an_error() {
        // Nothing listens on the discard port.
        let remote = Remote::new("http://127.0.0.1:9", Duration::from_secs(5));
        assert!(remote.send(Verb::Get).await.is_err());
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        // The kernel completes the handshake but nobody ever answers.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let remote = Remote::new(&format!("http://{addr}"), Duration::from_millis(200));

        let result = tokio::time::timeout(Duration::from_secs(10), remote.send(Verb::Get))
            .await
            .expect("request should give up on its own");
        assert!(result.is_err());
        drop(listener);
    }
}
