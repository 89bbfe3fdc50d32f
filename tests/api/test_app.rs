use crate::helpers::TRACING;
use crate::test_data::post_one_json;
use reqwest::Url;
use restmapper::configuration::{Settings, get_configuration};
use restmapper::object_mapper::ObjectMapper;
use restmapper::rest_client::RestClient;
use std::sync::LazyLock;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A mock REST API standing in for jsonplaceholder, plus a fresh mapper and
/// client for the current test case.
pub struct TestApi {
    pub api_server: MockServer,
    pub rest_client: RestClient,
    pub object_mapper: ObjectMapper,
}

impl TestApi {
    pub fn url(&self, path: &str) -> Url {
        Url::parse(&format!("{}{}", self.api_server.uri(), path))
            .expect("Mock server produced an invalid URL.")
    }

    /// Serve `/posts/1` exactly `times` times.
    pub async fn mount_post_one(&self, times: u64) {
        Mock::given(path("/posts/1"))
            .and(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(post_one_json())
                    .insert_header("X-Ratelimit-Limit", "1000"),
            )
            .expect(times)
            .named("GET /posts/1")
            .mount(&self.api_server)
            .await;
    }

    /// Configuration pointing the REST client at the mock server.
    pub fn configuration(&self) -> Settings {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.rest_client.base_url = self.api_server.uri();
        c.rest_client.timeout_milliseconds = 2000;
        c
    }
}

pub async fn spawn_api() -> TestApi {
    LazyLock::force(&TRACING);

    let api_server = MockServer::start().await;
    let rest_client = RestClient::new(std::time::Duration::from_secs(2))
        .expect("Failed to build the REST client.");

    TestApi {
        api_server,
        rest_client,
        object_mapper: ObjectMapper::new(),
    }
}
