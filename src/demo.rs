//! src/demo.rs
use crate::configuration::Settings;
use crate::domain::{JoinRequest, Post};
use crate::object_mapper::{ObjectMapper, TypeReference};
use crate::rest_client::RestClient;
use crate::uri_builder::UriComponentsBuilder;
use anyhow::Context;
use reqwest::{StatusCode, Url};

const SAMPLE_POST_ID: u64 = 1;
const SAMPLE_URI_BASE: &str = "https://www.naver.com";

/// What each demonstration produced, so callers can check it instead of
/// reading the logs.
#[derive(Debug)]
pub struct DemoReport {
    pub join_request_json: String,
    pub join_requests_json: String,
    pub join_requests: Vec<JoinRequest>,
    pub uri: Url,
    pub post: Post,
    pub entity_status: StatusCode,
    pub entity_post: Option<Post>,
}

pub fn sample_join_requests(count: usize) -> Vec<JoinRequest> {
    (1..=count)
        .map(|i| {
            JoinRequest::builder()
                .email(format!("user{}@test.org", i))
                .password("1234")
                .confirm_password("1234")
                .name(format!("사용자{}", i))
                .build()
        })
        .collect()
}

pub async fn run_demo(configuration: Settings) -> Result<DemoReport, anyhow::Error> {
    let object_mapper = ObjectMapper::new();
    let rest_client = configuration
        .rest_client
        .client()
        .context("Failed to build the REST client")?;

    let (join_request_json, join_requests_json, join_requests) = map_join_requests(&object_mapper)?;
    let uri = build_sample_uri()?;

    let post_uri = UriComponentsBuilder::from_uri_string(format!(
        "{}/posts/{}",
        configuration.rest_client.base_url.trim_end_matches('/'),
        SAMPLE_POST_ID
    ))
    .build()?;
    let (post, entity_status, entity_post) = fetch_post(&rest_client, &post_uri).await?;

    Ok(DemoReport {
        join_request_json,
        join_requests_json,
        join_requests,
        uri,
        post,
        entity_status,
        entity_post,
    })
}

#[tracing::instrument(name = "Mapping join requests", skip_all)]
fn map_join_requests(
    object_mapper: &ObjectMapper,
) -> Result<(String, String, Vec<JoinRequest>), anyhow::Error> {
    let mut form = JoinRequest::default();
    form.email = "user01@test.org".into();
    form.password = "1234".into();
    form.confirm_password = "1234".into();
    form.name = "사용자01".into();

    let json = object_mapper.write_value_as_string(&form)?;
    tracing::info!(%json, "Encoded a single join request");
    let decoded: JoinRequest = object_mapper.read_value(&json)?;
    tracing::info!(form = %decoded, "Decoded a single join request");

    let items = sample_join_requests(10);
    let items_json = object_mapper.write_value_as_string(&items)?;
    tracing::info!(json = %items_json, "Encoded a list of join requests");
    let decoded_items =
        object_mapper.read_value_as(&items_json, TypeReference::<Vec<JoinRequest>>::new())?;
    for item in &decoded_items {
        tracing::info!(form = %item, "Decoded join request");
    }

    Ok((json, items_json, decoded_items))
}

#[tracing::instrument(name = "Building sample URI")]
fn build_sample_uri() -> Result<Url, anyhow::Error> {
    let uri = UriComponentsBuilder::from_uri_string(SAMPLE_URI_BASE)
        .query_param("k1", "v1")
        .query_param("k2", "v2")
        .query_param("k3", "한글")
        .fragment("header")
        .build()?;
    tracing::info!(%uri, "Built URI");
    Ok(uri)
}

#[tracing::instrument(name = "Fetching sample post", skip(rest_client, uri), fields(uri = %uri))]
async fn fetch_post(
    rest_client: &RestClient,
    uri: &Url,
) -> Result<(Post, StatusCode, Option<Post>), anyhow::Error> {
    let post: Post = rest_client.get_for_object(uri).await?;
    tracing::info!(%post, "Fetched post body");

    let entity = rest_client.get_for_entity::<Post>(uri).await?;
    tracing::info!(
        status = %entity.status,
        headers = ?entity.headers,
        has_body = entity.has_body(),
        "Fetched post entity"
    );

    Ok((post, entity.status, entity.body))
}
