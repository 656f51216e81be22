use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tower::ServiceExt;
use zkns_api::{create_api_routes, AppState};
use zkns_application::{
    ports::ServiceSetReader,
    use_cases::{
        GetDomainMetadataUseCase, LookupUseCase, ResolveServiceSetUseCase,
        SynthesizeRecordsUseCase,
    },
};
use zkns_domain::{
    config::{SoaConfig, ZoneConfig},
    DomainError, ServiceInstance, SoaRecord,
};

#[derive(Clone, Default)]
struct InMemoryServiceSets {
    sets: Arc<RwLock<HashMap<String, Vec<ServiceInstance>>>>,
    unavailable: Arc<RwLock<bool>>,
}

impl InMemoryServiceSets {
    fn insert(&self, path: &str, members: Vec<ServiceInstance>) {
        self.sets.write().unwrap().insert(path.to_string(), members);
    }

    fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write().unwrap() = unavailable;
    }
}

#[async_trait::async_trait]
impl ServiceSetReader for InMemoryServiceSets {
    async fn read_service_set(&self, path: &str) -> Result<Vec<ServiceInstance>, DomainError> {
        if *self.unavailable.read().unwrap() {
            return Err(DomainError::StoreUnavailable("connection loss".to_string()));
        }
        Ok(self.sets.read().unwrap().get(path).cloned().unwrap_or_default())
    }
}

fn create_test_app() -> (Router, InMemoryServiceSets) {
    let store = InMemoryServiceSets::default();
    store.insert(
        "prod/web",
        vec![
            ServiceInstance::new("10.0.0.1", 31000, Some(0)),
            ServiceInstance::new("10.0.0.2", 31000, Some(1)),
        ],
    );

    let zone = ZoneConfig {
        domain: "zk.example.com".to_string(),
        ttl: 60,
    };
    let soa = Arc::new(SoaRecord::from_config(&zone.domain, &SoaConfig::default()));

    let resolver = Arc::new(ResolveServiceSetUseCase::new(
        Arc::new(store.clone()),
        &zone.domain,
    ));
    let records = Arc::new(SynthesizeRecordsUseCase::new(resolver, soa, &zone));

    let state = AppState {
        lookup: Arc::new(LookupUseCase::new(records)),
        get_domain_metadata: Arc::new(GetDomainMetadataUseCase::new()),
    };

    (create_api_routes(state), store)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

// ── lookup ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_lookup_a_returns_all_members() {
    let (app, _store) = create_test_app();

    let (status, json) = get_json(app, "/lookup/web.prod.zk.example.com./A").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "result": [
                {"qtype": "A", "qname": "web.prod.zk.example.com.", "ttl": 60, "content": "10.0.0.1"},
                {"qtype": "A", "qname": "web.prod.zk.example.com.", "ttl": 60, "content": "10.0.0.2"}
            ]
        })
    );
}

#[tokio::test]
async fn test_lookup_any_with_shard_returns_one_member() {
    let (app, _store) = create_test_app();

    let (status, json) = get_json(app, "/lookup/1.web.prod.zk.example.com/ANY").await;

    assert_eq!(status, StatusCode::OK);
    let records = json["result"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["qtype"], "A");
    assert_eq!(records[0]["content"], "10.0.0.2");
}

#[tokio::test]
async fn test_lookup_miss_is_empty_list_not_false() {
    let (app, _store) = create_test_app();

    let (status, json) = get_json(app, "/lookup/nothing.here.zk.example.com/A").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"result": []}));
}

#[tokio::test]
async fn test_lookup_soa_in_zone() {
    let (app, _store) = create_test_app();

    let (status, json) = get_json(app, "/lookup/ZK.Example.com./SOA").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "result": [{
                "qtype": "SOA",
                "qname": "zk.example.com",
                "ttl": 300,
                "content": "ns1.zk.example.com root.zk.example.com 1200 1 180 86400 60"
            }]
        })
    );
}

#[tokio::test]
async fn test_lookup_soa_outside_zone_is_false() {
    let (app, _store) = create_test_app();

    let (status, json) = get_json(app, "/lookup/example.com./SOA").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"result": false}));
}

#[tokio::test]
async fn test_lookup_unsupported_type_is_false() {
    let (app, _store) = create_test_app();

    for qtype in ["AAAA", "NS", "SRV", "MX"] {
        let (status, json) =
            get_json(app.clone(), &format!("/lookup/web.prod.zk.example.com/{}", qtype)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"result": false}), "qtype {}", qtype);
    }
}

#[tokio::test]
async fn test_lookup_store_unavailable_is_service_unavailable() {
    let (app, store) = create_test_app();
    store.set_unavailable(true);

    let (status, json) = get_json(app, "/lookup/web.prod.zk.example.com/A").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["result"], false);
    assert!(json["log"][0].as_str().unwrap().contains("connection loss"));
}

#[tokio::test]
async fn test_lookup_sees_membership_changes() {
    let (app, store) = create_test_app();

    store.insert("prod/web", vec![ServiceInstance::new("10.9.9.9", 31000, None)]);

    let (_, json) = get_json(app, "/lookup/web.prod.zk.example.com/A").await;
    assert_eq!(json["result"][0]["content"], "10.9.9.9");
}

// ── getDomainMetadata ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_domain_metadata_soa_edit() {
    let (app, _store) = create_test_app();

    let (status, json) = get_json(app, "/getDomainMetadata/zk.example.com./SOA-EDIT").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"result": ["EPOCH"]}));
}

#[tokio::test]
async fn test_get_domain_metadata_other_kind_is_false() {
    let (app, _store) = create_test_app();

    let (status, json) =
        get_json(app, "/getDomainMetadata/zk.example.com./ALLOW-AXFR-FROM").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"result": false}));
}

#[tokio::test]
async fn test_unknown_method_is_not_found() {
    let (app, _store) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/getAllDomains")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
