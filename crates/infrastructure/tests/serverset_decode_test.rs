use zkns_domain::ServiceInstance;
use zkns_infrastructure::zookeeper::{collect_members, decode_member, is_member_node};

#[test]
fn test_decode_full_member() {
    let data = br#"{
        "serviceEndpoint": {"host": "10.0.0.1", "port": 31000},
        "additionalEndpoints": {
            "http": {"host": "10.0.0.1", "port": 31001},
            "admin": {"host": "10.0.0.1", "port": 31002}
        },
        "status": "ALIVE",
        "shard": 3
    }"#;

    let instance = decode_member(data).unwrap();

    assert_eq!(instance, ServiceInstance::new("10.0.0.1", 31000, Some(3)));
}

#[test]
fn test_decode_member_without_shard() {
    let data = br#"{"serviceEndpoint": {"host": "web-1.prod", "port": 8080}, "status": "ALIVE"}"#;

    let instance = decode_member(data).unwrap();

    assert_eq!(instance.host, "web-1.prod");
    assert_eq!(instance.port, 8080);
    assert_eq!(instance.shard, None);
}

#[test]
fn test_decode_member_ignores_unknown_fields() {
    let data = br#"{"serviceEndpoint": {"host": "h", "port": 1}, "metadata": {"k": "v"}}"#;
    assert!(decode_member(data).is_ok());
}

#[test]
fn test_decode_rejects_missing_endpoint() {
    assert!(decode_member(br#"{"status": "ALIVE", "shard": 1}"#).is_err());
}

#[test]
fn test_decode_rejects_non_json() {
    assert!(decode_member(b"\x0c\x00\x01\x0b\x00\x01").is_err());
    assert!(decode_member(b"").is_err());
}

#[test]
fn test_decode_rejects_negative_shard() {
    let data = br#"{"serviceEndpoint": {"host": "h", "port": 1}, "shard": -1}"#;
    assert!(decode_member(data).is_err());
}

#[test]
fn test_member_node_names() {
    assert!(is_member_node("member_0000000000"));
    assert!(!is_member_node("leader"));
}

fn member(host: &str, port: u16) -> Option<Vec<u8>> {
    Some(
        format!(
            r#"{{"serviceEndpoint": {{"host": "{}", "port": {}}}, "status": "ALIVE"}}"#,
            host, port
        )
        .into_bytes(),
    )
}

#[test]
fn test_collect_members_in_child_name_order() {
    let children = vec![
        ("member_0000000002".to_string(), member("10.0.0.3", 3)),
        ("member_0000000000".to_string(), member("10.0.0.1", 1)),
        ("member_0000000001".to_string(), member("10.0.0.2", 2)),
    ];

    let instances = collect_members("/prod/web", children);

    let hosts: Vec<_> = instances.iter().map(|i| i.host.as_str()).collect();
    assert_eq!(hosts, vec!["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
}

#[test]
fn test_collect_members_skips_other_children_and_bad_members() {
    let children = vec![
        ("member_0000000004".to_string(), member("10.0.0.5", 5)),
        ("lock".to_string(), member("10.0.0.9", 9)),
        ("member_0000000001".to_string(), Some(b"not json".to_vec())),
        ("member_0000000002".to_string(), None),
        ("member_0000000000".to_string(), member("10.0.0.1", 1)),
    ];

    let instances = collect_members("/prod/web", children);

    assert_eq!(
        instances,
        vec![
            ServiceInstance::new("10.0.0.1", 1, None),
            ServiceInstance::new("10.0.0.5", 5, None),
        ]
    );
}

#[test]
fn test_collect_members_with_nothing_readable_is_empty() {
    let children = vec![
        ("member_0000000000".to_string(), None),
        ("config".to_string(), Some(b"{}".to_vec())),
    ];

    assert!(collect_members("/prod/web", children).is_empty());
}
