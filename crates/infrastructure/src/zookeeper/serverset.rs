//! Decoding of finagle / twitter-commons serverset members.
//!
//! A serverset is a znode whose children are ephemeral `member_NNNNNNNNNN`
//! nodes, each holding a JSON document such as:
//!
//! ```json
//! {
//!   "serviceEndpoint": {"host": "10.0.0.1", "port": 31000},
//!   "additionalEndpoints": {"http": {"host": "10.0.0.1", "port": 31001}},
//!   "status": "ALIVE",
//!   "shard": 0
//! }
//! ```

use serde::Deserialize;
use tracing::{debug, warn};
use zkns_domain::ServiceInstance;

pub const MEMBER_PREFIX: &str = "member_";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServerSetMember {
    service_endpoint: Endpoint,
    #[serde(default)]
    shard: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct Endpoint {
    host: String,
    port: u16,
}

/// Whether a child znode name is a serverset member.
pub fn is_member_node(name: &str) -> bool {
    name.starts_with(MEMBER_PREFIX)
}

/// Decodes one member payload. Fields other than the service endpoint and
/// shard are ignored.
pub fn decode_member(data: &[u8]) -> Result<ServiceInstance, serde_json::Error> {
    let member: ServerSetMember = serde_json::from_slice(data)?;

    Ok(ServiceInstance::new(
        member.service_endpoint.host,
        member.service_endpoint.port,
        member.shard,
    ))
}

/// Turns the children read under `node` into instances.
///
/// Each child comes with its payload, or `None` when it vanished between
/// listing and reading. Non-member children, vanished members and members
/// that fail to decode are skipped. The rest are returned in child-name
/// order, which for sequential members is registration order.
pub fn collect_members<I>(node: &str, children: I) -> Vec<ServiceInstance>
where
    I: IntoIterator<Item = (String, Option<Vec<u8>>)>,
{
    let mut children: Vec<_> = children
        .into_iter()
        .filter(|(name, _)| is_member_node(name))
        .collect();
    children.sort_by(|a, b| a.0.cmp(&b.0));

    children
        .into_iter()
        .filter_map(|(name, data)| {
            let Some(data) = data else {
                debug!(path = %node, member = %name, "Member vanished during read");
                return None;
            };

            match decode_member(&data) {
                Ok(instance) => Some(instance),
                Err(e) => {
                    warn!(path = %node, member = %name, error = %e, "Skipping undecodable serverset member");
                    None
                }
            }
        })
        .collect()
}
