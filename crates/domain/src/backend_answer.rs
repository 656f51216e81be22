use crate::QueryType;

/// One resource record handed back to PowerDNS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendRecord {
    pub qtype: QueryType,
    pub qname: String,
    pub ttl: u32,
    pub content: String,
}

impl BackendRecord {
    pub fn new(qtype: QueryType, qname: impl Into<String>, ttl: u32, content: impl Into<String>) -> Self {
        Self {
            qtype,
            qname: qname.into(),
            ttl,
            content: content.into(),
        }
    }
}

/// Outcome of a backend call, before it is put on the wire.
///
/// `NoMatch` is the protocol's negative answer (`"result": false`) and is
/// distinct from `Records(vec![])`, which is an empty but valid answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendAnswer {
    NoMatch,
    Records(Vec<BackendRecord>),
    Metadata(Vec<String>),
}

impl BackendAnswer {
    pub fn records(&self) -> &[BackendRecord] {
        match self {
            BackendAnswer::Records(records) => records,
            _ => &[],
        }
    }
}
