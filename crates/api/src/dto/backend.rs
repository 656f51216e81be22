use serde::Serialize;
use zkns_domain::{BackendAnswer, BackendRecord};

/// Body of every remote backend reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackendResponse {
    pub result: BackendResult,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub log: Vec<String>,
}

/// `false` for a negative answer, otherwise the records or metadata values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BackendResult {
    Bool(bool),
    Records(Vec<RecordDto>),
    Metadata(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordDto {
    pub qtype: String,
    pub qname: String,
    pub ttl: u32,
    pub content: String,
}

impl BackendResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            result: BackendResult::Bool(false),
            log: vec![message.into()],
        }
    }
}

impl From<BackendRecord> for RecordDto {
    fn from(record: BackendRecord) -> Self {
        Self {
            qtype: record.qtype.as_str().to_string(),
            qname: record.qname,
            ttl: record.ttl,
            content: record.content,
        }
    }
}

impl From<BackendAnswer> for BackendResponse {
    fn from(answer: BackendAnswer) -> Self {
        let result = match answer {
            BackendAnswer::NoMatch => BackendResult::Bool(false),
            BackendAnswer::Records(records) => {
                BackendResult::Records(records.into_iter().map(RecordDto::from).collect())
            }
            BackendAnswer::Metadata(values) => BackendResult::Metadata(values),
        };

        Self {
            result,
            log: Vec::new(),
        }
    }
}
