use std::fmt;

/// Record type requested through the backend `lookup` call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryType {
    A,
    Any,
    Soa,
    Other(String),
}

impl QueryType {
    pub fn as_str(&self) -> &str {
        match self {
            QueryType::A => "A",
            QueryType::Any => "ANY",
            QueryType::Soa => "SOA",
            QueryType::Other(s) => s.as_str(),
        }
    }
}

/// PowerDNS sends qtypes in upper case; anything else is unsupported.
impl From<&str> for QueryType {
    fn from(s: &str) -> Self {
        match s {
            "A" => QueryType::A,
            "ANY" => QueryType::Any,
            "SOA" => QueryType::Soa,
            other => QueryType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata kind requested through `getDomainMetadata`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    SoaEdit,
    Other(String),
}

impl MetadataKind {
    pub fn as_str(&self) -> &str {
        match self {
            MetadataKind::SoaEdit => "SOA-EDIT",
            MetadataKind::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for MetadataKind {
    fn from(s: &str) -> Self {
        match s {
            "SOA-EDIT" => MetadataKind::SoaEdit,
            other => MetadataKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
