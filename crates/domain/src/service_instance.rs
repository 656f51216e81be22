use std::fmt;

/// A live endpoint registered in a serverset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInstance {
    pub host: String,
    pub port: u16,
    pub shard: Option<u32>,
}

impl ServiceInstance {
    pub fn new(host: impl Into<String>, port: u16, shard: Option<u32>) -> Self {
        Self {
            host: host.into(),
            port,
            shard,
        }
    }

    pub fn is_shard(&self, shard: u32) -> bool {
        self.shard == Some(shard)
    }
}

impl fmt::Display for ServiceInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)?;
        if let Some(shard) = self.shard {
            write!(f, "#{}", shard)?;
        }
        Ok(())
    }
}
