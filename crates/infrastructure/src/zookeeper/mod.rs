pub mod serverset;
pub mod service_set_reader;

pub use serverset::{collect_members, decode_member, is_member_node, MEMBER_PREFIX};
pub use service_set_reader::ZookeeperServiceSetReader;
