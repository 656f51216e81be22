mod mock_service_sets;

pub use mock_service_sets::{instance, sharded, MockServiceSetReader};
