mod service_set_reader;

pub use service_set_reader::ServiceSetReader;
