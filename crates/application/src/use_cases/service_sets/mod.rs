mod resolve_service_set;

pub use resolve_service_set::ResolveServiceSetUseCase;
