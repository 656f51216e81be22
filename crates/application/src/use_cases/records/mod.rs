mod synthesize_records;

pub use synthesize_records::SynthesizeRecordsUseCase;
