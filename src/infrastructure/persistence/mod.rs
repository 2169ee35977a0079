mod memory_repository;
mod pg_audio_file_repository;
mod pg_pool;

pub use memory_repository::MemoryAudioFileRepository;
pub use pg_audio_file_repository::PgAudioFileRepository;
pub use pg_pool::create_pool;
