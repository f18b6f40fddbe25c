pub mod mongo_note_repository;
pub mod note_repository;
pub mod supabase_note_repository;

pub use mongo_note_repository::MongoNoteRepository;
pub use note_repository::NoteRepository;
pub use supabase_note_repository::SupabaseNoteRepository;

#[cfg(test)]
pub use note_repository::MockNoteRepository;
