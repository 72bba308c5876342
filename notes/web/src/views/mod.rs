mod notes;

pub use notes::Notes;
