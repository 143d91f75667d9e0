/// Line grammars of the roster and question files.
pub mod codec;
/// Whole-file read and locked rewrite primitives.
pub mod flat_file;
/// Domain records decoded from the backing files.
pub mod models;
/// Question bank backed by the question file.
pub mod question_bank;
/// Storage error types shared by the stores.
pub mod storage;
/// Roster backed by the team file.
pub mod team_store;
