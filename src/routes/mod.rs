pub mod docs;
pub mod root;
