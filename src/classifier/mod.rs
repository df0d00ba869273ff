/// `-- name:` header parsing: canonical name and sigil-selected kind.
pub mod header;
/// Statement kinds and the sigils that select them.
pub mod statement_kind;
