use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Execution category of a statement, decided once from its name sigil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatementKind {
    /// Read query returning rows. No sigil.
    Select,
    /// Insert/update/delete returning success. Sigil `!`.
    Mutate,
    /// Insert/update/delete returning ids or rows. Sigil `<!>`.
    MutateReturning,
    /// Stored-procedure invocation. Sigil `@`.
    CallProcedure,
    /// Select assembled per call from parameter-keyed fragments. Sigil `$`.
    SelectBuilt,
}

impl StatementKind {
    /// Sigil checks in priority order. Only the first match is honored.
    pub const SIGILS: [(&'static str, StatementKind); 4] = [
        ("<!>", StatementKind::MutateReturning),
        ("!", StatementKind::Mutate),
        ("@", StatementKind::CallProcedure),
        ("$", StatementKind::SelectBuilt),
    ];

    /// The name suffix that selects this kind (empty for [`StatementKind::Select`]).
    pub fn sigil(self) -> &'static str {
        match self {
            StatementKind::Select => "",
            StatementKind::Mutate => "!",
            StatementKind::MutateReturning => "<!>",
            StatementKind::CallProcedure => "@",
            StatementKind::SelectBuilt => "$",
        }
    }

    /// True when execution yields rows to fetch.
    pub fn returns_rows(self) -> bool {
        !matches!(self, StatementKind::Mutate)
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementKind::Select => write!(f, "SELECT"),
            StatementKind::Mutate => write!(f, "MUTATE"),
            StatementKind::MutateReturning => write!(f, "MUTATE_RETURNING"),
            StatementKind::CallProcedure => write!(f, "CALL_PROCEDURE"),
            StatementKind::SelectBuilt => write!(f, "SELECT_BUILT"),
        }
    }
}

impl FromStr for StatementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SELECT" => Ok(StatementKind::Select),
            "MUTATE" => Ok(StatementKind::Mutate),
            "MUTATE_RETURNING" => Ok(StatementKind::MutateReturning),
            "CALL_PROCEDURE" => Ok(StatementKind::CallProcedure),
            "SELECT_BUILT" => Ok(StatementKind::SelectBuilt),
            other => Err(format!("unknown statement kind: {other}")),
        }
    }
}
