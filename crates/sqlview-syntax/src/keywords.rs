#![forbid(unsafe_code)]

//! Reserved SQL words, matched case-insensitively.
//!
//! The set is a literal enumeration fixed at build time and materialized once
//! into a process-wide read-only table. Lookups never allocate.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Data definition, grants, and schema objects.
const DDL: &[&str] = &[
    "ACTIVE",
    "ADD",
    "ALTER",
    "CASCADE",
    "CHECK",
    "COLLATE",
    "COLUMN",
    "COMPUTED",
    "CONSTRAINT",
    "CREATE",
    "DATABASE",
    "DEFAULT",
    "DOMAIN",
    "DROP",
    "EXTERNAL",
    "FOREIGN",
    "FUNCTION",
    "GENERATOR",
    "GRANT",
    "INACTIVE",
    "INDEX",
    "KEY",
    "PACKAGE",
    "PRIMARY",
    "PROCEDURE",
    "RECREATE",
    "REFERENCES",
    "RETURNS",
    "REVOKE",
    "ROLE",
    "SEQUENCE",
    "TABLE",
    "TO",
    "TRIGGER",
    "UNIQUE",
    "VIEW",
];

/// Queries and data manipulation.
const DML: &[&str] = &[
    "ALL",
    "AND",
    "ANY",
    "AS",
    "ASC",
    "ASCENDING",
    "BETWEEN",
    "BY",
    "CASE",
    "CAST",
    "CONTAINING",
    "COUNT",
    "CROSS",
    "DELETE",
    "DESC",
    "DESCENDING",
    "DISTINCT",
    "ELSE",
    "END",
    "ESCAPE",
    "EXISTS",
    "FALSE",
    "FIRST",
    "FROM",
    "FULL",
    "GROUP",
    "HAVING",
    "IN",
    "INNER",
    "INSERT",
    "INTO",
    "IS",
    "JOIN",
    "LEFT",
    "LIKE",
    "LIMIT",
    "MATCHING",
    "MAX",
    "MERGE",
    "MIN",
    "NOT",
    "NULL",
    "OF",
    "OFFSET",
    "ON",
    "OR",
    "ORDER",
    "OUTER",
    "PLAN",
    "RETURNING",
    "RIGHT",
    "ROWS",
    "SELECT",
    "SET",
    "SKIP",
    "SOME",
    "STARTING",
    "SUM",
    "THEN",
    "TRUE",
    "UNION",
    "UPDATE",
    "USING",
    "VALUES",
    "WHEN",
    "WHERE",
    "WITH",
];

/// Transaction control.
const TRANSACTION: &[&str] = &[
    "AUTONOMOUS",
    "COMMIT",
    "COMMITTED",
    "ISOLATION",
    "LEVEL",
    "READ",
    "RELEASE",
    "ROLLBACK",
    "SAVEPOINT",
    "SNAPSHOT",
    "TRANSACTION",
    "WORK",
];

/// Stored procedure and trigger control flow.
const PSQL: &[&str] = &[
    "AFTER",
    "BEFORE",
    "BEGIN",
    "BREAK",
    "CLOSE",
    "CONTINUE",
    "CURSOR",
    "DECLARE",
    "DELETING",
    "DO",
    "EXCEPTION",
    "EXECUTE",
    "EXIT",
    "FETCH",
    "FOR",
    "IF",
    "INSERTING",
    "LEAVE",
    "NEW",
    "OLD",
    "OPEN",
    "POSITION",
    "POST_EVENT",
    "ROW_COUNT",
    "STATEMENT",
    "SUSPEND",
    "UPDATING",
    "VARIABLE",
    "WHILE",
];

/// Built-in column types.
const TYPES: &[&str] = &[
    "BIGINT",
    "BLOB",
    "BOOLEAN",
    "CHAR",
    "CHARACTER",
    "DATE",
    "DECIMAL",
    "DOUBLE",
    "FLOAT",
    "INTEGER",
    "NUMERIC",
    "PRECISION",
    "SMALLINT",
    "TIME",
    "TIMESTAMP",
    "VARCHAR",
];

/// Longest keyword, in bytes. Anything longer is rejected without lookup.
const MAX_KEYWORD_LEN: usize = 16;

static KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [DDL, DML, TRANSACTION, PSQL, TYPES]
        .into_iter()
        .flatten()
        .copied()
        .collect()
});

/// Whether `word` is a reserved SQL keyword, ignoring ASCII case.
///
/// The word itself is never modified; normalization happens on a stack copy.
pub fn is_keyword(word: &str) -> bool {
    if word.is_empty() || word.len() > MAX_KEYWORD_LEN {
        return false;
    }
    let mut buf = [0u8; MAX_KEYWORD_LEN];
    let upper = &mut buf[..word.len()];
    upper.copy_from_slice(word.as_bytes());
    upper.make_ascii_uppercase();
    // Only ASCII bytes were touched, so the copy is still valid UTF-8.
    match std::str::from_utf8(upper) {
        Ok(upper) => KEYWORDS.contains(upper),
        Err(_) => false,
    }
}
