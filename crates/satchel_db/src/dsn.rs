//! DSN credential string parsing.
//!
//! Credentials arrive as `driver:key=value;key=value;...`, e.g.
//!
//! ```text
//! sqlite:dbname=/var/lib/app/data.db;prefix=app_
//! duckdb:dbname=:memory:
//! ```
//!
//! Recognized keys: `host`, `dbname`, `username`, `password`, `port`,
//! `socket`, `prefix`, `charset`, `collation`, `engine`. Unrecognized keys
//! pass through verbatim into [`Credentials::extra`]. Every failure here is
//! a configuration error raised before any driver handle is opened.

use crate::error::{DbError, DbResult};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Supported drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverKind {
    /// SQLite via `rusqlite`.
    Sqlite,
    /// DuckDB via the `duckdb` crate (requires the `duckdb` cargo feature).
    DuckDb,
}

impl DriverKind {
    /// The canonical driver name used in DSNs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::DuckDb => "duckdb",
        }
    }
}

impl fmt::Display for DriverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriverKind {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "duckdb" => Ok(Self::DuckDb),
            other => Err(DbError::unknown_driver(other)),
        }
    }
}

/// Parsed connection credentials.
///
/// `host`, `username`, `password`, `port`, and `socket` are parsed and
/// retained for DSN fidelity with server-based engines; the embedded
/// drivers do not consume them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Which driver to construct.
    pub driver: DriverKind,
    /// Database path, or `:memory:` for an ephemeral database. Required.
    pub dbname: String,
    /// Server host, unused by embedded drivers.
    pub host: Option<String>,
    /// User name, unused by embedded drivers.
    pub username: Option<String>,
    /// Password, unused by embedded drivers.
    pub password: Option<String>,
    /// Server port, unused by embedded drivers.
    pub port: Option<u16>,
    /// Server socket path, unused by embedded drivers.
    pub socket: Option<String>,
    /// Table name prefix applied by the façade.
    pub prefix: String,
    /// Character set hint.
    pub charset: Option<String>,
    /// Collation hint.
    pub collation: Option<String>,
    /// Storage engine hint.
    pub engine: Option<String>,
    /// Unrecognized keys, passed through verbatim.
    pub extra: BTreeMap<String, String>,
}

impl Credentials {
    /// Parses a DSN credential string.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Configuration`] for an empty string, a segment
    /// violating `key=value`, a missing or empty `dbname`, or an unparsable
    /// `port`; [`DbError::UnknownDriver`] for an unrecognized driver name.
    pub fn parse(dsn: &str) -> DbResult<Self> {
        let dsn = dsn.trim();
        if dsn.is_empty() {
            return Err(DbError::configuration("empty credential string"));
        }

        let (driver_name, rest) = dsn.split_once(':').ok_or_else(|| {
            DbError::configuration("expected `driver:key=value;...` credential string")
        })?;
        let driver: DriverKind = driver_name.parse()?;

        let mut dbname = None;
        let mut host = None;
        let mut username = None;
        let mut password = None;
        let mut port = None;
        let mut socket = None;
        let mut prefix = String::new();
        let mut charset = None;
        let mut collation = None;
        let mut engine = None;
        let mut extra = BTreeMap::new();

        for segment in rest.split(';') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            let (key, value) = segment.split_once('=').ok_or_else(|| {
                DbError::configuration(format!("malformed credential segment: `{segment}`"))
            })?;
            let key = key.trim();
            let value = value.trim();

            match key {
                "dbname" => dbname = Some(value.to_string()),
                "host" => host = Some(value.to_string()),
                "username" => username = Some(value.to_string()),
                "password" => password = Some(value.to_string()),
                "port" => {
                    let parsed = value.parse::<u16>().map_err(|_| {
                        DbError::configuration(format!("invalid port: `{value}`"))
                    })?;
                    port = Some(parsed);
                }
                "socket" => socket = Some(value.to_string()),
                "prefix" => prefix = value.to_string(),
                "charset" => charset = Some(value.to_string()),
                "collation" => collation = Some(value.to_string()),
                "engine" => engine = Some(value.to_string()),
                other => {
                    extra.insert(other.to_string(), value.to_string());
                }
            }
        }

        let dbname = dbname
            .filter(|name| !name.is_empty())
            .ok_or_else(|| DbError::configuration("missing required key: dbname"))?;

        Ok(Self {
            driver,
            dbname,
            host,
            username,
            password,
            port,
            socket,
            prefix,
            charset,
            collation,
            engine,
            extra,
        })
    }

    /// Whether the database lives only in memory.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.dbname == ":memory:"
    }
}

impl FromStr for Credentials {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_dsn() {
        let creds = Credentials::parse(
            "sqlite:host=localhost;dbname=/tmp/app.db;username=u;password=p;port=3306;prefix=app_",
        )
        .unwrap();
        assert_eq!(creds.driver, DriverKind::Sqlite);
        assert_eq!(creds.dbname, "/tmp/app.db");
        assert_eq!(creds.host.as_deref(), Some("localhost"));
        assert_eq!(creds.username.as_deref(), Some("u"));
        assert_eq!(creds.port, Some(3306));
        assert_eq!(creds.prefix, "app_");
    }

    #[test]
    fn memory_dbname_keeps_colons() {
        let creds = Credentials::parse("sqlite:dbname=:memory:").unwrap();
        assert_eq!(creds.dbname, ":memory:");
        assert!(creds.is_in_memory());
    }

    #[test]
    fn unknown_keys_pass_through() {
        let creds = Credentials::parse("sqlite:dbname=:memory:;application_name=satchel").unwrap();
        assert_eq!(
            creds.extra.get("application_name").map(String::as_str),
            Some("satchel")
        );
    }

    #[test]
    fn empty_dsn_rejected() {
        assert!(matches!(
            Credentials::parse(""),
            Err(DbError::Configuration { .. })
        ));
        assert!(matches!(
            Credentials::parse("   "),
            Err(DbError::Configuration { .. })
        ));
    }

    #[test]
    fn missing_driver_separator_rejected() {
        assert!(matches!(
            Credentials::parse("dbname=x"),
            Err(DbError::Configuration { .. })
        ));
    }

    #[test]
    fn unknown_driver_rejected() {
        assert!(matches!(
            Credentials::parse("mongodb:dbname=x"),
            Err(DbError::UnknownDriver { .. })
        ));
    }

    #[test]
    fn malformed_segment_rejected() {
        assert!(matches!(
            Credentials::parse("sqlite:dbname=x;justakey"),
            Err(DbError::Configuration { .. })
        ));
    }

    #[test]
    fn missing_dbname_rejected() {
        assert!(matches!(
            Credentials::parse("sqlite:host=localhost"),
            Err(DbError::Configuration { .. })
        ));
        assert!(matches!(
            Credentials::parse("sqlite:dbname="),
            Err(DbError::Configuration { .. })
        ));
    }

    #[test]
    fn invalid_port_rejected() {
        assert!(matches!(
            Credentials::parse("sqlite:dbname=x;port=notanumber"),
            Err(DbError::Configuration { .. })
        ));
        assert!(matches!(
            Credentials::parse("sqlite:dbname=x;port=99999"),
            Err(DbError::Configuration { .. })
        ));
    }

    #[test]
    fn driver_name_case_insensitive() {
        let creds = Credentials::parse("SQLite:dbname=:memory:").unwrap();
        assert_eq!(creds.driver, DriverKind::Sqlite);
    }
}
