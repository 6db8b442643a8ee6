//! Target SQL dialects.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NamingError;
use crate::rules::{self, DialectSpec};

/// SQL dialect an identifier is normalized for.
///
/// Each dialect maps to one immutable [`DialectSpec`] describing its quoting,
/// case folding, reserved words and length limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Bigquery,
    Mysql,
    Postgres,
    Redshift,
    Snowflake,
}

impl Dialect {
    /// Every supported dialect, in declaration order.
    pub const ALL: [Dialect; 5] = [
        Dialect::Bigquery,
        Dialect::Mysql,
        Dialect::Postgres,
        Dialect::Redshift,
        Dialect::Snowflake,
    ];

    /// Rule table for this dialect.
    pub fn spec(&self) -> &'static DialectSpec {
        match self {
            Dialect::Bigquery => &rules::BIGQUERY,
            Dialect::Mysql => &rules::MYSQL,
            Dialect::Postgres => &rules::POSTGRES,
            Dialect::Redshift => &rules::REDSHIFT,
            Dialect::Snowflake => &rules::SNOWFLAKE,
        }
    }

    /// Human readable name, as the destinations spell themselves.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::Bigquery => "BigQuery",
            Dialect::Mysql => "MySQL",
            Dialect::Postgres => "Postgres",
            Dialect::Redshift => "Redshift",
            Dialect::Snowflake => "Snowflake",
        }
    }

    pub fn to_sqlparser_dialect(&self) -> Box<dyn sqlparser::dialect::Dialect> {
        use sqlparser::dialect::{
            BigQueryDialect, MySqlDialect, PostgreSqlDialect, RedshiftSqlDialect,
            SnowflakeDialect,
        };
        match self {
            Self::Bigquery => Box::new(BigQueryDialect {}),
            Self::Mysql => Box::new(MySqlDialect {}),
            Self::Postgres => Box::new(PostgreSqlDialect {}),
            Self::Redshift => Box::new(RedshiftSqlDialect {}),
            Self::Snowflake => Box::new(SnowflakeDialect {}),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bigquery" | "bq" => Ok(Dialect::Bigquery),
            "mysql" => Ok(Dialect::Mysql),
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            "redshift" => Ok(Dialect::Redshift),
            "snowflake" => Ok(Dialect::Snowflake),
            _ => Err(NamingError::UnknownDialect {
                name: s.to_string(),
            }),
        }
    }
}
