//! Values bound to positional placeholders. Each variant encodes with its own PostgreSQL type.

use chrono::{DateTime, Utc};
use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::{Database, Type};

#[derive(Clone, Debug, PartialEq)]
pub enum PgBindValue {
    Text(String),
    Bool(bool),
    I64(i64),
    Timestamp(DateTime<Utc>),
}

impl PgBindValue {
    /// Text values are matched with ILIKE; everything else with equality.
    pub fn is_text(&self) -> bool {
        matches!(self, PgBindValue::Text(_))
    }

    /// An empty string constrains nothing, same as an absent field.
    pub fn is_empty(&self) -> bool {
        matches!(self, PgBindValue::Text(s) if s.is_empty())
    }
}

impl From<String> for PgBindValue {
    fn from(s: String) -> Self {
        PgBindValue::Text(s)
    }
}

impl From<&str> for PgBindValue {
    fn from(s: &str) -> Self {
        PgBindValue::Text(s.to_string())
    }
}

impl From<bool> for PgBindValue {
    fn from(b: bool) -> Self {
        PgBindValue::Bool(b)
    }
}

impl From<i64> for PgBindValue {
    fn from(n: i64) -> Self {
        PgBindValue::I64(n)
    }
}

impl From<i32> for PgBindValue {
    fn from(n: i32) -> Self {
        PgBindValue::I64(i64::from(n))
    }
}

impl From<DateTime<Utc>> for PgBindValue {
    fn from(t: DateTime<Utc>) -> Self {
        PgBindValue::Timestamp(t)
    }
}

impl<'q> Encode<'q, Postgres> for PgBindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match self {
            PgBindValue::Text(s) => <String as Encode<Postgres>>::encode_by_ref(s, buf)?,
            PgBindValue::Bool(b) => <bool as Encode<Postgres>>::encode_by_ref(b, buf)?,
            PgBindValue::I64(n) => <i64 as Encode<Postgres>>::encode_by_ref(n, buf)?,
            PgBindValue::Timestamp(t) => <DateTime<Utc> as Encode<Postgres>>::encode_by_ref(t, buf)?,
        })
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            PgBindValue::Text(_) => <String as Type<Postgres>>::type_info(),
            PgBindValue::Bool(_) => <bool as Type<Postgres>>::type_info(),
            PgBindValue::I64(_) => <i64 as Type<Postgres>>::type_info(),
            PgBindValue::Timestamp(_) => <DateTime<Utc> as Type<Postgres>>::type_info(),
        })
    }
}

impl Type<Postgres> for PgBindValue {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("TEXT")
    }

    fn compatible(_ty: &PgTypeInfo) -> bool {
        true
    }
}
