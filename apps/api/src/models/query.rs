use serde::Serialize;
use sqlx::FromRow;

use crate::recommendation::resolver::{Career, UnknownCareer};

/// Raw `queries` row as stored.
#[derive(Debug, Clone, FromRow)]
pub struct UserQueryRow {
    pub id: i64,
    pub skills: String,
    pub recommendation: String,
}

/// A recorded submission: the raw skills text and the career it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserQuery {
    pub id: i64,
    pub skills: String,
    pub recommendation: Career,
}

impl TryFrom<UserQueryRow> for UserQuery {
    type Error = UnknownCareer;

    fn try_from(row: UserQueryRow) -> Result<Self, Self::Error> {
        Ok(UserQuery {
            id: row.id,
            skills: row.skills,
            recommendation: row.recommendation.parse()?,
        })
    }
}
