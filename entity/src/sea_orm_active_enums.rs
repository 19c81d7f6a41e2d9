use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a match.
///
/// Only [`MatchStatus::Finalized`] matches with both scores recorded count towards standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum MatchStatus {
    #[sea_orm(string_value = "BORRADOR")]
    Draft,
    #[sea_orm(string_value = "PROGRAMADO")]
    Scheduled,
    #[sea_orm(string_value = "EN_CURSO")]
    InProgress,
    #[sea_orm(string_value = "FINALIZADO")]
    Finalized,
    #[sea_orm(string_value = "SUSPENDIDO")]
    Suspended,
}
