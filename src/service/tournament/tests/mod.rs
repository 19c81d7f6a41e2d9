
use entity::sea_orm_active_enums::MatchStatus;
use standings_test_utils::prelude::*;

use crate::{
    error::{standings::StandingsError, Error},
    service::tournament::TournamentService,
};
