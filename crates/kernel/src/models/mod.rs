//! Persistence records used by the business components.

pub mod game;
mod league_season;
mod player;

pub use game::{Game, LOSS_POINTS, RankingRow, WIN_POINTS};
pub use league_season::LeagueSeason;
pub use player::{CreatePlayer, Player};
