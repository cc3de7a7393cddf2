use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One game on the scoreboard page: the card header it appeared under,
/// the teams in document order, and the venue when the page shows one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub title: String,
    pub link: String,
    pub teams: Vec<TeamEntry>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub location: Option<String>,
}

impl Display for GameRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        for team in &self.teams {
            writeln!(f, "     ▸ {}", team)?;
        }
        if let Some(location) = &self.location {
            writeln!(f, "     @ {}", location)?;
        }
        write!(f, "     {}", self.link)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub score: Option<String>,
}

impl Display for TeamEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(score) = &self.score {
            write!(f, " — {}", score)?;
        }
        Ok(())
    }
}
