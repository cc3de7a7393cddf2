use crate::types::GameRecord;

/// A game counts as scored once at least one of its teams has a score.
fn has_score(game: &GameRecord) -> bool {
    game.teams.iter().any(|t| t.score.is_some())
}

#[derive(Debug, Default, Clone)]
pub struct GameFilter {
    pub team: Option<String>,
    pub scored_only: bool,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl GameFilter {
    pub fn apply(self, mut games: Vec<GameRecord>) -> Vec<GameRecord> {
        if let Some(team) = self.team {
            let needle = team.to_lowercase();
            games.retain(|g| {
                g.teams
                    .iter()
                    .any(|t| t.name.to_lowercase().contains(&needle))
            });
        }
        if self.scored_only {
            games.retain(has_score);
        }
        if let Some(off) = self.offset {
            games = games.into_iter().skip(off).collect();
        }
        if let Some(lim) = self.limit {
            games.truncate(lim);
        }
        games
    }

    pub fn validate(self) -> Result<Self, String> {
        if self.offset.is_some_and(|o| o == 0) {
            return Err("Offset must be greater than 0".to_string());
        }
        if self.limit.is_some_and(|l| l == 0) {
            return Err("Limit must be greater than 0".to_string());
        }
        Ok(self)
    }
}

#[derive(Debug)]
pub struct ScoreboardStats {
    pub scored: usize,
    pub scheduled: usize,
    pub total: usize,
}

impl ScoreboardStats {
    pub fn from_games(games: &[GameRecord]) -> ScoreboardStats {
        let scored = games.iter().filter(|g| has_score(g)).count();
        ScoreboardStats {
            scored,
            scheduled: games.len() - scored,
            total: games.len(),
        }
    }
}

impl std::fmt::Display for ScoreboardStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\nStatistics:")?;
        writeln!(f, "  Games with scores:  {}", self.scored)?;
        writeln!(f, "  Still to be played: {}", self.scheduled)?;
        writeln!(f, "  Total:              {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TeamEntry;

    fn game(title: &str, names_scores: &[(&str, Option<&str>)]) -> GameRecord {
        GameRecord {
            title: title.to_string(),
            link: format!("{}/football/match?gameId=1", crate::BASE_URL),
            teams: names_scores
                .iter()
                .map(|(name, score)| TeamEntry {
                    name: name.to_string(),
                    score: score.map(str::to_string),
                })
                .collect(),
            location: None,
        }
    }

    fn sample_games() -> Vec<GameRecord> {
        vec![
            game(
                "Spanish LALIGA",
                &[("Real Madrid", Some("3")), ("Sevilla", Some("1"))],
            ),
            game("Spanish LALIGA", &[("Girona", None), ("Valencia", None)]),
            game(
                "German Bundesliga",
                &[("Borussia Dortmund", None), ("Bayern Munich", Some("2"))],
            ),
        ]
    }

    #[test]
    fn test_team_filter_is_case_insensitive() {
        let filter = GameFilter {
            team: Some("real madrid".to_string()),
            ..Default::default()
        };

        let games = filter.apply(sample_games());

        assert_eq!(games.len(), 1);
        assert_eq!(games[0].teams[0].name, "Real Madrid");
    }

    #[test]
    fn test_scored_only_keeps_partially_scored_games() {
        let filter = GameFilter {
            scored_only: true,
            ..Default::default()
        };

        let games = filter.apply(sample_games());

        assert_eq!(games.len(), 2);
        assert!(games.iter().all(|g| g.teams.iter().any(|t| t.score.is_some())));
    }

    #[test]
    fn test_offset_and_limit() {
        let filter = GameFilter {
            offset: Some(1),
            limit: Some(1),
            ..Default::default()
        };

        let games = filter.apply(sample_games());

        assert_eq!(games.len(), 1);
        assert_eq!(games[0].teams[0].name, "Girona");
    }

    #[test]
    fn test_validate_rejects_zero_offset_and_limit() {
        assert!(
            GameFilter {
                offset: Some(0),
                ..Default::default()
            }
            .validate()
            .is_err()
        );
        assert!(
            GameFilter {
                limit: Some(0),
                ..Default::default()
            }
            .validate()
            .is_err()
        );
        assert!(GameFilter::default().validate().is_ok());
    }

    #[test]
    fn test_stats_counts() {
        let stats = ScoreboardStats::from_games(&sample_games());

        assert_eq!(stats.scored, 2);
        assert_eq!(stats.scheduled, 1);
        assert_eq!(stats.total, 3);
    }
}
