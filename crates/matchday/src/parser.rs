use scraper::{ElementRef, Html, Selector};

use crate::types::{GameRecord, TeamEntry};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Page layout mismatch: {0}")]
    LayoutMismatch(String),
    #[error("Missing required field: {0}")]
    MissingField(String),
}

fn elem_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn absolutize(href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", crate::BASE_URL, href)
    }
}

/// The venue headline only names the ground; the region sits in the next
/// sibling element. Both fragments are kept verbatim, comma-joined.
fn venue_location(venue: ElementRef) -> Option<String> {
    let headline = elem_text(venue);
    if headline.is_empty() {
        return None;
    }
    let region = venue
        .next_siblings()
        .find_map(ElementRef::wrap)
        .map(elem_text)
        .filter(|s| !s.is_empty())?;
    Some(format!("{},{}", headline, region))
}

pub fn parse_scoreboard(html: &str) -> Result<Vec<GameRecord>, ParseError> {
    let document = Html::parse_document(html);

    let main_sel = Selector::parse("div.PageLayout__Main").unwrap();
    let card_sel = Selector::parse("section.Card.gameModules").unwrap();
    let title_sel =
        Selector::parse("h3.Card__Header__Title.Card__Header__Title--no-theme").unwrap();
    let link_sel = Selector::parse("a.AnchorLink.Card__Header__Link[href]").unwrap();
    let scoreboard_sel =
        Selector::parse("section.Scoreboard.bg-clr-white.flex.flex-auto.justify-between").unwrap();
    let competitors_sel = Selector::parse("ul.ScoreboardScoreCell__Competitors").unwrap();
    let competitor_sel = Selector::parse("li").unwrap();
    let name_sel = Selector::parse(
        "div.ScoreCell__TeamName.ScoreCell__TeamName--shortDisplayName.truncate.db",
    )
    .unwrap();
    let score_sel = Selector::parse(
        "div.ScoreCell__Score.h4.clr-gray-01.fw-heavy.tar.ScoreCell_Score--scoreboard.pl2",
    )
    .unwrap();
    let venue_sel =
        Selector::parse("div.LocationDetail__Item.LocationDetail__Item--headline").unwrap();

    let main = document
        .select(&main_sel)
        .next()
        .ok_or_else(|| ParseError::LayoutMismatch("main content container".to_string()))?;

    let mut games = Vec::new();

    for card in main.select(&card_sel) {
        let title = card
            .select(&title_sel)
            .next()
            .map(|e| normalize_whitespace(&elem_text(e)))
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ParseError::MissingField("card title".to_string()))?;

        let link = card
            .select(&link_sel)
            .next()
            .and_then(|e| e.value().attr("href"))
            .map(absolutize)
            .ok_or_else(|| ParseError::MissingField("card link".to_string()))?;

        for scoreboard in card.select(&scoreboard_sel) {
            let mut teams = Vec::new();
            if let Some(competitors) = scoreboard.select(&competitors_sel).next() {
                for item in competitors.select(&competitor_sel) {
                    let name = item
                        .select(&name_sel)
                        .next()
                        .map(|e| normalize_whitespace(&elem_text(e)))
                        .unwrap_or_default();

                    let score = item
                        .select(&score_sel)
                        .next()
                        .map(|e| normalize_whitespace(&elem_text(e)))
                        .filter(|s| !s.is_empty());

                    teams.push(TeamEntry { name, score });
                }
            }

            let location = scoreboard
                .select(&venue_sel)
                .next()
                .and_then(venue_location);

            games.push(GameRecord {
                title: title.clone(),
                link: link.clone(),
                teams,
                location,
            });
        }
    }

    Ok(games)
}
