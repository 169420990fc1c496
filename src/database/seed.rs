//! Sample clubs and players for demos and local development.

use sqlx::SqlitePool;

use crate::database::{
    models::{Player, PlayerInput, Team, TeamInput},
    repositories::{player_repo, team_repo},
    transaction::DatabaseTransaction,
};
use crate::error::AppError;

struct SampleTeam {
    name: &'static str,
    established_year: i32,
    home_stadium: &'static str,
    logo_url: &'static str,
    club_colors: &'static str,
    country: &'static str,
    league: &'static str,
    current_season_position: i32,
    team_value: f64,
    historical_performance: &'static str,
    contact_information: &'static str,
    description: &'static str,
    wikipedia_link: &'static str,
}

struct SamplePlayer {
    full_name: &'static str,
    date_of_birth: &'static str,
    nationality: &'static str,
    position: &'static str,
    jersey_number: i32,
    height: f64,
    weight: f64,
    contract_start: &'static str,
    contract_end: &'static str,
    salary: f64,
    player_value: f64,
    team_name: &'static str,
    photo: &'static str,
    injury_details: Option<&'static str>,
    rating: i32,
}

const SAMPLE_TEAMS: &[SampleTeam] = &[
    SampleTeam {
        name: "FC Barcelona",
        established_year: 1899,
        home_stadium: "Camp Nou",
        logo_url: "https://example.com/barcelona.png",
        club_colors: "Blue and Red",
        country: "Spain",
        league: "La Liga",
        current_season_position: 2,
        team_value: 1_250_000_000.0,
        historical_performance: "Champions League winners: 5",
        contact_information: "info@fcbarcelona.com",
        description: "One of the most successful clubs in Spanish and European football",
        wikipedia_link: "https://en.wikipedia.org/wiki/FC_Barcelona",
    },
    SampleTeam {
        name: "Manchester United",
        established_year: 1878,
        home_stadium: "Old Trafford",
        logo_url: "https://example.com/manutd.png",
        club_colors: "Red and White",
        country: "England",
        league: "Premier League",
        current_season_position: 4,
        team_value: 1_100_000_000.0,
        historical_performance: "Premier League titles: 20",
        contact_information: "info@manutd.com",
        description: "English club based in Manchester, one of the most successful teams in English football",
        wikipedia_link: "https://en.wikipedia.org/wiki/Manchester_United_F.C.",
    },
    SampleTeam {
        name: "Bayern Munich",
        established_year: 1900,
        home_stadium: "Allianz Arena",
        logo_url: "https://example.com/bayern.png",
        club_colors: "Red and Blue",
        country: "Germany",
        league: "Bundesliga",
        current_season_position: 1,
        team_value: 1_050_000_000.0,
        historical_performance: "Bundesliga champions: 31",
        contact_information: "info@fcbayern.com",
        description: "Most successful club in German football history",
        wikipedia_link: "https://en.wikipedia.org/wiki/FC_Bayern_Munich",
    },
    SampleTeam {
        name: "Juventus",
        established_year: 1897,
        home_stadium: "Juventus Stadium",
        logo_url: "https://example.com/juventus.png",
        club_colors: "Black and White",
        country: "Italy",
        league: "Serie A",
        current_season_position: 3,
        team_value: 950_000_000.0,
        historical_performance: "Serie A titles: 36",
        contact_information: "info@juventus.com",
        description: "Most successful club in Italian football",
        wikipedia_link: "https://en.wikipedia.org/wiki/Juventus_F.C.",
    },
    SampleTeam {
        name: "Paris Saint-Germain",
        established_year: 1970,
        home_stadium: "Parc des Princes",
        logo_url: "https://example.com/psg.png",
        club_colors: "Blue and Red",
        country: "France",
        league: "Ligue 1",
        current_season_position: 1,
        team_value: 900_000_000.0,
        historical_performance: "Ligue 1 champions: 10",
        contact_information: "info@psg.fr",
        description: "One of the most prestigious clubs in France",
        wikipedia_link: "https://en.wikipedia.org/wiki/Paris_Saint-Germain_F.C.",
    },
];

const SAMPLE_PLAYERS: &[SamplePlayer] = &[
    SamplePlayer {
        full_name: "Lionel Messi",
        date_of_birth: "1987-06-24",
        nationality: "Argentina",
        position: "Forward",
        jersey_number: 10,
        height: 170.18,
        weight: 72.5,
        contract_start: "2021-07-01",
        contract_end: "2025-06-30",
        salary: 40_000_000.0,
        player_value: 100_000_000.0,
        team_name: "FC Barcelona",
        photo: "messi",
        injury_details: None,
        rating: 10,
    },
    SamplePlayer {
        full_name: "Gerard Piqué",
        date_of_birth: "1987-02-02",
        nationality: "Spain",
        position: "Defender",
        jersey_number: 3,
        height: 193.04,
        weight: 85.0,
        contract_start: "2019-01-01",
        contract_end: "2024-06-30",
        salary: 12_000_000.0,
        player_value: 35_000_000.0,
        team_name: "FC Barcelona",
        photo: "pique",
        injury_details: None,
        rating: 8,
    },
    SamplePlayer {
        full_name: "Sergio Busquets",
        date_of_birth: "1988-07-16",
        nationality: "Spain",
        position: "Midfielder",
        jersey_number: 5,
        height: 188.98,
        weight: 76.0,
        contract_start: "2020-01-01",
        contract_end: "2024-06-30",
        salary: 10_000_000.0,
        player_value: 30_000_000.0,
        team_name: "FC Barcelona",
        photo: "busquets",
        injury_details: Some("Ankle sprain, expected return in 2 weeks"),
        rating: 8,
    },
    SamplePlayer {
        full_name: "Jordi Alba",
        date_of_birth: "1989-03-21",
        nationality: "Spain",
        position: "Defender",
        jersey_number: 18,
        height: 170.18,
        weight: 68.0,
        contract_start: "2020-01-01",
        contract_end: "2024-06-30",
        salary: 8_000_000.0,
        player_value: 25_000_000.0,
        team_name: "FC Barcelona",
        photo: "alba",
        injury_details: None,
        rating: 7,
    },
    SamplePlayer {
        full_name: "Bruno Fernandes",
        date_of_birth: "1994-09-08",
        nationality: "Portugal",
        position: "Midfielder",
        jersey_number: 8,
        height: 178.0,
        weight: 75.0,
        contract_start: "2021-01-01",
        contract_end: "2026-06-30",
        salary: 10_500_000.0,
        player_value: 90_000_000.0,
        team_name: "Manchester United",
        photo: "bruno",
        injury_details: None,
        rating: 9,
    },
    SamplePlayer {
        full_name: "Marcus Rashford",
        date_of_birth: "1997-10-31",
        nationality: "England",
        position: "Forward",
        jersey_number: 10,
        height: 185.0,
        weight: 70.0,
        contract_start: "2019-07-01",
        contract_end: "2024-06-30",
        salary: 9_500_000.0,
        player_value: 85_000_000.0,
        team_name: "Manchester United",
        photo: "rashford",
        injury_details: None,
        rating: 8,
    },
    SamplePlayer {
        full_name: "Harry Maguire",
        date_of_birth: "1993-03-05",
        nationality: "England",
        position: "Defender",
        jersey_number: 5,
        height: 194.0,
        weight: 90.0,
        contract_start: "2020-01-01",
        contract_end: "2025-06-30",
        salary: 9_000_000.0,
        player_value: 55_000_000.0,
        team_name: "Manchester United",
        photo: "maguire",
        injury_details: Some("Hamstring injury, out for 3 weeks"),
        rating: 7,
    },
    SamplePlayer {
        full_name: "David de Gea",
        date_of_birth: "1990-11-07",
        nationality: "Spain",
        position: "Goalkeeper",
        jersey_number: 1,
        height: 192.0,
        weight: 82.0,
        contract_start: "2021-07-01",
        contract_end: "2025-06-30",
        salary: 12_000_000.0,
        player_value: 45_000_000.0,
        team_name: "Manchester United",
        photo: "degea",
        injury_details: None,
        rating: 8,
    },
    SamplePlayer {
        full_name: "Robert Lewandowski",
        date_of_birth: "1988-08-21",
        nationality: "Poland",
        position: "Forward",
        jersey_number: 9,
        height: 184.0,
        weight: 80.0,
        contract_start: "2020-07-01",
        contract_end: "2025-06-30",
        salary: 18_000_000.0,
        player_value: 85_000_000.0,
        team_name: "Bayern Munich",
        photo: "lewandowski",
        injury_details: None,
        rating: 9,
    },
    SamplePlayer {
        full_name: "Manuel Neuer",
        date_of_birth: "1986-03-27",
        nationality: "Germany",
        position: "Goalkeeper",
        jersey_number: 1,
        height: 193.0,
        weight: 92.0,
        contract_start: "2020-01-01",
        contract_end: "2024-06-30",
        salary: 15_000_000.0,
        player_value: 40_000_000.0,
        team_name: "Bayern Munich",
        photo: "neuer",
        injury_details: None,
        rating: 9,
    },
    SamplePlayer {
        full_name: "Joshua Kimmich",
        date_of_birth: "1995-02-08",
        nationality: "Germany",
        position: "Midfielder",
        jersey_number: 6,
        height: 176.0,
        weight: 73.0,
        contract_start: "2021-07-01",
        contract_end: "2026-06-30",
        salary: 12_000_000.0,
        player_value: 80_000_000.0,
        team_name: "Bayern Munich",
        photo: "kimmich",
        injury_details: None,
        rating: 8,
    },
    SamplePlayer {
        full_name: "Thomas Müller",
        date_of_birth: "1989-09-13",
        nationality: "Germany",
        position: "Forward",
        jersey_number: 25,
        height: 186.0,
        weight: 76.0,
        contract_start: "2019-07-01",
        contract_end: "2023-06-30",
        salary: 10_000_000.0,
        player_value: 35_000_000.0,
        team_name: "Bayern Munich",
        photo: "muller",
        injury_details: Some("Minor knee injury, day-to-day decision"),
        rating: 8,
    },
    SamplePlayer {
        full_name: "Cristiano Ronaldo",
        date_of_birth: "1985-02-05",
        nationality: "Portugal",
        position: "Forward",
        jersey_number: 7,
        height: 187.0,
        weight: 85.0,
        contract_start: "2021-07-01",
        contract_end: "2023-06-30",
        salary: 31_000_000.0,
        player_value: 50_000_000.0,
        team_name: "Juventus",
        photo: "ronaldo",
        injury_details: None,
        rating: 9,
    },
    SamplePlayer {
        full_name: "Paulo Dybala",
        date_of_birth: "1993-11-15",
        nationality: "Argentina",
        position: "Forward",
        jersey_number: 10,
        height: 177.0,
        weight: 75.0,
        contract_start: "2020-07-01",
        contract_end: "2024-06-30",
        salary: 13_500_000.0,
        player_value: 75_000_000.0,
        team_name: "Juventus",
        photo: "dybala",
        injury_details: None,
        rating: 8,
    },
    SamplePlayer {
        full_name: "Giorgio Chiellini",
        date_of_birth: "1984-08-14",
        nationality: "Italy",
        position: "Defender",
        jersey_number: 3,
        height: 187.0,
        weight: 85.0,
        contract_start: "2020-01-01",
        contract_end: "2023-06-30",
        salary: 7_500_000.0,
        player_value: 15_000_000.0,
        team_name: "Juventus",
        photo: "chiellini",
        injury_details: None,
        rating: 7,
    },
    SamplePlayer {
        full_name: "Wojciech Szczęsny",
        date_of_birth: "1990-04-18",
        nationality: "Poland",
        position: "Goalkeeper",
        jersey_number: 1,
        height: 195.0,
        weight: 90.0,
        contract_start: "2019-07-01",
        contract_end: "2024-06-30",
        salary: 8_500_000.0,
        player_value: 35_000_000.0,
        team_name: "Juventus",
        photo: "szczesny",
        injury_details: None,
        rating: 8,
    },
    SamplePlayer {
        full_name: "Kylian Mbappé",
        date_of_birth: "1998-12-20",
        nationality: "France",
        position: "Forward",
        jersey_number: 7,
        height: 178.0,
        weight: 73.0,
        contract_start: "2021-07-01",
        contract_end: "2025-06-30",
        salary: 25_000_000.0,
        player_value: 180_000_000.0,
        team_name: "Paris Saint-Germain",
        photo: "mbappe",
        injury_details: None,
        rating: 9,
    },
    SamplePlayer {
        full_name: "Neymar Jr",
        date_of_birth: "1992-02-05",
        nationality: "Brazil",
        position: "Forward",
        jersey_number: 10,
        height: 175.0,
        weight: 68.0,
        contract_start: "2021-07-01",
        contract_end: "2025-06-30",
        salary: 36_000_000.0,
        player_value: 110_000_000.0,
        team_name: "Paris Saint-Germain",
        photo: "neymar",
        injury_details: Some("Groin strain, expected return next match"),
        rating: 9,
    },
    SamplePlayer {
        full_name: "Marco Verratti",
        date_of_birth: "1992-11-05",
        nationality: "Italy",
        position: "Midfielder",
        jersey_number: 6,
        height: 165.0,
        weight: 60.0,
        contract_start: "2020-07-01",
        contract_end: "2024-06-30",
        salary: 14_000_000.0,
        player_value: 65_000_000.0,
        team_name: "Paris Saint-Germain",
        photo: "verratti",
        injury_details: None,
        rating: 8,
    },
    SamplePlayer {
        full_name: "Keylor Navas",
        date_of_birth: "1986-12-15",
        nationality: "Costa Rica",
        position: "Goalkeeper",
        jersey_number: 1,
        height: 185.0,
        weight: 80.0,
        contract_start: "2019-09-02",
        contract_end: "2023-06-30",
        salary: 10_000_000.0,
        player_value: 15_000_000.0,
        team_name: "Paris Saint-Germain",
        photo: "navas",
        injury_details: None,
        rating: 8,
    },
];
/// What a seeding run inserted and what it found already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub teams_created: usize,
    pub teams_existing: usize,
    pub players_created: usize,
    pub players_existing: usize,
}

impl SampleTeam {
    fn to_input(&self) -> TeamInput {
        TeamInput {
            name: Some(self.name.to_string()),
            established_year: Some(Some(self.established_year)),
            home_stadium: Some(Some(self.home_stadium.to_string())),
            logo_url: Some(Some(self.logo_url.to_string())),
            club_colors: Some(Some(self.club_colors.to_string())),
            country: Some(Some(self.country.to_string())),
            league: Some(Some(self.league.to_string())),
            current_season_position: Some(Some(self.current_season_position)),
            team_value: Some(Some(self.team_value)),
            historical_performance: Some(Some(self.historical_performance.to_string())),
            contact_information: Some(Some(self.contact_information.to_string())),
            description: Some(Some(self.description.to_string())),
            wikipedia_link: Some(Some(self.wikipedia_link.to_string())),
        }
    }
}

impl SamplePlayer {
    fn to_input(&self, team_id: i64) -> PlayerInput {
        PlayerInput {
            full_name: Some(self.full_name.to_string()),
            date_of_birth: Some(self.date_of_birth.to_string()),
            nationality: Some(Some(self.nationality.to_string())),
            position: Some(Some(self.position.to_string())),
            jersey_number: Some(Some(self.jersey_number)),
            height: Some(Some(self.height)),
            weight: Some(Some(self.weight)),
            contract_start: Some(self.contract_start.to_string()),
            contract_end: Some(self.contract_end.to_string()),
            salary: Some(Some(self.salary)),
            player_value: Some(Some(self.player_value)),
            team_id: Some(Some(team_id)),
            photo_url: Some(Some(format!("https://example.com/players/{}.jpg", self.photo))),
            is_injured: Some(self.injury_details.is_some()),
            injury_details: Some(self.injury_details.map(str::to_string)),
            rating: Some(Some(self.rating)),
        }
    }
}

/// Inserts the sample clubs and their squads. Teams are matched by name and
/// players by name within their team, so running it again adds nothing.
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<SeedSummary, AppError> {
    DatabaseTransaction::run(pool, |tx| {
        Box::pin(async move {
            let mut summary = SeedSummary::default();
            let mut team_ids = Vec::with_capacity(SAMPLE_TEAMS.len());

            for sample in SAMPLE_TEAMS {
                let team = match team_repo::find_by_name(&mut **tx, sample.name).await? {
                    Some(existing) => {
                        log::debug!("Team {} already present", existing.name);
                        summary.teams_existing += 1;
                        existing
                    }
                    None => {
                        let team = Team::from_input(sample.to_input())?;
                        let created = team_repo::create_team(tx, &team).await?;
                        log::info!("Seeded team {} with id {}", created.name, created.id);
                        summary.teams_created += 1;
                        created
                    }
                };
                team_ids.push((sample.name, team.id));
            }

            for sample in SAMPLE_PLAYERS {
                let team_id = team_ids
                    .iter()
                    .find(|(name, _)| *name == sample.team_name)
                    .map(|(_, id)| *id)
                    .ok_or_else(|| {
                        AppError::internal_server_error_message(format!(
                            "Sample player {} references unknown team {}",
                            sample.full_name, sample.team_name
                        ))
                    })?;

                if player_repo::find_by_name_and_team(&mut **tx, sample.full_name, team_id)
                    .await?
                    .is_some()
                {
                    summary.players_existing += 1;
                    continue;
                }

                let player = Player::from_input(sample.to_input(team_id))?;
                let created = player_repo::create_player(tx, &player).await?;
                log::debug!("Seeded player {} with id {}", created.full_name, created.id);
                summary.players_created += 1;
            }

            Ok(summary)
        })
    })
    .await
}
