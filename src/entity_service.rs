use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{models::Dimension, models_api::entity::EntityDescriptor};

// slug, display name, crest, backend team name
const TEAMS: [(&str, &str, &str, &str); 20] = [
    ("Arsenal", "Arsenal", "https://crests.football-data.org/57.png", "Arsenal"),
    ("Aston-Villa", "Aston Villa", "https://crests.football-data.org/58.png", "Aston Villa"),
    ("Bournemouth", "Bournemouth", "https://crests.football-data.org/1044.png", "Bournemouth"),
    ("Brentford", "Brentford", "https://crests.football-data.org/402.png", "Brentford"),
    ("Brighton", "Brighton", "https://crests.football-data.org/397.png", "Brighton"),
    ("Burnley", "Burnley", "https://crests.football-data.org/328.png", "Burnley"),
    ("Chelsea", "Chelsea", "https://crests.football-data.org/61.png", "Chelsea"),
    ("Crystal-Palace", "Crystal Palace", "https://crests.football-data.org/354.png", "Crystal Palace"),
    ("Everton", "Everton", "https://crests.football-data.org/62.png", "Everton"),
    ("Fulham", "Fulham", "https://crests.football-data.org/63.png", "Fulham"),
    ("Leeds-United", "Leeds United", "https://crests.football-data.org/341.png", "Leeds United"),
    ("Liverpool", "Liverpool", "https://crests.football-data.org/64.png", "Liverpool"),
    ("Manchester-City", "Manchester City", "https://crests.football-data.org/65.png", "Manchester City"),
    ("Manchester-United", "Manchester United", "https://crests.football-data.org/66.png", "Manchester Utd"),
    ("Newcastle-United", "Newcastle United", "https://crests.football-data.org/67.png", "Newcastle Utd"),
    ("Nottingham-Forest", "Nottingham Forest", "https://crests.football-data.org/351.png", "Nott'ham Forest"),
    ("Sunderland", "Sunderland", "https://crests.football-data.org/71.png", "Sunderland"),
    ("Tottenham", "Tottenham", "https://crests.football-data.org/73.png", "Tottenham"),
    ("West-Ham", "West Ham", "https://crests.football-data.org/563.png", "West Ham"),
    ("Wolverhampton-Wanderers", "Wolverhampton Wanderers", "https://crests.football-data.org/76.png", "Wolves"),
];

// slug, display name, flag, backend nation code
const NATIONS: [(&str, &str, &str, &str); 40] = [
    ("England", "England", "https://flagcdn.com/w80/gb-eng.png", "ENG"),
    ("France", "France", "https://flagcdn.com/w80/fr.png", "FRA"),
    ("Brazil", "Brazil", "https://flagcdn.com/w80/br.png", "BRA"),
    ("Spain", "Spain", "https://flagcdn.com/w80/es.png", "ESP"),
    ("Germany", "Germany", "https://flagcdn.com/w80/de.png", "GER"),
    ("Portugal", "Portugal", "https://flagcdn.com/w80/pt.png", "POR"),
    ("Argentina", "Argentina", "https://flagcdn.com/w80/ar.png", "ARG"),
    ("Netherlands", "Netherlands", "https://flagcdn.com/w80/nl.png", "NED"),
    ("Belgium", "Belgium", "https://flagcdn.com/w80/be.png", "BEL"),
    ("Italy", "Italy", "https://flagcdn.com/w80/it.png", "ITA"),
    ("Scotland", "Scotland", "https://flagcdn.com/w80/gb-sct.png", "SCO"),
    ("Wales", "Wales", "https://flagcdn.com/w80/gb-wls.png", "WAL"),
    ("Ireland", "Ireland", "https://flagcdn.com/w80/ie.png", "IRL"),
    ("Northern-Ireland", "Northern Ireland", "https://flagcdn.com/w80/gb-nir.png", "NIR"),
    ("Denmark", "Denmark", "https://flagcdn.com/w80/dk.png", "DEN"),
    ("Sweden", "Sweden", "https://flagcdn.com/w80/se.png", "SWE"),
    ("Norway", "Norway", "https://flagcdn.com/w80/no.png", "NOR"),
    ("Switzerland", "Switzerland", "https://flagcdn.com/w80/ch.png", "SUI"),
    ("Croatia", "Croatia", "https://flagcdn.com/w80/hr.png", "CRO"),
    ("Serbia", "Serbia", "https://flagcdn.com/w80/rs.png", "SRB"),
    ("Poland", "Poland", "https://flagcdn.com/w80/pl.png", "POL"),
    ("Ukraine", "Ukraine", "https://flagcdn.com/w80/ua.png", "UKR"),
    ("Turkey", "Turkey", "https://flagcdn.com/w80/tr.png", "TUR"),
    ("USA", "USA", "https://flagcdn.com/w80/us.png", "USA"),
    ("Japan", "Japan", "https://flagcdn.com/w80/jp.png", "JPN"),
    ("South-Korea", "South Korea", "https://flagcdn.com/w80/kr.png", "KOR"),
    ("Australia", "Australia", "https://flagcdn.com/w80/au.png", "AUS"),
    ("Ghana", "Ghana", "https://flagcdn.com/w80/gh.png", "GHA"),
    ("Nigeria", "Nigeria", "https://flagcdn.com/w80/ng.png", "NGA"),
    ("Senegal", "Senegal", "https://flagcdn.com/w80/sn.png", "SEN"),
    ("Ivory-Coast", "Ivory Coast", "https://flagcdn.com/w80/ci.png", "CIV"),
    ("Morocco", "Morocco", "https://flagcdn.com/w80/ma.png", "MAR"),
    ("Egypt", "Egypt", "https://flagcdn.com/w80/eg.png", "EGY"),
    ("Cameroon", "Cameroon", "https://flagcdn.com/w80/cm.png", "CMR"),
    ("Colombia", "Colombia", "https://flagcdn.com/w80/co.png", "COL"),
    ("Mexico", "Mexico", "https://flagcdn.com/w80/mx.png", "MEX"),
    ("Uruguay", "Uruguay", "https://flagcdn.com/w80/uy.png", "URU"),
    ("Ecuador", "Ecuador", "https://flagcdn.com/w80/ec.png", "ECU"),
    ("Czech-Republic", "Czech Republic", "https://flagcdn.com/w80/cz.png", "CZE"),
    ("Austria", "Austria", "https://flagcdn.com/w80/at.png", "AUT"),
];

// code, display name, description
const POSITIONS: [(&str, &str, &str); 4] = [
    ("GK", "Goalkeepers", "Last line of defense"),
    ("DF", "Defenders", "Defensive specialists"),
    ("MF", "Midfielders", "Engine of the team"),
    ("FW", "Forwards", "Goal scorers"),
];

struct EntityTable {
    entries: Vec<EntityDescriptor>,
    by_slug: HashMap<String, usize>,
}

impl EntityTable {
    fn new(entries: Vec<EntityDescriptor>) -> EntityTable {
        let by_slug = entries.iter()
            .enumerate()
            .map(|(i, e)| (e.slug.clone(), i))
            .collect();
        EntityTable { entries, by_slug }
    }

    fn get(&self, slug: &str) -> Option<&EntityDescriptor> {
        self.by_slug.get(slug).and_then(|i| self.entries.get(*i))
    }
}

lazy_static! {
    static ref TEAM_TABLE: EntityTable = EntityTable::new(TEAMS.iter()
        .map(|(slug, name, image, query_value)| EntityDescriptor {
            dimension: Dimension::Team,
            slug: slug.to_string(),
            name: name.to_string(),
            image: image.to_string(),
            query_value: query_value.to_string(),
            description: None,
        })
        .collect());

    static ref NATION_TABLE: EntityTable = EntityTable::new(NATIONS.iter()
        .map(|(slug, name, image, code)| EntityDescriptor {
            dimension: Dimension::Nation,
            slug: slug.to_string(),
            name: name.to_string(),
            image: image.to_string(),
            query_value: code.to_string(),
            description: None,
        })
        .collect());

    static ref POSITION_TABLE: EntityTable = EntityTable::new(POSITIONS.iter()
        .map(|(code, name, description)| EntityDescriptor {
            dimension: Dimension::Position,
            slug: code.to_string(),
            name: name.to_string(),
            image: format!("/images/{code}.jpg"),
            query_value: code.to_string(),
            description: Some(description.to_string()),
        })
        .collect());
}

pub struct EntityService;

impl EntityService {
    fn get_table(dimension: Dimension) -> &'static EntityTable {
        match dimension {
            Dimension::Team => &*TEAM_TABLE,
            Dimension::Nation => &*NATION_TABLE,
            Dimension::Position => &*POSITION_TABLE,
        }
    }

    /// Maps a decoded url slug to its descriptor. Unknown slugs never fail,
    /// they get a descriptor that queries the backend with the slug as is.
    pub fn resolve(slug: &str, dimension: Dimension) -> EntityDescriptor {
        let table = EntityService::get_table(dimension);
        let found = match dimension {
            Dimension::Position => table.get(&slug.to_uppercase()),
            _ => table.get(slug),
        };
        match found {
            Some(e) => e.clone(),
            None => EntityDescriptor {
                dimension,
                slug: slug.to_string(),
                name: slug.replace('-', " "),
                image: String::new(),
                query_value: slug.to_string(),
                description: None,
            },
        }
    }

    pub fn all(dimension: Dimension) -> &'static [EntityDescriptor] {
        &EntityService::get_table(dimension).entries
    }

    /// Case-insensitive match on the display name. Nations and positions match on their code as well.
    pub fn search(dimension: Dimension, query: &str) -> Vec<EntityDescriptor> {
        let query = query.trim().to_lowercase();
        EntityService::all(dimension).iter()
            .filter(|e| {
                e.name.to_lowercase().contains(&query)
                    || (dimension != Dimension::Team && e.query_value.to_lowercase().contains(&query))
            })
            .cloned()
            .collect()
    }
}
