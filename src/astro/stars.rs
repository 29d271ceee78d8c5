use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The 27 canonical birth stars, in zodiacal order
///
/// The discriminant doubles as the ordinal index 0-26 used by the
/// counted-position rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PoorvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Moola,
    PoorvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PoorvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PoorvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Moola,
    Nakshatra::PoorvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PoorvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Ordinal index 0-26
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Nakshatra::Ashwini => "Ashwini",
            Nakshatra::Bharani => "Bharani",
            Nakshatra::Krittika => "Krittika",
            Nakshatra::Rohini => "Rohini",
            Nakshatra::Mrigashira => "Mrigashira",
            Nakshatra::Ardra => "Ardra",
            Nakshatra::Punarvasu => "Punarvasu",
            Nakshatra::Pushya => "Pushya",
            Nakshatra::Ashlesha => "Ashlesha",
            Nakshatra::Magha => "Magha",
            Nakshatra::PoorvaPhalguni => "Poorva Phalguni",
            Nakshatra::UttaraPhalguni => "Uttara Phalguni",
            Nakshatra::Hasta => "Hasta",
            Nakshatra::Chitra => "Chitra",
            Nakshatra::Swati => "Swati",
            Nakshatra::Vishakha => "Vishakha",
            Nakshatra::Anuradha => "Anuradha",
            Nakshatra::Jyeshtha => "Jyeshtha",
            Nakshatra::Moola => "Moola",
            Nakshatra::PoorvaAshadha => "Poorva Ashadha",
            Nakshatra::UttaraAshadha => "Uttara Ashadha",
            Nakshatra::Shravana => "Shravana",
            Nakshatra::Dhanishta => "Dhanishta",
            Nakshatra::Shatabhisha => "Shatabhisha",
            Nakshatra::PoorvaBhadrapada => "Poorva Bhadrapada",
            Nakshatra::UttaraBhadrapada => "Uttara Bhadrapada",
            Nakshatra::Revati => "Revati",
        }
    }

    /// Parse a star name, tolerating case, spacing and common spellings.
    ///
    /// An unrecognized name is a validation error; the engine never
    /// substitutes a default star.
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        let key: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        let star = match key.as_str() {
            "ashwini" | "aswini" => Nakshatra::Ashwini,
            "bharani" => Nakshatra::Bharani,
            "krittika" | "karthigai" => Nakshatra::Krittika,
            "rohini" => Nakshatra::Rohini,
            "mrigashira" | "mrigashirsha" => Nakshatra::Mrigashira,
            "ardra" | "arudra" => Nakshatra::Ardra,
            "punarvasu" => Nakshatra::Punarvasu,
            "pushya" | "poosam" => Nakshatra::Pushya,
            "ashlesha" | "aslesha" => Nakshatra::Ashlesha,
            "magha" | "makam" => Nakshatra::Magha,
            "poorvaphalguni" | "purvaphalguni" => Nakshatra::PoorvaPhalguni,
            "uttaraphalguni" => Nakshatra::UttaraPhalguni,
            "hasta" | "hastam" => Nakshatra::Hasta,
            "chitra" | "chithirai" => Nakshatra::Chitra,
            "swati" => Nakshatra::Swati,
            "vishakha" | "visakam" => Nakshatra::Vishakha,
            "anuradha" | "anusham" => Nakshatra::Anuradha,
            "jyeshtha" | "kettai" => Nakshatra::Jyeshtha,
            "moola" | "mula" => Nakshatra::Moola,
            "poorvaashadha" | "purvaashadha" => Nakshatra::PoorvaAshadha,
            "uttaraashadha" => Nakshatra::UttaraAshadha,
            "shravana" | "thiruvonam" => Nakshatra::Shravana,
            "dhanishta" | "avittam" => Nakshatra::Dhanishta,
            "shatabhisha" | "sadayam" => Nakshatra::Shatabhisha,
            "poorvabhadrapada" | "purvabhadrapada" => Nakshatra::PoorvaBhadrapada,
            "uttarabhadrapada" => Nakshatra::UttaraBhadrapada,
            "revati" => Nakshatra::Revati,
            _ => {
                return Err(EngineError::Validation(format!(
                    "unrecognized star name: {}",
                    name
                )))
            }
        };

        Ok(star)
    }
}

/// The 12 moon signs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Raasi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

impl Raasi {
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Temperament class of a star
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

/// Yoni animal of a star
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Yoni {
    Horse,
    Elephant,
    Sheep,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

/// Rajju group of a star
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RajjuGroup {
    Pada,
    Kati,
    Nabhi,
    Kantha,
    Siro,
}

/// Ruling planet of a moon sign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
}

/// The fixed lookup tables behind the ten Porutham factors
///
/// Pure data, injectable into the comparator so the factor logic stays
/// testable independent of the table values. `Default` carries the
/// classical assignments.
#[derive(Debug, Clone)]
pub struct PoruthamTable {
    pub raasi_of: [Raasi; 27],
    pub gana_of: [Gana; 27],
    pub yoni_of: [Yoni; 27],
    pub rajju_of: [RajjuGroup; 27],
    pub hostile_yonis: Vec<(Yoni, Yoni)>,
    pub vedha_pairs: Vec<(Nakshatra, Nakshatra)>,
    pub lord_of: [Planet; 12],
    pub planet_friends: Vec<(Planet, Planet)>,
    pub vasya_of: Vec<(Raasi, Vec<Raasi>)>,
}

impl PoruthamTable {
    pub fn raasi_of(&self, star: Nakshatra) -> Raasi {
        self.raasi_of[star.index()]
    }

    pub fn gana_of(&self, star: Nakshatra) -> Gana {
        self.gana_of[star.index()]
    }

    pub fn yoni_of(&self, star: Nakshatra) -> Yoni {
        self.yoni_of[star.index()]
    }

    pub fn rajju_of(&self, star: Nakshatra) -> RajjuGroup {
        self.rajju_of[star.index()]
    }

    pub fn yonis_hostile(&self, a: Yoni, b: Yoni) -> bool {
        self.hostile_yonis
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    pub fn is_vedha(&self, a: Nakshatra, b: Nakshatra) -> bool {
        self.vedha_pairs
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    pub fn lord_of(&self, raasi: Raasi) -> Planet {
        self.lord_of[raasi.index()]
    }

    pub fn planets_friendly(&self, a: Planet, b: Planet) -> bool {
        a == b
            || self
                .planet_friends
                .iter()
                .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    pub fn vasya_controls(&self, a: Raasi, b: Raasi) -> bool {
        self.vasya_of
            .iter()
            .any(|(r, controlled)| *r == a && controlled.contains(&b))
    }
}

impl Default for PoruthamTable {
    fn default() -> Self {
        use Gana::*;
        use Nakshatra::*;
        use Planet::*;
        use Raasi::*;
        use RajjuGroup::*;
        use Yoni::*;

        Self {
            raasi_of: [
                Mesha,     // Ashwini
                Mesha,     // Bharani
                Vrishabha, // Krittika
                Vrishabha, // Rohini
                Vrishabha, // Mrigashira
                Mithuna,   // Ardra
                Mithuna,   // Punarvasu
                Karka,     // Pushya
                Karka,     // Ashlesha
                Simha,     // Magha
                Simha,     // Poorva Phalguni
                Kanya,     // Uttara Phalguni
                Kanya,     // Hasta
                Kanya,     // Chitra
                Tula,      // Swati
                Tula,      // Vishakha
                Vrischika, // Anuradha
                Vrischika, // Jyeshtha
                Dhanu,     // Moola
                Dhanu,     // Poorva Ashadha
                Makara,    // Uttara Ashadha
                Makara,    // Shravana
                Kumbha,    // Dhanishta
                Kumbha,    // Shatabhisha
                Kumbha,    // Poorva Bhadrapada
                Meena,     // Uttara Bhadrapada
                Meena,     // Revati
            ],
            gana_of: [
                Deva,     // Ashwini
                Manushya, // Bharani
                Rakshasa, // Krittika
                Manushya, // Rohini
                Deva,     // Mrigashira
                Manushya, // Ardra
                Deva,     // Punarvasu
                Deva,     // Pushya
                Rakshasa, // Ashlesha
                Rakshasa, // Magha
                Manushya, // Poorva Phalguni
                Manushya, // Uttara Phalguni
                Deva,     // Hasta
                Rakshasa, // Chitra
                Deva,     // Swati
                Rakshasa, // Vishakha
                Deva,     // Anuradha
                Rakshasa, // Jyeshtha
                Rakshasa, // Moola
                Manushya, // Poorva Ashadha
                Manushya, // Uttara Ashadha
                Deva,     // Shravana
                Rakshasa, // Dhanishta
                Rakshasa, // Shatabhisha
                Manushya, // Poorva Bhadrapada
                Manushya, // Uttara Bhadrapada
                Deva,     // Revati
            ],
            yoni_of: [
                Horse,    // Ashwini
                Elephant, // Bharani
                Sheep,    // Krittika
                Serpent,  // Rohini
                Serpent,  // Mrigashira
                Dog,      // Ardra
                Cat,      // Punarvasu
                Sheep,    // Pushya
                Cat,      // Ashlesha
                Rat,      // Magha
                Rat,      // Poorva Phalguni
                Cow,      // Uttara Phalguni
                Buffalo,  // Hasta
                Tiger,    // Chitra
                Buffalo,  // Swati
                Tiger,    // Vishakha
                Deer,     // Anuradha
                Deer,     // Jyeshtha
                Dog,      // Moola
                Monkey,   // Poorva Ashadha
                Mongoose, // Uttara Ashadha
                Monkey,   // Shravana
                Lion,     // Dhanishta
                Horse,    // Shatabhisha
                Lion,     // Poorva Bhadrapada
                Cow,      // Uttara Bhadrapada
                Elephant, // Revati
            ],
            rajju_of: [
                Pada,   // Ashwini
                Kati,   // Bharani
                Nabhi,  // Krittika
                Kantha, // Rohini
                Siro,   // Mrigashira
                Kantha, // Ardra
                Nabhi,  // Punarvasu
                Kati,   // Pushya
                Pada,   // Ashlesha
                Pada,   // Magha
                Kati,   // Poorva Phalguni
                Nabhi,  // Uttara Phalguni
                Kantha, // Hasta
                Siro,   // Chitra
                Kantha, // Swati
                Nabhi,  // Vishakha
                Kati,   // Anuradha
                Pada,   // Jyeshtha
                Pada,   // Moola
                Kati,   // Poorva Ashadha
                Nabhi,  // Uttara Ashadha
                Kantha, // Shravana
                Siro,   // Dhanishta
                Kantha, // Shatabhisha
                Nabhi,  // Poorva Bhadrapada
                Kati,   // Uttara Bhadrapada
                Pada,   // Revati
            ],
            hostile_yonis: vec![
                (Cat, Rat),
                (Cow, Tiger),
                (Lion, Elephant),
                (Dog, Deer),
                (Serpent, Mongoose),
                (Monkey, Sheep),
                (Horse, Buffalo),
            ],
            vedha_pairs: vec![
                (Ashwini, Jyeshtha),
                (Bharani, Anuradha),
                (Krittika, Vishakha),
                (Rohini, Swati),
                (Mrigashira, Dhanishta),
                (Ardra, Shravana),
                (Punarvasu, UttaraAshadha),
                (Pushya, PoorvaAshadha),
                (Ashlesha, Moola),
                (Magha, Revati),
                (PoorvaPhalguni, UttaraBhadrapada),
                (UttaraPhalguni, PoorvaBhadrapada),
                (Hasta, Shatabhisha),
            ],
            lord_of: [
                Mars,    // Mesha
                Venus,   // Vrishabha
                Mercury, // Mithuna
                Moon,    // Karka
                Sun,     // Simha
                Mercury, // Kanya
                Venus,   // Tula
                Mars,    // Vrischika
                Jupiter, // Dhanu
                Saturn,  // Makara
                Saturn,  // Kumbha
                Jupiter, // Meena
            ],
            planet_friends: vec![
                (Sun, Moon),
                (Sun, Mars),
                (Sun, Jupiter),
                (Moon, Mercury),
                (Mars, Moon),
                (Mars, Jupiter),
                (Mercury, Venus),
                (Venus, Saturn),
                (Saturn, Mercury),
            ],
            vasya_of: vec![
                (Mesha, vec![Simha, Vrischika]),
                (Vrishabha, vec![Karka, Tula]),
                (Mithuna, vec![Kanya]),
                (Karka, vec![Vrischika, Dhanu]),
                (Simha, vec![Tula]),
                (Kanya, vec![Mithuna, Meena]),
                (Tula, vec![Kanya, Makara]),
                (Vrischika, vec![Karka]),
                (Dhanu, vec![Meena]),
                (Makara, vec![Mesha, Kumbha]),
                (Kumbha, vec![Mesha]),
                (Meena, vec![Makara]),
            ],
        }
    }
}
