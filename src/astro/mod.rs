// Astrology exports
pub mod porutham;
pub mod stars;

pub use porutham::HoroscopeComparator;
pub use stars::{Gana, Nakshatra, Planet, PoruthamTable, Raasi, RajjuGroup, Yoni, ALL_NAKSHATRAS};
