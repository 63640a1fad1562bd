//! Basic railway types: stations, lines and train categories

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::Error;

/// Dense station identifier, assigned sequentially at first encounter.
pub type StationId = usize;

/// Station classification, derived once from the naming convention
/// (`D` depot, `S` station, `T` terminal) and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StationKind {
    Depot,
    Station,
    Terminal,
    Unknown,
}

impl StationKind {
    pub(crate) fn from_name(name: &str) -> Self {
        match name.chars().next() {
            Some('D') => Self::Depot,
            Some('S') => Self::Station,
            Some('T') => Self::Terminal,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for StationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Depot => "Depot",
            Self::Station => "Station",
            Self::Terminal => "Terminal",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// A railway station.
#[derive(Debug, Clone, Serialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub kind: StationKind,
}

/// Directed arc of an undirected railway line.
///
/// Every physical line is stored as two mirrored arcs with identical
/// length and electrification; all algorithms rely on that pairing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub from: StationId,
    pub to: StationId,
    /// Length in km, always positive.
    pub length: f64,
    pub electrified: bool,
}

impl Line {
    /// Canonical identity of the undirected line, shared by both arcs.
    pub fn edge_id(&self) -> (StationId, StationId) {
        (self.from.min(self.to), self.from.max(self.to))
    }
}

/// Train categories. Only electric traction is restricted to
/// electrified lines; the other types ignore electrification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrainType {
    Steam,
    Diesel,
    Electric,
}

impl TrainType {
    pub fn can_traverse(self, line: &Line) -> bool {
        self != Self::Electric || line.electrified
    }
}

impl FromStr for TrainType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "steam" => Ok(Self::Steam),
            "diesel" => Ok(Self::Diesel),
            "electric" => Ok(Self::Electric),
            other => Err(Error::UnknownTrainType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_kind_from_name_prefix() {
        assert_eq!(StationKind::from_name("D_Porto"), StationKind::Depot);
        assert_eq!(StationKind::from_name("S_Lisboa"), StationKind::Station);
        assert_eq!(StationKind::from_name("T_Faro"), StationKind::Terminal);
        assert_eq!(StationKind::from_name("X_Braga"), StationKind::Unknown);
        assert_eq!(StationKind::from_name(""), StationKind::Unknown);
    }

    #[test]
    fn train_type_parses_case_insensitively() {
        assert_eq!("Electric".parse::<TrainType>().unwrap(), TrainType::Electric);
        assert_eq!("STEAM".parse::<TrainType>().unwrap(), TrainType::Steam);
        assert!("maglev".parse::<TrainType>().is_err());
    }

    #[test]
    fn only_electric_is_constrained() {
        let wired = Line { from: 0, to: 1, length: 3.0, electrified: true };
        let bare = Line { from: 0, to: 1, length: 3.0, electrified: false };
        assert!(TrainType::Electric.can_traverse(&wired));
        assert!(!TrainType::Electric.can_traverse(&bare));
        assert!(TrainType::Diesel.can_traverse(&bare));
        assert!(TrainType::Steam.can_traverse(&bare));
    }

    #[test]
    fn edge_id_is_direction_independent() {
        let ab = Line { from: 2, to: 5, length: 1.0, electrified: false };
        let ba = Line { from: 5, to: 2, length: 1.0, electrified: false };
        assert_eq!(ab.edge_id(), ba.edge_id());
    }
}
