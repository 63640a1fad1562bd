//! The railway graph and its population API

use hashbrown::{HashMap, HashSet};

use super::types::{Line, Station, StationId, StationKind};
use crate::Error;

/// In-memory railway network.
///
/// Populated once by the loader and read-only for every query. The
/// adjacency stores each undirected line as two mirrored arcs with
/// identical length and electrification.
#[derive(Debug, Clone, Default)]
pub struct RailwayGraph {
    stations: Vec<Station>,
    name_to_id: HashMap<String, StationId>,
    adjacency: Vec<Vec<Line>>,
}

impl RailwayGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// O(1) name resolution.
    pub fn resolve(&self, name: &str) -> Option<StationId> {
        self.name_to_id.get(name).copied()
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id)
    }

    pub fn station_name(&self, id: StationId) -> Option<&str> {
        self.stations.get(id).map(|s| s.name.as_str())
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Outgoing arcs of a station, O(degree) iteration.
    pub fn neighbors(&self, id: StationId) -> &[Line] {
        self.adjacency.get(id).map_or(&[], Vec::as_slice)
    }

    /// Get-or-create a station, deriving its kind from the name prefix.
    pub fn add_station(&mut self, name: &str) -> StationId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }
        let id = self.stations.len();
        self.stations.push(Station {
            id,
            name: name.to_string(),
            kind: StationKind::from_name(name),
        });
        self.name_to_id.insert(name.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Inserts an undirected line as a pair of mirrored arcs. Unknown
    /// endpoint names are created on the fly.
    pub fn add_line(
        &mut self,
        from: &str,
        to: &str,
        length: f64,
        electrified: bool,
    ) -> Result<(), Error> {
        if !(length.is_finite() && length > 0.0) {
            return Err(Error::InvalidData(format!(
                "line {from};{to} has invalid length {length}"
            )));
        }
        let from_id = self.add_station(from);
        let to_id = self.add_station(to);
        self.adjacency[from_id].push(Line { from: from_id, to: to_id, length, electrified });
        self.adjacency[to_id].push(Line { from: to_id, to: from_id, length, electrified });
        Ok(())
    }

    /// Each undirected line exactly once, by canonical identity.
    pub fn lines(&self) -> Vec<&Line> {
        let mut seen: HashSet<(StationId, StationId)> = HashSet::new();
        let mut out = Vec::new();
        for arcs in &self.adjacency {
            for line in arcs {
                if seen.insert(line.edge_id()) {
                    out.push(line);
                }
            }
        }
        out
    }

    /// Name-sorted station listing for external presentation.
    pub fn station_directory(&self) -> Vec<(&str, StationKind)> {
        let mut directory: Vec<_> = self
            .stations
            .iter()
            .map(|s| (s.name.as_str(), s.kind))
            .collect();
        directory.sort_unstable_by(|a, b| a.0.cmp(b.0));
        directory
    }

    /// Whether the named station matches the requested classification.
    pub fn is_station_of_type(&self, name: &str, kind: StationKind) -> bool {
        self.resolve(name)
            .and_then(|id| self.station(id))
            .is_some_and(|s| s.kind == kind)
    }
}
