//! Loading railway networks from semicolon-separated CSV files
//!
//! Station files hold `;`-separated station names; line files hold
//! `from;to;electrified;length` records. This module is the only place
//! the graph is mutated; every query elsewhere in the crate takes the
//! populated graph read-only.

use std::fs::File;
use std::path::Path;

use csv::{Reader, ReaderBuilder, Trim};
use log::warn;

use crate::{Error, RailwayGraph};

fn open(path: &Path) -> Result<Reader<File>, Error> {
    Ok(ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?)
}

/// Registers every station named in the file, deriving each station's
/// kind from its name prefix. Returns the number of stations created.
pub fn load_stations(graph: &mut RailwayGraph, path: impl AsRef<Path>) -> Result<usize, Error> {
    let before = graph.station_count();
    for record in open(path.as_ref())?.records() {
        let record = record?;
        for name in record.iter() {
            if name.is_empty() {
                continue;
            }
            graph.add_station(name);
        }
    }
    Ok(graph.station_count() - before)
}

/// Loads `from;to;electrified;length` records, inserting each line as a
/// mirrored arc pair. Endpoint stations missing from the graph are
/// created on the fly; malformed records are skipped with a warning.
/// Returns the number of lines added.
pub fn load_lines(graph: &mut RailwayGraph, path: impl AsRef<Path>) -> Result<usize, Error> {
    let mut added = 0;
    for record in open(path.as_ref())?.records() {
        let record = record?;
        if record.len() != 4 {
            warn!("skipping line record with {} fields (expected 4)", record.len());
            continue;
        }
        let from = &record[0];
        let to = &record[1];
        let electrified = &record[2] == "1";
        let length: f64 = record[3].parse().map_err(|_| {
            Error::InvalidData(format!("invalid length {:?} for line {from};{to}", &record[3]))
        })?;
        graph.add_line(from, to, length, electrified)?;
        added += 1;
    }
    Ok(added)
}

/// Loads a complete network from a stations file and a lines file.
pub fn load_network(
    stations: impl AsRef<Path>,
    lines: impl AsRef<Path>,
) -> Result<RailwayGraph, Error> {
    let mut graph = RailwayGraph::new();
    load_stations(&mut graph, stations)?;
    load_lines(&mut graph, lines)?;
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StationKind;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_stations_and_lines() {
        let dir = tempfile::tempdir().unwrap();
        let stations = write(&dir, "stations.csv", "D_Porto;S_Lisboa;T_Faro\nS_Coimbra\n");
        let lines = write(
            &dir,
            "lines.csv",
            "D_Porto;S_Lisboa;1;25\nS_Lisboa;T_Faro;0;12.5\nS_Lisboa;S_Coimbra;1;8\n",
        );

        let graph = load_network(&stations, &lines).unwrap();
        assert_eq!(graph.station_count(), 4);
        assert_eq!(graph.lines().len(), 3);
        assert!(graph.is_station_of_type("D_Porto", StationKind::Depot));
        assert!(graph.is_station_of_type("S_Coimbra", StationKind::Station));

        let faro = graph.resolve("T_Faro").unwrap();
        let arcs = graph.neighbors(faro);
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].length, 12.5);
        assert!(!arcs[0].electrified);
    }

    #[test]
    fn line_endpoints_are_created_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let stations = write(&dir, "stations.csv", "S_A\n");
        let lines = write(&dir, "lines.csv", "S_A;T_New;0;4\n");

        let graph = load_network(&stations, &lines).unwrap();
        assert!(graph.resolve("T_New").is_some());
        assert!(graph.is_station_of_type("T_New", StationKind::Terminal));
    }

    #[test]
    fn malformed_records_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut graph = RailwayGraph::new();
        let lines = write(&dir, "lines.csv", "S_A;S_B;1\nS_A;S_B;1;7\n");
        assert_eq!(load_lines(&mut graph, &lines).unwrap(), 1);
    }

    #[test]
    fn unparsable_length_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut graph = RailwayGraph::new();
        let lines = write(&dir, "lines.csv", "S_A;S_B;1;twelve\n");
        assert!(matches!(
            load_lines(&mut graph, &lines),
            Err(Error::InvalidData(_))
        ));
    }
}
