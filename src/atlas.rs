use std::io::BufRead;
use std::path::Path;

use tracing::warn;

use crate::reader::read_route_records;
use crate::{Distance, NetworkError, Road, RoadNetwork, RouteFileError, RouteLeg, Town};

/// Name-based façade over a [`RoadNetwork`]: every operation refers to towns
/// and roads by their names. Town names are matched case-insensitively, like
/// the towns themselves.
#[derive(Debug, Clone, Default)]
pub struct TownAtlas {
    network: RoadNetwork,
}

impl TownAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn network(&self) -> &RoadNetwork {
        &self.network
    }

    pub fn add_town(&mut self, name: &str) -> bool {
        self.network.add_town(Town::new(name))
    }

    pub fn contains_town(&self, name: &str) -> bool {
        self.network.town(name).is_some()
    }

    pub fn town(&self, name: &str) -> Option<&Town> {
        self.network.town(name)
    }

    /// Adds a road between two member towns; the towns must have been added
    /// first.
    pub fn add_road(
        &mut self,
        a: &str,
        b: &str,
        distance: Distance,
        name: &str,
    ) -> Result<Road, NetworkError> {
        self.network
            .add_road(&Town::new(a), &Town::new(b), distance, name)
    }

    /// Name of the road connecting the two towns, if any.
    pub fn road_name(&self, a: &str, b: &str) -> Option<&str> {
        self.network
            .road_between(&Town::new(a), &Town::new(b))
            .map(Road::name)
    }

    pub fn contains_road(&self, a: &str, b: &str) -> bool {
        self.network.contains_road(&Town::new(a), &Town::new(b))
    }

    /// Removes the road connecting the two towns, but only if its name
    /// matches. Returns whether a road was removed.
    pub fn remove_road(&mut self, a: &str, b: &str, name: &str) -> bool {
        let (a, b) = (Town::new(a), Town::new(b));
        let Some(distance) = self
            .network
            .road_between(&a, &b)
            .filter(|road| road.name() == name)
            .map(Road::distance)
        else {
            return false;
        };

        self.network.remove_road(&a, &b, distance, name).is_some()
    }

    /// Removes the town and every road incident to it.
    pub fn remove_town(&mut self, name: &str) -> bool {
        self.network.remove_town(&Town::new(name))
    }

    /// All town names, sorted.
    pub fn all_towns(&self) -> Vec<String> {
        let mut towns: Vec<_> = self
            .network
            .towns()
            .map(|town| town.name().to_owned())
            .collect();
        towns.sort_unstable();
        towns
    }

    /// All road names, sorted. Road names are not required to be unique
    /// across pairs, so the list may contain duplicates.
    pub fn all_roads(&self) -> Vec<String> {
        let mut roads: Vec<_> = self
            .network
            .roads()
            .map(|road| road.name().to_owned())
            .collect();
        roads.sort_unstable();
        roads
    }

    /// Shortest route between two towns, rendered one hop per line.
    /// Empty when no route exists.
    pub fn route(&self, origin: &str, destination: &str) -> Vec<String> {
        self.network
            .shortest_path(&Town::new(origin), &Town::new(destination))
            .iter()
            .map(RouteLeg::to_string)
            .collect()
    }

    /// Populates the atlas from route records read from the given source.
    /// Both towns of every record are added (idempotently) before its road;
    /// a record whose towns are already connected is skipped with a warning.
    pub fn populate(&mut self, source: impl BufRead) -> Result<(), RouteFileError> {
        for record in read_route_records(source)? {
            let (a, b) = (&record.towns.0, &record.towns.1);
            self.add_town(a);
            self.add_town(b);

            if let Err(error) = self.add_road(a, b, record.distance, &record.road) {
                // both towns were just added, so only a duplicate pair can fail
                warn!("Skipping road record {:?}: {error}", record.road);
            }
        }

        Ok(())
    }

    /// Populates the atlas from a route file on disk.
    pub fn populate_from_path(&mut self, path: impl AsRef<Path>) -> Result<(), RouteFileError> {
        let file = std::fs::File::open(path)?;
        self.populate(std::io::BufReader::new(file))
    }
}
