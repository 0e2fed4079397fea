use rustc_hash::FxHashSet;

use crate::graph::dijkstra::shortest_path_tree;
use crate::graph::path::RouteLeg;
use crate::{Distance, NetworkError, Road, Town};

/// Undirected road network: a set of towns and a set of roads, with at most
/// one road per unordered pair of towns.
///
/// Shortest-path queries never store state on the network itself; see
/// [`shortest_path_tree`].
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    towns: FxHashSet<Town>,
    roads: FxHashSet<Road>,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the town unless one with the same (case-insensitive) name is
    /// already present. Returns whether the insertion happened.
    pub fn add_town(&mut self, town: Town) -> bool {
        self.towns.insert(town)
    }

    pub fn contains_town(&self, town: &Town) -> bool {
        self.towns.contains(town)
    }

    /// Gets the network's own instance of the town with this name.
    pub fn town(&self, name: &str) -> Option<&Town> {
        self.towns.get(&Town::new(name))
    }

    /// Removes the town together with every road incident to it.
    /// Returns whether the town was a member of the network.
    pub fn remove_town(&mut self, town: &Town) -> bool {
        let removed = self.towns.remove(town);
        if removed {
            self.roads.retain(|road| !road.contains(town));
        }
        removed
    }

    /// Adds a road between two member towns and returns it.
    /// Fails if either endpoint is not part of the network, or if the pair
    /// is already connected; a failed insertion leaves the network
    /// untouched.
    pub fn add_road(
        &mut self,
        a: &Town,
        b: &Town,
        distance: Distance,
        name: impl Into<String>,
    ) -> Result<Road, NetworkError> {
        let unknown = |town: &Town| NetworkError::UnknownTown(town.name().to_owned());
        let a = self.towns.get(a).ok_or_else(|| unknown(a))?.clone();
        let b = self.towns.get(b).ok_or_else(|| unknown(b))?.clone();

        let road = Road::new(a, b, distance, name);
        if !self.roads.insert(road.clone()) {
            let (a, b) = road.endpoints();
            return Err(NetworkError::AlreadyConnected(
                a.name().to_owned(),
                b.name().to_owned(),
            ));
        }

        Ok(road)
    }

    /// Removes the road connecting the two towns only if its distance and
    /// name both match exactly. Returns the removed road.
    pub fn remove_road(
        &mut self,
        a: &Town,
        b: &Town,
        distance: Distance,
        name: &str,
    ) -> Option<Road> {
        let probe = Road::new(a.clone(), b.clone(), distance, name);
        let matches = self
            .roads
            .get(&probe)
            .is_some_and(|road| road.distance() == distance && road.name() == name);

        if matches { self.roads.take(&probe) } else { None }
    }

    /// Gets the road connecting the two towns, if any.
    /// Symmetric in its arguments.
    pub fn road_between(&self, a: &Town, b: &Town) -> Option<&Road> {
        self.roads.iter().find(|road| road.connects(a, b))
    }

    pub fn contains_road(&self, a: &Town, b: &Town) -> bool {
        self.road_between(a, b).is_some()
    }

    /// Gets an iterator over all the roads incident to the town.
    pub fn roads_of<'a>(&'a self, town: &'a Town) -> impl Iterator<Item = &'a Road> {
        self.roads.iter().filter(move |road| road.contains(town))
    }

    pub fn towns(&self) -> impl Iterator<Item = &Town> {
        self.towns.iter()
    }

    pub fn roads(&self) -> impl Iterator<Item = &Road> {
        self.roads.iter()
    }

    /// Computes the shortest route between two towns, one leg per hop with
    /// the origin first. Returns an empty route when no road touches the
    /// destination (without running the search), when the origin and
    /// destination are the same town, and when no path exists.
    pub fn shortest_path(&self, origin: &Town, destination: &Town) -> Vec<RouteLeg> {
        if !self.roads.iter().any(|road| road.contains(destination)) {
            return vec![];
        }

        let Some(origin) = self.towns.get(origin) else {
            return vec![];
        };

        shortest_path_tree(self, origin).route_to(destination)
    }
}

pub mod dijkstra;
pub mod path;
