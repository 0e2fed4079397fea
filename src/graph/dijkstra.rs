use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::graph::RoadNetwork;
use crate::graph::path::RouteLeg;
use crate::{Distance, Road, Town};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapElement<'g> {
    /// Current shortest distance from the origin to this town.
    distance: Distance,
    town: &'g Town,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl Ord for HeapElement<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            // breaking ties in a deterministic way
            .then_with(|| other.town.cmp(self.town))
    }
}

impl PartialOrd for HeapElement<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest-path tree of a single origin: the best known distance to every
/// reachable town, and the road and previous town leading to it.
/// The maps are owned by the tree and valid only for the network state they
/// were computed from; nothing is retained on the network between queries.
#[derive(Debug)]
pub struct ShortestPathTree<'g> {
    origin: &'g Town,
    distances: FxHashMap<&'g Town, Distance>,
    previous: FxHashMap<&'g Town, (&'g Road, &'g Town)>,
}

impl ShortestPathTree<'_> {
    pub const fn origin(&self) -> &Town {
        self.origin
    }

    /// Shortest distance from the origin to the town.
    /// Returns None if the town is unreachable from the origin.
    pub fn distance_to(&self, town: &Town) -> Option<Distance> {
        self.distances.get(town).copied()
    }

    /// Unpacks the shortest route from the origin to the destination, one
    /// leg per hop with the origin first.
    ///
    /// A destination without a predecessor entry yields an empty route;
    /// this covers both an unreachable destination and the origin itself.
    /// The walk cannot cycle because every predecessor entry points at a
    /// town that was settled strictly before its successor.
    pub fn route_to(&self, destination: &Town) -> Vec<RouteLeg> {
        let mut legs = vec![];
        let mut next = destination;

        while let Some((&town, &(road, previous))) = self.previous.get_key_value(next) {
            legs.push(RouteLeg::new(previous, road, town));
            next = previous;
        }

        legs.reverse();
        legs
    }
}

/// Computes the shortest-path tree of the origin over the whole network
/// using Dijkstra's algorithm, relaxing every road in both directions.
pub fn shortest_path_tree<'g>(network: &'g RoadNetwork, origin: &'g Town) -> ShortestPathTree<'g> {
    debug!("Computing shortest path tree from {origin}");

    // (current) shortest distance from the origin to this town
    let mut distances = FxHashMap::default();
    distances.insert(origin, Distance::ZERO);

    // road taken and previous town on the current best known path to this town
    let mut previous: FxHashMap<&Town, (&Road, &Town)> = FxHashMap::default();

    // priority queue of discovered towns that may need to be visited
    let mut frontier = BinaryHeap::from([HeapElement {
        town: origin,
        distance: Distance::ZERO,
    }]);

    while let Some(element) = frontier.pop() {
        // check if we already know a cheaper way to get to this town
        let shortest = *distances.get(element.town).unwrap_or(&Distance::MAX);
        if element.distance > shortest {
            continue;
        }

        for road in network.roads_of(element.town) {
            // roads are undirected: the endpoint opposite the settled town
            // is the one to relax
            let Some(neighbour) = road.opposite(element.town) else {
                continue;
            };

            let distance = element.distance + road.distance();
            let shortest = *distances.get(neighbour).unwrap_or(&Distance::MAX);

            // check if we can follow the current path to reach the neighbour
            // in a cheaper way
            if distance < shortest {
                // Relax: we have now found a better way that we are going to explore
                distances.insert(neighbour, distance);
                previous.insert(neighbour, (road, element.town));
                frontier.push(HeapElement {
                    town: neighbour,
                    distance,
                });
            }
        }
    }

    ShortestPathTree {
        origin,
        distances,
        previous,
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    /// Aberdeen --4-- Bell --2-- Crosby
    ///     \                       /
    ///      \----------5----------/
    ///
    /// Davies is isolated.
    fn network() -> RoadNetwork {
        let mut network = RoadNetwork::new();
        for name in ["Aberdeen", "Bell", "Crosby", "Davies"] {
            network.add_town(Town::new(name));
        }

        let (a, b, c) = (
            Town::from("Aberdeen"),
            Town::from("Bell"),
            Town::from("Crosby"),
        );
        network
            .add_road(&a, &b, Distance::from_miles(4), "Old Mill Rd")
            .unwrap();
        network
            .add_road(&b, &c, Distance::from_miles(2), "Route 9")
            .unwrap();
        network
            .add_road(&a, &c, Distance::from_miles(5), "Coast Hwy")
            .unwrap();

        network
    }

    #[test]
    fn shortest_path_tree_001() {
        let network = network();
        let origin = network.town("Aberdeen").unwrap();

        let tree = shortest_path_tree(&network, origin);

        assert_eq!(
            tree.distance_to(&Town::from("Aberdeen")),
            Some(Distance::ZERO)
        );
        assert_eq!(
            tree.distance_to(&Town::from("Bell")),
            Some(Distance::from_miles(4))
        );
        // the direct road beats Old Mill Rd + Route 9 by one mile
        assert_eq!(
            tree.distance_to(&Town::from("Crosby")),
            Some(Distance::from_miles(5))
        );
        assert_eq!(tree.distance_to(&Town::from("Davies")), None);
    }

    #[test]
    fn shortest_path_tree_002() {
        let network = network();
        let origin = network.town("Crosby").unwrap();

        let tree = shortest_path_tree(&network, origin);

        let route = tree.route_to(&Town::from("Aberdeen"));
        assert_eq!(
            route.iter().map(ToString::to_string).collect::<Vec<_>>(),
            ["Crosby via Coast Hwy to Aberdeen 5 mi"]
        );
    }

    #[test]
    fn shortest_path_tree_003() {
        let network = network();
        let origin = network.town("Bell").unwrap();

        let tree = shortest_path_tree(&network, origin);

        // the origin has no predecessor, so its route is empty
        assert!(tree.route_to(&Town::from("Bell")).is_empty());
        // unreachable towns have neither a distance nor a route
        assert!(tree.route_to(&Town::from("Davies")).is_empty());
    }

    #[test]
    fn shortest_path_tree_004() {
        let mut network = network();
        let (b, d) = (Town::from("Bell"), Town::from("Davies"));
        network
            .add_road(&b, &d, Distance::from_miles(1), "Quarry Ln")
            .unwrap();

        let origin = network.town("Aberdeen").unwrap();
        let tree = shortest_path_tree(&network, origin);

        assert_eq!(tree.distance_to(&d), Some(Distance::from_miles(5)));
        assert_eq!(
            tree.route_to(&d)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            [
                "Aberdeen via Old Mill Rd to Bell 4 mi",
                "Bell via Quarry Ln to Davies 1 mi",
            ]
        );
    }
}
