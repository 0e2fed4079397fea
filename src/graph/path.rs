use std::fmt;

use crate::{Distance, Road, Town};

/// One hop of a route: the road taken from one town to the next.
/// Displays as `"<from> via <road> to <to> <distance> mi"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLeg {
    pub from: Town,
    pub to: Town,
    pub road: String,
    pub distance: Distance,
}

impl RouteLeg {
    pub(crate) fn new(from: &Town, road: &Road, to: &Town) -> Self {
        Self {
            from: from.clone(),
            to: to.clone(),
            road: road.name().to_owned(),
            distance: road.distance(),
        }
    }
}

impl fmt::Display for RouteLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} via {} to {} {} mi",
            self.from,
            self.road,
            self.to,
            self.distance.miles()
        )
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn route_leg_display() {
        let road = Road::new(
            Town::from("Aberdeen"),
            Town::from("Bell"),
            Distance::from_miles(4),
            "Old Mill Rd",
        );
        let leg = RouteLeg::new(&Town::from("Aberdeen"), &road, &Town::from("Bell"));

        assert_eq!(leg.to_string(), "Aberdeen via Old Mill Rd to Bell 4 mi");
    }
}
