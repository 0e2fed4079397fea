use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;

/// Distance in whole miles.
/// `MAX` doubles as the "unreached" sentinel of the shortest-path search,
/// therefore addition saturates instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Distance(u64);

impl Distance {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u64::MAX);

    pub const fn from_miles(miles: u64) -> Self {
        Self(miles)
    }

    pub const fn miles(&self) -> u64 {
        self.0
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

/// A named town, the vertex of a road network.
/// Two towns are the same town if their names match ignoring ASCII case;
/// hashing and ordering agree with that equality. The stored capitalization
/// is kept for display.
#[derive(Debug, Clone)]
pub struct Town {
    name: String,
}

impl Town {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Town {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq for Town {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl Eq for Town {}

impl Hash for Town {
    // must agree with the case-insensitive PartialEq
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.name.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

impl Ord for Town {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .bytes()
            .map(|b| b.to_ascii_lowercase())
            .cmp(other.name.bytes().map(|b| b.to_ascii_lowercase()))
    }
}

impl PartialOrd for Town {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A named road between two towns, the undirected edge of a road network.
/// Equality and hashing consider only the unordered endpoint pair: two roads
/// are equal when they connect the same two towns, whatever their names and
/// distances.
#[derive(Debug, Clone)]
pub struct Road {
    a: Town,
    b: Town,
    distance: Distance,
    name: String,
}

impl Road {
    pub fn new(a: Town, b: Town, distance: Distance, name: impl Into<String>) -> Self {
        Self {
            a,
            b,
            distance,
            name: name.into(),
        }
    }

    /// A road with the default distance of one mile.
    pub fn unweighted(a: Town, b: Town, name: impl Into<String>) -> Self {
        Self::new(a, b, Distance::from_miles(1), name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn distance(&self) -> Distance {
        self.distance
    }

    pub const fn endpoints(&self) -> (&Town, &Town) {
        (&self.a, &self.b)
    }

    /// Returns true if the town is either endpoint of this road.
    pub fn contains(&self, town: &Town) -> bool {
        self.a == *town || self.b == *town
    }

    /// Returns true if the road's endpoints are `x` and `y` in some order.
    pub fn connects(&self, x: &Town, y: &Town) -> bool {
        (self.a == *x && self.b == *y) || (self.a == *y && self.b == *x)
    }

    /// Gets the endpoint on the other side of the road from the given town,
    /// or None if the town is not an endpoint.
    pub fn opposite(&self, town: &Town) -> Option<&Town> {
        if self.a == *town {
            Some(&self.b)
        } else if self.b == *town {
            Some(&self.a)
        } else {
            None
        }
    }
}

impl PartialEq for Road {
    fn eq(&self, other: &Self) -> bool {
        self.connects(&other.a, &other.b)
    }
}

impl Eq for Road {}

impl Hash for Road {
    // endpoints hashed in a canonical order so that hashing is symmetric,
    // matching the unordered-pair PartialEq
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (first, second) = if self.a <= self.b {
            (&self.a, &self.b)
        } else {
            (&self.b, &self.a)
        };
        first.hash(state);
        second.hash(state);
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {} via {}", self.a, self.b, self.name)
    }
}
