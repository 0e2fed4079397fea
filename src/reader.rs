use std::io::BufRead;

use crate::{Distance, RouteFileError};

/// One road record of a route file: `Name,Distance;TownA;TownB`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pub road: String,
    pub distance: Distance,
    pub towns: (String, String),
}

/// Reads road records from a route file, one record per line.
/// Blank lines are skipped; surrounding whitespace is ignored.
pub fn read_route_records(source: impl BufRead) -> Result<Vec<RouteRecord>, RouteFileError> {
    let mut records = vec![];

    for (index, line) in source.lines().enumerate() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }

        records.push(parse_route_record(record, index + 1)?);
    }

    Ok(records)
}

fn parse_route_record(record: &str, line: usize) -> Result<RouteRecord, RouteFileError> {
    let malformed = || RouteFileError::MalformedRecord {
        line,
        record: record.to_owned(),
    };

    let mut fields = record.split(';');
    let road = fields.next().ok_or_else(malformed)?;
    let town_a = fields.next().ok_or_else(malformed)?.trim();
    let town_b = fields.next().ok_or_else(malformed)?.trim();
    if fields.next().is_some() {
        return Err(malformed());
    }

    let (name, distance) = road.split_once(',').ok_or_else(malformed)?;
    let (name, distance) = (name.trim(), distance.trim());
    if name.is_empty() || town_a.is_empty() || town_b.is_empty() {
        return Err(malformed());
    }

    let distance = distance
        .parse()
        .map(Distance::from_miles)
        .map_err(|_| RouteFileError::InvalidDistance {
            line,
            value: distance.to_owned(),
        })?;

    Ok(RouteRecord {
        road: name.to_owned(),
        distance,
        towns: (town_a.to_owned(), town_b.to_owned()),
    })
}
