use std::collections::BTreeMap;
use std::io::Read;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use fs_err::File;
use serde::Deserialize;

use crate::{LonLat, Station, StationId, Trip};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Deserialize)]
struct StationRecord {
    id: String,
    lon: f64,
    lat: f64,
}

#[derive(Deserialize)]
struct TripRecord {
    start_station_id: String,
    end_station_id: String,
    started_at: String,
    ended_at: String,
}

pub fn load_stations(path: &str) -> Result<Vec<Station>> {
    let stations = parse_stations(File::open(path)?)
        .with_context(|| format!("parsing stations from {}", path))?;
    info!("Loaded {} stations from {}", stations.len(), path);
    Ok(stations)
}

pub fn load_trips(path: &str) -> Result<Vec<Trip>> {
    let trips = parse_trips(File::open(path)?)
        .with_context(|| format!("parsing trips from {}", path))?;
    info!("Loaded {} trips from {}", trips.len(), path);
    Ok(trips)
}

fn parse_stations<R: Read>(reader: R) -> Result<Vec<Station>> {
    let records: Vec<StationRecord> = serde_json::from_reader(reader)?;

    let mut by_id: BTreeMap<StationId, LonLat> = BTreeMap::new();
    for rec in records {
        let id = StationId::new(rec.id);
        if by_id
            .insert(id.clone(), LonLat::new(rec.lon, rec.lat))
            .is_some()
        {
            warn!("Station {} appears twice; keeping the last record", id);
        }
    }

    Ok(by_id
        .into_iter()
        .map(|(id, pos)| Station { id, pos })
        .collect())
}

fn parse_trips<R: Read>(reader: R) -> Result<Vec<Trip>> {
    let mut trips = Vec::new();
    for (idx, rec) in csv::Reader::from_reader(reader).deserialize().enumerate() {
        // Header row doesn't count; humans opening the file see 1-based rows.
        let rec: TripRecord = rec.with_context(|| format!("trip row {}", idx + 2))?;
        let started_at = NaiveDateTime::parse_from_str(&rec.started_at, TIMESTAMP_FORMAT)
            .with_context(|| format!("trip row {} started_at", idx + 2))?;
        let ended_at = NaiveDateTime::parse_from_str(&rec.ended_at, TIMESTAMP_FORMAT)
            .with_context(|| format!("trip row {} ended_at", idx + 2))?;
        trips.push(Trip {
            start_station: StationId::new(rec.start_station_id),
            end_station: StationId::new(rec.end_station_id),
            started_at,
            ended_at,
        });
    }
    Ok(trips)
}
