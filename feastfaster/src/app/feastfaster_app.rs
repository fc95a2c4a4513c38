use super::{build_pipeline, parse_point, AppError, Requirements};
use crate::config::FeastFasterConfig;
use clap::{Parser, Subcommand};
use feastfaster_core::model::{ReservationId, StationId};
use geo::Point;
use serde_json::{json, Value};

/// Command line tool for finding EV charging stops with matching restaurants along a route
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct FeastFasterApp {
    /// TOML or JSON configuration file. FEASTFASTER__* environment variables override it.
    #[arg(long, global = true)]
    pub config: Option<String>,
    #[command(subcommand)]
    pub op: FeastFasterOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum FeastFasterOperation {
    /// stations along the route to the destination, nearest first
    FindStations {
        /// current location as lon,lat
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        origin: Point<f64>,
        /// destination as lon,lat
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        destination: Point<f64>,
        /// vehicle model, such as "Nissan Leaf"
        #[arg(long)]
        ev_model: String,
        /// state of charge now, percent
        #[arg(long)]
        current_soc: f64,
        /// kilometers of range left at the current state of charge
        #[arg(long)]
        current_car_range: f64,
        /// state of charge wanted after charging, percent
        #[arg(long)]
        desired_soc: f64,
        /// charger plug, such as "CCS"
        #[arg(long)]
        connector_type: String,
        /// cuisine to look for. repeat for several.
        #[arg(long = "cuisine")]
        cuisines: Vec<String>,
    },
    /// waypoints every `interval` minutes along a route
    SampleRoute {
        /// starting location as lon,lat
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        origin: Point<f64>,
        /// destination as lon,lat
        #[arg(
            long,
            value_parser = parse_point,
            allow_hyphen_values = true,
            conflicts_with = "station_id"
        )]
        destination: Option<Point<f64>>,
        /// route to this station instead of a coordinate
        #[arg(long)]
        station_id: Option<i64>,
        /// minutes between waypoints
        #[arg(long, allow_hyphen_values = true)]
        interval: i64,
    },
    /// driving distance and time to a target
    Eta {
        /// starting location as lon,lat
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        origin: Point<f64>,
        /// target as lon,lat
        #[arg(
            long,
            value_parser = parse_point,
            allow_hyphen_values = true,
            conflicts_with = "reservation_id"
        )]
        target: Option<Point<f64>>,
        /// estimate the arrival at the station holding this reservation
        #[arg(long)]
        reservation_id: Option<i64>,
    },
    /// the search corridor between two points as WKT
    Corridor {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        origin: Point<f64>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        destination: Point<f64>,
    },
}

impl FeastFasterApp {
    /// loads configuration, builds the pipeline and runs the operation
    pub fn run(self) -> Result<Value, AppError> {
        let config = FeastFasterConfig::load(self.config.as_deref())?;
        self.op.run(&config)
    }
}

impl FeastFasterOperation {
    /// the collaborators this operation reads. coordinate-only operations
    /// need nothing beyond routing.
    pub fn requirements(&self) -> Requirements {
        match self {
            FeastFasterOperation::FindStations { .. } => Requirements {
                stations: true,
                scoring: true,
            },
            FeastFasterOperation::SampleRoute { destination, .. } => Requirements {
                stations: destination.is_none(),
                scoring: false,
            },
            FeastFasterOperation::Eta { target, .. } => Requirements {
                stations: target.is_none(),
                scoring: false,
            },
            FeastFasterOperation::Corridor { .. } => Requirements::default(),
        }
    }

    pub fn run(self, config: &FeastFasterConfig) -> Result<Value, AppError> {
        let pipeline = build_pipeline(config, self.requirements())?;
        match self {
            FeastFasterOperation::FindStations {
                origin,
                destination,
                ev_model,
                current_soc,
                current_car_range,
                desired_soc,
                connector_type,
                cuisines,
            } => {
                let request = crate::pipeline::StationRequest {
                    current_location: origin,
                    destination,
                    ev_model,
                    current_car_range,
                    current_soc,
                    desired_soc,
                    connector_type,
                    cuisines: cuisines.into_iter().collect(),
                };
                let stations = pipeline.find_stations(&request)?;
                Ok(serde_json::to_value(stations)?)
            }
            FeastFasterOperation::SampleRoute {
                origin,
                destination,
                station_id,
                interval,
            } => {
                let waypoints = match (destination, station_id) {
                    (Some(d), _) => pipeline.sample_route(origin, d, interval)?,
                    (None, Some(id)) => {
                        pipeline.sample_route_to_station(origin, StationId(id), interval)?
                    }
                    (None, None) => {
                        return Err(AppError::MissingArgument(String::from(
                            "sample-route needs --destination or --station-id",
                        )))
                    }
                };
                Ok(serde_json::to_value(waypoints)?)
            }
            FeastFasterOperation::Eta {
                origin,
                target,
                reservation_id,
            } => {
                let eta = match (target, reservation_id) {
                    (Some(t), _) => pipeline.calculate_eta(origin, t)?,
                    (None, Some(id)) => pipeline.eta_for_reservation(origin, ReservationId(id))?,
                    (None, None) => {
                        return Err(AppError::MissingArgument(String::from(
                            "eta needs --target or --reservation-id",
                        )))
                    }
                };
                Ok(serde_json::to_value(eta)?)
            }
            FeastFasterOperation::Corridor {
                origin,
                destination,
            } => {
                let corridor = pipeline.corridor(origin, destination)?;
                Ok(json!({ "corridor": corridor.to_wkt_string() }))
            }
        }
    }
}
