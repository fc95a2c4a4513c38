use feastfaster_core::{model::RankedStation, util::geo_utils};
use uom::si::f64::{Length, Time};

/// percent of state of charge consumed per kilometer, assuming the remaining
/// range is proportional to the remaining charge
pub fn depletion_rate(current_soc: f64, current_range: Length) -> f64 {
    current_soc / current_range.get::<uom::si::length::kilometer>()
}

/// state of charge on arrival after driving `distance_km`, rounded to a whole percent
pub fn soc_at_arrival(current_soc: f64, depletion_rate: f64, distance_km: f64) -> f64 {
    (current_soc - depletion_rate * distance_km).round()
}

/// whole driving minutes, as reported to clients
pub fn travel_time_minutes(duration: Time) -> u32 {
    duration.get::<uom::si::time::minute>().round() as u32
}

/// distance in kilometers rounded to 10 meters, as reported to clients
pub fn rounded_distance_km(distance: Length) -> f64 {
    geo_utils::round_to(distance.get::<uom::si::length::kilometer>(), 2)
}

/// final result order: nearest station first. the sort is stable, so stations at
/// equal distance keep their input order.
pub fn sort_by_distance(stations: &mut [RankedStation]) {
    stations.sort_by(|a, b| a.distance_km().total_cmp(&b.distance_km()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soc_at_arrival_example() {
        let rate = depletion_rate(50.0, Length::new::<uom::si::length::kilometer>(200.0));
        assert_eq!(rate, 0.25);
        assert_eq!(soc_at_arrival(50.0, rate, 100.0), 25.0);
        // 12.5 rounds half away from zero
        assert_eq!(soc_at_arrival(50.0, rate, 150.0), 13.0);
    }

    #[test]
    fn test_soc_non_increasing_in_distance() {
        let rate = depletion_rate(80.0, Length::new::<uom::si::length::kilometer>(320.0));
        let mut previous = f64::MAX;
        for step in 0..=400 {
            let distance = step as f64 * 0.75;
            let soc = soc_at_arrival(80.0, rate, distance);
            assert!(soc <= previous, "soc increased at {distance}km");
            previous = soc;
        }
    }

    #[test]
    fn test_rounding_helpers() {
        let seconds = |s: f64| Time::new::<uom::si::time::second>(s);
        assert_eq!(travel_time_minutes(seconds(89.0)), 1);
        assert_eq!(travel_time_minutes(seconds(91.0)), 2);
        assert_eq!(travel_time_minutes(seconds(1234.0)), 21);
        let meters = |m: f64| Length::new::<uom::si::length::meter>(m);
        assert_eq!(rounded_distance_km(meters(10126.0)), 10.13);
        assert_eq!(rounded_distance_km(meters(17678.9)), 17.68);
    }

    #[test]
    fn test_depletion_rate_is_per_kilometer() {
        let range = Length::new::<uom::si::length::meter>(200_000.0);
        assert_eq!(depletion_rate(50.0, range), 0.25);
    }
}
