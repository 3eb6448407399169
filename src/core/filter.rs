use crate::domain::model::Flight;

/// Stable filter: keeps input order, matches destination case-insensitively,
/// price bounds are inclusive. An inverted range simply matches nothing.
pub fn find_flights(
    flights: &[Flight],
    destination: &str,
    min_price: i32,
    max_price: i32,
) -> Vec<Flight> {
    let needle = destination.to_lowercase();

    flights
        .iter()
        .filter(|flight| {
            flight.destination.to_lowercase() == needle
                && flight.price >= min_price
                && flight.price <= max_price
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Flight> {
        vec![
            Flight::new("A", "Paris", 300),
            Flight::new("B", "Paris", 700),
            Flight::new("C", "London", 300),
        ]
    }

    #[test]
    fn test_filter_by_destination_and_range() {
        let matched = find_flights(&sample(), "paris", 300, 500);
        assert_eq!(matched, vec![Flight::new("A", "Paris", 300)]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let flights = sample();
        assert_eq!(find_flights(&flights, "PARIS", 0, 1000).len(), 2);
        assert_eq!(find_flights(&flights, "Paris", 0, 1000).len(), 2);
        assert_eq!(find_flights(&flights, "pArIs", 0, 1000).len(), 2);
    }

    #[test]
    fn test_filter_preserves_order() {
        let flights = vec![
            Flight::new("C", "Paris", 300),
            Flight::new("A", "Paris", 100),
            Flight::new("B", "Paris", 200),
        ];

        let matched = find_flights(&flights, "Paris", 0, 1000);
        let origins: Vec<&str> = matched.iter().map(|f| f.origin.as_str()).collect();
        assert_eq!(origins, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let flights = sample();
        let matched = find_flights(&flights, "Paris", 300, 700);
        assert_eq!(matched.len(), 2);

        let matched = find_flights(&flights, "Paris", 301, 699);
        assert!(matched.is_empty());
    }

    #[test]
    fn test_filter_inverted_range_matches_nothing() {
        let matched = find_flights(&sample(), "Paris", 100, 50);
        assert!(matched.is_empty());
    }

    #[test]
    fn test_filter_empty_destination_matches_nothing() {
        let matched = find_flights(&sample(), "", 0, 1000);
        assert!(matched.is_empty());
    }
}
