//! Real New York City locations for realistic test fixtures.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Depots
// ============================================================================

pub const CITY_HALL: Location = Location::new("City Hall, Manhattan", 40.7127, -74.0059);
pub const QUEENS_YARD: Location = Location::new("DOT Yard, Maspeth", 40.7233, -73.9125);

// ============================================================================
// Midtown: three reports on one block of 5th Ave, plus nearby spots
// ============================================================================

pub const MIDTOWN: &[Location] = &[
    Location::new("5th Ave & 42nd St", 40.7589, -73.9851),
    Location::new("5th Ave & 43rd St", 40.7591, -73.9849),
    Location::new("5th Ave & 41st St", 40.7587, -73.9853),
    Location::new("Times Square", 40.7580, -73.9855),
    Location::new("Central Park South", 40.7614, -73.9776),
    Location::new("Park Ave & 34th St", 40.7489, -73.9680),
];

// ============================================================================
// Outer boroughs
// ============================================================================

pub const BROOKLYN: &[Location] = &[
    Location::new("Bedford Ave", 40.6782, -73.9442),
    Location::new("Bedford Ave & N 7th", 40.6785, -73.9440),
];

pub const QUEENS: &[Location] = &[
    Location::new("Queens Blvd", 40.7306, -73.9352),
    Location::new("Main St, Flushing", 40.7282, -73.7949),
];

pub const BRONX: Location = Location::new("Bronx", 40.8448, -73.8648);

pub const DOWNTOWN: Location = Location::new("Broadway, Manhattan", 40.7128, -74.0060);
