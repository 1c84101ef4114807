//! Mock fleet data.
//!
//! The admin view never talks to real trolleys. It asks a [`FleetProvider`]
//! for a snapshot; [`MockFleet`] fills one with random values drawn from a
//! [`RandomSource`].

use std::fmt;

use clap::ValueEnum;
use tragerx_map::RandomSource;

/// Fixed notification feed shown on the admin view.
pub const NOTIFICATIONS: [&str; 4] = [
    "TragerX TX-005 battery low, routing to charging station",
    "Maintenance completed for TX-012",
    "High congestion detected in Terminal B",
    "TX-003 stuck at location [45,32], requires assistance",
];

/// Operating status of a trolley.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrolleyStatus {
    Active,
    Idle,
    Charging,
    Maintenance,
}

impl TrolleyStatus {
    pub const ALL: [TrolleyStatus; 4] = [
        TrolleyStatus::Active,
        TrolleyStatus::Idle,
        TrolleyStatus::Charging,
        TrolleyStatus::Maintenance,
    ];
}

impl fmt::Display for TrolleyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrolleyStatus::Active => "Active",
            TrolleyStatus::Idle => "Idle",
            TrolleyStatus::Charging => "Charging",
            TrolleyStatus::Maintenance => "Maintenance",
        };
        f.write_str(s)
    }
}

/// Places in the airport/store where trolleys gather.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Location {
    TerminalA,
    TerminalB,
    TerminalC,
    BaggageClaim,
    MainEntrance,
}

impl Location {
    pub const ALL: [Location; 5] = [
        Location::TerminalA,
        Location::TerminalB,
        Location::TerminalC,
        Location::BaggageClaim,
        Location::MainEntrance,
    ];
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Location::TerminalA => "Terminal A",
            Location::TerminalB => "Terminal B",
            Location::TerminalC => "Terminal C",
            Location::BaggageClaim => "Baggage Claim",
            Location::MainEntrance => "Main Entrance",
        };
        f.write_str(s)
    }
}

/// `TX-001` style identifier for the n-th trolley (1-based).
pub fn trolley_id(n: usize) -> String {
    format!("TX-{:03}", n)
}

/// One row of the fleet management table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trolley {
    pub id: String,
    pub status: TrolleyStatus,
    /// Battery percentage
    pub battery: u8,
    pub location: Location,
    /// Local time of last activity, `HH:MM:SS`
    pub last_active: String,
}

/// Headline trolley counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FleetMetrics {
    pub active: u32,
    pub idle: u32,
    pub charging: u32,
    pub maintenance: u32,
}

/// Battery histogram bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatteryLevel {
    Critical,
    Low,
    Medium,
    High,
}

impl BatteryLevel {
    pub const ALL: [BatteryLevel; 4] = [
        BatteryLevel::Critical,
        BatteryLevel::Low,
        BatteryLevel::Medium,
        BatteryLevel::High,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BatteryLevel::Critical => "Critical (<20%)",
            BatteryLevel::Low => "Low (20-50%)",
            BatteryLevel::Medium => "Medium (50-80%)",
            BatteryLevel::High => "High (>80%)",
        }
    }

    /// Inclusive range of mock trolley counts for this bucket.
    fn mock_range(self) -> (i32, i32) {
        match self {
            BatteryLevel::Critical => (0, 3),
            BatteryLevel::Low => (2, 8),
            BatteryLevel::Medium => (5, 15),
            BatteryLevel::High => (10, 20),
        }
    }
}

/// Everything the admin view shows about the fleet at one instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FleetSnapshot {
    pub metrics: FleetMetrics,
    /// Trolley count per battery level, in [`BatteryLevel::ALL`] order
    pub battery: Vec<(BatteryLevel, u32)>,
    pub notifications: Vec<String>,
    pub trolleys: Vec<Trolley>,
}

impl FleetSnapshot {
    /// Look up a trolley by id.
    pub fn find(&self, id: &str) -> Option<&Trolley> {
        self.trolleys.iter().find(|t| t.id == id)
    }
}

/// Source of fleet snapshots.
pub trait FleetProvider {
    fn snapshot(&mut self) -> FleetSnapshot;
}

/// Random fleet data.
pub struct MockFleet<R> {
    rng: R,
    num_trolleys: usize,
}

impl<R: RandomSource> MockFleet<R> {
    pub fn new(rng: R, num_trolleys: usize) -> Self {
        Self { rng, num_trolleys }
    }

    fn range(&mut self, low: i32, high: i32) -> u32 {
        self.rng.range_inclusive(low, high).max(0) as u32
    }

    fn trolley(&mut self, n: usize, last_active: &str) -> Trolley {
        let battery = self.range(20, 100) as u8;
        let status = TrolleyStatus::ALL[self.rng.index(TrolleyStatus::ALL.len())];
        let location = Location::ALL[self.rng.index(Location::ALL.len())];

        Trolley {
            id: trolley_id(n),
            status,
            battery,
            location,
            last_active: last_active.to_string(),
        }
    }
}

impl<R: RandomSource> FleetProvider for MockFleet<R> {
    fn snapshot(&mut self) -> FleetSnapshot {
        let metrics = FleetMetrics {
            active: self.range(15, 30),
            idle: self.range(5, 15),
            charging: self.range(3, 10),
            maintenance: self.range(0, 5),
        };

        let battery = BatteryLevel::ALL
            .iter()
            .map(|&level| {
                let (low, high) = level.mock_range();
                (level, self.range(low, high))
            })
            .collect();

        let now = chrono::Local::now().format("%H:%M:%S").to_string();
        let trolleys = (1..=self.num_trolleys)
            .map(|n| self.trolley(n, &now))
            .collect();

        FleetSnapshot {
            metrics,
            battery,
            notifications: NOTIFICATIONS.iter().map(|s| s.to_string()).collect(),
            trolleys,
        }
    }
}
