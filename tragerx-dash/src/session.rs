//! User session state machine.
//!
//! ```text
//! Disconnected ──connect──► ConnectedNoTrolley ──request + arrive──► ConnectedWithTrolley
//!                                  ▲                                        │
//!                                  └──────────────── return ────────────────┘
//! ```
//!
//! Requesting a trolley hands back a [`TrolleyDispatch`], a progress
//! iterator. The caller decides how fast to drive it and passes the
//! finished dispatch to [`Session::arrive`].

use std::fmt;

use clap::ValueEnum;
use tracing::{debug, info};

use crate::error::{DashError, Result};
use crate::fleet::Location;

/// Trolley every request is assigned to.
pub const ASSIGNED_TROLLEY: &str = "TX-007";
/// Quoted arrival time in minutes.
pub const ETA_MINUTES: u32 = 2;
/// Battery shown on the my-trolley card.
pub const CARD_BATTERY: u8 = 87;
/// Largest number of bags a single trolley takes.
pub const MAX_BAGS: u32 = 5;

/// Connection state of a user session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Disconnected,
    ConnectedNoTrolley,
    ConnectedWithTrolley,
}

impl SessionState {
    pub fn is_connected(self) -> bool {
        self != SessionState::Disconnected
    }
}

/// Tabs of the user view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    RequestTrolley,
    MyTrolley,
    Help,
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tab::RequestTrolley => "Request Trolley",
            Tab::MyTrolley => "My Trolley",
            Tab::Help => "Help",
        };
        f.write_str(s)
    }
}

/// Commands from the my-trolley controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TrolleyCommand {
    Follow,
    Stop,
    Return,
}

/// What the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrolleyRequest {
    pub trolley_id: String,
    pub location: Location,
    pub bags: u32,
    pub eta_minutes: u32,
}

/// Progress of a trolley on its way to the user, 0 to 100 percent.
#[derive(Clone, Debug)]
pub struct TrolleyDispatch {
    request: TrolleyRequest,
    next: u16,
    last: Option<u8>,
}

impl TrolleyDispatch {
    fn new(request: TrolleyRequest) -> Self {
        Self {
            request,
            next: 0,
            last: None,
        }
    }

    pub fn request(&self) -> &TrolleyRequest {
        &self.request
    }

    /// Last progress value yielded, if any.
    pub fn progress(&self) -> Option<u8> {
        self.last
    }

    pub fn is_complete(&self) -> bool {
        self.last == Some(100)
    }
}

impl Iterator for TrolleyDispatch {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.next > 100 {
            return None;
        }
        let p = self.next as u8;
        self.next += 1;
        self.last = Some(p);
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = 101usize.saturating_sub(self.next as usize);
        (n, Some(n))
    }
}

impl ExactSizeIterator for TrolleyDispatch {}

/// The my-trolley card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrolleyCard {
    pub id: String,
    pub battery: u8,
    pub status: String,
}

/// One user's connection to the fleet.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    user_id: Option<String>,
    trolley: Option<TrolleyCard>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Attach the session to a user account.
    pub fn connect(&mut self, user_id: &str) -> Result<String> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(DashError::InvalidUserId);
        }

        self.user_id = Some(user_id.to_string());
        if self.state == SessionState::Disconnected {
            self.state = SessionState::ConnectedNoTrolley;
        }
        info!("User {} connected", user_id);
        Ok(format!("Connected to user account: {}", user_id))
    }

    /// Ask for a trolley to be sent to `location`.
    pub fn request_trolley(&self, location: Location, bags: u32) -> Result<TrolleyDispatch> {
        if !self.state.is_connected() {
            return Err(DashError::NotConnected);
        }
        if !(1..=MAX_BAGS).contains(&bags) {
            return Err(DashError::InvalidBagCount(bags));
        }

        debug!("Dispatching {} to {} for {} bag(s)", ASSIGNED_TROLLEY, location, bags);
        Ok(TrolleyDispatch::new(TrolleyRequest {
            trolley_id: ASSIGNED_TROLLEY.to_string(),
            location,
            bags,
            eta_minutes: ETA_MINUTES,
        }))
    }

    /// Hand over a finished dispatch; the user now has a trolley.
    pub fn arrive(&mut self, dispatch: &TrolleyDispatch) -> Result<&TrolleyCard> {
        if !self.state.is_connected() {
            return Err(DashError::NotConnected);
        }
        if !dispatch.is_complete() {
            return Err(DashError::DispatchInProgress {
                trolley_id: dispatch.request.trolley_id.clone(),
                progress: dispatch.progress().unwrap_or(0),
            });
        }

        self.state = SessionState::ConnectedWithTrolley;
        info!("{} arrived", dispatch.request.trolley_id);
        Ok(self.trolley.insert(TrolleyCard {
            id: dispatch.request.trolley_id.clone(),
            battery: CARD_BATTERY,
            status: "Following".to_string(),
        }))
    }

    /// Current trolley, if the user has one.
    pub fn my_trolley(&self) -> Result<&TrolleyCard> {
        match (&self.state, &self.trolley) {
            (SessionState::ConnectedWithTrolley, Some(card)) => Ok(card),
            (SessionState::Disconnected, _) => Err(DashError::NotConnected),
            _ => Err(DashError::NoActiveTrolley),
        }
    }

    /// Send a command to the user's trolley.
    pub fn control(&mut self, command: TrolleyCommand) -> Result<String> {
        if self.state != SessionState::ConnectedWithTrolley {
            return Err(DashError::NoActiveTrolley);
        }

        let msg = match command {
            TrolleyCommand::Follow => {
                self.set_trolley_status("Following");
                "Trolley is now following you"
            }
            TrolleyCommand::Stop => {
                self.set_trolley_status("Stopped");
                "Trolley has stopped"
            }
            TrolleyCommand::Return => {
                self.trolley = None;
                self.state = SessionState::ConnectedNoTrolley;
                "Trolley will return to the nearest collection point"
            }
        };
        debug!("{:?}: {}", command, msg);
        Ok(msg.to_string())
    }

    fn set_trolley_status(&mut self, status: &str) {
        if let Some(card) = self.trolley.as_mut() {
            card.status = status.to_string();
        }
    }

    /// Tabs shown to the user. None until connected.
    pub fn visible_tabs(&self) -> &'static [Tab] {
        if self.state.is_connected() {
            &[Tab::RequestTrolley, Tab::MyTrolley, Tab::Help]
        } else {
            &[]
        }
    }

    pub fn request_assistance(&self) -> Result<String> {
        if !self.state.is_connected() {
            return Err(DashError::NotConnected);
        }
        info!(
            "Assistance requested by {}",
            self.user_id.as_deref().unwrap_or("unknown")
        );
        Ok("Support staff has been notified. Someone will assist you shortly.".to_string())
    }
}
