//! Admin remote-control actions.

use std::fmt;

use clap::ValueEnum;
use tracing::info;

use crate::error::{DashError, Result};
use crate::fleet::FleetSnapshot;

/// Command an operator can send to a single trolley.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AdminAction {
    SendToCharging,
    RecallToBase,
    RemoteControl,
    UpdateFirmware,
}

impl fmt::Display for AdminAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AdminAction::SendToCharging => "Send to Charging",
            AdminAction::RecallToBase => "Recall to Base",
            AdminAction::RemoteControl => "Remote Control",
            AdminAction::UpdateFirmware => "Update Firmware",
        };
        f.write_str(s)
    }
}

/// Run `action` on the trolley with `trolley_id`.
///
/// Nothing is sent anywhere; the trolley only has to exist in the snapshot.
pub fn execute(snapshot: &FleetSnapshot, trolley_id: &str, action: AdminAction) -> Result<String> {
    let trolley = snapshot
        .find(trolley_id)
        .ok_or_else(|| DashError::UnknownTrolley(trolley_id.to_string()))?;

    info!(
        "{} on {} ({}, battery {}%)",
        action, trolley.id, trolley.status, trolley.battery
    );
    Ok(format!("Action '{}' executed on {}", action, trolley.id))
}
