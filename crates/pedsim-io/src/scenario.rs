//! Scenario XML loader.
//!
//! Deserializes a scenario document — a flat list of `<waypoint>` elements
//! and `<agent>` elements, each carrying an ordered list of `<addWaypoint>`
//! references — into a `Vec<Agent>` and a [`WaypointCatalogue`].
//!
//! Waypoint references are interned by id while parsing, then resolved into
//! typed [`WaypointId`]s before agents and waypoints are handed back.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use pedsim_agent::{Agent, Waypoint, WaypointCatalogue};
use pedsim_core::WaypointId;

use crate::error::{ScenarioError, ScenarioResult};

#[derive(Deserialize)]
struct ScenarioDocument {
    #[serde(rename = "waypoint", default)]
    waypoints: Vec<WaypointRecord>,
    #[serde(rename = "agent", default)]
    agents: Vec<AgentRecord>,
}

#[derive(Deserialize)]
struct WaypointRecord {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@x")]
    x: i32,
    #[serde(rename = "@y")]
    y: i32,
    #[serde(rename = "@r")]
    r: i32,
}

#[derive(Deserialize)]
struct AgentRecord {
    #[serde(rename = "@x")]
    x: i32,
    #[serde(rename = "@y")]
    y: i32,
    #[serde(rename = "addWaypoint", default)]
    waypoints: Vec<WaypointRef>,
}

#[derive(Deserialize)]
struct WaypointRef {
    #[serde(rename = "@id")]
    id: String,
}

/// Load a scenario from `path`.
///
/// Rejects (as [`ScenarioError`]) a document with no agents, or one where an
/// agent references a waypoint id absent from the `<waypoint>` list.
pub fn load_scenario(path: &Path) -> ScenarioResult<(Vec<Agent>, WaypointCatalogue)> {
    let xml = std::fs::read_to_string(path)?;
    let document: ScenarioDocument = quick_xml::de::from_str(&xml)?;

    if document.agents.is_empty() {
        return Err(ScenarioError::NoAgents);
    }

    let mut ids: FxHashMap<String, WaypointId> =
        FxHashMap::with_capacity_and_hasher(document.waypoints.len(), Default::default());
    let mut waypoints = Vec::with_capacity(document.waypoints.len());
    for (index, record) in document.waypoints.into_iter().enumerate() {
        let id = WaypointId(index as u32);
        ids.insert(record.id.clone(), id);
        waypoints.push(Waypoint::new(id, record.id, record.x, record.y, record.r));
    }

    let mut agents = Vec::with_capacity(document.agents.len());
    for record in document.agents {
        let mut agent = Agent::new(record.x, record.y);
        for waypoint_ref in record.waypoints {
            let id = ids
                .get(&waypoint_ref.id)
                .copied()
                .ok_or(ScenarioError::DanglingWaypointReference(waypoint_ref.id))?;
            agent.add_waypoint(id);
        }
        agents.push(agent);
    }

    Ok((agents, WaypointCatalogue::new(waypoints)))
}
