//! Rendering of the generated Python modules.
//!
//! Output shape matches what the integration imports: one module per model
//! exposing a class with `homeassistant_features`, `robovac_features` and
//! `commands` attributes, plus the `__init__.py` index exposing the
//! `ROBOVAC_MODELS` lookup table.

use robovac_catalog::{CommandBinding, ModelDescriptor};

/// Marker line placed above pending command entries.
const PENDING_MARKER: &str = "# These commands need codes adding";

/// Render the Python module for one model.
pub fn render_model_module(descriptor: &ModelDescriptor) -> String {
    let homeassistant = descriptor
        .homeassistant_features
        .iter()
        .map(|feature| format!("VacuumEntityFeature.{feature}"))
        .collect::<Vec<_>>()
        .join("\n        | ");

    let robovac = descriptor
        .robovac_features
        .iter()
        .map(|feature| format!("RoboVacEntityFeature.{feature}"))
        .collect::<Vec<_>>()
        .join(" | ");

    let mut out = String::new();
    out.push_str("from homeassistant.components.vacuum import VacuumEntityFeature\n");
    out.push_str("from .base import RoboVacEntityFeature, RobovacCommand\n");
    out.push_str("\n\n");
    out.push_str(&format!("class {}:\n", descriptor.model));
    out.push_str("    homeassistant_features = (\n");
    out.push_str(&format!("        {homeassistant}\n"));
    out.push_str("    )\n");
    out.push_str(&format!("    robovac_features = {robovac}\n"));
    out.push_str("    commands = {\n");
    render_commands(&mut out, descriptor);
    out.push_str("    }\n");
    out
}

fn render_commands(out: &mut String, descriptor: &ModelDescriptor) {
    let mut marker_written = false;
    for entry in &descriptor.commands {
        match &entry.binding {
            CommandBinding::Assigned { code, values: None } => {
                out.push_str(&format!("        RobovacCommand.{}: {code},\n", entry.command));
            }
            CommandBinding::Assigned {
                code,
                values: Some(values),
            } => {
                out.push_str(&format!("        RobovacCommand.{}: {{\n", entry.command));
                out.push_str(&format!("            \"code\": {code},\n"));
                out.push_str(&format!("            \"values\": {},\n", string_list(values)));
                out.push_str("        },\n");
            }
            CommandBinding::Pending => {
                if !marker_written {
                    out.push_str(&format!("        {PENDING_MARKER}\n"));
                    marker_written = true;
                }
                out.push_str(&format!("        # RobovacCommand.{}: 0,\n", entry.command));
            }
        }
    }
}

/// Render the `__init__.py` index module over all descriptors.
pub fn render_index(descriptors: &[ModelDescriptor]) -> String {
    let mut out = String::new();
    for descriptor in descriptors {
        out.push_str(&format!("from .{0} import {0}\n", descriptor.model));
    }
    out.push_str("\n\nROBOVAC_MODELS = {\n");
    for descriptor in descriptors {
        out.push_str(&format!("    \"{0}\": {0},\n", descriptor.model));
    }
    out.push_str("}\n");
    out
}

/// Python list literal over string values.
fn string_list(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("\"{v}\"")).collect();
    format!("[{}]", quoted.join(", "))
}
