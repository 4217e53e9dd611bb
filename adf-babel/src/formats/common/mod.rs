//! Common utilities for block-based formats
//!
//! This module provides shared functionality for the writers, particularly
//! diagnostic formats like treeviz and tag.

use crate::ir::nodes::{ListMarker, Run, Script};
use std::collections::HashMap;

/// Style attributes of a run, in a fixed order. Unset styles are omitted.
pub fn run_styles(run: &Run) -> Vec<(&'static str, String)> {
    let mut styles = Vec::new();
    for (name, set) in [
        ("bold", run.bold),
        ("italic", run.italic),
        ("underline", run.underline),
        ("strike", run.strike),
        ("monospace", run.monospace),
    ] {
        if set {
            styles.push((name, "true".to_string()));
        }
    }
    match run.script {
        Script::None => {}
        Script::Sub => styles.push(("script", "sub".to_string())),
        Script::Super => styles.push(("script", "super".to_string())),
    }
    if let Some(color) = &run.color {
        styles.push(("color", color.clone()));
    }
    styles
}

/// Visible marker of a list line: the bullet glyph or `N.`.
pub fn marker_label(marker: ListMarker, bullet: &str) -> String {
    match marker {
        ListMarker::Bullet => bullet.to_string(),
        ListMarker::Number(n) => format!("{n}."),
    }
}

/// Read a boolean serializer parameter; absent means `false`.
pub fn bool_param(params: &HashMap<String, String>, key: &str) -> bool {
    params
        .get(key)
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false)
}
