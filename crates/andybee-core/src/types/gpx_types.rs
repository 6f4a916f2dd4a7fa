//! GPX transfer payloads returned by the import and export dialogs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Payload confirmed by the GPX import dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpxImportRequest {
    /// GPX file to read waypoints and caches from
    pub path: PathBuf,
}

impl GpxImportRequest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Payload confirmed by the GPX export dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpxExportRequest {
    /// Name of the file offered for download
    pub file_name: String,
    /// Catalog ids of the caches to export, in output order
    pub cache_ids: Vec<u64>,
    /// Most recent logs written per cache; zero omits the logs element
    pub max_logs: u32,
    /// Also emit the additional (non-cache) waypoints of each cache
    pub waypoints: bool,
}

impl GpxExportRequest {
    pub fn new(file_name: impl Into<String>, cache_ids: Vec<u64>) -> Self {
        Self {
            file_name: file_name.into(),
            cache_ids,
            max_logs: 0,
            waypoints: false,
        }
    }

    pub fn with_max_logs(mut self, max_logs: u32) -> Self {
        self.max_logs = max_logs;
        self
    }

    pub fn with_waypoints(mut self, waypoints: bool) -> Self {
        self.waypoints = waypoints;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_request_defaults() {
        let req = GpxExportRequest::new("caches.gpx", vec![3, 1, 2]);
        assert_eq!(req.max_logs, 0);
        assert!(!req.waypoints);
        assert_eq!(req.cache_ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_export_request_camel_case() {
        let req = GpxExportRequest::new("out.gpx", vec![7])
            .with_max_logs(5)
            .with_waypoints(true);
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["fileName"], "out.gpx");
        assert_eq!(value["maxLogs"], 5);
        assert_eq!(value["cacheIds"][0], 7);
        assert_eq!(value["waypoints"], true);
    }
}
