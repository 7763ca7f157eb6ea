//! Upstream URL construction

use chrono::NaiveDateTime;
use url::Url;

/// An upstream GTFS endpoint with its parameters filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Endpoint<'a> {
    /// `GET /stops?filter[date]=YYYY-MM-DD`
    Stops { at: NaiveDateTime },
    /// `GET /stops/{stop_id}/stoptrips?filter[date]=YYYY-MM-DD&filter[start_hour]=HH`
    StopTrips { stop_id: &'a str, at: NaiveDateTime },
}

impl Endpoint<'_> {
    /// Resolve against the API base URL, keeping any path the base already has
    pub(crate) fn url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            match self {
                Self::Stops { .. } => {
                    segments.push("stops");
                }
                Self::StopTrips { stop_id, .. } => {
                    segments.extend(["stops", *stop_id, "stoptrips"]);
                }
            }
        }
        url.set_query(Some(&self.query()));
        url
    }

    fn query(&self) -> String {
        match self {
            Self::Stops { at } => format!("filter[date]={}", at.format("%Y-%m-%d")),
            Self::StopTrips { at, .. } => format!(
                "filter[date]={}&filter[start_hour]={}",
                at.format("%Y-%m-%d"),
                at.format("%H")
            ),
        }
    }
}
