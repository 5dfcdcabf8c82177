use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use yew::{Html, ToHtml, html};

/// UTC instant serialized as an RFC 3339 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Current instant.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Milliseconds since the Unix epoch.
    pub fn millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Hour and minute in the viewer's local time zone, e.g. `14:05`.
    pub fn clock_time(&self) -> String {
        self.0.with_timezone(&Local).format("%H:%M").to_string()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl ToHtml for Timestamp {
    fn to_html(&self) -> Html {
        html! { self.clock_time() }
    }
}
