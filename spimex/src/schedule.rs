//! Scheduler for the daily cache clear.
//!
//! New trading results are published once per day. Clearing the response
//! cache shortly afterwards bounds how long a stale answer can be served,
//! independently of the per-entry expiry.

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, Time, UtcOffset, macros::time};
use tracing::{Instrument as _, Level, event, span};

/// When to clear the response cache each day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheClearSchedule {
    /// A UTC time of day as `HH:MM` (if omitted, 14:11; if empty, never)
    #[serde(default = "default_at", with = "hh_mm")]
    pub at: Option<Time>,
}

fn default_at() -> Option<Time> {
    Some(time!(14:11))
}

impl Default for CacheClearSchedule {
    fn default() -> Self {
        Self { at: default_at() }
    }
}

impl CacheClearSchedule {
    /// The first scheduled instant strictly after `now`, in UTC.
    pub fn next_after(&self, now: OffsetDateTime) -> Option<OffsetDateTime> {
        let at = self.at?;
        let today = now.to_offset(UtcOffset::UTC).replace_time(at);
        Some(if today > now {
            today
        } else {
            today + time::Duration::DAY
        })
    }

    /// Execute `f` once a day at the configured time.
    ///
    /// The wait before each run is recomputed from the wall clock, so a
    /// suspended host or a clock adjustment delays at most one run.
    ///
    /// # Returns
    ///
    /// * `Ok(())` immediately if scheduling is disabled
    /// * `Err(E)` as soon as `f` fails; otherwise never returns
    pub async fn schedule<T, E>(
        &self,
        f: impl AsyncFn(OffsetDateTime) -> Result<T, E>,
    ) -> Result<(), E> {
        let mut from = OffsetDateTime::now_utc();

        while let Some(next) = self.next_after(from) {
            let now = OffsetDateTime::now_utc();
            if next > now {
                tokio::time::sleep((next - now).unsigned_abs()).await;
            }

            let span = span!(Level::INFO, "clearing response cache");
            async {
                event!(Level::INFO, scheduled_at = %next);
                f(next).await
            }
            .instrument(span)
            .await?;

            // never fire twice for the same slot, even if the timer woke early
            from = next.max(OffsetDateTime::now_utc());
        }

        Ok(())
    }
}

/// (De)serialize an optional time of day as `HH:MM`.
mod hh_mm {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _, ser::Error as _};
    use time::{Time, format_description::BorrowedFormatItem, macros::format_description};

    const FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

    pub fn serialize<S: Serializer>(value: &Option<Time>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(at) => {
                let text = at.format(FORMAT).map_err(S::Error::custom)?;
                serializer.serialize_str(&text)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Time>, D::Error> {
        let text = Option::<String>::deserialize(deserializer)?;
        match text.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => Time::parse(text, FORMAT).map(Some).map_err(D::Error::custom),
        }
    }
}
